mod api;
mod use_availability;
mod use_session;

pub use api::*;
pub use use_availability::use_availability;
pub use use_session::{login, logout, use_session, use_wallet_restore};
