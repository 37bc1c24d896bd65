mod item_available;
mod item_not_available;
mod layout;
mod wallet_button;

pub use item_available::ItemAvailable;
pub use item_not_available::ItemNotAvailable;
pub use layout::Layout;
pub use wallet_button::WalletButton;
