mod home;
mod metaverse;
mod not_found;
mod welcome;

pub use home::Home;
pub use metaverse::Metaverse;
pub use not_found::NotFound;
pub use welcome::Welcome;
