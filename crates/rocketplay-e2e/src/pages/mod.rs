//! Page objects: full-page workflow APIs composed from components.

mod base;
mod home;
mod profile;

pub use base::{BasePage, DEFAULT_WAIT_TIMEOUT, POLL_INTERVAL};
pub use home::HomePage;
pub use profile::ProfilePage;
