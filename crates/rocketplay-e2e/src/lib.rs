//! rocketplay-e2e: browser test suite for RocketPlay registration, login,
//! and profile management.
//!
//! Page-object layering over the `playwright-rs` driver:
//!
//! - [`pages::BasePage`]: shared wait-then-act primitives (bounded polling,
//!   no retry beyond the single wait, failures propagate unhandled)
//! - [`assertions::Assertions`]: polling checks that log a human-readable
//!   line and re-raise the original error
//! - [`components`]: locator facades for one UI region each (header, forms)
//! - [`pages`]: full-page workflows composed from components
//! - [`fixtures`]: fresh synthetic user records per run plus static
//!   expected values
//!
//! The scenarios themselves live under `tests/`, driven against an
//! in-process mock of the site so runs are deterministic and offline.
//!
//! # Example
//!
//! ```ignore
//! use rocketplay_e2e::config::Environment;
//! use rocketplay_e2e::fixtures::RandomDataGenerator;
//! use rocketplay_e2e::pages::HomePage;
//! use rocketplay_e2e::session::Session;
//!
//! #[tokio::main]
//! async fn main() -> rocketplay_e2e::Result<()> {
//!     let env = Environment::from_env()?;
//!     rocketplay_e2e::logging::init(&env);
//!
//!     let session = Session::launch(&env).await?;
//!     let home = HomePage::new(session.page(), env.clone()).await;
//!     let user = RandomDataGenerator::generate_user_data();
//!     home.login_user(&user.email, &user.password).await?;
//!     session.close().await
//! }
//! ```

pub mod assertions;
pub mod components;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod pages;
pub mod session;

pub use error::{Error, Result};
