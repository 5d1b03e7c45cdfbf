//! Reusable UI-region facades.
//!
//! Each component binds the locators for one region of the page and names the
//! user intentions available there. Components hold a clone of [`BasePage`]
//! for wait-then-act primitives rather than inheriting from it; all real
//! state lives in the live page.
//!
//! [`BasePage`]: crate::pages::BasePage

mod header;
mod login_form;
mod profile_form;
mod registration_form;

pub use header::Header;
pub use login_form::LoginForm;
pub use profile_form::PersonalProfileForm;
pub use registration_form::RegistrationForm;
