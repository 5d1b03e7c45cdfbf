// Home page: entry point for sign-in and sign-up, plus the header state
// checks that tell whether a user is logged in.

use playwright_rs::Page;

use crate::assertions::Assertions;
use crate::components::{Header, LoginForm};
use crate::config::Environment;
use crate::error::Result;
use crate::logging::log_step;

use super::BasePage;

pub struct HomePage {
    base: BasePage,
    pub header: Header,
    pub login_form: LoginForm,
}

impl HomePage {
    pub async fn new(page: Page, env: Environment) -> Self {
        let base = BasePage::new(page, env);
        Self {
            header: Header::new(base.clone()).await,
            login_form: LoginForm::new(base.page()).await,
            base,
        }
    }

    pub async fn navigate(&self) -> Result<()> {
        self.base.navigate().await
    }

    /// Opens the sign-in form, submits the credentials, and asserts the
    /// header nickname shows the account identifier.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<()> {
        log_step("Navigating to login form and logging user in");
        self.base.navigate().await?;
        self.base
            .click_when_ready(&self.header.sign_in_button, None)
            .await?;
        self.base
            .fill_when_ready(&self.login_form.email_input, email, None)
            .await?;
        self.base
            .fill_when_ready(&self.login_form.password_input, password, None)
            .await?;
        self.base
            .click_when_ready(&self.login_form.log_in_button, None)
            .await?;
        Assertions::has_text(&self.header.user_nickname, email, "User logged in successfully")
            .await
    }

    /// Opens the registration form from the header.
    pub async fn go_to_registration_form(&self) -> Result<()> {
        log_step("Navigating to registration form");
        self.base.navigate().await?;
        self.base
            .click_when_ready(&self.header.sign_up_button, None)
            .await
    }

    pub async fn verify_logged_in(&self) -> Result<()> {
        log_step("Verifying user is logged in");
        Assertions::is_visible(&self.header.user_nickname, "User nickname is visible").await
    }

    /// After logout the header must offer sign-in again.
    pub async fn verify_successful_logout(&self) -> Result<()> {
        log_step("Verifying successful logout");
        Assertions::is_visible(
            &self.header.sign_in_button,
            "User is redirected to login page after logout",
        )
        .await
    }
}
