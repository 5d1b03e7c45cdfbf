// Sign-in modal form. Locator facade only; HomePage sequences the actions.

use playwright_rs::{Locator, Page};

pub struct LoginForm {
    pub email_input: Locator,
    pub password_input: Locator,
    pub log_in_button: Locator,
}

impl LoginForm {
    pub async fn new(page: &Page) -> Self {
        Self {
            email_input: page.locator("[data-test=\"login__input--email\"]").await,
            password_input: page.locator("[data-test=\"login__input--password\"]").await,
            log_in_button: page.locator(".modal-sign-in [type=\"submit\"]").await,
        }
    }
}
