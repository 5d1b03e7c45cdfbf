// Site header: auth buttons and the logged-in user dropdown.

use playwright_rs::Locator;
use tracing::info;

use crate::error::Result;
use crate::pages::BasePage;

pub struct Header {
    base: BasePage,
    pub sign_up_button: Locator,
    pub sign_in_button: Locator,
    pub user_nickname: Locator,
    pub profile_button: Locator,
    pub logout_button: Locator,
}

impl Header {
    pub async fn new(base: BasePage) -> Self {
        let page = base.page().clone();
        Self {
            sign_up_button: page
                .locator(".header__auth [data-test=\"open-sign-up__button\"]")
                .await,
            sign_in_button: page
                .locator(".header__auth [data-test=\"open-sign-in__button\"]")
                .await,
            user_nickname: page.locator("[data-test=\"header__user-nickname\"]").await,
            profile_button: page
                .locator("[data-test=\"dropdown-balance__profile-btn\"]")
                .await,
            logout_button: page
                .locator("[data-test=\"logout-button\"], .logout-button")
                .await,
            base,
        }
    }

    /// Opens the logged-in user's profile page via the header dropdown.
    pub async fn go_to_profile(&self) -> Result<()> {
        info!("Navigating to user profile");
        self.base.click_when_ready(&self.user_nickname, None).await?;
        self.base.click_when_ready(&self.profile_button, None).await
    }

    pub async fn is_user_logged_in(&self) -> Result<bool> {
        Ok(self.user_nickname.is_visible().await?)
    }
}
