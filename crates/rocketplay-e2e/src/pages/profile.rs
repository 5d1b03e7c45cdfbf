// Profile page: thin sequencing over the personal profile form.

use playwright_rs::Page;

use crate::assertions::Assertions;
use crate::components::PersonalProfileForm;
use crate::config::Environment;
use crate::error::Result;
use crate::logging::log_step;

use super::BasePage;

pub struct ProfilePage {
    base: BasePage,
    pub profile_form: PersonalProfileForm,
}

impl ProfilePage {
    pub async fn new(page: Page, env: Environment) -> Self {
        let base = BasePage::new(page, env);
        Self {
            profile_form: PersonalProfileForm::new(base.clone()).await,
            base,
        }
    }

    pub async fn navigate(&self) -> Result<()> {
        log_step("Navigating to profile page");
        self.base.navigate_to("/profile").await?;
        self.base.wait_for_page_load().await
    }

    /// URL-level check that the profile page is open. Idempotent: repeated
    /// calls without intervening navigation give the same verdict.
    pub async fn verify_profile_page_loaded(&self) -> Result<()> {
        log_step("Verifying profile page loaded");
        Assertions::url_contains(self.base.page(), "profile", "User profile page is loaded").await
    }

    pub async fn select_ontario_state(&self) -> Result<()> {
        log_step("Selecting Ontario state");
        self.profile_form.select_ontario_state().await
    }

    pub async fn set_gender(&self) -> Result<()> {
        log_step("Setting user gender");
        self.profile_form.select_gender().await
    }

    pub async fn set_birth_date(&self, day: &str, month: &str, year: &str) -> Result<()> {
        log_step("Setting birth date");
        self.profile_form.set_birth_date(day, month, year).await
    }

    pub async fn save_profile(&self) -> Result<()> {
        log_step("Saving profile changes");
        self.profile_form.save_profile().await
    }

    pub async fn verify_profile_data(
        &self,
        state: &str,
        gender: bool,
        day: &str,
        month: &str,
        year: &str,
    ) -> Result<()> {
        log_step("Verifying profile data saved correctly");
        self.profile_form
            .verify_profile_data(state, gender, day, month, year)
            .await
    }

    pub async fn logout(&self) -> Result<()> {
        log_step("Logging out from profile page");
        self.profile_form.logout().await
    }
}
