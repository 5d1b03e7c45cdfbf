// Personal profile form: state, gender, birth date, and the profile-page
// logout action.

use playwright_rs::Locator;
use tracing::info;

use crate::assertions::Assertions;
use crate::error::Result;
use crate::pages::BasePage;

pub struct PersonalProfileForm {
    base: BasePage,
    pub state_dropdown: Locator,
    pub ontario_option: Locator,
    pub gender_radio_male: Locator,
    pub birth_day_input: Locator,
    pub birth_month_input: Locator,
    pub birth_year_input: Locator,
    pub save_button: Locator,
    pub logout_button: Locator,
}

impl PersonalProfileForm {
    pub async fn new(base: BasePage) -> Self {
        let page = base.page().clone();
        Self {
            state_dropdown: page
                .locator("[data-test=\"profile-main-edit__select--state\"]")
                .await,
            ontario_option: page.locator("[title=\"Ontario\"]").await,
            gender_radio_male: page
                .locator("[data-test=\"profile-main-edit__input--gender-male\"]")
                .await,
            birth_day_input: page
                .locator("[data-test=\"birthday-edit__input--birthday-day\"]")
                .await,
            birth_month_input: page
                .locator("[data-test=\"birthday-edit__input--birthday-month\"]")
                .await,
            birth_year_input: page
                .locator("[data-test=\"birthday-edit__input--birthday-year\"]")
                .await,
            save_button: page.locator(".profile-main-edit [type=\"submit\"]").await,
            logout_button: page
                .locator(".profile-main__exit [data-test=\"profile__action--exit\"]")
                .await,
            base,
        }
    }

    /// Opens the state dropdown and picks Ontario.
    pub async fn select_ontario_state(&self) -> Result<()> {
        info!("Selecting Ontario state");
        self.base.click_when_ready(&self.state_dropdown, None).await?;
        self.base
            .click_when_ready(&self.ontario_option.first(), None)
            .await
    }

    pub async fn select_gender(&self) -> Result<()> {
        info!("Selecting gender: male");
        self.base.click_when_ready(&self.gender_radio_male, None).await
    }

    pub async fn set_birth_date(&self, day: &str, month: &str, year: &str) -> Result<()> {
        info!("Setting birth date: {day}/{month}/{year}");
        self.base.fill_when_ready(&self.birth_day_input, day, None).await?;
        self.base
            .fill_when_ready(&self.birth_month_input, month, None)
            .await?;
        self.base
            .fill_when_ready(&self.birth_year_input, year, None)
            .await
    }

    pub async fn save_profile(&self) -> Result<()> {
        info!("Saving profile changes");
        self.base.click_when_ready(&self.save_button, None).await
    }

    /// Every saved field reads back as expected.
    pub async fn verify_profile_data(
        &self,
        expected_state: &str,
        expected_gender: bool,
        birth_day: &str,
        birth_month: &str,
        birth_year: &str,
    ) -> Result<()> {
        info!("Verifying profile data");
        Assertions::has_text(
            &self.state_dropdown,
            expected_state,
            "State is correctly saved",
        )
        .await?;
        Assertions::checkbox_is_checked(
            &self.gender_radio_male,
            expected_gender,
            "Gender is correctly saved",
        )
        .await?;
        Assertions::has_value(&self.birth_day_input, birth_day, "Birth day is correctly saved")
            .await?;
        Assertions::has_value(
            &self.birth_month_input,
            birth_month,
            "Birth month is correctly saved",
        )
        .await?;
        Assertions::has_value(
            &self.birth_year_input,
            birth_year,
            "Birth year is correctly saved",
        )
        .await
    }

    /// Logs out through the profile page's exit action.
    pub async fn logout(&self) -> Result<()> {
        info!("Logging out from profile page");
        self.base.click_when_ready(&self.logout_button, None).await
    }
}
