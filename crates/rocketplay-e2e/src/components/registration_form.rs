// Registration modal: credential inputs, consent checkboxes, and the
// auto-detected country/currency pair.

use tracing::info;

use playwright_rs::Locator;

use crate::assertions::Assertions;
use crate::error::{Error, Result};
use crate::fixtures::{EXPECTED_COUNTRY, EXPECTED_CURRENCY};
use crate::logging::log_step;
use crate::pages::BasePage;

use super::Header;

pub struct RegistrationForm {
    base: BasePage,
    header: Header,
    pub modal_container: Locator,
    pub email_input: Locator,
    pub password_input: Locator,
    pub register_button: Locator,
    pub newsletter_checkbox: Locator,
    pub age_confirm_checkbox: Locator,
    pub country_selector: Locator,
    pub currency_display: Locator,
    pub password_visibility_toggle: Locator,
    pub account_created_popup: Locator,
}

impl RegistrationForm {
    pub async fn new(base: BasePage) -> Self {
        let page = base.page().clone();
        Self {
            header: Header::new(base.clone()).await,
            modal_container: page.locator(".modal-sign-up").await,
            email_input: page
                .locator("[data-test=\"registration__input--email\"]")
                .await,
            password_input: page
                .locator("[data-test=\"registration__input--password\"]")
                .await,
            register_button: page
                .locator("[data-test=\"register-button\"], .modal-sign-up button[type=\"submit\"]")
                .await,
            newsletter_checkbox: page.locator("[name=\"acceptReceiveEmail\"]").await,
            age_confirm_checkbox: page.locator("[name=\"acceptTerms\"]").await,
            country_selector: page
                .locator("[data-test=\"registration__select-country\"]")
                .await,
            currency_display: page
                .locator("[data-test=\"registration__select-currency\"]")
                .await,
            password_visibility_toggle: page.locator(".password-field__icon").await,
            account_created_popup: page.locator(".account-created-popup").await,
            base,
        }
    }

    /// Opens the site, clicks the sign-up button, and waits for the modal.
    pub async fn go_to_registration_form(&self) -> Result<()> {
        log_step("Navigating to registration form");
        self.base.navigate().await?;
        self.base.click_when_ready(&self.header.sign_up_button, None).await?;
        self.base
            .wait_for_visible(&self.modal_container, None)
            .await
    }

    /// Fills email and password and confirms the age checkbox.
    pub async fn fill_registration_form(&self, email: &str, password: &str) -> Result<()> {
        info!("Filling registration form");
        self.base.fill_when_ready(&self.email_input, email, None).await?;
        self.base
            .fill_when_ready(&self.password_input, password, None)
            .await?;
        self.age_confirm_checkbox.check(None).await?;
        Ok(())
    }

    pub async fn toggle_password_visibility(&self) -> Result<()> {
        info!("Toggling password visibility");
        self.base
            .click_when_ready(&self.password_visibility_toggle, None)
            .await
    }

    /// The password input is masked (`type="password"`).
    pub async fn verify_password_hidden(&self) -> Result<()> {
        self.verify_password_input_type("password").await
    }

    /// The password input shows its text (`type="text"`).
    pub async fn verify_password_visible(&self) -> Result<()> {
        self.verify_password_input_type("text").await
    }

    async fn verify_password_input_type(&self, expected: &str) -> Result<()> {
        let actual = self.password_input.get_attribute("type").await?;
        if actual.as_deref() == Some(expected) {
            Ok(())
        } else {
            Err(Error::Assertion(format!(
                "Expected password input type '{expected}', got {actual:?}"
            )))
        }
    }

    /// Checks the age confirmation checkbox if it is not already checked.
    pub async fn confirm_age(&self) -> Result<()> {
        info!("Confirming age (18+)");
        if !self.age_confirm_checkbox.is_checked().await? {
            self.age_confirm_checkbox.check(None).await?;
        }
        Ok(())
    }

    pub async fn verify_newsletter_status(&self, should_be_checked: bool) -> Result<()> {
        let state = if should_be_checked { "checked" } else { "unchecked" };
        info!("Verifying newsletter checkbox is {state}");
        Assertions::checkbox_is_checked(
            &self.newsletter_checkbox,
            should_be_checked,
            &format!("Newsletter checkbox is {state}"),
        )
        .await
    }

    pub async fn verify_age_confirm_status(&self, should_be_checked: bool) -> Result<()> {
        let state = if should_be_checked { "checked" } else { "unchecked" };
        info!("Verifying age confirmation checkbox is {state}");
        Assertions::checkbox_is_checked(
            &self.age_confirm_checkbox,
            should_be_checked,
            &format!("Age confirmation checkbox is {state}"),
        )
        .await
    }

    pub async fn current_country(&self) -> Result<String> {
        Ok(self.country_selector.inner_text().await?)
    }

    pub async fn current_currency(&self) -> Result<String> {
        Ok(self.currency_display.inner_text().await?)
    }

    pub async fn verify_country_and_currency(
        &self,
        expected_country: &str,
        expected_currency: &str,
    ) -> Result<()> {
        info!("Verifying country is {expected_country} and currency is {expected_currency}");
        Assertions::has_text(
            &self.country_selector,
            expected_country,
            &format!("Country is correctly detected as {expected_country}"),
        )
        .await?;
        Assertions::has_text(
            &self.currency_display,
            expected_currency,
            &format!("Currency is correctly set to {expected_currency}"),
        )
        .await
    }

    /// The geolocated session must show Canada/CAD before submission.
    pub async fn verify_canadian_localization(&self) -> Result<()> {
        log_step("Verifying Canadian localization");
        self.verify_country_and_currency(EXPECTED_COUNTRY, EXPECTED_CURRENCY)
            .await
    }

    /// Default consent states: newsletter off, age confirmation on (it was
    /// checked while filling the form).
    pub async fn verify_checkbox_states(&self) -> Result<()> {
        log_step("Verifying default checkbox states");
        self.verify_newsletter_status(false).await?;
        self.verify_age_confirm_status(true).await
    }

    pub async fn submit_registration(&self) -> Result<()> {
        info!("Submitting registration form");
        self.base.click_when_ready(&self.register_button, None).await
    }

    pub async fn verify_account_created(&self) -> Result<()> {
        log_step("Verifying account created popup is visible");
        Assertions::is_visible(&self.account_created_popup, "Account created popup shown").await
    }
}
