// Component-level coverage for actions the main journey does not take:
// password visibility toggling, age-confirmation idempotence, state
// selection, and birth-date entry.


use std::time::Duration;

use rocketplay_e2e::components::{PersonalProfileForm, RegistrationForm};
use rocketplay_e2e::config::Environment;
use rocketplay_e2e::fixtures::{profile_birth_date, EXPECTED_PROVINCE};
use rocketplay_e2e::pages::BasePage;
use rocketplay_e2e::session::Session;
use site_server::SiteServer;

fn test_env(base_url: String) -> Environment {
    Environment {
        base_url,
        default_timeout: Duration::from_secs(30),
        navigation_timeout: Duration::from_secs(60),
        log_level: "info".to_string(),
        ci_headless: true,
        ci_workers: 1,
    }
}

#[tokio::test]
async fn password_visibility_toggle_flips_input_type() {
    let server = SiteServer::start().await;
    let env = test_env(server.url());
    let session = Session::launch(&env)
        .await
        .expect("Failed to launch browser session");
    let base = BasePage::new(session.page(), env);

    let form = RegistrationForm::new(base).await;
    form.go_to_registration_form()
        .await
        .expect("Failed to open registration form");

    form.verify_password_hidden()
        .await
        .expect("password should start masked");
    form.toggle_password_visibility()
        .await
        .expect("Failed to toggle visibility");
    form.verify_password_visible()
        .await
        .expect("password should be revealed after toggle");
    form.toggle_password_visibility()
        .await
        .expect("Failed to toggle visibility back");
    form.verify_password_hidden()
        .await
        .expect("password should be masked again");

    session.close().await.expect("Failed to close session");
    server.shutdown();
}

#[tokio::test]
async fn confirm_age_is_idempotent() {
    let server = SiteServer::start().await;
    let env = test_env(server.url());
    let session = Session::launch(&env)
        .await
        .expect("Failed to launch browser session");
    let base = BasePage::new(session.page(), env);

    let form = RegistrationForm::new(base).await;
    form.go_to_registration_form()
        .await
        .expect("Failed to open registration form");

    form.confirm_age().await.expect("first confirm failed");
    form.verify_age_confirm_status(true)
        .await
        .expect("checkbox should be checked");
    // Confirming again must not uncheck it.
    form.confirm_age().await.expect("second confirm failed");
    form.verify_age_confirm_status(true)
        .await
        .expect("checkbox should stay checked");

    session.close().await.expect("Failed to close session");
    server.shutdown();
}

#[tokio::test]
async fn profile_form_supports_state_and_birth_date_entry() {
    let server = SiteServer::start().await;
    let env = test_env(server.url());
    let session = Session::launch(&env)
        .await
        .expect("Failed to launch browser session");
    let base = BasePage::new(session.page(), env.clone());
    base.navigate_to("/profile")
        .await
        .expect("Failed to open profile page");

    let form = PersonalProfileForm::new(base).await;

    form.select_ontario_state()
        .await
        .expect("Failed to pick Ontario");
    form.select_gender().await.expect("Failed to pick gender");
    let birth = profile_birth_date();
    form.set_birth_date(&birth.day, &birth.month, &birth.year)
        .await
        .expect("Failed to fill birth date");
    form.verify_profile_data(EXPECTED_PROVINCE, true, &birth.day, &birth.month, &birth.year)
        .await
        .expect("entered data should read back");

    session.close().await.expect("Failed to close session");
    server.shutdown();
}
