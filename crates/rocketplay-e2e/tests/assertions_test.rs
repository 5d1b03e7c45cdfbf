// Assertion checks against the mock site's static widgets.


use std::time::Duration;

use rocketplay_e2e::assertions::Assertions;
use rocketplay_e2e::config::Environment;
use rocketplay_e2e::error::Error;
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

async fn open_widgets_page(server: &SiteServer) -> (Session, BasePage) {
    let env = test_env(server.url());
    let session = Session::launch(&env)
        .await
        .expect("Failed to launch browser session");
    let base = BasePage::new(session.page(), env);
    base.navigate_to("/widgets.html")
        .await
        .expect("Failed to open widgets page");
    (session, base)
}

#[tokio::test]
async fn checkbox_check_is_symmetric_for_both_states() {
    let server = SiteServer::start().await;
    let (session, base) = open_widgets_page(&server).await;
    let page = base.page().clone();

    let checked = page.locator("#checked-box").await;
    let unchecked = page.locator("#unchecked-box").await;

    Assertions::checkbox_is_checked(&checked, true, "pre-checked box reads checked")
        .await
        .expect("checked box should pass the positive check");
    Assertions::checkbox_is_checked(&unchecked, false, "untouched box reads unchecked")
        .await
        .expect("unchecked box should pass the negative check");

    // The mismatched polarity must fail as an assertion, not vanish.
    let err = Assertions::checkbox_is_checked(&unchecked, true, "wrong polarity")
        .await
        .expect_err("mismatched state must fail");
    assert!(matches!(err, Error::Assertion(_)));

    session.close().await.expect("Failed to close session");
    server.shutdown();
}

#[tokio::test]
async fn text_value_and_visibility_checks_pass_on_matching_state() {
    let server = SiteServer::start().await;
    let (session, base) = open_widgets_page(&server).await;
    let page = base.page().clone();

    let greeting = page.locator("#greeting").await;
    Assertions::is_visible(&greeting, "greeting is visible")
        .await
        .expect("visible element should pass");
    Assertions::has_text(&greeting, "RocketPlay", "greeting names the site")
        .await
        .expect("substring match should pass");

    let filled = page.locator("#filled").await;
    Assertions::has_value(&filled, "prefilled", "input keeps its value")
        .await
        .expect("exact value should pass");

    session.close().await.expect("Failed to close session");
    server.shutdown();
}

#[tokio::test]
async fn failed_visibility_check_propagates_the_original_error() {
    let server = SiteServer::start().await;
    let (session, base) = open_widgets_page(&server).await;
    let page = base.page().clone();

    let hidden = page.locator("#hidden").await;
    let err = Assertions::is_visible(&hidden, "hidden element visible")
        .await
        .expect_err("hidden element must fail the visibility check");
    // The driver's message comes through unchanged, selector included.
    assert!(matches!(err, Error::Assertion(msg) if msg.contains("#hidden")));

    session.close().await.expect("Failed to close session");
    server.shutdown();
}

#[tokio::test]
async fn url_contains_matches_the_current_page() {
    let server = SiteServer::start().await;
    let (session, base) = open_widgets_page(&server).await;
    let page = base.page().clone();

    Assertions::url_contains(&page, "widgets", "widgets page is open")
        .await
        .expect("URL fragment should match");

    let err = Assertions::url_contains(&page, "profile", "wrong page")
        .await
        .expect_err("non-matching fragment must fail");
    assert!(matches!(err, Error::Assertion(_)));

    session.close().await.expect("Failed to close session");
    server.shutdown();
}
