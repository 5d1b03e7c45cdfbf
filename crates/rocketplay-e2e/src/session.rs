// Browser session bootstrap.
//
// One chromium instance, one context, one page per test run; every operation
// in the suite is a sequential await against that page. The context emulates
// a Canadian visitor (locale, timezone, Toronto geolocation) because the
// registration flow must auto-detect Canada/CAD.

use playwright_rs::{
    Browser, BrowserContext, BrowserContextOptions, Geolocation, LaunchOptions, Page, Playwright,
};
use tracing::info;

use crate::config::{self, Environment};
use crate::error::Result;

/// Owns the browser stack for one test run.
pub struct Session {
    playwright: Playwright,
    browser: Browser,
    context: BrowserContext,
    page: Page,
}

impl Session {
    /// Launches chromium and opens a Canada-geolocated page.
    pub async fn launch(env: &Environment) -> Result<Self> {
        info!(headless = env.ci_headless, "Launching chromium");
        let playwright = Playwright::launch().await?;
        let browser = playwright
            .chromium()
            .launch_with_options(LaunchOptions::new().headless(env.ci_headless))
            .await?;

        let (latitude, longitude) = config::GEOLOCATION;
        let options = BrowserContextOptions::builder()
            .locale(config::LOCALE.to_string())
            .timezone_id(config::TIMEZONE_ID.to_string())
            .geolocation(Geolocation {
                latitude,
                longitude,
                accuracy: None,
            })
            .permissions(vec!["geolocation".to_string()])
            .ignore_https_errors(true)
            .build();

        let context = browser.new_context_with_options(options).await?;
        let page = context.new_page().await?;

        Ok(Self {
            playwright,
            browser,
            context,
            page,
        })
    }

    /// The live page handle. Cheap to clone.
    pub fn page(&self) -> Page {
        self.page.clone()
    }

    /// Shuts the browser stack down.
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        self.context.close().await?;
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}
