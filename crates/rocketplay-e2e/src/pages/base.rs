// Wait-then-act primitives shared by every page object and component.
//
// The driver's locators are lazy and its actions have their own internal
// waits, but nothing in it exposes a bounded "is this visible yet" or "is the
// URL right yet" primitive. BasePage owns those polling loops. Each wait is a
// single bounded poll: on success the action proceeds, on timeout the error
// propagates unhandled to the caller.

use std::time::{Duration, Instant};

use playwright_rs::{GotoOptions, Locator, Page, WaitUntil};
use tracing::info;

use crate::config::Environment;
use crate::error::{Error, Result};

/// Bound for a single element wait when the caller does not override it
pub const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
/// Interval between visibility polls
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared navigation and interaction helper.
///
/// Components hold a clone of this rather than inheriting from it; the only
/// state is the page handle and the environment, both cheap to clone.
#[derive(Clone)]
pub struct BasePage {
    page: Page,
    env: Environment,
}

impl BasePage {
    pub fn new(page: Page, env: Environment) -> Self {
        Self { page, env }
    }

    /// The underlying page handle.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Navigates to the home page and waits for it to settle.
    pub async fn navigate(&self) -> Result<()> {
        info!("Navigating to home page");
        self.navigate_to("/").await?;
        self.wait_for_page_load().await
    }

    /// Navigates to the given URL. Paths get the configured base URL
    /// prefixed; absolute URLs pass through untouched.
    pub async fn navigate_to(&self, url: &str) -> Result<()> {
        let full_url = if url.starts_with('/') {
            format!("{}{}", self.env.base_url.trim_end_matches('/'), url)
        } else {
            url.to_string()
        };
        info!("Navigating to {full_url}");

        let options = GotoOptions::new()
            .timeout(self.env.navigation_timeout)
            .wait_until(WaitUntil::Load);
        self.page
            .goto(&full_url, Some(options))
            .await
            .map_err(|source| Error::Navigation {
                url: full_url,
                source,
            })?;
        Ok(())
    }

    /// Waits until the document reports itself fully loaded.
    pub async fn wait_for_page_load(&self) -> Result<()> {
        info!("Waiting for page to load");
        let start = Instant::now();
        loop {
            let ready = self
                .page
                .evaluate_value("document.readyState === 'complete'")
                .await?;
            if ready == "true" {
                return Ok(());
            }
            if start.elapsed() >= self.env.navigation_timeout {
                return Err(Error::Timeout(format!(
                    "Page did not finish loading within {:?}",
                    self.env.navigation_timeout
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Polls until the element is visible or the timeout elapses.
    pub async fn wait_for_visible(&self, locator: &Locator, timeout: Option<Duration>) -> Result<()> {
        let timeout = timeout.unwrap_or(DEFAULT_WAIT_TIMEOUT);
        let start = Instant::now();
        loop {
            if locator.is_visible().await? {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(Error::Timeout(format!(
                    "Element '{}' did not become visible within {timeout:?}",
                    locator.selector()
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Clicks the element after confirming visibility. The click is never
    /// attempted before `wait_for_visible` resolves.
    pub async fn click_when_ready(&self, locator: &Locator, timeout: Option<Duration>) -> Result<()> {
        self.wait_for_visible(locator, timeout).await?;
        locator.click(None).await?;
        Ok(())
    }

    /// Fills the element after confirming visibility.
    pub async fn fill_when_ready(
        &self,
        locator: &Locator,
        value: &str,
        timeout: Option<Duration>,
    ) -> Result<()> {
        self.wait_for_visible(locator, timeout).await?;
        locator.fill(value, None).await?;
        Ok(())
    }

    /// Selects an option from a drop-down list.
    pub async fn select_option(&self, locator: &Locator, option: &str) -> Result<()> {
        info!("Selecting option: {option}");
        locator.select_option(option, None).await?;
        Ok(())
    }

    /// Polls until the page URL contains the given fragment.
    pub async fn wait_for_url(&self, url_part: &str, timeout: Option<Duration>) -> Result<()> {
        info!("Waiting for URL containing: {url_part}");
        let timeout = timeout.unwrap_or(DEFAULT_WAIT_TIMEOUT);
        let start = Instant::now();
        loop {
            let url = self.page.url();
            if url.contains(url_part) {
                return Ok(());
            }
            if start.elapsed() >= timeout {
                return Err(Error::Timeout(format!(
                    "URL did not contain '{url_part}' within {timeout:?} (last: '{url}')"
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Hands control to the Playwright inspector. Debug aid only.
    pub async fn pause(&self) -> Result<()> {
        self.page.pause().await?;
        Ok(())
    }
}
