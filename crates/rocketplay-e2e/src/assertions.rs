// Polling checks with log-then-propagate semantics.
//
// Every check retries its condition for up to ASSERTION_TIMEOUT, writes a
// `✓ <message>` line on success and a `✗ <message>` line on failure, then
// re-raises the original error unchanged. This is the only place failures are
// annotated with human-readable context; nothing is swallowed and nothing is
// retried beyond the single bounded poll.

use std::time::{Duration, Instant};

use playwright_rs::{expect, Locator, Page};
use tracing::{error, info};

use crate::error::{Error, Result};

/// Bound for every check
pub const ASSERTION_TIMEOUT: Duration = Duration::from_secs(10);
/// Interval between condition polls
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Assertions;

impl Assertions {
    /// The element becomes visible within the timeout.
    pub async fn is_visible(locator: &Locator, message: &str) -> Result<()> {
        let outcome = expect(locator.clone())
            .with_timeout(ASSERTION_TIMEOUT)
            .to_be_visible()
            .await;
        Self::annotate(outcome.map_err(Error::from), message)
    }

    /// The element's visible text contains `text` within the timeout.
    pub async fn has_text(locator: &Locator, text: &str, message: &str) -> Result<()> {
        let outcome = expect(locator.clone())
            .with_timeout(ASSERTION_TIMEOUT)
            .to_contain_text(text)
            .await;
        Self::annotate(outcome.map_err(Error::from), message)
    }

    /// The checkbox (or radio button) reaches the expected checked state
    /// within the timeout. Symmetric for both polarities.
    pub async fn checkbox_is_checked(
        locator: &Locator,
        should_be_checked: bool,
        message: &str,
    ) -> Result<()> {
        let expectation = expect(locator.clone()).with_timeout(ASSERTION_TIMEOUT);
        let outcome = if should_be_checked {
            expectation.to_be_checked().await
        } else {
            expectation.to_be_unchecked().await
        };
        Self::annotate(outcome.map_err(Error::from), message)
    }

    /// The input's value equals `value` within the timeout.
    pub async fn has_value(locator: &Locator, value: &str, message: &str) -> Result<()> {
        let outcome = expect(locator.clone())
            .with_timeout(ASSERTION_TIMEOUT)
            .to_have_value(value)
            .await;
        Self::annotate(outcome.map_err(Error::from), message)
    }

    /// The page URL contains `url_part` within the timeout.
    ///
    /// The driver has no page-level expectation, so this polls `Page::url`
    /// directly.
    pub async fn url_contains(page: &Page, url_part: &str, message: &str) -> Result<()> {
        let start = Instant::now();
        let outcome = loop {
            let url = page.url();
            if url.contains(url_part) {
                break Ok(());
            }
            if start.elapsed() >= ASSERTION_TIMEOUT {
                break Err(Error::Assertion(format!(
                    "Expected URL to contain '{url_part}', but had '{url}' after {ASSERTION_TIMEOUT:?}"
                )));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        };
        Self::annotate(outcome, message)
    }

    fn annotate(outcome: Result<()>, message: &str) -> Result<()> {
        match outcome {
            Ok(()) => {
                info!("✓ {message}");
                Ok(())
            }
            Err(err) => {
                error!("✗ {message}: {err}");
                Err(err)
            }
        }
    }
}
