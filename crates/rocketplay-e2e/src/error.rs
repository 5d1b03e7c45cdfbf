// Error types for the test suite.
//
// Three failure classes matter to a test: a bounded wait that never held
// (Timeout), observed state diverging from expected state (Assertion), and a
// page that never loaded (Navigation). Everything else the driver reports is
// passed through unchanged.

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the browser
#[derive(Debug, Error)]
pub enum Error {
    /// A waited-for condition (visibility, URL match, value match) did not
    /// hold within its timeout
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Observed page state diverged from the expected state
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// The driver failed to load a target URL
    #[error("Navigation to '{url}' failed: {source}")]
    Navigation {
        url: String,
        #[source]
        source: playwright_rs::Error,
    },

    /// A malformed environment variable
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Any other driver-level failure, passed through unchanged
    #[error(transparent)]
    Driver(playwright_rs::Error),
}

// Route the driver's wait/assertion failures into the suite taxonomy so
// callers can match on what went wrong rather than on driver internals.
// Messages are carried unchanged.
impl From<playwright_rs::Error> for Error {
    fn from(err: playwright_rs::Error) -> Self {
        match err {
            playwright_rs::Error::AssertionTimeout(msg) => Error::Assertion(msg),
            playwright_rs::Error::Timeout(msg) => Error::Timeout(msg),
            playwright_rs::Error::NavigationTimeout { url, duration_ms } => Error::Navigation {
                url: url.clone(),
                source: playwright_rs::Error::NavigationTimeout { url, duration_ms },
            },
            other => Error::Driver(other),
        }
    }
}
