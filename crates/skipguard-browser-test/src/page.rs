//! The page seam the classifier asserts against.

use crate::error::Result;

/// A browser page (or response wrapper) that can assert its console is free
/// of JavaScript errors.
///
/// Implementations return [`crate::PageFailure::Assertion`] when errors were
/// recorded, with a message of the form
/// `Expected no JavaScript errors on the page, but found <N>: <error>` or
/// `... but found <N>:` followed by one `- <error>` line per error.
pub trait JsErrorAssertion {
    /// Fails if the page reported any JavaScript errors.
    fn assert_no_javascript_errors(&self) -> Result<()>;
}

impl<P: JsErrorAssertion + ?Sized> JsErrorAssertion for &P {
    fn assert_no_javascript_errors(&self) -> Result<()> {
        (**self).assert_no_javascript_errors()
    }
}
