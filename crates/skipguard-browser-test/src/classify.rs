//! CSP parser noise filtering for "no JavaScript errors" assertions.
//!
//! The browser test harness ships a content-security-policy parser that logs
//! `CSP Parser Error: ...` to the console on perfectly valid pages. Those
//! lines are dropped; any other error still fails the assertion.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{AssertionFailure, PageFailure, Result};
use crate::page::JsErrorAssertion;

/// Literal text every CSP parser error carries.
pub const CSP_MARKER: &str = "CSP Parser Error";

/// Header of the failure raised for the errors that survive filtering.
pub const REAL_ERRORS_HEADER: &str = "Expected no JavaScript errors on the page, but found:";

static CSP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)CSP.*Parser.*Error").expect("static pattern is valid"));

/// A `- <error>` line.
static BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*- (.+)$").expect("static pattern is valid"));

/// Classification of a single reported error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Spurious output from the harness's CSP parser.
    CspNoise,
    /// Anything else.
    RealError,
}

/// Classifies one error text.
#[must_use]
pub fn classify(text: &str) -> ErrorClass {
    if text.contains(CSP_MARKER) || CSP_PATTERN.is_match(text) {
        ErrorClass::CspNoise
    } else {
        ErrorClass::RealError
    }
}

fn is_csp_noise(text: &str) -> bool {
    classify(text) == ErrorClass::CspNoise
}

/// Splits an assertion message into its bulleted error lines.
#[must_use]
pub fn bulleted_errors(message: &str) -> Vec<&str> {
    BULLET
        .captures_iter(message)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str().trim_end())
        .collect()
}

/// Decides whether a failed "no JavaScript errors" assertion should stand.
///
/// Returns `Ok(())` when every reported error is CSP noise, or when the
/// message mentions the CSP parser but carries no bulleted list. Returns the
/// original failure untouched when the message never mentions the CSP
/// parser, and a new failure listing only the real errors otherwise.
///
/// # Errors
///
/// The failure that should be reported to the test framework.
pub fn filter_csp_noise(failure: AssertionFailure) -> std::result::Result<(), AssertionFailure> {
    if !is_csp_noise(&failure.message) {
        return Err(failure);
    }

    let errors = bulleted_errors(&failure.message);
    if errors.is_empty() {
        debug!("CSP parser error without an error list, ignoring");
        return Ok(());
    }

    let real: Vec<&str> = errors.into_iter().filter(|error| !is_csp_noise(error)).collect();
    if real.is_empty() {
        debug!("all reported JavaScript errors were CSP parser noise");
        return Ok(());
    }

    let mut message = REAL_ERRORS_HEADER.to_string();
    for error in &real {
        message.push_str("\n- ");
        message.push_str(error);
    }
    debug!(real = real.len(), "JavaScript errors remain after dropping CSP noise");
    Err(AssertionFailure::new(message))
}

/// Asserts `page` has no JavaScript errors other than CSP parser noise.
///
/// Returns the page on success so calls can be chained. Failures that are not
/// assertion failures are returned as they are.
///
/// # Errors
///
/// A [`PageFailure`] when real errors were reported or the page could not be
/// queried.
pub fn assert_no_javascript_errors_except_csp<P: JsErrorAssertion>(page: P) -> Result<P> {
    match page.assert_no_javascript_errors() {
        Ok(()) => Ok(page),
        Err(PageFailure::Assertion(failure)) => match filter_csp_noise(failure) {
            Ok(()) => Ok(page),
            Err(failure) => Err(PageFailure::Assertion(failure)),
        },
        Err(other) => Err(other),
    }
}
