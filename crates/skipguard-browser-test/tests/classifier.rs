//! End-to-end behaviour of the CSP-tolerant JavaScript error assertion.

use skipguard_browser_test::{
    assert_no_javascript_errors_except_csp, AssertionFailure, ConsoleCapture, ConsoleLevel,
    ConsoleMessage, JsErrorAssertion, PageFailure,
};
use std::cell::Cell;

/// A page whose assertion fails with a fixed message, counting calls.
#[derive(Debug)]
struct ScriptedPage {
    message: Option<&'static str>,
    calls: Cell<usize>,
}

impl ScriptedPage {
    fn failing(message: &'static str) -> Self {
        Self {
            message: Some(message),
            calls: Cell::new(0),
        }
    }

    fn clean() -> Self {
        Self {
            message: None,
            calls: Cell::new(0),
        }
    }
}

impl JsErrorAssertion for ScriptedPage {
    fn assert_no_javascript_errors(&self) -> skipguard_browser_test::Result<()> {
        self.calls.set(self.calls.get() + 1);
        match self.message {
            Some(message) => Err(AssertionFailure::new(message).into()),
            None => Ok(()),
        }
    }
}

/// A page whose driver is broken.
#[derive(Debug)]
struct BrokenPage;

impl JsErrorAssertion for BrokenPage {
    fn assert_no_javascript_errors(&self) -> skipguard_browser_test::Result<()> {
        Err(PageFailure::other("browser process terminated unexpectedly"))
    }
}

#[test]
fn clean_page_is_returned() {
    let page = ScriptedPage::clean();
    let returned = assert_no_javascript_errors_except_csp(&page).unwrap();
    assert!(std::ptr::eq(returned, &page));
    assert_eq!(page.calls.get(), 1);
}

#[test]
fn bare_csp_message_passes() {
    let page = ScriptedPage::failing("CSP Parser Error: Unexpected token: input");
    let returned = assert_no_javascript_errors_except_csp(&page).unwrap();
    assert!(std::ptr::eq(returned, &page));
}

#[test]
fn real_errors_survive_filtering() {
    let page = ScriptedPage::failing("- Real bug\n- CSP Parser Error: x");
    let failure = assert_no_javascript_errors_except_csp(&page).unwrap_err();

    let message = &failure.as_assertion().unwrap().message;
    assert!(message.contains("Real bug"));
    assert!(!message.contains("CSP"));
    assert_eq!(
        message,
        "Expected no JavaScript errors on the page, but found:\n- Real bug"
    );
}

#[test]
fn unrelated_failure_is_rethrown_unchanged() {
    let original = "Expected no JavaScript errors on the page, but found 1: Uncaught ReferenceError: $ is not defined";
    let page = ScriptedPage::failing(original);
    let failure = assert_no_javascript_errors_except_csp(&page).unwrap_err();

    assert_eq!(failure.as_assertion().unwrap().message, original);
}

#[test]
fn non_assertion_failures_pass_through() {
    let failure = assert_no_javascript_errors_except_csp(BrokenPage).unwrap_err();
    assert!(matches!(failure, PageFailure::Other(_)));
    assert!(failure.to_string().contains("browser process terminated unexpectedly"));
}

#[test]
fn console_capture_with_only_csp_noise_passes() {
    let console = ConsoleCapture::new();
    console.push(ConsoleMessage::new(ConsoleLevel::Error, "CSP Parser Error: Unexpected token: input"));
    console.push(ConsoleMessage::new(
        ConsoleLevel::Error,
        "Uncaught Error: CSP Parser Error: Expected PUNCTUATION \":\" but got PUNCTUATION \"(\"",
    ));

    assert!(console.assert_no_javascript_errors().is_err());
    assert!(assert_no_javascript_errors_except_csp(&console).is_ok());
}

#[test]
fn console_capture_single_csp_error_on_summary_line_passes() {
    let console = ConsoleCapture::new();
    console.push(ConsoleMessage::new(ConsoleLevel::Error, "Uncaught Error: CSP Parser Error: bad"));

    assert!(assert_no_javascript_errors_except_csp(console).is_ok());
}

#[test]
fn console_capture_mixed_errors_fail_with_real_ones_only() {
    let console = ConsoleCapture::new();
    console.push(ConsoleMessage::new(ConsoleLevel::Error, "CSP Parser Error: x"));
    console.push(ConsoleMessage::new(ConsoleLevel::Error, "Uncaught TypeError: chirps is null"));
    console.push(ConsoleMessage::new(ConsoleLevel::Log, "ready"));

    let failure = assert_no_javascript_errors_except_csp(&console).unwrap_err();
    assert_eq!(
        failure.to_string(),
        "Expected no JavaScript errors on the page, but found:\n- Uncaught TypeError: chirps is null"
    );
}
