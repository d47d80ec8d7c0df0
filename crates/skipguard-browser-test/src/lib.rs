//! # skipguard-browser-test
//!
//! Browser-test helpers that do not depend on a particular driver:
//!
//! - [`ConsoleCapture`]: accumulates console messages and asserts that none
//!   of them are errors
//! - [`JsErrorAssertion`]: the seam any page type implements to take part
//! - [`assert_no_javascript_errors_except_csp`]: the same assertion with the
//!   harness's CSP parser noise filtered out
//!
//! ## Example
//!
//! ```
//! use skipguard_browser_test::{
//!     assert_no_javascript_errors_except_csp, ConsoleCapture, ConsoleLevel, ConsoleMessage,
//! };
//!
//! let console = ConsoleCapture::new();
//! console.push(ConsoleMessage::new(
//!     ConsoleLevel::Error,
//!     "Uncaught Error: CSP Parser Error: Unexpected token: input",
//! ));
//!
//! assert!(assert_no_javascript_errors_except_csp(&console).is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod classify;
pub mod console;
pub mod error;
pub mod page;

pub use classify::{
    assert_no_javascript_errors_except_csp, classify, filter_csp_noise, ErrorClass, CSP_MARKER,
};
pub use console::{ConsoleCapture, ConsoleLevel, ConsoleMessage};
pub use error::{AssertionFailure, PageFailure, Result};
pub use page::JsErrorAssertion;
