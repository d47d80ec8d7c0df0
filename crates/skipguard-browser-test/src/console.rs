//! Console message capture.
//!
//! `ConsoleCapture` accumulates messages reported by whatever drives the
//! browser and implements [`JsErrorAssertion`], producing the same failure
//! messages the browser test framework does. Messages are kept behind
//! `Arc<Mutex<..>>` so the capture can be cloned into an event handler while
//! the test keeps querying it.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::SystemTime;

use crate::error::{AssertionFailure, Result};
use crate::page::JsErrorAssertion;

/// Header shared by every "no JavaScript errors" failure message.
pub const NO_JS_ERRORS_HEADER: &str = "Expected no JavaScript errors on the page, but found";

/// The severity level of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsoleLevel {
    /// `console.log()`
    Log,
    /// `console.info()`
    Info,
    /// `console.warn()`
    Warning,
    /// `console.error()` and uncaught exceptions
    Error,
    /// `console.debug()`
    Debug,
    /// Catch-all for other console APIs
    Other,
}

impl ConsoleLevel {
    /// Returns true if this is an error-level message.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ConsoleLevel::Error)
    }
}

/// A captured console message.
#[derive(Debug, Clone)]
pub struct ConsoleMessage {
    /// Severity level
    pub level: ConsoleLevel,

    /// The formatted message text.
    pub text: String,

    /// When the message was captured.
    pub timestamp: SystemTime,

    /// Source location if available (e.g., "app.js:42:10").
    pub source: Option<String>,
}

impl ConsoleMessage {
    /// Creates a new console message stamped with the current time.
    #[must_use]
    pub fn new(level: ConsoleLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            timestamp: SystemTime::now(),
            source: None,
        }
    }

    /// Creates a message with source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Thread-safe console message accumulator.
///
/// Cheap to clone; all clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct ConsoleCapture {
    messages: Arc<Mutex<Vec<ConsoleMessage>>>,
}

impl ConsoleCapture {
    /// Creates a new, empty console capture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message.
    pub fn push(&self, message: ConsoleMessage) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    /// Returns all captured messages as a snapshot.
    #[must_use]
    pub fn messages(&self) -> Vec<ConsoleMessage> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns all error-level messages.
    #[must_use]
    pub fn errors(&self) -> Vec<ConsoleMessage> {
        self.messages()
            .into_iter()
            .filter(|m| m.level.is_error())
            .collect()
    }

    /// Returns the count of error messages.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|m| m.level.is_error())
            .count()
    }

    /// Clears all captured messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the total number of messages captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no messages have been captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Formats the framework's failure message for a list of error texts.
///
/// One error goes on the summary line; several are listed one per line.
#[must_use]
pub fn no_js_errors_message(errors: &[String]) -> String {
    match errors {
        [single] => format!("{NO_JS_ERRORS_HEADER} 1: {single}"),
        _ => {
            let mut message = format!("{NO_JS_ERRORS_HEADER} {}:", errors.len());
            for error in errors {
                message.push_str("\n- ");
                message.push_str(error);
            }
            message
        }
    }
}

impl JsErrorAssertion for ConsoleCapture {
    fn assert_no_javascript_errors(&self) -> Result<()> {
        let errors: Vec<String> = self.errors().into_iter().map(|m| m.text).collect();
        if errors.is_empty() {
            return Ok(());
        }
        Err(AssertionFailure::new(no_js_errors_message(&errors)).into())
    }
}
