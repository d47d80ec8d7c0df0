//! One-time append of the runtime helper functions to the test bootstrap.
//!
//! The injected guards call `skipIfRouteMissing()` and friends; those
//! functions live in the bootstrap file (`tests/Pest.php`). The appender adds
//! them exactly once: if the marker function is already declared, the file is
//! left alone.
//!
//! The skip helpers read the route manifest from a path relative to the
//! bootstrap file's directory. That path is written into the helpers when
//! they are appended; see [`HelperAppender::manifest_path`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GuardError, Result};

/// Route, method and starter-kit skip helpers.
pub const SKIP_HELPERS: &str = include_str!("../assets/skip-helpers.php");

/// CSP-tolerant "no JavaScript errors" assertion.
pub const JS_ERROR_HELPERS: &str = include_str!("../assets/js-error-helpers.php");

/// Declaration whose presence means the helpers were already appended.
pub const MARKER: &str = "function skipIfRouteMissing";

/// Stands for the manifest location inside a helper block.
pub const MANIFEST_PLACEHOLDER: &str = "{{ROUTE_MANIFEST}}";

/// Manifest location relative to the bootstrap directory for a stock layout
/// (`tests/Pest.php` reading `tests/Browser/.route-manifest.json`).
pub const DEFAULT_HELPER_MANIFEST: &str = "Browser/.route-manifest.json";

/// What [`HelperAppender::append`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The helpers were written to the bootstrap file.
    Appended,
    /// The marker was found; nothing was written.
    AlreadyApplied,
}

/// Drops the opening tag, the `declare(strict_types=...)` line and blank
/// lines from the top of a PHP source block.
#[must_use]
pub fn strip_preamble(source: &str) -> String {
    let lines: Vec<&str> = source.split('\n').collect();
    let start = lines
        .iter()
        .position(|line| {
            let trimmed = line.trim();
            !(trimmed.is_empty() || trimmed == "<?php" || trimmed.starts_with("declare(strict_types"))
        })
        .unwrap_or(lines.len());
    lines[start..].join("\n")
}

/// Appends helper blocks to a bootstrap file.
#[derive(Debug, Clone)]
pub struct HelperAppender {
    bootstrap: PathBuf,
    blocks: Vec<String>,
    manifest: String,
}

impl HelperAppender {
    /// Creates an appender for `bootstrap` with the built-in helper blocks.
    pub fn new(bootstrap: impl Into<PathBuf>) -> Self {
        Self::with_blocks(bootstrap, [SKIP_HELPERS, JS_ERROR_HELPERS])
    }

    /// Creates an appender with custom helper blocks, appended in order.
    pub fn with_blocks<I, S>(bootstrap: impl Into<PathBuf>, blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bootstrap: bootstrap.into(),
            blocks: blocks.into_iter().map(Into::into).collect(),
            manifest: DEFAULT_HELPER_MANIFEST.to_string(),
        }
    }

    /// Sets where the helpers look for the route manifest, relative to the
    /// bootstrap file's directory.
    ///
    /// Separators are normalized to `/` so the generated PHP is the same on
    /// every platform.
    #[must_use]
    pub fn manifest_path(mut self, relative: impl AsRef<Path>) -> Self {
        self.manifest = relative
            .as_ref()
            .components()
            .map(|part| part.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        self
    }

    /// A helper block with the manifest location filled in.
    fn render(&self, block: &str) -> String {
        let literal = self.manifest.replace('\\', "\\\\").replace('\'', "\\'");
        strip_preamble(block).replace(MANIFEST_PLACEHOLDER, &literal)
    }

    /// The file helpers are appended to.
    #[must_use]
    pub fn bootstrap(&self) -> &Path {
        &self.bootstrap
    }

    /// Appends the helpers unless the marker is already present.
    ///
    /// # Errors
    ///
    /// [`GuardError::BootstrapNotFound`] if the bootstrap file does not
    /// exist, or an I/O error reading or writing it.
    pub fn append(&self) -> Result<AppendOutcome> {
        if !self.bootstrap.is_file() {
            return Err(GuardError::BootstrapNotFound(self.bootstrap.clone()));
        }

        let existing = crate::fs::read(&self.bootstrap)?;
        if existing.contains(MARKER) {
            debug!(path = %self.bootstrap.display(), "helpers already present");
            return Ok(AppendOutcome::AlreadyApplied);
        }

        let mut updated = existing;
        for block in &self.blocks {
            updated.push_str("\n\n");
            updated.push_str(&self.render(block));
        }
        crate::fs::write_atomic(&self.bootstrap, &updated)?;

        debug!(path = %self.bootstrap.display(), blocks = self.blocks.len(), "helpers appended");
        Ok(AppendOutcome::Appended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_preamble_removes_tag_declare_and_blanks() {
        let block = "<?php\n\ndeclare(strict_types=1);\n\nfunction a(): void\n{\n}\n";
        assert_eq!(strip_preamble(block), "function a(): void\n{\n}\n");
    }

    #[test]
    fn strip_preamble_keeps_comments() {
        let block = "<?php\n// note\nfunction a() {}\n";
        assert_eq!(strip_preamble(block), "// note\nfunction a() {}\n");
    }

    #[test]
    fn strip_preamble_of_blank_block_is_empty() {
        assert_eq!(strip_preamble("<?php\n\n"), "");
    }

    #[test]
    fn default_manifest_location_matches_stock_layout() {
        let rendered = HelperAppender::new("tests/Pest.php").render(SKIP_HELPERS);
        assert!(rendered.contains("__DIR__.'/Browser/.route-manifest.json'"));
        assert!(!rendered.contains(MANIFEST_PLACEHOLDER));
    }

    #[test]
    fn manifest_location_is_escaped_for_php() {
        let appender = HelperAppender::new("tests/Pest.php").manifest_path("it's/routes.json");
        assert_eq!(
            appender.render("$p = __DIR__.'/{{ROUTE_MANIFEST}}';"),
            "$p = __DIR__.'/it\\'s/routes.json';"
        );
    }

    #[test]
    fn built_in_helpers_declare_the_marker() {
        assert!(strip_preamble(SKIP_HELPERS).contains(MARKER));
        assert!(!strip_preamble(SKIP_HELPERS).starts_with("<?php"));
        assert!(strip_preamble(JS_ERROR_HELPERS).contains("assertNoJavaScriptErrorsExceptCspParser"));
    }
}
