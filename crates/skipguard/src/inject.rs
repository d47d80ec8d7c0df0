//! Skip-guard injection into browser test files.
//!
//! Each `test('name', function (...) {` declaration is located, its body is
//! extracted and scanned, and the resulting guard statements are inserted
//! right after the opening brace so they run before anything else in the
//! test.
//!
//! Injection does not check for guards it inserted earlier. Running it twice
//! over the same files duplicates every guard; run it only against freshly
//! generated sources.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{GuardError, Result};
use crate::extract::extract_body;
use crate::scan::{scan, SkipGuard};

/// `test('name', function (...) {` with either quote style.
static TEST_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"test\(['"]([^'"]+)['"],\s*function\s*\([^)]*\)\s*\{"#)
        .expect("static pattern is valid")
});

/// Indentation of inserted guard lines.
const GUARD_INDENT: &str = "    ";

/// A located test declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// The test's description string.
    pub name: String,
    /// Byte offset just past the declaration's opening brace.
    pub body_start: usize,
}

/// Finds every test declaration in `source`, in order.
#[must_use]
pub fn locate_test_cases(source: &str) -> Vec<TestCase> {
    TEST_DECLARATION
        .captures_iter(source)
        .filter_map(|captures| {
            let declaration = captures.get(0)?;
            Some(TestCase {
                name: captures[1].to_string(),
                body_start: declaration.end(),
            })
        })
        .collect()
}

/// Renders the block inserted after a declaration's opening brace.
fn render_guards(guards: &[SkipGuard]) -> String {
    let mut block = String::new();
    for guard in guards {
        block.push('\n');
        block.push_str(GUARD_INDENT);
        block.push_str(&guard.to_string());
    }
    block.push('\n');
    block
}

/// Result of injecting guards into one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInjection {
    /// The rewritten text (identical to the input when nothing was inserted).
    pub content: String,
    /// Number of test cases that received guards.
    pub guarded_tests: usize,
    /// Total guard statements inserted.
    pub guards: usize,
}

impl SourceInjection {
    /// Returns true if at least one guard was inserted.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.guards > 0
    }
}

/// Inserts guards into every test of `source`.
///
/// Bodies are always read from the original text, so guards inserted for one
/// test never feed into the scan of a later one.
#[must_use]
pub fn inject_source(source: &str) -> SourceInjection {
    let mut content = String::with_capacity(source.len());
    let mut copied = 0;
    let mut guarded_tests = 0;
    let mut total_guards = 0;

    for case in locate_test_cases(source) {
        let guards = scan(extract_body(source, case.body_start)).guards();
        if guards.is_empty() {
            continue;
        }
        debug!(test = %case.name, guards = guards.len(), "guarding test");

        content.push_str(&source[copied..case.body_start]);
        content.push_str(&render_guards(&guards));
        copied = case.body_start;
        guarded_tests += 1;
        total_guards += guards.len();
    }
    content.push_str(&source[copied..]);

    SourceInjection {
        content,
        guarded_tests,
        guards: total_guards,
    }
}

/// Which files under the injection root are eligible.
#[derive(Debug, Clone)]
pub struct InjectorOptions {
    /// A directory with this name must appear among the file's ancestors.
    pub target_subdir: String,
    /// File names never touched (bootstrap, base test case).
    pub excluded_files: Vec<String>,
    /// Source file extension, without the dot.
    pub extension: String,
}

impl Default for InjectorOptions {
    fn default() -> Self {
        Self {
            target_subdir: "Browser".to_string(),
            excluded_files: vec!["Pest.php".to_string(), "TestCase.php".to_string()],
            extension: "php".to_string(),
        }
    }
}

/// Summary of an injection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionReport {
    /// Eligible files that were read and scanned.
    pub files_scanned: usize,
    /// Files rewritten, in traversal order.
    pub updated: Vec<PathBuf>,
    /// Guard statements inserted across all files.
    pub guards_inserted: usize,
}

/// Batch rewriter for a directory of test files.
#[derive(Debug, Clone, Default)]
pub struct SkipGuardInjector {
    options: InjectorOptions,
}

impl SkipGuardInjector {
    /// Creates an injector with the given file selection options.
    #[must_use]
    pub fn new(options: InjectorOptions) -> Self {
        Self { options }
    }

    /// Returns true if `path` should be processed.
    #[must_use]
    pub fn is_eligible(&self, path: &Path) -> bool {
        if path.extension() != Some(OsStr::new(&self.options.extension)) {
            return false;
        }

        let Some(file_name) = path.file_name().and_then(OsStr::to_str) else {
            return false;
        };
        if self.options.excluded_files.iter().any(|excluded| excluded == file_name) {
            return false;
        }

        path.parent().is_some_and(|parent| {
            parent
                .components()
                .any(|component| component.as_os_str() == OsStr::new(&self.options.target_subdir))
        })
    }

    /// Processes every eligible file under `root`.
    ///
    /// `on_update` is called with each rewritten file as soon as it has been
    /// written. The run stops at the first file that cannot be read or
    /// written; files already rewritten stay rewritten.
    ///
    /// # Errors
    ///
    /// [`GuardError::DirectoryNotFound`] if `root` is not a directory, or the
    /// first traversal or I/O failure.
    pub fn run(&self, root: &Path, mut on_update: impl FnMut(&Path)) -> Result<InjectionReport> {
        if !root.is_dir() {
            return Err(GuardError::DirectoryNotFound(root.to_path_buf()));
        }

        let mut report = InjectionReport::default();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| GuardError::Walk {
                root: root.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_eligible(path) {
                continue;
            }

            report.files_scanned += 1;
            let original = crate::fs::read(path)?;
            let injection = inject_source(&original);
            if injection.content == original {
                continue;
            }

            crate::fs::write_atomic(path, &injection.content)?;
            debug!(
                path = %path.display(),
                tests = injection.guarded_tests,
                guards = injection.guards,
                "file updated"
            );
            report.guards_inserted += injection.guards;
            report.updated.push(path.to_path_buf());
            on_update(path);
        }

        info!(
            scanned = report.files_scanned,
            updated = report.updated.len(),
            guards = report.guards_inserted,
            "skip guard injection finished"
        );
        Ok(report)
    }
}
