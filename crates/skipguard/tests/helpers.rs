//! Integration tests for appending helpers to the test bootstrap.

use skipguard::helpers::MARKER;
use skipguard::{AppendOutcome, GuardError, HelperAppender};
use std::fs;
use tempfile::TempDir;

const BOOTSTRAP: &str = "<?php\n\npest()->extend(Tests\\TestCase::class)->in('Feature');\n";

#[test]
fn second_append_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let pest = temp.path().join("Pest.php");
    fs::write(&pest, BOOTSTRAP).unwrap();
    let appender = HelperAppender::new(&pest);

    assert_eq!(appender.append().unwrap(), AppendOutcome::Appended);
    let after_first = fs::read_to_string(&pest).unwrap();
    let modified = fs::metadata(&pest).unwrap().modified().unwrap();

    assert_eq!(appender.append().unwrap(), AppendOutcome::AlreadyApplied);
    assert_eq!(fs::read_to_string(&pest).unwrap(), after_first);
    assert_eq!(fs::metadata(&pest).unwrap().modified().unwrap(), modified);

    assert!(after_first.starts_with(BOOTSTRAP));
    assert_eq!(after_first.matches(MARKER).count(), 1);
    assert_eq!(after_first.matches("<?php").count(), 1);
    assert!(after_first.contains("function assertNoJavaScriptErrorsExceptCspParser"));
}

#[test]
fn blocks_are_separated_by_blank_lines() {
    let temp = TempDir::new().unwrap();
    let pest = temp.path().join("Pest.php");
    fs::write(&pest, "<?php\n").unwrap();

    HelperAppender::with_blocks(
        &pest,
        [
            "<?php\n\ndeclare(strict_types=1);\n\nfunction skipIfRouteMissing() {}\n",
            "<?php\nfunction other() {}\n",
        ],
    )
    .append()
    .unwrap();

    assert_eq!(
        fs::read_to_string(&pest).unwrap(),
        "<?php\n\n\nfunction skipIfRouteMissing() {}\n\n\nfunction other() {}\n"
    );
}

#[test]
fn missing_bootstrap_is_an_error() {
    let temp = TempDir::new().unwrap();
    let pest = temp.path().join("Pest.php");

    let err = HelperAppender::new(&pest).append().unwrap_err();

    assert!(matches!(err, GuardError::BootstrapNotFound(_)));
    assert!(!pest.exists());
}

#[test]
fn helpers_read_the_configured_manifest() {
    let temp = TempDir::new().unwrap();
    let pest = temp.path().join("Pest.php");
    fs::write(&pest, BOOTSTRAP).unwrap();

    HelperAppender::new(&pest)
        .manifest_path(std::path::Path::new("E2E").join("routes.json"))
        .append()
        .unwrap();

    let contents = fs::read_to_string(&pest).unwrap();
    assert!(contents.contains("$manifestPath = __DIR__.'/E2E/routes.json';"));
    assert!(!contents.contains("{{ROUTE_MANIFEST}}"));
    assert!(!contents.contains(".route-manifest.json"));
}
