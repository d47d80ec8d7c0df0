//! Method lookup by reading PHP sources through a PSR-4 autoload map.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::debug;

use crate::predicates::Reflection;

/// Resolves classes to files via PSR-4 prefixes and looks for a method
/// declaration in the file.
///
/// Only the class's own file is inspected: methods inherited from a parent
/// class or pulled in through traits are not seen.
#[derive(Debug, Clone)]
pub struct Psr4Reflection {
    root: PathBuf,
    prefixes: Vec<(String, PathBuf)>,
}

impl Psr4Reflection {
    /// Creates a resolver rooted at `root` with `(namespace prefix, directory)`
    /// pairs. Longer prefixes take precedence.
    pub fn new<I, P, D>(root: impl Into<PathBuf>, prefixes: I) -> Self
    where
        I: IntoIterator<Item = (P, D)>,
        P: Into<String>,
        D: Into<PathBuf>,
    {
        let mut prefixes: Vec<(String, PathBuf)> = prefixes
            .into_iter()
            .map(|(prefix, dir)| {
                let mut prefix: String = prefix.into();
                if !prefix.ends_with('\\') {
                    prefix.push('\\');
                }
                (prefix, dir.into())
            })
            .collect();
        prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self {
            root: root.into(),
            prefixes,
        }
    }

    /// Maps a fully-qualified class name to its expected source file.
    #[must_use]
    pub fn class_file(&self, class: &str) -> Option<PathBuf> {
        let class = class.trim_start_matches('\\');
        self.prefixes.iter().find_map(|(prefix, dir)| {
            let relative = class.strip_prefix(prefix.as_str())?;
            let mut path = self.root.join(dir);
            for segment in relative.split('\\') {
                path.push(segment);
            }
            path.set_extension("php");
            Some(path)
        })
    }
}

fn declares_method(path: &Path, method: &str) -> bool {
    let Ok(source) = std::fs::read_to_string(path) else {
        return false;
    };
    // Method names are PHP identifiers; anything else can never match.
    if !method.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') || method.is_empty() {
        return false;
    }
    Regex::new(&format!(r"(?i)\bfunction\s+&?{method}\s*\("))
        .map(|re| re.is_match(&source))
        .unwrap_or(false)
}

impl Reflection for Psr4Reflection {
    fn method_exists(&self, class: &str, method: &str) -> bool {
        let Some(path) = self.class_file(class) else {
            debug!(class, "class outside every autoload prefix");
            return false;
        };
        let found = declares_method(&path, method);
        debug!(class, method, path = %path.display(), found, "method lookup");
        found
    }
}
