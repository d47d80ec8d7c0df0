use indexmap::IndexMap;
use std::path::PathBuf;

pub fn default_manifest_path() -> PathBuf {
    PathBuf::from(skipguard::DEFAULT_MANIFEST_PATH)
}

pub fn default_test_dir() -> PathBuf {
    PathBuf::from("tests/Browser")
}

pub fn default_target_subdir() -> String {
    "Browser".to_string()
}

pub fn default_excluded_files() -> Vec<String> {
    vec!["Pest.php".to_string(), "TestCase.php".to_string()]
}

pub fn default_extension() -> String {
    "php".to_string()
}

pub fn default_bootstrap_file() -> PathBuf {
    PathBuf::from("tests/Pest.php")
}

pub fn default_routes_command() -> Vec<String> {
    ["php", "artisan", "route:list", "--json"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The autoload section of a stock application's `composer.json`.
pub fn default_autoload() -> IndexMap<String, PathBuf> {
    [
        ("App\\", "app/"),
        ("Database\\Factories\\", "database/factories/"),
        ("Database\\Seeders\\", "database/seeders/"),
        ("Tests\\", "tests/"),
    ]
    .into_iter()
    .map(|(prefix, dir)| (prefix.to_string(), PathBuf::from(dir)))
    .collect()
}
