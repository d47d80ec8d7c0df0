//! Dependency scanning over a single test body.
//!
//! Recognition is a closed allow-list of call shapes, not a parser. Anything
//! written differently (a route name held in a variable, a factory state
//! reached through another model) goes undetected and the test gets no guard
//! for it.

use std::fmt;

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Class owning the factory states the scanner knows about.
pub const USER_FACTORY: &str = "Database\\Factories\\UserFactory";

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static pattern is valid")
}

static ROUTE_CALL: Lazy<Regex> = Lazy::new(|| pattern(r#"route\(['"]([^'"]+)['"]"#));

static TEMPORARY_SIGNED_ROUTE: Lazy<Regex> =
    Lazy::new(|| pattern(r#"URL::temporarySignedRoute\(['"]([^'"]+)['"]"#));

static SIGNED_ROUTE: Lazy<Regex> =
    Lazy::new(|| pattern(r#"URL::signedRoute\(['"]([^'"]+)['"]"#));

/// Literal factory chains and the method each one depends on.
static FACTORY_CALLS: Lazy<[(Regex, &'static str); 2]> = Lazy::new(|| {
    [
        (
            pattern(r"User::factory\(\)->withoutTwoFactor\(\)"),
            "withoutTwoFactor",
        ),
        (
            pattern(r"User::factory\(\)->unverified\(\)"),
            "unverified",
        ),
    ]
});

/// Copy that only the starter-kit views render. The apostrophe in
/// "Let's" may be escaped any number of ways in test source.
static STARTER_KIT_MARKERS: Lazy<[Regex; 5]> = Lazy::new(|| {
    [
        pattern(r"(?i)Let.*s get started"),
        pattern(r"(?i)Create an account"),
        pattern(r"(?i)Log in to your account"),
        pattern(r"(?i)Enter your email and password below"),
        pattern(r"(?i)Enter your details below to create"),
    ]
});

/// A method a test calls through a known factory chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FactoryUsage {
    /// Fully-qualified class name
    pub class: String,
    /// Method name on that class
    pub method: String,
}

/// Everything a single test depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    /// Route names in first-seen order.
    pub routes: IndexSet<String>,
    /// Factory methods in detection order, each at most once.
    pub factory_usages: Vec<FactoryUsage>,
    /// The test asserts copy only present in starter-kit views.
    pub requires_starter_kit: bool,
}

impl DependencySet {
    /// Returns true if nothing was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty() && self.factory_usages.is_empty() && !self.requires_starter_kit
    }

    /// Guard statements for this set: starter-kit check first, then routes,
    /// then methods.
    #[must_use]
    pub fn guards(&self) -> Vec<SkipGuard> {
        let starter_kit = self.requires_starter_kit.then_some(SkipGuard::StarterKit);
        let routes = self.routes.iter().cloned().map(SkipGuard::Route);
        let methods = self.factory_usages.iter().map(|usage| SkipGuard::Method {
            class: usage.class.clone(),
            method: usage.method.clone(),
        });

        starter_kit.into_iter().chain(routes).chain(methods).collect()
    }
}

/// One generated guard statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipGuard {
    /// `skipIfNotStarterKit();`
    StarterKit,
    /// `skipIfRouteMissing('<name>');`
    Route(String),
    /// `skipIfMethodMissing('<class>', '<method>');`
    Method {
        /// Fully-qualified class name
        class: String,
        /// Method name
        method: String,
    },
}

impl fmt::Display for SkipGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipGuard::StarterKit => f.write_str("skipIfNotStarterKit();"),
            SkipGuard::Route(name) => write!(f, "skipIfRouteMissing('{name}');"),
            SkipGuard::Method { class, method } => {
                write!(f, "skipIfMethodMissing('{class}', '{method}');")
            }
        }
    }
}

/// Scans one test body.
#[must_use]
pub fn scan(body: &str) -> DependencySet {
    let mut routes = IndexSet::new();
    for pattern in [&*ROUTE_CALL, &*TEMPORARY_SIGNED_ROUTE, &*SIGNED_ROUTE] {
        for captures in pattern.captures_iter(body) {
            routes.insert(captures[1].to_string());
        }
    }

    let factory_usages = FACTORY_CALLS
        .iter()
        .filter(|(pattern, _)| pattern.is_match(body))
        .map(|(_, method)| FactoryUsage {
            class: USER_FACTORY.to_string(),
            method: (*method).to_string(),
        })
        .collect();

    let requires_starter_kit = STARTER_KIT_MARKERS.iter().any(|marker| marker.is_match(body));

    DependencySet {
        routes,
        factory_usages,
        requires_starter_kit,
    }
}
