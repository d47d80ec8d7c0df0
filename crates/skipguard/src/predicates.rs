//! Skip predicates evaluated by tests at run time.
//!
//! The `skip_if_*` family evaluates immediately: on failure it tells the
//! [`TestFramework`] to mark the running test skipped and returns
//! [`Skipped`], which the caller propagates with `?` to abandon the rest of
//! the test body. The `skip_when_*` family returns plain booleans for
//! frameworks that register skip conditions before the body runs.

use thiserror::Error;
use tracing::debug;

use crate::cache::ManifestCache;
use crate::router::Router;

/// Routes every starter-kit installation registers.
pub const STARTER_KIT_ROUTES: [&str; 4] = ["login", "register", "dashboard", "home"];

/// "Does method M exist on type T" capability of the host runtime.
pub trait Reflection {
    /// Returns true if `class` declares or inherits `method`.
    fn method_exists(&self, class: &str, method: &str) -> bool;
}

/// The test framework's skip facility.
pub trait TestFramework {
    /// Marks the currently executing test as skipped.
    fn mark_skipped(&self, reason: &str);
}

/// Early-exit signal returned by the `skip_if_*` guards.
///
/// Not a failure: the test was marked skipped and its body must stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("test skipped: {reason}")]
pub struct Skipped {
    /// Reason reported to the test framework.
    pub reason: String,
}

/// Predicates over the route manifest and the host runtime.
pub struct SkipPredicates<'a> {
    cache: &'a ManifestCache,
    router: &'a dyn Router,
    reflection: &'a dyn Reflection,
    framework: &'a dyn TestFramework,
}

impl<'a> SkipPredicates<'a> {
    /// Wires the predicates to their collaborators.
    pub fn new(
        cache: &'a ManifestCache,
        router: &'a dyn Router,
        reflection: &'a dyn Reflection,
        framework: &'a dyn TestFramework,
    ) -> Self {
        Self {
            cache,
            router,
            reflection,
            framework,
        }
    }

    /// Checks a route name against the cached manifest, or against the live
    /// router when the manifest holds no routes.
    pub fn route_exists(&self, name: &str) -> bool {
        let manifest = self.cache.load();
        if manifest.is_empty() {
            return self.router.has_route(name);
        }
        manifest.contains(name)
    }

    /// Delegates to the reflection collaborator.
    pub fn method_exists(&self, class: &str, method: &str) -> bool {
        self.reflection.method_exists(class, method)
    }

    /// True when every route in [`STARTER_KIT_ROUTES`] exists.
    pub fn is_starter_kit_project(&self) -> bool {
        STARTER_KIT_ROUTES.iter().all(|route| self.route_exists(route))
    }

    /// Skips the current test unless route `name` exists.
    pub fn skip_if_route_missing(&self, name: &str) -> Result<(), Skipped> {
        if self.route_exists(name) {
            return Ok(());
        }
        self.skip(format!("Route [{name}] not available in this project"))
    }

    /// Skips the current test unless `class::method` exists.
    pub fn skip_if_method_missing(&self, class: &str, method: &str) -> Result<(), Skipped> {
        if self.method_exists(class, method) {
            return Ok(());
        }
        self.skip(format!("Method [{class}::{method}()] not available in this project"))
    }

    /// Skips the current test unless this is a starter-kit project.
    pub fn skip_if_not_starter_kit(&self) -> Result<(), Skipped> {
        if self.is_starter_kit_project() {
            return Ok(());
        }
        self.skip("Test requires Laravel starter kit features".to_string())
    }

    /// Intentionally does nothing.
    ///
    /// Checking page content would need a request before the test runs.
    /// Tests depending on starter-kit copy are guarded with
    /// [`Self::skip_if_not_starter_kit`] instead.
    #[allow(clippy::unused_self)]
    pub fn skip_if_content_missing(&self, _url: &str, _expected: &str) -> Result<(), Skipped> {
        Ok(())
    }

    /// Deferred form: true when the test should be skipped.
    pub fn skip_when_route_missing(&self, name: &str) -> bool {
        !self.route_exists(name)
    }

    /// Deferred form: true when the test should be skipped.
    pub fn skip_when_method_missing(&self, class: &str, method: &str) -> bool {
        !self.method_exists(class, method)
    }

    fn skip(&self, reason: String) -> Result<(), Skipped> {
        debug!(%reason, "skipping test");
        self.framework.mark_skipped(&reason);
        Err(Skipped { reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::RouteManifest;
    use crate::router::StaticRouter;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingFramework {
        skipped: RefCell<Vec<String>>,
    }

    impl TestFramework for RecordingFramework {
        fn mark_skipped(&self, reason: &str) {
            self.skipped.borrow_mut().push(reason.to_string());
        }
    }

    struct FixedReflection(&'static [(&'static str, &'static str)]);

    impl Reflection for FixedReflection {
        fn method_exists(&self, class: &str, method: &str) -> bool {
            self.0.iter().any(|(c, m)| *c == class && *m == method)
        }
    }

    const USER_FACTORY: &str = "Database\\Factories\\UserFactory";

    fn manifest(routes: &[&str]) -> ManifestCache {
        ManifestCache::preloaded(RouteManifest::new("now", routes.iter().copied()))
    }

    #[test]
    fn route_exists_uses_manifest_when_populated() {
        let cache = manifest(&["login", "home"]);
        // The live router disagrees; the manifest must win.
        let router = StaticRouter::new(["missing"]);
        let framework = RecordingFramework::default();
        let predicates = SkipPredicates::new(&cache, &router, &FixedReflection(&[]), &framework);

        assert!(predicates.route_exists("login"));
        assert!(!predicates.route_exists("missing"));
    }

    #[test]
    fn route_exists_falls_back_to_live_router() {
        let cache = ManifestCache::preloaded(RouteManifest::empty());
        let router = StaticRouter::new(["chirps.index"]);
        let framework = RecordingFramework::default();
        let predicates = SkipPredicates::new(&cache, &router, &FixedReflection(&[]), &framework);

        assert!(predicates.route_exists("chirps.index"));
        assert!(!predicates.route_exists("login"));
    }

    #[test]
    fn starter_kit_requires_all_four_routes() {
        let framework = RecordingFramework::default();
        let router = StaticRouter::default();
        let reflection = FixedReflection(&[]);

        let full = manifest(&["home", "login", "register", "dashboard", "chirps.index"]);
        assert!(SkipPredicates::new(&full, &router, &reflection, &framework).is_starter_kit_project());

        for missing in STARTER_KIT_ROUTES {
            let routes: Vec<&str> = STARTER_KIT_ROUTES
                .iter()
                .copied()
                .filter(|r| *r != missing)
                .collect();
            let partial = manifest(&routes);
            assert!(
                !SkipPredicates::new(&partial, &router, &reflection, &framework).is_starter_kit_project(),
                "{missing} absent should not count as starter kit"
            );
        }
    }

    #[test]
    fn skip_if_route_missing_marks_test_skipped() {
        let cache = manifest(&["home"]);
        let router = StaticRouter::default();
        let framework = RecordingFramework::default();
        let predicates = SkipPredicates::new(&cache, &router, &FixedReflection(&[]), &framework);

        assert!(predicates.skip_if_route_missing("home").is_ok());
        let err = predicates.skip_if_route_missing("login").unwrap_err();

        assert_eq!(err.reason, "Route [login] not available in this project");
        assert_eq!(*framework.skipped.borrow(), vec![err.reason]);
    }

    #[test]
    fn skip_if_method_missing_uses_reflection() {
        let cache = manifest(&["home"]);
        let router = StaticRouter::default();
        let framework = RecordingFramework::default();
        let reflection = FixedReflection(&[(USER_FACTORY, "unverified")]);
        let predicates = SkipPredicates::new(&cache, &router, &reflection, &framework);

        assert!(predicates.skip_if_method_missing(USER_FACTORY, "unverified").is_ok());
        let err = predicates
            .skip_if_method_missing(USER_FACTORY, "withoutTwoFactor")
            .unwrap_err();
        assert_eq!(
            err.reason,
            "Method [Database\\Factories\\UserFactory::withoutTwoFactor()] not available in this project"
        );
        assert!(predicates.skip_when_method_missing(USER_FACTORY, "withoutTwoFactor"));
        assert!(!predicates.skip_when_method_missing(USER_FACTORY, "unverified"));
    }

    #[test]
    fn skip_if_not_starter_kit_reason() {
        let cache = manifest(&["home"]);
        let router = StaticRouter::default();
        let framework = RecordingFramework::default();
        let predicates = SkipPredicates::new(&cache, &router, &FixedReflection(&[]), &framework);

        let err = predicates.skip_if_not_starter_kit().unwrap_err();
        assert_eq!(err.reason, "Test requires Laravel starter kit features");
    }

    #[test]
    fn deferred_forms_do_not_mark_skipped() {
        let cache = manifest(&["home"]);
        let router = StaticRouter::default();
        let framework = RecordingFramework::default();
        let predicates = SkipPredicates::new(&cache, &router, &FixedReflection(&[]), &framework);

        assert!(predicates.skip_when_route_missing("login"));
        assert!(!predicates.skip_when_route_missing("home"));
        assert!(framework.skipped.borrow().is_empty());
    }

    #[test]
    fn content_check_is_a_no_op() {
        let cache = ManifestCache::preloaded(RouteManifest::empty());
        let router = StaticRouter::default();
        let framework = RecordingFramework::default();
        let predicates = SkipPredicates::new(&cache, &router, &FixedReflection(&[]), &framework);

        assert!(predicates.skip_if_content_missing("/", "Let's get started").is_ok());
        assert!(framework.skipped.borrow().is_empty());
    }
}
