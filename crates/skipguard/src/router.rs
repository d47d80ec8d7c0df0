//! The application router seam.
//!
//! Skipguard never boots the application itself. Route names come from a
//! [`Router`]: [`CommandRouter`] asks the application through a console
//! command, [`StaticRouter`] holds a fixed list (tests, dry runs).

use std::process::Command;

use once_cell::sync::OnceCell;
use serde::Deserialize;
use tracing::debug;

use crate::error::{GuardError, Result};

/// Access to the application's named routes.
pub trait Router {
    /// All named routes, in registration order.
    fn named_routes(&self) -> Result<Vec<String>>;

    /// Live "does a route named `name` exist" query.
    ///
    /// Errors enumerating the routes count as "no such route".
    fn has_route(&self, name: &str) -> bool {
        match self.named_routes() {
            Ok(routes) => routes.iter().any(|route| route == name),
            Err(e) => {
                debug!(route = name, error = %e, "live route lookup failed");
                false
            }
        }
    }
}

/// A router backed by a fixed list of names.
#[derive(Debug, Clone, Default)]
pub struct StaticRouter {
    routes: Vec<String>,
}

impl StaticRouter {
    /// Creates a router that reports exactly `routes`.
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Router for StaticRouter {
    fn named_routes(&self) -> Result<Vec<String>> {
        Ok(self.routes.clone())
    }
}

/// One entry of `route:list --json` output. Only the name matters here.
#[derive(Debug, Deserialize)]
struct RouteListEntry {
    #[serde(default)]
    name: Option<String>,
}

/// A router that runs a console command printing the route table as JSON.
///
/// The command must print a JSON array of objects with a `name` field
/// (`null` for unnamed routes), which is what `php artisan route:list --json`
/// produces.
///
/// The command runs at most once per router; a successful result is reused
/// by later queries. Failures are not cached.
#[derive(Debug, Clone)]
pub struct CommandRouter {
    program: String,
    args: Vec<String>,
    routes: OnceCell<Vec<String>>,
}

impl CommandRouter {
    /// Creates a router from a command line (`program` followed by arguments).
    ///
    /// Returns `None` for an empty command line.
    pub fn from_command_line<I, S>(command: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = command.into_iter().map(Into::into);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            routes: OnceCell::new(),
        })
    }

    fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn failure(&self, reason: impl Into<String>) -> GuardError {
        GuardError::RouteCommand {
            command: self.display(),
            reason: reason.into(),
        }
    }

    fn run(&self) -> Result<Vec<String>> {
        debug!(command = %self.display(), "enumerating routes");

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| self.failure(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{}: {}", output.status, stderr.trim())));
        }

        parse_route_list(&output.stdout).map_err(|e| self.failure(format!("invalid JSON: {e}")))
    }
}

impl Router for CommandRouter {
    fn named_routes(&self) -> Result<Vec<String>> {
        self.routes.get_or_try_init(|| self.run()).cloned()
    }
}

/// Extracts named routes from `route:list --json` output, skipping unnamed
/// entries.
fn parse_route_list(stdout: &[u8]) -> std::result::Result<Vec<String>, serde_json::Error> {
    let entries: Vec<RouteListEntry> = serde_json::from_slice(stdout)?;
    Ok(entries.into_iter().filter_map(|entry| entry.name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_router_answers_membership() {
        let router = StaticRouter::new(["login", "home"]);
        assert!(router.has_route("login"));
        assert!(!router.has_route("register"));
    }

    #[test]
    fn parse_route_list_skips_unnamed_routes() {
        let json = br#"[
            {"method": "GET|HEAD", "uri": "/", "name": null},
            {"method": "GET|HEAD", "uri": "chirper", "name": "chirps.index"},
            {"method": "POST", "uri": "login", "name": "login"}
        ]"#;
        assert_eq!(parse_route_list(json).unwrap(), vec!["chirps.index", "login"]);
    }

    #[test]
    fn empty_command_line_is_rejected() {
        assert!(CommandRouter::from_command_line(Vec::<String>::new()).is_none());
    }

    #[test]
    fn missing_program_is_a_route_command_error() {
        let router =
            CommandRouter::from_command_line(["skipguard-no-such-program-xyz", "route:list"]).unwrap();
        let err = router.named_routes().unwrap_err();
        assert!(matches!(err, GuardError::RouteCommand { .. }));
        assert!(!router.has_route("login"));
    }

    #[cfg(unix)]
    #[test]
    fn command_router_reads_stdout() {
        let router = CommandRouter::from_command_line([
            "printf",
            "%s",
            r#"[{"name":"login"},{"name":null},{"name":"home"}]"#,
        ])
        .unwrap();
        assert_eq!(router.named_routes().unwrap(), vec!["login", "home"]);
        assert!(router.has_route("home"));
    }

    #[cfg(unix)]
    #[test]
    fn command_runs_once_per_router() {
        let dir = tempfile::TempDir::new().unwrap();
        let counter = dir.path().join("runs");
        let script = format!(
            r#"echo run >> '{}'; printf %s '[{{"name":"login"}}]'"#,
            counter.display()
        );
        let router = CommandRouter::from_command_line(["sh", "-c", script.as_str()]).unwrap();

        for name in ["login", "register", "dashboard", "profile.edit"] {
            router.has_route(name);
        }
        assert!(router.has_route("login"));

        let runs = std::fs::read_to_string(&counter).unwrap();
        assert_eq!(runs.lines().count(), 1);
    }
}
