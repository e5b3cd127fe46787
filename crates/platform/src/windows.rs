//! Privilege and environment-store queries
//!
//! Everything here is informational: lookups that fail report a
//! conservative default (`false` or `None`) instead of an error, so a
//! caller cannot distinguish "genuinely absent" from "lookup failed".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which environment store a variable is read from
///
/// Only meaningful on Windows, where per-user and system-wide
/// variables live under separate registry keys. Other platforms have a
/// single process environment and ignore the scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvScope {
    User,
    Machine,
}

impl EnvScope {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Machine => "machine",
        }
    }
}

impl fmt::Display for EnvScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the current process runs with elevated privileges
///
/// Always `false` off Windows. On Windows the elevation query is
/// fail-closed: a failed token check also reports `false`.
pub fn is_admin() -> bool {
    #[cfg(windows)]
    {
        is_elevated::is_elevated()
    }

    #[cfg(not(windows))]
    {
        false
    }
}

/// Read an environment variable from the given scope
///
/// On Windows this reads the registry-backed store for `scope`; an
/// absent value, missing key, or access failure all yield `None`.
/// Elsewhere the process environment is consulted directly and `scope`
/// is ignored.
pub fn get_environment_variable(name: &str, scope: EnvScope) -> Option<String> {
    #[cfg(windows)]
    {
        crate::registry::environment_variable(name, scope)
    }

    #[cfg(not(windows))]
    {
        let _ = scope;
        std::env::var(name).ok()
    }
}
