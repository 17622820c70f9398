//! Which of the two services a process runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Service hosted by the running process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// User accounts and their audit trail.
    #[default]
    Authorization,
    /// Customer profiles, passports, addresses and their audit trail.
    Profile,
}

impl ServiceKind {
    /// Returns the name used for config files and migration sets.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Authorization => "authorization",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "authorization" | "auth" => Ok(Self::Authorization),
            "profile" => Ok(Self::Profile),
            other => Err(format!("unknown service '{}'", other)),
        }
    }
}
