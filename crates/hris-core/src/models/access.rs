//! Access levels assigned to employees.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HrisError;

/// Closed set of access levels. Stored and serialized as lowercase
/// strings (`"ordinary"`, `"hr"`, ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Ordinary,
    Supervisor,
    Manager,
    Hr,
    Intern,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 5] = [
        AccessLevel::Ordinary,
        AccessLevel::Supervisor,
        AccessLevel::Manager,
        AccessLevel::Hr,
        AccessLevel::Intern,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Ordinary => "ordinary",
            AccessLevel::Supervisor => "supervisor",
            AccessLevel::Manager => "manager",
            AccessLevel::Hr => "hr",
            AccessLevel::Intern => "intern",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = HrisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ordinary" => Ok(AccessLevel::Ordinary),
            "supervisor" => Ok(AccessLevel::Supervisor),
            "manager" => Ok(AccessLevel::Manager),
            "hr" => Ok(AccessLevel::Hr),
            "intern" => Ok(AccessLevel::Intern),
            _ => Err(HrisError::validation("invalid access level")),
        }
    }
}
