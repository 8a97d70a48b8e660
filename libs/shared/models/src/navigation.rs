use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pages outside the landing page that it can send a visitor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Login,
    Register,
}

impl NavigationTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationTarget::Login => "login",
            NavigationTarget::Register => "register",
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavigationTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(NavigationTarget::Login),
            "register" => Ok(NavigationTarget::Register),
            other => Err(format!("Unknown navigation target: {}", other)),
        }
    }
}

/// A request for the host to leave the page. The destination is resolved
/// elsewhere; the landing page only names it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub target: NavigationTarget,
    pub path: String,
}
