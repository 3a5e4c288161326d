//! Application status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a job application.
///
/// The stored `Application.status` field is a plain string (the record
/// store trusts its caller); this enum is the whitelist the handler layer
/// validates status updates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Newly submitted, not yet looked at. The default for new applications.
    Pending,
    /// Under review.
    Reviewing,
    /// Accepted.
    Accepted,
    /// Rejected.
    Rejected,
}

impl ApplicationStatus {
    /// All legal statuses, in their canonical order.
    pub const ALL: [ApplicationStatus; 4] = [
        Self::Pending,
        Self::Reviewing,
        Self::Accepted,
        Self::Rejected,
    ];

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewing => "reviewing",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// The list of valid status strings, for error payloads.
    pub fn valid_values() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.as_str()).collect()
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "reviewing" => Ok(Self::Reviewing),
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(()),
        }
    }
}
