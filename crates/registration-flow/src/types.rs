//! Shared registration types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a user registers as.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserType {
    #[default]
    #[serde(rename = "passenger")]
    Passenger,
    #[serde(rename = "agent")]
    TravelAgent,
    #[serde(rename = "driver")]
    Driver,
}

impl UserType {
    /// All selectable roles, in the order the form lists them.
    pub const ALL: [UserType; 3] = [UserType::Passenger, UserType::TravelAgent, UserType::Driver];

    /// Value used on the wire and in the form's `<option value>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Passenger => "passenger",
            UserType::TravelAgent => "agent",
            UserType::Driver => "driver",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Passenger => "Passenger",
            UserType::TravelAgent => "Travel Agent",
            UserType::Driver => "Driver",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown user type: {}", s))
    }
}

/// A completed registration.
///
/// Returned by a successful code submission. Nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Phone number in E.164 form (`+91XXXXXXXXXX`)
    pub phone_number: String,
    pub user_type: UserType,
}
