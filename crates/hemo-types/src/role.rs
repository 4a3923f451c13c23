use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The two mutually exclusive roles a session may hold.
///
/// The role gates which workflow is reachable: donors donate, receivers
/// request. Wire labels are exactly "Donor" and "Receiver".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Donor,
    Receiver,
}

impl Role {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Donor => "Donor",
            Self::Receiver => "Receiver",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Donor" => Ok(Self::Donor),
            "Receiver" => Ok(Self::Receiver),
            other => Err(TypeError::UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_fromstr_roundtrip() {
        for role in [Role::Donor, Role::Receiver] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("donor".parse::<Role>().is_err());
    }

    #[test]
    fn serde_labels() {
        assert_eq!(serde_json::to_string(&Role::Receiver).unwrap(), "\"Receiver\"");
    }
}
