use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// One of the eight fixed blood-group stock-keeping categories.
///
/// Serializes to the display label ("A+", "AB-", ...), which is also the
/// key format used in the persisted inventory snapshot. Declaration order
/// matches display order, so sorted containers iterate A+ through O-.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// All eight groups in display order.
    pub const ALL: [BloodGroup; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// The wire/display label for this group.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BloodGroup {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APositive),
            "A-" => Ok(Self::ANegative),
            "B+" => Ok(Self::BPositive),
            "B-" => Ok(Self::BNegative),
            "AB+" => Ok(Self::AbPositive),
            "AB-" => Ok(Self::AbNegative),
            "O+" => Ok(Self::OPositive),
            "O-" => Ok(Self::ONegative),
            other => Err(TypeError::UnknownBloodGroup(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_display_order() {
        let labels: Vec<&str> = BloodGroup::ALL.iter().map(BloodGroup::label).collect();
        assert_eq!(labels, ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"]);
    }

    #[test]
    fn display_fromstr_roundtrip() {
        for group in BloodGroup::ALL {
            let parsed: BloodGroup = group.to_string().parse().unwrap();
            assert_eq!(parsed, group);
        }
    }

    #[test]
    fn fromstr_rejects_unknown() {
        let err = "C+".parse::<BloodGroup>().unwrap_err();
        assert_eq!(err, TypeError::UnknownBloodGroup("C+".into()));
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");
        let back: BloodGroup = serde_json::from_str("\"O+\"").unwrap();
        assert_eq!(back, BloodGroup::OPositive);
    }

    #[test]
    fn ord_matches_declaration_order() {
        let mut shuffled = vec![
            BloodGroup::ONegative,
            BloodGroup::APositive,
            BloodGroup::AbPositive,
            BloodGroup::BNegative,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                BloodGroup::APositive,
                BloodGroup::BNegative,
                BloodGroup::AbPositive,
                BloodGroup::ONegative,
            ]
        );
    }
}
