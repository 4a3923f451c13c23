use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The kind of a ledger transaction.
///
/// Donations add stock; purchases (requests) draw it down. Wire labels are
/// lowercase: "donate" and "purchase".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Donate,
    Purchase,
}

impl TransactionKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Donate => "donate",
            Self::Purchase => "purchase",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "donate" => Ok(Self::Donate),
            "purchase" => Ok(Self::Purchase),
            other => Err(TypeError::UnknownKind(other.to_string())),
        }
    }
}

/// Completion status of a ledger transaction.
///
/// The workflows only ever record `Completed`; `Failed` and `Pending` exist
/// because the wire format and history rendering recognize them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Failed,
    Pending,
}

impl TransactionStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TransactionStatus {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "pending" => Ok(Self::Pending),
            other => Err(TypeError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&TransactionKind::Donate).unwrap(), "\"donate\"");
        assert_eq!(
            serde_json::to_string(&TransactionKind::Purchase).unwrap(),
            "\"purchase\""
        );
    }

    #[test]
    fn status_serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionStatus::Completed).unwrap(),
            "\"completed\""
        );
        let back: TransactionStatus = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(back, TransactionStatus::Pending);
    }

    #[test]
    fn fromstr_roundtrip() {
        for kind in [TransactionKind::Donate, TransactionKind::Purchase] {
            assert_eq!(kind.to_string().parse::<TransactionKind>().unwrap(), kind);
        }
        for status in [
            TransactionStatus::Completed,
            TransactionStatus::Failed,
            TransactionStatus::Pending,
        ] {
            assert_eq!(status.to_string().parse::<TransactionStatus>().unwrap(), status);
        }
    }
}
