use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hemo_types::{BloodGroup, Role, TransactionKind, TransactionStatus};

/// One completed ledger entry. Immutable once created.
///
/// Wire field names follow the persisted layout: the kind serializes as
/// `type`, the group as `bloodGroup`, and `ts` as an ISO-8601 string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique id, strictly increasing by creation time.
    pub id: u64,
    /// Actor email. Not validated beyond non-empty at login.
    pub email: String,
    /// Role the actor held when the transaction was made.
    pub role: Role,
    /// Donate or purchase.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The blood group the units moved through.
    #[serde(rename = "bloodGroup")]
    pub blood_group: BloodGroup,
    /// Positive unit count.
    pub units: u32,
    /// Completion status.
    pub status: TransactionStatus,
    /// Creation timestamp.
    pub ts: DateTime<Utc>,
}

/// A record minus its ledger-assigned id and timestamp.
///
/// Drafts are what the workflows hand to [`crate::TransactionLedger::append`];
/// the ledger stamps id and `ts` at the single append path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionDraft {
    pub email: String,
    pub role: Role,
    pub kind: TransactionKind,
    pub blood_group: BloodGroup,
    pub units: u32,
    pub status: TransactionStatus,
}

impl TransactionDraft {
    /// A completed donation draft.
    pub fn donation(email: impl Into<String>, blood_group: BloodGroup, units: u32) -> Self {
        Self {
            email: email.into(),
            role: Role::Donor,
            kind: TransactionKind::Donate,
            blood_group,
            units,
            status: TransactionStatus::Completed,
        }
    }

    /// A completed purchase (request) draft.
    pub fn purchase(email: impl Into<String>, blood_group: BloodGroup, units: u32) -> Self {
        Self {
            email: email.into(),
            role: Role::Receiver,
            kind: TransactionKind::Purchase,
            blood_group,
            units,
            status: TransactionStatus::Completed,
        }
    }
}
