use serde::{Deserialize, Serialize};

/// Gate evaluation result for a transfer proposal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Proposal is accepted; proceed to inventory and ledger.
    Accepted,
    /// Proposal is rejected with reason.
    Rejected { reason: String },
}

impl Decision {
    /// Returns `true` if accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Returns `true` if rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The rejection reason, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted => None,
            Self::Rejected { reason } => Some(reason),
        }
    }
}
