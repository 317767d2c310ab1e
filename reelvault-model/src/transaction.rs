use crate::chrono::{DateTime, Utc};
use crate::ids::{AssetID, TransactionID, UserID};
use crate::money::Price;
use std::fmt;

/// Settlement lifecycle of a marketplace transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

impl TransactionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Confirmed => "Confirmed",
            TransactionStatus::Failed => "Failed",
        }
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TransactionStatus::Pending)
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What a transaction pays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TransactionKind {
    Purchase,
    Royalty,
    Listing,
}

/// A value transfer between two users over one asset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    pub id: TransactionID,
    pub from_user: UserID,
    pub to_user: UserID,
    pub asset_id: AssetID,
    pub amount: Price,
    pub timestamp: DateTime<Utc>,
    /// Settlement receipt, present once confirmed. Mock-derived; there is
    /// no chain behind it.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "Option::is_none")
    )]
    pub settlement_hash: Option<String>,
    pub status: TransactionStatus,
    pub kind: TransactionKind,
}

impl Transaction {
    /// Open a pending transfer stamped with the current time.
    pub fn pending(
        from_user: UserID,
        to_user: UserID,
        asset_id: AssetID,
        amount: Price,
        kind: TransactionKind,
    ) -> Self {
        Transaction {
            id: TransactionID::new(),
            from_user,
            to_user,
            asset_id,
            amount,
            timestamp: Utc::now(),
            settlement_hash: None,
            status: TransactionStatus::Pending,
            kind,
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == TransactionStatus::Confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_transaction_has_no_receipt() {
        let tx = Transaction::pending(
            UserID::new(),
            UserID::new(),
            AssetID::new(),
            Price::new(0.05).unwrap(),
            TransactionKind::Purchase,
        );
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert!(tx.settlement_hash.is_none());
        assert!(!tx.status.is_terminal());
    }
}
