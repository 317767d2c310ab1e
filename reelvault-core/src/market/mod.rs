//! Purchase transactions and settlement.
//!
//! Transactions move through an explicit state machine
//! (pending -> confirmed | failed). Transitions are driven by settlement
//! events supplied from outside the ledger; nothing in here advances on a
//! timer.

use crate::catalog::AssetCatalog;
use crate::error::{MarketError, Result};
use reelvault_model::{
    Asset, Price, Transaction, TransactionID, TransactionKind,
    TransactionStatus, UserID,
};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::info;

/// Settlement outcome reported by the payment collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum SettlementEvent {
    Confirmed { transaction: TransactionID },
    Failed { transaction: TransactionID, reason: String },
}

/// External source of settlement events (a payment gateway in production,
/// a scripted sequence in tests and demos).
pub trait SettlementSource {
    fn next_event(&mut self) -> Option<SettlementEvent>;
}

/// Ordered record of every value transfer seen by the marketplace.
#[derive(Debug, Default)]
pub struct TransactionLedger {
    transactions: Vec<Transaction>,
    index: HashMap<TransactionID, usize>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a pending purchase of `asset` by `buyer`.
    pub fn begin_purchase(
        &mut self,
        buyer: UserID,
        asset: &Asset,
    ) -> Result<TransactionID> {
        if !asset.is_active {
            return Err(MarketError::AssetInactive(asset.id));
        }
        let tx = Transaction::pending(
            buyer,
            asset.uploader,
            asset.id,
            asset.price,
            TransactionKind::Purchase,
        );
        let id = tx.id;
        info!(transaction = %id, asset = %asset.id, buyer = %buyer, "purchase opened");
        self.push(tx);
        Ok(id)
    }

    /// Apply one settlement event, updating the catalog's purchase counter
    /// and recording the creator's royalty share on confirmation.
    pub fn apply(
        &mut self,
        catalog: &mut AssetCatalog,
        event: SettlementEvent,
    ) -> Result<&Transaction> {
        match event {
            SettlementEvent::Confirmed { transaction } => {
                let at = self.position(&transaction)?;
                if self.transactions[at].status.is_terminal() {
                    return Err(MarketError::AlreadySettled(transaction));
                }
                let hash = settlement_hash(&transaction);
                {
                    let tx = &mut self.transactions[at];
                    tx.status = TransactionStatus::Confirmed;
                    tx.settlement_hash = Some(hash.clone());
                }
                let (asset_id, kind, amount, from_user, to_user, royalty) = {
                    let tx = &self.transactions[at];
                    let royalty = catalog
                        .get(&tx.asset_id)
                        .map(|asset| asset.royalty)
                        .unwrap_or_default();
                    (
                        tx.asset_id, tx.kind, tx.amount, tx.from_user,
                        tx.to_user, royalty,
                    )
                };

                if kind == TransactionKind::Purchase {
                    catalog.record_purchase(&asset_id)?;
                    // Bookkeeping line for the creator's guaranteed share
                    // of the sale; the money is already part of `amount`.
                    if !royalty.is_zero() {
                        let share = royalty.share_of(amount.value());
                        let mut line = Transaction::pending(
                            from_user,
                            to_user,
                            asset_id,
                            Price::new(share)?,
                            TransactionKind::Royalty,
                        );
                        line.status = TransactionStatus::Confirmed;
                        line.settlement_hash = Some(settlement_hash(&line.id));
                        self.push(line);
                    }
                }
                info!(transaction = %transaction, %hash, "purchase confirmed");
                let at = self.position(&transaction)?;
                Ok(&self.transactions[at])
            }
            SettlementEvent::Failed { transaction, reason } => {
                let at = self.position(&transaction)?;
                if self.transactions[at].status.is_terminal() {
                    return Err(MarketError::AlreadySettled(transaction));
                }
                self.transactions[at].status = TransactionStatus::Failed;
                info!(transaction = %transaction, %reason, "purchase failed");
                Ok(&self.transactions[at])
            }
        }
    }

    /// Drain an event source, applying everything it has to report.
    /// Returns the number of events applied.
    pub fn drain(
        &mut self,
        catalog: &mut AssetCatalog,
        source: &mut dyn SettlementSource,
    ) -> Result<usize> {
        let mut applied = 0;
        while let Some(event) = source.next_event() {
            self.apply(catalog, event)?;
            applied += 1;
        }
        Ok(applied)
    }

    pub fn get(&self, id: &TransactionID) -> Option<&Transaction> {
        self.index.get(id).map(|&at| &self.transactions[at])
    }

    /// All transactions in the order they were recorded.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Confirmed purchase income for `user` across their catalog.
    pub fn earnings_for(&self, user: &UserID) -> f64 {
        self.transactions
            .iter()
            .filter(|tx| {
                tx.is_confirmed()
                    && tx.kind == TransactionKind::Purchase
                    && tx.to_user == *user
            })
            .map(|tx| tx.amount.value())
            .sum()
    }

    fn push(&mut self, tx: Transaction) {
        self.index.insert(tx.id, self.transactions.len());
        self.transactions.push(tx);
    }

    fn position(&self, id: &TransactionID) -> Result<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or(MarketError::TransactionNotFound(*id))
    }
}

/// Deterministic mock settlement receipt. There is no chain behind this;
/// the digest just gives demos and tests a stable, unique-looking hash.
fn settlement_hash(id: &TransactionID) -> String {
    let digest = Sha256::digest(id.to_uuid().as_bytes());
    format!("0x{}", hex::encode(digest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use reelvault_model::{
        AssetID, AssetMetadata, AssetType, DownloadUrl, PreviewUrl,
        RoyaltyPercentage,
    };

    mock! {
        Gateway {}
        impl SettlementSource for Gateway {
            fn next_event(&mut self) -> Option<SettlementEvent>;
        }
    }

    fn listed_asset(royalty: u8) -> Asset {
        Asset::new(
            UserID::new(),
            AssetType::Music,
            AssetMetadata {
                title: "Track".to_string(),
                description: String::new(),
                tags: vec![],
                duration_secs: Some(120.0),
                resolution: None,
                file_size: 8_400_000,
                preview_url: PreviewUrl::new("/p").unwrap(),
                download_url: DownloadUrl::new("/d").unwrap(),
            },
            Price::new(0.03).unwrap(),
            RoyaltyPercentage::new(royalty).unwrap(),
        )
        .unwrap()
    }

    fn seeded(royalty: u8) -> (AssetCatalog, AssetID, UserID) {
        let mut catalog = AssetCatalog::new();
        let asset = listed_asset(royalty);
        let id = asset.id;
        let seller = asset.uploader;
        catalog.insert(asset).unwrap();
        (catalog, id, seller)
    }

    #[test]
    fn confirmation_stamps_receipt_and_counts_purchase() {
        let (mut catalog, asset_id, seller) = seeded(0);
        let mut ledger = TransactionLedger::new();
        let buyer = UserID::new();
        let asset = catalog.get(&asset_id).unwrap().clone();
        let tx_id = ledger.begin_purchase(buyer, &asset).unwrap();

        let confirmed = ledger
            .apply(&mut catalog, SettlementEvent::Confirmed { transaction: tx_id })
            .unwrap();
        assert_eq!(confirmed.status, TransactionStatus::Confirmed);
        let hash = confirmed.settlement_hash.clone().unwrap();
        assert!(hash.starts_with("0x"));
        assert_eq!(catalog.get(&asset_id).unwrap().stats.purchases, 1);
        assert!((ledger.earnings_for(&seller) - 0.03).abs() < 1e-12);
    }

    #[test]
    fn confirmation_records_royalty_line() {
        let (mut catalog, asset_id, _) = seeded(20);
        let mut ledger = TransactionLedger::new();
        let asset = catalog.get(&asset_id).unwrap().clone();
        let tx_id = ledger.begin_purchase(UserID::new(), &asset).unwrap();
        ledger
            .apply(&mut catalog, SettlementEvent::Confirmed { transaction: tx_id })
            .unwrap();

        let royalties: Vec<_> = ledger
            .transactions()
            .iter()
            .filter(|tx| tx.kind == TransactionKind::Royalty)
            .collect();
        assert_eq!(royalties.len(), 1);
        assert!(royalties[0].is_confirmed());
        assert!((royalties[0].amount.value() - 0.006).abs() < 1e-12);
    }

    #[test]
    fn settled_transactions_reject_further_events() {
        let (mut catalog, asset_id, _) = seeded(0);
        let mut ledger = TransactionLedger::new();
        let asset = catalog.get(&asset_id).unwrap().clone();
        let tx_id = ledger.begin_purchase(UserID::new(), &asset).unwrap();
        ledger
            .apply(&mut catalog, SettlementEvent::Failed {
                transaction: tx_id,
                reason: "declined".to_string(),
            })
            .unwrap();

        let result = ledger.apply(
            &mut catalog,
            SettlementEvent::Confirmed { transaction: tx_id },
        );
        assert!(matches!(result, Err(MarketError::AlreadySettled(_))));
        assert_eq!(
            ledger.get(&tx_id).unwrap().status,
            TransactionStatus::Failed
        );
    }

    #[test]
    fn inactive_assets_cannot_be_purchased() {
        let (mut catalog, asset_id, _) = seeded(0);
        catalog.deactivate(&asset_id).unwrap();
        let asset = catalog.get(&asset_id).unwrap().clone();
        let mut ledger = TransactionLedger::new();
        let result = ledger.begin_purchase(UserID::new(), &asset);
        assert!(matches!(result, Err(MarketError::AssetInactive(_))));
    }

    #[test]
    fn drain_consumes_the_whole_event_source() {
        let (mut catalog, asset_id, _) = seeded(0);
        let mut ledger = TransactionLedger::new();
        let asset = catalog.get(&asset_id).unwrap().clone();
        let tx_id = ledger.begin_purchase(UserID::new(), &asset).unwrap();

        let mut gateway = MockGateway::new();
        let mut events = vec![SettlementEvent::Confirmed { transaction: tx_id }]
            .into_iter();
        gateway
            .expect_next_event()
            .times(2)
            .returning(move || events.next());

        let applied = ledger.drain(&mut catalog, &mut gateway).unwrap();
        assert_eq!(applied, 1);
        assert!(ledger.get(&tx_id).unwrap().is_confirmed());
    }

    #[test]
    fn settlement_hash_is_stable_per_transaction() {
        let id = TransactionID::new();
        assert_eq!(settlement_hash(&id), settlement_hash(&id));
        assert_ne!(settlement_hash(&id), settlement_hash(&TransactionID::new()));
    }
}
