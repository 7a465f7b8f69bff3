//! Receipt Store
//!
//! Process-lifetime map from receipt id to receipt. Writers take the lock
//! exclusively; lookups and listings share it.

use std::{collections::hash_map::Entry, sync::Arc};

use rustc_hash::FxHashMap;
use tally::receipt::Receipt;
use tokio::sync::RwLock;

use crate::domain::receipts::{
    errors::ReceiptStoreError,
    models::{ReceiptUuid, StoredReceipt},
};

#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<FxHashMap<ReceiptUuid, Arc<Receipt>>>,
}

impl ReceiptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a receipt under `uuid`.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptStoreError::AlreadyExists`] if the id is taken; the
    /// existing receipt is left untouched.
    pub async fn put(
        &self,
        uuid: ReceiptUuid,
        receipt: Receipt,
    ) -> Result<StoredReceipt, ReceiptStoreError> {
        let mut receipts = self.receipts.write().await;

        match receipts.entry(uuid) {
            Entry::Occupied(_) => Err(ReceiptStoreError::AlreadyExists(uuid)),
            Entry::Vacant(slot) => {
                let receipt = Arc::new(receipt);

                slot.insert(Arc::clone(&receipt));

                Ok(StoredReceipt { uuid, receipt })
            }
        }
    }

    pub async fn get(&self, uuid: ReceiptUuid) -> Option<StoredReceipt> {
        self.receipts
            .read()
            .await
            .get(&uuid)
            .map(|receipt| StoredReceipt {
                uuid,
                receipt: Arc::clone(receipt),
            })
    }

    /// Snapshot of every stored receipt, in no particular order.
    pub async fn iterate(&self) -> Vec<StoredReceipt> {
        self.receipts
            .read()
            .await
            .iter()
            .map(|(uuid, receipt)| StoredReceipt {
                uuid: *uuid,
                receipt: Arc::clone(receipt),
            })
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}
