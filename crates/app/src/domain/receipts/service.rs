//! Receipts service.

use async_trait::async_trait;
use mockall::automock;
use tally::{points::PointsBreakdown, receipt::Receipt};
use tracing::{debug, info};

use crate::domain::receipts::{
    errors::ReceiptsServiceError,
    models::{ReceiptUuid, StoredReceipt},
    store::ReceiptStore,
};

#[derive(Debug, Default)]
pub struct MemoryReceiptsService {
    store: ReceiptStore,
}

impl MemoryReceiptsService {
    #[must_use]
    pub fn new(store: ReceiptStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReceiptsService for MemoryReceiptsService {
    async fn process_receipt(&self, receipt: Receipt) -> Result<StoredReceipt, ReceiptsServiceError> {
        let uuid = ReceiptUuid::generate();

        let stored = self.store.put(uuid, receipt).await?;

        info!(
            receipt = %uuid,
            retailer = stored.receipt.retailer(),
            items = stored.receipt.items().len(),
            "receipt accepted"
        );

        Ok(stored)
    }

    async fn list_receipts(&self) -> Result<Vec<StoredReceipt>, ReceiptsServiceError> {
        Ok(self.store.iterate().await)
    }

    async fn receipt_count(&self) -> Result<usize, ReceiptsServiceError> {
        Ok(self.store.len().await)
    }

    async fn receipt_points(
        &self,
        receipt: ReceiptUuid,
    ) -> Result<PointsBreakdown, ReceiptsServiceError> {
        let stored = self
            .store
            .get(receipt)
            .await
            .ok_or(ReceiptsServiceError::NotFound(receipt))?;

        let breakdown = PointsBreakdown::for_receipt(&stored.receipt);

        debug!(
            receipt = %receipt,
            ?breakdown,
            points = breakdown.total(),
            "receipt scored"
        );

        Ok(breakdown)
    }
}

#[automock]
#[async_trait]
pub trait ReceiptsService: Send + Sync {
    /// Assigns a fresh id to the receipt and stores it.
    async fn process_receipt(&self, receipt: Receipt) -> Result<StoredReceipt, ReceiptsServiceError>;

    /// Retrieves all stored receipts.
    async fn list_receipts(&self) -> Result<Vec<StoredReceipt>, ReceiptsServiceError>;

    /// Number of stored receipts.
    async fn receipt_count(&self) -> Result<usize, ReceiptsServiceError>;

    /// Scores a stored receipt.
    async fn receipt_points(
        &self,
        receipt: ReceiptUuid,
    ) -> Result<PointsBreakdown, ReceiptsServiceError>;
}
