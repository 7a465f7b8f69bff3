//! Receipts errors.

use thiserror::Error;

use crate::domain::receipts::models::ReceiptUuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptStoreError {
    #[error("receipt {0} already exists")]
    AlreadyExists(ReceiptUuid),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptsServiceError {
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptUuid),

    #[error("receipt {0} already exists")]
    AlreadyExists(ReceiptUuid),
}

impl From<ReceiptStoreError> for ReceiptsServiceError {
    fn from(error: ReceiptStoreError) -> Self {
        match error {
            ReceiptStoreError::AlreadyExists(uuid) => Self::AlreadyExists(uuid),
        }
    }
}
