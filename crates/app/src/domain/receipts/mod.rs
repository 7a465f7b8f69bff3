//! Receipts

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::{ReceiptStoreError, ReceiptsServiceError};
pub use models::{ReceiptUuid, StoredReceipt};
pub use service::*;
pub use store::ReceiptStore;
