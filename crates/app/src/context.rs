//! App Context

use std::sync::Arc;

use crate::domain::receipts::{MemoryReceiptsService, ReceiptsService};

#[derive(Clone)]
pub struct AppContext {
    pub receipts: Arc<dyn ReceiptsService>,
}

impl AppContext {
    /// Build an application context backed by the process-lifetime in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            receipts: Arc::new(MemoryReceiptsService::default()),
        }
    }
}
