//! State

use std::sync::Arc;

use tally_app::{context::AppContext, domain::receipts::ReceiptsService};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) receipts: Arc<dyn ReceiptsService>,

    /// Largest request body read by the receipt handlers, in bytes.
    pub(crate) max_body_size: usize,
}

impl State {
    #[must_use]
    pub(crate) fn new(receipts: Arc<dyn ReceiptsService>, max_body_size: usize) -> Self {
        Self {
            receipts,
            max_body_size,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext, max_body_size: usize) -> Arc<Self> {
        Arc::new(Self::new(app.receipts, max_body_size))
    }
}
