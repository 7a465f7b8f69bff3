//! Receipt Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
    sync::Arc,
};

use tally::receipt::Receipt;
use uuid::Uuid;

/// Server-assigned receipt identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReceiptUuid(Uuid);

impl ReceiptUuid {
    /// Generate a fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }
}

impl Display for ReceiptUuid {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for ReceiptUuid {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

/// A receipt held by the store under its identifier.
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    pub uuid: ReceiptUuid,
    pub receipt: Arc<Receipt>,
}
