//! Receipt

use jiff::civil::{Date, Time};
use smallvec::SmallVec;

use crate::amount::Amount;

mod document;
mod errors;

pub use document::{ItemDocument, ReceiptDocument};
pub use errors::ReceiptError;

/// Line items of a receipt, inline for typical basket sizes.
pub type Items = SmallVec<[Item; 8]>;

/// A single line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    short_description: String,
    price: Amount,
}

impl Item {
    /// Create a new item.
    pub fn new(short_description: impl Into<String>, price: Amount) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }

    /// Description as submitted, including any surrounding whitespace.
    pub fn short_description(&self) -> &str {
        &self.short_description
    }

    /// Price of the item
    pub fn price(&self) -> Amount {
        self.price
    }
}

/// A validated retail receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    retailer: String,
    purchase_date: Date,
    purchase_time: Time,
    items: Items,
    total: Amount,
}

impl Receipt {
    /// Create a receipt from already-typed parts.
    ///
    /// No wire validation is applied; use [`Receipt::try_from`] with a
    /// [`ReceiptDocument`] for submitted input.
    pub fn new(
        retailer: impl Into<String>,
        purchase_date: Date,
        purchase_time: Time,
        items: Items,
        total: Amount,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            purchase_date,
            purchase_time,
            items,
            total,
        }
    }

    /// Retailer name
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Calendar date of purchase
    pub fn purchase_date(&self) -> Date {
        self.purchase_date
    }

    /// Wall-clock time of purchase
    pub fn purchase_time(&self) -> Time {
        self.purchase_time
    }

    /// Line items, in submission order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Receipt total, which need not equal the sum of item prices.
    pub fn total(&self) -> Amount {
        self.total
    }

    /// Append an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}
