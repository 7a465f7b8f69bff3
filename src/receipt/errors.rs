//! Receipt Errors

use thiserror::Error;

use crate::amount::AmountError;

/// Errors raised while validating a submitted receipt document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReceiptError {
    /// The retailer name is empty.
    #[error("retailer must not be empty")]
    EmptyRetailer,

    /// The receipt lists no items.
    #[error("receipt must contain at least one item")]
    NoItems,

    /// The purchase date is not a `YYYY-MM-DD` calendar date.
    #[error("purchaseDate {value:?} is not a valid YYYY-MM-DD date")]
    InvalidDate {
        /// Submitted value.
        value: String,
    },

    /// The purchase time is not a 24-hour `HH:MM` time.
    #[error("purchaseTime {value:?} is not a valid HH:MM time")]
    InvalidTime {
        /// Submitted value.
        value: String,
    },

    /// A total or price is not a valid amount.
    #[error("{field} {value:?}: {source}")]
    InvalidAmount {
        /// Path of the offending field, e.g. `items[2].price`.
        field: String,

        /// Submitted value.
        value: String,

        /// Why the amount was rejected.
        #[source]
        source: AmountError,
    },
}
