//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    amount::{Amount, AmountError},
    points::{PointsBreakdown, points},
    receipt::{Item, ItemDocument, Items, Receipt, ReceiptDocument, ReceiptError},
};
