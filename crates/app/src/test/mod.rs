//! Test fixtures.

use jiff::civil::{date, time};
use smallvec::smallvec;
use tally::prelude::*;

/// A small, valid receipt for the given retailer.
pub(crate) fn receipt(retailer: &str) -> Receipt {
    Receipt::new(
        retailer,
        date(2022, 3, 20),
        time(14, 33, 0, 0),
        smallvec![
            Item::new("Gatorade", Amount::from_cents(225)),
            Item::new("Gatorade", Amount::from_cents(225)),
        ],
        Amount::from_cents(450),
    )
}
