//! Points
//!
//! Scores a [`Receipt`] against the fixed rule set. Every rule is evaluated
//! independently and the results are summed; all money arithmetic is done in
//! integer cents.

use std::sync::LazyLock;

use jiff::civil::{Time, time};
use regex::Regex;

use crate::receipt::{Item, Receipt};

const WHOLE_DOLLAR_POINTS: u64 = 50;
const QUARTER_POINTS: u64 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// `ceil(price * 0.2)` in cents is `ceil(cents / 500)`.
const CENTS_PER_DESCRIPTION_POINT: u64 = 500;

const AFTERNOON_START: Time = time(14, 0, 0, 0);
const AFTERNOON_END: Time = time(16, 0, 0, 0);

/// Unicode letters (L) and decimal digits (Nd).
static ALPHANUMERIC: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{Nd}]"));

/// Points awarded by each rule for a single receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointsBreakdown {
    /// One point per letter or digit in the retailer name.
    pub retailer: u64,

    /// Total has no cents.
    pub whole_dollar_total: u64,

    /// Total is a multiple of 0.25.
    pub quarter_total: u64,

    /// Five points per two items.
    pub item_pairs: u64,

    /// Price-based points for descriptions whose trimmed length is a multiple of three.
    pub descriptions: u64,

    /// Purchase day of month is odd.
    pub odd_day: u64,

    /// Purchased between 14:00 and 16:00, exclusive.
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Score every rule for a receipt.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let total = receipt.total();
        let item_count = u64::try_from(receipt.items().len()).unwrap_or(u64::MAX);
        let time = receipt.purchase_time();

        Self {
            retailer: retailer_points(receipt.retailer()),
            whole_dollar_total: award(total.is_whole_dollars(), WHOLE_DOLLAR_POINTS),
            quarter_total: award(total.is_multiple_of_quarter(), QUARTER_POINTS),
            item_pairs: (item_count / 2).saturating_mul(POINTS_PER_ITEM_PAIR),
            descriptions: receipt
                .items()
                .iter()
                .map(description_points)
                .fold(0, u64::saturating_add),
            odd_day: award(receipt.purchase_date().day() % 2 == 1, ODD_DAY_POINTS),
            afternoon: award(
                time > AFTERNOON_START && time < AFTERNOON_END,
                AFTERNOON_POINTS,
            ),
        }
    }

    /// Sum of all rules.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.whole_dollar_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Total points for a receipt.
pub fn points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

fn award(condition: bool, points: u64) -> u64 {
    if condition { points } else { 0 }
}

fn retailer_points(retailer: &str) -> u64 {
    let count = match ALPHANUMERIC.as_ref() {
        Ok(pattern) => pattern.find_iter(retailer).count(),
        Err(_) => retailer.chars().filter(|c| c.is_alphanumeric()).count(),
    };

    u64::try_from(count).unwrap_or(u64::MAX)
}

fn description_points(item: &Item) -> u64 {
    let length = item.short_description().trim().chars().count();

    if length == 0 || length % 3 != 0 {
        return 0;
    }

    item.price().cents().div_ceil(CENTS_PER_DESCRIPTION_POINT)
}
