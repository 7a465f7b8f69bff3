//! Receipt wire documents.

use jiff::civil::{Date, Time};
use serde::{Deserialize, Serialize};

use crate::{
    amount::Amount,
    receipt::{Item, Items, Receipt, ReceiptError},
};

/// Receipt as submitted and listed over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDocument {
    /// Retailer name
    pub retailer: String,

    /// `YYYY-MM-DD`
    pub purchase_date: String,

    /// `HH:MM`, 24-hour
    pub purchase_time: String,

    /// Line items
    pub items: Vec<ItemDocument>,

    /// Two-decimal total
    pub total: String,
}

/// Line item as submitted over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDocument {
    /// Free-form description
    pub short_description: String,

    /// Two-decimal price
    pub price: String,
}

impl TryFrom<ReceiptDocument> for Receipt {
    type Error = ReceiptError;

    fn try_from(document: ReceiptDocument) -> Result<Self, Self::Error> {
        if document.retailer.is_empty() {
            return Err(ReceiptError::EmptyRetailer);
        }

        if document.items.is_empty() {
            return Err(ReceiptError::NoItems);
        }

        let purchase_date =
            parse_date(&document.purchase_date).ok_or_else(|| ReceiptError::InvalidDate {
                value: document.purchase_date.clone(),
            })?;

        let purchase_time =
            parse_time(&document.purchase_time).ok_or_else(|| ReceiptError::InvalidTime {
                value: document.purchase_time.clone(),
            })?;

        let items = document
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let price = parse_amount(format!("items[{index}].price"), &item.price)?;

                Ok(Item::new(item.short_description, price))
            })
            .collect::<Result<Items, ReceiptError>>()?;

        let total = parse_amount("total".to_string(), &document.total)?;

        Ok(Receipt::new(
            document.retailer,
            purchase_date,
            purchase_time,
            items,
            total,
        ))
    }
}

impl From<&Receipt> for ReceiptDocument {
    fn from(receipt: &Receipt) -> Self {
        let time = receipt.purchase_time();

        ReceiptDocument {
            retailer: receipt.retailer().to_string(),
            purchase_date: receipt.purchase_date().to_string(),
            purchase_time: format!("{:02}:{:02}", time.hour(), time.minute()),
            items: receipt
                .items()
                .iter()
                .map(|item| ItemDocument {
                    short_description: item.short_description().to_string(),
                    price: item.price().to_string(),
                })
                .collect(),
            total: receipt.total().to_string(),
        }
    }
}

fn parse_amount(field: String, value: &str) -> Result<Amount, ReceiptError> {
    value
        .parse::<Amount>()
        .map_err(|source| ReceiptError::InvalidAmount {
            field,
            value: value.to_string(),
            source,
        })
}

fn parse_date(value: &str) -> Option<Date> {
    let mut parts = value.split('-');

    let year = fixed_width(parts.next()?, 4)?;
    let month = fixed_width(parts.next()?, 2)?;
    let day = fixed_width(parts.next()?, 2)?;

    if parts.next().is_some() {
        return None;
    }

    Date::new(
        i16::try_from(year).ok()?,
        i8::try_from(month).ok()?,
        i8::try_from(day).ok()?,
    )
    .ok()
}

fn parse_time(value: &str) -> Option<Time> {
    let (hour, minute) = value.split_once(':')?;

    let hour = fixed_width(hour, 2)?;
    let minute = fixed_width(minute, 2)?;

    Time::new(i8::try_from(hour).ok()?, i8::try_from(minute).ok()?, 0, 0).ok()
}

/// Parse a field of exactly `width` ASCII digits.
fn fixed_width(part: &str, width: usize) -> Option<u16> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    part.parse().ok()
}
