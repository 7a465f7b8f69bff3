//! Published scoring scenarios, submitted as wire documents.
//!
//! Scenario 1 is scored twice: once with the receipt as published in the
//! service documentation (Emils Cheese Pizza at 9.00, 27 points by the rules)
//! and once as the reference vector (Emils Cheese Pizza at 12.25, 28 points).

use jiff::civil::{date, time};
use smallvec::smallvec;
use testresult::TestResult;

use tally::prelude::*;

fn receipt_from_json(json: &str) -> Result<Receipt, Box<dyn std::error::Error>> {
    let document: ReceiptDocument = serde_json::from_str(json)?;

    Ok(Receipt::try_from(document)?)
}

fn target_receipt(pizza_price: &str) -> String {
    format!(
        r#"{{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {{"shortDescription": "Mountain Dew 12PK", "price": "6.49"}},
                {{"shortDescription": "Emils Cheese Pizza", "price": "{pizza_price}"}},
                {{"shortDescription": "Knorr Creamy Chicken", "price": "1.26"}},
                {{"shortDescription": "Doritos Nacho Cheese", "price": "3.35"}},
                {{"shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00"}}
            ],
            "total": "35.35"
        }}"#
    )
}

#[test]
fn target_receipt_as_documented() -> TestResult {
    let receipt = receipt_from_json(&target_receipt("9.00"))?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);

    assert_eq!(breakdown.retailer, 6);
    assert_eq!(breakdown.item_pairs, 10);
    assert_eq!(breakdown.descriptions, 2 + 3);
    assert_eq!(breakdown.odd_day, 6);
    assert_eq!(breakdown.whole_dollar_total + breakdown.quarter_total, 0);
    assert_eq!(breakdown.afternoon, 0);
    assert_eq!(breakdown.total(), 27);

    Ok(())
}

#[test]
fn target_receipt_reference_vector() -> TestResult {
    let receipt = receipt_from_json(&target_receipt("12.25"))?;

    assert_eq!(points(&receipt), 28);

    Ok(())
}

#[test]
fn corner_market_receipt() -> TestResult {
    let receipt = receipt_from_json(
        r#"{
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"},
                {"shortDescription": "Gatorade", "price": "2.25"}
            ],
            "total": "9.00"
        }"#,
    )?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);

    assert_eq!(breakdown.retailer, 14);
    assert_eq!(breakdown.whole_dollar_total, 50);
    assert_eq!(breakdown.quarter_total, 25);
    assert_eq!(breakdown.item_pairs, 10);
    assert_eq!(breakdown.afternoon, 10);
    assert_eq!(breakdown.total(), 109);

    Ok(())
}

#[test]
fn zero_total_receipt_with_empty_retailer() {
    let items: Items = smallvec![Item::new("abc", Amount::ZERO)];

    let morning_even_day = Receipt::new(
        "",
        date(2022, 1, 2),
        time(9, 0, 0, 0),
        items.clone(),
        Amount::ZERO,
    );

    let afternoon_odd_day = Receipt::new(
        "",
        date(2022, 1, 3),
        time(15, 0, 0, 0),
        items,
        Amount::ZERO,
    );

    assert_eq!(points(&morning_even_day), 75);
    assert_eq!(points(&afternoon_odd_day), 75 + 6 + 10);
}

#[test]
fn strict_date_and_time_are_validation_errors() -> TestResult {
    let json = target_receipt("9.00").replace("13:01", "1:01 PM");

    let document: ReceiptDocument = serde_json::from_str(&json)?;

    assert_eq!(
        Receipt::try_from(document),
        Err(ReceiptError::InvalidTime {
            value: "1:01 PM".to_string()
        })
    );

    Ok(())
}
