//! Receipt Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tally::receipt::ReceiptDocument;
use tally_app::domain::receipts::StoredReceipt;

use crate::{errors::ApiError, extensions::*, state::State};

/// A stored receipt, rendered in its submitted shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptResponse {
    /// Receipt id
    pub id: Uuid,

    pub retailer: String,

    pub purchase_date: String,

    pub purchase_time: String,

    pub items: Vec<ItemResponse>,

    pub total: String,
}

/// A line item of a stored receipt.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemResponse {
    pub short_description: String,

    pub price: String,
}

impl From<StoredReceipt> for ReceiptResponse {
    fn from(stored: StoredReceipt) -> Self {
        let document = ReceiptDocument::from(stored.receipt.as_ref());

        ReceiptResponse {
            id: stored.uuid.into_uuid(),
            retailer: document.retailer,
            purchase_date: document.purchase_date,
            purchase_time: document.purchase_time,
            items: document
                .items
                .into_iter()
                .map(|item| ItemResponse {
                    short_description: item.short_description,
                    price: item.price,
                })
                .collect(),
            total: document.total,
        }
    }
}

/// Receipt Index Handler
///
/// Lists every stored receipt, in no particular order.
#[endpoint(tags("receipts"), summary = "List processed receipts")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<ReceiptResponse>>, StatusError> {
    let receipts = depot
        .obtain_or_internal::<Arc<State>>()?
        .receipts
        .list_receipts()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(receipts.into_iter().map(ReceiptResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tally::receipt::Receipt;
    use tally_app::domain::receipts::{MockReceiptsService, ReceiptUuid};

    use crate::test_helpers::receipts_service;

    use super::{super::tests::corner_market_receipt, *};

    fn make_service(receipts: MockReceiptsService) -> Service {
        receipts_service(receipts, Router::new().get(handler))
    }

    #[tokio::test]
    async fn test_index_lists_stored_receipts() -> TestResult {
        let document: ReceiptDocument = serde_json::from_value(corner_market_receipt())?;
        let receipt = Arc::new(Receipt::try_from(document)?);
        let uuid = ReceiptUuid::generate();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_list_receipts()
            .once()
            .return_once(move || Ok(vec![StoredReceipt { uuid, receipt }]));

        receipts.expect_process_receipt().never();
        receipts.expect_receipt_points().never();
        receipts.expect_receipt_count().never();

        let mut res = TestClient::get("http://example.com/")
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: Vec<ReceiptResponse> = res.take_json().await?;

        assert_eq!(body.len(), 1, "expected one receipt");

        let listed = body.first().ok_or("missing receipt")?;

        assert_eq!(listed.id, uuid.into_uuid());
        assert_eq!(listed.retailer, "M&M Corner Market");
        assert_eq!(listed.purchase_date, "2022-03-20");
        assert_eq!(listed.purchase_time, "14:33");
        assert_eq!(listed.items.len(), 4);
        assert_eq!(listed.total, "9.00");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_store_returns_empty_list() -> TestResult {
        let mut receipts = MockReceiptsService::new();

        receipts.expect_list_receipts().once().return_once(|| Ok(Vec::new()));
        receipts.expect_process_receipt().never();
        receipts.expect_receipt_points().never();
        receipts.expect_receipt_count().never();

        let mut res = TestClient::get("http://example.com/")
            .send(&make_service(receipts))
            .await;

        let body: Vec<ReceiptResponse> = res.take_json().await?;

        assert!(body.is_empty(), "expected no receipts");

        Ok(())
    }
}
