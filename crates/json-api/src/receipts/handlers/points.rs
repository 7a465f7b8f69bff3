//! Receipt Points Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use tally_app::domain::receipts::ReceiptUuid;

use crate::{errors::ApiError, extensions::*, state::State};

/// Receipt Points Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PointsResponse {
    /// Points awarded to the receipt
    pub points: u64,
}

/// Receipt Points Handler
///
/// Scores a previously processed receipt.
#[endpoint(
    tags("receipts"),
    summary = "Get the points awarded for a receipt",
    responses(
        (status_code = 200, description = "Points awarded"),
        (status_code = 400, description = "No receipt found for that id"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<PointsResponse>, StatusError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let id = id.into_inner();

    let uuid: ReceiptUuid = id.parse().map_err(|_ignored| ApiError::NotFound(id.clone()))?;

    let breakdown = state
        .receipts
        .receipt_points(uuid)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PointsResponse {
        points: breakdown.total(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tally::{
        points::PointsBreakdown,
        receipt::{Receipt, ReceiptDocument},
    };
    use tally_app::domain::receipts::{MockReceiptsService, ReceiptsServiceError};

    use crate::{errors::ErrorResponse, test_helpers::receipts_service};

    use super::{super::tests::corner_market_receipt, *};

    fn make_service(receipts: MockReceiptsService) -> Service {
        receipts_service(receipts, Router::with_path("receipts/{id}/points").get(handler))
    }

    #[tokio::test]
    async fn test_points_returns_breakdown_total() -> TestResult {
        let document: ReceiptDocument = serde_json::from_value(corner_market_receipt())?;
        let breakdown = PointsBreakdown::for_receipt(&Receipt::try_from(document)?);

        let uuid = ReceiptUuid::generate();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_receipt_points()
            .once()
            .withf(move |requested| *requested == uuid)
            .return_once(move |_| Ok(breakdown));

        receipts.expect_process_receipt().never();
        receipts.expect_list_receipts().never();

        let mut res = TestClient::get(format!("http://example.com/receipts/{uuid}/points"))
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        let body: PointsResponse = res.take_json().await?;

        assert_eq!(body.points, 109);

        Ok(())
    }

    #[tokio::test]
    async fn test_points_unknown_id_returns_400() -> TestResult {
        let uuid = ReceiptUuid::generate();

        let mut receipts = MockReceiptsService::new();

        receipts
            .expect_receipt_points()
            .once()
            .return_once(move |_| Err(ReceiptsServiceError::NotFound(uuid)));

        receipts.expect_process_receipt().never();
        receipts.expect_list_receipts().never();

        let mut res = TestClient::get(format!("http://example.com/receipts/{uuid}/points"))
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, format!("no receipt found for id {uuid}"));

        Ok(())
    }

    #[tokio::test]
    async fn test_points_non_uuid_id_returns_400_without_lookup() -> TestResult {
        let mut receipts = MockReceiptsService::new();

        receipts.expect_receipt_points().never();
        receipts.expect_receipt_count().never();
        receipts.expect_process_receipt().never();
        receipts.expect_list_receipts().never();

        let mut res = TestClient::get("http://example.com/receipts/not-a-receipt/points")
            .send(&make_service(receipts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(body.error, "no receipt found for id not-a-receipt");

        Ok(())
    }
}
