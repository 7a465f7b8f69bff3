//! Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{errors::ApiError, extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Number of stored receipts
    pub receipts: usize,
}

/// Healthcheck handler
///
/// Returns service health status
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let receipts = depot
        .obtain_or_internal::<Arc<State>>()?
        .receipts
        .receipt_count()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        receipts,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tally_app::domain::receipts::MockReceiptsService;

    use crate::test_helpers::receipts_service;

    use super::*;

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let mut receipts = MockReceiptsService::new();

        receipts.expect_receipt_count().once().return_once(|| Ok(3));
        receipts.expect_list_receipts().never();
        receipts.expect_process_receipt().never();
        receipts.expect_receipt_points().never();

        let response: HealthResponse = TestClient::get("http://example.com/healthcheck")
            .send(&receipts_service(
                receipts,
                Router::with_path("healthcheck").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(response.status, "ok");
        assert_eq!(response.receipts, 3);

        Ok(())
    }
}
