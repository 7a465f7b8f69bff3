//! Process Receipt Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use tally::receipt::{Receipt, ReceiptDocument};

use crate::{errors::ApiError, extensions::*, state::State};

/// Process Receipt Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReceiptProcessedResponse {
    /// Id to fetch the receipt's points with
    pub id: Uuid,
}

/// Process Receipt Handler
///
/// Validates a receipt, stores it and returns its generated id.
#[endpoint(
    tags("receipts"),
    summary = "Submit a receipt for processing",
    responses(
        (status_code = 200, description = "Receipt accepted"),
        (status_code = 400, description = "The receipt is invalid"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ReceiptProcessedResponse>, StatusError> {
    let state = depot.obtain_or_internal::<Arc<State>>()?;

    let payload = req
        .payload_with_max_size(state.max_body_size)
        .await
        .map_err(ApiError::UnreadableBody)?;

    let document: ReceiptDocument =
        serde_json::from_slice(payload).map_err(ApiError::MalformedJson)?;

    let receipt = Receipt::try_from(document).map_err(|error| {
        warn!("rejected receipt: {error}");

        ApiError::from(error)
    })?;

    let stored = state
        .receipts
        .process_receipt(receipt)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ReceiptProcessedResponse {
        id: stored.uuid.into_uuid(),
    }))
}
