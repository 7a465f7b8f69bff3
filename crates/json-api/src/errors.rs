//! API errors and the error envelope.
//!
//! Every failure leaves the server as status 400 with a body of the form
//! `{ "Error": "<message>" }`.

use salvo::{
    http::{Method, ParseError, ResBody, StatusCode, StatusError},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use tally::receipt::ReceiptError;
use tally_app::domain::receipts::ReceiptsServiceError;

/// Failures surfaced by the receipt handlers.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request body could not be read.
    #[error("could not read request body: {0}")]
    UnreadableBody(#[source] ParseError),

    /// The body is not JSON or does not match the receipt schema.
    #[error("malformed receipt: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// A field is present but has the wrong format.
    #[error("invalid receipt: {0}")]
    FieldFormat(#[from] ReceiptError),

    /// The method and path combination is not served.
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: Method, path: String },

    /// Unknown receipt id.
    #[error("no receipt found for id {0}")]
    NotFound(String),

    /// Anything the client cannot fix.
    #[error("internal error")]
    Internal,
}

impl From<ReceiptsServiceError> for ApiError {
    fn from(error: ReceiptsServiceError) -> Self {
        match error {
            ReceiptsServiceError::NotFound(uuid) => Self::NotFound(uuid.to_string()),
            ReceiptsServiceError::AlreadyExists(uuid) => {
                error!("generated receipt id {uuid} collided with a stored receipt");

                Self::Internal
            }
        }
    }
}

impl From<ApiError> for StatusError {
    fn from(error: ApiError) -> Self {
        StatusError::bad_request().brief(error.to_string())
    }
}

/// Error envelope body
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    /// Human-readable failure message
    #[serde(rename = "Error")]
    pub error: String,
}

/// Catcher hook rewriting every error response into the envelope.
#[handler]
pub(crate) async fn error_envelope(req: &mut Request, res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let body = res.take_body();

    let message = if matches!(
        status,
        StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED
    ) {
        ApiError::MethodNotAllowed {
            method: req.method().clone(),
            path: req.uri().path().to_owned(),
        }
        .to_string()
    } else if let ResBody::Error(error) = body {
        error.brief
    } else {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    };

    if status.is_server_error() {
        error!(status = status.as_u16(), "{message}");
    }

    res.status_code(StatusCode::BAD_REQUEST);
    res.render(Json(ErrorResponse { error: message }));

    ctrl.skip_rest();
}
