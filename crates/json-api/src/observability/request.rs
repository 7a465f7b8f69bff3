//! Request-level logging and request IDs.

use std::time::{Duration, Instant};

use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use uuid::Uuid;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

const DEFAULT_SLOW_REQUEST_THRESHOLD: Duration = Duration::from_secs(1);

/// Opens an `http.request` span per request and logs its outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequestLogging {
    slow_request_threshold: Duration,
}

impl RequestLogging {
    pub(crate) fn new(slow_request_threshold: Duration) -> Self {
        Self {
            slow_request_threshold,
        }
    }
}

impl Default for RequestLogging {
    fn default() -> Self {
        Self::new(DEFAULT_SLOW_REQUEST_THRESHOLD)
    }
}

#[handler]
impl RequestLogging {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        let started = Instant::now();

        let request_id = resolve_request_id(req.header::<String>(REQUEST_ID_HEADER));

        set_request_id_header(res, &request_id);

        let method = req.method().to_string();
        let path = req.uri().path().to_owned();

        let span = tracing::info_span!(
            "http.request",
            request_id = %request_id,
            method = %method,
            path = %path,
            remote_addr = %req.remote_addr(),
            status = tracing::field::Empty,
            duration_ms = tracing::field::Empty
        );

        ctrl.call_next(req, depot, res).instrument(span.clone()).await;

        let _enter = span.enter();

        let status = res.status_code.unwrap_or(StatusCode::OK);
        let duration = started.elapsed();
        let duration_ms = duration.as_millis();

        span.record("status", status.as_u16());
        span.record("duration_ms", duration_ms);

        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(status = status.as_u16(), %method, %path, "server error response");
        } else if status.is_client_error() {
            warn!(status = status.as_u16(), %method, %path, "client error response");
        }

        if duration > self.slow_request_threshold {
            warn!(
                %method,
                %path,
                duration_ms,
                threshold_ms = self.slow_request_threshold.as_millis(),
                "slow request detected"
            );
        }
    }
}

fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn set_request_id_header(res: &mut Response, request_id: &str) {
    match HeaderValue::from_str(request_id) {
        Ok(value) => {
            res.headers_mut().insert(REQUEST_ID_HEADER, value);
        }
        Err(source) => {
            warn!(
                request_id,
                "could not encode request id for response header: {source}"
            );
        }
    }
}
