//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, catcher::Catcher, prelude::*};

use crate::{errors, healthcheck, observability::RequestLogging, receipts, state::State};

pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(CatchPanic::new())
        .hoop(inject(state))
        .get(receipts::index::handler)
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::with_path("receipts")
                .push(Router::with_path("process").post(receipts::process::handler))
                .push(Router::with_path("{id}/points").get(receipts::points::handler)),
        )
}

/// Wraps a router so every request is logged, matched or not, and every
/// error leaves as a `400 {"Error": ...}` envelope.
pub(crate) fn service(router: Router, logging: RequestLogging) -> Service {
    Service::new(router)
        .hoop(logging)
        .catcher(Catcher::default().hoop(errors::error_envelope))
}
