//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use tally_app::domain::receipts::MockReceiptsService;

use crate::{
    config::server::DEFAULT_MAX_BODY_SIZE, observability::RequestLogging, router, state::State,
};

pub(crate) fn receipts_service(receipts: MockReceiptsService, route: Router) -> Service {
    receipts_service_with_body_limit(receipts, route, DEFAULT_MAX_BODY_SIZE)
}

pub(crate) fn receipts_service_with_body_limit(
    receipts: MockReceiptsService,
    route: Router,
    max_body_size: usize,
) -> Service {
    router::service(
        Router::new()
            .hoop(inject(Arc::new(State::new(Arc::new(receipts), max_body_size))))
            .push(route),
        RequestLogging::default(),
    )
}
