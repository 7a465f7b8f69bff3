//! Receipts

mod handlers;

pub(crate) use handlers::*;
