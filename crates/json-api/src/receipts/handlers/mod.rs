//! Receipt Handlers

pub(crate) mod index;
pub(crate) mod points;
pub(crate) mod process;
