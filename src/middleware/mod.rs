//! HTTP middleware shared by every route.

pub(crate) mod catch_panic;
pub(crate) mod request_id;
pub(crate) mod trace;
