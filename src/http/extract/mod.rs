//! Wrappers around [`axum`]'s extractors that reject with problem details.

mod path;
pub(crate) use path::Path;
