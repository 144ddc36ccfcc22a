//! Collecto stops.
//!
//! A stop is identified by its [`StopCode`] (the `code_stop` attribute of the stops layer). When a
//! stop directory is configured, the remaining attributes are available as a [`Stop`].

mod code;
pub use code::{InvalidStopCode, StopCode};

mod stop;
pub use stop::Stop;
