//! The services making up the report connector.
//!
//! [`MapServerService`] and [`StopDirectoryService`] talk to external HTTP services,
//! [`ReportService`] combines them into PDF reports.

pub mod map_server;
pub use map_server::MapServerService;

pub mod stop_directory;
pub use stop_directory::StopDirectoryService;

pub mod reports;
pub use reports::ReportService;
