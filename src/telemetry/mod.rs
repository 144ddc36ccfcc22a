//! Logging setup.
//!
//! See [`crate::config::tracing`] for the available options.

use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::TracingConfig;

mod files;
mod stderr;

/// Installs the global tracing subscriber.
///
/// The returned guard flushes buffered file output when dropped, so it must be kept alive until
/// the process exits.
pub fn init(config: &TracingConfig) -> io::Result<Option<WorkerGuard>>
{
	if !config.enable {
		return Ok(None);
	}

	let stderr = stderr::layer(&config.stderr);
	let (files, guard) = config
		.files
		.as_ref()
		.map(files::layer)
		.transpose()?
		.flatten()
		.unzip();

	tracing_subscriber::registry()
		.with(Layer::and_then(stderr, files).with_filter(config.env_filter()))
		.init();

	info!("initialized tracing");

	Ok(guard)
}
