use std::io;

use tokio::runtime::{Builder, Runtime};

use crate::config::RuntimeConfig;

pub(crate) fn build(config: &RuntimeConfig) -> io::Result<Runtime>
{
	let mut builder = Builder::new_multi_thread();

	builder.enable_io();
	builder.enable_time();
	builder.thread_name("collecto-reports-worker");

	if let Some(count) = config.worker_threads {
		builder.worker_threads(count.get());
	}

	if let Some(count) = config.max_blocking_threads {
		builder.max_blocking_threads(count.get());
	}

	builder.build()
}
