//! Collecto stop reports.
//!
//! This crate implements an HTTP service that renders a one-page PDF report for a Collecto stop.
//! The map on the report comes from a WMS server's atlas-driven print layout, names, addresses and
//! the stop photo come from an optional WFS stop directory.

/*
 * Collecto Reports
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see https://www.gnu.org/licenses.
 */

use std::io;
use std::net::SocketAddr;

use tower_http::timeout::TimeoutLayer;

use crate::config::{AtlasKey, HttpConfig, TracingConfig};
use crate::services::{MapServerService, ReportService, StopDirectoryService};

#[macro_use]
extern crate tracing as _;

#[macro_use]
extern crate thiserror as _;

#[cfg(test)]
mod testing;

#[macro_use]
mod macros;

mod http;
mod middleware;
mod runtime;
mod signals;
mod telemetry;
mod util;

pub mod config;
pub use config::Config;

pub mod pdf;
pub mod services;
pub mod stops;

/// Returns the top-level router.
///
/// This is what we pass to [`axum::serve()`].
pub fn router(
	report_service: ReportService,
	http_config: &HttpConfig,
	tracing_config: &TracingConfig,
) -> axum::Router
{
	axum::Router::new()
		.nest("/report", services::reports::http::router(report_service))
		.layer(TimeoutLayer::new(http_config.handler_timeout))
		.layer(middleware::catch_panic::layer())
		.layer(middleware::trace::layer(tracing_config.include_http_headers))
		.layer(middleware::request_id::propagate_layer())
		.layer(middleware::request_id::set_layer())
}

/// Runs the HTTP server until it receives SIGINT.
///
/// This builds its own [tokio runtime](tokio::runtime), so it must not be called from within an
/// async context.
pub fn run(config: Config) -> Result<(), RunError>
{
	runtime::build(&config.runtime)?.block_on(serve(config))
}

async fn serve(config: Config) -> Result<(), RunError>
{
	let tracing_guard = telemetry::init(&config.tracing)?;

	let http_client = reqwest::Client::builder()
		.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
		.build()?;

	let atlas_key = config.map_server.atlas_key;

	if atlas_key == AtlasKey::FeatureId && config.stop_directory.is_none() {
		warn!(
			"`atlas-key` is `feature-id`, but no stop directory is configured; reports will not \
			 contain maps"
		);
	}

	let map_server = MapServerService::new(http_client.clone(), config.map_server);
	let stop_directory = config
		.stop_directory
		.map(|stop_directory| StopDirectoryService::new(http_client, stop_directory));

	let report_service = ReportService::new(map_server, stop_directory, atlas_key);
	let service = router(report_service, &config.http, &config.tracing)
		.into_make_service_with_connect_info::<SocketAddr>();

	let tcp_listener = tokio::net::TcpListener::bind(config.http.socket_addr()).await?;
	let addr = tcp_listener.local_addr()?;

	info!(%addr, "listening for http requests");

	axum::serve(tcp_listener, service)
		.with_graceful_shutdown(signals::sigint())
		.await?;

	warn!("server shut down");

	drop(tracing_guard);

	Ok(())
}

/// Errors returned by [`run()`].
#[derive(Debug, Error)]
pub enum RunError
{
	/// We failed to build the HTTP client used for outbound requests.
	#[error("failed to build http client: {0}")]
	BuildHttpClient(#[from] reqwest::Error),

	/// Some I/O failure (building the runtime, opening log files, binding the socket, ...).
	#[error(transparent)]
	Io(#[from] io::Error),
}
