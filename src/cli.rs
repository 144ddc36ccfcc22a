//! CLI argument handling.

use std::net::IpAddr;
use std::path::Path;

use clap::Parser;
use collecto_reports::Config;

/// Parses the process' command line arguments.
pub(crate) fn args() -> Args
{
	Args::parse()
}

/// An HTTP service rendering PDF reports for Collecto stops.
///
/// Reports are served at `/report/collecto/<stop>/`.
#[derive(Debug, Parser)]
#[command(version)]
pub(crate) struct Args
{
	/// Path to the configuration file.
	///
	/// Defaults to `./collecto-reports.toml` if that file exists.
	#[arg(long = "config", env = "COLLECTO_REPORTS_CONFIG")]
	pub(crate) config_path: Option<Box<Path>>,

	/// Path to a `.env` file to load instead of `./.env`.
	#[arg(long)]
	pub(crate) env_file: Option<Box<Path>>,

	/// The IP address to listen on.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long)]
	pub(crate) ip: Option<IpAddr>,

	/// The port to listen on.
	///
	/// This option takes precedence over the configuration file.
	#[arg(long)]
	pub(crate) port: Option<u16>,
}

impl Args
{
	/// Applies any relevant config overrides specified as CLI flags in the given `config` object.
	pub(crate) fn apply_to_config(&self, config: &mut Config)
	{
		if let Some(ip) = self.ip {
			config.http.ip = ip;
		}

		if let Some(port) = self.port {
			config.http.port = port;
		}
	}
}
