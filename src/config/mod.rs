//! Service configuration.
//!
//! This is loaded from a TOML file on startup. Every section is optional; missing values fall back
//! to defaults that match a local development setup (a map server on `localhost:5555`, no stop
//! directory).

use std::path::Path;
use std::time::Duration;
use std::{fs, io};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

mod http;
mod map_server;
mod runtime;
mod stop_directory;
pub mod tracing;

pub use self::http::HttpConfig;
pub use self::map_server::{AtlasKey, Extent, MapServerConfig};
pub use self::runtime::RuntimeConfig;
pub use self::stop_directory::StopDirectoryConfig;
pub use self::tracing::TracingConfig;

/// The global configuration for the service.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config
{
	pub runtime: RuntimeConfig,
	pub http: HttpConfig,
	pub tracing: TracingConfig,
	pub map_server: MapServerConfig,

	/// The WFS endpoint publishing stop metadata.
	///
	/// If this is omitted, reports only contain the title and the rendered map.
	pub stop_directory: Option<StopDirectoryConfig>,
}

/// Errors that can occur when loading the configuration file.
#[derive(Debug, Error)]
pub enum LoadConfigError
{
	/// We failed to read the file.
	#[error("failed to read configuration file at {path:?}: {source}")]
	Read
	{
		path: Box<Path>,
		#[source]
		source: io::Error,
	},

	/// The file does not contain a valid configuration.
	#[error("failed to parse configuration file: {0}")]
	Parse(#[from] toml::de::Error),
}

impl Config
{
	/// Reads and parses the TOML file at `path`.
	pub fn load_from_file(path: &Path) -> Result<Self, LoadConfigError>
	{
		let text = fs::read_to_string(path)
			.map_err(|source| LoadConfigError::Read { path: Box::from(path), source })?;

		Self::from_toml(&text).map_err(LoadConfigError::from)
	}

	/// Parses a configuration from TOML text.
	pub fn from_toml(text: &str) -> Result<Self, toml::de::Error>
	{
		toml::from_str(text)
	}
}

/// Deserializes a number of seconds (fractions allowed) into a [`Duration`].
fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
	D: Deserializer<'de>,
{
	use serde::de;

	let secs = f64::deserialize(deserializer)?;

	Duration::try_from_secs_f64(secs).map_err(de::Error::custom)
}
