//! [`tracing`] related configuration.
//!
//! Logs can be emitted to stderr and to rotating JSON files; both outputs are configured
//! separately and can carry their own filter directives on top of the global ones.
//!
//! [`tracing`]: ::tracing

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, de};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct TracingConfig
{
	/// Initialize a tracing subscriber.
	pub enable: bool,

	/// Whether to include HTTP headers in request spans.
	pub include_http_headers: bool,

	/// Global filters that apply to all layers.
	pub filters: Vec<Filter>,

	pub stderr: StderrConfig,
	pub files: Option<FilesConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct StderrConfig
{
	/// Emit traces to stderr.
	pub enable: bool,

	/// Emit ANSI escape codes for colors and other formatting.
	pub ansi: bool,

	/// Filters that apply just to this layer.
	pub filters: Vec<Filter>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FilesConfig
{
	/// Emit traces to files.
	#[serde(default)]
	pub enable: bool,

	/// Directory to store log files in.
	#[serde(default = "default_files_directory")]
	pub directory: Box<Path>,

	/// Filters that apply just to this layer.
	#[serde(default)]
	pub filters: Vec<Filter>,
}

/// A filter directive.
#[derive(Debug)]
pub struct Filter(pub tracing_subscriber::filter::Directive);

impl TracingConfig
{
	/// Constructs an [`EnvFilter`] from the global filter directives.
	///
	/// `RUST_LOG` is respected and the configured directives are added on top.
	pub fn env_filter(&self) -> EnvFilter
	{
		fold_filters(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
			&self.filters,
		)
	}
}

impl Default for TracingConfig
{
	fn default() -> Self
	{
		Self {
			enable: true,
			include_http_headers: false,
			filters: Vec::new(),
			stderr: StderrConfig::default(),
			files: None,
		}
	}
}

impl StderrConfig
{
	pub fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

impl Default for StderrConfig
{
	fn default() -> Self
	{
		Self { enable: true, ansi: true, filters: Vec::new() }
	}
}

impl FilesConfig
{
	pub fn env_filter(&self) -> Option<EnvFilter>
	{
		layer_filter(&self.filters)
	}
}

impl<'de> Deserialize<'de> for Filter
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		String::deserialize(deserializer)?
			.parse()
			.map(Self)
			.map_err(de::Error::custom)
	}
}

fn layer_filter(filters: &[Filter]) -> Option<EnvFilter>
{
	(!filters.is_empty()).then(|| fold_filters(EnvFilter::from_default_env(), filters))
}

fn fold_filters(base: EnvFilter, filters: &[Filter]) -> EnvFilter
{
	filters
		.iter()
		.map(|Filter(directive)| directive.clone())
		.fold(base, EnvFilter::add_directive)
}

fn default_files_directory() -> Box<Path>
{
	PathBuf::from("/var/log/collecto-reports").into_boxed_path()
}
