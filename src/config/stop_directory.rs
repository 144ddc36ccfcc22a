use std::time::Duration;

use serde::Deserialize;
use url::Url;

/// The WFS service publishing the Collecto stops layer.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct StopDirectoryConfig
{
	/// URL of the WFS endpoint.
	pub url: Url,

	/// The feature type to query (`typeName`).
	#[serde(default = "default_type_name")]
	pub type_name: Box<str>,

	/// The CRS features should be returned in (`srsName`).
	#[serde(default = "default_srs_name")]
	pub srs_name: Box<str>,

	/// Base URL stop photos (`image_stop`) are relative to.
	#[serde(default = "default_media_url")]
	pub media_url: Url,

	/// Timeout for a single request (in seconds).
	#[serde(default = "default_timeout", deserialize_with = "super::deserialize_duration")]
	pub timeout: Duration,
}

fn default_type_name() -> Box<str>
{
	Box::from("bm_public_transport:Collecto_stops")
}

fn default_srs_name() -> Box<str>
{
	Box::from("EPSG:3812")
}

fn default_media_url() -> Url
{
	Url::parse("https://data.mobility.brussels/media/")
		.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}"))
}

fn default_timeout() -> Duration
{
	Duration::from_secs(20)
}
