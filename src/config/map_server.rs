use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Deserializer, de};
use url::Url;

/// Where and how to request rendered map pages.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct MapServerConfig
{
	/// Base URL of the WMS endpoint.
	pub url: Url,

	/// Path of the project file, as seen by the map server (`MAP`).
	pub project: Box<str>,

	/// Name of the print layout (`TEMPLATE`).
	pub template: Box<str>,

	/// Output format (`FORMAT`).
	pub format: Box<str>,

	/// Coordinate reference system of the layout (`CRS`).
	pub crs: Box<str>,

	/// Output resolution (`DPI`).
	pub dpi: u32,

	/// Extent of the layout's first map item (`map0:EXTENT`).
	///
	/// Atlas-driven layouts usually compute this themselves.
	pub extent: Option<Extent>,

	/// Which value selects the atlas record (`ATLAS_PK`).
	pub atlas_key: AtlasKey,

	/// Timeout for a single print request (in seconds).
	#[serde(deserialize_with = "super::deserialize_duration")]
	pub timeout: Duration,
}

/// The value sent as `ATLAS_PK`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AtlasKey
{
	/// The stop code from the request path, verbatim.
	#[default]
	StopCode,

	/// The `gid` of the stop's feature in the stop directory.
	FeatureId,
}

/// A bounding box in the layout's CRS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent
{
	pub xmin: f64,
	pub ymin: f64,
	pub xmax: f64,
	pub ymax: f64,
}

impl Default for MapServerConfig
{
	fn default() -> Self
	{
		Self {
			url: Url::parse("http://localhost:5555/")
				.unwrap_or_else(|err| panic!("failed to parse hard-coded URL: {err}")),
			project: Box::from("/data/collecto.qgz"),
			template: Box::from("stoplayout"),
			format: Box::from("png"),
			crs: Box::from("EPSG:3812"),
			dpi: 50,
			extent: None,
			atlas_key: AtlasKey::default(),
			timeout: Duration::from_secs(20),
		}
	}
}

impl fmt::Display for Extent
{
	fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(fmt, "{},{},{},{}", self.xmin, self.ymin, self.xmax, self.ymax)
	}
}

impl<'de> Deserialize<'de> for Extent
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let [xmin, ymin, xmax, ymax] = <[f64; 4]>::deserialize(deserializer)?;

		if !(xmin < xmax && ymin < ymax) {
			return Err(de::Error::custom(format_args!(
				"extent must be `[xmin, ymin, xmax, ymax]` with min < max (got [{xmin}, {ymin}, \
				 {xmax}, {ymax}])"
			)));
		}

		Ok(Self { xmin, ymin, xmax, ymax })
	}
}
