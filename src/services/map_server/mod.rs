//! This module contains the [`MapServerService`].
//!
//! The map server is a WMS endpoint supporting `GetPrint` requests with atlas iteration (e.g. QGIS
//! server). Every report contains one page of the configured print layout, rendered for the atlas
//! record of the requested stop.

use std::sync::Arc;

use bytes::Bytes;
use derive_more::Debug;
use url::Url;

use crate::config::MapServerConfig;

mod errors;
pub use errors::PrintError;

/// The map server service.
#[derive(Debug, Clone)]
pub struct MapServerService
{
	/// HTTP client so we can make requests to the map server.
	#[debug("reqwest::Client")]
	http_client: reqwest::Client,

	config: Arc<MapServerConfig>,
}

impl MapServerService
{
	pub fn new(http_client: reqwest::Client, config: impl Into<Arc<MapServerConfig>>) -> Self
	{
		Self { http_client, config: config.into() }
	}

	/// Builds the `GetPrint` URL for the atlas record identified by `atlas_pk`.
	///
	/// `atlas_pk` is sent as-is; the map server decides what it matches against.
	pub fn print_url(&self, atlas_pk: &str) -> Url
	{
		let mut url = self.config.url.clone();
		let dpi = self.config.dpi.to_string();

		{
			let mut query = url.query_pairs_mut();

			query
				.append_pair("SERVICE", "WMS")
				.append_pair("VERSION", "1.3.0")
				.append_pair("REQUEST", "GetPrint")
				.append_pair("MAP", &self.config.project)
				.append_pair("TEMPLATE", &self.config.template)
				.append_pair("FORMAT", &self.config.format)
				.append_pair("CRS", &self.config.crs)
				.append_pair("DPI", &dpi);

			if let Some(extent) = self.config.extent {
				query.append_pair("map0:EXTENT", &extent.to_string());
			}

			query.append_pair("ATLAS_PK", atlas_pk);
		}

		url
	}

	/// Renders the print layout for a single atlas record and returns the encoded image.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn print(&self, atlas_pk: &str) -> Result<Bytes, PrintError>
	{
		let response = self
			.http_client
			.get(self.print_url(atlas_pk))
			.timeout(self.config.timeout)
			.send()
			.await?;

		if let Err(error) = response.error_for_status_ref() {
			let response_body = response.text().await.ok();
			debug!(?error, ?response_body, "map server failed to render print layout");
			return Err(error.into());
		}

		let image = response.bytes().await?;

		if image.is_empty() {
			return Err(PrintError::EmptyResponse);
		}

		debug!(size = image.len(), "received rendered map");

		Ok(image)
	}
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use httpmock::Method::GET;
	use httpmock::MockServer;

	use super::*;
	use crate::config::Extent;
	use crate::testing;

	fn service(url: &str) -> testing::Result<MapServerService>
	{
		let config = MapServerConfig {
			url: url.parse()?,
			timeout: Duration::from_secs(5),
			..MapServerConfig::default()
		};

		Ok(MapServerService::new(reqwest::Client::new(), config))
	}

	fn query_value(url: &Url, key: &str) -> Option<String>
	{
		url.query_pairs()
			.find(|(name, _)| name == key)
			.map(|(_, value)| value.into_owned())
	}

	#[test]
	fn print_url_contains_layout_parameters() -> testing::Result
	{
		let url = service("http://localhost:5555/")?.print_url("2");

		testing::assert_eq!(query_value(&url, "SERVICE").as_deref(), Some("WMS"));
		testing::assert_eq!(query_value(&url, "REQUEST").as_deref(), Some("GetPrint"));
		testing::assert_eq!(query_value(&url, "MAP").as_deref(), Some("/data/collecto.qgz"));
		testing::assert_eq!(query_value(&url, "TEMPLATE").as_deref(), Some("stoplayout"));
		testing::assert_eq!(query_value(&url, "FORMAT").as_deref(), Some("png"));
		testing::assert_eq!(query_value(&url, "CRS").as_deref(), Some("EPSG:3812"));
		testing::assert_eq!(query_value(&url, "DPI").as_deref(), Some("50"));
		testing::assert_eq!(query_value(&url, "ATLAS_PK").as_deref(), Some("2"));
		testing::assert_eq!(query_value(&url, "map0:EXTENT"), None);

		Ok(())
	}

	#[test]
	fn print_url_keeps_atlas_pk_verbatim() -> testing::Result
	{
		let url = service("http://localhost:5555/")?.print_url(" 12&ATLAS_PK=13 é");

		testing::assert_eq!(query_value(&url, "ATLAS_PK").as_deref(), Some(" 12&ATLAS_PK=13 é"));
		testing::assert_eq!(url.query_pairs().filter(|(name, _)| name == "ATLAS_PK").count(), 1);

		Ok(())
	}

	#[test]
	fn print_url_includes_configured_extent() -> testing::Result
	{
		let config = MapServerConfig {
			extent: Some(Extent { xmin: 1.0, ymin: 2.0, xmax: 3.5, ymax: 4.0 }),
			..MapServerConfig::default()
		};

		let url = MapServerService::new(reqwest::Client::new(), config).print_url("2");

		testing::assert_eq!(query_value(&url, "map0:EXTENT").as_deref(), Some("1,2,3.5,4"));

		Ok(())
	}

	#[tokio::test]
	async fn print_returns_image_bytes() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET)
					.path("/")
					.query_param("REQUEST", "GetPrint")
					.query_param("ATLAS_PK", "2");
				then.status(200).header("content-type", "image/png").body(&png);
			})
			.await;

		let image = service(&server.url("/"))?.print("2").await?;

		mock.assert_async().await;
		testing::assert_eq!(&image[..], &png[..]);

		Ok(())
	}

	#[tokio::test]
	async fn print_fails_on_server_error() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/");
				then.status(500).body("layout not found");
			})
			.await;

		let result = service(&server.url("/"))?.print("2").await;

		mock.assert_async().await;
		testing::assert_matches!(result, Err(PrintError::Http(_)));

		Ok(())
	}

	#[tokio::test]
	async fn print_fails_on_empty_body() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let mock = server
			.mock_async(|when, then| {
				when.method(GET).path("/");
				then.status(200);
			})
			.await;

		let result = service(&server.url("/"))?.print("2").await;

		mock.assert_async().await;
		testing::assert_matches!(result, Err(PrintError::EmptyResponse));

		Ok(())
	}
}
