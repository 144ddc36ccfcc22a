//! This module contains the [`StopDirectoryService`].
//!
//! The stop directory is a WFS endpoint publishing the Collecto stops layer. It is used to look up
//! the names and addresses printed on a report, the feature id of the stop's atlas record, and the
//! file name of the stop's photo, which is served by a separate media host.

use std::sync::Arc;

use bytes::Bytes;
use derive_more::Debug;
use serde::Serialize;
use url::Url;

use crate::config::StopDirectoryConfig;
use crate::stops::{Stop, StopCode};

mod errors;
pub use errors::{DownloadPhotoError, FindStopError};

mod features;
use features::FeatureCollection;

/// The stop directory service.
#[derive(Debug, Clone)]
pub struct StopDirectoryService
{
	/// HTTP client so we can make requests to the WFS endpoint and the media host.
	#[debug("reqwest::Client")]
	http_client: reqwest::Client,

	config: Arc<StopDirectoryConfig>,
}

impl StopDirectoryService
{
	pub fn new(http_client: reqwest::Client, config: impl Into<Arc<StopDirectoryConfig>>) -> Self
	{
		Self { http_client, config: config.into() }
	}

	/// Looks up the stop with the given code.
	///
	/// Returns `None` if the layer contains no feature whose `code_stop` matches.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn find_stop(&self, code: &StopCode) -> Result<Option<Stop>, FindStopError>
	{
		#[derive(Serialize)]
		#[serde(rename_all = "camelCase")]
		struct QueryParams<'a>
		{
			service: &'a str,
			version: &'a str,
			request: &'a str,
			type_name: &'a str,
			output_format: &'a str,
			srs_name: &'a str,
		}

		let response = self
			.http_client
			.get(self.config.url.clone())
			.query(&QueryParams {
				service: "wfs",
				version: "1.1.0",
				request: "GetFeature",
				type_name: &self.config.type_name,
				output_format: "json",
				srs_name: &self.config.srs_name,
			})
			.timeout(self.config.timeout)
			.send()
			.await?;

		if let Err(error) = response.error_for_status_ref() {
			let response_body = response.text().await.ok();
			error!(?error, ?response_body, "failed to query stop directory");
			return Err(error.into());
		}

		let stop = response
			.json::<FeatureCollection>()
			.await?
			.into_stop(code);

		debug!(found = stop.is_some(), "queried stop directory");

		Ok(stop)
	}

	/// Returns the URL of a stop photo on the media host.
	///
	/// `file_name` is always resolved below the media URL's path, whether or not that path ends
	/// with a `/`.
	pub fn photo_url(&self, file_name: &str) -> Result<Url, url::ParseError>
	{
		let mut base = self.config.media_url.clone();

		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}

		base.join(file_name.trim_start_matches('/'))
	}

	/// Downloads a stop photo.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn download_photo(&self, file_name: &str) -> Result<Bytes, DownloadPhotoError>
	{
		let url = self.photo_url(file_name)?;
		let response = self
			.http_client
			.get(url)
			.timeout(self.config.timeout)
			.send()
			.await?
			.error_for_status()?;

		let photo = response.bytes().await?;

		if photo.is_empty() {
			return Err(DownloadPhotoError::EmptyResponse);
		}

		Ok(photo)
	}
}
