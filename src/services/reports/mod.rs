//! This module contains the [`ReportService`].
//!
//! A report is a single PDF page showing the rendered map of a stop and, if a stop directory is
//! configured, the stop's names, addresses and photo.

use bytes::Bytes;

use crate::config::AtlasKey;
use crate::pdf::{self, ReportContent};
use crate::services::{MapServerService, StopDirectoryService};
use crate::stops::{Stop, StopCode};

mod errors;
pub use errors::GenerateReportError;

pub mod http;

/// A generated report.
#[derive(Debug)]
pub struct Report
{
	/// The file name suggested to clients.
	pub filename: String,

	/// The PDF document.
	pub pdf: Bytes,
}

/// The report service.
#[derive(Debug, Clone)]
pub struct ReportService
{
	map_server: MapServerService,
	stop_directory: Option<StopDirectoryService>,

	/// Which value is sent to the map server to select the stop's atlas record.
	atlas_key: AtlasKey,
}

impl ReportService
{
	pub fn new(
		map_server: MapServerService,
		stop_directory: Option<StopDirectoryService>,
		atlas_key: AtlasKey,
	) -> Self
	{
		Self { map_server, stop_directory, atlas_key }
	}

	/// Generates the report for a single stop.
	///
	/// Missing images do not fail the request; the report contains a placeholder instead.
	#[instrument(err(Debug, level = "debug"))]
	pub async fn generate_report(&self, code: StopCode) -> Result<Report, GenerateReportError>
	{
		let stop = match self.stop_directory {
			None => None,
			Some(ref stop_directory) => match stop_directory.find_stop(&code).await? {
				Some(stop) => Some(stop),
				None => return Err(GenerateReportError::StopNotFound { code }),
			},
		};

		let (map, photo) = tokio::join!(
			self.fetch_map(&code, stop.as_ref()),
			self.fetch_photo(stop.as_ref()),
		);

		let title = stop
			.as_ref()
			.and_then(|stop| stop.code_stop.as_deref())
			.unwrap_or(code.as_str())
			.to_owned();

		let filename = file_name(&title);
		let pdf = tokio::task::spawn_blocking(move || {
			pdf::compose(&ReportContent {
				code: &title,
				map: map.as_deref(),
				stop: stop.as_ref(),
				photo: photo.as_deref(),
			})
		})
		.await??;

		info!(%code, size = pdf.len(), "generated report");

		Ok(Report { filename, pdf: Bytes::from(pdf) })
	}

	/// Fetches the rendered map, or `None` if there is none.
	async fn fetch_map(&self, code: &StopCode, stop: Option<&Stop>) -> Option<Bytes>
	{
		let atlas_pk = match self.atlas_key {
			AtlasKey::StopCode => code.as_str(),
			AtlasKey::FeatureId => {
				let Some(gid) = stop.and_then(|stop| stop.gid.as_deref()) else {
					warn!(%code, "stop has no feature id; report will not contain a map");
					return None;
				};

				gid
			}
		};

		self.map_server
			.print(atlas_pk)
			.await
			.inspect_err(|error| warn!(%code, %error, "failed to fetch map image"))
			.ok()
	}

	/// Downloads the stop photo, or `None` if there is none.
	async fn fetch_photo(&self, stop: Option<&Stop>) -> Option<Bytes>
	{
		let stop_directory = self.stop_directory.as_ref()?;
		let file_name = stop?.image_stop.as_deref()?;

		stop_directory
			.download_photo(file_name)
			.await
			.inspect_err(|error| warn!(file_name, %error, "failed to fetch stop photo"))
			.ok()
	}
}

/// Builds the file name of a report, replacing characters that are not safe in headers.
fn file_name(code: &str) -> String
{
	let code = code
		.trim()
		.chars()
		.map(|character| match character {
			'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' => character,
			_ => '_',
		})
		.collect::<String>();

	format!("collecto_{code}.pdf")
}
