//! This module contains the HTTP handlers for the `/report` endpoint.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::{Router, routing};
use http::header;

use super::{GenerateReportError, Report, ReportService};
use crate::http::extract::Path;
use crate::stops::StopCode;

/// Returns a router for the `/report` endpoint.
pub fn router(report_service: ReportService) -> Router
{
	Router::new()
		.route("/collecto/{stop}", routing::get(get_collecto_report))
		.route("/collecto/{stop}/", routing::get(get_collecto_report))
		.with_state(report_service)
}

#[instrument(level = "debug", skip(report_service), err(Debug, level = "debug"))]
async fn get_collecto_report(
	State(report_service): State<ReportService>,
	Path(stop): Path<StopCode>,
) -> Result<Report, GenerateReportError>
{
	report_service.generate_report(stop).await
}

impl IntoResponse for Report
{
	fn into_response(self) -> Response
	{
		let content_disposition = format!("inline; filename=\"{}\"", self.filename);
		let headers = [
			(header::CONTENT_TYPE, String::from(mime::APPLICATION_PDF.as_ref())),
			(header::CONTENT_DISPOSITION, content_disposition),
		];

		(headers, self.pdf).into_response()
	}
}

#[cfg(test)]
mod tests
{
	use std::time::Duration;

	use axum::body::Body;
	use bytes::Bytes;
	use http::{HeaderMap, Request, StatusCode};
	use http_body_util::BodyExt;
	use httpmock::Method::GET;
	use httpmock::MockServer;
	use tower::ServiceExt;

	use super::*;
	use crate::config::{AtlasKey, MapServerConfig, StopDirectoryConfig};
	use crate::services::{MapServerService, StopDirectoryService};
	use crate::testing;

	const STOPS: &str = r#"{
		"type": "FeatureCollection",
		"features": [
			{
				"type": "Feature",
				"properties": {
					"code_stop": "2",
					"gid": 17,
					"name_fr": "Bourse",
					"name_nl": "Beurs",
					"image_stop": "collecto/2.png"
				}
			}
		]
	}"#;

	fn report_service(
		server: &MockServer,
		with_directory: bool,
		atlas_key: AtlasKey,
	) -> testing::Result<ReportService>
	{
		let http_client = reqwest::Client::new();
		let map_server = MapServerService::new(http_client.clone(), MapServerConfig {
			url: server.url("/ows").parse()?,
			timeout: Duration::from_secs(5),
			..MapServerConfig::default()
		});

		let stop_directory = if with_directory {
			Some(StopDirectoryService::new(http_client, StopDirectoryConfig {
				url: server.url("/wfs").parse()?,
				type_name: Box::from("bm_public_transport:Collecto_stops"),
				srs_name: Box::from("EPSG:3812"),
				media_url: server.url("/media/").parse()?,
				timeout: Duration::from_secs(5),
			}))
		} else {
			None
		};

		Ok(ReportService::new(map_server, stop_directory, atlas_key))
	}

	async fn get(
		service: ReportService,
		uri: &str,
	) -> testing::Result<(StatusCode, HeaderMap, Bytes)>
	{
		let request = Request::get(uri).body(Body::empty())?;
		let response = router(service).oneshot(request).await?;
		let (parts, body) = response.into_parts();
		let body = body.collect().await?.to_bytes();

		Ok((parts.status, parts.headers, body))
	}

	#[tokio::test]
	async fn serves_pdf_for_stop() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows").query_param("ATLAS_PK", "2");
				then.status(200).header("content-type", "image/png").body(&png);
			})
			.await;

		let service = report_service(&server, false, AtlasKey::StopCode)?;
		let (status, headers, body) = get(service, "/collecto/2/").await?;

		map.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
		testing::assert_eq!(
			headers[header::CONTENT_DISPOSITION],
			"inline; filename=\"collecto_2.pdf\""
		);
		testing::assert!(body.starts_with(b"%PDF-"));

		Ok(())
	}

	#[tokio::test]
	async fn trailing_slash_is_optional() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows");
				then.status(200).body(&png);
			})
			.await;

		let service = report_service(&server, false, AtlasKey::StopCode)?;
		let (status, ..) = get(service, "/collecto/2").await?;

		map.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);

		Ok(())
	}

	#[tokio::test]
	async fn stop_code_is_forwarded_verbatim() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows").query_param("ATLAS_PK", "A 12");
				then.status(200).body(&png);
			})
			.await;

		let service = report_service(&server, false, AtlasKey::StopCode)?;
		let (status, headers, _) = get(service, "/collecto/A%2012/").await?;

		map.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(
			headers[header::CONTENT_DISPOSITION],
			"inline; filename=\"collecto_A_12.pdf\""
		);

		Ok(())
	}

	#[tokio::test]
	async fn map_failure_still_produces_pdf() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows");
				then.status(500).body("layout not found");
			})
			.await;

		let service = report_service(&server, false, AtlasKey::StopCode)?;
		let (status, headers, body) = get(service, "/collecto/2/").await?;

		map.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
		testing::assert!(body.starts_with(b"%PDF-"));

		Ok(())
	}

	#[tokio::test]
	async fn uses_feature_id_and_photo_from_directory() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let directory = server
			.mock_async(|when, then| {
				when.method(GET).path("/wfs").query_param("request", "GetFeature");
				then.status(200).header("content-type", "application/json").body(STOPS);
			})
			.await;

		let map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows").query_param("ATLAS_PK", "17");
				then.status(200).body(&png);
			})
			.await;

		let photo = server
			.mock_async(|when, then| {
				when.method(GET).path("/media/collecto/2.png");
				then.status(200).body(&png);
			})
			.await;

		let service = report_service(&server, true, AtlasKey::FeatureId)?;
		let (status, _, body) = get(service, "/collecto/2/").await?;

		directory.assert_async().await;
		map.assert_async().await;
		photo.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);
		testing::assert!(body.starts_with(b"%PDF-"));

		Ok(())
	}

	#[tokio::test]
	async fn missing_photo_still_produces_pdf() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let _directory = server
			.mock_async(|when, then| {
				when.method(GET).path("/wfs");
				then.status(200).header("content-type", "application/json").body(STOPS);
			})
			.await;

		let _map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows");
				then.status(200).body(&png);
			})
			.await;

		let photo = server
			.mock_async(|when, then| {
				when.method(GET).path("/media/collecto/2.png");
				then.status(404);
			})
			.await;

		let service = report_service(&server, true, AtlasKey::StopCode)?;
		let (status, headers, body) = get(service, "/collecto/2/").await?;

		photo.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);
		testing::assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
		testing::assert!(body.starts_with(b"%PDF-"));

		Ok(())
	}

	#[tokio::test]
	async fn empty_photo_still_produces_pdf() -> testing::Result
	{
		let png = testing::png(10, 10)?;
		let server = MockServer::start_async().await;
		let _directory = server
			.mock_async(|when, then| {
				when.method(GET).path("/wfs");
				then.status(200).header("content-type", "application/json").body(STOPS);
			})
			.await;

		let _map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows");
				then.status(200).body(&png);
			})
			.await;

		let photo = server
			.mock_async(|when, then| {
				when.method(GET).path("/media/collecto/2.png");
				then.status(200);
			})
			.await;

		let service = report_service(&server, true, AtlasKey::StopCode)?;
		let (status, _, body) = get(service, "/collecto/2/").await?;

		photo.assert_async().await;
		testing::assert_eq!(status, StatusCode::OK);
		testing::assert!(body.starts_with(b"%PDF-"));

		Ok(())
	}

	#[tokio::test]
	async fn unknown_stop_is_not_found() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let _directory = server
			.mock_async(|when, then| {
				when.method(GET).path("/wfs");
				then.status(200).header("content-type", "application/json").body(STOPS);
			})
			.await;

		let map = server
			.mock_async(|when, then| {
				when.method(GET).path("/ows");
				then.status(200);
			})
			.await;

		let service = report_service(&server, true, AtlasKey::StopCode)?;
		let (status, headers, body) = get(service, "/collecto/99/").await?;
		let problem = serde_json::from_slice::<serde_json::Value>(&body)?;

		map.assert_hits_async(0).await;
		testing::assert_eq!(status, StatusCode::NOT_FOUND);
		testing::assert_eq!(headers[header::CONTENT_TYPE], "application/problem+json");
		testing::assert_eq!(problem["detail"], "Collecto stop with code_stop='99' not found");
		testing::assert_eq!(problem["code_stop"], "99");

		Ok(())
	}

	#[tokio::test]
	async fn directory_failure_is_bad_gateway() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let _directory = server
			.mock_async(|when, then| {
				when.method(GET).path("/wfs");
				then.status(503);
			})
			.await;

		let service = report_service(&server, true, AtlasKey::StopCode)?;
		let (status, ..) = get(service, "/collecto/2/").await?;

		testing::assert_eq!(status, StatusCode::BAD_GATEWAY);

		Ok(())
	}

	#[tokio::test]
	async fn blank_stop_code_is_rejected() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let service = report_service(&server, false, AtlasKey::StopCode)?;
		let (status, ..) = get(service, "/collecto/%20/").await?;

		testing::assert_eq!(status, StatusCode::BAD_REQUEST);

		Ok(())
	}

	#[tokio::test]
	async fn only_get_is_allowed() -> testing::Result
	{
		let server = MockServer::start_async().await;
		let service = report_service(&server, false, AtlasKey::StopCode)?;
		let request = Request::post("/collecto/2/").body(Body::empty())?;
		let response = router(service).oneshot(request).await?;

		testing::assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

		Ok(())
	}
}
