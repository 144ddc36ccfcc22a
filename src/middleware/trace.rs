use std::net::SocketAddr;
use std::time::Duration;

use axum::extract::ConnectInfo;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::request_id::RequestId;
use tower_http::trace::{
	DefaultOnBodyChunk,
	DefaultOnEos,
	HttpMakeClassifier,
	MakeSpan,
	OnFailure,
	OnRequest,
	OnResponse,
	TraceLayer,
};
use tracing::field;

/// Creates a [`tower::Layer`], which produces a middleware that will emit tracing spans & events
/// for every HTTP request.
///
/// The `include_headers` parameter can be used to control whether request/response headers should
/// be included in the traces.
pub(crate) fn layer<B>(
	include_headers: bool,
) -> TraceLayer<
	HttpMakeClassifier,
	impl MakeSpan<B> + Clone,
	impl OnRequest<B> + Clone,
	impl OnResponse<B> + Clone,
	DefaultOnBodyChunk,
	DefaultOnEos,
	impl OnFailure<ServerErrorsFailureClass> + Clone,
>
{
	let on_request = move |req: &http::Request<B>, span: &tracing::Span| {
		on_request(req, span, include_headers);
	};

	let on_response = move |res: &http::Response<B>, latency: Duration, span: &tracing::Span| {
		on_response(res, latency, span, include_headers);
	};

	TraceLayer::new_for_http()
		.make_span_with(make_span::<B>)
		.on_request(on_request)
		.on_response(on_response)
		.on_failure(on_failure)
}

/// Creates each request span.
///
/// The request ID is recorded if a `SetRequestIdLayer` ran before this middleware, the client
/// address if the router was turned into a service with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
fn make_span<B>(request: &http::Request<B>) -> tracing::Span
{
	let request_id = request
		.extensions()
		.get::<RequestId>()
		.and_then(|request_id| request_id.header_value().to_str().ok());

	let client_addr = request
		.extensions()
		.get::<ConnectInfo<SocketAddr>>()
		.map(|&ConnectInfo(addr)| addr);

	info_span! {
		target: "collecto_reports::http",
		"request",
		request.id = request_id.map(field::display),
		request.client_addr = client_addr.map(field::display),
		request.method = field::Empty,
		request.uri = field::Empty,
		request.headers = field::Empty,
		response.status = field::Empty,
		response.headers = field::Empty,
		latency = field::Empty,
	}
}

/// Records metadata about the request.
fn on_request<B>(request: &http::Request<B>, span: &tracing::Span, include_headers: bool)
{
	span.record("request.method", field::display(request.method()));
	span.record("request.uri", field::display(request.uri()));

	if include_headers {
		span.record("request.headers", field::debug(request.headers()));
	}
}

/// Records metadata about the response.
fn on_response<B>(
	response: &http::Response<B>,
	latency: Duration,
	span: &tracing::Span,
	include_headers: bool,
)
{
	span.record("response.status", field::display(response.status()));

	if include_headers {
		span.record("response.headers", field::debug(response.headers()));
	}

	span.record("latency", field::debug(latency));
}

/// Called whenever a request "failed".
///
/// What qualifies as a "failure" is determined by `ServerErrorsFailureClass`, which means a
/// `5xx` status code or an error from the inner service.
fn on_failure(failure_class: ServerErrorsFailureClass, latency: Duration, span: &tracing::Span)
{
	span.in_scope(|| match failure_class {
		ServerErrorsFailureClass::StatusCode(status) => {
			error!(%status, ?latency, "http handler failed");
		}
		ServerErrorsFailureClass::Error(error) => {
			error!(%error, ?latency, "http handler failed");
		}
	});
}
