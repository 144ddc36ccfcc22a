//! A middleware to catch panics and turn them into responses.
//!
//! See [`tower_http::catch_panic`] for more details.

use std::any::Any;
use std::borrow::Cow;

use axum::response::IntoResponse;
use problem_details::AsProblemDetails;
use thiserror::Error;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::http::Problem;

/// Creates a [`tower::Layer`], which produces a middleware that will catch panics in its inner
/// service and turn them into `500 Internal Server Error` responses.
pub(crate) fn layer() -> CatchPanicLayer<PanicHandler>
{
	CatchPanicLayer::custom(PanicHandler)
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PanicHandler;

#[derive(Debug, Error)]
#[error("something went wrong; please report this incident")]
struct PanicRejection;

impl AsProblemDetails for PanicRejection
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		Problem::Internal
	}

	fn detail(&self) -> Cow<'static, str>
	{
		Cow::Borrowed("something went wrong; please report this incident")
	}
}

impl ResponseForPanic for PanicHandler
{
	type ResponseBody = crate::http::Body;

	fn response_for_panic(
		&mut self,
		error: Box<dyn Any + Send + 'static>,
	) -> http::Response<Self::ResponseBody>
	{
		let panic_message = error
			.downcast_ref::<&str>()
			.copied()
			.or_else(|| error.downcast_ref::<String>().map(String::as_str));

		error!(?panic_message, "http handler panicked");

		PanicRejection.as_problem_details().into_response()
	}
}
