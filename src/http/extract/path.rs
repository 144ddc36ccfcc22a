use axum::extract::FromRequestParts;
use problem_details::{AsProblemDetails, ExtensionMembers};
use thiserror::Error;

use crate::http::Problem;

mod base
{
	pub(super) use axum::extract::Path as Extractor;
	pub(super) use axum::extract::path::ErrorKind;
	pub(super) use axum::extract::rejection::PathRejection as Rejection;
}

/// An [extractor] for path parameters.
///
/// This is the same as [`axum::extract::Path`], except that it produces the same kind of error
/// response as all of our errors.
///
/// [extractor]: axum::extract
#[derive(Debug, FromRequestParts)]
#[from_request(via(base::Extractor), rejection(PathRejection))]
pub(crate) struct Path<T>(pub T);

/// Rejection for the [`Path`] extractor.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct PathRejection(#[from] base::Rejection);

impl AsProblemDetails for PathRejection
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		match self.0 {
			base::Rejection::MissingPathParams(_) => Problem::Internal,
			_ => Problem::InvalidPathParameters,
		}
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		let base::Rejection::FailedToDeserializePathParams(source) = &self.0 else {
			return;
		};

		match source.kind() {
			base::ErrorKind::ParseErrorAtKey { key, value, expected_type } => {
				let _ = extension_members.add("parameter", key);
				let _ = extension_members.add("value", value);
				let _ = extension_members.add("expected_type", expected_type);
			}
			base::ErrorKind::InvalidUtf8InPathParam { key } => {
				let _ = extension_members.add("parameter", key);
			}
			base::ErrorKind::Message(message) => {
				let _ = extension_members.add("reason", message);
			}
			_ => {}
		}
	}
}

impl_into_response!(PathRejection);
