//! Our implementation of [`problem_details::ProblemType`].

/// The various types of problems that could be referenced by a "problem details" error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem
{
	/// A path parameter could not be parsed.
	InvalidPathParameters,

	/// The requested resource does not exist.
	ResourceNotFound,

	/// A service we depend on failed.
	ExternalService,

	/// Something went wrong on our end.
	Internal,
}

impl Problem
{
	/// The last path segment of the URI identifying this problem.
	pub fn slug(&self) -> &'static str
	{
		match self {
			Self::InvalidPathParameters => "invalid-path-parameters",
			Self::ResourceNotFound => "resource-not-found",
			Self::ExternalService => "external-service",
			Self::Internal => "internal",
		}
	}
}

impl problem_details::ProblemType for Problem
{
	fn uri(&self) -> http::Uri
	{
		format!("/problems/{}", self.slug())
			.parse::<http::Uri>()
			.unwrap_or_else(|err| panic!("hard-coded uri should be valid: {err}"))
	}

	fn status(&self) -> http::StatusCode
	{
		match self {
			Self::InvalidPathParameters => http::StatusCode::BAD_REQUEST,
			Self::ResourceNotFound => http::StatusCode::NOT_FOUND,
			Self::ExternalService => http::StatusCode::BAD_GATEWAY,
			Self::Internal => http::StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn title(&self) -> &str
	{
		match self {
			Self::InvalidPathParameters => "invalid path parameter(s)",
			Self::ResourceNotFound => "resource not found",
			Self::ExternalService => "external service failed",
			Self::Internal => "internal server error",
		}
	}
}
