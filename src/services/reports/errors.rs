use problem_details::{AsProblemDetails, ExtensionMembers};
use tokio::task::JoinError;

use crate::http::Problem;
use crate::pdf::ComposeError;
use crate::services::stop_directory::FindStopError;
use crate::stops::StopCode;

/// Errors that can occur when generating a report.
#[derive(Debug, Error)]
pub enum GenerateReportError
{
	/// The stop directory does not know the requested stop.
	#[error("Collecto stop with code_stop='{code}' not found")]
	StopNotFound
	{
		code: StopCode
	},

	/// Querying the stop directory failed.
	#[error("failed to query stop directory")]
	StopDirectory(#[from] FindStopError),

	/// Rendering the PDF failed.
	#[error("failed to compose pdf")]
	ComposePdf(#[from] ComposeError),

	/// The blocking task rendering the PDF panicked or was cancelled.
	#[error("failed to compose pdf")]
	Join(#[from] JoinError),
}

impl AsProblemDetails for GenerateReportError
{
	type ProblemType = Problem;

	fn problem_type(&self) -> Self::ProblemType
	{
		match self {
			Self::StopNotFound { .. } => Problem::ResourceNotFound,
			Self::StopDirectory(_) => Problem::ExternalService,
			Self::ComposePdf(_) | Self::Join(_) => Problem::Internal,
		}
	}

	fn add_extension_members(&self, extension_members: &mut ExtensionMembers)
	{
		if let Self::StopNotFound { code } = self {
			let _ = extension_members.add("code_stop", code.as_str());
		}
	}
}

impl_into_response!(GenerateReportError);
