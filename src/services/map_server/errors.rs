/// Errors that can occur when requesting a print layout from the map server.
#[derive(Debug, Error)]
pub enum PrintError
{
	/// The HTTP request failed in some way.
	#[error(transparent)]
	Http(#[from] reqwest::Error),

	/// The map server responded successfully, but without any image data.
	#[error("map server returned an empty image")]
	EmptyResponse,
}
