/// Errors that can occur when looking up a stop in the directory.
#[derive(Debug, Error)]
pub enum FindStopError
{
	/// The HTTP request failed, or the response was not a valid feature collection.
	#[error(transparent)]
	Http(#[from] reqwest::Error),
}

/// Errors that can occur when downloading a stop photo.
#[derive(Debug, Error)]
pub enum DownloadPhotoError
{
	/// The photo's file name does not form a valid URL.
	#[error("invalid photo file name: {0}")]
	InvalidFileName(#[from] url::ParseError),

	/// The HTTP request failed in some way.
	#[error(transparent)]
	Http(#[from] reqwest::Error),

	/// The media host responded successfully, but without any image data.
	#[error("media host returned an empty image")]
	EmptyResponse,
}
