/// Errors that can occur when rendering a report.
#[derive(Debug, Error)]
pub enum ComposeError
{
	/// [`printpdf`] failed to build or serialize the document.
	#[error("failed to write pdf: {0}")]
	Pdf(#[from] printpdf::Error),
}
