//! PDF rendering of Collecto reports.
//!
//! Composing a report happens in two steps: [`Layout::plan()`] decodes the images and places every
//! element on the page, [`render()`] turns the result into PDF bytes using [`printpdf`]. Both steps
//! are blocking and should not run on the async executor.

use crate::stops::Stop;

mod errors;
pub use errors::ComposeError;

mod layout;
pub use layout::{Area, Element, Font, Layout};

mod render;
pub use render::render;

/// Everything that goes into a report.
#[derive(Debug, Clone, Copy)]
pub struct ReportContent<'a>
{
	/// The stop code shown in the title.
	pub code: &'a str,

	/// The encoded map image, if one could be fetched.
	pub map: Option<&'a [u8]>,

	/// The stop's attributes, if a stop directory is configured.
	pub stop: Option<&'a Stop>,

	/// The encoded stop photo, if one could be fetched.
	pub photo: Option<&'a [u8]>,
}

/// Lays out and renders a report.
pub fn compose(content: &ReportContent<'_>) -> Result<Vec<u8>, ComposeError>
{
	render(&Layout::plan(content))
}
