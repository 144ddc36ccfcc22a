//! Utilities for unit & integration tests.

mod macros;

#[allow(unused_imports)]
pub(crate) use macros::*;

pub type Error = anyhow::Error;
pub type Result<T = (), E = Error> = std::result::Result<T, E>;

/// Encodes a solid-color PNG of the given size.
pub(crate) fn png(width: u32, height: u32) -> Result<Vec<u8>>
{
	use std::io::Cursor;

	use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};

	let image = RgbImage::from_pixel(width, height, Rgb([40, 110, 180]));
	let mut buf = Vec::new();

	DynamicImage::ImageRgb8(image).write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)?;

	Ok(buf)
}

