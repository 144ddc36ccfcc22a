//! Page layout.
//!
//! All coordinates are in millimetres, measured from the bottom left corner of an A4 page, which is
//! what [`printpdf`] expects.

use std::mem;

use image::DynamicImage;

use super::ReportContent;
use crate::stops::Stop;

pub(super) const PAGE_WIDTH: f32 = 210.0;
pub(super) const PAGE_HEIGHT: f32 = 297.0;

const MARGIN_X: f32 = 20.0;
const MARGIN_Y: f32 = 16.0;
const TEXT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN_X;

/// Millimetres per typographic point.
pub(super) const PT: f32 = 25.4 / 72.0;

/// Distance between two baselines, relative to the font size.
const LEADING: f32 = 1.2;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 14.0;
const BODY_SIZE: f32 = 11.0;

/// Horizontal offset of address values from their labels.
const LABEL_COLUMN: f32 = 22.0;
const VALUE_WIDTH: f32 = TEXT_WIDTH - LABEL_COLUMN;

const MAP_PLACEHOLDER_HEIGHT: f32 = 80.0;
const PHOTO_PLACEHOLDER_HEIGHT: f32 = 60.0;
const PHOTO_WIDTH_RATIO: f32 = 2.0 / 3.0;

/// Space kept free for the stop photo when the map is scaled down.
const MIN_PHOTO_HEIGHT: f32 = 40.0;

const MAP_UNAVAILABLE: &str = "Map image unavailable";
const PHOTO_UNAVAILABLE: &str = "Stop photo unavailable";

/// A single page with all of its elements placed.
#[derive(Debug)]
pub struct Layout
{
	/// The document title (PDF metadata).
	pub title: String,

	/// The page's elements, from top to bottom.
	pub elements: Vec<Element>,
}

#[derive(Debug)]
pub enum Element
{
	Text
	{
		text: String,
		font: Font,

		/// Font size in points.
		size: f32,

		x: f32,
		baseline: f32,
	},

	Image
	{
		image: DynamicImage,
		area: Area,
	},

	/// A grey box drawn in place of an image we could not get.
	Placeholder
	{
		label: &'static str,
		area: Area,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font
{
	Regular,
	Bold,
}

impl Font
{
	/// Average glyph width relative to the font size.
	///
	/// Builtin fonts come without metrics, so this is an estimate for Helvetica that errs on the
	/// wide side.
	fn glyph_width(self) -> f32
	{
		match self {
			Self::Regular => 0.55,
			Self::Bold => 0.6,
		}
	}
}

/// A rectangle on the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area
{
	/// Left edge.
	pub x: f32,

	/// Bottom edge.
	pub y: f32,

	pub width: f32,
	pub height: f32,
}

impl Layout
{
	/// Places the content of a report on a single page.
	///
	/// Images that cannot be decoded are replaced by placeholders. Images too tall for the space
	/// left on the page are scaled down.
	pub fn plan(content: &ReportContent<'_>) -> Self
	{
		let mut column = Column::new();

		column.line(format!("COLLECTO {}", content.code), Font::Bold, TITLE_SIZE);
		column.space(6.0 * PT);

		let reserved = content
			.stop
			.map_or(0.0, |stop| stop_block_height(stop) + MIN_PHOTO_HEIGHT);

		let map = content.map.and_then(|bytes| decode(bytes, "map"));

		column.image(map, TEXT_WIDTH, MAP_PLACEHOLDER_HEIGHT, MAP_UNAVAILABLE, reserved);

		if let Some(stop) = content.stop {
			column.space(12.0 * PT);
			column.line(stop.names(), Font::Bold, HEADING_SIZE);
			column.space(6.0 * PT);
			column.labelled_line("Adresse :", stop.address_fr());
			column.space(2.0 * PT);
			column.labelled_line("Adres :", stop.address_nl());
			column.space(10.0 * PT);

			let photo = content.photo.and_then(|bytes| decode(bytes, "stop photo"));

			column.image(
				photo,
				TEXT_WIDTH * PHOTO_WIDTH_RATIO,
				PHOTO_PLACEHOLDER_HEIGHT,
				PHOTO_UNAVAILABLE,
				0.0,
			);
		}

		Self { title: format!("Collecto {}", content.code), elements: column.elements }
	}

	/// Iterates over the embedded images.
	pub fn images(&self) -> impl Iterator<Item = (&DynamicImage, Area)>
	{
		self.elements.iter().filter_map(|element| match *element {
			Element::Image { ref image, area } => Some((image, area)),
			_ => None,
		})
	}

	/// Iterates over the labels of all placeholders.
	pub fn placeholders(&self) -> impl Iterator<Item = &'static str> + '_
	{
		self.elements.iter().filter_map(|element| match *element {
			Element::Placeholder { label, .. } => Some(label),
			_ => None,
		})
	}
}

/// Places elements from top to bottom, one below the other.
struct Column
{
	/// The top of the remaining free space.
	top: f32,
	elements: Vec<Element>,
}

impl Column
{
	fn new() -> Self
	{
		Self { top: PAGE_HEIGHT - MARGIN_Y, elements: Vec::new() }
	}

	fn space(&mut self, height: f32)
	{
		self.top -= height;
	}

	/// Places text across the full text width, wrapping onto as many lines as needed.
	fn line(&mut self, text: String, font: Font, size: f32)
	{
		for text in wrap(&text, font, size, TEXT_WIDTH) {
			self.elements.push(Element::Text {
				text,
				font,
				size,
				x: MARGIN_X,
				baseline: self.top - size * PT,
			});

			self.top -= line_height(size);
		}
	}

	/// Places a bold label with its value next to it. The value wraps within its own column.
	fn labelled_line(&mut self, label: &str, value: String)
	{
		self.elements.push(Element::Text {
			text: label.to_owned(),
			font: Font::Bold,
			size: BODY_SIZE,
			x: MARGIN_X,
			baseline: self.top - BODY_SIZE * PT,
		});

		for text in wrap(&value, Font::Regular, BODY_SIZE, VALUE_WIDTH) {
			self.elements.push(Element::Text {
				text,
				font: Font::Regular,
				size: BODY_SIZE,
				x: MARGIN_X + LABEL_COLUMN,
				baseline: self.top - BODY_SIZE * PT,
			});

			self.top -= line_height(BODY_SIZE);
		}
	}

	/// Places an image (or a placeholder if there is none), horizontally centered.
	///
	/// `reserved` is the height that must stay free below the image.
	fn image(
		&mut self,
		image: Option<DynamicImage>,
		width: f32,
		placeholder_height: f32,
		placeholder_label: &'static str,
		reserved: f32,
	)
	{
		let max_height = (self.top - MARGIN_Y - reserved).max(1.0);
		let aspect_ratio = match image {
			Some(ref image) => pixels(image.height()) / pixels(image.width()),
			None => placeholder_height / width,
		};

		let (width, height) = fit(width, aspect_ratio, max_height);
		let area = Area {
			x: MARGIN_X + (TEXT_WIDTH - width) / 2.0,
			y: self.top - height,
			width,
			height,
		};

		self.elements.push(match image {
			Some(image) => Element::Image { image, area },
			None => Element::Placeholder { label: placeholder_label, area },
		});

		self.top -= height;
	}
}

/// Scales a box of the given width down until it is at most `max_height` tall.
fn fit(width: f32, aspect_ratio: f32, max_height: f32) -> (f32, f32)
{
	let height = width * aspect_ratio;

	if height <= max_height {
		(width, height)
	} else {
		(max_height / aspect_ratio, max_height)
	}
}

fn line_height(size: f32) -> f32
{
	size * PT * LEADING
}

/// Height of the names and addresses below the map, including surrounding space.
fn stop_block_height(stop: &Stop) -> f32
{
	let heading_lines = wrap(&stop.names(), Font::Bold, HEADING_SIZE, TEXT_WIDTH).len();
	let body_lines = [stop.address_fr(), stop.address_nl()]
		.iter()
		.map(|address| wrap(address, Font::Regular, BODY_SIZE, VALUE_WIDTH).len())
		.sum::<usize>();

	(12.0 + 6.0 + 2.0 + 10.0) * PT
		+ to_f32(heading_lines) * line_height(HEADING_SIZE)
		+ to_f32(body_lines) * line_height(BODY_SIZE)
}

/// Estimated width of `text` in millimetres.
pub(super) fn text_width(text: &str, font: Font, size: f32) -> f32
{
	to_f32(text.chars().count()) * size * PT * font.glyph_width()
}

/// Splits `text` into lines no wider than `width`.
///
/// Lines break at whitespace. Words that do not fit on a line of their own are broken up. Blank
/// text yields a single empty line.
fn wrap(text: &str, font: Font, size: f32, width: f32) -> Vec<String>
{
	let max_chars = chars_per_line(font, size, width);
	let mut lines = Vec::new();
	let mut line = String::new();
	let mut line_chars = 0;

	for mut word in text.split_whitespace() {
		let mut word_chars = word.chars().count();

		if line_chars > 0 && line_chars + 1 + word_chars > max_chars {
			lines.push(mem::take(&mut line));
			line_chars = 0;
		}

		while word_chars > max_chars {
			let split = word
				.char_indices()
				.nth(max_chars)
				.map_or(word.len(), |(index, _)| index);
			let (head, rest) = word.split_at(split);

			lines.push(head.to_owned());
			word = rest;
			word_chars -= max_chars;
		}

		if line_chars > 0 {
			line.push(' ');
			line_chars += 1;
		}

		line.push_str(word);
		line_chars += word_chars;
	}

	if !line.is_empty() || lines.is_empty() {
		lines.push(line);
	}

	lines
}

#[expect(
	clippy::cast_possible_truncation,
	clippy::cast_sign_loss,
	reason = "the result is a small positive number of characters"
)]
fn chars_per_line(font: Font, size: f32, width: f32) -> usize
{
	((width / (size * PT * font.glyph_width())).floor() as usize).max(1)
}

#[expect(clippy::cast_precision_loss, reason = "line and character counts are small")]
fn to_f32(count: usize) -> f32
{
	count as f32
}

#[expect(clippy::cast_precision_loss, reason = "image dimensions are far below 2^24")]
fn pixels(count: u32) -> f32
{
	count as f32
}

fn decode(bytes: &[u8], what: &str) -> Option<DynamicImage>
{
	match image::load_from_memory(bytes) {
		Ok(image) if image.width() > 0 && image.height() > 0 => Some(image),
		Ok(_) => {
			warn!(what, "image has no pixels; using placeholder");
			None
		}
		Err(error) => {
			warn!(what, %error, "failed to decode image; using placeholder");
			None
		}
	}
}
