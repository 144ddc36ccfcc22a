use image::DynamicImage;
use printpdf::path::PaintMode;
use printpdf::{
	BuiltinFont,
	Color,
	Image,
	ImageTransform,
	IndirectFontRef,
	Mm,
	PdfDocument,
	PdfLayerReference,
	Rect,
	Rgb,
};

use super::layout::{PAGE_HEIGHT, PAGE_WIDTH, PT, text_width};
use super::{Area, ComposeError, Element, Font, Layout};

/// Resolution images are embedded at; they are scaled to their area afterwards.
const IMAGE_DPI: f32 = 300.0;

const PLACEHOLDER_LABEL_SIZE: f32 = 11.0;

/// Renders a planned page into a PDF document.
pub fn render(layout: &Layout) -> Result<Vec<u8>, ComposeError>
{
	let (document, page, layer) =
		PdfDocument::new(layout.title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

	let layer = document.get_page(page).get_layer(layer);
	let fonts = Fonts {
		regular: document.add_builtin_font(BuiltinFont::Helvetica)?,
		bold: document.add_builtin_font(BuiltinFont::HelveticaBold)?,
	};

	for element in &layout.elements {
		match *element {
			Element::Text { ref text, font, size, x, baseline } => {
				layer.set_fill_color(gray(0.0));
				layer.use_text(text.as_str(), size, Mm(x), Mm(baseline), fonts.get(font));
			}
			Element::Image { ref image, area } => draw_image(&layer, image, area),
			Element::Placeholder { label, area } => draw_placeholder(&layer, label, area, &fonts),
		}
	}

	document.save_to_bytes().map_err(ComposeError::from)
}

struct Fonts
{
	regular: IndirectFontRef,
	bold: IndirectFontRef,
}

impl Fonts
{
	fn get(&self, font: Font) -> &IndirectFontRef
	{
		match font {
			Font::Regular => &self.regular,
			Font::Bold => &self.bold,
		}
	}
}

fn draw_image(layer: &PdfLayerReference, image: &DynamicImage, area: Area)
{
	// printpdf does not support alpha channels
	let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
	let natural_width = natural_size(rgb.width());
	let natural_height = natural_size(rgb.height());

	Image::from_dynamic_image(&rgb).add_to_layer(layer.clone(), ImageTransform {
		translate_x: Some(Mm(area.x)),
		translate_y: Some(Mm(area.y)),
		scale_x: Some(area.width / natural_width),
		scale_y: Some(area.height / natural_height),
		dpi: Some(IMAGE_DPI),
		..ImageTransform::default()
	});
}

fn draw_placeholder(layer: &PdfLayerReference, label: &str, area: Area, fonts: &Fonts)
{
	let rect = Rect::new(
		Mm(area.x),
		Mm(area.y),
		Mm(area.x + area.width),
		Mm(area.y + area.height),
	)
	.with_mode(PaintMode::FillStroke);

	layer.set_fill_color(gray(0.83));
	layer.set_outline_color(gray(0.5));
	layer.set_outline_thickness(1.0);
	layer.add_rect(rect);

	let label_width = text_width(label, Font::Regular, PLACEHOLDER_LABEL_SIZE);
	let x = area.x + (area.width - label_width) / 2.0;
	let baseline = area.y + (area.height - PLACEHOLDER_LABEL_SIZE * PT * 0.7) / 2.0;

	layer.set_fill_color(gray(0.66));
	layer.use_text(label, PLACEHOLDER_LABEL_SIZE, Mm(x), Mm(baseline), &fonts.regular);
}

fn gray(level: f32) -> Color
{
	Color::Rgb(Rgb::new(level, level, level, None))
}

/// Size in millimetres of `pixels` at [`IMAGE_DPI`].
#[expect(clippy::cast_precision_loss, reason = "image dimensions are far below 2^24")]
fn natural_size(pixels: u32) -> f32
{
	pixels as f32 / IMAGE_DPI * 25.4
}
