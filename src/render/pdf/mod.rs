//! PDF rendering surface built on the lopdf object model.
//!
//! The surface accumulates content-stream operations per page and only
//! materializes the PDF object graph in [`PdfSurface::finish`], so a
//! failed generation leaves no partial artifact.

mod metrics;

pub use metrics::text_width;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream};
use std::io::Write;

use crate::assets::{ColorMode, ImageAsset, ImageFormat};
use crate::error::{Error, Result};
use crate::layout::TextSurface;
use crate::model::SpanStyle;

/// A4 page size in points.
pub const A4_WIDTH: f32 = 595.0;
pub const A4_HEIGHT: f32 = 842.0;

#[derive(Default)]
struct PageBuild {
    ops: Vec<Operation>,
    images: Vec<(String, ImageAsset)>,
}

/// Text surface writing an A4 PDF with the base-14 Helvetica family.
///
/// Layout coordinates are top-down; the surface flips to PDF's
/// bottom-up space when emitting operations.
pub struct PdfSurface {
    font_size: f32,
    pages: Vec<PageBuild>,
    image_count: usize,
    title: Option<String>,
}

impl PdfSurface {
    /// Create a surface with the given body font size.
    pub fn new(font_size: f32) -> Self {
        Self {
            font_size,
            pages: vec![PageBuild::default()],
            image_count: 0,
            title: None,
        }
    }

    /// Set the document title written to the info dictionary.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Number of pages accumulated so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current(&mut self) -> &mut PageBuild {
        self.pages.last_mut().expect("surface always has a page")
    }

    /// Build the PDF object graph and serialize it.
    pub fn finish(self) -> Result<Vec<u8>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_ids: Vec<(&str, lopdf::ObjectId)> = [
            SpanStyle::normal(),
            SpanStyle::bold(),
            SpanStyle::italic(),
            SpanStyle {
                bold: true,
                italic: true,
            },
        ]
        .iter()
        .map(|style| {
            let mut font = Dictionary::new();
            font.set("Type", Object::Name(b"Font".to_vec()));
            font.set("Subtype", Object::Name(b"Type1".to_vec()));
            font.set(
                "BaseFont",
                Object::Name(metrics::font_name(*style).as_bytes().to_vec()),
            );
            font.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
            (
                metrics::font_key(*style),
                doc.add_object(Object::Dictionary(font)),
            )
        })
        .collect();

        let mut kids = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let mut xobjects = Dictionary::new();
            for (name, image) in &page.images {
                let id = add_image_object(&mut doc, image)?;
                xobjects.set(name.as_str(), Object::Reference(id));
            }

            let content = Content {
                operations: page.ops.clone(),
            };
            let encoded = content
                .encode()
                .map_err(|e| Error::PdfWrite(e.to_string()))?;
            let compressed = deflate(&encoded)?;
            let mut stream_dict = Dictionary::new();
            stream_dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
            let content_id = doc.add_object(Object::Stream(Stream::new(stream_dict, compressed)));

            let mut fonts = Dictionary::new();
            for (key, id) in &font_ids {
                fonts.set(*key, Object::Reference(*id));
            }
            let mut resources = Dictionary::new();
            resources.set("Font", Object::Dictionary(fonts));
            if !xobjects.is_empty() {
                resources.set("XObject", Object::Dictionary(xobjects));
            }

            let mut page_dict = Dictionary::new();
            page_dict.set("Type", Object::Name(b"Page".to_vec()));
            page_dict.set("Parent", Object::Reference(pages_id));
            page_dict.set(
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(A4_WIDTH),
                    Object::Real(A4_HEIGHT),
                ]),
            );
            page_dict.set("Contents", Object::Reference(content_id));
            page_dict.set("Resources", Object::Dictionary(resources));
            kids.push(Object::Reference(
                doc.add_object(Object::Dictionary(page_dict)),
            ));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", Object::Integer(kids.len() as i64));
        pages_dict.set("Kids", Object::Array(kids));
        doc.objects
            .insert(pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(pages_id));
        let catalog_id = doc.add_object(Object::Dictionary(catalog));
        doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut info = Dictionary::new();
        info.set(
            "Producer",
            Object::string_literal(concat!("akta ", env!("CARGO_PKG_VERSION"))),
        );
        if let Some(title) = &self.title {
            info.set("Title", Object::string_literal(title.as_str()));
        }
        let info_id = doc.add_object(Object::Dictionary(info));
        doc.trailer.set("Info", Object::Reference(info_id));

        let mut out = Vec::new();
        doc.save_to(&mut out)?;
        Ok(out)
    }
}

impl TextSurface for PdfSurface {
    fn measure_width(&self, text: &str, style: SpanStyle) -> f32 {
        metrics::text_width(text, style, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: SpanStyle) {
        if text.is_empty() {
            return;
        }
        let size = self.font_size;
        let pdf_y = A4_HEIGHT - y;
        let ops = &mut self.current().ops;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![
                Object::Name(metrics::font_key(style).as_bytes().to_vec()),
                Object::Real(size),
            ],
        ));
        ops.push(Operation::new(
            "Td",
            vec![Object::Real(x), Object::Real(pdf_y)],
        ));
        ops.push(Operation::new("Tj", vec![Object::string_literal(text)]));
        ops.push(Operation::new("ET", vec![]));
    }

    fn new_page(&mut self) {
        self.pages.push(PageBuild::default());
    }

    fn page_width(&self) -> f32 {
        A4_WIDTH
    }

    fn page_height(&self) -> f32 {
        A4_HEIGHT
    }

    fn place_image(&mut self, image: &ImageAsset, x: f32, y: f32, w: f32, h: f32) -> bool {
        if !image.embeddable() {
            return false;
        }
        self.image_count += 1;
        let name = format!("Im{}", self.image_count);
        let bottom = A4_HEIGHT - y - h;
        let page = self.current();
        page.ops.push(Operation::new("q", vec![]));
        page.ops.push(Operation::new(
            "cm",
            vec![
                Object::Real(w),
                Object::Real(0.0),
                Object::Real(0.0),
                Object::Real(h),
                Object::Real(x),
                Object::Real(bottom),
            ],
        ));
        page.ops.push(Operation::new(
            "Do",
            vec![Object::Name(name.as_bytes().to_vec())],
        ));
        page.ops.push(Operation::new("Q", vec![]));
        page.images.push((name, image.clone()));
        true
    }
}

/// Create the XObject for an image and return its id.
fn add_image_object(doc: &mut Document, image: &ImageAsset) -> Result<lopdf::ObjectId> {
    let colorspace: &[u8] = match image.color {
        ColorMode::Gray => b"DeviceGray",
        ColorMode::Rgb => b"DeviceRGB",
        ColorMode::Unsupported => {
            return Err(Error::ImageDecode(
                "image flavor cannot be embedded".to_string(),
            ))
        }
    };

    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Image".to_vec()));
    dict.set("Width", Object::Integer(image.width as i64));
    dict.set("Height", Object::Integer(image.height as i64));
    dict.set("ColorSpace", Object::Name(colorspace.to_vec()));
    dict.set("BitsPerComponent", Object::Integer(8));

    let data = match image.format {
        ImageFormat::Jpeg => {
            dict.set("Filter", Object::Name(b"DCTDecode".to_vec()));
            image.data.clone()
        }
        ImageFormat::Png => {
            // FlateDecode with PNG predictors consumes the IDAT payload
            // as-is; no pixel decoding happens on our side.
            dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
            let mut parms = Dictionary::new();
            parms.set("Predictor", Object::Integer(15));
            parms.set(
                "Colors",
                Object::Integer(if image.color == ColorMode::Rgb { 3 } else { 1 }),
            );
            parms.set("BitsPerComponent", Object::Integer(8));
            parms.set("Columns", Object::Integer(image.width as i64));
            dict.set("DecodeParms", Object::Dictionary(parms));
            image.png_idat()?
        }
    };

    Ok(doc.add_object(Object::Stream(Stream::new(dict, data))))
}

/// Zlib-compress a content stream.
fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::png_bytes;

    #[test]
    fn test_empty_document_saves() {
        let surface = PdfSurface::new(11.0);
        let bytes = surface.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_pages_accumulate() {
        let mut surface = PdfSurface::new(11.0);
        surface.draw_text("halaman satu", 57.0, 57.0, SpanStyle::normal());
        surface.new_page();
        surface.draw_text("halaman dua", 57.0, 57.0, SpanStyle::bold());
        assert_eq!(surface.page_count(), 2);
        let bytes = surface.finish().unwrap();
        assert!(bytes.windows(8).any(|w| w == b"/Count 2"));
    }

    #[test]
    fn test_place_png_image() {
        let mut surface = PdfSurface::new(11.0);
        let image = ImageAsset::from_bytes(png_bytes(16, 8, 8, 2)).unwrap();
        assert!(surface.place_image(&image, 100.0, 200.0, 120.0, 60.0));
        let bytes = surface.finish().unwrap();
        assert!(bytes.windows(8).any(|w| w == b"/XObject"));
    }

    #[test]
    fn test_unsupported_image_rejected() {
        let mut surface = PdfSurface::new(11.0);
        let palette = ImageAsset::from_bytes(png_bytes(4, 4, 8, 3)).unwrap();
        assert!(!surface.place_image(&palette, 0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_measurement_matches_metrics() {
        let surface = PdfSurface::new(10.0);
        assert_eq!(
            surface.measure_width("abc", SpanStyle::normal()),
            text_width("abc", SpanStyle::normal(), 10.0)
        );
    }
}
