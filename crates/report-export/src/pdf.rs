//! PDF assembly from page captures
//!
//! Every captured page becomes one A4 sheet with the image drawn inside a
//! uniform margin. Pages are captured one at a time and in order; the
//! first failure aborts the export and nothing is returned.

use std::io::Write;

use flate2::{write::ZlibEncoder, Compression};
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use report_layout::RenderedReport;
use report_model::ReportDocument;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::artifact::Artifact;
use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::raster::{decode_png, PageRegion, Rasterizer, RgbPixels, DEFAULT_SCALE};

/// A4 portrait in PDF points
pub const A4_WIDTH_PT: f32 = 595.28;
pub const A4_HEIGHT_PT: f32 = 841.89;

const PT_PER_MM: f32 = 72.0 / 25.4;

pub fn mm_to_pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    /// Uniform margin around each page image
    pub margin_mm: f32,
    /// Capture scale passed to the rasterizer
    pub scale: f32,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            margin_mm: 10.0,
            scale: DEFAULT_SCALE,
        }
    }
}

/// Single PDF under construction; one sheet per added image
pub struct PdfAssembler {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    options: PdfOptions,
}

impl PdfAssembler {
    pub fn new(options: PdfOptions) -> Self {
        let mut doc = Document::with_version("1.7");
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            page_ids: Vec::new(),
            options,
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Drawn image rectangle `(x, y, width, height)` in points, PDF origin
    pub fn image_rect(&self) -> (f32, f32, f32, f32) {
        let margin = mm_to_pt(self.options.margin_mm);
        let width = A4_WIDTH_PT - 2.0 * margin;
        let height = A4_HEIGHT_PT - 2.0 * margin;
        (margin, A4_HEIGHT_PT - margin - height, width, height)
    }

    /// Append a new sheet carrying the image scaled into the margins
    pub fn add_page(&mut self, pixels: &RgbPixels) -> Result<(), ExportError> {
        let image_id = self.add_image(pixels)?;
        let name = format!("Im{}", self.page_ids.len() + 1);
        let (x, y, width, height) = self.image_rect();

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        Object::Real(width),
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(height),
                        Object::Real(x),
                        Object::Real(y),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(name.clone().into_bytes())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| ExportError::Assembly(format!("Failed to encode content: {}", e)))?;
        let content_id = self.doc.add_object(Stream::new(Dictionary::new(), encoded));

        let mut xobjects = Dictionary::new();
        xobjects.set(name.into_bytes(), Object::Reference(image_id));
        let mut resources = Dictionary::new();
        resources.set("XObject", Object::Dictionary(xobjects));

        let page = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(self.pages_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(A4_WIDTH_PT),
                    Object::Real(A4_HEIGHT_PT),
                ]),
            ),
            ("Resources", Object::Dictionary(resources)),
            ("Contents", Object::Reference(content_id)),
        ]);
        let page_id = self.doc.add_object(page);
        self.page_ids.push(page_id);
        Ok(())
    }

    fn add_image(&mut self, pixels: &RgbPixels) -> Result<ObjectId, ExportError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(&pixels.data)
            .map_err(|e| ExportError::Assembly(format!("Failed to compress image: {}", e)))?;
        let compressed = encoder
            .finish()
            .map_err(|e| ExportError::Assembly(format!("Failed to compress image: {}", e)))?;

        let mut dict = Dictionary::new();
        dict.set("Type", Object::Name(b"XObject".to_vec()));
        dict.set("Subtype", Object::Name(b"Image".to_vec()));
        dict.set("Width", Object::Integer(pixels.width as i64));
        dict.set("Height", Object::Integer(pixels.height as i64));
        dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
        dict.set("BitsPerComponent", Object::Integer(8));
        dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));

        let stream = Stream::new(dict, compressed).with_compression(false);
        Ok(self.doc.add_object(stream))
    }

    /// Write the page tree and serialize
    pub fn finish(mut self) -> Result<Vec<u8>, ExportError> {
        if self.page_ids.is_empty() {
            return Err(ExportError::NoPages);
        }

        let pages = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Count", Object::Integer(self.page_ids.len() as i64)),
            (
                "Kids",
                Object::Array(self.page_ids.iter().map(|id| Object::Reference(*id)).collect()),
            ),
        ]);
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let catalog_id = self.doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_id)),
        ]));
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| ExportError::Assembly(format!("Failed to save PDF: {}", e)))?;
        Ok(buffer)
    }
}

/// Capture every rendered page in order and assemble them into one PDF
pub async fn export_pdf<R>(
    doc: &ReportDocument,
    report: &RenderedReport,
    rasterizer: &R,
    options: &PdfOptions,
) -> Result<Artifact, ExportError>
where
    R: Rasterizer + ?Sized,
{
    if report.pages.is_empty() {
        warn!("PDF export requested with no pages");
        return Err(ExportError::NoPages);
    }

    let mut assembler = PdfAssembler::new(*options);
    for (index, page) in report.pages.iter().enumerate() {
        let region = PageRegion::from_page(index, page, report.size, options.scale);
        let image = rasterizer
            .capture(&region)
            .await
            .map_err(|e| ExportError::Rasterization {
                page: page.number,
                reason: e.to_string(),
            })?;
        let pixels = decode_png(&image.png).map_err(|e| ExportError::Rasterization {
            page: page.number,
            reason: e.to_string(),
        })?;
        debug!(
            page = page.number,
            width = pixels.width,
            height = pixels.height,
            "Captured page"
        );
        assembler.add_page(&pixels)?;
    }

    let bytes = assembler.finish()?;
    info!(pages = report.pages.len(), bytes = bytes.len(), "Assembled PDF");
    Ok(Artifact::new(ExportFormat::Pdf, doc, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> RgbPixels {
        RgbPixels {
            width,
            height,
            data: vec![255; (width * height * 3) as usize],
        }
    }

    #[test]
    fn test_default_rect_is_190_by_277_mm() {
        let assembler = PdfAssembler::new(PdfOptions::default());
        let (x, y, w, h) = assembler.image_rect();
        assert!((x - mm_to_pt(10.0)).abs() < 0.01);
        assert!((y - mm_to_pt(10.0)).abs() < 0.05);
        assert!((w - mm_to_pt(190.0)).abs() < 0.05);
        assert!((h - mm_to_pt(277.0)).abs() < 0.05);
    }

    #[test]
    fn test_finish_without_pages_fails() {
        let assembler = PdfAssembler::new(PdfOptions::default());
        assert!(matches!(assembler.finish(), Err(ExportError::NoPages)));
    }

    #[test]
    fn test_one_sheet_per_image() {
        let mut assembler = PdfAssembler::new(PdfOptions::default());
        assembler.add_page(&white(4, 6)).unwrap();
        assembler.add_page(&white(4, 6)).unwrap();
        assert_eq!(assembler.page_count(), 2);

        let bytes = assembler.finish().unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 2);
    }
}
