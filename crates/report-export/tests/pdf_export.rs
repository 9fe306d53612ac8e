//! PDF export through a fake rasterizer

use std::cell::RefCell;

use async_trait::async_trait;
use lopdf::content::Content;
use lopdf::{Document, ObjectId};
use report_export::raster::encode_png;
use report_export::{
    export_pdf, ExportError, ExportFormat, Exporter, PageRegion, PdfOptions, RasterError,
    RasterImage, Rasterizer,
};
use report_layout::{layout, RenderedReport};
use report_model::ReportDocument;

/// Emits a white PNG whose width encodes the page index
struct FakeRasterizer {
    calls: RefCell<Vec<usize>>,
    fail_on: Option<usize>,
}

impl FakeRasterizer {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: None,
        }
    }

    fn failing_on(index: usize) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on: Some(index),
        }
    }
}

#[async_trait(?Send)]
impl Rasterizer for FakeRasterizer {
    async fn capture(&self, region: &PageRegion) -> Result<RasterImage, RasterError> {
        self.calls.borrow_mut().push(region.index);
        if self.fail_on == Some(region.index) {
            return Err(RasterError::new("canvas tainted"));
        }
        let width = 10 + region.index as u32;
        let height = 14;
        let data = vec![255u8; (width * height * 3) as usize];
        Ok(RasterImage::from_png(encode_png(width, height, false, &data)?))
    }
}

fn doc() -> ReportDocument {
    let mut doc = ReportDocument::initial_at("31/03/2026");
    doc.department = "Jeunesse".to_string();
    doc
}

fn image_width(pdf: &Document, page_id: ObjectId) -> i64 {
    let page = pdf.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let (_, image_ref) = xobjects.iter().next().unwrap();
    let image = pdf
        .get_object(image_ref.as_reference().unwrap())
        .unwrap()
        .as_stream()
        .unwrap();
    image.dict.get(b"Width").unwrap().as_i64().unwrap()
}

#[tokio::test]
async fn test_three_pages_in_order() {
    let doc = doc();
    let report = layout(&doc);
    let rasterizer = FakeRasterizer::new();

    let artifact = export_pdf(&doc, &report, &rasterizer, &PdfOptions::default())
        .await
        .unwrap();
    assert_eq!(artifact.filename, "Rapport_Jeunesse_2026.pdf");
    assert_eq!(artifact.mime_type, "application/pdf");
    assert_eq!(*rasterizer.calls.borrow(), vec![0, 1, 2]);

    let pdf = Document::load_mem(&artifact.bytes).unwrap();
    let pages = pdf.get_pages();
    assert_eq!(pages.len(), 3);
    let widths: Vec<i64> = pages.values().map(|id| image_width(&pdf, *id)).collect();
    assert_eq!(widths, vec![10, 11, 12]);
}

#[tokio::test]
async fn test_image_fills_margins() {
    let doc = doc();
    let report = layout(&doc);
    let artifact = export_pdf(&doc, &report, &FakeRasterizer::new(), &PdfOptions::default())
        .await
        .unwrap();

    let pdf = Document::load_mem(&artifact.bytes).unwrap();
    let first = *pdf.get_pages().values().next().unwrap();
    let content = Content::decode(&pdf.get_page_content(first).unwrap()).unwrap();
    let cm = content
        .operations
        .iter()
        .find(|op| op.operator == "cm")
        .unwrap();
    let operands: Vec<f32> = cm.operands.iter().map(|o| o.as_float().unwrap()).collect();
    assert!((operands[0] - 538.58).abs() < 0.1);
    assert!((operands[3] - 785.20).abs() < 0.1);
    assert!((operands[4] - 28.35).abs() < 0.1);
    assert!((operands[5] - 28.35).abs() < 0.1);
}

#[tokio::test]
async fn test_capture_failure_aborts_export() {
    let doc = doc();
    let report = layout(&doc);
    let rasterizer = FakeRasterizer::failing_on(1);

    let err = export_pdf(&doc, &report, &rasterizer, &PdfOptions::default())
        .await
        .unwrap_err();
    match err {
        ExportError::Rasterization { page, reason } => {
            assert_eq!(page, 2);
            assert_eq!(reason, "canvas tainted");
        }
        other => panic!("unexpected error: {other}"),
    }
    // Nothing after the failed page is attempted
    assert_eq!(*rasterizer.calls.borrow(), vec![0, 1]);
}

#[tokio::test]
async fn test_no_pages_is_rejected() {
    let doc = doc();
    let report = RenderedReport {
        size: Default::default(),
        pages: Vec::new(),
    };
    let rasterizer = FakeRasterizer::new();
    let err = export_pdf(&doc, &report, &rasterizer, &PdfOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ExportError::NoPages));
    assert!(rasterizer.calls.borrow().is_empty());
}

#[tokio::test]
async fn test_exporter_dispatches_every_format() {
    let doc = doc();
    let report = layout(&doc);
    let exporter = Exporter::default();
    let rasterizer = FakeRasterizer::new();

    for format in ExportFormat::ALL {
        let artifact = exporter
            .export(format, &doc, &report, &rasterizer)
            .await
            .unwrap();
        assert!(artifact.filename.ends_with(format.extension()));
        assert!(!artifact.is_empty());
    }
    assert!(exporter
        .export_static(ExportFormat::Pdf, &doc, &report)
        .is_err());
}
