//! Format dispatch

use report_layout::RenderedReport;
use report_model::ReportDocument;
use tracing::info;

use crate::artifact::Artifact;
use crate::error::ExportError;
use crate::format::ExportFormat;
use crate::pdf::{export_pdf, PdfOptions};
use crate::raster::Rasterizer;
use crate::{csv, json, word};

/// Produces artifacts for any format from a document and its rendering
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    pdf: PdfOptions,
}

impl Exporter {
    pub fn new(pdf: PdfOptions) -> Self {
        Self { pdf }
    }

    pub fn pdf_options(&self) -> &PdfOptions {
        &self.pdf
    }

    /// Export a format that needs no page capture
    ///
    /// PDF is refused here since it cannot be produced without a
    /// rasterizer; use [`Exporter::export`].
    pub fn export_static(
        &self,
        format: ExportFormat,
        doc: &ReportDocument,
        report: &RenderedReport,
    ) -> Result<Artifact, ExportError> {
        let artifact = match format {
            ExportFormat::Json => json::export(doc)?,
            ExportFormat::Csv => csv::export(doc),
            ExportFormat::Word => word::export(doc, report),
            ExportFormat::Pdf => {
                return Err(ExportError::Rasterization {
                    page: 1,
                    reason: "no rasterizer available".into(),
                })
            }
        };
        info!(format = %format, filename = %artifact.filename, bytes = artifact.len(), "Exported report");
        Ok(artifact)
    }

    /// Export any format, capturing pages through `rasterizer` for PDF
    pub async fn export<R>(
        &self,
        format: ExportFormat,
        doc: &ReportDocument,
        report: &RenderedReport,
        rasterizer: &R,
    ) -> Result<Artifact, ExportError>
    where
        R: Rasterizer + ?Sized,
    {
        if format.needs_rasterizer() {
            let artifact = export_pdf(doc, report, rasterizer, &self.pdf).await?;
            info!(format = %format, filename = %artifact.filename, bytes = artifact.len(), "Exported report");
            return Ok(artifact);
        }
        self.export_static(format, doc, report)
    }
}
