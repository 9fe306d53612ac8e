//! Word-compatible `.doc` export
//!
//! Word opens HTML documents carrying the Office namespaces, so the report
//! markup is wrapped in that envelope with a small print stylesheet.

use report_layout::RenderedReport;
use report_model::ReportDocument;

use crate::artifact::Artifact;
use crate::format::ExportFormat;

const ENVELOPE_HEAD: &str = concat!(
    "<html xmlns:o='urn:schemas-microsoft-com:office:office' ",
    "xmlns:w='urn:schemas-microsoft-com:office:word' ",
    "xmlns='http://www.w3.org/TR/REC-html40'>",
    "<head><meta charset='utf-8'><title>Rapport Trimestriel</title>",
    "<style>",
    "body { font-family: 'Cambria', serif; }",
    "table { border-collapse: collapse; width: 100%; }",
    "th, td { border: 1px solid black; padding: 5px; }",
    "</style>",
    "</head><body>"
);

const ENVELOPE_TAIL: &str = "</body></html>";

/// BOM, envelope and the rendered report body
pub fn render(report: &RenderedReport) -> String {
    let body = report.document_markup();
    let mut out = String::with_capacity(body.len() + ENVELOPE_HEAD.len() + 32);
    out.push('\u{FEFF}');
    out.push_str(ENVELOPE_HEAD);
    out.push_str(&body);
    out.push_str(ENVELOPE_TAIL);
    out
}

pub fn export(doc: &ReportDocument, report: &RenderedReport) -> Artifact {
    Artifact::new(ExportFormat::Word, doc, render(report).into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_envelope() {
        let mut doc = ReportDocument::initial_at("01/01/2026");
        doc.department = "Jeunesse".to_string();
        let report = report_layout::layout(&doc);
        let artifact = export(&doc, &report);
        assert_eq!(artifact.filename, "Rapport_Jeunesse.doc");
        assert_eq!(artifact.mime_type, "application/msword");

        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.starts_with("\u{FEFF}<html xmlns:o="));
        assert!(text.contains("th, td { border: 1px solid black; padding: 5px; }"));
        assert!(text.contains("RAPPORT TRIMESTRIEL DE : Jeunesse"));
        assert!(text.ends_with("</body></html>"));
    }
}
