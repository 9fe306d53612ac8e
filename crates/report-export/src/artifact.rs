//! Export artifacts and their filenames

use report_model::ReportDocument;
use serde::Serialize;

use crate::format::ExportFormat;

/// A complete downloadable file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub filename: String,
    pub mime_type: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn new(format: ExportFormat, doc: &ReportDocument, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename(format, doc),
            mime_type: format.mime_type().to_string(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Download filename for a format, e.g. `Rapport_Jeunesse_2026.pdf`
///
/// A blank department name is replaced by `AD`. Path separators and
/// characters not allowed in filenames become `_`.
pub fn filename(format: ExportFormat, doc: &ReportDocument) -> String {
    let stem = sanitize(doc.filename_stem());
    match format {
        ExportFormat::Pdf | ExportFormat::Json => {
            format!("Rapport_{}_{}.{}", stem, sanitize(&doc.year), format.extension())
        }
        ExportFormat::Csv => format!("Suivi_PTA_{}.{}", stem, format.extension()),
        ExportFormat::Word => format!("Rapport_{}.{}", stem, format.extension()),
    }
}

fn sanitize(part: &str) -> String {
    part.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
