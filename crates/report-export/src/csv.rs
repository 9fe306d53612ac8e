//! Activity table as semicolon-separated values

use report_model::{ActivityField, ReportDocument};

use crate::artifact::Artifact;
use crate::format::ExportFormat;

const BOM: char = '\u{FEFF}';

pub const HEADER: &str = "N°;Objectifs / Activites prevues;Realisations;Resultats obtenus;Indicateurs de performance;Observations / Difficultes";

/// Quote a field, doubling embedded quotes
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// CSV text: BOM, header line, then one line per activity
pub fn render(doc: &ReportDocument) -> String {
    let mut out = String::new();
    out.push(BOM);
    out.push_str(HEADER);
    out.push('\n');
    for (index, activity) in doc.activities.iter().enumerate() {
        out.push_str(&(index + 1).to_string());
        for field in ActivityField::ALL {
            out.push(';');
            out.push_str(&quote(activity.field(field)));
        }
        out.push('\n');
    }
    out
}

pub fn export(doc: &ReportDocument) -> Artifact {
    Artifact::new(ExportFormat::Csv, doc, render(doc).into_bytes())
}
