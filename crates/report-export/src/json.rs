//! Snapshot download

use report_model::{to_snapshot, ReportDocument};

use crate::artifact::Artifact;
use crate::error::ExportError;
use crate::format::ExportFormat;

/// Pretty-printed snapshot, importable as-is
pub fn export(doc: &ReportDocument) -> Result<Artifact, ExportError> {
    let json = to_snapshot(doc)?;
    Ok(Artifact::new(ExportFormat::Json, doc, json.into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use report_model::import_snapshot;

    #[test]
    fn test_json_artifact_imports_back() {
        let mut doc = ReportDocument::initial_at("01/01/2026");
        doc.department = "Chorale".to_string();
        let artifact = export(&doc).unwrap();
        assert_eq!(artifact.filename, "Rapport_Chorale_2026.json");
        assert_eq!(artifact.mime_type, "application/json");

        let text = String::from_utf8(artifact.bytes).unwrap();
        assert!(text.contains("\n  \"nomDepartement\": \"Chorale\""));
        assert_eq!(import_snapshot(&text).unwrap(), doc);
    }
}
