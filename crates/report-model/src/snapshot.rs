//! JSON snapshot import/export
//!
//! Imports are merged key-by-key onto the initial template, so files saved
//! before a field existed are backfilled instead of rejected.

use serde_json::Value;

use crate::document::ReportDocument;
use crate::error::ModelError;

/// Pretty-printed JSON snapshot of a document
pub fn to_snapshot(doc: &ReportDocument) -> Result<String, ModelError> {
    serde_json::to_string_pretty(doc).map_err(|e| ModelError::InvalidJson(e.to_string()))
}

/// Validate an external snapshot and backfill it onto the initial template
pub fn import_snapshot(json: &str) -> Result<ReportDocument, ModelError> {
    import_snapshot_onto(json, ReportDocument::initial())
}

/// Same as [`import_snapshot`] with an explicit base template
pub fn import_snapshot_onto(json: &str, base: ReportDocument) -> Result<ReportDocument, ModelError> {
    let incoming: Value =
        serde_json::from_str(json).map_err(|e| ModelError::InvalidJson(e.to_string()))?;

    let Value::Object(incoming) = incoming else {
        return Err(ModelError::NotAnObject);
    };

    let mut merged = match serde_json::to_value(&base) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Err(ModelError::NotAnObject),
        Err(e) => return Err(ModelError::InvalidJson(e.to_string())),
    };

    for (key, value) in incoming {
        merged.insert(key, value);
    }

    let mut doc: ReportDocument = serde_json::from_value(Value::Object(merged))
        .map_err(|e| ModelError::InvalidField(e.to_string()))?;
    doc.ensure_unique_activity_ids();
    Ok(doc)
}
