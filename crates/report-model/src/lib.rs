//! Quarterly report document model
//!
//! This crate holds the canonical in-memory representation of one report:
//! - `ReportDocument`: scalar fields, the activity table, four text lists
//! - `DocumentPatch`: sparse field-level changes applied by shallow merge
//! - `CoverTheme`: the closed set of cover page variants
//! - Snapshot import/export with backfill onto the initial template
//!
//! The model has no behavior beyond pure data transformations. Persistence
//! and rendering live in `report-session` and `report-layout`.

pub mod activity;
pub mod document;
pub mod error;
pub mod patch;
pub mod snapshot;
pub mod theme;

pub use activity::{Activity, ActivityField, ActivityId};
pub use document::{ReportDocument, TextList, DEFAULT_TITLE, DEFAULT_YEAR};
pub use error::ModelError;
pub use patch::DocumentPatch;
pub use snapshot::{import_snapshot, import_snapshot_onto, to_snapshot};
pub use theme::CoverTheme;
