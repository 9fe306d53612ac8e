//! Report export pipeline
//!
//! Turns a document (or its rendered pages) into downloadable artifacts:
//! - PDF: page images from a `Rasterizer`, one per A4 sheet
//! - JSON: the pretty-printed snapshot
//! - CSV: the activity table for spreadsheet follow-up
//! - Word: the report markup in a `.doc` HTML envelope
//!
//! Every format either yields a complete `Artifact` or an `ExportError`;
//! partial output is never returned.

pub mod artifact;
pub mod csv;
pub mod error;
pub mod format;
pub mod json;
pub mod pdf;
pub mod pipeline;
pub mod raster;
pub mod word;

pub use artifact::Artifact;
pub use error::{ExportError, RasterError};
pub use format::ExportFormat;
pub use pdf::{export_pdf, PdfAssembler, PdfOptions};
pub use pipeline::Exporter;
pub use raster::{PageRegion, RasterImage, Rasterizer};
