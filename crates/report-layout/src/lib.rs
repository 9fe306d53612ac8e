//! Report layout engine
//!
//! Maps a `ReportDocument` onto a fixed sequence of A4 pages:
//! - Page 1: cover page, selected by theme through `CoverRegistry`
//! - Pages 2..N: content pages (identity header, introduction, activity
//!   table, analysis, recommendations, signature block)
//!
//! The engine decides section presence and ordering only. Content that
//! overflows a page container is reflowed by the presentation layer at
//! print or capture time.

pub mod content;
pub mod covers;
pub mod engine;
pub mod html;
pub mod options;
pub mod page;
pub mod styles;

pub use covers::{list_themes, CoverContext, CoverRegistry, CoverRenderer, ThemeInfo};
pub use engine::{layout, layout_with, LayoutEngine};
pub use options::{Institution, LayoutOptions};
pub use page::{Page, PageKind, PageSize, RenderedReport, SectionKind};
