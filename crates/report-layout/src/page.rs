//! Rendered page types

use report_model::CoverTheme;
use serde::{Deserialize, Serialize};

use crate::html::esc;
use crate::styles::PRINT_STYLES;

/// Physical sheet size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width_mm: f64,
    pub height_mm: f64,
}

impl PageSize {
    /// ISO A4 portrait
    pub const A4: PageSize = PageSize {
        width_mm: 210.0,
        height_mm: 297.0,
    };
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::A4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "theme", rename_all = "snake_case")]
pub enum PageKind {
    /// First page, rendered by the given theme
    Cover(CoverTheme),
    Content,
}

/// Logical sections a page can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Cover,
    Identity,
    Introduction,
    ActivityTable,
    Analysis,
    Recommendations,
    Signature,
}

/// One fixed-size page container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based position in the rendered sequence
    pub number: usize,
    pub kind: PageKind,
    /// Sections present on this page, in render order
    pub sections: Vec<SectionKind>,
    /// Self-contained `<div class="a4-container">` markup
    pub markup: String,
}

impl Page {
    pub fn is_cover(&self) -> bool {
        matches!(self.kind, PageKind::Cover(_))
    }

    pub fn has_section(&self, section: SectionKind) -> bool {
        self.sections.contains(&section)
    }
}

/// Ordered page sequence produced by the layout engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedReport {
    pub size: PageSize,
    pub pages: Vec<Page>,
}

impl RenderedReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn cover(&self) -> Option<&Page> {
        self.pages.first().filter(|p| p.is_cover())
    }

    /// All sections across pages, in order
    pub fn sections(&self) -> Vec<SectionKind> {
        self.pages
            .iter()
            .flat_map(|p| p.sections.iter().copied())
            .collect()
    }

    pub fn has_section(&self, section: SectionKind) -> bool {
        self.pages.iter().any(|p| p.has_section(section))
    }

    /// Body markup of the whole report (the `report-container` content)
    pub fn document_markup(&self) -> String {
        let mut out = String::from("<div id=\"report-content\" class=\"report-typography\">");
        for page in &self.pages {
            out.push_str(&page.markup);
        }
        out.push_str("</div>");
        out
    }

    /// Standalone printable HTML, one physical sheet per page
    pub fn standalone_html(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\"><title>{}</title><style>{}</style></head><body><div id=\"report-container\">{}</div></body></html>",
            esc(title),
            PRINT_STYLES,
            self.document_markup()
        )
    }
}
