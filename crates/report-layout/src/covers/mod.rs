//! Cover page variants and their registry
//!
//! Every variant shows the same three data points (institutional header,
//! report title and period, department name) and differs only in placement
//! and ornamentation.

pub mod registry;
pub mod variants;

pub use registry::{list_themes, CoverRegistry, ThemeInfo};

use report_model::ReportDocument;

use crate::html::{esc, or_placeholder, Markup};
use crate::options::LayoutOptions;

pub(crate) const PERIOD_PLACEHOLDER: &str = "PÉRIODE";
pub(crate) const DEPARTMENT_PLACEHOLDER: &str = "NOM DU DÉPARTEMENT";

/// Data handed to a cover renderer
pub struct CoverContext<'a> {
    pub doc: &'a ReportDocument,
    pub options: &'a LayoutOptions,
}

/// A cover variant: pure function from document data to page markup
pub type CoverRenderer = fn(&CoverContext<'_>) -> String;

impl<'a> CoverContext<'a> {
    pub fn new(doc: &'a ReportDocument, options: &'a LayoutOptions) -> Self {
        Self { doc, options }
    }

    pub(crate) fn title(&self) -> String {
        or_placeholder(&self.doc.title, report_model::DEFAULT_TITLE)
    }

    pub(crate) fn period(&self) -> String {
        or_placeholder(&self.doc.period, PERIOD_PLACEHOLDER)
    }

    pub(crate) fn department(&self) -> String {
        or_placeholder(&self.doc.department, DEPARTMENT_PLACEHOLDER)
    }

    pub(crate) fn logo(&self) -> String {
        match &self.options.logo_src {
            Some(src) => format!(
                "<img class=\"logo\" src=\"{}\" alt=\"Logo\"/>",
                esc(src)
            ),
            None => String::new(),
        }
    }

    /// Logo plus the three institution lines
    pub(crate) fn header_block(&self) -> String {
        let inst = &self.options.institution;
        let mut m = Markup::new();
        m.open("div", "header-block")
            .raw(&self.logo())
            .element("h4", "inst-name", &inst.name)
            .element("h5", "inst-region", &inst.region)
            .element("h5", "inst-local", &inst.local)
            .close("div");
        m.finish()
    }

    /// Title, accent rule and period
    pub(crate) fn title_block(&self) -> String {
        format!(
            "<div class=\"title-block\"><h1>{}</h1><div class=\"rule\"></div><p class=\"period\">{}</p></div>",
            self.title(),
            self.period()
        )
    }

    /// Department name pinned to the bottom of the sheet
    pub(crate) fn footer_block(&self) -> String {
        format!(
            "<div class=\"footer-block\"><p class=\"label\">Département</p><p class=\"department\">{}</p></div>",
            self.department()
        )
    }
}

/// Wrap cover content in a page container tagged with the variant class
pub(crate) fn cover_page(variant: &str, inner: &str) -> String {
    format!(
        "<div class=\"a4-container cover cover-{}\" data-page=\"cover\">{}</div>",
        variant, inner
    )
}
