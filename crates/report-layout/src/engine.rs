//! Document to page sequence

use report_model::ReportDocument;
use tracing::debug;

use crate::content;
use crate::covers::{CoverContext, CoverRegistry};
use crate::options::LayoutOptions;
use crate::page::{Page, PageKind, PageSize, RenderedReport, SectionKind};

/// Lays out documents with fixed options and cover registry
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    options: LayoutOptions,
    registry: CoverRegistry,
}

impl LayoutEngine {
    pub fn new(options: LayoutOptions, registry: CoverRegistry) -> Self {
        Self { options, registry }
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self {
            options,
            registry: CoverRegistry::default(),
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn registry_mut(&mut self) -> &mut CoverRegistry {
        &mut self.registry
    }

    pub fn layout(&self, doc: &ReportDocument) -> RenderedReport {
        layout_with(doc, &self.options, &self.registry)
    }
}

/// Lay out a document with the default options and built-in covers
pub fn layout(doc: &ReportDocument) -> RenderedReport {
    layout_with(doc, &LayoutOptions::default(), CoverRegistry::builtin())
}

/// Lay out a document into a cover page followed by two content pages
///
/// The first content page carries the identity header, the introduction and
/// the activity table; the second carries the analysis, the
/// recommendations and the signature block. Conditional sections are
/// dropped from their page but the page itself is always emitted.
pub fn layout_with(
    doc: &ReportDocument,
    options: &LayoutOptions,
    registry: &CoverRegistry,
) -> RenderedReport {
    let mut pages = Vec::with_capacity(3);

    let cover_markup = registry.render(&CoverContext::new(doc, options));
    pages.push(Page {
        number: 1,
        kind: PageKind::Cover(doc.cover_theme),
        sections: vec![SectionKind::Cover],
        markup: cover_markup,
    });

    let mut sections = vec![SectionKind::Identity, SectionKind::Introduction];
    let mut body = content::render_identity(doc);
    body.push_str(&content::render_introduction(doc));
    if content::has_activity_table(doc) {
        sections.push(SectionKind::ActivityTable);
        body.push_str(&content::render_activity_table(doc));
    }
    pages.push(content_page(2, sections, body, options));

    let mut sections = Vec::new();
    let mut body = String::new();
    if content::has_analysis(doc) {
        sections.push(SectionKind::Analysis);
        body.push_str(&content::render_analysis(doc));
    }
    if content::has_recommendations(doc) {
        sections.push(SectionKind::Recommendations);
        body.push_str(&content::render_recommendations(doc));
    }
    sections.push(SectionKind::Signature);
    body.push_str(&content::render_signature(doc, options));
    pages.push(content_page(3, sections, body, options));

    debug!(
        theme = doc.cover_theme.as_str(),
        activities = doc.activities.len(),
        pages = pages.len(),
        "Laid out report"
    );

    RenderedReport {
        size: PageSize::A4,
        pages,
    }
}

fn content_page(
    number: usize,
    sections: Vec<SectionKind>,
    body: String,
    options: &LayoutOptions,
) -> Page {
    let markup = format!(
        "<div class=\"a4-container content-page\" data-page=\"{}\">{}{}</div>",
        number,
        body,
        content::render_footer(number, options)
    );
    Page {
        number,
        kind: PageKind::Content,
        sections,
        markup,
    }
}
