//! Layout scenarios over whole documents

use pretty_assertions::assert_eq;
use report_layout::{
    layout, layout_with, CoverContext, CoverRegistry, LayoutEngine, LayoutOptions, PageKind,
    SectionKind,
};
use report_model::{
    import_snapshot_onto, Activity, ActivityField, ActivityId, CoverTheme, ReportDocument,
};

fn base() -> ReportDocument {
    ReportDocument::initial_at("31/03/2026")
}

fn cleared() -> ReportDocument {
    let mut doc = base();
    doc.activities.clear();
    doc.progress.clear();
    doc.impacts.clear();
    doc.challenges.clear();
    doc.recommendations.clear();
    doc
}

#[test]
fn test_initial_document_has_every_section() {
    let report = layout(&base());
    assert_eq!(report.page_count(), 3);
    assert_eq!(
        report.sections(),
        vec![
            SectionKind::Cover,
            SectionKind::Identity,
            SectionKind::Introduction,
            SectionKind::ActivityTable,
            SectionKind::Analysis,
            SectionKind::Recommendations,
            SectionKind::Signature,
        ]
    );
}

#[test]
fn test_page_numbers_are_sequential() {
    let report = layout(&base());
    let numbers: Vec<usize> = report.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(report.pages[1].markup.contains("Page 2 • Beraca"));
    assert!(report.pages[2].markup.contains("Page 3 • Beraca"));
}

#[test]
fn test_unknown_theme_gets_default_cover() {
    let doc = import_snapshot_onto(r#"{"coverTheme":"neon"}"#, base()).unwrap();
    let report = layout(&doc);
    let cover = report.cover().unwrap();
    assert_eq!(cover.kind, PageKind::Cover(CoverTheme::Official));
    assert!(cover.markup.contains("cover-official"));
}

#[test]
fn test_single_activity_row() {
    let mut doc = base();
    doc.activities =
        vec![Activity::new(ActivityId::new("x")).with(ActivityField::Objectives, "Visite")];
    let report = layout(&doc);
    let page = &report.pages[1];
    assert!(page.has_section(SectionKind::ActivityTable));
    assert!(page
        .markup
        .contains("<td class=\"row-number\">1</td><td class=\"objectifs\">Visite</td>"));
    assert!(!page.markup.contains("row-number\">2<"));
}

#[test]
fn test_empty_lists_omit_analysis_and_recommendations() {
    let report = layout(&cleared());
    assert!(!report.has_section(SectionKind::ActivityTable));
    assert!(!report.has_section(SectionKind::Analysis));
    assert!(!report.has_section(SectionKind::Recommendations));
    assert!(report.has_section(SectionKind::Identity));
    assert!(report.has_section(SectionKind::Signature));
    assert_eq!(report.page_count(), 3);
    assert_eq!(report.pages[2].sections, vec![SectionKind::Signature]);
}

#[test]
fn test_analysis_present_with_only_challenges() {
    let mut doc = cleared();
    doc.challenges = vec!["Manque de moyens".to_string()];
    let report = layout(&doc);
    assert!(report.has_section(SectionKind::Analysis));
    let markup = &report.pages[2].markup;
    assert!(markup.contains("Défis rencontrés"));
    assert!(!markup.contains("Progrès réalisés"));
}

#[test]
fn test_document_markup_wraps_pages_in_order() {
    let report = layout(&base());
    let markup = report.document_markup();
    assert!(markup.starts_with("<div id=\"report-content\" class=\"report-typography\">"));
    let cover = markup.find("data-page=\"cover\"").unwrap();
    let second = markup.find("data-page=\"2\"").unwrap();
    let third = markup.find("data-page=\"3\"").unwrap();
    assert!(cover < second && second < third);
}

#[test]
fn test_standalone_html_carries_print_rules() {
    let html = layout(&base()).standalone_html("Rapport");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("@page { size: A4 portrait"));
    assert!(html.contains("page-break-after: always"));
    assert!(html.contains("<div id=\"report-container\">"));
}

#[test]
fn test_custom_options_and_registry() {
    let mut options = LayoutOptions::default();
    options.institution.short_name = "Sion".to_string();
    options.signing_place = "Parakou".to_string();
    options.logo_src = None;

    let mut engine = LayoutEngine::new(options.clone(), CoverRegistry::empty());
    engine
        .registry_mut()
        .register(CoverTheme::Official, |ctx: &CoverContext<'_>| {
            format!("<div>{}</div>", ctx.doc.year)
        });

    let report = engine.layout(&base());
    assert_eq!(report.pages[0].markup, "<div>2026</div>");
    assert!(report.pages[2].markup.contains("Fait à Parakou le"));
    assert!(report.pages[2].markup.contains("Page 3 • Sion"));

    let same = layout_with(&base(), &options, CoverRegistry::builtin());
    assert!(!same.pages[0].markup.contains("<img"));
}

#[test]
fn test_rendered_report_serializes() {
    let report = layout(&base());
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["pages"][0]["kind"]["type"], "cover");
    assert_eq!(value["pages"][0]["kind"]["theme"], "official");
    assert_eq!(value["size"]["width_mm"], 210.0);
}
