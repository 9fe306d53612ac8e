//! Content page sections
//!
//! Each `render_*` function returns self-contained section markup. Presence
//! rules live here too so the engine and the tests agree on them.

use report_model::{ActivityField, ReportDocument, TextList};

use crate::html::{esc, esc_multiline, or_placeholder, Markup};
use crate::options::LayoutOptions;

const DOTS: &str = "....................";

/// Activity table header, in column order
pub const ACTIVITY_HEADERS: [&str; 6] = [
    "N°",
    "Objectifs",
    "Réalisation",
    "Résultats",
    "Indicateurs",
    "Observations",
];

/// Analysis sub-lists with their fixed headings
pub const ANALYSIS_LISTS: [(TextList, &str); 3] = [
    (TextList::Progress, "Progrès réalisés"),
    (TextList::Impacts, "Impacts observés"),
    (TextList::Challenges, "Défis rencontrés"),
];

pub fn has_activity_table(doc: &ReportDocument) -> bool {
    !doc.activities.is_empty()
}

pub fn has_analysis(doc: &ReportDocument) -> bool {
    ANALYSIS_LISTS
        .iter()
        .any(|(list, _)| !doc.list(*list).is_empty())
}

pub fn has_recommendations(doc: &ReportDocument) -> bool {
    !doc.recommendations.is_empty()
}

fn section_heading(m: &mut Markup, number: u8, title: &str) {
    m.open("h3", "")
        .raw(&format!("<span class=\"num\">{}</span>", number))
        .element("span", "", title)
        .close("h3");
}

/// Report heading, identity rows and the introduction
pub fn render_identity(doc: &ReportDocument) -> String {
    let mut m = Markup::new();
    m.raw(&format!(
        "<h2 class=\"report-heading\">RAPPORT TRIMESTRIEL DE : {}</h2>",
        or_placeholder(&doc.department, DOTS)
    ));
    m.open("div", "identity");
    for (label, value) in [
        ("Département", &doc.department),
        ("Période", &doc.period),
        ("Responsable", &doc.manager_name),
        ("Contact", &doc.manager_contact),
    ] {
        m.open("div", "identity-row")
            .element("span", "label", &format!("{} :", label))
            .element("span", "value", value)
            .close("div");
    }
    m.close("div");
    m.finish()
}

pub fn render_introduction(doc: &ReportDocument) -> String {
    let mut m = Markup::new();
    m.open("section", "introduction");
    section_heading(&mut m, 1, "Introduction");
    m.raw(&format!(
        "<div class=\"intro-text\">{}</div>",
        esc_multiline(&doc.introduction)
    ));
    m.close("section");
    m.finish()
}

/// Activity table; row numbers are positions, never stored ids
pub fn render_activity_table(doc: &ReportDocument) -> String {
    let mut m = Markup::new();
    m.open("section", "activities");
    section_heading(&mut m, 2, "Suivi des Activités");
    m.open("table", "activities").open("thead", "").open("tr", "");
    for header in ACTIVITY_HEADERS {
        m.element("th", "", header);
    }
    m.close("tr").close("thead").open("tbody", "");
    for (index, activity) in doc.activities.iter().enumerate() {
        m.raw(&format!(
            "<tr data-activity-id=\"{}\">",
            esc(activity.id.as_str())
        ));
        m.element("td", "row-number", &(index + 1).to_string());
        for field in ActivityField::ALL {
            m.raw(&format!(
                "<td class=\"{}\">{}</td>",
                field.key(),
                esc_multiline(activity.field(field))
            ));
        }
        m.close("tr");
    }
    m.close("tbody").close("table").close("section");
    m.finish()
}

/// Analysis section with each non-empty sub-list under its heading
pub fn render_analysis(doc: &ReportDocument) -> String {
    let mut m = Markup::new();
    m.open("section", "analysis");
    section_heading(&mut m, 3, "Analyse et Impact");
    for (list, heading) in ANALYSIS_LISTS {
        let entries = doc.list(list);
        if entries.is_empty() {
            continue;
        }
        m.raw(&format!("<div class=\"sub-list\" data-list=\"{}\">", list.key()))
            .element("p", "heading", heading);
        for entry in entries {
            m.raw(&format!(
                "<p class=\"bullet\">{}</p>",
                esc_multiline(entry)
            ));
        }
        m.close("div");
    }
    m.close("section");
    m.finish()
}

pub fn render_recommendations(doc: &ReportDocument) -> String {
    let mut m = Markup::new();
    m.open("section", "recommendations");
    section_heading(&mut m, 4, "Recommandations");
    for entry in &doc.recommendations {
        m.raw(&format!(
            "<p class=\"recommendation\">{}</p>",
            esc_multiline(entry)
        ));
    }
    m.close("section");
    m.finish()
}

/// Place and date line, office, and the two signature blocks
pub fn render_signature(doc: &ReportDocument, options: &LayoutOptions) -> String {
    let mut m = Markup::new();
    m.open("div", "signature");
    m.raw(&format!(
        "<p class=\"signature-place\">Fait à {} le <span class=\"date\">{}</span></p>",
        esc(&options.signing_place),
        esc(&doc.signed_on)
    ));
    m.raw(&format!(
        "<h2 class=\"signature-office\">Pour le bureau de :<br/><span class=\"office\">{}</span></h2>",
        esc(&doc.signing_office)
    ));
    m.open("div", "signature-grid");
    for (role, name) in [
        ("Le/La Secrétaire", &doc.secretary_name),
        ("Le/La Directeur/trice", &doc.director_name),
    ] {
        m.open("div", "signatory")
            .element("p", "role", role)
            .raw("<div class=\"sign-space\"></div>")
            .element("p", "name", name)
            .close("div");
    }
    m.close("div").close("div");
    m.finish()
}

/// Page watermark, e.g. "Page 2 • Beraca"
pub fn render_footer(number: usize, options: &LayoutOptions) -> String {
    format!(
        "<div class=\"page-footer\">Page {} • {}</div>",
        number,
        esc(&options.institution.short_name)
    )
}
