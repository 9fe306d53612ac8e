//! The built-in cover variants

use super::{cover_page, CoverContext};

/// Bordered page with a dark left band. Also the fallback variant.
pub fn official(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"band\"></div><div class=\"spaced-top\">{}</div><div class=\"spaced-title\">{}</div>{}",
        ctx.header_block(),
        ctx.title_block(),
        ctx.footer_block()
    );
    cover_page("official", &inner)
}

/// Outer frame with an inner accent frame
pub fn prestige(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"inner-frame\">{}<div class=\"spaced-title\">{}</div>{}</div>",
        ctx.header_block(),
        ctx.title_block(),
        ctx.footer_block()
    );
    cover_page("prestige", &inner)
}

/// Dot grid background with a ruled title panel
pub fn architect(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"corner\"></div>{}<div class=\"title-panel\">{}</div>{}",
        ctx.header_block(),
        ctx.title_block(),
        ctx.footer_block()
    );
    cover_page("architect", &inner)
}

/// Heavy rules top and bottom, italic department name
pub fn vintage(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"side-rules\">{}<div class=\"spaced-title\">{}</div><p class=\"department\">{}</p></div>",
        ctx.header_block(),
        ctx.title_block(),
        ctx.department()
    );
    cover_page("vintage", &inner)
}

/// Left accent bar carrying title and department, period bottom right
pub fn spirit(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "{}<div class=\"accent\"><h1>{}</h1><p class=\"department\">{}</p></div><p class=\"period corner-period\">{}</p>",
        ctx.header_block(),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("spirit", &inner)
}

/// Everything centered, no frame
pub fn minimalist(ctx: &CoverContext<'_>) -> String {
    let inst = &ctx.options.institution;
    let inner = format!(
        "{}<p class=\"inst-local\">{}</p><h1>{}</h1><div class=\"rule\"></div><p class=\"department\">{}</p><p class=\"period\">{}</p>",
        ctx.logo(),
        crate::html::esc(&inst.local),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("minimalist", &inner)
}

/// Double border with an inner light frame
pub fn royal(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"inner-frame\">{}<h1>{}</h1><p class=\"department\">{}</p><p class=\"period\">{}</p></div>",
        ctx.header_block(),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("royal", &inner)
}

/// Radiant starburst in the corner, department between heavy rules
pub fn celestial(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"rays\"></div>{}<h1>{}</h1><div class=\"ruled\"><p class=\"department\">{}</p></div><p class=\"period\">{}</p>",
        ctx.header_block(),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("celestial", &inner)
}

/// Dashed border, labelled department and period fields
pub fn eco(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "{}<h1>{}</h1><div class=\"field\"><p class=\"label\">Secteur Administratif</p><p class=\"department\">{}</p></div><div class=\"field\"><p class=\"label\">Période du Rapport</p><p class=\"period\">{}</p></div>",
        ctx.header_block(),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("eco", &inner)
}

/// Soft pattern background, serif title
pub fn ethereal(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"petals\"></div>{}{}<div class=\"accent\"><p class=\"department\">{}</p></div>",
        ctx.header_block(),
        ctx.title_block(),
        ctx.department()
    );
    cover_page("ethereal", &inner)
}

/// Framed panel, title top right, department in a ruled band
pub fn stained_glass(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"inner-frame\"><div class=\"top-row\">{}<h1>{}</h1></div><div class=\"department-panel\"><p class=\"department\">{}</p></div><p class=\"period\">{}</p></div>",
        ctx.header_block(),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("stainedglass", &inner)
}

/// Full-width banner, oversized title, department at the bottom
pub fn modern(ctx: &CoverContext<'_>) -> String {
    let inner = format!(
        "<div class=\"banner\"></div><div class=\"body\">{}<h1>{}</h1><p class=\"department\">{}</p><p class=\"period\">{}</p></div>",
        ctx.header_block(),
        ctx.title(),
        ctx.department(),
        ctx.period()
    );
    cover_page("modern", &inner)
}
