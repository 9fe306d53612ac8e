//! Cover registry and theme metadata

use std::collections::HashMap;

use once_cell::sync::Lazy;
use report_model::CoverTheme;
use serde::{Deserialize, Serialize};

use super::{variants, CoverContext, CoverRenderer};

/// Information about an available cover theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeInfo {
    /// Wire identifier stored in the document
    pub id: String,
    /// Label shown in the theme selector
    pub label: String,
    pub description: String,
}

/// List all available cover themes, in selector order
pub fn list_themes() -> Vec<ThemeInfo> {
    CoverTheme::ALL
        .iter()
        .map(|theme| ThemeInfo {
            id: theme.as_str().to_string(),
            label: theme.label().to_string(),
            description: describe(*theme).to_string(),
        })
        .collect()
}

fn describe(theme: CoverTheme) -> &'static str {
    match theme {
        CoverTheme::Official => "Bordered sheet with a dark left band",
        CoverTheme::Prestige => "Double frame in blue and red",
        CoverTheme::Architect => "Dot grid with a ruled title panel",
        CoverTheme::Vintage => "Heavy top and bottom rules, italic department",
        CoverTheme::Spirit => "Left accent bar carrying the title",
        CoverTheme::Minimalist => "Centered text, no frame",
        CoverTheme::Royal => "Double border with a light inner frame",
        CoverTheme::Celestial => "Starburst corner ornament",
        CoverTheme::Eco => "Dashed border with labelled fields",
        CoverTheme::Ethereal => "Soft pattern background",
        CoverTheme::StainedGlass => "Framed panel with a ruled department band",
        CoverTheme::Modern => "Full-width banner and oversized title",
    }
}

static BUILTIN: Lazy<CoverRegistry> = Lazy::new(|| {
    let mut registry = CoverRegistry::empty();
    registry
        .register(CoverTheme::Official, variants::official)
        .register(CoverTheme::Prestige, variants::prestige)
        .register(CoverTheme::Architect, variants::architect)
        .register(CoverTheme::Vintage, variants::vintage)
        .register(CoverTheme::Spirit, variants::spirit)
        .register(CoverTheme::Minimalist, variants::minimalist)
        .register(CoverTheme::Royal, variants::royal)
        .register(CoverTheme::Celestial, variants::celestial)
        .register(CoverTheme::Eco, variants::eco)
        .register(CoverTheme::Ethereal, variants::ethereal)
        .register(CoverTheme::StainedGlass, variants::stained_glass)
        .register(CoverTheme::Modern, variants::modern);
    registry
});

/// Maps each theme to its renderer
///
/// Lookups never fail: a theme with no registered renderer falls back to
/// the default theme's renderer, and to the built-in official cover when
/// even that is missing.
#[derive(Clone)]
pub struct CoverRegistry {
    renderers: HashMap<CoverTheme, CoverRenderer>,
}

impl CoverRegistry {
    /// Registry with no renderers; every lookup yields the official cover
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Shared registry with all built-in variants
    pub fn builtin() -> &'static CoverRegistry {
        &BUILTIN
    }

    /// Add or replace the renderer for a theme
    pub fn register(&mut self, theme: CoverTheme, renderer: CoverRenderer) -> &mut Self {
        self.renderers.insert(theme, renderer);
        self
    }

    pub fn contains(&self, theme: CoverTheme) -> bool {
        self.renderers.contains_key(&theme)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    pub fn resolve(&self, theme: CoverTheme) -> CoverRenderer {
        self.renderers
            .get(&theme)
            .or_else(|| self.renderers.get(&CoverTheme::default()))
            .copied()
            .unwrap_or(variants::official)
    }

    /// Render the cover for the document's theme
    pub fn render(&self, ctx: &CoverContext<'_>) -> String {
        (self.resolve(ctx.doc.cover_theme))(ctx)
    }
}

impl Default for CoverRegistry {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl std::fmt::Debug for CoverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut themes: Vec<&str> = self.renderers.keys().map(|t| t.as_str()).collect();
        themes.sort_unstable();
        f.debug_struct("CoverRegistry").field("themes", &themes).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::LayoutOptions;
    use report_model::ReportDocument;

    #[test]
    fn test_builtin_covers_every_theme() {
        let registry = CoverRegistry::builtin();
        assert_eq!(registry.len(), CoverTheme::ALL.len());
        for theme in CoverTheme::ALL {
            assert!(registry.contains(theme), "missing {}", theme);
        }
    }

    #[test]
    fn test_list_themes_order_and_labels() {
        let themes = list_themes();
        assert_eq!(themes.len(), 12);
        assert_eq!(themes[0].id, "official");
        assert_eq!(themes[10].id, "stainedglass");
    }

    #[test]
    fn test_empty_registry_falls_back_to_official() {
        let registry = CoverRegistry::empty();
        let mut doc = ReportDocument::initial_at("01/04/2026");
        doc.cover_theme = CoverTheme::Modern;
        let options = LayoutOptions::default();
        let html = registry.render(&CoverContext::new(&doc, &options));
        assert!(html.contains("cover-official"));
    }

    #[test]
    fn test_each_variant_shows_department_and_period() {
        let mut doc = ReportDocument::initial_at("01/04/2026");
        doc.department = "Chorale & Louange".to_string();
        doc.period = "Janvier à Mars 2026".to_string();
        let options = LayoutOptions::default();
        for theme in CoverTheme::ALL {
            doc.cover_theme = theme;
            let html = CoverRegistry::builtin().render(&CoverContext::new(&doc, &options));
            assert!(html.contains("Chorale &amp; Louange"), "{}", theme);
            assert!(html.contains("Janvier à Mars 2026"), "{}", theme);
            assert!(html.contains(&format!("cover-{}", theme.as_str())), "{}", theme);
        }
    }

    #[test]
    fn test_placeholders_when_blank() {
        let doc = ReportDocument::initial_at("01/04/2026");
        let options = LayoutOptions::default();
        let html = CoverRegistry::builtin().render(&CoverContext::new(&doc, &options));
        assert!(html.contains("NOM DU DÉPARTEMENT"));
        assert!(html.contains("PÉRIODE"));
    }
}
