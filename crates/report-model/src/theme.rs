//! Cover page theme selector
//!
//! The set of themes is closed. Values coming from snapshots or patches are
//! resolved leniently: anything unrecognized falls back to `Official`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Visual variant of the cover page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoverTheme {
    /// Bordered page with a dark band on the left edge
    #[default]
    Official,
    /// Double frame
    Prestige,
    /// Fine dot grid
    Architect,
    /// Heavy double rule top and bottom
    Vintage,
    /// Left accent bar
    Spirit,
    /// Centered, no ornaments
    Minimalist,
    /// Double border
    Royal,
    /// Radiant starburst
    Celestial,
    /// Dashed border
    Eco,
    /// Soft floral pattern
    Ethereal,
    /// Framed stained-glass panel
    StainedGlass,
    /// Bold banner
    Modern,
}

impl CoverTheme {
    /// All themes, in selector order
    pub const ALL: [CoverTheme; 12] = [
        CoverTheme::Official,
        CoverTheme::Minimalist,
        CoverTheme::Royal,
        CoverTheme::Prestige,
        CoverTheme::Architect,
        CoverTheme::Vintage,
        CoverTheme::Spirit,
        CoverTheme::Celestial,
        CoverTheme::Eco,
        CoverTheme::Ethereal,
        CoverTheme::StainedGlass,
        CoverTheme::Modern,
    ];

    /// Wire name used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverTheme::Official => "official",
            CoverTheme::Prestige => "prestige",
            CoverTheme::Architect => "architect",
            CoverTheme::Vintage => "vintage",
            CoverTheme::Spirit => "spirit",
            CoverTheme::Minimalist => "minimalist",
            CoverTheme::Royal => "royal",
            CoverTheme::Celestial => "celestial",
            CoverTheme::Eco => "eco",
            CoverTheme::Ethereal => "ethereal",
            CoverTheme::StainedGlass => "stainedglass",
            CoverTheme::Modern => "modern",
        }
    }

    /// Label shown in the theme picker
    pub fn label(&self) -> &'static str {
        match self {
            CoverTheme::Official => "Officiel AD",
            CoverTheme::Prestige => "Double Cadre",
            CoverTheme::Architect => "Grille Fine",
            CoverTheme::Vintage => "Classique",
            CoverTheme::Spirit => "Spirituel",
            CoverTheme::Minimalist => "Minimal Pur",
            CoverTheme::Royal => "Cadre Royal",
            CoverTheme::Celestial => "Rayonnement",
            CoverTheme::Eco => "Éco-Dashed",
            CoverTheme::Ethereal => "Fleur Douce",
            CoverTheme::StainedGlass => "Vitrail Léger",
            CoverTheme::Modern => "Lignes Pro",
        }
    }

    /// Strict lookup by wire name
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|theme| theme.as_str() == name)
    }

    /// Lenient lookup: unknown names resolve to the default theme
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }
}

impl std::fmt::Display for CoverTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CoverTheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CoverTheme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Any JSON shape is accepted; only a known string selects a variant
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .map(CoverTheme::resolve)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_roundtrip() {
        for theme in CoverTheme::ALL {
            assert_eq!(CoverTheme::from_name(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn test_all_has_no_duplicates() {
        let mut names: Vec<_> = CoverTheme::ALL.iter().map(|t| t.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn test_unknown_name_resolves_to_official() {
        assert_eq!(CoverTheme::resolve("unknown-value"), CoverTheme::Official);
        assert_eq!(CoverTheme::resolve(""), CoverTheme::Official);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(CoverTheme::resolve("StainedGlass"), CoverTheme::StainedGlass);
    }

    #[test]
    fn test_deserialize_never_fails() {
        let theme: CoverTheme = serde_json::from_str("\"royal\"").unwrap();
        assert_eq!(theme, CoverTheme::Royal);

        let theme: CoverTheme = serde_json::from_str("\"nope\"").unwrap();
        assert_eq!(theme, CoverTheme::Official);

        let theme: CoverTheme = serde_json::from_str("42").unwrap();
        assert_eq!(theme, CoverTheme::Official);

        let theme: CoverTheme = serde_json::from_str("null").unwrap();
        assert_eq!(theme, CoverTheme::Official);
    }

    #[test]
    fn test_serialize_uses_wire_name() {
        let json = serde_json::to_string(&CoverTheme::StainedGlass).unwrap();
        assert_eq!(json, "\"stainedglass\"");
    }
}
