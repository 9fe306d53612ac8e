//! Layout options: institutional identity printed on every cover

use serde::{Deserialize, Serialize};

/// Institutional identity block shown on covers and content headers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Institution {
    /// Top line, e.g. the national body
    pub name: String,
    /// Second line, region and section
    pub region: String,
    /// Third line, the local entity
    pub local: String,
    /// Short tag used in page footers and some covers
    pub short_name: String,
}

impl Default for Institution {
    fn default() -> Self {
        Self {
            name: "Église Évangélique Assemblée de Dieu du Bénin".to_string(),
            region: "Région de l'Atacora • Section de Natitingou".to_string(),
            local: "Temple Local de Beraca".to_string(),
            short_name: "Beraca".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub institution: Institution,
    /// Place printed in the "Fait à ... le" line
    pub signing_place: String,
    /// Logo image source (URL or data URI); omitted when None
    pub logo_src: Option<String>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            institution: Institution::default(),
            signing_place: "Natitingou".to_string(),
            logo_src: Some("/logo.jpeg".to_string()),
        }
    }
}
