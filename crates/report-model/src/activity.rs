//! Activity rows of the planned/realized work table

use serde::{Deserialize, Serialize};

/// Opaque activity identity, stable across reorders
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityId(String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identity
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActivityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActivityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One row of the activity tracking table
///
/// The row number shown in the table is never stored here; it is the
/// position of the activity in `ReportDocument::activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    #[serde(default, rename = "objectifs")]
    pub objectives: String,
    #[serde(default, rename = "realisations")]
    pub realizations: String,
    #[serde(default, rename = "resultats")]
    pub results: String,
    #[serde(default, rename = "indicateurs")]
    pub indicators: String,
    #[serde(default)]
    pub observations: String,
}

impl Activity {
    /// Create an activity with all text fields empty
    pub fn new(id: ActivityId) -> Self {
        Self {
            id,
            objectives: String::new(),
            realizations: String::new(),
            results: String::new(),
            indicators: String::new(),
            observations: String::new(),
        }
    }

    pub fn field(&self, field: ActivityField) -> &str {
        match field {
            ActivityField::Objectives => &self.objectives,
            ActivityField::Realizations => &self.realizations,
            ActivityField::Results => &self.results,
            ActivityField::Indicators => &self.indicators,
            ActivityField::Observations => &self.observations,
        }
    }

    pub fn set_field(&mut self, field: ActivityField, value: impl Into<String>) {
        let slot = match field {
            ActivityField::Objectives => &mut self.objectives,
            ActivityField::Realizations => &mut self.realizations,
            ActivityField::Results => &mut self.results,
            ActivityField::Indicators => &mut self.indicators,
            ActivityField::Observations => &mut self.observations,
        };
        *slot = value.into();
    }

    /// Builder-style field assignment
    pub fn with(mut self, field: ActivityField, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }
}

/// Editable text fields of an activity, in table column order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityField {
    #[serde(rename = "objectifs")]
    Objectives,
    #[serde(rename = "realisations")]
    Realizations,
    #[serde(rename = "resultats")]
    Results,
    #[serde(rename = "indicateurs")]
    Indicators,
    #[serde(rename = "observations")]
    Observations,
}

impl ActivityField {
    pub const ALL: [ActivityField; 5] = [
        ActivityField::Objectives,
        ActivityField::Realizations,
        ActivityField::Results,
        ActivityField::Indicators,
        ActivityField::Observations,
    ];

    /// Snapshot key of the field
    pub fn key(&self) -> &'static str {
        match self {
            ActivityField::Objectives => "objectifs",
            ActivityField::Realizations => "realisations",
            ActivityField::Results => "resultats",
            ActivityField::Indicators => "indicateurs",
            ActivityField::Observations => "observations",
        }
    }
}

impl std::str::FromStr for ActivityField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActivityField::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| format!("Unknown activity field: {}", s))
    }
}
