//! Sparse field-level changes to a report document
//!
//! A patch names any subset of document fields. Merging overwrites exactly
//! those fields; list-valued fields are replaced wholesale, never merged
//! element by element.

use serde::{Deserialize, Serialize};

use crate::activity::Activity;
use crate::document::{ReportDocument, TextList};
use crate::error::ModelError;
use crate::theme::CoverTheme;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPatch {
    #[serde(rename = "trimestreDebut", default, skip_serializing_if = "Option::is_none")]
    pub quarter_start: Option<String>,
    #[serde(rename = "trimestreFin", default, skip_serializing_if = "Option::is_none")]
    pub quarter_end: Option<String>,
    #[serde(rename = "annee", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(rename = "titreRapport", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "nomDepartement", default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(rename = "periodeCouverte", default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(rename = "responsableNom", default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(rename = "responsableContact", default, skip_serializing_if = "Option::is_none")]
    pub manager_contact: Option<String>,
    #[serde(rename = "introductionAnalyse", default, skip_serializing_if = "Option::is_none")]
    pub introduction: Option<String>,
    #[serde(rename = "activites", default, skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
    #[serde(rename = "progres", default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impacts: Option<Vec<String>>,
    #[serde(rename = "defis", default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(rename = "recommandations", default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Vec<String>>,
    #[serde(rename = "dateFait", default, skip_serializing_if = "Option::is_none")]
    pub signed_on: Option<String>,
    #[serde(rename = "bureauDe", default, skip_serializing_if = "Option::is_none")]
    pub signing_office: Option<String>,
    #[serde(rename = "nomSecretaire", default, skip_serializing_if = "Option::is_none")]
    pub secretary_name: Option<String>,
    #[serde(rename = "nomDirecteur", default, skip_serializing_if = "Option::is_none")]
    pub director_name: Option<String>,
    #[serde(rename = "coverTheme", default, skip_serializing_if = "Option::is_none")]
    pub cover_theme: Option<CoverTheme>,
}

macro_rules! text_setters {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name(mut self, value: impl Into<String>) -> Self {
                self.$name = Some(value.into());
                self
            }
        )*
    };
}

impl DocumentPatch {
    text_setters!(
        quarter_start,
        quarter_end,
        year,
        title,
        department,
        period,
        manager_name,
        manager_contact,
        introduction,
        signed_on,
        signing_office,
        secretary_name,
        director_name,
    );

    pub fn activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = Some(activities);
        self
    }

    pub fn cover_theme(mut self, theme: CoverTheme) -> Self {
        self.cover_theme = Some(theme);
        self
    }

    /// Replace one of the four text lists
    pub fn list(mut self, list: TextList, entries: Vec<String>) -> Self {
        let slot = match list {
            TextList::Progress => &mut self.progress,
            TextList::Impacts => &mut self.impacts,
            TextList::Challenges => &mut self.challenges,
            TextList::Recommendations => &mut self.recommendations,
        };
        *slot = Some(entries);
        self
    }

    /// Parse a patch from JSON using snapshot keys
    ///
    /// Unknown keys are ignored; a present key with the wrong shape fails.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ModelError::InvalidJson(e.to_string()))?;
        if !value.is_object() {
            return Err(ModelError::NotAnObject);
        }
        serde_json::from_value(value).map_err(|e| ModelError::InvalidField(e.to_string()))
    }

    /// Patch setting a single scalar text field by its snapshot key
    pub fn text_field(key: &str, value: &str) -> Result<Self, ModelError> {
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), serde_json::Value::String(value.to_string()));
        let patch: DocumentPatch = serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| ModelError::InvalidField(e.to_string()))?;
        if patch.is_empty() {
            return Err(ModelError::UnknownField(key.to_string()));
        }
        Ok(patch)
    }

    pub fn is_empty(&self) -> bool {
        self == &DocumentPatch::default()
    }
}

fn overwrite<T: Clone>(slot: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *slot = value.clone();
    }
}

impl ReportDocument {
    /// Shallow merge: a new document equal to `self` except on the fields
    /// present in `patch`
    pub fn merge(&self, patch: &DocumentPatch) -> ReportDocument {
        let mut next = self.clone();
        next.apply(patch);
        next
    }

    /// In-place form of [`ReportDocument::merge`]
    pub fn apply(&mut self, patch: &DocumentPatch) {
        overwrite(&mut self.quarter_start, &patch.quarter_start);
        overwrite(&mut self.quarter_end, &patch.quarter_end);
        overwrite(&mut self.year, &patch.year);
        overwrite(&mut self.title, &patch.title);
        overwrite(&mut self.department, &patch.department);
        overwrite(&mut self.period, &patch.period);
        overwrite(&mut self.manager_name, &patch.manager_name);
        overwrite(&mut self.manager_contact, &patch.manager_contact);
        overwrite(&mut self.introduction, &patch.introduction);
        overwrite(&mut self.activities, &patch.activities);
        overwrite(&mut self.progress, &patch.progress);
        overwrite(&mut self.impacts, &patch.impacts);
        overwrite(&mut self.challenges, &patch.challenges);
        overwrite(&mut self.recommendations, &patch.recommendations);
        overwrite(&mut self.signed_on, &patch.signed_on);
        overwrite(&mut self.signing_office, &patch.signing_office);
        overwrite(&mut self.secretary_name, &patch.secretary_name);
        overwrite(&mut self.director_name, &patch.director_name);
        overwrite(&mut self.cover_theme, &patch.cover_theme);
    }
}
