//! The report document and its editing primitives

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityField, ActivityId};
use crate::theme::CoverTheme;

pub const DEFAULT_TITLE: &str = "RAPPORT TRIMESTRIEL";
pub const DEFAULT_YEAR: &str = "2026";

/// Full state of one report being authored
///
/// JSON keys follow the snapshot format written by earlier versions of the
/// tool, so saved files keep importing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(rename = "trimestreDebut")]
    pub quarter_start: String,
    #[serde(rename = "trimestreFin")]
    pub quarter_end: String,
    #[serde(rename = "annee")]
    pub year: String,
    #[serde(rename = "titreRapport")]
    pub title: String,
    #[serde(rename = "nomDepartement")]
    pub department: String,
    #[serde(rename = "periodeCouverte")]
    pub period: String,
    #[serde(rename = "responsableNom")]
    pub manager_name: String,
    #[serde(rename = "responsableContact")]
    pub manager_contact: String,
    #[serde(rename = "introductionAnalyse")]
    pub introduction: String,
    #[serde(rename = "activites")]
    pub activities: Vec<Activity>,
    #[serde(rename = "progres")]
    pub progress: Vec<String>,
    pub impacts: Vec<String>,
    #[serde(rename = "defis")]
    pub challenges: Vec<String>,
    #[serde(rename = "recommandations")]
    pub recommendations: Vec<String>,
    #[serde(rename = "dateFait")]
    pub signed_on: String,
    #[serde(rename = "bureauDe")]
    pub signing_office: String,
    #[serde(rename = "nomSecretaire")]
    pub secretary_name: String,
    #[serde(rename = "nomDirecteur")]
    pub director_name: String,
    #[serde(rename = "coverTheme", default)]
    pub cover_theme: CoverTheme,
}

/// The four positionally addressed text lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextList {
    #[serde(rename = "progres")]
    Progress,
    #[serde(rename = "impacts")]
    Impacts,
    #[serde(rename = "defis")]
    Challenges,
    #[serde(rename = "recommandations")]
    Recommendations,
}

impl TextList {
    pub const ALL: [TextList; 4] = [
        TextList::Progress,
        TextList::Impacts,
        TextList::Challenges,
        TextList::Recommendations,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TextList::Progress => "progres",
            TextList::Impacts => "impacts",
            TextList::Challenges => "defis",
            TextList::Recommendations => "recommandations",
        }
    }
}

impl std::str::FromStr for TextList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextList::ALL
            .into_iter()
            .find(|l| l.key() == s)
            .ok_or_else(|| format!("Unknown text list: {}", s))
    }
}

impl ReportDocument {
    /// The fixed starting template, signed today
    pub fn initial() -> Self {
        let today = chrono::Local::now().format("%d/%m/%Y").to_string();
        Self::initial_at(today)
    }

    /// The fixed starting template with an explicit signing date
    pub fn initial_at(signed_on: impl Into<String>) -> Self {
        Self {
            quarter_start: String::new(),
            quarter_end: String::new(),
            year: DEFAULT_YEAR.to_string(),
            title: DEFAULT_TITLE.to_string(),
            department: String::new(),
            period: String::new(),
            manager_name: String::new(),
            manager_contact: String::new(),
            introduction: String::new(),
            activities: vec![Activity::new(ActivityId::new("1"))],
            progress: vec![String::new()],
            impacts: vec![String::new()],
            challenges: vec![String::new()],
            recommendations: vec![String::new()],
            signed_on: signed_on.into(),
            signing_office: String::new(),
            secretary_name: String::new(),
            director_name: String::new(),
            cover_theme: CoverTheme::default(),
        }
    }

    pub fn list(&self, list: TextList) -> &[String] {
        match list {
            TextList::Progress => &self.progress,
            TextList::Impacts => &self.impacts,
            TextList::Challenges => &self.challenges,
            TextList::Recommendations => &self.recommendations,
        }
    }

    fn list_mut(&mut self, list: TextList) -> &mut Vec<String> {
        match list {
            TextList::Progress => &mut self.progress,
            TextList::Impacts => &mut self.impacts,
            TextList::Challenges => &mut self.challenges,
            TextList::Recommendations => &mut self.recommendations,
        }
    }

    /// Append an empty activity and return its id
    pub fn add_activity(&mut self) -> ActivityId {
        let mut id = ActivityId::generate();
        while self.find_activity(&id).is_some() {
            id = ActivityId::generate();
        }
        self.activities.push(Activity::new(id.clone()));
        id
    }

    pub fn find_activity(&self, id: &ActivityId) -> Option<&Activity> {
        self.activities.iter().find(|a| &a.id == id)
    }

    /// Set one field of the activity with the given id
    ///
    /// Returns false when no activity has that id.
    pub fn update_activity(
        &mut self,
        id: &ActivityId,
        field: ActivityField,
        value: impl Into<String>,
    ) -> bool {
        match self.activities.iter_mut().find(|a| &a.id == id) {
            Some(act) => {
                act.set_field(field, value);
                true
            }
            None => false,
        }
    }

    /// Drop the activity with the given id, keeping the others in order
    pub fn remove_activity(&mut self, id: &ActivityId) -> bool {
        let before = self.activities.len();
        self.activities.retain(|a| &a.id != id);
        self.activities.len() != before
    }

    /// Give fresh ids to later activities that repeat an earlier id
    ///
    /// Returns the number of ids replaced.
    pub fn ensure_unique_activity_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut replaced = 0;
        for i in 0..self.activities.len() {
            if seen.insert(self.activities[i].id.clone()) {
                continue;
            }
            let mut fresh = ActivityId::generate();
            while seen.contains(&fresh) || self.activities.iter().any(|a| a.id == fresh) {
                fresh = ActivityId::generate();
            }
            seen.insert(fresh.clone());
            self.activities[i].id = fresh;
            replaced += 1;
        }
        replaced
    }

    /// Append an empty entry to a text list
    pub fn push_entry(&mut self, list: TextList) {
        self.list_mut(list).push(String::new());
    }

    /// Overwrite the entry at `index` of the current list state
    pub fn edit_entry(&mut self, list: TextList, index: usize, value: impl Into<String>) -> bool {
        match self.list_mut(list).get_mut(index) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Remove the entry at `index`; later entries shift down by one
    pub fn remove_entry(&mut self, list: TextList, index: usize) -> bool {
        let entries = self.list_mut(list);
        if index < entries.len() {
            entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Name used in export filenames
    pub fn filename_stem(&self) -> &str {
        let name = self.department.trim();
        if name.is_empty() {
            "AD"
        } else {
            name
        }
    }

    /// Period label derived from the quarter bounds and year
    ///
    /// Only available when all three parts are filled in.
    pub fn derived_period(&self) -> Option<String> {
        let (start, end, year) = (
            self.quarter_start.trim(),
            self.quarter_end.trim(),
            self.year.trim(),
        );
        if start.is_empty() || end.is_empty() || year.is_empty() {
            return None;
        }
        Some(format!("{} à {} {}", start, end, year))
    }
}

impl Default for ReportDocument {
    fn default() -> Self {
        Self::initial()
    }
}
