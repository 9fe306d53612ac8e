//! Optional text generation for the introduction and analysis lists
//!
//! The generator itself is a host-provided `AssistClient`. Without a
//! configured credential the assistant reports `Unavailable` and never
//! calls the client. Every failure is returned to the caller, which logs it
//! and leaves the document as it was.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use report_model::{DocumentPatch, ReportDocument, TextList};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

static FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```(?:json)?").unwrap());

/// Request/response text generator
#[async_trait(?Send)]
pub trait AssistClient {
    /// Generated text, or `None` when the call failed or returned nothing
    async fn generate(&self, prompt: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.0-flash".to_string(),
        }
    }
}

impl AssistConfig {
    pub fn with_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn is_available(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|k| !k.trim().is_empty())
            .unwrap_or(false)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssistError {
    #[error("Assistant unavailable: no API key configured")]
    Unavailable,

    #[error("Assistant returned no content")]
    NoResponse,

    #[error("Malformed assistant response: {0}")]
    MalformedResponse(String),
}

/// Prompt asking for a short introduction
pub fn intro_prompt(doc: &ReportDocument) -> String {
    let planned: Vec<&str> = doc
        .activities
        .iter()
        .map(|a| a.objectives.as_str())
        .collect();
    format!(
        "Rédige une introduction professionnelle et spirituelle pour un rapport trimestriel d'église. Département: {}. Activités prévues: {}. Format court, maximum 3 phrases.",
        doc.department,
        planned.join(", ")
    )
}

/// Prompt asking for the four analysis lists as JSON
pub fn analysis_prompt(doc: &ReportDocument) -> String {
    let rows: Vec<String> = doc
        .activities
        .iter()
        .map(|a| {
            format!(
                "- Activité: {}, Réalisation: {}, Résultat: {}, Obs: {}",
                a.objectives, a.realizations, a.results, a.observations
            )
        })
        .collect();
    format!(
        "Analyse ces données de suivi PTA d'un département d'église :\n{}\n\nGénère en format JSON (sans texte avant ou après) :\n{{ \"progres\": [\"un progrès\"], \"impacts\": [\"un impact\"], \"defis\": [\"un défi\"], \"recommandations\": [\"une reco\"] }}\nProduis 2-3 éléments par liste en te basant sur ce qui est réalisé ou non.",
        rows.join("\n")
    )
}

/// Remove markdown code fences around a JSON payload
pub fn strip_fences(text: &str) -> String {
    FENCE.replace_all(text, "").trim().to_string()
}

#[derive(Debug, Default, Deserialize)]
struct AnalysisLists {
    progres: Option<Vec<String>>,
    impacts: Option<Vec<String>>,
    defis: Option<Vec<String>>,
    recommandations: Option<Vec<String>>,
}

/// Parse an analysis response into a patch
///
/// Lists missing from the response are left out of the patch so the
/// document keeps its current entries.
pub fn parse_analysis(text: &str) -> Result<DocumentPatch, AssistError> {
    let cleaned = strip_fences(text);
    let lists: AnalysisLists = serde_json::from_str(&cleaned)
        .map_err(|e| AssistError::MalformedResponse(e.to_string()))?;

    let mut patch = DocumentPatch::default();
    for (list, entries) in [
        (TextList::Progress, lists.progres),
        (TextList::Impacts, lists.impacts),
        (TextList::Challenges, lists.defis),
        (TextList::Recommendations, lists.recommandations),
    ] {
        if let Some(entries) = entries {
            patch = patch.list(list, entries);
        }
    }
    Ok(patch)
}

/// Builds prompts, calls the client and turns responses into patches
pub struct Assistant<C> {
    client: C,
    config: AssistConfig,
}

impl<C: AssistClient> Assistant<C> {
    pub fn new(client: C, config: AssistConfig) -> Self {
        Self { client, config }
    }

    pub fn is_available(&self) -> bool {
        self.config.is_available()
    }

    async fn call(&self, prompt: &str) -> Result<String, AssistError> {
        if !self.is_available() {
            warn!("Assistant called without an API key");
            return Err(AssistError::Unavailable);
        }
        debug!(model = %self.config.model, chars = prompt.len(), "Calling assistant");
        match self.client.generate(prompt).await {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(AssistError::NoResponse),
        }
    }

    /// Patch replacing the introduction with generated text
    pub async fn generate_intro(&self, doc: &ReportDocument) -> Result<DocumentPatch, AssistError> {
        let text = self.call(&intro_prompt(doc)).await?;
        Ok(DocumentPatch::default().introduction(text.trim()))
    }

    /// Patch replacing the analysis and recommendation lists
    pub async fn generate_analysis(
        &self,
        doc: &ReportDocument,
    ) -> Result<DocumentPatch, AssistError> {
        let text = self.call(&analysis_prompt(doc)).await?;
        parse_analysis(&text)
    }
}
