//! User-facing outcome messages

use report_export::{Artifact, ExportError};
use serde::Serialize;

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// One notification shown after an import or export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }

    pub fn for_import(result: &Result<(), SessionError>) -> Self {
        match result {
            Ok(()) => Notice::success("Données importées avec succès !"),
            Err(_) => {
                Notice::error("Erreur : Le fichier n'est pas un format de sauvegarde valide.")
            }
        }
    }

    pub fn for_export(result: &Result<Artifact, SessionError>) -> Self {
        match result {
            Ok(artifact) => Notice::success(format!("Fichier exporté : {}", artifact.filename)),
            Err(SessionError::Export(ExportError::NoPages)) => {
                Notice::error("Erreur : Aucune page trouvée")
            }
            Err(SessionError::Export(ExportError::Rasterization { .. }))
            | Err(SessionError::Export(ExportError::ImageDecode(_)))
            | Err(SessionError::Export(ExportError::Assembly(_))) => {
                Notice::error("Erreur lors de la génération du PDF. Veuillez réessayer.")
            }
            Err(SessionError::ExportInFlight) => {
                Notice::error("Un export est déjà en cours. Veuillez patienter.")
            }
            Err(e) => Notice::error(format!("Erreur lors de l'export : {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_notices() {
        assert!(!Notice::for_import(&Ok(())).is_error());
        let err = Err(SessionError::Import(report_model::ModelError::NotAnObject));
        assert!(Notice::for_import(&err).is_error());
    }

    #[test]
    fn test_rasterization_failure_notice() {
        let err = Err(SessionError::Export(ExportError::Rasterization {
            page: 2,
            reason: "tainted".into(),
        }));
        let notice = Notice::for_export(&err);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("PDF"));
    }
}
