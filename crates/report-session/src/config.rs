//! TOML configuration
//!
//! ```toml
//! [storage]
//! dir = "/var/lib/reports"
//! key = "beraca_report_v3_data"
//!
//! [pdf]
//! margin_mm = 10.0
//! scale = 2.0
//! ```
//!
//! Every section and key is optional.

use anyhow::Context;
use report_export::PdfOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key the snapshot is stored under unless configured otherwise
pub const DEFAULT_STORAGE_KEY: &str = "beraca_report_v3_data";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub storage: StorageConfig,
    pub pdf: PdfOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for file-backed snapshots; hosts pick a default when unset
    pub dir: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl ReportConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: ReportConfig = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.storage.key.trim().is_empty() {
            anyhow::bail!("storage.key must not be empty");
        }
        if !(0.0..105.0).contains(&self.pdf.margin_mm) {
            anyhow::bail!("pdf.margin_mm must be between 0 and 105");
        }
        if !(self.pdf.scale.is_finite() && self.pdf.scale > 0.0) {
            anyhow::bail!("pdf.scale must be positive");
        }
        Ok(())
    }
}
