//! Subcommand implementations

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use report_export::ExportFormat;
use report_layout::{list_themes, ThemeInfo};
use report_model::{import_snapshot, to_snapshot, ReportDocument};
use report_session::{FileStore, Notice, ReportConfig, ReportSession};
use tracing::info;

use crate::captures::DirectoryRasterizer;
use crate::{Cli, Command};

const DEFAULT_STORAGE_DIR: &str = ".report-data";

/// Resolved configuration for one invocation
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: ReportConfig,
    pub storage_dir: PathBuf,
}

impl Settings {
    /// Config file first, then command-line overrides
    pub fn resolve(config_path: Option<&Path>, storage_dir: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ReportConfig::from_file(path)?,
            None => ReportConfig::default(),
        };
        let storage_dir = storage_dir
            .map(Path::to_path_buf)
            .or_else(|| config.storage.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_DIR));
        Ok(Self {
            config,
            storage_dir,
        })
    }

    pub fn store(&self) -> FileStore {
        FileStore::new(&self.storage_dir)
    }

    /// The stored session, persisted on every change
    pub fn open_session(&self) -> ReportSession {
        ReportSession::restore(self.store(), &self.config)
    }

    /// A read-only session over a snapshot file, or the stored session
    pub fn load_session(&self, input: Option<&Path>) -> Result<ReportSession> {
        match input {
            Some(path) => {
                let doc = read_snapshot(path)?;
                Ok(ReportSession::new(doc).with_pdf_options(self.config.pdf))
            }
            None => Ok(self.open_session()),
        }
    }
}

fn read_snapshot(path: &Path) -> Result<ReportDocument> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    import_snapshot(&json).with_context(|| format!("Invalid snapshot: {}", path.display()))
}

pub fn new_template(out: Option<&Path>) -> Result<String> {
    let json = to_snapshot(&ReportDocument::initial())?;
    if let Some(path) = out {
        fs::write(path, &json)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
        info!(path = %path.display(), "Wrote report template");
    }
    Ok(json)
}

pub fn render(session: &ReportSession, out: &Path) -> Result<()> {
    let html = session.print_html();
    fs::write(out, html).with_context(|| format!("Failed to write HTML: {}", out.display()))?;
    info!(path = %out.display(), pages = session.render().page_count(), "Rendered report");
    Ok(())
}

/// Export one format into `out_dir`; returns the written path
pub async fn export(
    session: &ReportSession,
    format: ExportFormat,
    out_dir: &Path,
    captures: Option<&Path>,
) -> Result<PathBuf> {
    let artifact = if format.needs_rasterizer() {
        let Some(dir) = captures else {
            bail!("PDF export needs --captures DIR with one page-NNN.png per page");
        };
        session
            .export(format, &DirectoryRasterizer::new(dir))
            .await?
    } else {
        session.export_static(format)?
    };

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;
    let path = out_dir.join(&artifact.filename);
    fs::write(&path, &artifact.bytes)
        .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
    info!(path = %path.display(), bytes = artifact.len(), "Exported report");
    Ok(path)
}

pub fn import(settings: &Settings, input: &Path) -> Result<Notice> {
    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read snapshot: {}", input.display()))?;
    let mut session = settings.open_session();
    let result = session.import(&json);
    let notice = Notice::for_import(&result);
    result.with_context(|| format!("Import rejected: {}", input.display()))?;
    Ok(notice)
}

pub fn set_field(settings: &Settings, field: &str, value: &str) -> Result<()> {
    let mut session = settings.open_session();
    session
        .set_field(field, value)
        .with_context(|| format!("Cannot set field '{}'", field))?;
    Ok(())
}

pub fn themes() -> Vec<ThemeInfo> {
    list_themes()
}

/// Dispatch a parsed command line
pub async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(cli.config.as_deref(), cli.storage_dir.as_deref())?;

    match cli.command {
        Command::New { out } => {
            let json = new_template(out.as_deref())?;
            if out.is_none() {
                println!("{}", json);
            }
        }
        Command::Render { input, out } => {
            let session = settings.load_session(input.as_deref())?;
            render(&session, &out)?;
        }
        Command::Export {
            input,
            format,
            out_dir,
            captures,
        } => {
            let session = settings.load_session(input.as_deref())?;
            let path = export(&session, format, &out_dir, captures.as_deref()).await?;
            println!("{}", path.display());
        }
        Command::Import { input } => {
            let notice = import(&settings, &input)?;
            println!("{}", notice.message);
        }
        Command::Set { field, value } => {
            set_field(&settings, &field, &value)?;
        }
        Command::Themes => {
            for theme in themes() {
                println!("{:<14} {}", theme.id, theme.label);
            }
        }
    }
    Ok(())
}
