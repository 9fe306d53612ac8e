//! The mutation gateway
//!
//! Every change, from single keystrokes to imports, goes through
//! [`ReportSession`]. Editing helpers compute the new value of one field
//! and hand it to [`ReportSession::apply`] as a patch, so observers see one
//! notification per accepted change.

use report_export::{Artifact, ExportFormat, Exporter, PdfOptions, Rasterizer};
use report_layout::{LayoutEngine, RenderedReport};
use report_model::{
    import_snapshot, ActivityField, ActivityId, CoverTheme, DocumentPatch, ReportDocument,
    TextList,
};
use tracing::{debug, info, warn};

use crate::assist::{AssistClient, AssistError, Assistant};
use crate::config::ReportConfig;
use crate::error::SessionError;
use crate::guard::{ExportGuard, ExportSlot};
use crate::observer::{PersistObserver, SnapshotObserver};
use crate::store::SnapshotStore;

/// Owns the live document and its observers
pub struct ReportSession {
    doc: ReportDocument,
    observers: Vec<Box<dyn SnapshotObserver>>,
    engine: LayoutEngine,
    exporter: Exporter,
    export_slot: ExportSlot,
}

impl ReportSession {
    pub fn new(doc: ReportDocument) -> Self {
        Self {
            doc,
            observers: Vec::new(),
            engine: LayoutEngine::default(),
            exporter: Exporter::default(),
            export_slot: ExportSlot::new(),
        }
    }

    /// Start from the stored snapshot and persist every change back to it
    ///
    /// A missing, unreadable or invalid snapshot starts from the initial
    /// template instead.
    pub fn restore<S: SnapshotStore + 'static>(store: S, config: &ReportConfig) -> Self {
        let key = config.storage.key.as_str();
        let doc = match store.load(key) {
            Ok(Some(json)) => match import_snapshot(&json) {
                Ok(doc) => {
                    info!(key, "Restored report snapshot");
                    doc
                }
                Err(e) => {
                    warn!(key, error = %e, "Stored snapshot is invalid, starting fresh");
                    ReportDocument::initial()
                }
            },
            Ok(None) => {
                debug!(key, "No stored snapshot, starting fresh");
                ReportDocument::initial()
            }
            Err(e) => {
                warn!(key, error = %e, "Failed to read stored snapshot, starting fresh");
                ReportDocument::initial()
            }
        };

        let mut session = Self::new(doc).with_pdf_options(config.pdf);
        session.add_observer(PersistObserver::new(store, key));
        session
    }

    pub fn with_layout(mut self, engine: LayoutEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn with_pdf_options(mut self, options: PdfOptions) -> Self {
        self.exporter = Exporter::new(options);
        self
    }

    pub fn add_observer(&mut self, observer: impl SnapshotObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn document(&self) -> &ReportDocument {
        &self.doc
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer.notify(&self.doc);
        }
    }

    /// Install a new document, filling a blank period label from the
    /// quarter bounds and year
    fn replace(&mut self, mut doc: ReportDocument) {
        if doc.period.trim().is_empty() {
            if let Some(period) = doc.derived_period() {
                debug!(%period, "Filled period from quarter bounds");
                doc.period = period;
            }
        }
        self.doc = doc;
        self.notify();
    }

    /// Shallow-merge a patch into the document
    ///
    /// Also fills the period label from the quarter bounds and year when
    /// the label is still blank.
    pub fn apply(&mut self, patch: &DocumentPatch) -> &ReportDocument {
        let next = self.doc.merge(patch);
        self.replace(next);
        &self.doc
    }

    /// Apply a patch given as snapshot-keyed JSON
    pub fn apply_json(&mut self, json: &str) -> Result<&ReportDocument, SessionError> {
        let patch = DocumentPatch::from_json(json)?;
        Ok(self.apply(&patch))
    }

    /// Set one scalar text field by its snapshot key, e.g. `nomDepartement`
    pub fn set_field(&mut self, key: &str, value: &str) -> Result<(), SessionError> {
        let patch = DocumentPatch::text_field(key, value)?;
        self.apply(&patch);
        Ok(())
    }

    pub fn set_theme(&mut self, theme: CoverTheme) {
        self.apply(&DocumentPatch::default().cover_theme(theme));
    }

    pub fn add_activity(&mut self) -> ActivityId {
        let mut draft = self.doc.clone();
        let id = draft.add_activity();
        self.apply(&DocumentPatch::default().activities(draft.activities));
        id
    }

    /// Returns false when no activity has this id
    pub fn update_activity(
        &mut self,
        id: &ActivityId,
        field: ActivityField,
        value: impl Into<String>,
    ) -> bool {
        let mut draft = self.doc.clone();
        if !draft.update_activity(id, field, value) {
            return false;
        }
        self.apply(&DocumentPatch::default().activities(draft.activities));
        true
    }

    pub fn remove_activity(&mut self, id: &ActivityId) -> bool {
        let mut draft = self.doc.clone();
        if !draft.remove_activity(id) {
            return false;
        }
        self.apply(&DocumentPatch::default().activities(draft.activities));
        true
    }

    fn apply_list(&mut self, list: TextList, draft: &ReportDocument) {
        let entries = draft.list(list).to_vec();
        self.apply(&DocumentPatch::default().list(list, entries));
    }

    pub fn push_entry(&mut self, list: TextList) {
        let mut draft = self.doc.clone();
        draft.push_entry(list);
        self.apply_list(list, &draft);
    }

    /// Entries are addressed by their current index
    pub fn edit_entry(&mut self, list: TextList, index: usize, value: impl Into<String>) -> bool {
        let mut draft = self.doc.clone();
        if !draft.edit_entry(list, index, value) {
            return false;
        }
        self.apply_list(list, &draft);
        true
    }

    pub fn remove_entry(&mut self, list: TextList, index: usize) -> bool {
        let mut draft = self.doc.clone();
        if !draft.remove_entry(list, index) {
            return false;
        }
        self.apply_list(list, &draft);
        true
    }

    /// Replace the document with a validated snapshot
    ///
    /// On failure the current document is left untouched.
    pub fn import(&mut self, json: &str) -> Result<(), SessionError> {
        let doc = import_snapshot(json).map_err(|e| {
            warn!(error = %e, "Rejected import");
            SessionError::Import(e)
        })?;
        info!(
            department = %doc.department,
            activities = doc.activities.len(),
            "Imported report"
        );
        self.replace(doc);
        Ok(())
    }

    pub fn reset(&mut self) {
        info!("Reset report to the initial template");
        self.replace(ReportDocument::initial());
    }

    pub fn render(&self) -> RenderedReport {
        self.engine.layout(&self.doc)
    }

    /// Printable HTML of the current page sequence
    pub fn print_html(&self) -> String {
        self.render().standalone_html(&self.doc.title)
    }

    pub fn is_exporting(&self) -> bool {
        self.export_slot.is_busy()
    }

    /// Freeze the current document and pages for an export
    ///
    /// Fails while another export job is alive. The job owns its copy of
    /// the document, so editing may continue while it runs.
    pub fn begin_export(&self) -> Result<ExportJob, SessionError> {
        let guard = self.export_slot.try_acquire()?;
        Ok(ExportJob {
            doc: self.doc.clone(),
            report: self.render(),
            exporter: self.exporter.clone(),
            _guard: guard,
        })
    }

    pub fn export_static(&self, format: ExportFormat) -> Result<Artifact, SessionError> {
        self.begin_export()?.run_static(format)
    }

    pub async fn export<R>(&self, format: ExportFormat, rasterizer: &R) -> Result<Artifact, SessionError>
    where
        R: Rasterizer + ?Sized,
    {
        self.begin_export()?.run(format, rasterizer).await
    }

    /// Apply an assistant result; failures are logged and change nothing
    pub fn apply_assist(&mut self, result: Result<DocumentPatch, AssistError>) -> bool {
        match result {
            Ok(patch) => {
                self.apply(&patch);
                true
            }
            Err(e) => {
                warn!(error = %e, "Assistant produced no usable content");
                false
            }
        }
    }

    pub async fn assist_intro<C: AssistClient>(&mut self, assistant: &Assistant<C>) -> bool {
        let result = assistant.generate_intro(&self.doc).await;
        self.apply_assist(result)
    }

    pub async fn assist_analysis<C: AssistClient>(&mut self, assistant: &Assistant<C>) -> bool {
        let result = assistant.generate_analysis(&self.doc).await;
        self.apply_assist(result)
    }
}

impl Default for ReportSession {
    fn default() -> Self {
        Self::new(ReportDocument::initial())
    }
}

/// One export over a frozen document; holds the session's export slot
pub struct ExportJob {
    doc: ReportDocument,
    report: RenderedReport,
    exporter: Exporter,
    _guard: ExportGuard,
}

impl ExportJob {
    pub fn document(&self) -> &ReportDocument {
        &self.doc
    }

    pub fn report(&self) -> &RenderedReport {
        &self.report
    }

    pub fn run_static(self, format: ExportFormat) -> Result<Artifact, SessionError> {
        Ok(self.exporter.export_static(format, &self.doc, &self.report)?)
    }

    pub async fn run<R>(self, format: ExportFormat, rasterizer: &R) -> Result<Artifact, SessionError>
    where
        R: Rasterizer + ?Sized,
    {
        let artifact = self
            .exporter
            .export(format, &self.doc, &self.report, rasterizer)
            .await
            .map_err(|e| {
                warn!(format = %format, error = %e, "Export failed");
                SessionError::Export(e)
            })?;
        Ok(artifact)
    }
}
