//! Session scenarios: patches, observers, imports, persistence and exports

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use report_export::raster::encode_png;
use report_export::{ExportFormat, PageRegion, RasterError, RasterImage, Rasterizer};
use report_model::{ActivityField, DocumentPatch, ReportDocument, TextList};
use report_session::{
    FileStore, MemoryStore, Notice, ReportConfig, ReportSession, SessionError, SnapshotObserver,
    DEFAULT_STORAGE_KEY,
};

fn template() -> ReportDocument {
    ReportDocument::initial_at("31/03/2026")
}

/// Records every document it is notified with
#[derive(Clone, Default)]
struct Recorder {
    seen: Rc<RefCell<Vec<ReportDocument>>>,
}

impl SnapshotObserver for Recorder {
    fn notify(&self, doc: &ReportDocument) {
        self.seen.borrow_mut().push(doc.clone());
    }
}

fn session_with_recorder() -> (ReportSession, Recorder) {
    let recorder = Recorder::default();
    let mut session = ReportSession::new(template());
    session.add_observer(recorder.clone());
    (session, recorder)
}

#[test]
fn test_sequential_patches_keep_both_fields() {
    let (mut session, recorder) = session_with_recorder();
    session.apply(&DocumentPatch::default().department("Jeunesse"));
    session.apply(&DocumentPatch::default().period("T1 2026"));

    let mut expected = template();
    expected.department = "Jeunesse".to_string();
    expected.period = "T1 2026".to_string();
    assert_eq!(session.document(), &expected);
    assert_eq!(recorder.seen.borrow().len(), 2);
}

#[test]
fn test_empty_patch_changes_nothing_but_notifies() {
    let (mut session, recorder) = session_with_recorder();
    session.apply(&DocumentPatch::default());
    assert_eq!(session.document(), &template());
    assert_eq!(recorder.seen.borrow().len(), 1);
}

#[test]
fn test_period_filled_from_quarter_bounds() {
    let (mut session, _) = session_with_recorder();
    session.apply(&DocumentPatch::default().quarter_start("Janvier"));
    assert_eq!(session.document().period, "");
    session.apply(&DocumentPatch::default().quarter_end("Mars"));
    assert_eq!(session.document().period, "Janvier à Mars 2026");

    // An explicit label is never overwritten
    session.apply(&DocumentPatch::default().period("Premier trimestre"));
    session.apply(&DocumentPatch::default().year("2027"));
    assert_eq!(session.document().period, "Premier trimestre");
}

#[test]
fn test_import_fills_blank_period() {
    let (mut session, _) = session_with_recorder();
    session
        .import(r#"{"trimestreDebut":"Janvier","trimestreFin":"Mars","periodeCouverte":""}"#)
        .unwrap();
    assert_eq!(session.document().period, "Janvier à Mars 2026");

    session
        .import(r#"{"trimestreDebut":"Avril","trimestreFin":"Juin","periodeCouverte":"T2"}"#)
        .unwrap();
    assert_eq!(session.document().period, "T2");
}

#[test]
fn test_set_field_by_snapshot_key() {
    let (mut session, _) = session_with_recorder();
    session.set_field("nomDepartement", "Chorale").unwrap();
    assert_eq!(session.document().department, "Chorale");
    assert!(matches!(
        session.set_field("inconnu", "x"),
        Err(SessionError::Import(_))
    ));
}

#[test]
fn test_activity_editing() {
    let (mut session, recorder) = session_with_recorder();
    let id = session.add_activity();
    assert_eq!(session.document().activities.len(), 2);

    assert!(session.update_activity(&id, ActivityField::Results, "80%"));
    assert_eq!(session.document().activities[1].results, "80%");

    let first = session.document().activities[0].id.clone();
    assert!(session.remove_activity(&first));
    assert_eq!(session.document().activities.len(), 1);
    assert_eq!(session.document().activities[0].id, id);

    // Unknown ids change nothing and notify nobody
    let before = recorder.seen.borrow().len();
    assert!(!session.remove_activity(&first));
    assert!(!session.update_activity(&first, ActivityField::Results, "x"));
    assert_eq!(recorder.seen.borrow().len(), before);
}

#[test]
fn test_list_entries_are_positional() {
    let (mut session, _) = session_with_recorder();
    session.push_entry(TextList::Recommendations);
    session.push_entry(TextList::Recommendations);
    assert!(session.edit_entry(TextList::Recommendations, 0, "A"));
    assert!(session.edit_entry(TextList::Recommendations, 2, "C"));
    assert!(session.remove_entry(TextList::Recommendations, 1));
    assert_eq!(session.document().recommendations, vec!["A", "C"]);
    assert!(!session.edit_entry(TextList::Recommendations, 5, "Z"));
}

#[test]
fn test_failed_import_leaves_document() {
    let (mut session, recorder) = session_with_recorder();
    session.apply(&DocumentPatch::default().department("Jeunesse"));
    let before = session.document().clone();

    for bad in ["not json", "[1, 2]", "\"texte\"", "{\"activites\": 3}"] {
        let result = session.import(bad);
        assert!(result.is_err(), "{bad}");
        assert!(Notice::for_import(&result).is_error());
    }
    assert_eq!(session.document(), &before);
    assert_eq!(recorder.seen.borrow().len(), 1);
}

#[test]
fn test_import_backfills_missing_fields() {
    let (mut session, _) = session_with_recorder();
    session
        .import(r#"{"nomDepartement":"Évangélisation","coverTheme":"royal","progres":[]}"#)
        .unwrap();
    let doc = session.document();
    assert_eq!(doc.department, "Évangélisation");
    assert_eq!(doc.cover_theme.as_str(), "royal");
    assert!(doc.progress.is_empty());
    assert_eq!(doc.title, "RAPPORT TRIMESTRIEL");
    assert_eq!(doc.activities.len(), 1);
}

#[test]
fn test_reset_restores_template_shape() {
    let (mut session, _) = session_with_recorder();
    session.apply(&DocumentPatch::default().department("Jeunesse"));
    session.reset();
    let doc = session.document();
    assert_eq!(doc.department, "");
    assert_eq!(doc.activities.len(), 1);
    assert_eq!(doc.progress, vec![""]);
}

#[test]
fn test_restore_and_persist_through_memory_store() {
    let store = Rc::new(MemoryStore::new());
    let config = ReportConfig::default();

    let mut session = ReportSession::restore(Rc::clone(&store), &config);
    assert_eq!(session.document().department, "");
    session.apply(&DocumentPatch::default().department("Jeunesse"));
    assert_eq!(store.writes(), 1);

    let restored = ReportSession::restore(Rc::clone(&store), &config);
    assert_eq!(restored.document(), session.document());
}

#[test]
fn test_restore_ignores_corrupt_snapshot() {
    let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{corrupt");
    let session = ReportSession::restore(store, &ReportConfig::default());
    assert_eq!(session.document().title, "RAPPORT TRIMESTRIEL");
    assert_eq!(session.document().activities.len(), 1);
}

#[test]
fn test_file_store_survives_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let config = ReportConfig::from_str(&format!(
        "[storage]\ndir = \"{}\"\nkey = \"tests\"\n",
        dir.path().display()
    ))
    .unwrap();

    let mut session = ReportSession::restore(FileStore::new(dir.path()), &config);
    session.set_field("nomDirecteur", "P. Sambieni").unwrap();
    assert!(dir.path().join("tests.json").exists());

    let again = ReportSession::restore(FileStore::new(dir.path()), &config);
    assert_eq!(again.document().director_name, "P. Sambieni");
}

#[test]
fn test_static_exports() {
    let (mut session, _) = session_with_recorder();
    session.apply(&DocumentPatch::default().department("Jeunesse"));
    let csv = session.export_static(ExportFormat::Csv).unwrap();
    assert_eq!(csv.filename, "Suivi_PTA_Jeunesse.csv");
    let word = session.export_static(ExportFormat::Word).unwrap();
    assert_eq!(word.filename, "Rapport_Jeunesse.doc");
    assert!(!session.is_exporting());
}

#[test]
fn test_print_html_covers_all_pages() {
    let session = ReportSession::new(template());
    let html = session.print_html();
    assert_eq!(html.matches("class=\"a4-container").count(), 3);
}

struct WhitePages;

#[async_trait(?Send)]
impl Rasterizer for WhitePages {
    async fn capture(&self, _region: &PageRegion) -> Result<RasterImage, RasterError> {
        Ok(RasterImage::from_png(encode_png(2, 3, false, &[255; 18])?))
    }
}

#[tokio::test]
async fn test_second_export_rejected_while_in_flight() {
    let session = ReportSession::new(template());
    let job = session.begin_export().unwrap();
    assert!(session.is_exporting());

    let second = session.export(ExportFormat::Pdf, &WhitePages).await;
    assert!(matches!(second, Err(SessionError::ExportInFlight)));

    let artifact = job.run(ExportFormat::Pdf, &WhitePages).await.unwrap();
    assert_eq!(artifact.filename, "Rapport_AD_2026.pdf");
    assert!(!session.is_exporting());

    let notice = Notice::for_export(&session.export(ExportFormat::Pdf, &WhitePages).await);
    assert!(!notice.is_error());
}

#[tokio::test]
async fn test_export_job_uses_frozen_document() {
    let mut session = ReportSession::new(template());
    session.apply(&DocumentPatch::default().department("Avant"));
    let job = session.begin_export().unwrap();
    session.apply(&DocumentPatch::default().department("Après"));
    let artifact = job.run(ExportFormat::Json, &WhitePages).await.unwrap();
    assert_eq!(artifact.filename, "Rapport_Avant_2026.json");
}
