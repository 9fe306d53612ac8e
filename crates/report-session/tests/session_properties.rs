//! Property-based tests for the session and text bindings

use std::rc::Rc;

use proptest::prelude::*;
use report_model::{DocumentPatch, ReportDocument, TextList};
use report_session::{MemoryStore, ReportConfig, ReportSession, TextBinding};

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 éà'-]{0,20}"
}

fn list() -> impl Strategy<Value = TextList> {
    (0usize..TextList::ALL.len()).prop_map(|i| TextList::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Gateway
    // ============================================================

    #[test]
    fn prop_every_edit_is_persisted(department in text(), office in text()) {
        let store = Rc::new(MemoryStore::new());
        let config = ReportConfig::default();
        let mut session = ReportSession::restore(Rc::clone(&store), &config);
        session.apply(&DocumentPatch::default().department(department.clone()));
        session.apply(&DocumentPatch::default().signing_office(office.clone()));

        let restored = ReportSession::restore(Rc::clone(&store), &config);
        prop_assert_eq!(&restored.document().department, &department);
        prop_assert_eq!(&restored.document().signing_office, &office);
        prop_assert_eq!(store.writes(), 2);
    }

    #[test]
    fn prop_entry_removal_shifts_later_entries(
        list in list(),
        entries in proptest::collection::vec(text(), 1..6),
        index in 0usize..6,
    ) {
        let mut session = ReportSession::new(ReportDocument::initial_at("01/01/2026"));
        session.apply(&DocumentPatch::default().list(list, entries.clone()));

        let removed = session.remove_entry(list, index);
        prop_assert_eq!(removed, index < entries.len());

        let mut expected = entries.clone();
        if index < expected.len() {
            expected.remove(index);
        }
        prop_assert_eq!(session.document().list(list), expected.as_slice());
    }

    // ============================================================
    // Text bindings
    // ============================================================

    #[test]
    fn prop_echo_of_own_edit_never_resyncs(typed in proptest::collection::vec(text(), 1..6)) {
        let mut session = ReportSession::new(ReportDocument::initial_at("01/01/2026"));
        let mut binding = TextBinding::new(&session.document().introduction);

        for value in &typed {
            let sent = binding.edit(value);
            session.apply(&DocumentPatch::default().introduction(sent));
            prop_assert!(!binding.sync(&session.document().introduction));
            prop_assert_eq!(binding.value(), value.as_str());
        }
    }

    #[test]
    fn prop_import_resyncs_binding(typed in text(), imported in text()) {
        prop_assume!(typed != imported);
        let mut session = ReportSession::new(ReportDocument::initial_at("01/01/2026"));
        let mut binding = TextBinding::new("");
        let sent = binding.edit(&typed);
        session.apply(&DocumentPatch::default().introduction(sent));

        let json = serde_json::json!({ "introductionAnalyse": imported }).to_string();
        session.import(&json).unwrap();
        prop_assert!(binding.sync(&session.document().introduction));
        prop_assert_eq!(binding.value(), imported.as_str());
    }
}
