//! Stateful editor bound to the page
//!
//! The document lives in Rust; the page script forwards DOM input events
//! and downloads the artifacts it gets back.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function, Object, Promise, Reflect, Uint8Array};
use report_export::{Artifact, ExportFormat};
use report_model::{to_snapshot, ActivityField, ActivityId, CoverTheme, TextList};
use report_session::{AssistConfig, Assistant, Notice, ReportConfig, ReportSession};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::bridge::{JsAssistClient, JsCaptureRasterizer};
use crate::storage::LocalStorageStore;

fn log(message: &str) {
    web_sys::console::log_1(&message.into());
}

fn artifact_to_js(artifact: &Artifact) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    Reflect::set(&obj, &"filename".into(), &artifact.filename.as_str().into())?;
    Reflect::set(&obj, &"mimeType".into(), &artifact.mime_type.as_str().into())?;
    Reflect::set(
        &obj,
        &"bytes".into(),
        &Uint8Array::from(artifact.bytes.as_slice()),
    )?;
    Ok(obj.into())
}

#[wasm_bindgen]
pub struct ReportEditor {
    session: Rc<RefCell<ReportSession>>,
}

#[wasm_bindgen]
impl ReportEditor {
    /// Restore the stored report, persisting every change to `localStorage`
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let session = ReportSession::restore(LocalStorageStore, &ReportConfig::default());
        Self::from_session(session)
    }

    /// Shallow-merge a JSON patch keyed like the snapshot
    #[wasm_bindgen(js_name = applyPatch)]
    pub fn apply_patch(&self, json: &str) -> Result<(), JsValue> {
        self.apply_patch_internal(json)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&self, key: &str, value: &str) -> Result<(), JsValue> {
        self.session
            .borrow_mut()
            .set_field(key, value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Append a blank activity row; returns its id
    #[wasm_bindgen(js_name = addActivity)]
    pub fn add_activity(&self) -> String {
        self.session.borrow_mut().add_activity().as_str().to_string()
    }

    #[wasm_bindgen(js_name = updateActivity)]
    pub fn update_activity(&self, id: &str, field: &str, value: &str) -> Result<bool, JsValue> {
        self.update_activity_internal(id, field, value)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = removeActivity)]
    pub fn remove_activity(&self, id: &str) -> bool {
        self.session
            .borrow_mut()
            .remove_activity(&ActivityId::new(id))
    }

    #[wasm_bindgen(js_name = pushEntry)]
    pub fn push_entry(&self, list: &str) -> Result<(), JsValue> {
        let list: TextList = list.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.session.borrow_mut().push_entry(list);
        Ok(())
    }

    #[wasm_bindgen(js_name = editEntry)]
    pub fn edit_entry(&self, list: &str, index: usize, value: &str) -> Result<bool, JsValue> {
        self.edit_entry_internal(list, index, value)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = removeEntry)]
    pub fn remove_entry(&self, list: &str, index: usize) -> Result<bool, JsValue> {
        let list: TextList = list.parse().map_err(|e: String| JsValue::from_str(&e))?;
        Ok(self.session.borrow_mut().remove_entry(list, index))
    }

    /// Unknown theme names select the default cover
    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(&self, name: &str) {
        self.session.borrow_mut().set_theme(CoverTheme::resolve(name));
    }

    /// Replace the document with an imported snapshot
    ///
    /// Returns the notice `{kind, message}` to display; a rejected file
    /// leaves the document untouched.
    #[wasm_bindgen(js_name = importJson)]
    pub fn import_json(&self, json: &str) -> Result<JsValue, JsValue> {
        let notice = self.import_internal(json);
        log(&notice.message);
        serde_wasm_bindgen::to_value(&notice)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    pub fn reset(&self) {
        self.session.borrow_mut().reset();
    }

    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        self.document_json_internal()
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Markup of each rendered page, cover first
    pub fn pages(&self) -> Array {
        self.pages_internal()
            .into_iter()
            .map(JsValue::from)
            .collect()
    }

    #[wasm_bindgen(js_name = printHtml)]
    pub fn print_html(&self) -> String {
        self.session.borrow().print_html()
    }

    #[wasm_bindgen(js_name = isExporting)]
    pub fn is_exporting(&self) -> bool {
        self.session.borrow().is_exporting()
    }

    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<JsValue, JsValue> {
        self.export_static(ExportFormat::Json)
    }

    #[wasm_bindgen(js_name = exportCsv)]
    pub fn export_csv(&self) -> Result<JsValue, JsValue> {
        self.export_static(ExportFormat::Csv)
    }

    #[wasm_bindgen(js_name = exportWord)]
    pub fn export_word(&self) -> Result<JsValue, JsValue> {
        self.export_static(ExportFormat::Word)
    }

    /// Capture every page through `capture(pageIndex, markup)` and resolve
    /// to `{filename, mimeType, bytes}`
    ///
    /// The document is frozen when the call starts; edits made while the
    /// captures run do not reach the PDF. A second call before this one
    /// settles is rejected.
    #[wasm_bindgen(js_name = exportPdf)]
    pub fn export_pdf(&self, capture: Function) -> Promise {
        let job = self.session.borrow().begin_export();
        future_to_promise(async move {
            let job = job.map_err(|e| {
                let notice = Notice::for_export(&Err(e));
                JsValue::from_str(&notice.message)
            })?;
            let result = job
                .run(ExportFormat::Pdf, &JsCaptureRasterizer::new(capture))
                .await;
            let notice = Notice::for_export(&result);
            log(&notice.message);
            let artifact = result.map_err(|_| JsValue::from_str(&notice.message))?;
            artifact_to_js(&artifact)
        })
    }

    /// Ask `generate(prompt)` for an introduction; resolves to whether the
    /// document changed
    #[wasm_bindgen(js_name = generateIntro)]
    pub fn generate_intro(&self, generate: Function, api_key: Option<String>) -> Promise {
        let session = Rc::clone(&self.session);
        let doc = session.borrow().document().clone();
        future_to_promise(async move {
            let assistant = Assistant::new(JsAssistClient::new(generate), assist_config(api_key));
            let result = assistant.generate_intro(&doc).await;
            let applied = session.borrow_mut().apply_assist(result);
            Ok(JsValue::from_bool(applied))
        })
    }

    /// Ask `generate(prompt)` for the analysis and recommendation lists
    #[wasm_bindgen(js_name = generateAnalysis)]
    pub fn generate_analysis(&self, generate: Function, api_key: Option<String>) -> Promise {
        let session = Rc::clone(&self.session);
        let doc = session.borrow().document().clone();
        future_to_promise(async move {
            let assistant = Assistant::new(JsAssistClient::new(generate), assist_config(api_key));
            let result = assistant.generate_analysis(&doc).await;
            let applied = session.borrow_mut().apply_assist(result);
            Ok(JsValue::from_bool(applied))
        })
    }
}

fn assist_config(api_key: Option<String>) -> AssistConfig {
    AssistConfig {
        api_key,
        ..AssistConfig::default()
    }
}

impl Default for ReportEditor {
    fn default() -> Self {
        Self::new()
    }
}

// Internal methods (testable without JsValue)
impl ReportEditor {
    pub fn from_session(session: ReportSession) -> Self {
        Self {
            session: Rc::new(RefCell::new(session)),
        }
    }

    fn apply_patch_internal(&self, json: &str) -> Result<(), String> {
        self.session
            .borrow_mut()
            .apply_json(json)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    fn update_activity_internal(&self, id: &str, field: &str, value: &str) -> Result<bool, String> {
        let field: ActivityField = field.parse()?;
        Ok(self
            .session
            .borrow_mut()
            .update_activity(&ActivityId::new(id), field, value))
    }

    fn edit_entry_internal(&self, list: &str, index: usize, value: &str) -> Result<bool, String> {
        let list: TextList = list.parse()?;
        Ok(self.session.borrow_mut().edit_entry(list, index, value))
    }

    fn import_internal(&self, json: &str) -> Notice {
        let result = self.session.borrow_mut().import(json);
        Notice::for_import(&result)
    }

    fn document_json_internal(&self) -> Result<String, String> {
        to_snapshot(self.session.borrow().document()).map_err(|e| e.to_string())
    }

    fn pages_internal(&self) -> Vec<String> {
        self.session
            .borrow()
            .render()
            .pages
            .into_iter()
            .map(|p| p.markup)
            .collect()
    }

    fn export_static_internal(&self, format: ExportFormat) -> Result<Artifact, Notice> {
        let result = self.session.borrow().export_static(format);
        match result {
            Ok(artifact) => Ok(artifact),
            Err(e) => Err(Notice::for_export(&Err(e))),
        }
    }

    fn export_static(&self, format: ExportFormat) -> Result<JsValue, JsValue> {
        match self.export_static_internal(format) {
            Ok(artifact) => {
                log(&format!("Exported {}", artifact.filename));
                artifact_to_js(&artifact)
            }
            Err(notice) => {
                log(&notice.message);
                Err(JsValue::from_str(&notice.message))
            }
        }
    }
}
