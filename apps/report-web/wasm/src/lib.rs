//! WASM bindings for the quarterly report editor
//!
//! State lives in Rust via `ReportEditor`; the page script handles DOM
//! events, page capture and downloads.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { ReportEditor, themes } from './pkg/report_wasm.js';
//!
//! await init();
//!
//! const editor = new ReportEditor();          // restored from localStorage
//! editor.applyPatch('{"nomDepartement": "Jeunesse"}');
//! preview.innerHTML = editor.pages().join('');
//!
//! const csv = editor.exportCsv();             // { filename, mimeType, bytes }
//! download(new Blob([csv.bytes], { type: csv.mimeType }), csv.filename);
//!
//! const pdf = await editor.exportPdf(async (index, markup) => {
//!     const canvas = await html2canvas(renderOffscreen(markup), { scale: 2 });
//!     return canvasToPngBytes(canvas);
//! });
//! ```

pub mod bridge;
pub mod editor;
pub mod storage;

use wasm_bindgen::prelude::*;

pub use editor::ReportEditor;
pub use storage::LocalStorageStore;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Report editor WASM initialized".into());
}

#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Cover themes as `[{id, label, description}]`
#[wasm_bindgen]
pub fn themes() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&report_layout::list_themes())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
