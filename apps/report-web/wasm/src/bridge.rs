//! JavaScript callbacks behind the pipeline's host traits
//!
//! Page capture (html2canvas or similar) and text generation stay in the
//! page script. Rust hands them a page index and markup, or a prompt, and
//! awaits the Promise they return.

use async_trait::async_trait;
use js_sys::{Function, Promise, Uint8Array};
use report_export::{PageRegion, RasterError, RasterImage, Rasterizer};
use report_session::AssistClient;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::storage::js_error;

/// Await a callback result; plain values are accepted as resolved
async fn settle(value: JsValue) -> Result<JsValue, JsValue> {
    let promise = match value.dyn_into::<Promise>() {
        Ok(promise) => promise,
        Err(value) => Promise::resolve(&value),
    };
    JsFuture::from(promise).await
}

/// Calls `capture(pageIndex, markup)`, which resolves to PNG bytes
pub struct JsCaptureRasterizer {
    capture: Function,
}

impl JsCaptureRasterizer {
    pub fn new(capture: Function) -> Self {
        Self { capture }
    }
}

#[async_trait(?Send)]
impl Rasterizer for JsCaptureRasterizer {
    async fn capture(&self, region: &PageRegion) -> Result<RasterImage, RasterError> {
        let returned = self
            .capture
            .call2(
                &JsValue::NULL,
                &JsValue::from_f64(region.index as f64),
                &JsValue::from_str(&region.markup),
            )
            .map_err(|e| RasterError::new(format!("capture call failed: {}", js_error(&e))))?;

        let bytes = settle(returned)
            .await
            .map_err(|e| RasterError::new(format!("capture rejected: {}", js_error(&e))))?;

        let bytes = bytes
            .dyn_into::<Uint8Array>()
            .map_err(|_| RasterError::new("capture did not resolve to a Uint8Array"))?;
        Ok(RasterImage::from_png(bytes.to_vec()))
    }
}

/// Calls `generate(prompt)`, which resolves to the generated text
pub struct JsAssistClient {
    generate: Function,
}

impl JsAssistClient {
    pub fn new(generate: Function) -> Self {
        Self { generate }
    }
}

#[async_trait(?Send)]
impl AssistClient for JsAssistClient {
    async fn generate(&self, prompt: &str) -> Option<String> {
        let returned = self
            .generate
            .call1(&JsValue::NULL, &JsValue::from_str(prompt))
            .ok()?;
        settle(returned).await.ok()?.as_string()
    }
}
