//! WASM entry points for browser use.
//!
//! The host registers these on whatever global it exposes to the page.

use wasm_bindgen::prelude::*;

use crate::error::ConvertError;
use crate::graph::PipelineGraph;
use crate::options::BuildOptions;

/// Convert a pipeline document with default options.
/// Stands in for the host's void `setCode` hook: instead of pushing into a
/// canvas it returns `{ nodes, edges }` for the host to render. A document
/// that fails to load gives empty lists.
#[wasm_bindgen(js_name = setCode)]
pub fn set_code(text: &str) -> JsValue {
    let graph = crate::convert(text, &BuildOptions::default());
    serde_wasm_bindgen::to_value(&graph).unwrap_or(JsValue::NULL)
}

/// Convert with host-supplied options JSON.
/// Returns a JSON object with either `nodes`/`edges` (success) or `errors`.
#[wasm_bindgen(js_name = setCodeWithOptions)]
pub fn set_code_with_options(text: &str, options_json: &str) -> JsValue {
    let result = set_code_with_options_inner(text, options_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn set_code_with_options_inner(text: &str, options_json: &str) -> ConvertResult {
    let options = match BuildOptions::from_json(options_json) {
        Ok(o) => o,
        Err(e) => {
            return ConvertResult::Errors {
                errors: vec![ErrorDto::from(e)],
            };
        }
    };

    ConvertResult::Success(crate::convert(text, &options))
}

/// Strict variant: load failures are reported instead of rendering nothing.
#[wasm_bindgen(js_name = checkCode)]
pub fn check_code(text: &str) -> JsValue {
    let result = match crate::try_convert(text, &BuildOptions::default()) {
        Ok(graph) => ConvertResult::Success(graph),
        Err(e) => ConvertResult::Errors {
            errors: vec![ErrorDto::from(e)],
        },
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize)]
struct ErrorDto {
    code: String,
    phase: String,
    message: String,
}

impl From<ConvertError> for ErrorDto {
    fn from(e: ConvertError) -> Self {
        ErrorDto {
            code: e.code,
            phase: e.phase.to_string(),
            message: e.message,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(tag = "status")]
enum ConvertResult {
    #[serde(rename = "success")]
    Success(PipelineGraph),
    #[serde(rename = "errors")]
    Errors { errors: Vec<ErrorDto> },
}
