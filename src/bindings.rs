//! JavaScript exports for server-rendered pages.
//!
//! Names and argument order match what page scripts already call
//! (`apiCall(url, method = "GET", data = null)` and friends), so templates
//! can load the wasm module in place of a hand-written script.

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::host::BrowserHost;
use crate::net::api::{ApiClient, ApiResult, GENERIC_ERROR, truthy_payload};
use crate::net::transport::{GlooTransport, HttpMethod};
use crate::util::{date, message};

fn client() -> ApiClient<GlooTransport, BrowserHost> {
    ApiClient::new(GlooTransport, BrowserHost)
}

fn to_js<T: Serialize>(value: &T) -> JsValue {
    match value.serialize(&serde_wasm_bindgen::Serializer::json_compatible()) {
        Ok(js) => js,
        Err(e) => {
            log::error!("could not hand value to JavaScript: {e}");
            JsValue::NULL
        }
    }
}

fn payload_from_js(data: JsValue) -> Result<Option<Value>, serde_wasm_bindgen::Error> {
    if data.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value::<Value>(data).map(truthy_payload)
}

#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init();
}

/// Resolves to the user object, or `null` when nobody is signed in.
#[wasm_bindgen(js_name = getCurrentUser)]
pub async fn get_current_user() -> JsValue {
    client().current_user::<Value>().await.map_or(JsValue::NULL, |user| to_js(&user))
}

#[wasm_bindgen(js_name = logout)]
pub async fn logout() -> JsValue {
    JsValue::from_bool(client().logout().await)
}

/// Resolves to `{success: true, data}` or `{success: false, error}`.
#[wasm_bindgen(js_name = apiCall)]
pub async fn api_call(url: String, method: Option<String>, data: JsValue) -> JsValue {
    let method = match method.as_deref().map(str::parse::<HttpMethod>).transpose() {
        Ok(method) => method.unwrap_or_default(),
        Err(e) => {
            log::error!("API call error: {e}");
            return to_js(&ApiResult::<Value>::failure(GENERIC_ERROR));
        }
    };
    let payload = match payload_from_js(data) {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("API call error: payload is not JSON: {e}");
            return to_js(&ApiResult::<Value>::failure(GENERIC_ERROR));
        }
    };
    to_js(&client().call(&url, method, payload.as_ref()).await)
}

#[wasm_bindgen(js_name = showErrorMessage)]
pub fn show_error_message(element_id: &str, text: &str) {
    message::show_error_message(&BrowserHost, element_id, text);
}

#[wasm_bindgen(js_name = showSuccessMessage)]
pub fn show_success_message(element_id: &str, text: &str) {
    message::show_success_message(&BrowserHost, element_id, text);
}

#[wasm_bindgen(js_name = clearMessage)]
pub fn clear_message(element_id: &str) {
    message::clear_message(&BrowserHost, element_id);
}

#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(date_string: &str) -> String {
    date::format_date(date_string)
}

#[wasm_bindgen(js_name = formatDateTime)]
pub fn format_date_time(date_string: &str) -> String {
    date::format_date_time(date_string)
}
