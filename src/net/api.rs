//! JSON API client with the login-redirect contract.
//!
//! Every call resolves to an `ApiResult`; nothing is returned as `Err` and
//! nothing panics. A 401 from any call sends the browser to the login page.
//!
//! ERROR HANDLING
//! ==============
//! Transport, body and JSON failures are logged and collapse into the generic
//! `"An error occurred"` failure. Non-401 error statuses carry the message the
//! server put in its body. `current_user` and `logout` degrade to
//! `None`/`false` the same way, so auth checks never crash the page.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::transport::{HttpMethod, HttpRequest, Transport, TransportError, TransportResponse, is_ok_status};
use crate::config::ClientConfig;
use crate::host::Navigator;

pub const UNAUTHORIZED_STATUS: u16 = 401;
pub const UNAUTHORIZED_ERROR: &str = "Unauthorized";
pub const GENERIC_ERROR: &str = "An error occurred";

// =============================================================================
// RESULT
// =============================================================================

/// Normalized outcome of one API call.
///
/// Serializes as `{"success": true, "data": ...}` or
/// `{"success": false, "error": "..."}`.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResult<T = Value> {
    Success { data: T },
    Failure { error: String },
}

impl<T> ApiResult<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { error: error.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }

    /// # Errors
    ///
    /// Returns the failure message for `Failure`.
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Failure { error } => Err(error),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::Success { data } => ApiResult::Success { data: f(data) },
            Self::Failure { error } => ApiResult::Failure { error },
        }
    }
}

impl<T: Serialize> Serialize for ApiResult<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ApiResult", 2)?;
        match self {
            Self::Success { data } => {
                state.serialize_field("success", &true)?;
                state.serialize_field("data", data)?;
            }
            Self::Failure { error } => {
                state.serialize_field("success", &false)?;
                state.serialize_field("error", error)?;
            }
        }
        state.end()
    }
}

#[derive(Debug, thiserror::Error)]
enum CallError {
    #[error("empty request address")]
    EmptyAddress,
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// CLIENT
// =============================================================================

/// API client over an injected transport and navigator.
#[derive(Clone, Debug, Default)]
pub struct ApiClient<T, N> {
    transport: T,
    navigator: N,
    config: ClientConfig,
}

impl<T: Transport, N: Navigator> ApiClient<T, N> {
    pub fn new(transport: T, navigator: N) -> Self {
        Self { transport, navigator, config: ClientConfig::default() }
    }

    #[must_use]
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET` with no payload.
    pub async fn get(&self, address: &str) -> ApiResult {
        self.call(address, HttpMethod::Get, None::<&()>).await
    }

    /// `POST` a JSON payload.
    pub async fn post<P: Serialize + ?Sized>(&self, address: &str, payload: &P) -> ApiResult {
        self.call(address, HttpMethod::Post, Some(payload)).await
    }

    /// Call `address` and keep the success body as raw JSON.
    pub async fn call<P: Serialize + ?Sized>(&self, address: &str, method: HttpMethod, payload: Option<&P>) -> ApiResult {
        self.call_as(address, method, payload).await
    }

    /// Call `address` and decode the success body as `R`.
    ///
    /// A body that does not decode as `R` is a generic failure.
    pub async fn call_as<R, P>(&self, address: &str, method: HttpMethod, payload: Option<&P>) -> ApiResult<R>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        match self.try_call(address, method, payload).await {
            Ok(result) => result,
            Err(e) => {
                log::error!("API call error: {method} {address}: {e}");
                ApiResult::failure(GENERIC_ERROR)
            }
        }
    }

    async fn try_call<R, P>(&self, address: &str, method: HttpMethod, payload: Option<&P>) -> Result<ApiResult<R>, CallError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        if address.trim().is_empty() {
            return Err(CallError::EmptyAddress);
        }
        let request = build_request(&self.config, address, method, payload)?;
        let response = self.transport.send(request).await?;
        let status = response.status_code();

        if status == UNAUTHORIZED_STATUS {
            log::warn!("{method} {address} unauthorized; redirecting to {}", self.config.login_path);
            self.navigator.redirect(&self.config.login_path);
            return Ok(ApiResult::failure(UNAUTHORIZED_ERROR));
        }

        let body = parse_body(&response.read_body().await?)?;
        if is_success_status(status) {
            Ok(ApiResult::success(serde_json::from_value(body)?))
        } else {
            Ok(ApiResult::failure(server_error_message(status, &body)))
        }
    }

    /// Fetch the signed-in user from the "who am I" endpoint.
    ///
    /// Returns `None` on any non-2xx status or failure. Never redirects.
    pub async fn current_user<U: DeserializeOwned>(&self) -> Option<U> {
        match self.try_current_user().await {
            Ok(user) => user,
            Err(e) => {
                log::error!("Error fetching user: {e}");
                None
            }
        }
    }

    async fn try_current_user<U: DeserializeOwned>(&self) -> Result<Option<U>, CallError> {
        let request = HttpRequest::new(HttpMethod::Get, self.config.resolve(&self.config.me_path));
        let response = self.transport.send(request).await?;
        if !is_ok_status(response.status_code()) {
            log::debug!("no current user (status {})", response.status_code());
            return Ok(None);
        }
        let body = response.read_body().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Sign out and send the browser to the login page.
    ///
    /// Returns whether the server accepted the sign-out. On failure the page
    /// is left where it is.
    pub async fn logout(&self) -> bool {
        let request = HttpRequest::new(HttpMethod::Post, self.config.resolve(&self.config.logout_path));
        match self.transport.send(request).await {
            Ok(response) if is_ok_status(response.status_code()) => {
                self.navigator.redirect(&self.config.login_path);
                true
            }
            Ok(response) => {
                log::error!("Error logging out: status {}", response.status_code());
                false
            }
            Err(e) => {
                log::error!("Error logging out: {e}");
                false
            }
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn build_request<P: Serialize + ?Sized>(
    config: &ClientConfig,
    address: &str,
    method: HttpMethod,
    payload: Option<&P>,
) -> Result<HttpRequest, serde_json::Error> {
    let request = HttpRequest::new(method, config.resolve(address));
    match payload {
        Some(payload) => Ok(request.with_json_body(serde_json::to_string(payload)?)),
        None => Ok(request),
    }
}

/// Body for a script-supplied payload. Values JavaScript treats as falsy
/// (`null`, `false`, `0`, `""`) mean "no body".
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn truthy_payload(value: Value) -> Option<Value> {
    let falsy = match &value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    };
    (!falsy).then_some(value)
}

/// Parse a response body, treating an empty body as JSON `null`.
fn parse_body(raw: &str) -> Result<Value, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw)
}

/// 2xx and 3xx count as success.
fn is_success_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Pick the human-readable message out of an error body.
///
/// Looks at `error`, `detail` and `message` string fields in that order, then
/// the first `msg` of a validation-error `detail` array.
fn server_error_message(status: u16, body: &Value) -> String {
    for key in ["error", "detail", "message"] {
        if let Some(text) = body.get(key).and_then(Value::as_str) {
            return text.to_owned();
        }
    }
    body.get("detail")
        .and_then(Value::as_array)
        .and_then(|entries| entries.first())
        .and_then(|entry| entry.get("msg"))
        .and_then(Value::as_str)
        .map_or_else(|| format!("Request failed with status {status}"), str::to_owned)
}
