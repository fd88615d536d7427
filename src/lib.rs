//! # authkit-web
//!
//! Browser-side auth and form helpers for the event management front end:
//! current-user lookup, logout, a JSON API call wrapper with a login redirect
//! on 401, inline message display, and date formatting.
//!
//! Browser globals are reached only through the `host` and `net::transport`
//! traits, so every helper runs natively against in-memory fakes. The
//! `hydrate` feature supplies the real `web-sys`/`gloo-net` implementations
//! and the JavaScript exports in `bindings`.

#[cfg(feature = "hydrate")]
pub mod bindings;
pub mod config;
pub mod host;
pub mod logging;
pub mod net;
#[cfg(test)]
mod testing;
pub mod util;

pub use config::ClientConfig;
pub use host::{Dom, MessageElement, Navigator};
pub use net::api::{ApiClient, ApiResult};
pub use net::transport::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use net::types::User;
pub use util::date::{format_date, format_date_time};
pub use util::message::{MessageKind, clear_message, show_error_message, show_message, show_success_message};
