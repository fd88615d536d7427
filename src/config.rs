//! Route and endpoint configuration for the API client.
//!
//! Defaults match the server's auth router, so `ClientConfig::default()` is
//! what a page served by that backend wants.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_ME_PATH: &str = "/auth/me";
pub const DEFAULT_LOGOUT_PATH: &str = "/auth/logout";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for relative API addresses. Empty means same-origin.
    pub base_url: String,
    /// Page the browser is sent to on 401 and after logout.
    pub login_path: String,
    /// "Who am I" endpoint.
    pub me_path: String,
    /// Sign-out endpoint.
    pub logout_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            me_path: DEFAULT_ME_PATH.to_owned(),
            logout_path: DEFAULT_LOGOUT_PATH.to_owned(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    #[must_use]
    pub fn with_me_path(mut self, path: impl Into<String>) -> Self {
        self.me_path = path.into();
        self
    }

    #[must_use]
    pub fn with_logout_path(mut self, path: impl Into<String>) -> Self {
        self.logout_path = path.into();
        self
    }

    /// Resolve an address against `base_url`.
    ///
    /// Absolute `http(s)://` addresses pass through untouched.
    pub fn resolve(&self, address: &str) -> String {
        if self.base_url.is_empty() || is_absolute(address) {
            return address.to_owned();
        }
        if address.starts_with('/') {
            format!("{}{address}", self.base_url)
        } else {
            format!("{}/{address}", self.base_url)
        }
    }
}

fn is_absolute(address: &str) -> bool {
    address.starts_with("http://") || address.starts_with("https://")
}
