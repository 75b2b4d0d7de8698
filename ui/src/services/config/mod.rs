//! Client configuration
//!
//! Fixed origin and paths the browser client talks to. Everything here is
//! compile-time default; there is no server-side configuration source.

/// API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base origin all resource paths are appended to
    pub base_url: String,
    /// Overall per-request timeout in seconds
    pub timeout_secs: u64,
    /// Page users are sent to when their session cannot be recovered
    pub login_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
            login_path: "/login".to_string(),
        }
    }
}

/// Path of the token refresh endpoint, relative to the base origin.
pub const REFRESH_PATH: &str = "/refresh/access-token";

/// Header carrying the stored access tokens on decorated requests.
pub const ACCESS_TOKENS_HEADER: &str = "Access-Tokens";
