use std::rc::Rc;

use anyhow::Result;
use gloo_storage::{LocalStorage, Storage};
use tracing::info;

use super::errors::ApiError;

/// Storage key for the JSON-encoded ordered sequence of access tokens.
pub const ACCESS_TOKENS_KEY: &str = "accessTokens";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// String key/value storage the credential set lives in.
///
/// The browser implementation sits on `localStorage`; tests use an in-memory
/// map so the session logic runs off-browser.
pub trait StorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), ApiError>;
    fn remove(&self, key: &str);
}

/// `localStorage`-backed credential storage
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
        match LocalStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(ApiError::ConfigurationError {
                message: format!("Failed to read '{}' from localStorage: {}", key, e),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
        LocalStorage::set(key, value).map_err(|e| ApiError::ConfigurationError {
            message: format!("Failed to write '{}' to localStorage: {}", key, e),
        })
    }

    fn remove(&self, key: &str) {
        LocalStorage::delete(key);
    }
}

/// Credential store holding the access-token sequence and the refresh token.
///
/// Every mutation is a single read-modify-write method so call sites never
/// interleave their own get/parse/set sequences over the shared store.
#[derive(Clone)]
pub struct SessionStore {
    backend: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by browser `localStorage`
    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    /// The stored access tokens, oldest first. Missing key reads as empty.
    pub fn access_tokens(&self) -> Result<Vec<String>, ApiError> {
        match self.backend.get(ACCESS_TOKENS_KEY)? {
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| ApiError::ConfigurationError {
                    message: format!("Corrupt access token list: {}", e),
                })
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn refresh_token(&self) -> Result<Option<String>, ApiError> {
        self.backend.get(REFRESH_TOKEN_KEY)
    }

    /// Persist a freshly issued token pair after login.
    pub fn store_login(&self, access_token: &str, refresh_token: &str) -> Result<(), ApiError> {
        self.append_access_token(access_token)?;
        self.set_refresh_token(refresh_token)?;
        info!("Login credentials stored");
        Ok(())
    }

    pub fn set_refresh_token(&self, token: &str) -> Result<(), ApiError> {
        self.backend.set(REFRESH_TOKEN_KEY, token)
    }

    /// Append a newly issued access token to the stored sequence.
    pub fn append_access_token(&self, token: &str) -> Result<(), ApiError> {
        let mut tokens = self.access_tokens()?;
        tokens.push(token.to_string());
        self.persist_tokens(&tokens)
    }

    /// Remove the first access token whose `role` claim matches `role`.
    ///
    /// Returns whether a token was evicted. A token the server rejected for
    /// a role is treated as invalid for that role from here on.
    pub fn remove_token_for_role(&self, role: &str) -> Result<bool, ApiError> {
        let mut tokens = self.access_tokens()?;
        let position = tokens
            .iter()
            .position(|token| JwtUtils::role(token).as_deref() == Some(role));

        match position {
            Some(pos) => {
                tokens.remove(pos);
                self.persist_tokens(&tokens)?;
                info!("Evicted access token for role: {}", role);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Drop all stored credentials.
    pub fn clear(&self) {
        self.backend.remove(ACCESS_TOKENS_KEY);
        self.backend.remove(REFRESH_TOKEN_KEY);
        info!("Session credentials cleared");
    }

    fn persist_tokens(&self, tokens: &[String]) -> Result<(), ApiError> {
        let raw = serde_json::to_string(tokens)?;
        self.backend.set(ACCESS_TOKENS_KEY, &raw)
    }
}

/// JWT token utilities
pub struct JwtUtils;

impl JwtUtils {
    /// Decode the payload segment of a JWT without verifying the signature.
    fn decode_payload(jwt: &str) -> Option<serde_json::Value> {
        let parts: Vec<&str> = jwt.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let payload_b64 = parts[1];

        // Add padding if needed
        let padded = match payload_b64.len() % 4 {
            2 => format!("{}==", payload_b64),
            3 => format!("{}=", payload_b64),
            _ => payload_b64.to_string(),
        };

        use base64::Engine;
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(&padded)
            .ok()?;
        let payload_str = String::from_utf8(decoded).ok()?;

        serde_json::from_str(&payload_str).ok()
    }

    /// The `role` claim embedded in the token, if any.
    ///
    /// Malformed tokens yield `None` rather than an error; a token we cannot
    /// inspect simply never matches a role-scoped eviction.
    pub fn role(jwt: &str) -> Option<String> {
        let payload = Self::decode_payload(jwt)?;
        let role = payload.get("role")?.as_str()?;
        Some(role.to_string())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    /// In-memory backend standing in for `localStorage` in unit tests.
    #[derive(Default)]
    pub struct MemoryBackend {
        values: RefCell<HashMap<String, String>>,
    }

    impl StorageBackend for MemoryBackend {
        fn get(&self, key: &str) -> Result<Option<String>, ApiError> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), ApiError> {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn remove(&self, key: &str) {
            self.values.borrow_mut().remove(key);
        }
    }

    use base64::Engine;

    /// Build an unsigned JWT whose payload carries the given role claim.
    pub fn token_with_role(role: &str) -> String {
        let header = base64::engine::general_purpose::STANDARD.encode(r#"{"alg":"HS256"}"#);
        let payload = base64::engine::general_purpose::STANDARD
            .encode(format!(r#"{{"role":"{}"}}"#, role));
        format!("{}.{}.sig", header, payload)
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_browser_storage_round_trip() {
        let store = SessionStore::browser();
        store.clear();

        store.store_login("tok", "r1").unwrap();
        assert_eq!(store.access_tokens().unwrap(), vec!["tok"]);
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("r1"));

        store.clear();
        assert!(store.access_tokens().unwrap().is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{token_with_role, MemoryBackend};
    use super::*;

    fn memory_store() -> SessionStore {
        SessionStore::new(Rc::new(MemoryBackend::default()))
    }

    #[test]
    fn test_empty_store_reads_as_no_credentials() {
        let store = memory_store();
        assert!(store.access_tokens().unwrap().is_empty());
        assert!(store.refresh_token().unwrap().is_none());
    }

    #[test]
    fn test_store_login_and_append() {
        let store = memory_store();
        store.store_login("tokA", "r1").unwrap();
        store.append_access_token("tokB").unwrap();

        assert_eq!(store.access_tokens().unwrap(), vec!["tokA", "tokB"]);
        assert_eq!(store.refresh_token().unwrap().as_deref(), Some("r1"));
    }

    #[test]
    fn test_remove_token_for_role_evicts_exactly_one() {
        let store = memory_store();
        let tok_a = token_with_role("A");
        let tok_b = token_with_role("B");
        store.append_access_token(&tok_a).unwrap();
        store.append_access_token(&tok_b).unwrap();

        assert!(store.remove_token_for_role("A").unwrap());
        assert_eq!(store.access_tokens().unwrap(), vec![tok_b.clone()]);

        // No token for role C: nothing changes
        assert!(!store.remove_token_for_role("C").unwrap());
        assert_eq!(store.access_tokens().unwrap(), vec![tok_b]);
    }

    #[test]
    fn test_clear_drops_everything() {
        let store = memory_store();
        store.store_login("tokA", "r1").unwrap();
        store.clear();

        assert!(store.access_tokens().unwrap().is_empty());
        assert!(store.refresh_token().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_token_list_is_a_configuration_error() {
        let backend = Rc::new(MemoryBackend::default());
        backend.set(ACCESS_TOKENS_KEY, "not json").unwrap();
        let store = SessionStore::new(backend);

        assert!(matches!(
            store.access_tokens(),
            Err(ApiError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_jwt_role_claim() {
        let token = token_with_role("worker");
        assert_eq!(JwtUtils::role(&token).as_deref(), Some("worker"));

        assert!(JwtUtils::role("not-a-jwt").is_none());
        assert!(JwtUtils::role("a.b.c").is_none());
    }
}
