//! Session storage and Basic-auth derivation.
//!
//! # Design
//! - A session exists if and only if the user is authenticated; there is no
//!   expiry timer and no refresh, only explicit logout or a server-side
//!   rejection relayed by the gateway.
//! - The auth header is derived on every call, never cached, so a logout
//!   mid-flight cannot leak a stale header.
//! - Storage is a get/set/remove seam; corrupted stored data reads as
//!   "absent", never as an error.

use std::sync::{Arc, Mutex, PoisonError};

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

/// Username/password pair held for the active session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// Account name presented to the management API.
    pub username: String,
    /// Plain-text password; kept only for the session's lifetime.
    pub password: String,
}

/// Derive the `Authorization` header value for a credential pair.
///
/// Encoding contract: `username + ":" + password` as UTF-8, then standard
/// base64 with padding, prefixed with `Basic `.
#[must_use]
pub fn derive_auth_header(credentials: &Credentials) -> String {
    let pair = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", general_purpose::STANDARD.encode(pair))
}

/// Backing store for the encoded session value.
///
/// The store is a plain get/set/remove primitive with no further contract;
/// the in-process default is [`MemoryStorage`], and a browser- or
/// keyring-scoped backend plugs in at the same seam.
pub trait CredentialStorage: Send + Sync {
    /// Read the stored value, if any.
    fn get(&self) -> Option<String>;
    /// Replace the stored value.
    fn set(&self, value: &str);
    /// Remove the stored value; a no-op when nothing is stored.
    fn remove(&self);
}

/// Process-local storage holding the session for the life of the program.
#[derive(Debug, Default)]
pub struct MemoryStorage(Mutex<Option<String>>);

impl CredentialStorage for MemoryStorage {
    fn get(&self) -> Option<String> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, value: &str) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(value.to_string());
    }

    fn remove(&self) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Side-effect seam invoked whenever the session ends or a guard denies
/// access: the original console navigates to its login view here.
pub trait Redirect: Send + Sync {
    /// Send the user to the login surface.
    fn to_login(&self);
}

/// Redirect that does nothing, for headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRedirect;

impl Redirect for NoRedirect {
    fn to_login(&self) {}
}

/// Holds the credential pair for the active session and answers
/// authentication queries.
///
/// Cloning is cheap; clones share the same backing storage and redirect.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn CredentialStorage>,
    redirect: Arc<dyn Redirect>,
}

impl SessionStore {
    /// Build a store over explicit storage and redirect seams.
    #[must_use]
    pub const fn new(storage: Arc<dyn CredentialStorage>, redirect: Arc<dyn Redirect>) -> Self {
        Self { storage, redirect }
    }

    /// Convenience constructor: in-memory storage, no redirect.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::default()), Arc::new(NoRedirect))
    }

    /// Store a credential pair, overwriting any prior session. No
    /// validation happens here; the gateway's login probe is the validator.
    pub fn set_credentials(&self, username: &str, password: &str) {
        let json = serde_json::json!({
            "username": username,
            "password": password,
        })
        .to_string();
        self.storage.set(&general_purpose::STANDARD.encode(json));
    }

    /// The stored pair, or `None` when absent or undecodable.
    #[must_use]
    pub fn credentials(&self) -> Option<Credentials> {
        let encoded = self.storage.get()?;
        let bytes = general_purpose::STANDARD.decode(encoded).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// `Basic` auth header for the stored pair, recomputed on every call.
    #[must_use]
    pub fn auth_header(&self) -> Option<String> {
        self.credentials()
            .as_ref()
            .map(derive_auth_header)
    }

    /// Whether a session is present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials().is_some()
    }

    /// Guard for view-entry points: `true` when authenticated, otherwise
    /// fires the login redirect and returns `false`.
    #[must_use = "the caller must stop when access is denied"]
    pub fn require_auth(&self) -> bool {
        if self.is_authenticated() {
            true
        } else {
            self.redirect.to_login();
            false
        }
    }

    /// Clear the session and redirect to the login surface. Idempotent:
    /// repeat calls keep the Anonymous state and fire the redirect again.
    pub fn logout(&self) {
        self.storage.remove();
        tracing::debug!("session cleared");
        self.redirect.to_login();
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Credentials, CredentialStorage, MemoryStorage, Redirect, SessionStore, derive_auth_header,
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[derive(Default)]
    struct CountingRedirect(AtomicUsize);

    impl Redirect for CountingRedirect {
        fn to_login(&self) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn store_with_counter() -> (SessionStore, Arc<CountingRedirect>) {
        let redirect = Arc::new(CountingRedirect::default());
        let store = SessionStore::new(Arc::new(MemoryStorage::default()), redirect.clone());
        (store, redirect)
    }

    #[test]
    fn derive_auth_header_follows_encoding_contract() {
        let header = derive_auth_header(&Credentials {
            username: "a".to_string(),
            password: "b".to_string(),
        });
        // base64("a:b") == "YTpi"
        assert_eq!(header, "Basic YTpi");
    }

    #[test]
    fn credentials_round_trip() {
        let store = SessionStore::in_memory();
        assert!(!store.is_authenticated());
        store.set_credentials("admin", "secret");
        let creds = store.credentials().expect("session present");
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.password, "secret");
        assert!(store.is_authenticated());
    }

    #[test]
    fn auth_header_changes_immediately_after_new_credentials() {
        let store = SessionStore::in_memory();
        store.set_credentials("a", "b");
        let first = store.auth_header().expect("header for first pair");
        assert_eq!(first, "Basic YTpi");
        store.set_credentials("c", "d");
        let second = store.auth_header().expect("header for second pair");
        assert_ne!(first, second);
        assert_eq!(
            second,
            derive_auth_header(&Credentials {
                username: "c".to_string(),
                password: "d".to_string(),
            })
        );
    }

    #[test]
    fn corrupted_storage_reads_as_anonymous() {
        let storage = Arc::new(MemoryStorage::default());
        storage.set("not valid base64 json %%%");
        let store = SessionStore::new(storage, Arc::new(super::NoRedirect));
        assert!(store.credentials().is_none());
        assert!(!store.is_authenticated());
        assert!(store.auth_header().is_none());
    }

    #[test]
    fn logout_is_idempotent_and_redirects_each_time() {
        let (store, redirect) = store_with_counter();
        store.set_credentials("admin", "secret");

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(redirect.0.load(Ordering::SeqCst), 1);

        store.logout();
        assert!(!store.is_authenticated());
        assert_eq!(redirect.0.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn require_auth_redirects_only_when_anonymous() {
        let (store, redirect) = store_with_counter();
        assert!(!store.require_auth());
        assert_eq!(redirect.0.load(Ordering::SeqCst), 1);

        store.set_credentials("admin", "secret");
        assert!(store.require_auth());
        assert_eq!(redirect.0.load(Ordering::SeqCst), 1);
    }
}
