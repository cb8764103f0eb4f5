//! Persisted Session Store
//!
//! A single opaque token in durable client-side storage. The token is a
//! capability handle issued by the backend; the client never looks inside it.

use std::fmt;

/// Local storage key for the session token
pub const SESSION_STORAGE_KEY: &str = "reddit_session_id";

/// Opaque backend-issued credential identifying one authenticated session.
/// Travels as a raw string (query parameter, localStorage); never serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token string. Empty strings are not tokens.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(SessionToken(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Durable slot for the session token.
///
/// No validation, no network calls. A storage medium that is unavailable
/// reads as absent, which fails open to the login screen.
pub trait SessionStore {
    fn get(&self) -> Option<SessionToken>;
    fn set(&self, token: &SessionToken);
    fn clear(&self);
}

/// Session store backed by browser localStorage under a fixed key.
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStore for LocalStorageStore {
    fn get(&self) -> Option<SessionToken> {
        let raw = Self::storage()?.get_item(SESSION_STORAGE_KEY).ok()??;
        SessionToken::new(raw)
    }

    fn set(&self, token: &SessionToken) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(SESSION_STORAGE_KEY, token.as_str());
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(SESSION_STORAGE_KEY);
        }
    }
}

/// In-memory session store used as a test double.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    slot: std::cell::RefCell<Option<SessionToken>>,
}

#[cfg(test)]
impl SessionStore for MemoryStore {
    fn get(&self) -> Option<SessionToken> {
        self.slot.borrow().clone()
    }

    fn set(&self, token: &SessionToken) {
        *self.slot.borrow_mut() = Some(token.clone());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_not_a_token() {
        assert_eq!(SessionToken::new(""), None);
        assert!(SessionToken::new("sess-1").is_some());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.get(), None);

        let token = SessionToken::new("abc123").unwrap();
        store.set(&token);
        assert_eq!(store.get(), Some(token));

        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_set_overwrites_previous_token() {
        let store = MemoryStore::default();
        store.set(&SessionToken::new("old").unwrap());
        store.set(&SessionToken::new("new").unwrap());
        assert_eq!(store.get().unwrap().as_str(), "new");
    }
}
