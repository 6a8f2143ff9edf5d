//! In-memory session record.

use std::sync::{Mutex, PoisonError};

use super::{decode, encode};
use crate::domain::Session;
use crate::domain::ports::{SessionStore, SessionStoreError};

/// Holds the raw session record in memory.
///
/// The record is kept as text so callers can seed malformed contents.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    record: Mutex<Option<String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `raw` as the stored record.
    pub fn with_record(raw: impl Into<String>) -> Self {
        Self {
            record: Mutex::new(Some(raw.into())),
        }
    }

    /// The stored record text, if any.
    pub fn raw(&self) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, next: Option<String>) {
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = next;
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        self.raw().as_deref().map(decode).transpose()
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.replace(Some(encode(session)?));
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        self.replace(None);
        Ok(())
    }
}
