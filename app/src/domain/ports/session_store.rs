//! Driven port for the durable session record.

use crate::domain::Session;

use super::define_port_error;

define_port_error! {
    /// Errors raised by session store adapters.
    pub enum SessionStoreError {
        /// The backing storage could not be read or written.
        Io { message: String } => "session store I/O failed: {message}",
        /// A record exists but does not decode to a session.
        Malformed { message: String } => "stored session record is malformed: {message}",
    }
}

/// Durable key-value slot holding at most one session record.
///
/// Access is synchronous: the record is read once at start-up and written
/// only when authentication succeeds or the user logs out.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    /// Load the stored session, `None` when no record exists.
    fn load(&self) -> Result<Option<Session>, SessionStoreError>;

    /// Replace the stored record with `session`.
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Remove the stored record. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), SessionStoreError>;
}
