//! Adapters for the durable session record.
//!
//! The record is a single JSON object stored under the well-known key
//! [`RECORD_KEY`]. [`FileSessionStore`] keeps it as `user.json` in a
//! directory; [`InMemorySessionStore`] keeps the raw text in memory.
//!
//! User ids in the record must be UUIDs. Records written with short numeric
//! ids such as `"1"` decode as malformed, so the session starts signed out.

mod atomic_io;
mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::InMemorySessionStore;

use crate::domain::Session;
use crate::domain::ports::SessionStoreError;

/// Well-known key of the session record.
pub const RECORD_KEY: &str = "user";

fn decode(raw: &str) -> Result<Session, SessionStoreError> {
    serde_json::from_str(raw).map_err(|err| SessionStoreError::malformed(err.to_string()))
}

fn encode(session: &Session) -> Result<String, SessionStoreError> {
    serde_json::to_string(session).map_err(|err| SessionStoreError::io(err.to_string()))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for record decoding.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn numeric_user_ids_are_malformed() {
        let raw = r#"{"id":"1","email":"user@example.com","name":"Demo User","role":"contributor","avatar":"/placeholder-avatar.png"}"#;

        let err = decode(raw).expect_err("non-uuid id");

        assert!(matches!(err, SessionStoreError::Malformed { .. }));
    }
}
