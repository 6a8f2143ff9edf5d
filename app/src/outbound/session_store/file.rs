//! Session record kept as a JSON file.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use tracing::debug;

use super::atomic_io::replace_file;
use super::{RECORD_KEY, decode, encode};
use crate::domain::Session;
use crate::domain::ports::{SessionStore, SessionStoreError};

/// Stores the session record as `user.json` inside a directory.
#[derive(Debug)]
pub struct FileSessionStore {
    dir: Dir,
    root: Utf8PathBuf,
    file_name: Utf8PathBuf,
}

impl FileSessionStore {
    /// Open `root`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStoreError::Io`] when the directory cannot be created
    /// or opened.
    pub fn open(root: &Utf8Path) -> Result<Self, SessionStoreError> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(root, ambient_authority()))
            .map(|dir| Self {
                dir,
                root: root.to_path_buf(),
                file_name: Utf8PathBuf::from(format!("{RECORD_KEY}.json")),
            })
            .map_err(|err| SessionStoreError::io(format!("{root}: {err}")))
    }

    /// Full path of the record file, for diagnostics.
    pub fn record_path(&self) -> Utf8PathBuf {
        self.root.join(&self.file_name)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, SessionStoreError> {
        match self.dir.read_to_string(&self.file_name) {
            Ok(raw) => decode(&raw).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SessionStoreError::io(format!(
                "{}: {err}",
                self.record_path()
            ))),
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let raw = encode(session)?;
        replace_file(&self.dir, &self.file_name, raw.as_bytes())?;
        debug!(path = %self.record_path(), "session record written");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        match self.dir.remove_file(&self.file_name) {
            Ok(()) => {
                debug!(path = %self.record_path(), "session record removed");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(SessionStoreError::io(format!(
                "{}: {err}",
                self.record_path()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    use super::*;
    use crate::domain::{Role, UserId};

    struct Scratch {
        _temp: TempDir,
        root: Utf8PathBuf,
    }

    #[fixture]
    fn scratch() -> Scratch {
        let temp = TempDir::new().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(temp.path().join("state"))
            .expect("utf-8 temp path");
        Scratch { _temp: temp, root }
    }

    fn session() -> Session {
        Session {
            id: UserId::new("00000000-0000-4000-8000-000000000001").expect("fixture id"),
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            role: Role::Creator,
            avatar: "/placeholder-avatar.png".to_owned(),
        }
    }

    #[rstest]
    fn empty_directory_has_no_session(scratch: Scratch) {
        let store = FileSessionStore::open(&scratch.root).expect("open store");

        assert_eq!(store.load().expect("load"), None);
        assert!(scratch.root.is_dir());
    }

    #[rstest]
    fn saved_session_survives_reopen(scratch: Scratch) {
        FileSessionStore::open(&scratch.root)
            .expect("open store")
            .save(&session())
            .expect("save");

        let reopened = FileSessionStore::open(&scratch.root).expect("reopen store");

        assert_eq!(reopened.load().expect("load"), Some(session()));
    }

    #[rstest]
    fn record_uses_the_documented_shape(scratch: Scratch) {
        let store = FileSessionStore::open(&scratch.root).expect("open store");
        store.save(&session()).expect("save");

        let raw = std::fs::read_to_string(store.record_path()).expect("read record");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("json");

        assert_eq!(value["email"], "john@example.com");
        assert_eq!(value["role"], "creator");
        assert_eq!(value["id"], "00000000-0000-4000-8000-000000000001");
        assert!(store.record_path().ends_with("user.json"));
    }

    #[rstest]
    fn garbage_record_is_malformed(scratch: Scratch) {
        let store = FileSessionStore::open(&scratch.root).expect("open store");
        std::fs::write(store.record_path(), "{not json").expect("write garbage");

        let err = store.load().expect_err("malformed");

        assert!(matches!(err, SessionStoreError::Malformed { .. }));
    }

    #[rstest]
    fn clear_is_idempotent(scratch: Scratch) {
        let store = FileSessionStore::open(&scratch.root).expect("open store");
        store.save(&session()).expect("save");

        store.clear().expect("first clear");
        store.clear().expect("second clear");

        assert_eq!(store.load().expect("load"), None);
    }
}
