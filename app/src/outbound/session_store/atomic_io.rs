//! Crash-safe replacement of the session record file.
//!
//! Contents land in a hidden sibling file first and are renamed over the
//! target, so readers only ever see the old record or the new one.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::domain::ports::SessionStoreError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replace `file_name` inside `dir` with `contents`.
///
/// `file_name` must be a single normal path component.
pub(super) fn replace_file(
    dir: &Dir,
    file_name: &Utf8Path,
    contents: &[u8],
) -> Result<(), SessionStoreError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(target)), None) = (components.next(), components.next())
    else {
        return Err(SessionStoreError::io(format!(
            "{file_name}: session record path must be a bare file name"
        )));
    };

    let staging = format!(
        ".{target}.{}.{}.partial",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    );

    if let Err(err) = stage(dir, &staging, contents).and_then(|()| commit(dir, &staging, target)) {
        // Leftover staging files are harmless; removal is best effort.
        drop(dir.remove_file(&staging));
        return Err(SessionStoreError::io(format!("{target}: {err}")));
    }

    if dir.open(".").and_then(|handle| handle.sync_all()).is_err() {
        // Directory sync is advisory on some platforms.
    }
    Ok(())
}

fn stage(dir: &Dir, staging: &str, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir.open_with(staging, &options)?;
    file.write_all(contents)?;
    file.sync_all()
}

#[cfg(windows)]
fn commit(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    match dir.remove_file(target) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(staging, dir, target)
}

#[cfg(not(windows))]
fn commit(dir: &Dir, staging: &str, target: &str) -> io::Result<()> {
    dir.rename(staging, dir, target)
}
