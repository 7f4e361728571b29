use crate::domain::Snapshot;
use crate::errors::StoreError;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Every snapshot ever seen, by identity key. Sorted so the document on disk
/// is stable between saves.
pub type StateMap = BTreeMap<String, Snapshot>;

/// The JSON state document. Assumes exclusive access for the length of a
/// pass; callers serialize passes.
#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document. Missing or unreadable documents come back as an
    /// empty map, which makes the next pass behave like a first run.
    pub fn load(&self) -> StateMap {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no state file yet, starting empty");
                return StateMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file unreadable, starting empty");
                return StateMap::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(state) => state,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "state file corrupt, starting empty");
                StateMap::new()
            }
        }
    }

    /// Replaces the document with `state`.
    ///
    /// Writes to a temp file in the same directory and renames it over the
    /// target, so a crash leaves either the old or the new document. The temp
    /// file is removed on every error path when it drops.
    pub fn save(&self, state: &StateMap) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(&mut tmp);
            serde_json::to_writer_pretty(&mut writer, state)?;
            writer.flush()?;
        }
        self.copy_permissions(&tmp)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!(path = %self.path.display(), entries = state.len(), "state saved");
        Ok(())
    }

    /// Temp files are created 0600. Keep the mode of the document being
    /// replaced, or use a plain 0644 for a new one.
    #[cfg(unix)]
    fn copy_permissions(&self, tmp: &NamedTempFile) -> Result<(), StoreError> {
        use std::os::unix::fs::PermissionsExt;

        let mode = fs::metadata(&self.path)
            .map(|meta| meta.permissions().mode() & 0o7777)
            .unwrap_or(NEW_FILE_MODE);
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn copy_permissions(&self, _tmp: &NamedTempFile) -> Result<(), StoreError> {
        Ok(())
    }
}
