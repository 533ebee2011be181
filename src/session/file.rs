use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SessionStore;
use crate::error::Result;
use crate::users::User;

/// Session store backed by one JSON file, `{dir}/{key}.json`
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session for `key` inside `dir`
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<User>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str::<User>(&contents) {
            Ok(user) => Ok(Some(user)),
            Err(err) => {
                warn!("Ignoring unreadable session file {}: {}", self.path.display(), err);
                Ok(None)
            }
        }
    }

    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_vec_pretty(user)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
