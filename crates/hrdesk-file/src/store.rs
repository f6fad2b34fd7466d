//! JSON session file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, warn};

use hrdesk_core::error::StorageError;
use hrdesk_core::{AuthToken, Error, PersistedSession, Result, SessionStore, User};

fn map_io(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| {
        Error::Storage(StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Session store backed by a single JSON file.
///
/// The file holds `{"token": ..., "user": ...}`. Writes go to a sibling
/// temporary file that is renamed into place, so readers never see half a
/// session. A `.lock` file next to it serializes access across processes.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the session file at `path`.
    ///
    /// Nothing is created until the first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn open_lock(&self) -> Result<File> {
        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(map_io(parent))?;
        }

        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io(&lock_path))
    }

    fn write_private(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut options = OpenOptions::new();
        options.create(true).write(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(path).map_err(map_io(path))?;
        file.write_all(contents).map_err(map_io(path))?;
        file.sync_all().map_err(map_io(path))?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<PersistedSession> {
        let lock = self.open_lock()?;
        lock.lock_shared().map_err(map_io(&self.lock_path()))?;

        let result = match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => {
                Ok(PersistedSession::default())
            }
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|source| {
                Error::Storage(StorageError::Format {
                    path: self.path.clone(),
                    source,
                })
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("No session file");
                Ok(PersistedSession::default())
            }
            Err(err) => Err(map_io(&self.path)(err)),
        };

        if let Err(err) = lock.unlock() {
            warn!(error = %err, "Failed to release session lock");
        }
        result
    }

    #[instrument(skip(self, token, user), fields(path = %self.path.display(), user = %user.username))]
    fn save(&self, token: &AuthToken, user: &User) -> Result<()> {
        let session = PersistedSession {
            token: Some(token.clone()),
            user: Some(user.clone()),
        };
        let contents = serde_json::to_vec_pretty(&session).map_err(|source| {
            Error::Storage(StorageError::Format {
                path: self.path.clone(),
                source,
            })
        })?;

        let lock = self.open_lock()?;
        lock.lock_exclusive().map_err(map_io(&self.lock_path()))?;

        let temp = self.temp_path();
        let result = self
            .write_private(&temp, &contents)
            .and_then(|()| fs::rename(&temp, &self.path).map_err(map_io(&self.path)));

        match &result {
            Ok(()) => debug!("Session saved"),
            Err(_) => {
                let _ = fs::remove_file(&temp);
            }
        }
        if let Err(err) = lock.unlock() {
            warn!(error = %err, "Failed to release session lock");
        }
        result
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn clear(&self) -> Result<()> {
        let lock = self.open_lock()?;
        lock.lock_exclusive().map_err(map_io(&self.lock_path()))?;

        let result = match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Session cleared");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(map_io(&self.path)(err)),
        };

        if let Err(err) = lock.unlock() {
            warn!(error = %err, "Failed to release session lock");
        }
        result
    }
}
