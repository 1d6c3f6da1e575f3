//! File system storage for moderation sessions

use osmod_core::error::{OsmodError, Result};
use osmod_core::session::{ModerationSession, SessionInfo};
use osmod_core::types::SessionId;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Trait for session storage implementations
pub trait SessionStore: Send + Sync {
    /// Save a session
    fn save(&self, session: &ModerationSession) -> Result<()>;

    /// Load a session by ID
    fn load(&self, id: &SessionId) -> Result<ModerationSession>;

    /// List all sessions (as info)
    fn list(&self) -> Result<Vec<SessionInfo>>;

    /// Delete a session
    fn delete(&self, id: &SessionId) -> Result<()>;

    /// Check if a session exists
    fn exists(&self, id: &SessionId) -> bool;

    /// Get the latest session (by updated_at)
    fn latest(&self) -> Result<Option<ModerationSession>> {
        let sessions = self.list()?;
        let latest_info = match sessions.into_iter().max_by_key(|s| s.updated_at) {
            Some(info) => info,
            None => return Ok(None),
        };
        self.load(&latest_info.id).map(Some)
    }
}

/// File system based session storage
pub struct FileSystemSessionStore {
    /// Sessions directory
    sessions_dir: PathBuf,
}

impl FileSystemSessionStore {
    /// Create a new file system store under a base directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let sessions_dir = base_dir.into().join("sessions");
        let store = Self { sessions_dir };
        store.ensure_dirs()?;
        Ok(store)
    }

    /// Create storage with the platform default directory
    pub fn default_location() -> Result<Self> {
        let base_dir = directories::ProjectDirs::from("org", "osmod", "osmod")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".osmod")
            });
        Self::new(base_dir)
    }

    fn ensure_dirs(&self) -> Result<()> {
        if !self.sessions_dir.exists() {
            fs::create_dir_all(&self.sessions_dir)?;
            debug!("Created sessions directory: {:?}", self.sessions_dir);
        }
        Ok(())
    }

    fn session_path(&self, id: &SessionId) -> PathBuf {
        self.sessions_dir.join(format!("{}.json", id))
    }

    fn temp_path(&self, id: &SessionId) -> PathBuf {
        self.sessions_dir.join(format!(".{}.json.tmp", id))
    }

    /// Write a session atomically (write to temp, then rename), so a failed
    /// write never clobbers the previously persisted session.
    fn atomic_write(&self, session: &ModerationSession) -> Result<()> {
        let temp_path = self.temp_path(&session.id);
        let final_path = self.session_path(&session.id);

        let write = (|| -> Result<()> {
            let file = fs::File::create(&temp_path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, session)?;
            writer.flush()?;
            Ok(())
        })();
        if let Err(err) = write {
            let _ = fs::remove_file(&temp_path);
            return Err(err);
        }

        // Rename is atomic on most filesystems
        if let Err(err) = fs::rename(&temp_path, &final_path) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }

        debug!("Saved session {} to {:?}", session.id, final_path);
        Ok(())
    }
}

impl SessionStore for FileSystemSessionStore {
    fn save(&self, session: &ModerationSession) -> Result<()> {
        self.atomic_write(session)
    }

    fn load(&self, id: &SessionId) -> Result<ModerationSession> {
        let path = self.session_path(id);
        let file = fs::File::open(&path)
            .map_err(|_| OsmodError::SessionNotFound(id.to_string()))?;
        let reader = BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }

    fn list(&self) -> Result<Vec<SessionInfo>> {
        let mut infos = Vec::new();
        for entry in fs::read_dir(&self.sessions_dir)? {
            let entry = entry?;
            let path = entry.path();
            // Skip non-json files and in-flight temp files
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with('.'))
                .unwrap_or(false)
            {
                continue;
            }
            match fs::File::open(&path)
                .map_err(OsmodError::from)
                .and_then(|f| Ok(serde_json::from_reader::<_, ModerationSession>(BufReader::new(f))?))
            {
                Ok(session) => infos.push(session.info()),
                Err(err) => {
                    warn!("Skipping unreadable session file {:?}: {}", path, err);
                }
            }
        }
        Ok(infos)
    }

    fn delete(&self, id: &SessionId) -> Result<()> {
        let path = self.session_path(id);
        if !path.exists() {
            return Err(OsmodError::SessionNotFound(id.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn exists(&self, id: &SessionId) -> bool {
        self.session_path(id).exists()
    }
}
