//! Draft persistence for the contact form.
//!
//! Drafts are stored as a versioned JSON envelope behind a key-value
//! [`DraftStorage`] backend, and expire after thirty days. A stale, corrupt,
//! or version-mismatched entry is removed on load rather than surfaced as an
//! error. Saving is debounced: [`DraftDebouncer`] is pure scheduling state
//! driven by a caller-supplied clock, so the cadence is deterministic in
//! tests.

use std::path::{Path, PathBuf};

use crate::foundation::error::{BorderlineError, BorderlineResult};

/// Fixed storage key for the contact form draft.
pub const DRAFT_STORAGE_KEY: &str = "borderline-contact-form-data";
/// Envelope schema version; entries written by other versions are discarded.
pub const DRAFT_SCHEMA_VERSION: &str = "1.0";
/// Drafts older than this are discarded on load.
pub const DRAFT_MAX_AGE_SECS: u64 = 30 * 24 * 60 * 60;
/// Default debounce window between an edit and its save.
pub const DRAFT_DEBOUNCE_MS: u64 = 1_000;

/// The contact form's user-entered fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactDraft {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactDraft {
    /// Whether every field is blank.
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.message.trim().is_empty()
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct StoredDraft {
    version: String,
    saved_at_unix: u64,
    #[serde(flatten)]
    draft: ContactDraft,
}

/// String key-value backend for draft persistence.
pub trait DraftStorage {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> BorderlineResult<Option<String>>;
    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> BorderlineResult<()>;
    /// Remove `key`; removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> BorderlineResult<()>;
}

/// Filesystem-backed storage: one JSON file per key under a root directory.
#[derive(Clone, Debug)]
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    /// Storage rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl DraftStorage for FsStorage {
    fn read(&self, key: &str) -> BorderlineResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BorderlineError::storage(format!(
                "read '{key}': {err}"
            ))),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> BorderlineResult<()> {
        std::fs::create_dir_all(&self.root)
            .map_err(|err| BorderlineError::storage(format!("create storage dir: {err}")))?;
        std::fs::write(self.path_for(key), value)
            .map_err(|err| BorderlineError::storage(format!("write '{key}': {err}")))
    }

    fn remove(&mut self, key: &str) -> BorderlineResult<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(BorderlineError::storage(format!(
                "remove '{key}': {err}"
            ))),
        }
    }
}

/// Versioned, expiring draft store over any [`DraftStorage`] backend.
#[derive(Clone, Debug)]
pub struct DraftStore<S> {
    storage: S,
}

impl<S: DraftStorage> DraftStore<S> {
    /// Wrap a storage backend.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist `draft`, stamped with the schema version and `now_unix`.
    pub fn save(&mut self, draft: &ContactDraft, now_unix: u64) -> BorderlineResult<()> {
        let stored = StoredDraft {
            version: DRAFT_SCHEMA_VERSION.to_string(),
            saved_at_unix: now_unix,
            draft: draft.clone(),
        };
        let json = serde_json::to_string(&stored)
            .map_err(|err| BorderlineError::serde(err.to_string()))?;
        self.storage.write(DRAFT_STORAGE_KEY, &json)
    }

    /// Load the stored draft, if it is present, parseable, version-matched,
    /// and at most thirty days old. Anything else is removed and `None` is
    /// returned.
    pub fn load(&mut self, now_unix: u64) -> BorderlineResult<Option<ContactDraft>> {
        let Some(raw) = self.storage.read(DRAFT_STORAGE_KEY)? else {
            return Ok(None);
        };
        let stored: StoredDraft = match serde_json::from_str(&raw) {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "discarding unreadable contact draft");
                self.storage.remove(DRAFT_STORAGE_KEY)?;
                return Ok(None);
            }
        };
        if stored.version != DRAFT_SCHEMA_VERSION {
            tracing::warn!(
                version = %stored.version,
                "discarding contact draft with mismatched schema version"
            );
            self.storage.remove(DRAFT_STORAGE_KEY)?;
            return Ok(None);
        }
        if now_unix.saturating_sub(stored.saved_at_unix) > DRAFT_MAX_AGE_SECS {
            tracing::debug!("discarding expired contact draft");
            self.storage.remove(DRAFT_STORAGE_KEY)?;
            return Ok(None);
        }
        Ok(Some(stored.draft))
    }

    /// Remove any stored draft.
    pub fn clear(&mut self) -> BorderlineResult<()> {
        self.storage.remove(DRAFT_STORAGE_KEY)
    }
}

/// Debounce scheduling for draft saves.
///
/// `record` restarts the window on every edit; `due` yields the latest draft
/// once the window has elapsed with no further edits. Time is plain
/// milliseconds from the caller's clock.
#[derive(Clone, Debug)]
pub struct DraftDebouncer {
    delay_ms: u64,
    pending: Option<(u64, ContactDraft)>,
}

impl Default for DraftDebouncer {
    fn default() -> Self {
        Self::new(DRAFT_DEBOUNCE_MS)
    }
}

impl DraftDebouncer {
    /// Debouncer with the given window.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Record an edit at `now_ms`, restarting the window.
    pub fn record(&mut self, draft: ContactDraft, now_ms: u64) {
        self.pending = Some((now_ms.saturating_add(self.delay_ms), draft));
    }

    /// Take the pending draft if its window has elapsed by `now_ms`.
    pub fn due(&mut self, now_ms: u64) -> Option<ContactDraft> {
        match &self.pending {
            Some((due_at, _)) if *due_at <= now_ms => {
                self.pending.take().map(|(_, draft)| draft)
            }
            _ => None,
        }
    }

    /// Drop any pending save (unmount, successful submit).
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether an unsaved edit is waiting on its window.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Seconds since the unix epoch from the system clock.
pub fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Helper for hosts that want the default on-disk layout.
pub fn default_store(root: impl AsRef<Path>) -> DraftStore<FsStorage> {
    DraftStore::new(FsStorage::new(root.as_ref()))
}

#[cfg(test)]
#[path = "../../tests/unit/form/draft.rs"]
mod tests;
