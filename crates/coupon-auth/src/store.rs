//! Persistent session store.
//!
//! Two keyed entries, `token` and `user`, kept together. A profile is never
//! reported without a token: `set` writes the token first, `clear` removes the
//! profile first, and `profile()` answers `None` whenever no token is stored.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use coupon_core::UserProfile;

use crate::error::StoreError;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Blank tokens are treated as absent.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Durable storage of the current credential and cached profile.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<Credential>;

    fn profile(&self) -> Option<UserProfile>;

    /// Persist both values. Reads reflect them immediately.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if either entry cannot be written.
    fn set(&self, credential: &Credential, profile: &UserProfile) -> Result<(), StoreError>;

    /// Remove both values. Clearing an empty store is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if an existing entry cannot be removed.
    fn clear(&self) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// Session store backed by one file per key inside a private directory.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| StoreError::Io(format!("mkdir {}: {e}", self.dir.display())))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.dir, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", self.dir.display());
            }
        }
        Ok(())
    }

    /// Write through a temp file in the same directory, then rename.
    /// `tempfile` creates the file with mode 0600.
    fn write_entry(&self, key: &str, contents: &str) -> Result<(), StoreError> {
        self.ensure_dir()?;
        let path = self.entry_path(key);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| StoreError::Io(format!("tempfile in {}: {e}", self.dir.display())))?;
        tmp.write_all(contents.as_bytes())
            .map_err(|e| StoreError::Io(format!("write {}: {e}", path.display())))?;
        tmp.persist(&path)
            .map_err(|e| StoreError::Io(format!("persist {}: {}", path.display(), e.error)))?;
        Ok(())
    }

    fn read_entry(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key))
            .ok()
            .filter(|s| !s.trim().is_empty())
    }

    fn remove_entry(&self, key: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<Credential> {
        self.read_entry(TOKEN_KEY).and_then(Credential::new)
    }

    fn profile(&self) -> Option<UserProfile> {
        self.token()?;
        let raw = self.read_entry(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(error) => {
                tracing::warn!(%error, "cached user profile is unreadable; ignoring it");
                None
            }
        }
    }

    fn set(&self, credential: &Credential, profile: &UserProfile) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(profile)?;
        // Old profile goes first so a failed write never pairs it with the new token.
        self.remove_entry(USER_KEY)?;
        self.write_entry(TOKEN_KEY, credential.expose())?;
        self.write_entry(USER_KEY, &serialized)
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.remove_entry(USER_KEY)?;
        self.remove_entry(TOKEN_KEY)
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Session store living only as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<&'static str, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a session, as if left behind by an earlier run.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` if the profile cannot be serialized.
    pub fn with_session(
        credential: &Credential,
        profile: &UserProfile,
    ) -> Result<Self, StoreError> {
        let store = Self::new();
        store.set(credential, profile)?;
        Ok(store)
    }

    /// A store holding only a token, with no cached profile.
    #[must_use]
    pub fn with_token(credential: &Credential) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(TOKEN_KEY, credential.expose().to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<Credential> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(TOKEN_KEY)
            .cloned()
            .and_then(Credential::new)
    }

    fn profile(&self) -> Option<UserProfile> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(TOKEN_KEY)?;
        entries
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn set(&self, credential: &Credential, profile: &UserProfile) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(profile)?;
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(TOKEN_KEY, credential.expose().to_string());
        entries.insert(USER_KEY, serialized);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(USER_KEY);
        entries.remove(TOKEN_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coupon_core::Role;
    use pretty_assertions::assert_eq;

    fn profile() -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Asha".into(),
            role: Role::Client,
            client_id: Some("c1".into()),
            email: None,
        }
    }

    fn credential() -> Credential {
        Credential::new("tok_abc").expect("non-empty token")
    }

    #[test]
    fn credential_debug_is_redacted() {
        let rendered = format!("{:?}", credential());
        assert_eq!(rendered, "Credential(***)");
        assert_eq!(credential().bearer(), "Bearer tok_abc");
    }

    #[test]
    fn blank_credential_is_absent() {
        assert!(Credential::new("  \n").is_none());
    }

    #[test]
    fn file_store_set_get_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("session"));

        assert!(store.token().is_none());
        assert!(store.profile().is_none());

        store.set(&credential(), &profile()).expect("set");
        assert_eq!(store.token(), Some(credential()));
        assert_eq!(store.profile(), Some(profile()));

        store.clear().expect("clear");
        assert!(store.token().is_none());
        assert!(store.profile().is_none());
        assert!(!store.dir().join(TOKEN_KEY).exists());
        assert!(!store.dir().join(USER_KEY).exists());
    }

    #[test]
    fn file_store_clear_is_idempotent() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path());
        store.set(&credential(), &profile()).expect("set");

        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert!(store.token().is_none());

        let never_created = FileSessionStore::new(tmp.path().join("missing"));
        never_created.clear().expect("clear on missing dir");
    }

    #[cfg(unix)]
    #[test]
    fn file_store_entries_are_private() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path().join("session"));
        store.set(&credential(), &profile()).expect("set");

        let mode = fs::metadata(store.dir().join(TOKEN_KEY))
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(mode, 0o600, "token file should be 0600");

        let dir_mode = fs::metadata(store.dir())
            .expect("metadata")
            .permissions()
            .mode()
            & 0o777;
        assert_eq!(dir_mode, 0o700, "session dir should be 0700");
    }

    #[test]
    fn file_store_hides_profile_without_token() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path());
        store.set(&credential(), &profile()).expect("set");
        fs::remove_file(tmp.path().join(TOKEN_KEY)).expect("remove token");

        assert!(store.profile().is_none());
    }

    #[test]
    fn file_store_ignores_corrupt_profile() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path());
        store.set(&credential(), &profile()).expect("set");
        fs::write(tmp.path().join(USER_KEY), "{not json").expect("corrupt");

        assert_eq!(store.token(), Some(credential()));
        assert!(store.profile().is_none());
    }

    #[test]
    fn failed_switch_does_not_install_new_token() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path());
        store.set(&credential(), &profile()).expect("set");

        // An entry that cannot be replaced.
        fs::remove_file(tmp.path().join(USER_KEY)).expect("remove profile");
        fs::create_dir(tmp.path().join(USER_KEY)).expect("block profile");

        let other = Credential::new("tok_other").expect("non-empty token");
        let cashier = UserProfile {
            id: "u2".into(),
            role: Role::Cashier,
            ..profile()
        };
        assert!(store.set(&other, &cashier).is_err());
        assert_eq!(store.token(), Some(credential()), "new token written without its profile");
    }

    #[test]
    fn switching_accounts_replaces_both_entries() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = FileSessionStore::new(tmp.path());
        store.set(&credential(), &profile()).expect("set");

        let other = Credential::new("tok_other").expect("non-empty token");
        let cashier = UserProfile {
            id: "u2".into(),
            role: Role::Cashier,
            ..profile()
        };
        store.set(&other, &cashier).expect("switch");
        assert_eq!(store.token(), Some(other));
        assert_eq!(store.profile(), Some(cashier));
    }

    #[test]
    fn file_store_ignores_whitespace_token() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join(TOKEN_KEY), "   \n  ").expect("write");
        let store = FileSessionStore::new(tmp.path());
        assert!(store.token().is_none());
    }

    #[test]
    fn memory_store_clear_twice_leaves_it_empty() {
        let store = MemorySessionStore::with_session(&credential(), &profile()).expect("seed");
        store.clear().expect("first clear");
        assert!(store.token().is_none());
        store.clear().expect("second clear");
        assert!(store.token().is_none());
        assert!(store.profile().is_none());
    }

    #[test]
    fn memory_store_token_only_has_no_profile() {
        let store = MemorySessionStore::with_token(&credential());
        assert_eq!(store.token(), Some(credential()));
        assert!(store.profile().is_none());
    }
}
