//! Session context and the cookie store backing it
//!
//! The access token lives in the cookie store so the HTTP layer can attach it
//! to every request. The logged-in user lives only in [`Session`]; a restart
//! always goes through the login screen again.

use super::user::{LoginResponse, User};
use anyhow::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock, RwLockWriteGuard};
use tracing::{debug, warn};

pub const ACCESS_TOKEN: &str = "access_token";
pub const ADMIN_FLAG: &str = "admin";

/// File-backed key/value store with cookie semantics
///
/// Cheap to clone; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
    path: Option<PathBuf>,
}

impl CookieStore {
    /// Store that never touches the disk
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from `path`; a missing or unreadable file starts empty
    pub fn open(path: &Path) -> Self {
        let entries = fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str::<BTreeMap<String, String>>(&contents).ok())
            .unwrap_or_default();
        debug!(path = %path.display(), count = entries.len(), "cookie store loaded");
        Self {
            entries: Arc::new(RwLock::new(entries)),
            path: Some(path.to_path_buf()),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        self.write()?.insert(key.to_string(), value.to_string());
        self.persist()
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.write()?.remove(key);
        self.persist()
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .write()
            .map_err(|_| anyhow::anyhow!("cookie store lock poisoned"))
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let snapshot = match self.entries.read() {
            Ok(entries) => entries.clone(),
            Err(_) => return Err(anyhow::anyhow!("cookie store lock poisoned")),
        };
        fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }
}

/// The authenticated user, injected into whoever needs identity
#[derive(Debug, Clone)]
pub struct Session {
    user: Option<User>,
    cookies: CookieStore,
}

impl Session {
    pub fn new(cookies: CookieStore) -> Self {
        Self { user: None, cookies }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn cookies(&self) -> &CookieStore {
        &self.cookies
    }

    /// Admin user present and token cookie set
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin) && self.cookies.get(ACCESS_TOKEN).is_some()
    }

    /// Start a session from a login response
    pub fn init(&mut self, login: LoginResponse) -> Result<()> {
        self.cookies.set(ACCESS_TOKEN, &login.access_token)?;
        self.cookies.set(ADMIN_FLAG, "true")?;
        self.user = Some(login.user);
        Ok(())
    }

    /// Drop the user and both cookies
    pub fn clear(&mut self) {
        self.user = None;
        for key in [ACCESS_TOKEN, ADMIN_FLAG] {
            if let Err(e) = self.cookies.remove(key) {
                warn!(key, error = %e, "failed to remove cookie");
            }
        }
    }
}
