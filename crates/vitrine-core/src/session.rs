//! Session-scoped flags.
//!
//! The splash screen records that the visitor pressed start. The write is
//! best-effort: a storage failure is logged and never blocks the page.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::error::Result;

/// Key set once the visitor has left the splash screen.
pub const SESSION_STARTED_KEY: &str = "session_started";

/// Storage for boolean session flags.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Store `value` under `key`.
    fn set_flag(&mut self, key: &str, value: bool) -> Result<()>;

    /// Read the flag under `key`, `None` if never set.
    fn get_flag(&self, key: &str) -> Result<Option<bool>>;
}

/// In-memory [`SessionStore`], lost with the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    flags: HashMap<String, bool>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.flags.insert(key.to_string(), value);
        Ok(())
    }

    fn get_flag(&self, key: &str) -> Result<Option<bool>> {
        Ok(self.flags.get(key).copied())
    }
}

/// Record that the session started.
///
/// Returns whether the flag was written. Failures are logged at `warn`.
pub fn mark_session_started<S: SessionStore + ?Sized>(store: &mut S) -> bool {
    match store.set_flag(SESSION_STARTED_KEY, true) {
        Ok(()) => {
            debug!("Session marked as started");
            true
        }
        Err(e) => {
            warn!("Storage warning: {}", e);
            false
        }
    }
}

/// Whether the session was marked as started. Unreadable storage counts as no.
pub fn session_started<S: SessionStore + ?Sized>(store: &S) -> bool {
    match store.get_flag(SESSION_STARTED_KEY) {
        Ok(flag) => flag.unwrap_or(false),
        Err(e) => {
            warn!("Storage warning: {}", e);
            false
        }
    }
}
