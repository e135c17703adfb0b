use std::collections::HashMap;
use std::sync::Mutex;

use rusqlite::Connection;

use crate::db::queries;
use crate::models::SessionRecord;

/// Gateway session bookkeeping, keyed by sender id.
pub trait SessionStore: Send + Sync {
    fn get(&self, sender: &str) -> anyhow::Result<Option<SessionRecord>>;
    fn put(&self, session: &SessionRecord) -> anyhow::Result<()>;
    /// Returns whether a session was removed.
    fn delete(&self, sender: &str) -> anyhow::Result<bool>;
    fn list(&self) -> anyhow::Result<Vec<SessionRecord>>;
}

/// Process-local store; sessions are lost on restart and not shared between
/// gateway instances.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, HashMap<String, SessionRecord>>> {
        self.sessions
            .lock()
            .map_err(|_| anyhow::anyhow!("session store lock poisoned"))
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, sender: &str) -> anyhow::Result<Option<SessionRecord>> {
        Ok(self.lock()?.get(sender).cloned())
    }

    fn put(&self, session: &SessionRecord) -> anyhow::Result<()> {
        self.lock()?
            .insert(session.sender.clone(), session.clone());
        Ok(())
    }

    fn delete(&self, sender: &str) -> anyhow::Result<bool> {
        Ok(self.lock()?.remove(sender).is_some())
    }

    fn list(&self) -> anyhow::Result<Vec<SessionRecord>> {
        let mut sessions: Vec<SessionRecord> = self.lock()?.values().cloned().collect();
        sessions.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(sessions)
    }
}

/// Store backed by a SQLite file, so several gateway processes pointed at the
/// same file see the same sessions.
pub struct SqliteSessionStore {
    conn: Mutex<Connection>,
}

impl SqliteSessionStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    pub fn open(path: &str) -> anyhow::Result<Self> {
        Ok(Self::new(crate::db::init_db(path)?))
    }

    fn lock(&self) -> anyhow::Result<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow::anyhow!("session database lock poisoned"))
    }
}

impl SessionStore for SqliteSessionStore {
    fn get(&self, sender: &str) -> anyhow::Result<Option<SessionRecord>> {
        let conn = self.lock()?;
        queries::get_session(&conn, sender)
    }

    fn put(&self, session: &SessionRecord) -> anyhow::Result<()> {
        let conn = self.lock()?;
        queries::save_session(&conn, session)
    }

    fn delete(&self, sender: &str) -> anyhow::Result<bool> {
        let conn = self.lock()?;
        queries::delete_session(&conn, sender)
    }

    fn list(&self) -> anyhow::Result<Vec<SessionRecord>> {
        let conn = self.lock()?;
        queries::list_sessions(&conn)
    }
}
