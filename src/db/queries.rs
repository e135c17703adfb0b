use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::SessionRecord;

const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, TS_FORMAT).unwrap_or_else(|_| Utc::now().naive_utc())
}

fn row_to_session(row: &rusqlite::Row<'_>) -> rusqlite::Result<SessionRecord> {
    let created_at: String = row.get(1)?;
    let updated_at: String = row.get(3)?;
    Ok(SessionRecord {
        sender: row.get(0)?,
        created_at: parse_ts(&created_at),
        last_message: row.get(2)?,
        updated_at: parse_ts(&updated_at),
    })
}

// ── Sessions ──

pub fn get_session(conn: &Connection, sender: &str) -> anyhow::Result<Option<SessionRecord>> {
    let session = conn
        .query_row(
            "SELECT sender, created_at, last_message, updated_at FROM sessions WHERE sender = ?1",
            [sender],
            row_to_session,
        )
        .optional()?;
    Ok(session)
}

pub fn save_session(conn: &Connection, session: &SessionRecord) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO sessions (sender, created_at, last_message, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(sender) DO UPDATE SET
            last_message = excluded.last_message,
            updated_at = excluded.updated_at",
        params![
            session.sender,
            session.created_at.format(TS_FORMAT).to_string(),
            session.last_message,
            session.updated_at.format(TS_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

pub fn delete_session(conn: &Connection, sender: &str) -> anyhow::Result<bool> {
    let removed = conn.execute("DELETE FROM sessions WHERE sender = ?1", [sender])?;
    Ok(removed > 0)
}

pub fn list_sessions(conn: &Connection) -> anyhow::Result<Vec<SessionRecord>> {
    let mut stmt = conn.prepare(
        "SELECT sender, created_at, last_message, updated_at FROM sessions ORDER BY updated_at DESC",
    )?;
    let sessions = stmt
        .query_map([], row_to_session)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TS_FORMAT).unwrap()
    }

    #[test]
    fn test_save_get_delete_session() {
        let conn = db::init_db(":memory:").unwrap();
        let mut session = SessionRecord::new("abc", ts("2024-11-16 13:45:00"));
        save_session(&conn, &session).unwrap();

        session.touch("hello", ts("2024-11-16 13:46:00"));
        save_session(&conn, &session).unwrap();

        let loaded = get_session(&conn, "abc").unwrap().unwrap();
        assert_eq!(loaded, session);
        assert_eq!(loaded.created_at, ts("2024-11-16 13:45:00"));

        assert!(delete_session(&conn, "abc").unwrap());
        assert!(!delete_session(&conn, "abc").unwrap());
        assert!(get_session(&conn, "abc").unwrap().is_none());
    }

    #[test]
    fn test_list_sessions_most_recent_first() {
        let conn = db::init_db(":memory:").unwrap();
        save_session(&conn, &SessionRecord::new("old", ts("2024-01-01 00:00:00"))).unwrap();
        save_session(&conn, &SessionRecord::new("new", ts("2024-06-01 00:00:00"))).unwrap();

        let senders: Vec<String> = list_sessions(&conn)
            .unwrap()
            .into_iter()
            .map(|s| s.sender)
            .collect();
        assert_eq!(senders, vec!["new", "old"]);
    }
}
