use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use tracing::info;

use super::domain::{NewSubmission, Submission, SubmissionId};
use super::repository::{StoreError, SubmissionStore};

/// SQLite-backed store. The connection lives for the life of the store and
/// is released when the last handle drops, so no request path can leak it.
pub struct SqliteSubmissionStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSubmissionStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    /// Schema creation failure is fatal to the caller.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        info!("submission store ready");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection mutex poisoned".to_string()))
    }
}

/// Idempotent create-if-absent. AUTOINCREMENT keeps deleted ids from ever
/// being reassigned.
fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS submissions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            age INTEGER,
            submitted_at TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}

fn map_submission(row: &Row<'_>) -> rusqlite::Result<Submission> {
    let submitted_at: String = row.get(4)?;
    let submitted_at = submitted_at
        .parse::<DateTime<Utc>>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(err)))?;

    Ok(Submission {
        id: SubmissionId(row.get(0)?),
        name: row.get(1)?,
        email: row.get(2)?,
        age: row.get(3)?,
        submitted_at,
    })
}

impl SubmissionStore for SqliteSubmissionStore {
    fn insert(&self, submission: NewSubmission) -> Result<Submission, StoreError> {
        let submitted_at = Utc::now();
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO submissions (name, email, age, submitted_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                submission.name,
                submission.email,
                submission.age,
                submitted_at.to_rfc3339(),
            ],
        )?;

        Ok(Submission {
            id: SubmissionId(conn.last_insert_rowid()),
            name: submission.name,
            email: submission.email,
            age: submission.age,
            submitted_at,
        })
    }

    fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let conn = self.lock()?;
        let mut statement = conn.prepare(
            "SELECT id, name, email, age, submitted_at FROM submissions
             ORDER BY submitted_at DESC, id DESC",
        )?;
        let rows = statement.query_map([], map_submission)?;

        let mut submissions = Vec::new();
        for row in rows {
            submissions.push(row?);
        }
        Ok(submissions)
    }

    fn delete(&self, id: SubmissionId) -> Result<(), StoreError> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM submissions WHERE id = ?1", [id.0])?;
        if affected == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

impl Clone for SqliteSubmissionStore {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}
