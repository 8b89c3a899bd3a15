use std::path::Path;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use tracing::{info, warn};

use super::password::{hash_password, verify_password};
use super::types::User;
use crate::error::MeowlyError;

/// SQLite store for user accounts.
/// All operations are synchronous (rusqlite is blocking).
pub struct AccountStore {
    conn: Connection,
}

impl AccountStore {
    /// Create or open the account database at the given path.
    pub fn new(db_path: &Path) -> Result<Self, MeowlyError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MeowlyError::Storage(format!("Failed to create data dir: {}", e)))?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| MeowlyError::Storage(format!("Failed to open account db: {}", e)))?;
        let store = Self::with_connection(conn)?;

        info!("Opened account database at {:?}", db_path);
        Ok(store)
    }

    pub fn in_memory() -> Result<Self, MeowlyError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| MeowlyError::Storage(format!("Failed to open account db: {}", e)))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, MeowlyError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
            )",
            [],
        )
        .map_err(|e| MeowlyError::Storage(format!("Failed to create users table: {}", e)))?;

        Ok(Self { conn })
    }

    /// Register a new user. Returns the created account.
    ///
    /// Duplicate emails are rejected by the `UNIQUE` constraint, including
    /// inserts from another connection to the same file.
    pub fn register(&self, email: &str, password: &str) -> Result<User, MeowlyError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(MeowlyError::Validation("Email and password are required".to_string()));
        }

        let hash = hash_password(password)?;
        self.conn
            .execute(
                "INSERT INTO users (email, password_hash) VALUES (?1, ?2)",
                params![email, hash],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    MeowlyError::Conflict(format!("Email already registered: {}", email))
                }
                other => MeowlyError::Storage(format!("Failed to insert user: {}", other)),
            })?;

        let user = User {
            id: self.conn.last_insert_rowid(),
            email: email.to_string(),
        };
        info!("Registered user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// Verify credentials. Unknown email and wrong password are reported alike.
    pub fn login(&self, email: &str, password: &str) -> Result<User, MeowlyError> {
        let email = email.trim();
        let row = self
            .conn
            .query_row(
                "SELECT id, email, password_hash FROM users WHERE email = ?1",
                params![email],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(|e| MeowlyError::Storage(format!("User lookup failed: {}", e)))?;

        match row {
            Some((id, email, hash)) if verify_password(password, &hash) => Ok(User { id, email }),
            _ => {
                warn!("Failed login attempt for {}", email);
                Err(MeowlyError::Unauthorized("Wrong email or password".to_string()))
            }
        }
    }

    pub fn get(&self, user_id: i64) -> Result<Option<User>, MeowlyError> {
        self.conn
            .query_row(
                "SELECT id, email FROM users WHERE id = ?1",
                params![user_id],
                |row| {
                    Ok(User {
                        id: row.get(0)?,
                        email: row.get(1)?,
                    })
                },
            )
            .optional()
            .map_err(|e| MeowlyError::Storage(format!("User lookup failed: {}", e)))
    }
}
