//! Glossary entry store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the glossary as one keyed JSON document in `kv_store`.
//! - Keep SQL and serialization details inside the persistence boundary.
//!
//! # Invariants
//! - `save` rewrites the document in a single statement; callers never
//!   observe a partial write.
//! - `load` never fails on malformed document text; it returns an empty list
//!   and a [`RecoverableParseError`] for the caller to log.

use crate::db::DbError;
use crate::db::migrations::latest_version;
use crate::model::entry::{now_epoch_ms, EntryId, GlossaryEntry};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Document key for the glossary, kept identical to the original web shell's
/// local-storage key so exported data stays recognizable.
pub const ENTRIES_DOC_KEY: &str = "jargonLinkerEntries_v1";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence/serialization error for glossary store operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Serialize(serde_json::Error),
    NotFound(EntryId),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize glossary document: {err}"),
            Self::NotFound(id) => write!(f, "glossary entry not found: {id}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Non-fatal signal that the persisted document could not be parsed.
///
/// The store degrades to an empty list; the caller decides how to log it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecoverableParseError {
    pub message: String,
}

impl Display for RecoverableParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "corrupt glossary document, starting empty: {}", self.message)
    }
}

impl Error for RecoverableParseError {}

/// Result of a document read: the entries plus an optional corruption signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedEntries {
    pub entries: Vec<GlossaryEntry>,
    pub recovered: Option<RecoverableParseError>,
}

/// Store interface for glossary persistence.
pub trait EntryRepository {
    /// Reads the whole glossary document.
    fn load(&self) -> RepoResult<LoadedEntries>;
    /// Overwrites the whole glossary document atomically.
    fn save(&self, entries: &[GlossaryEntry]) -> RepoResult<()>;
    /// Inserts or replaces one entry by `id` inside the document.
    fn upsert(&self, entry: &GlossaryEntry) -> RepoResult<()>;
    /// Removes one entry by `id`; `NotFound` when absent.
    fn remove(&self, id: EntryId) -> RepoResult<()>;
}

/// SQLite-backed glossary store over the `kv_store` document table.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let expected_version = latest_version();
        let actual_version: u32 =
            conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_present: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )?;
        if table_present != 1 {
            return Err(RepoError::MissingRequiredTable("kv_store"));
        }

        Ok(Self { conn })
    }

    /// Returns the raw persisted document text, if any. Test/diagnostic hook.
    pub fn raw_document(&self) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [ENTRIES_DOC_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn load(&self) -> RepoResult<LoadedEntries> {
        let Some(raw) = self.raw_document()? else {
            return Ok(LoadedEntries {
                entries: Vec::new(),
                recovered: None,
            });
        };

        match serde_json::from_str::<Vec<GlossaryEntry>>(&raw) {
            Ok(entries) => Ok(LoadedEntries {
                entries,
                recovered: None,
            }),
            Err(err) => Ok(LoadedEntries {
                entries: Vec::new(),
                recovered: Some(RecoverableParseError {
                    message: err.to_string(),
                }),
            }),
        }
    }

    fn save(&self, entries: &[GlossaryEntry]) -> RepoResult<()> {
        let document = serde_json::to_string(entries).map_err(RepoError::Serialize)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![ENTRIES_DOC_KEY, document, now_epoch_ms()],
        )?;
        Ok(())
    }

    fn upsert(&self, entry: &GlossaryEntry) -> RepoResult<()> {
        let mut entries = self.load()?.entries;
        match entries.iter_mut().find(|candidate| candidate.id == entry.id) {
            Some(existing) => *existing = entry.clone(),
            None => entries.push(entry.clone()),
        }
        self.save(&entries)
    }

    fn remove(&self, id: EntryId) -> RepoResult<()> {
        let mut entries = self.load()?.entries;
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Err(RepoError::NotFound(id));
        }
        self.save(&entries)
    }
}
