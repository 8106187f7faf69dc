//! Glossary entry domain model.
//!
//! # Responsibility
//! - Define the canonical glossary record shared by store/query/service.
//! - Provide creation and mutation helpers that keep timestamps honest.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `term` and `definition` are never blank after a successful write.
//! - `updated_at` is `None` until the first mutation after creation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for every glossary entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// One glossary record: a term, its definition, and an optional category.
///
/// The serialized shape (field names, optional `updatedAt`) is the persisted
/// document format; changing it invalidates stored data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// Stable global ID used for edit/delete targeting.
    pub id: EntryId,
    /// User-supplied term, trimmed, non-blank.
    pub term: String,
    /// User-supplied definition, trimmed, non-blank.
    pub definition: String,
    /// Free-form category; empty string means "uncategorized".
    pub category: String,
    /// Unix epoch milliseconds, set once at creation.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
    /// Unix epoch milliseconds of the last mutation, absent until then.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

/// Validation failure for user-supplied entry fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyTerm,
    EmptyDefinition,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTerm => write!(f, "term must not be empty"),
            Self::EmptyDefinition => write!(f, "definition must not be empty"),
        }
    }
}

impl Error for EntryValidationError {}

impl GlossaryEntry {
    /// Creates a new entry with a generated stable ID and `created_at = now`.
    ///
    /// Fields are stored as given; callers trim and validate first (see
    /// [`validate_fields`]).
    pub fn new(
        term: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), term, definition, category, now_epoch_ms())
    }

    /// Creates an entry with caller-provided identity and creation time.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: EntryId,
        term: impl Into<String>,
        definition: impl Into<String>,
        category: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            term: term.into(),
            definition: definition.into(),
            category: category.into(),
            created_at,
            updated_at: None,
        }
    }

    /// Records a mutation timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Some(now_epoch_ms());
    }
}

/// Validates trimmed user input for the add/update path.
///
/// Returns the first failing field so the UI can report it inline.
pub fn validate_fields(term: &str, definition: &str) -> Result<(), EntryValidationError> {
    if term.trim().is_empty() {
        return Err(EntryValidationError::EmptyTerm);
    }
    if definition.trim().is_empty() {
        return Err(EntryValidationError::EmptyDefinition);
    }
    Ok(())
}

/// Current wall-clock time in Unix epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
