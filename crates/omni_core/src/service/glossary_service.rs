//! Glossary use-case service: add/update, edit flow, delete.
//!
//! # Responsibility
//! - Mediate user edit actions against the entry store.
//! - Own the in-memory snapshot and the in-progress-edit pointer.
//!
//! # Invariants
//! - The create path never inserts a second entry for the same
//!   (case-insensitive term, exact category) pair; it merges instead.
//! - The edit path overwrites its target unconditionally and does NOT
//!   re-check (term, category) collisions against other entries. This
//!   asymmetry is intentional, carried over from the original shell, and
//!   pinned by tests.
//! - Deleting the entry under edit clears the edit pointer.
//! - Every write is persisted before the in-memory snapshot is touched; a
//!   failed write leaves the snapshot and the edit pointer unchanged.

use crate::model::entry::{validate_fields, EntryId, EntryValidationError, GlossaryEntry};
use crate::repo::entry_repo::{EntryRepository, RepoError};
use crate::search::filter::{distinct_categories, filter_entries, EntryFilter};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error surface of glossary use-cases.
#[derive(Debug)]
pub enum GlossaryError {
    /// User input failed validation; nothing was written.
    Validation(EntryValidationError),
    /// Persistence failed underneath a valid operation.
    Repo(RepoError),
}

impl Display for GlossaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for GlossaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<EntryValidationError> for GlossaryError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for GlossaryError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// What an `add_or_update` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new entry was created.
    Created(EntryId),
    /// An existing (term, category) match absorbed the new definition.
    MergedDuplicate(EntryId),
    /// The entry under edit was overwritten.
    UpdatedEditing(EntryId),
    /// An edit was in progress but its target no longer exists; the edit
    /// state was cleared and nothing was written.
    EditTargetMissing,
}

/// What a `delete` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The caller-supplied confirmation declined the delete.
    Cancelled,
    /// No entry with that id exists; nothing changed.
    NotFound,
}

/// Field values for pre-filling the edit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub term: String,
    pub definition: String,
    pub category: String,
}

/// Use-case service for the glossary, generic over the store implementation.
pub struct GlossaryService<R: EntryRepository> {
    repo: R,
    entries: Vec<GlossaryEntry>,
    editing: Option<EntryId>,
}

impl<R: EntryRepository> GlossaryService<R> {
    /// Loads the persisted snapshot and builds a service around it.
    ///
    /// A corrupt document degrades to an empty glossary and is logged; it is
    /// never an error on this path.
    pub fn load(repo: R) -> Result<Self, GlossaryError> {
        let loaded = repo.load()?;
        if let Some(parse_warning) = &loaded.recovered {
            warn!(
                "event=glossary_load module=glossary status=recovered error={}",
                parse_warning
            );
        }
        Ok(Self {
            repo,
            entries: loaded.entries,
            editing: None,
        })
    }

    /// Current snapshot, in insertion order.
    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    /// Id of the entry currently being edited, if any.
    pub fn editing(&self) -> Option<EntryId> {
        self.editing
    }

    /// Filtered/sorted view for the entry list.
    pub fn visible(&self, search_text: &str, category: &str) -> Vec<GlossaryEntry> {
        filter_entries(&self.entries, &EntryFilter::new(search_text, category))
    }

    /// Distinct non-blank categories for the filter control.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.entries)
    }

    /// Adds a new entry, merges into a duplicate, or applies the pending edit.
    ///
    /// Inputs are trimmed first; a blank term or definition aborts with a
    /// validation error and no state change. The change is persisted before
    /// the snapshot is updated, so a failed write also leaves the snapshot
    /// and any in-progress edit state untouched.
    pub fn add_or_update(
        &mut self,
        term: &str,
        definition: &str,
        category: &str,
    ) -> Result<SaveOutcome, GlossaryError> {
        let term = term.trim();
        let definition = definition.trim();
        let category = category.trim();
        validate_fields(term, definition)?;

        if let Some(editing_id) = self.editing {
            let Some(index) = self.entries.iter().position(|entry| entry.id == editing_id)
            else {
                self.editing = None;
                warn!(
                    "event=glossary_save module=glossary status=skipped reason=edit_target_missing id={editing_id}"
                );
                return Ok(SaveOutcome::EditTargetMissing);
            };

            // No collision re-check here; see module invariants.
            let mut updated = self.entries[index].clone();
            updated.term = term.to_string();
            updated.definition = definition.to_string();
            updated.category = category.to_string();
            updated.touch();
            self.repo.upsert(&updated)?;
            let id = updated.id;
            self.entries[index] = updated;
            self.editing = None;
            info!("event=glossary_save module=glossary status=ok outcome=updated id={id}");
            return Ok(SaveOutcome::UpdatedEditing(id));
        }

        let term_lower = term.to_lowercase();
        if let Some(index) = self.entries.iter().position(|entry| {
            entry.term.to_lowercase() == term_lower && entry.category == category
        }) {
            let mut merged = self.entries[index].clone();
            merged.definition = definition.to_string();
            merged.touch();
            self.repo.upsert(&merged)?;
            let id = merged.id;
            self.entries[index] = merged;
            info!("event=glossary_save module=glossary status=ok outcome=merged id={id}");
            return Ok(SaveOutcome::MergedDuplicate(id));
        }

        let entry = GlossaryEntry::new(term, definition, category);
        self.repo.upsert(&entry)?;
        let id = entry.id;
        self.entries.push(entry);
        info!("event=glossary_save module=glossary status=ok outcome=created id={id}");
        Ok(SaveOutcome::Created(id))
    }

    /// Starts editing the given entry and returns its current field values.
    ///
    /// Silent no-op (`None`) when the id is unknown.
    pub fn begin_edit(&mut self, id: EntryId) -> Option<EntryDraft> {
        let entry = self.entries.iter().find(|entry| entry.id == id)?;
        self.editing = Some(id);
        Some(EntryDraft {
            term: entry.term.clone(),
            definition: entry.definition.clone(),
            category: entry.category.clone(),
        })
    }

    /// Abandons the in-progress edit, if any. Form-reset path.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Deletes an entry after the caller-supplied confirmation accepts it.
    ///
    /// The confirmation receives the entry about to be removed, so the
    /// rendering layer can show it. Deleting the entry under edit also clears
    /// the edit state.
    pub fn delete<F>(&mut self, id: EntryId, confirm: F) -> Result<DeleteOutcome, GlossaryError>
    where
        F: FnOnce(&GlossaryEntry) -> bool,
    {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return Ok(DeleteOutcome::NotFound);
        };

        if !confirm(&self.entries[index]) {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.repo.remove(id)?;
        self.entries.remove(index);
        if self.editing == Some(id) {
            self.editing = None;
        }
        info!("event=glossary_delete module=glossary status=ok id={id}");
        Ok(DeleteOutcome::Deleted)
    }
}
