//! Control core for the OmniAI dashboard shell and its Jargon Linker glossary.
//! This crate is the single source of truth for business invariants; the
//! rendering layer is a thin adapter over the types exported here.

pub mod command;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod shell;

pub use command::interpreter::{CommandIntent, CommandInterpreter};
pub use gateway::{BackendError, BackendGateway, HttpBackendGateway, DEFAULT_BACKEND_URL};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryId, EntryValidationError, GlossaryEntry};
pub use model::panel::{ModuleId, PanelId};
pub use repo::entry_repo::{
    EntryRepository, LoadedEntries, RecoverableParseError, RepoError, RepoResult,
    SqliteEntryRepository, ENTRIES_DOC_KEY,
};
pub use search::filter::{distinct_categories, filter_entries, EntryFilter};
pub use service::glossary_service::{
    DeleteOutcome, EntryDraft, GlossaryError, GlossaryService, SaveOutcome,
};
pub use shell::activity_log::{ActivityLog, LogEntry, MAX_LOG_ENTRIES};
pub use shell::router::{PanelRouter, UnknownPanelError};
pub use shell::session::{ChatOutcome, ShellSession};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
