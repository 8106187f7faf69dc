//! Domain model for the shell control core.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one record shape for the glossary and one identifier set for the
//!   shell, shared by every layer above.
//!
//! # Invariants
//! - Every glossary record is identified by a stable `EntryId`.
//! - Panel/module identifiers are a closed set; unknown keys are rejected at
//!   the routing boundary, never silently coerced.

pub mod entry;
pub mod panel;
