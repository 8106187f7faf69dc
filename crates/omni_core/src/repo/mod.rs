//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the glossary persistence contract.
//! - Isolate SQLite and serialization details from service orchestration.
//!
//! # Invariants
//! - Corrupt persisted documents degrade to an empty list plus a recoverable
//!   warning; they never surface as hard errors on the read path.

pub mod entry_repo;
