//! Glossary query entry points.
//!
//! # Responsibility
//! - Derive filtered/sorted views over a glossary snapshot.
//! - Keep result shaping (ordering, category set) inside core.

pub mod filter;
