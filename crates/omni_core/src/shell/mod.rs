//! Dashboard shell state: panel routing, activity log, session wiring.
//!
//! # Responsibility
//! - Own the mutable shell state the rendering layer observes.
//! - Turn classified intents into state changes and log lines.

pub mod activity_log;
pub mod router;
pub mod session;
