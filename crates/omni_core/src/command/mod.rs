//! Free-text command classification.
//!
//! # Responsibility
//! - Map typed/spoken command text onto shell intents.
//! - Keep classification pure so the rendering layer stays a thin adapter.

pub mod interpreter;
