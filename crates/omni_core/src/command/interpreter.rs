//! Keyword-table command interpreter.
//!
//! # Responsibility
//! - Classify a command string into an ordered sequence of intents.
//! - Fall through to backend forwarding for anything unrecognized.
//!
//! # Invariants
//! - Matching is case-insensitive substring search over a fixed rule table;
//!   the first matching rule wins and rule order never changes.
//! - Every non-empty input produces at least one intent (total function).
//! - The chat rule only exists when the chat panel is enabled; otherwise its
//!   keywords fall through to backend forwarding.

use crate::model::panel::{ModuleId, PanelId};
use std::collections::BTreeSet;

/// The classified meaning of a typed command, before any action is performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandIntent {
    /// Switch the active panel.
    NavigateTo(PanelId),
    /// Launch a sub-application.
    LaunchModule(ModuleId),
    /// Hand the raw text to the remote backend.
    ForwardToBackend(String),
}

/// Stateless classifier configured with the enabled panel set.
#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    enabled_panels: BTreeSet<PanelId>,
}

impl CommandInterpreter {
    /// Builds an interpreter for the given panel configuration.
    pub fn new(enabled_panels: impl IntoIterator<Item = PanelId>) -> Self {
        Self {
            enabled_panels: enabled_panels.into_iter().collect(),
        }
    }

    /// Builds the full shell variant (every panel, including chat).
    pub fn with_all_panels() -> Self {
        Self::new(PanelId::ALL)
    }

    /// Classifies `text` into an ordered intent sequence, first rule wins.
    pub fn interpret(&self, text: &str) -> Vec<CommandIntent> {
        let lower = text.to_lowercase();

        if lower.contains("jargon") {
            return vec![CommandIntent::LaunchModule(ModuleId::JargonLinker)];
        }
        if lower.contains("math") {
            return vec![
                CommandIntent::LaunchModule(ModuleId::Math),
                CommandIntent::NavigateTo(PanelId::Modules),
            ];
        }
        if lower.contains("network") || lower.contains("dns") {
            return vec![
                CommandIntent::LaunchModule(ModuleId::Network),
                CommandIntent::NavigateTo(PanelId::Modules),
            ];
        }
        if lower.contains("footprint") || lower.contains("broker") {
            return vec![
                CommandIntent::LaunchModule(ModuleId::Footprint),
                CommandIntent::NavigateTo(PanelId::Modules),
            ];
        }
        if lower.contains("standard") || lower.contains("kai core") || lower.contains("kai") {
            return vec![CommandIntent::NavigateTo(PanelId::Settings)];
        }
        if self.enabled_panels.contains(&PanelId::OmniChat)
            && (lower.contains("omni chat") || lower.contains("chat"))
        {
            return vec![CommandIntent::NavigateTo(PanelId::OmniChat)];
        }

        vec![CommandIntent::ForwardToBackend(text.to_string())]
    }
}
