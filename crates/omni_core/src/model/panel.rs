//! Panel and module identifiers for the dashboard shell.
//!
//! # Responsibility
//! - Enumerate the fixed set of top-level panels and launchable modules.
//! - Map between UI string keys, display titles and typed identifiers.
//!
//! # Invariants
//! - String keys are stable; the rendering layer addresses panels by key.
//! - Exactly one panel is active at a time (owned by `shell::router`).

use serde::{Deserialize, Serialize};

/// One top-level view of the dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelId {
    Dashboard,
    /// The OmniAI chat panel; only present in the chat-enabled variant.
    OmniChat,
    Modules,
    Workspaces,
    Archives,
    Settings,
}

impl PanelId {
    /// All panels known to this build, in sidebar order.
    pub const ALL: [PanelId; 6] = [
        PanelId::Dashboard,
        PanelId::OmniChat,
        PanelId::Modules,
        PanelId::Workspaces,
        PanelId::Archives,
        PanelId::Settings,
    ];

    /// Stable string key used by the rendering layer.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::OmniChat => "omni",
            Self::Modules => "modules",
            Self::Workspaces => "workspaces",
            Self::Archives => "archives",
            Self::Settings => "settings",
        }
    }

    /// Topbar title shown when the panel is active.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::OmniChat => "OmniAI Chat",
            Self::Modules => "Modules",
            Self::Workspaces => "Workspaces",
            Self::Archives => "Archives / Transcend",
            Self::Settings => "Kai Core / Settings",
        }
    }

    /// Parses a UI string key into a panel identifier.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.key() == key)
    }
}

/// One launchable sub-application of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    JargonLinker,
    Math,
    Network,
    Footprint,
}

impl ModuleId {
    /// Stable string key used by the rendering layer.
    pub fn key(self) -> &'static str {
        match self {
            Self::JargonLinker => "jargon-linker",
            Self::Math => "math",
            Self::Network => "network",
            Self::Footprint => "footprint",
        }
    }

    /// Human-readable module name for log lines and cards.
    pub fn description(self) -> &'static str {
        match self {
            Self::JargonLinker => "Jargon Linker",
            Self::Math => "Math / Tutor Engine",
            Self::Network => "Network / DNS Lab Assistant",
            Self::Footprint => "Digital Footprint Removal",
        }
    }
}
