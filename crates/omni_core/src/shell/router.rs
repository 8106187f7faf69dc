//! Active-panel state machine.
//!
//! # Responsibility
//! - Track which panel is active and expose the transition operation.
//!
//! # Invariants
//! - Exactly one panel is active at a time; initial state is the dashboard.
//! - Unknown or disabled panel keys leave the state untouched and surface an
//!   [`UnknownPanelError`] for the caller to log.

use crate::model::panel::PanelId;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Navigation request for a panel this build does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPanelError {
    pub requested: String,
}

impl Display for UnknownPanelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown panel: {}", self.requested)
    }
}

impl Error for UnknownPanelError {}

/// Pure panel-state holder; no I/O.
#[derive(Debug, Clone)]
pub struct PanelRouter {
    active: PanelId,
    enabled: BTreeSet<PanelId>,
}

impl PanelRouter {
    /// Builds a router over the enabled panel set, starting on the dashboard.
    ///
    /// The dashboard is always part of the set; a shell without its initial
    /// panel is not a meaningful configuration.
    pub fn new(enabled: impl IntoIterator<Item = PanelId>) -> Self {
        let mut enabled: BTreeSet<PanelId> = enabled.into_iter().collect();
        enabled.insert(PanelId::Dashboard);
        Self {
            active: PanelId::Dashboard,
            enabled,
        }
    }

    /// Builds the full shell variant (every panel, including chat).
    pub fn with_all_panels() -> Self {
        Self::new(PanelId::ALL)
    }

    pub fn active(&self) -> PanelId {
        self.active
    }

    pub fn enabled_panels(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.enabled.iter().copied()
    }

    pub fn is_enabled(&self, panel: PanelId) -> bool {
        self.enabled.contains(&panel)
    }

    /// Transition by UI string key; unknown/disabled keys change nothing.
    pub fn switch_to(&mut self, key: &str) -> Result<PanelId, UnknownPanelError> {
        let panel = PanelId::from_key(key).filter(|panel| self.enabled.contains(panel));
        match panel {
            Some(panel) => {
                self.active = panel;
                Ok(panel)
            }
            None => Err(UnknownPanelError {
                requested: key.to_string(),
            }),
        }
    }

    /// Transition by typed identifier; disabled panels change nothing.
    pub fn activate(&mut self, panel: PanelId) -> Result<PanelId, UnknownPanelError> {
        self.switch_to(panel.key())
    }
}

#[cfg(test)]
mod tests {
    use super::PanelRouter;
    use crate::model::panel::PanelId;

    #[test]
    fn starts_on_dashboard() {
        let router = PanelRouter::with_all_panels();
        assert_eq!(router.active(), PanelId::Dashboard);
    }

    #[test]
    fn unknown_key_is_rejected_and_state_kept() {
        let mut router = PanelRouter::with_all_panels();
        router.switch_to("modules").unwrap();
        let err = router.switch_to("no-such-panel").unwrap_err();
        assert_eq!(err.requested, "no-such-panel");
        assert_eq!(router.active(), PanelId::Modules);
    }

    #[test]
    fn disabled_chat_panel_is_rejected() {
        let mut router = PanelRouter::new([PanelId::Dashboard, PanelId::Modules]);
        assert!(router.switch_to("omni").is_err());
        assert_eq!(router.active(), PanelId::Dashboard);
    }
}
