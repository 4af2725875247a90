//! Hub page state: sidebar and "reason" overlay.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Something the hub page should do in response to a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubEffect {
    /// Restart the statistic count-up in the sidebar.
    AnimateStats,
    /// Play the celebration behind the reason overlay.
    Celebrate,
}

/// Open/closed state of the hub's panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HubState {
    sidebar_open: bool,
    reason_open: bool,
}

impl HubState {
    /// Both panels closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sidebar_open: false,
            reason_open: false,
        }
    }

    /// Whether the sidebar is open.
    #[must_use]
    pub const fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Whether the reason overlay is shown.
    #[must_use]
    pub const fn reason_open(&self) -> bool {
        self.reason_open
    }

    /// Open the sidebar. Statistics re-animate on every open.
    pub fn open_sidebar(&mut self) -> HubEffect {
        self.sidebar_open = true;
        debug!("Sidebar opened");
        HubEffect::AnimateStats
    }

    /// Close the sidebar.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// A click on the dimmed overlay behind the sidebar.
    pub fn overlay_clicked(&mut self) {
        self.close_sidebar();
    }

    /// Show the reason overlay, closing the sidebar first.
    pub fn open_reason(&mut self) -> HubEffect {
        self.close_sidebar();
        self.reason_open = true;
        debug!("Reason overlay opened");
        HubEffect::Celebrate
    }

    /// Hide the reason overlay.
    pub fn close_reason(&mut self) {
        self.reason_open = false;
    }
}
