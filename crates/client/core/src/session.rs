//! Overlay session state owned by the client.

use gate_core::{OverlayState, SessionOracle};

/// Session-lifetime overlay context.
///
/// Menu and hotkey code mutates this; the gate only reads it through the
/// session oracle.
#[derive(Clone, Debug, Default)]
pub struct SessionContext {
    state: OverlayState,
    overlay_mode: bool,
}

impl SessionContext {
    pub fn new(state: OverlayState, overlay_mode: bool) -> Self {
        Self {
            state,
            overlay_mode,
        }
    }

    /// Switches the overlay into `state`.
    pub fn set_state(&mut self, state: OverlayState) {
        if state != self.state {
            tracing::debug!(from = %self.state, to = %state, "overlay state changed");
        }
        self.state = state;
    }

    /// Enables or disables overlay mode for the whole session.
    pub fn set_overlay_mode(&mut self, enabled: bool) {
        self.overlay_mode = enabled;
    }
}

impl SessionOracle for SessionContext {
    fn overlay_state(&self) -> OverlayState {
        self.state
    }

    fn in_overlay_mode(&self) -> bool {
        self.overlay_mode
    }
}
