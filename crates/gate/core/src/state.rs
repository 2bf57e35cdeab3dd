//! Session-level overlay state observed by the router.

/// High-level mode the overlay session is in.
///
/// Owned by the session context and mutated by menu and hotkey code; the gate
/// only reads it. `Default` covers the generic build mode whose behavior is
/// decided by manager sub-conditions rather than a single flag.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayState {
    /// Overlay loaded but no specialized interaction mode selected.
    #[default]
    None,
    /// Clicks select combat targets.
    Combat,
    /// Clicks manage automation-area markers.
    AreasSelection,
    /// A blueprint is being edited in its dedicated world.
    BlueprintEditing,
    /// Generic build mode: placement and selection sub-conditions decide.
    Default,
}
