//! Capability traits for the overlay manager subsystems.
//!
//! Each manager owns its own algorithms and state; the gate only calls the
//! narrow capabilities below and reacts to the state they report. The
//! [`ManagerSet`] aggregate injects all five managers into the dispatcher for
//! the duration of one event.

use crate::types::{BlockHitResult, BlockKind, BlockPos, PlayerId};

/// Combat targeting capability.
pub trait FightHandler {
    /// Records `hit` as the current combat target. `targeting` exposes the
    /// generic selection session so implementations can refine a block hit
    /// into a unit-group order.
    fn set_target(&mut self, hit: &BlockHitResult, targeting: &dyn SelectionHandler);
}

/// Automation-area marker capability.
pub trait AreasHandler {
    /// Whether an area selection is currently in progress.
    fn is_selecting(&self) -> bool;

    /// Cancels the in-progress selection.
    fn reset_selection(&mut self);

    /// Removes the currently hovered area marker, if any.
    fn remove_hovered(&mut self);
}

/// Blueprint placement capability.
pub trait BlueprintHandler {
    /// Whether a blueprint placement session is active.
    fn is_selecting(&self) -> bool;

    /// Requests construction of the currently staged structure.
    fn build_current_structure(&mut self);
}

/// Constructed-building inspection capability.
pub trait BuildingsHandler {
    /// Whether the cursor is currently over a constructed building.
    fn is_building_hovered(&self) -> bool;

    /// Opens the hovered building's inspection screen for `player`.
    fn open_building_screen(&mut self, player: PlayerId);
}

/// Free-form block selection capability.
pub trait SelectionHandler {
    /// Whether a selection session is active.
    fn is_selecting(&self) -> bool;

    /// Records `pos` as selected, optionally with the block kind to place
    /// there.
    fn select_block(&mut self, pos: BlockPos, kind: Option<BlockKind>);
}

/// Exclusive borrows of all five managers for the duration of one event.
///
/// Fields are public so routes can split the borrows (e.g. hand the selection
/// manager to the fight handler as targeting context).
pub struct ManagerSet<'a> {
    pub fight: &'a mut dyn FightHandler,
    pub areas: &'a mut dyn AreasHandler,
    pub blueprint: &'a mut dyn BlueprintHandler,
    pub buildings: &'a mut dyn BuildingsHandler,
    pub selection: &'a mut dyn SelectionHandler,
}

impl<'a> ManagerSet<'a> {
    pub fn new(
        fight: &'a mut dyn FightHandler,
        areas: &'a mut dyn AreasHandler,
        blueprint: &'a mut dyn BlueprintHandler,
        buildings: &'a mut dyn BuildingsHandler,
        selection: &'a mut dyn SelectionHandler,
    ) -> Self {
        Self {
            fight,
            areas,
            blueprint,
            buildings,
            selection,
        }
    }
}
