//! Mode gate and priority-ordered overlay routing.

use crate::dispatch::UseBlockHandler;
use crate::env::GateEnv;
use crate::event::{EventVerdict, UseBlockEvent};
use crate::handlers::ManagerSet;
use crate::state::OverlayState;
use crate::types::BlockKind;

// ============================================================================
// Route Table
// ============================================================================

/// One overlay route: a predicate over the event context plus the action to
/// run when it is the first to match.
struct Route {
    name: &'static str,
    applies: fn(&UseBlockEvent, &GateEnv<'_>, &ManagerSet<'_>) -> bool,
    run: fn(&UseBlockEvent, &GateEnv<'_>, &mut ManagerSet<'_>),
}

/// Priority order is part of the contract: the combat and area modes outrank
/// every manager sub-condition, and a hovered building outranks placing a
/// held block. The first matching route consumes the event.
const ROUTES: &[Route] = &[
    Route {
        name: "combat-targeting",
        applies: combat_applies,
        run: combat_run,
    },
    Route {
        name: "areas-selection",
        applies: areas_applies,
        run: areas_run,
    },
    Route {
        name: "blueprint-build",
        applies: blueprint_applies,
        run: blueprint_run,
    },
    Route {
        name: "building-inspection",
        applies: buildings_applies,
        run: buildings_run,
    },
    Route {
        name: "item-placement",
        applies: placement_applies,
        run: placement_run,
    },
    Route {
        name: "block-selection",
        applies: selection_applies,
        run: selection_run,
    },
];

fn combat_applies(_event: &UseBlockEvent, env: &GateEnv<'_>, _managers: &ManagerSet<'_>) -> bool {
    env.session().overlay_state() == OverlayState::Combat
}

fn combat_run(event: &UseBlockEvent, _env: &GateEnv<'_>, managers: &mut ManagerSet<'_>) {
    let ManagerSet {
        fight, selection, ..
    } = managers;
    fight.set_target(&event.hit, &**selection);
}

fn areas_applies(_event: &UseBlockEvent, env: &GateEnv<'_>, _managers: &ManagerSet<'_>) -> bool {
    env.session().overlay_state() == OverlayState::AreasSelection
}

fn areas_run(_event: &UseBlockEvent, _env: &GateEnv<'_>, managers: &mut ManagerSet<'_>) {
    if managers.areas.is_selecting() {
        managers.areas.reset_selection();
    } else {
        managers.areas.remove_hovered();
    }
}

fn blueprint_applies(
    _event: &UseBlockEvent,
    _env: &GateEnv<'_>,
    managers: &ManagerSet<'_>,
) -> bool {
    managers.blueprint.is_selecting()
}

fn blueprint_run(_event: &UseBlockEvent, _env: &GateEnv<'_>, managers: &mut ManagerSet<'_>) {
    managers.blueprint.build_current_structure();
}

fn buildings_applies(
    _event: &UseBlockEvent,
    _env: &GateEnv<'_>,
    managers: &ManagerSet<'_>,
) -> bool {
    managers.buildings.is_building_hovered()
}

fn buildings_run(event: &UseBlockEvent, _env: &GateEnv<'_>, managers: &mut ManagerSet<'_>) {
    managers.buildings.open_building_screen(event.player);
}

fn placement_applies(event: &UseBlockEvent, env: &GateEnv<'_>, _managers: &ManagerSet<'_>) -> bool {
    placeable_kind(event, env).is_some()
}

fn placement_run(event: &UseBlockEvent, env: &GateEnv<'_>, managers: &mut ManagerSet<'_>) {
    let Some(kind) = placeable_kind(event, env) else {
        return;
    };
    let mut pos = event.hit.pos;
    if !env.world().can_place_at(pos) {
        pos = pos.offset(event.hit.face);
    }
    managers.selection.select_block(pos, Some(kind));
}

fn selection_applies(
    _event: &UseBlockEvent,
    _env: &GateEnv<'_>,
    managers: &ManagerSet<'_>,
) -> bool {
    managers.selection.is_selecting()
}

fn selection_run(event: &UseBlockEvent, _env: &GateEnv<'_>, managers: &mut ManagerSet<'_>) {
    managers.selection.select_block(event.hit.pos, None);
}

/// Block kind the held item would place, if any.
fn placeable_kind(event: &UseBlockEvent, env: &GateEnv<'_>) -> Option<BlockKind> {
    env.items().block_kind_for_item(event.held_item?)
}

// ============================================================================
// Router
// ============================================================================

/// Routes use events to overlay subsystems once the mode gate admits them.
///
/// The router is stateless: every verdict is a pure function of the session
/// state, the manager-reported sub-conditions, and the event itself. All
/// state transitions happen inside the managers the matched route calls.
pub struct OverlayRouter;

impl OverlayRouter {
    /// Route names in evaluation order.
    pub fn route_names() -> impl Iterator<Item = &'static str> {
        ROUTES.iter().map(|route| route.name)
    }
}

impl UseBlockHandler for OverlayRouter {
    fn handle(
        &self,
        event: &UseBlockEvent,
        env: &GateEnv<'_>,
        managers: &mut ManagerSet<'_>,
    ) -> EventVerdict {
        // Mode gate: overlay routing only applies to a client-local world
        // while the session is in overlay mode.
        if !env.world().is_client_local() || !env.session().in_overlay_mode() {
            return EventVerdict::Pass;
        }
        for route in ROUTES {
            if (route.applies)(event, env, managers) {
                (route.run)(event, env, managers);
                return EventVerdict::Success;
            }
        }
        EventVerdict::Pass
    }
}
