//! Stateless guard predicates protecting restricted worlds and blocks.

use crate::dispatch::{AttackBlockHandler, UseBlockHandler};
use crate::env::GateEnv;
use crate::event::{AttackBlockEvent, EventVerdict, UseBlockEvent};
use crate::handlers::ManagerSet;
use crate::types::BlockKind;

/// Blocks attacks outside the acting player's blueprint cell.
///
/// Inert outside blueprint worlds. A player with no assigned cell is outside
/// every cell.
pub struct EditableAreaGuard;

impl AttackBlockHandler for EditableAreaGuard {
    fn handle(&self, event: &AttackBlockEvent, env: &GateEnv<'_>) -> EventVerdict {
        if !env.world().is_blueprint_world() {
            return EventVerdict::Pass;
        }
        match env.cells().personal_cell(event.player) {
            Some(cell) if cell.contains(event.pos) => EventVerdict::Pass,
            _ => EventVerdict::Fail,
        }
    }
}

/// Forbids destruction of structural building blocks, in every world kind.
pub struct ProtectedBlockGuard;

impl AttackBlockHandler for ProtectedBlockGuard {
    fn handle(&self, event: &AttackBlockEvent, env: &GateEnv<'_>) -> EventVerdict {
        if env.world().block_kind(event.pos) == BlockKind::Building {
            EventVerdict::Fail
        } else {
            EventVerdict::Pass
        }
    }
}

/// Restricts use interactions in a blueprint world to the player's own cell.
///
/// Configuration blocks are exempt: they stay interactable anywhere so the
/// player can always reach the blueprint controls.
pub struct BlueprintInteractionGuard;

impl UseBlockHandler for BlueprintInteractionGuard {
    fn handle(
        &self,
        event: &UseBlockEvent,
        env: &GateEnv<'_>,
        _managers: &mut ManagerSet<'_>,
    ) -> EventVerdict {
        if !env.world().is_blueprint_world()
            || env.world().block_kind(event.hit.pos) == BlockKind::BuildingConfiguration
        {
            return EventVerdict::Pass;
        }
        match env.cells().personal_cell(event.player) {
            Some(cell) if cell.contains(event.hit.pos) => EventVerdict::Pass,
            _ => EventVerdict::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{FakeCells, FakeItems, FakeManagers, FakeSession, FakeWorld, env};
    use crate::types::{BlockFace, BlockHitResult, BlockPos, BlueprintCell, Hand, PlayerId};

    fn cell_around_origin() -> BlueprintCell {
        BlueprintCell::new(BlockPos::new(-4, 0, -4), BlockPos::new(4, 8, 4))
    }

    fn attack_at(pos: BlockPos) -> AttackBlockEvent {
        AttackBlockEvent::new(PlayerId::LOCAL, Hand::Main, pos, BlockFace::Up)
    }

    fn use_at(pos: BlockPos) -> UseBlockEvent {
        UseBlockEvent::new(
            PlayerId::LOCAL,
            Hand::Main,
            None,
            BlockHitResult::new(pos, BlockFace::Up),
        )
    }

    #[test]
    fn attack_outside_cell_in_blueprint_world_is_forbidden() {
        let world = FakeWorld {
            blueprint_world: true,
            ..Default::default()
        };
        let mut cells = FakeCells::default();
        cells.cells.insert(PlayerId::LOCAL, cell_around_origin());
        let session = FakeSession::default();
        let items = FakeItems::default();

        let verdict = EditableAreaGuard.handle(
            &attack_at(BlockPos::new(10, 0, 0)),
            &env(&world, &session, &cells, &items),
        );
        assert_eq!(verdict, EventVerdict::Fail);
    }

    #[test]
    fn attack_inside_cell_in_blueprint_world_passes() {
        let world = FakeWorld {
            blueprint_world: true,
            ..Default::default()
        };
        let mut cells = FakeCells::default();
        cells.cells.insert(PlayerId::LOCAL, cell_around_origin());
        let session = FakeSession::default();
        let items = FakeItems::default();

        let verdict = EditableAreaGuard.handle(
            &attack_at(BlockPos::new(2, 1, -3)),
            &env(&world, &session, &cells, &items),
        );
        assert_eq!(verdict, EventVerdict::Pass);
    }

    #[test]
    fn attack_guard_is_inert_outside_blueprint_worlds() {
        // No cell assigned at all: still passes, cell membership is not
        // consulted in a normal world.
        let world = FakeWorld::default();
        let session = FakeSession::default();
        let cells = FakeCells::default();
        let items = FakeItems::default();

        let verdict = EditableAreaGuard.handle(
            &attack_at(BlockPos::new(100, 0, 100)),
            &env(&world, &session, &cells, &items),
        );
        assert_eq!(verdict, EventVerdict::Pass);
    }

    #[test]
    fn attack_without_assigned_cell_is_forbidden_in_blueprint_world() {
        let world = FakeWorld {
            blueprint_world: true,
            ..Default::default()
        };
        let session = FakeSession::default();
        let cells = FakeCells::default();
        let items = FakeItems::default();

        let verdict = EditableAreaGuard.handle(
            &attack_at(BlockPos::ORIGIN),
            &env(&world, &session, &cells, &items),
        );
        assert_eq!(verdict, EventVerdict::Fail);
    }

    #[test]
    fn attacking_a_building_block_is_forbidden_in_any_world() {
        for blueprint_world in [false, true] {
            let mut world = FakeWorld {
                blueprint_world,
                ..Default::default()
            };
            world.blocks.insert(BlockPos::ORIGIN, BlockKind::Building);
            let session = FakeSession::default();
            let cells = FakeCells::default();
            let items = FakeItems::default();

            let verdict = ProtectedBlockGuard.handle(
                &attack_at(BlockPos::ORIGIN),
                &env(&world, &session, &cells, &items),
            );
            assert_eq!(verdict, EventVerdict::Fail);
        }
    }

    #[test]
    fn attacking_ordinary_blocks_passes_the_protected_guard() {
        let mut world = FakeWorld::default();
        world.blocks.insert(BlockPos::ORIGIN, BlockKind::Stone);
        let session = FakeSession::default();
        let cells = FakeCells::default();
        let items = FakeItems::default();

        let verdict = ProtectedBlockGuard.handle(
            &attack_at(BlockPos::ORIGIN),
            &env(&world, &session, &cells, &items),
        );
        assert_eq!(verdict, EventVerdict::Pass);
    }

    #[test]
    fn use_outside_cell_in_blueprint_world_is_forbidden() {
        let world = FakeWorld {
            blueprint_world: true,
            ..Default::default()
        };
        let mut cells = FakeCells::default();
        cells.cells.insert(PlayerId::LOCAL, cell_around_origin());
        let session = FakeSession::default();
        let items = FakeItems::default();
        let mut managers = FakeManagers::default();

        let verdict = BlueprintInteractionGuard.handle(
            &use_at(BlockPos::new(7, 0, 0)),
            &env(&world, &session, &cells, &items),
            &mut managers.set(),
        );
        assert_eq!(verdict, EventVerdict::Fail);
    }

    #[test]
    fn configuration_block_is_usable_regardless_of_cell_membership() {
        let mut world = FakeWorld {
            blueprint_world: true,
            ..Default::default()
        };
        let outside = BlockPos::new(40, 0, 40);
        world
            .blocks
            .insert(outside, BlockKind::BuildingConfiguration);
        let session = FakeSession::default();
        let cells = FakeCells::default();
        let items = FakeItems::default();
        let mut managers = FakeManagers::default();

        let verdict = BlueprintInteractionGuard.handle(
            &use_at(outside),
            &env(&world, &session, &cells, &items),
            &mut managers.set(),
        );
        assert_eq!(verdict, EventVerdict::Pass);
    }

    #[test]
    fn use_guard_is_inert_outside_blueprint_worlds() {
        let world = FakeWorld::default();
        let session = FakeSession::default();
        let cells = FakeCells::default();
        let items = FakeItems::default();
        let mut managers = FakeManagers::default();

        let verdict = BlueprintInteractionGuard.handle(
            &use_at(BlockPos::new(7, 0, 0)),
            &env(&world, &session, &cells, &items),
            &mut managers.set(),
        );
        assert_eq!(verdict, EventVerdict::Pass);
    }

    #[test]
    fn use_inside_cell_in_blueprint_world_passes() {
        let world = FakeWorld {
            blueprint_world: true,
            ..Default::default()
        };
        let mut cells = FakeCells::default();
        cells.cells.insert(PlayerId::LOCAL, cell_around_origin());
        let session = FakeSession::default();
        let items = FakeItems::default();
        let mut managers = FakeManagers::default();

        let verdict = BlueprintInteractionGuard.handle(
            &use_at(BlockPos::new(0, 3, 0)),
            &env(&world, &session, &cells, &items),
            &mut managers.set(),
        );
        assert_eq!(verdict, EventVerdict::Pass);
    }
}
