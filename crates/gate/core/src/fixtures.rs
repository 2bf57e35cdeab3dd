//! In-memory fakes shared by the dispatch pipeline tests.

use std::collections::HashMap;

use crate::env::{CellOracle, Env, GateEnv, ItemOracle, SessionOracle, WorldOracle};
use crate::handlers::{
    AreasHandler, BlueprintHandler, BuildingsHandler, FightHandler, ManagerSet, SelectionHandler,
};
use crate::state::OverlayState;
use crate::types::{BlockHitResult, BlockKind, BlockPos, BlueprintCell, ItemKind, PlayerId};

#[derive(Default)]
pub struct FakeWorld {
    pub blueprint_world: bool,
    pub remote: bool,
    pub blocks: HashMap<BlockPos, BlockKind>,
}

impl WorldOracle for FakeWorld {
    fn is_blueprint_world(&self) -> bool {
        self.blueprint_world
    }

    fn is_client_local(&self) -> bool {
        !self.remote
    }

    fn block_kind(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    fn can_place_at(&self, pos: BlockPos) -> bool {
        self.block_kind(pos).is_replaceable()
    }
}

pub struct FakeSession {
    pub state: OverlayState,
    pub overlay_mode: bool,
}

impl Default for FakeSession {
    fn default() -> Self {
        Self {
            state: OverlayState::None,
            overlay_mode: true,
        }
    }
}

impl SessionOracle for FakeSession {
    fn overlay_state(&self) -> OverlayState {
        self.state
    }

    fn in_overlay_mode(&self) -> bool {
        self.overlay_mode
    }
}

#[derive(Default)]
pub struct FakeCells {
    pub cells: HashMap<PlayerId, BlueprintCell>,
}

impl CellOracle for FakeCells {
    fn personal_cell(&self, player: PlayerId) -> Option<BlueprintCell> {
        self.cells.get(&player).copied()
    }
}

#[derive(Default)]
pub struct FakeItems {
    pub map: HashMap<ItemKind, BlockKind>,
}

impl ItemOracle for FakeItems {
    fn block_kind_for_item(&self, item: ItemKind) -> Option<BlockKind> {
        self.map.get(&item).copied()
    }
}

pub fn env<'a>(
    world: &'a FakeWorld,
    session: &'a FakeSession,
    cells: &'a FakeCells,
    items: &'a FakeItems,
) -> GateEnv<'a> {
    Env::new(world, session, cells, items)
}

#[derive(Default)]
pub struct FakeFight {
    pub set_target_calls: usize,
    pub last_hit: Option<BlockHitResult>,
}

impl FightHandler for FakeFight {
    fn set_target(&mut self, hit: &BlockHitResult, _targeting: &dyn SelectionHandler) {
        self.set_target_calls += 1;
        self.last_hit = Some(*hit);
    }
}

#[derive(Default)]
pub struct FakeAreas {
    pub selecting: bool,
    pub reset_calls: usize,
    pub remove_hovered_calls: usize,
}

impl AreasHandler for FakeAreas {
    fn is_selecting(&self) -> bool {
        self.selecting
    }

    fn reset_selection(&mut self) {
        self.reset_calls += 1;
    }

    fn remove_hovered(&mut self) {
        self.remove_hovered_calls += 1;
    }
}

#[derive(Default)]
pub struct FakeBlueprint {
    pub selecting: bool,
    pub build_calls: usize,
}

impl BlueprintHandler for FakeBlueprint {
    fn is_selecting(&self) -> bool {
        self.selecting
    }

    fn build_current_structure(&mut self) {
        self.build_calls += 1;
    }
}

#[derive(Default)]
pub struct FakeBuildings {
    pub hovered: bool,
    pub open_screen_calls: usize,
    pub last_player: Option<PlayerId>,
}

impl BuildingsHandler for FakeBuildings {
    fn is_building_hovered(&self) -> bool {
        self.hovered
    }

    fn open_building_screen(&mut self, player: PlayerId) {
        self.open_screen_calls += 1;
        self.last_player = Some(player);
    }
}

#[derive(Default)]
pub struct FakeSelection {
    pub selecting: bool,
    pub picks: Vec<(BlockPos, Option<BlockKind>)>,
}

impl SelectionHandler for FakeSelection {
    fn is_selecting(&self) -> bool {
        self.selecting
    }

    fn select_block(&mut self, pos: BlockPos, kind: Option<BlockKind>) {
        self.picks.push((pos, kind));
    }
}

/// All five counting managers, viewable as a [`ManagerSet`].
#[derive(Default)]
pub struct FakeManagers {
    pub fight: FakeFight,
    pub areas: FakeAreas,
    pub blueprint: FakeBlueprint,
    pub buildings: FakeBuildings,
    pub selection: FakeSelection,
}

impl FakeManagers {
    pub fn set(&mut self) -> ManagerSet<'_> {
        ManagerSet::new(
            &mut self.fight,
            &mut self.areas,
            &mut self.blueprint,
            &mut self.buildings,
            &mut self.selection,
        )
    }

    /// Total number of side effects observed across every manager.
    pub fn total_calls(&self) -> usize {
        self.fight.set_target_calls
            + self.areas.reset_calls
            + self.areas.remove_hovered_calls
            + self.blueprint.build_calls
            + self.buildings.open_screen_calls
            + self.selection.picks.len()
    }
}
