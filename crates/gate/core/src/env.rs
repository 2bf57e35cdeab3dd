//! Traits describing the read-only context an event is judged against.
//!
//! Oracles expose world/block state, session mode, blueprint-cell membership,
//! and item lookups. The [`Env`] aggregate bundles them so the dispatch
//! pipeline can reach everything it needs without hard coupling to concrete
//! implementations.

use crate::state::OverlayState;
use crate::types::{BlockKind, BlockPos, BlueprintCell, ItemKind, PlayerId};

/// Read-only queries over the world the event happened in.
///
/// Every query is total: implementations answer from their current snapshot
/// and never fail.
pub trait WorldOracle {
    /// Whether this world is a restricted blueprint-editing world.
    fn is_blueprint_world(&self) -> bool;

    /// Whether this world is the local client simulation. The gate must stay
    /// inert in an authoritative server context.
    fn is_client_local(&self) -> bool;

    /// Kind of block currently occupying `pos`.
    fn block_kind(&self, pos: BlockPos) -> BlockKind;

    /// Whether a block may be placed directly at `pos`.
    fn can_place_at(&self, pos: BlockPos) -> bool;
}

/// Read-only view of the overlay session the acting player is in.
pub trait SessionOracle {
    /// Current high-level overlay mode.
    fn overlay_state(&self) -> OverlayState;

    /// Whether the session runs in overlay mode at all. When false, the gate
    /// defers every use event untouched.
    fn in_overlay_mode(&self) -> bool;
}

/// Per-player blueprint cell lookup.
pub trait CellOracle {
    /// The cell `player` may edit, or `None` if no cell is assigned. A player
    /// without a cell is outside every cell.
    fn personal_cell(&self, player: PlayerId) -> Option<BlueprintCell>;
}

/// Item to block-kind lookup for placement routing.
pub trait ItemOracle {
    /// The block kind `item` places, or `None` for non-placeable items.
    fn block_kind_for_item(&self, item: ItemKind) -> Option<BlockKind>;
}

/// Aggregates the read-only oracles required by guards and the router.
///
/// All four references are mandatory: collaborators are total from the gate's
/// perspective, so there is no "oracle missing" case to surface.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, W, S, C, I>
where
    W: WorldOracle + ?Sized,
    S: SessionOracle + ?Sized,
    C: CellOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    world: &'a W,
    session: &'a S,
    cells: &'a C,
    items: &'a I,
}

/// Trait-object form of [`Env`] used throughout the dispatch pipeline.
pub type GateEnv<'a> = Env<
    'a,
    dyn WorldOracle + 'a,
    dyn SessionOracle + 'a,
    dyn CellOracle + 'a,
    dyn ItemOracle + 'a,
>;

impl<'a, W, S, C, I> Env<'a, W, S, C, I>
where
    W: WorldOracle + ?Sized,
    S: SessionOracle + ?Sized,
    C: CellOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    pub fn new(world: &'a W, session: &'a S, cells: &'a C, items: &'a I) -> Self {
        Self {
            world,
            session,
            cells,
            items,
        }
    }

    pub fn world(&self) -> &'a W {
        self.world
    }

    pub fn session(&self) -> &'a S {
        self.session
    }

    pub fn cells(&self) -> &'a C {
        self.cells
    }

    pub fn items(&self) -> &'a I {
        self.items
    }
}

impl<'a, W, S, C, I> Env<'a, W, S, C, I>
where
    W: WorldOracle + 'a,
    S: SessionOracle + 'a,
    C: CellOracle + 'a,
    I: ItemOracle + 'a,
{
    /// Converts this environment into the trait-object based [`GateEnv`].
    pub fn as_gate_env(&self) -> GateEnv<'a> {
        Env::new(
            self.world as &dyn WorldOracle,
            self.session as &dyn SessionOracle,
            self.cells as &dyn CellOracle,
            self.items as &dyn ItemOracle,
        )
    }
}
