//! Client-session collaborators for the interaction gate.
//!
//! Houses the in-memory world snapshot, blueprint-cell table, session
//! context, item registry, and the five overlay managers the dispatcher
//! routes to. Everything here is session-lifetime state owned by the host
//! client; the gate reaches it only through the `gate-core` traits.
pub mod cells;
pub mod items;
pub mod managers;
pub mod session;
pub mod world;

pub use cells::PersonalCells;
pub use items::ItemRegistry;
pub use managers::{
    AreaId, AreaMarker, AreasManager, BlockPick, BlueprintManager, BuildRequest, Building,
    BuildingId, BuildingsManager, CombatTarget, FightManager, ScreenRequest, SelectionManager,
    StagedStructure,
};
pub use session::SessionContext;
pub use world::ClientWorld;
