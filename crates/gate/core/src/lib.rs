//! Decision core for the voxel-overlay interaction gate.
//!
//! `gate-core` defines the canonical event-routing rules (guard predicates,
//! the mode gate, the overlay router, and the dispatcher that chains them)
//! and exposes pure APIs consumed by the client crates. Every use-block and
//! attack-block event flows through [`EventDispatcher`]; collaborating
//! subsystems are reached only through the oracle and handler traits
//! re-exported here.
pub mod dispatch;
pub mod env;
pub mod event;
pub mod handlers;
pub mod state;
pub mod types;

pub use dispatch::{
    AttackBlockHandler, BlueprintInteractionGuard, EditableAreaGuard, EventDispatcher,
    OverlayRouter, ProtectedBlockGuard, UseBlockHandler,
};
pub use env::{CellOracle, Env, GateEnv, ItemOracle, SessionOracle, WorldOracle};
pub use event::{AttackBlockEvent, EventVerdict, UseBlockEvent};
pub use handlers::{
    AreasHandler, BlueprintHandler, BuildingsHandler, FightHandler, ManagerSet, SelectionHandler,
};
pub use state::OverlayState;
pub use types::{
    BlockFace, BlockHitResult, BlockKind, BlockPos, BlueprintCell, Hand, ItemKind, PlayerId,
};

#[cfg(test)]
pub(crate) mod fixtures;
