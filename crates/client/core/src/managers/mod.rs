//! Concrete client-side managers behind the gate's capability traits.
mod areas;
mod blueprint;
mod buildings;
mod fight;
mod selection;

pub use areas::{AreaId, AreaMarker, AreasManager};
pub use blueprint::{BlueprintManager, BuildRequest, StagedStructure};
pub use buildings::{Building, BuildingId, BuildingsManager, ScreenRequest};
pub use fight::{CombatTarget, FightManager};
pub use selection::{BlockPick, SelectionManager};
