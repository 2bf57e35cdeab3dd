//! Constructed buildings and inspection-screen requests.

use std::collections::HashMap;

use gate_core::{BlockPos, BuildingsHandler, PlayerId};

/// Identifier of a constructed building known to this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BuildingId(pub u32);

/// A constructed building the overlay tracks.
#[derive(Clone, Debug)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub origin: BlockPos,
}

/// Request to open a building's inspection screen, consumed by the GUI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenRequest {
    pub building: BuildingId,
    pub player: PlayerId,
}

/// Client-side buildings manager tracking hover state and screen requests.
#[derive(Debug, Default)]
pub struct BuildingsManager {
    buildings: HashMap<BuildingId, Building>,
    hovered: Option<BuildingId>,
    pending_screen: Option<ScreenRequest>,
    next_id: u32,
}

impl BuildingsManager {
    /// Registers a constructed building and returns its identifier.
    pub fn register(&mut self, name: impl Into<String>, origin: BlockPos) -> BuildingId {
        let id = BuildingId(self.next_id);
        self.next_id += 1;
        self.buildings.insert(
            id,
            Building {
                id,
                name: name.into(),
                origin,
            },
        );
        id
    }

    /// Updates which building the cursor is over. Unknown identifiers clear
    /// the hover instead of dangling.
    pub fn set_hovered(&mut self, id: Option<BuildingId>) {
        self.hovered = id.filter(|id| self.buildings.contains_key(id));
    }

    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        self.buildings.get(&id)
    }

    /// The GUI layer polls this once per frame.
    pub fn take_screen_request(&mut self) -> Option<ScreenRequest> {
        self.pending_screen.take()
    }
}

impl BuildingsHandler for BuildingsManager {
    fn is_building_hovered(&self) -> bool {
        self.hovered.is_some()
    }

    fn open_building_screen(&mut self, player: PlayerId) {
        let Some(id) = self.hovered else {
            return;
        };
        self.pending_screen = Some(ScreenRequest {
            building: id,
            player,
        });
        tracing::info!(building = id.0, %player, "building screen requested");
    }
}
