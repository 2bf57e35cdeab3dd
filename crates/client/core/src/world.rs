//! In-memory block snapshot backing the world oracle on the client.

use std::collections::HashMap;

use gate_core::{BlockKind, BlockPos, WorldOracle};

/// Client-side view of the world the gate consults per event.
///
/// The host client keeps this synchronized with the simulation it renders;
/// the gate itself never mutates it. Unset positions read as air.
#[derive(Clone, Debug)]
pub struct ClientWorld {
    blocks: HashMap<BlockPos, BlockKind>,
    blueprint_world: bool,
    client_local: bool,
}

impl ClientWorld {
    /// Creates an empty client-local world of the given kind.
    pub fn new(blueprint_world: bool) -> Self {
        Self {
            blocks: HashMap::new(),
            blueprint_world,
            client_local: true,
        }
    }

    /// Marks this view as an authoritative (non-client) context. The gate
    /// stays inert against such a world.
    pub fn set_client_local(&mut self, client_local: bool) {
        self.client_local = client_local;
    }

    /// Records the block at `pos`. Setting air clears the entry.
    pub fn set_block(&mut self, pos: BlockPos, kind: BlockKind) {
        if kind == BlockKind::Air {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, kind);
        }
    }
}

impl Default for ClientWorld {
    fn default() -> Self {
        Self::new(false)
    }
}

impl WorldOracle for ClientWorld {
    fn is_blueprint_world(&self) -> bool {
        self.blueprint_world
    }

    fn is_client_local(&self) -> bool {
        self.client_local
    }

    fn block_kind(&self, pos: BlockPos) -> BlockKind {
        self.blocks.get(&pos).copied().unwrap_or_default()
    }

    fn can_place_at(&self, pos: BlockPos) -> bool {
        self.block_kind(pos).is_replaceable()
    }
}
