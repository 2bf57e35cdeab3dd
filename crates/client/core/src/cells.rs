//! Per-player blueprint cell assignments.

use std::collections::HashMap;

use gate_core::{BlueprintCell, CellOracle, PlayerId};

/// Table of editable cells granted to players in a blueprint world.
#[derive(Clone, Debug, Default)]
pub struct PersonalCells {
    cells: HashMap<PlayerId, BlueprintCell>,
}

impl PersonalCells {
    /// Grants `player` an editable cell, replacing any previous grant.
    pub fn assign(&mut self, player: PlayerId, cell: BlueprintCell) {
        tracing::debug!(%player, min = %cell.min(), max = %cell.max(), "blueprint cell assigned");
        self.cells.insert(player, cell);
    }

    /// Withdraws `player`'s cell, leaving them outside every cell.
    pub fn revoke(&mut self, player: PlayerId) {
        self.cells.remove(&player);
    }
}

impl CellOracle for PersonalCells {
    fn personal_cell(&self, player: PlayerId) -> Option<BlueprintCell> {
        self.cells.get(&player).copied()
    }
}
