//! Free-form block selection sessions.

use gate_core::{BlockKind, BlockPos, SelectionHandler};

/// One recorded pick inside a selection session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockPick {
    pub pos: BlockPos,
    /// Block kind to place at `pos`, or `None` for a bare selection (dig,
    /// survey, task staging).
    pub kind: Option<BlockKind>,
}

/// Client-side selection manager staging dig/place tasks.
#[derive(Debug, Default)]
pub struct SelectionManager {
    selecting: bool,
    picks: Vec<BlockPick>,
}

impl SelectionManager {
    /// Opens a selection session; picks accumulate until the session ends.
    pub fn begin_session(&mut self) {
        self.selecting = true;
    }

    /// Ends the session and returns everything picked during it.
    pub fn end_session(&mut self) -> Vec<BlockPick> {
        self.selecting = false;
        std::mem::take(&mut self.picks)
    }

    pub fn picks(&self) -> &[BlockPick] {
        &self.picks
    }
}

impl SelectionHandler for SelectionManager {
    fn is_selecting(&self) -> bool {
        self.selecting
    }

    fn select_block(&mut self, pos: BlockPos, kind: Option<BlockKind>) {
        self.picks.push(BlockPick { pos, kind });
        tracing::debug!(%pos, ?kind, "block selected");
    }
}
