//! Combat target tracking.

use gate_core::{BlockFace, BlockHitResult, BlockPos, FightHandler, SelectionHandler};

/// Current combat target chosen by targeting clicks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatTarget {
    pub pos: BlockPos,
    pub face: BlockFace,
}

/// Client-side combat manager; while the overlay is in combat mode every
/// click re-targets.
#[derive(Debug, Default)]
pub struct FightManager {
    target: Option<CombatTarget>,
}

impl FightManager {
    pub fn target(&self) -> Option<CombatTarget> {
        self.target
    }

    pub fn clear_target(&mut self) {
        self.target = None;
    }
}

impl FightHandler for FightManager {
    fn set_target(&mut self, hit: &BlockHitResult, targeting: &dyn SelectionHandler) {
        self.target = Some(CombatTarget {
            pos: hit.pos,
            face: hit.face,
        });
        tracing::debug!(
            pos = %hit.pos,
            during_selection = targeting.is_selecting(),
            "combat target set"
        );
    }
}
