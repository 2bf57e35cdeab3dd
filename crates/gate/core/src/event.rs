//! Interaction events delivered to the gate and the verdicts it returns.

use crate::types::{BlockFace, BlockHitResult, BlockPos, Hand, ItemKind, PlayerId};

/// Outcome of running an event through a handler chain.
///
/// `Pass` defers to the next handler, or to default world behavior once the
/// chain is exhausted. `Success` and `Fail` are terminal: the event is fully
/// handled and default world behavior must not run. `Fail` additionally
/// reports the action as disallowed, which the host uses to suppress
/// block-breaking feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub enum EventVerdict {
    Pass,
    Success,
    Fail,
}

impl EventVerdict {
    /// Whether this verdict defers to the next handler.
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Whether this verdict terminates the chain.
    pub const fn is_final(self) -> bool {
        !self.is_pass()
    }
}

/// A "use" interaction on a block (right-click style).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseBlockEvent {
    pub player: PlayerId,
    pub hand: Hand,
    /// Item currently held in `hand`, if any.
    pub held_item: Option<ItemKind>,
    pub hit: BlockHitResult,
}

impl UseBlockEvent {
    pub const fn new(
        player: PlayerId,
        hand: Hand,
        held_item: Option<ItemKind>,
        hit: BlockHitResult,
    ) -> Self {
        Self {
            player,
            hand,
            held_item,
            hit,
        }
    }
}

/// An "attack" interaction on a block (left-click style).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackBlockEvent {
    pub player: PlayerId,
    pub hand: Hand,
    pub pos: BlockPos,
    pub face: BlockFace,
}

impl AttackBlockEvent {
    pub const fn new(player: PlayerId, hand: Hand, pos: BlockPos, face: BlockFace) -> Self {
        Self {
            player,
            hand,
            pos,
            face,
        }
    }
}
