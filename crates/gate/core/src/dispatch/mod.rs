//! Event interception pipeline.
//!
//! The [`EventDispatcher`] runs the handlers registered for each event kind
//! in a fixed order and short-circuits on the first non-`Pass` verdict. The
//! canonical chains (guard predicates plus the overlay router) are assembled
//! by [`EventDispatcher::standard`]; registration order is decided at startup
//! and is part of the gate's contract.

mod guards;
mod router;

pub use guards::{BlueprintInteractionGuard, EditableAreaGuard, ProtectedBlockGuard};
pub use router::OverlayRouter;

use crate::env::GateEnv;
use crate::event::{AttackBlockEvent, EventVerdict, UseBlockEvent};
use crate::handlers::ManagerSet;

/// A stage in the use-block chain.
pub trait UseBlockHandler {
    fn handle(
        &self,
        event: &UseBlockEvent,
        env: &GateEnv<'_>,
        managers: &mut ManagerSet<'_>,
    ) -> EventVerdict;
}

/// A stage in the attack-block chain.
///
/// Attack stages are pure guards: they judge the event against the oracles
/// and never touch the managers.
pub trait AttackBlockHandler {
    fn handle(&self, event: &AttackBlockEvent, env: &GateEnv<'_>) -> EventVerdict;
}

/// Ordered handler chains for the two interaction event kinds.
pub struct EventDispatcher {
    use_chain: Vec<Box<dyn UseBlockHandler>>,
    attack_chain: Vec<Box<dyn AttackBlockHandler>>,
}

impl EventDispatcher {
    /// Creates a dispatcher with empty chains.
    pub fn new() -> Self {
        Self {
            use_chain: Vec::new(),
            attack_chain: Vec::new(),
        }
    }

    /// Builds the canonical chains: blueprint interaction guard then overlay
    /// router on the use path; editable-area then protected-block guard on
    /// the attack path.
    pub fn standard() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register_use(Box::new(BlueprintInteractionGuard));
        dispatcher.register_use(Box::new(OverlayRouter));
        dispatcher.register_attack(Box::new(EditableAreaGuard));
        dispatcher.register_attack(Box::new(ProtectedBlockGuard));
        dispatcher
    }

    /// Appends a use-path stage. Registration order is evaluation order.
    pub fn register_use(&mut self, handler: Box<dyn UseBlockHandler>) {
        self.use_chain.push(handler);
    }

    /// Appends an attack-path stage. Registration order is evaluation order.
    pub fn register_attack(&mut self, handler: Box<dyn AttackBlockHandler>) {
        self.attack_chain.push(handler);
    }

    pub fn use_stages(&self) -> usize {
        self.use_chain.len()
    }

    pub fn attack_stages(&self) -> usize {
        self.attack_chain.len()
    }

    /// Runs a use-block event through the chain. The first terminal verdict
    /// wins; an exhausted chain defers to default world behavior.
    pub fn on_use_block(
        &self,
        event: &UseBlockEvent,
        env: &GateEnv<'_>,
        managers: &mut ManagerSet<'_>,
    ) -> EventVerdict {
        for handler in &self.use_chain {
            let verdict = handler.handle(event, env, managers);
            if verdict.is_final() {
                return verdict;
            }
        }
        EventVerdict::Pass
    }

    /// Runs an attack-block event through the chain. The first terminal
    /// verdict wins; an exhausted chain defers to default world behavior.
    pub fn on_attack_block(&self, event: &AttackBlockEvent, env: &GateEnv<'_>) -> EventVerdict {
        for handler in &self.attack_chain {
            let verdict = handler.handle(event, env);
            if verdict.is_final() {
                return verdict;
            }
        }
        EventVerdict::Pass
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::standard()
    }
}
