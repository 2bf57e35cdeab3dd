//! Assembles oracles, managers, and the dispatcher into a gate session.

use client_core::{
    AreasManager, BlueprintManager, BuildingsManager, ClientWorld, FightManager, ItemRegistry,
    PersonalCells, SelectionManager, SessionContext,
};
use gate_core::{
    AttackBlockEvent, BlockPos, Env, EventDispatcher, EventVerdict, GateEnv, ManagerSet, PlayerId,
    UseBlockEvent,
};

use crate::config::SessionConfig;

/// Errors raised while assembling a session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The dispatcher has no use-path stages registered.
    #[error("dispatcher has no use-block stages")]
    EmptyUseChain,

    /// The dispatcher has no attack-path stages registered.
    #[error("dispatcher has no attack-block stages")]
    EmptyAttackChain,
}

/// Builder that assembles world, session, and manager state for the gate.
pub struct SessionBuilder {
    config: SessionConfig,
    dispatcher: EventDispatcher,
    world: Option<ClientWorld>,
    items: Option<ItemRegistry>,
}

impl SessionBuilder {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            dispatcher: EventDispatcher::standard(),
            world: None,
            items: None,
        }
    }

    /// Replaces the canonical dispatcher (custom stages, test chains).
    pub fn dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Provides a pre-populated world snapshot instead of an empty one.
    pub fn world(mut self, world: ClientWorld) -> Self {
        self.world = Some(world);
        self
    }

    /// Provides a custom item registry instead of the standard set.
    pub fn items(mut self, items: ItemRegistry) -> Self {
        self.items = Some(items);
        self
    }

    pub fn build(self) -> Result<GateSession, BuildError> {
        if self.dispatcher.use_stages() == 0 {
            return Err(BuildError::EmptyUseChain);
        }
        if self.dispatcher.attack_stages() == 0 {
            return Err(BuildError::EmptyAttackChain);
        }

        let world = self
            .world
            .unwrap_or_else(|| ClientWorld::new(self.config.blueprint_world));
        let mut cells = PersonalCells::default();
        if self.config.blueprint_world {
            cells.assign(PlayerId::LOCAL, self.config.cell.cell_at(BlockPos::ORIGIN));
        }
        let session = SessionContext::new(self.config.overlay_state, self.config.overlay_mode);
        let items = self.items.unwrap_or_default();

        tracing::debug!(state = %self.config.overlay_state, "gate session assembled");

        Ok(GateSession {
            dispatcher: self.dispatcher,
            world,
            cells,
            session,
            items,
            fight: FightManager::default(),
            areas: AreasManager::default(),
            blueprint: BlueprintManager::default(),
            buildings: BuildingsManager::default(),
            selection: SelectionManager::default(),
        })
    }
}

/// Fully wired gate session: the dispatcher plus every collaborator it
/// routes to.
///
/// Fields are public so host systems (and tests) drive and inspect the
/// collaborators directly; the gate itself only sees them through the
/// per-event borrows assembled in [`GateSession::use_block`] and
/// [`GateSession::attack_block`].
pub struct GateSession {
    dispatcher: EventDispatcher,
    pub world: ClientWorld,
    pub cells: PersonalCells,
    pub session: SessionContext,
    pub items: ItemRegistry,
    pub fight: FightManager,
    pub areas: AreasManager,
    pub blueprint: BlueprintManager,
    pub buildings: BuildingsManager,
    pub selection: SelectionManager,
}

impl GateSession {
    /// Runs a use-block event through the gate.
    pub fn use_block(&mut self, event: &UseBlockEvent) -> EventVerdict {
        let env: GateEnv<'_> = Env::new(&self.world, &self.session, &self.cells, &self.items);
        let mut managers = ManagerSet::new(
            &mut self.fight,
            &mut self.areas,
            &mut self.blueprint,
            &mut self.buildings,
            &mut self.selection,
        );
        self.dispatcher.on_use_block(event, &env, &mut managers)
    }

    /// Runs an attack-block event through the gate.
    pub fn attack_block(&mut self, event: &AttackBlockEvent) -> EventVerdict {
        let env: GateEnv<'_> = Env::new(&self.world, &self.session, &self.cells, &self.items);
        self.dispatcher.on_attack_block(event, &env)
    }
}
