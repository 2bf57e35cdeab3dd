//! Blueprint staging and build requests.

use gate_core::{BlockPos, BlueprintHandler};

/// A blueprint structure staged for placement at its current anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StagedStructure {
    pub name: String,
    pub anchor: BlockPos,
}

/// A construction request recorded for the build pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildRequest {
    pub structure: String,
    pub anchor: BlockPos,
}

/// Client-side blueprint manager.
///
/// While a structure is staged the manager reports an active placement
/// session. Building records a request but keeps the stage, so repeated
/// clicks place repeated copies until the player cancels.
#[derive(Debug, Default)]
pub struct BlueprintManager {
    staged: Option<StagedStructure>,
    requests: Vec<BuildRequest>,
}

impl BlueprintManager {
    /// Stages `name` for placement at `anchor`.
    pub fn stage(&mut self, name: impl Into<String>, anchor: BlockPos) {
        let name = name.into();
        tracing::debug!(structure = %name, %anchor, "blueprint staged");
        self.staged = Some(StagedStructure { name, anchor });
    }

    /// Moves the staged structure's anchor as the cursor tracks the world.
    pub fn move_anchor(&mut self, anchor: BlockPos) {
        if let Some(staged) = &mut self.staged {
            staged.anchor = anchor;
        }
    }

    /// Drops the stage, ending the placement session.
    pub fn cancel(&mut self) {
        if self.staged.take().is_some() {
            tracing::debug!("blueprint placement cancelled");
        }
    }

    pub fn staged(&self) -> Option<&StagedStructure> {
        self.staged.as_ref()
    }

    pub fn requests(&self) -> &[BuildRequest] {
        &self.requests
    }

    /// Hands the recorded requests to the build pipeline.
    pub fn drain_requests(&mut self) -> Vec<BuildRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl BlueprintHandler for BlueprintManager {
    fn is_selecting(&self) -> bool {
        self.staged.is_some()
    }

    fn build_current_structure(&mut self) {
        let Some(staged) = &self.staged else {
            return;
        };
        self.requests.push(BuildRequest {
            structure: staged.name.clone(),
            anchor: staged.anchor,
        });
        tracing::info!(structure = %staged.name, anchor = %staged.anchor, "blueprint build requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_keeps_the_stage_for_repeat_placement() {
        let mut blueprint = BlueprintManager::default();
        blueprint.stage("workshop", BlockPos::new(3, 0, 3));

        blueprint.build_current_structure();
        blueprint.move_anchor(BlockPos::new(9, 0, 3));
        blueprint.build_current_structure();

        assert!(blueprint.is_selecting());
        let requests = blueprint.drain_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].anchor, BlockPos::new(3, 0, 3));
        assert_eq!(requests[1].anchor, BlockPos::new(9, 0, 3));
        assert!(blueprint.requests().is_empty());
    }

    #[test]
    fn cancel_ends_the_placement_session() {
        let mut blueprint = BlueprintManager::default();
        blueprint.stage("workshop", BlockPos::ORIGIN);
        blueprint.cancel();

        assert!(!blueprint.is_selecting());
        blueprint.build_current_structure();
        assert!(blueprint.requests().is_empty());
    }
}
