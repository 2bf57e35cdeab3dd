//! Automation-area markers and the in-progress selection.

use gate_core::{AreasHandler, BlockPos};

/// Identifier of a placed area marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AreaId(pub u32);

/// Placed automation-area marker covering an inclusive block range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AreaMarker {
    pub id: AreaId,
    pub min: BlockPos,
    pub max: BlockPos,
}

/// Client-side area manager: one optional in-progress selection plus the
/// placed markers, at most one of which is hovered.
#[derive(Debug, Default)]
pub struct AreasManager {
    selection_start: Option<BlockPos>,
    markers: Vec<AreaMarker>,
    hovered: Option<AreaId>,
    next_id: u32,
}

impl AreasManager {
    /// Starts a new selection at `start`, replacing any previous one.
    pub fn begin_selection(&mut self, start: BlockPos) {
        self.selection_start = Some(start);
    }

    /// Completes the in-progress selection into a placed marker.
    pub fn finish_selection(&mut self, end: BlockPos) -> Option<AreaId> {
        let start = self.selection_start.take()?;
        let id = AreaId(self.next_id);
        self.next_id += 1;
        self.markers.push(AreaMarker {
            id,
            min: BlockPos::new(start.x.min(end.x), start.y.min(end.y), start.z.min(end.z)),
            max: BlockPos::new(start.x.max(end.x), start.y.max(end.y), start.z.max(end.z)),
        });
        tracing::debug!(id = id.0, "area marker placed");
        Some(id)
    }

    /// Updates which marker the cursor is over.
    pub fn set_hovered(&mut self, id: Option<AreaId>) {
        self.hovered = id;
    }

    pub fn markers(&self) -> &[AreaMarker] {
        &self.markers
    }
}

impl AreasHandler for AreasManager {
    fn is_selecting(&self) -> bool {
        self.selection_start.is_some()
    }

    fn reset_selection(&mut self) {
        if self.selection_start.take().is_some() {
            tracing::debug!("area selection cancelled");
        }
    }

    fn remove_hovered(&mut self) {
        let Some(id) = self.hovered.take() else {
            return;
        };
        self.markers.retain(|marker| marker.id != id);
        tracing::debug!(id = id.0, "hovered area marker removed");
    }
}
