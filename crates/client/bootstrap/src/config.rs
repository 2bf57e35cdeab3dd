//! Session configuration structures and loaders.
use std::env;

use gate_core::{BlockPos, BlueprintCell, OverlayState};

/// Configuration required to bootstrap a gate session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Overlay state the session starts in.
    pub overlay_state: OverlayState,
    /// Whether the session starts in overlay mode.
    pub overlay_mode: bool,
    /// Whether the world is a restricted blueprint world.
    pub blueprint_world: bool,
    /// Dimensions of the cell granted to the local player in a blueprint
    /// world.
    pub cell: CellConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            overlay_state: OverlayState::default(),
            overlay_mode: true,
            blueprint_world: false,
            cell: CellConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `OVERLAY_STATE` - initial overlay state, by variant name (default: `None`)
    /// - `OVERLAY_MODE` - whether overlay mode starts enabled (default: true)
    /// - `BLUEPRINT_WORLD` - whether the world is a blueprint world (default: false)
    /// - `CELL_HALF_EXTENT` - horizontal half-extent of the personal cell (default: 8)
    /// - `CELL_HEIGHT` - height of the personal cell (default: 16)
    ///
    /// Unset or unparsable variables keep their defaults; loading never
    /// fails.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(state) = read_env::<OverlayState>("OVERLAY_STATE") {
            config.overlay_state = state;
        }
        if let Some(enabled) = read_env::<bool>("OVERLAY_MODE") {
            config.overlay_mode = enabled;
        }
        if let Some(blueprint) = read_env::<bool>("BLUEPRINT_WORLD") {
            config.blueprint_world = blueprint;
        }
        if let Some(half_extent) = read_env::<i32>("CELL_HALF_EXTENT") {
            config.cell.half_extent = half_extent.max(0);
        }
        if let Some(height) = read_env::<i32>("CELL_HEIGHT") {
            config.cell.height = height.max(1);
        }

        config
    }
}

/// Dimensions of a personal blueprint cell.
#[derive(Clone, Copy, Debug)]
pub struct CellConfig {
    pub half_extent: i32,
    pub height: i32,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            half_extent: 8,
            height: 16,
        }
    }
}

impl CellConfig {
    /// Cell centered on `anchor` horizontally, extending up from its base.
    pub fn cell_at(&self, anchor: BlockPos) -> BlueprintCell {
        BlueprintCell::new(
            BlockPos::new(anchor.x - self.half_extent, anchor.y, anchor.z - self.half_extent),
            BlockPos::new(
                anchor.x + self.half_extent,
                anchor.y + self.height - 1,
                anchor.z + self.half_extent,
            ),
        )
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
