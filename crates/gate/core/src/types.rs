//! Voxel-world primitives shared between the gate and its collaborators.

use std::fmt;

/// Unique identifier for a player session interacting with the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Reserved identifier for the locally controlled player.
    pub const LOCAL: Self = Self(0);
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::LOCAL
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Discrete block position expressed in world coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the neighboring position one step along `face`.
    pub const fn offset(self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.normal();
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl Default for BlockPos {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Face of a block struck by an interaction ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockFace {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl BlockFace {
    /// Unit normal of this face in block coordinates (y points up, north is
    /// negative z).
    pub const fn normal(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }
}

/// Hand used for an interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hand {
    #[default]
    Main,
    Off,
}

/// Kind of block occupying a world position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    #[default]
    Air,
    Stone,
    Dirt,
    Grass,
    Planks,
    /// Structural marker anchoring a constructed building. Never destructible
    /// through the interaction path.
    Building,
    /// Interaction terminal for configuring a building. Always usable, even
    /// under blueprint-world restrictions.
    BuildingConfiguration,
}

impl BlockKind {
    /// Whether a placement may overwrite this kind in place.
    pub const fn is_replaceable(self) -> bool {
        matches!(self, Self::Air | Self::Grass)
    }
}

/// Kind of item a player can hold in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Stone,
    Dirt,
    Planks,
    Sword,
    Shovel,
    Spyglass,
}

/// Detailed result of an interaction ray hitting a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockHitResult {
    /// Position of the struck block.
    pub pos: BlockPos,
    /// Face the ray entered through.
    pub face: BlockFace,
}

impl BlockHitResult {
    pub const fn new(pos: BlockPos, face: BlockFace) -> Self {
        Self { pos, face }
    }
}

/// Axis-aligned block region a player may edit while in a blueprint world.
///
/// Corners are inclusive on every axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlueprintCell {
    min: BlockPos,
    max: BlockPos,
}

impl BlueprintCell {
    /// Creates a cell spanning two opposite corners, given in any order.
    pub fn new(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: BlockPos::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: BlockPos::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    pub const fn min(&self) -> BlockPos {
        self.min
    }

    pub const fn max(&self) -> BlockPos {
        self.max
    }

    /// Whether `pos` lies inside the cell.
    pub fn contains(&self, pos: BlockPos) -> bool {
        (self.min.x..=self.max.x).contains(&pos.x)
            && (self.min.y..=self.max.y).contains(&pos.y)
            && (self.min.z..=self.max.z).contains(&pos.z)
    }
}
