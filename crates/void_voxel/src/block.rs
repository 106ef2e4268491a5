//! Block ids and block states

use crate::face::BlockFace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u16);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const DIRT: BlockId = BlockId(2);
    pub const PLANKS: BlockId = BlockId(3);
    pub const GLASS: BlockId = BlockId(4);
    pub const TALL_GRASS: BlockId = BlockId(5);
    pub const WATER: BlockId = BlockId(6);
    /// Free-standing sign on a post
    pub const SIGN_POST: BlockId = BlockId(63);
    /// Sign mounted against the side of a block
    pub const WALL_SIGN: BlockId = BlockId(68);

    /// Create a block id from its raw value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }

    /// Either sign variant
    pub fn is_sign(self) -> bool {
        self == Self::SIGN_POST || self == Self::WALL_SIGN
    }

    /// Whether the block fills its cell and can hold something on its faces
    pub fn is_solid(self) -> bool {
        matches!(self, Self::STONE | Self::DIRT | Self::PLANKS | Self::GLASS)
    }

    /// Whether placing into this cell may overwrite the current block
    pub fn is_replaceable(self) -> bool {
        matches!(self, Self::AIR | Self::TALL_GRASS | Self::WATER)
    }
}

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BlockId::AIR => write!(f, "Air"),
            BlockId::STONE => write!(f, "Stone"),
            BlockId::DIRT => write!(f, "Dirt"),
            BlockId::PLANKS => write!(f, "Planks"),
            BlockId::GLASS => write!(f, "Glass"),
            BlockId::TALL_GRASS => write!(f, "Tall Grass"),
            BlockId::WATER => write!(f, "Water"),
            BlockId::SIGN_POST => write!(f, "Sign Post"),
            BlockId::WALL_SIGN => write!(f, "Wall Sign"),
            _ => write!(f, "Block({})", self.0),
        }
    }
}

/// Orientation or metadata carried by a block state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// No orientation data
    #[default]
    None,
    /// 16-step rotation index (0..=15), used by standing blocks
    Rotation(u8),
    /// Facing direction, used by wall-mounted blocks
    Facing(BlockFace),
}

/// Block type plus orientation at one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockState {
    pub id: BlockId,
    pub orientation: Orientation,
}

impl BlockState {
    pub const AIR: BlockState = BlockState {
        id: BlockId::AIR,
        orientation: Orientation::None,
    };

    /// A state with no orientation data
    pub const fn of(id: BlockId) -> Self {
        Self {
            id,
            orientation: Orientation::None,
        }
    }

    /// A standing sign; the rotation is masked to 0..=15
    pub fn sign_post(rotation: u8) -> Self {
        Self {
            id: BlockId::SIGN_POST,
            orientation: Orientation::Rotation(rotation & 15),
        }
    }

    /// A wall sign facing `facing`
    pub fn wall_sign(facing: BlockFace) -> Self {
        Self {
            id: BlockId::WALL_SIGN,
            orientation: Orientation::Facing(facing),
        }
    }

    /// Set orientation (builder pattern)
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Rotation index, if this state carries one
    pub fn rotation(&self) -> Option<u8> {
        match self.orientation {
            Orientation::Rotation(r) => Some(r),
            _ => None,
        }
    }

    /// Facing direction, if this state carries one
    pub fn facing(&self) -> Option<BlockFace> {
        match self.orientation {
            Orientation::Facing(face) => Some(face),
            _ => None,
        }
    }
}

/// Flags passed along with a grid write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateFlags(pub u8);

impl UpdateFlags {
    pub const NONE: UpdateFlags = UpdateFlags(0);
    /// Notify neighbouring cells of the change
    pub const NOTIFY_NEIGHBORS: UpdateFlags = UpdateFlags(1);
    /// Send the change to clients
    pub const SEND_TO_CLIENTS: UpdateFlags = UpdateFlags(2);
    /// Neighbours and clients
    pub const DEFAULT: UpdateFlags = UpdateFlags(3);

    /// Whether every bit of `other` is set
    pub fn contains(self, other: UpdateFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for UpdateFlags {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::BitOr for UpdateFlags {
    type Output = UpdateFlags;

    fn bitor(self, rhs: Self) -> Self::Output {
        UpdateFlags(self.0 | rhs.0)
    }
}
