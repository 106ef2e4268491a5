//! Cell coordinates

use crate::face::BlockFace;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer position of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct CellPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CellPos {
    /// Create a new cell position
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The neighbouring cell across `face`
    pub fn offset(self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.delta();
        self.offset_by(dx, dy, dz)
    }

    /// Translate by an arbitrary delta
    pub fn offset_by(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z.wrapping_add(dz),
        }
    }

    /// The cell directly below
    pub fn below(self) -> Self {
        self.offset(BlockFace::Down)
    }

    /// The cell directly above
    pub fn above(self) -> Self {
        self.offset(BlockFace::Up)
    }
}

impl From<(i32, i32, i32)> for CellPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
