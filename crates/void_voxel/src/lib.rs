//! Void Voxel - Grid Primitives
//!
//! This crate provides the small value types shared by everything that
//! reads or mutates the voxel grid.
//!
//! # Features
//!
//! - Integer cell coordinates with face-relative neighbours
//! - The six block faces
//! - Block ids and block states carrying orientation data
//! - Grid write flags
//!
//! # Example
//!
//! ```ignore
//! use void_voxel::prelude::*;
//!
//! let cell = CellPos::new(10, 64, -3);
//! let above = cell.offset(BlockFace::Up);
//!
//! let state = BlockState::wall_sign(BlockFace::North);
//! assert!(state.id.is_sign());
//! ```

pub mod block;
pub mod cell;
pub mod face;

pub mod prelude {
    pub use crate::block::{BlockId, BlockState, Orientation, UpdateFlags};
    pub use crate::cell::CellPos;
    pub use crate::face::BlockFace;
}

pub use prelude::*;
