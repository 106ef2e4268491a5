//! Void World - Grid Collaborators
//!
//! The interfaces game logic uses to query and mutate the voxel grid,
//! plus an in-memory grid that implements them.
//!
//! # Features
//!
//! - `WorldGrid` trait: block states, block entities, support and
//!   replaceability queries
//! - `BuildPermission` trait for build authorization
//! - `Actor` / `PlayerDirectory` traits for player identity and presence
//! - Block entities owned by the grid behind shared handles
//! - `MemoryWorld` reference grid
//!
//! # Example
//!
//! ```ignore
//! use void_world::prelude::*;
//!
//! let world = MemoryWorld::new("overworld");
//! world.set_block_state(cell, BlockState::sign_post(0), UpdateFlags::DEFAULT);
//! let entity = world.block_entity(cell).expect("sign entity");
//! ```

pub mod actor;
pub mod block_entity;
pub mod grid;
pub mod memory;

pub mod prelude {
    pub use crate::actor::{Actor, OnlinePlayers, PlayerDirectory, PlayerIdentity, SimplePlayer};
    pub use crate::block_entity::{
        BlockEntity, BlockEntityData, BlockEntityHandle, SignEntity, TextBoard, SIGN_LINES,
        SIGN_LINE_MAX_CHARS,
    };
    pub use crate::grid::{AllowAll, BuildPermission, WorldGrid};
    pub use crate::memory::{GridWrite, MemoryWorld};
}

pub use prelude::*;
