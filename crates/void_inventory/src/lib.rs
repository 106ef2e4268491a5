//! Void Inventory - Items Used Against the World
//!
//! This crate provides the item stacks a player holds when interacting
//! with the grid. Inventory slot bookkeeping belongs to the host.
//!
//! # Features
//!
//! - Item definitions with max stack sizes
//! - Item stacks with instance data
//! - Block-entity tags carried by placeable items
//! - The built-in sign item
//!
//! # Example
//!
//! ```ignore
//! use void_inventory::prelude::*;
//!
//! let mut stack = sign_item().stack(16);
//! stack.consume_one();
//! assert_eq!(stack.quantity, 15);
//! ```

pub mod item;
pub mod sign;

pub mod prelude {
    pub use crate::item::{ItemDefinition, ItemProperty, ItemStack, BLOCK_ENTITY_TAG};
    pub use crate::sign::{sign_item, SIGN_ITEM_ID, SIGN_MAX_STACK};
}

pub use prelude::*;
