//! Void Placement - Cancellable Sign Placement
//!
//! Turns a player's click with a sign item into a sign block, giving event
//! handlers one synchronous chance to veto it before the grid is touched.
//!
//! # Features
//!
//! - Support, permission and replaceability checks before any event
//! - Post rotation from player yaw or wall facing from the clicked face
//! - One cancellable `SignPlaceEvent` per placement, read-only to handlers
//! - Single-write commit, item consumption and placer notification
//! - Reentrancy guard per target cell
//!
//! # Example
//!
//! ```ignore
//! use void_placement::prelude::*;
//!
//! let placer = SignPlacer::new(world, events).with_config(PlacementConfig::default());
//! if placer.attempt_place(&player, &mut stack, clicked, BlockFace::Up, false) {
//!     // the sign is in the grid and the stack is one shorter
//! }
//! ```

pub mod config;
pub mod event;
pub mod placer;

pub mod prelude {
    pub use crate::config::{PlacementConfig, PlacementConfigError};
    pub use crate::event::{BlockSnapshot, SignPlaceEvent, SIGN_PLACE_EVENT};
    pub use crate::placer::{rotation_from_yaw, PlacementOutcome, SignPlacer};
}

pub use prelude::*;
