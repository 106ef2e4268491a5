//! Void Sign - Sign Facade
//!
//! A stable four-line text contract over the sign block entities the grid
//! owns, for both free-standing posts and wall-mounted signs.
//!
//! # Features
//!
//! - Rich and plain views of every line; the plain view is always derived
//! - Line normalization: exactly four lines, at most 15 characters each
//! - Attachment resolution for posts and wall signs
//! - Editability flag and owner identity
//!
//! # Example
//!
//! ```ignore
//! use void_sign::prelude::*;
//!
//! if let Some(sign) = Sign::resolve(&world, cell) {
//!     sign.set_text(&[Some("Welcome"), None, Some("to the"), Some("harbour")])?;
//!     let attached = sign.block_attached();
//! }
//! ```

pub mod facade;
pub mod lines;
pub mod mount;

use thiserror::Error;
use void_voxel::CellPos;

/// Sign facade errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    /// The cell holds no sign block entity
    #[error("No sign block entity at {cell}")]
    NotASign { cell: CellPos },
    /// The sign's block entity was removed after the facade was created
    #[error("Sign at {cell} no longer has a block entity")]
    Detached { cell: CellPos },
}

/// Result type for sign operations
pub type SignResult<T> = Result<T, SignError>;

pub mod prelude {
    pub use crate::facade::Sign;
    pub use crate::mount::{attached_cell, SignMount};
    pub use crate::{SignError, SignResult};
}

pub use prelude::*;
