//! Void Text - Rich Text Values
//!
//! A rich text value is an ordered list of styled segments. Its plain
//! rendering is the concatenation of the segment texts, so anything that
//! stores rich text can always recompute the plain form instead of keeping
//! a second copy.
//!
//! # Example
//!
//! ```ignore
//! use void_text::prelude::*;
//!
//! let text = RichText::plain("Hello ")
//!     .with_segment("world", TextStyle::new().with_color(TextColor::Gold).bold());
//!
//! assert_eq!(text.plain_text(), "Hello world");
//! let json = text.to_json()?;
//! assert_eq!(RichText::from_json(&json)?, text);
//! ```

pub mod rich;
pub mod style;

use thiserror::Error;

/// Rich text errors
#[derive(Debug, Error)]
pub enum TextError {
    /// JSON form could not be parsed or produced
    #[error("Rich text JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub mod prelude {
    pub use crate::rich::{RichText, TextSegment};
    pub use crate::style::{TextColor, TextStyle};
    pub use crate::TextError;
}

pub use prelude::*;
