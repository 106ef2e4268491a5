//! Block entities
//!
//! Extra per-cell state attached by the grid. The grid owns every entity;
//! callers receive a [`BlockEntityHandle`] for the duration of one
//! operation and look the cell up again next time, since the grid may
//! replace the entity whenever the cell's block type changes.

use crate::actor::PlayerIdentity;
use parking_lot::RwLock;
use std::sync::Arc;
use void_text::RichText;
use void_voxel::CellPos;

/// Number of text lines on a sign
pub const SIGN_LINES: usize = 4;

/// Longest plain rendering a sign line may hold
pub const SIGN_LINE_MAX_CHARS: usize = 15;

/// Shared handle to a grid-owned block entity
pub type BlockEntityHandle = Arc<RwLock<BlockEntity>>;

/// Block entity storing a fixed set of rich-text lines
pub trait TextBoard {
    /// All lines in order
    fn slots(&self) -> &[RichText; SIGN_LINES];

    /// Replace every line in one step
    fn replace_slots(&mut self, lines: [RichText; SIGN_LINES]);

    /// Replace one line; out-of-range indices are ignored
    fn replace_slot(&mut self, index: usize, line: RichText);
}

/// Sign data as stored by the grid
#[derive(Debug, Clone, PartialEq)]
pub struct SignEntity {
    lines: [RichText; SIGN_LINES],
    /// Whether the text may still be changed by players
    pub editable: bool,
    /// Who placed the sign, if a player did
    pub owner: Option<PlayerIdentity>,
}

impl SignEntity {
    /// A blank, editable, unowned sign
    pub fn new() -> Self {
        Self {
            lines: Default::default(),
            editable: true,
            owner: None,
        }
    }
}

impl Default for SignEntity {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBoard for SignEntity {
    fn slots(&self) -> &[RichText; SIGN_LINES] {
        &self.lines
    }

    fn replace_slots(&mut self, lines: [RichText; SIGN_LINES]) {
        self.lines = lines;
    }

    fn replace_slot(&mut self, index: usize, line: RichText) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line;
        }
    }
}

/// Per-kind block-entity payload
#[derive(Debug, Clone, PartialEq)]
pub enum BlockEntityData {
    Sign(SignEntity),
    /// Entity of a kind this crate does not model
    Other { kind: String },
}

/// A block entity bound to one cell
#[derive(Debug, Clone, PartialEq)]
pub struct BlockEntity {
    cell: CellPos,
    pub data: BlockEntityData,
}

impl BlockEntity {
    /// Create a block entity at `cell`
    pub fn new(cell: CellPos, data: BlockEntityData) -> Self {
        Self { cell, data }
    }

    /// A blank sign entity at `cell`
    pub fn sign(cell: CellPos) -> Self {
        Self::new(cell, BlockEntityData::Sign(SignEntity::new()))
    }

    /// Wrap into a shared handle
    pub fn into_handle(self) -> BlockEntityHandle {
        Arc::new(RwLock::new(self))
    }

    /// The cell this entity is bound to
    pub fn cell(&self) -> CellPos {
        self.cell
    }

    /// Sign data, if this is a sign
    pub fn as_sign(&self) -> Option<&SignEntity> {
        match &self.data {
            BlockEntityData::Sign(sign) => Some(sign),
            _ => None,
        }
    }

    /// Mutable sign data, if this is a sign
    pub fn as_sign_mut(&mut self) -> Option<&mut SignEntity> {
        match &mut self.data {
            BlockEntityData::Sign(sign) => Some(sign),
            _ => None,
        }
    }

    /// Text lines, if this entity carries any
    pub fn as_text_board(&self) -> Option<&dyn TextBoard> {
        self.as_sign().map(|sign| sign as &dyn TextBoard)
    }

    /// Mutable text lines, if this entity carries any
    pub fn as_text_board_mut(&mut self) -> Option<&mut dyn TextBoard> {
        self.as_sign_mut().map(|sign| sign as &mut dyn TextBoard)
    }

    /// Whether this is a sign
    pub fn is_sign(&self) -> bool {
        self.as_sign().is_some()
    }
}
