//! In-memory reference grid

use crate::block_entity::{
    BlockEntity, BlockEntityData, BlockEntityHandle, TextBoard, SIGN_LINES, SIGN_LINE_MAX_CHARS,
};
use crate::grid::WorldGrid;
use parking_lot::RwLock;
use std::collections::HashMap;
use void_inventory::{ItemProperty, ItemStack};
use void_text::RichText;
use void_voxel::{BlockFace, BlockState, CellPos, UpdateFlags};

/// One recorded grid write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWrite {
    pub cell: CellPos,
    pub state: BlockState,
    pub flags: UpdateFlags,
}

#[derive(Default)]
struct Cells {
    states: HashMap<CellPos, BlockState>,
    entities: HashMap<CellPos, BlockEntityHandle>,
}

/// A sparse grid held in memory
///
/// Unset cells read as air. Writing a sign block to a cell that held a
/// different block type creates a fresh sign entity; writing any other
/// block type destroys the entity. Re-writing the same sign type (for
/// example to change orientation) keeps the existing entity.
pub struct MemoryWorld {
    name: String,
    cells: RwLock<Cells>,
    writes: RwLock<Vec<GridWrite>>,
}

impl MemoryWorld {
    /// Create an empty world
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: RwLock::new(Cells::default()),
            writes: RwLock::new(Vec::new()),
        }
    }

    /// Set a block with default flags (builder pattern)
    pub fn with_block(self, cell: CellPos, state: BlockState) -> Self {
        self.set_block_state(cell, state, UpdateFlags::DEFAULT);
        self
    }

    /// Bind an arbitrary entity to `cell`, replacing any existing one
    pub fn insert_block_entity(&self, entity: BlockEntity) -> BlockEntityHandle {
        let cell = entity.cell();
        let handle = entity.into_handle();
        self.cells.write().entities.insert(cell, handle.clone());
        handle
    }

    /// Drop the entity at `cell` and bind a blank one of the same kind,
    /// as a host does when it reloads a cell
    pub fn recreate_block_entity(&self, cell: CellPos) -> Option<BlockEntityHandle> {
        let mut cells = self.cells.write();
        let fresh = match &cells.entities.get(&cell)?.read().data {
            BlockEntityData::Sign(_) => BlockEntity::sign(cell),
            BlockEntityData::Other { kind } => {
                BlockEntity::new(cell, BlockEntityData::Other { kind: kind.clone() })
            }
        };
        let handle = fresh.into_handle();
        cells.entities.insert(cell, handle.clone());
        log::trace!("Recreated block entity at {}", cell);
        Some(handle)
    }

    /// Every grid write so far, oldest first
    pub fn writes(&self) -> Vec<GridWrite> {
        self.writes.read().clone()
    }

    /// Number of grid writes so far
    pub fn write_count(&self) -> usize {
        self.writes.read().len()
    }

    /// Number of non-air cells
    pub fn block_count(&self) -> usize {
        self.cells.read().states.len()
    }
}

fn sign_lines_from_tag(tag: &ItemProperty) -> Option<[RichText; SIGN_LINES]> {
    let entries = tag.as_array()?;
    let mut lines: [RichText; SIGN_LINES] = Default::default();
    for (slot, entry) in lines.iter_mut().zip(entries) {
        let raw = entry.as_string()?;
        let rich = RichText::from_json(raw).unwrap_or_else(|_| RichText::plain(raw));
        *slot = rich.truncated(SIGN_LINE_MAX_CHARS);
    }
    Some(lines)
}

impl WorldGrid for MemoryWorld {
    fn name(&self) -> &str {
        &self.name
    }

    fn block_state(&self, cell: CellPos) -> BlockState {
        self.cells
            .read()
            .states
            .get(&cell)
            .copied()
            .unwrap_or(BlockState::AIR)
    }

    fn set_block_state(&self, cell: CellPos, state: BlockState, flags: UpdateFlags) {
        let mut cells = self.cells.write();
        let previous = cells.states.get(&cell).map_or(BlockState::AIR.id, |s| s.id);

        if state.id == BlockState::AIR.id {
            cells.states.remove(&cell);
        } else {
            cells.states.insert(cell, state);
        }

        if previous != state.id {
            if cells.entities.remove(&cell).is_some() {
                log::trace!("Destroyed block entity at {}", cell);
            }
            if state.id.is_sign() {
                cells.entities.insert(cell, BlockEntity::sign(cell).into_handle());
            }
        }
        drop(cells);

        self.writes.write().push(GridWrite { cell, state, flags });
    }

    fn block_entity(&self, cell: CellPos) -> Option<BlockEntityHandle> {
        self.cells.read().entities.get(&cell).cloned()
    }

    fn is_replaceable(&self, cell: CellPos) -> bool {
        self.block_state(cell).id.is_replaceable()
    }

    fn has_solid_support(&self, cell: CellPos, _face: BlockFace) -> bool {
        // Every solid block here is a full cube
        self.block_state(cell).id.is_solid()
    }

    fn apply_item_entity_data(&self, cell: CellPos, stack: &ItemStack) -> bool {
        let Some(tag) = stack.block_entity_tag() else {
            return false;
        };
        let Some(handle) = self.block_entity(cell) else {
            return false;
        };
        let mut entity = handle.write();
        let Some(board) = entity.as_text_board_mut() else {
            return false;
        };
        match sign_lines_from_tag(tag) {
            Some(lines) => {
                board.replace_slots(lines);
                log::debug!("Applied item block-entity data at {}", cell);
                true
            }
            None => false,
        }
    }
}
