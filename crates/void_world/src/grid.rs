//! Grid and permission collaborators

use crate::actor::Actor;
use crate::block_entity::BlockEntityHandle;
use void_inventory::ItemStack;
use void_voxel::{BlockFace, BlockState, CellPos, UpdateFlags};

/// The authoritative voxel grid
///
/// Implementations serialize access per cell. Writes are total: a
/// `set_block_state` call always lands.
pub trait WorldGrid: Send + Sync {
    /// World name, part of every block entity's identity
    fn name(&self) -> &str;

    /// Current state at `cell` (air when unset)
    fn block_state(&self, cell: CellPos) -> BlockState;

    /// Replace the state at `cell` in one write
    fn set_block_state(&self, cell: CellPos, state: BlockState, flags: UpdateFlags);

    /// Block entity currently bound to `cell`
    fn block_entity(&self, cell: CellPos) -> Option<BlockEntityHandle>;

    /// Whether a placement may overwrite the block at `cell`
    fn is_replaceable(&self, cell: CellPos) -> bool;

    /// Whether the block at `cell` can hold something attached to `face`
    fn has_solid_support(&self, cell: CellPos, face: BlockFace) -> bool;

    /// Copy block-entity data carried by `stack` onto the entity at `cell`.
    /// Returns whether anything was applied.
    fn apply_item_entity_data(&self, cell: CellPos, stack: &ItemStack) -> bool;
}

/// Build authorization
pub trait BuildPermission: Send + Sync {
    /// Whether `actor` may modify `cell`, approaching from `face`
    fn can_build(&self, actor: &dyn Actor, cell: CellPos, face: BlockFace) -> bool;
}

/// Permits every build
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl BuildPermission for AllowAll {
    fn can_build(&self, _actor: &dyn Actor, _cell: CellPos, _face: BlockFace) -> bool {
        true
    }
}

impl<F> BuildPermission for F
where
    F: Fn(&dyn Actor, CellPos, BlockFace) -> bool + Send + Sync,
{
    fn can_build(&self, actor: &dyn Actor, cell: CellPos, face: BlockFace) -> bool {
        self(actor, cell, face)
    }
}
