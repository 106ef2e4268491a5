//! Mounting variants and attachment

use std::fmt;
use void_voxel::{BlockFace, BlockId, BlockState, CellPos, Orientation};

/// How a sign is held in place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignMount {
    /// Free-standing on a post, resting on the block below
    Post,
    /// Hung against the side of a block
    Wall,
}

impl SignMount {
    /// Variant of the block id, if it is a sign
    pub fn of(id: BlockId) -> Option<Self> {
        match id {
            BlockId::SIGN_POST => Some(Self::Post),
            BlockId::WALL_SIGN => Some(Self::Wall),
            _ => None,
        }
    }

    /// Label used in diagnostics
    pub fn label(self) -> &'static str {
        match self {
            Self::Post => "SignPost",
            Self::Wall => "WallSign",
        }
    }
}

impl fmt::Display for SignMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The cell a sign at `cell` with `state` hangs from.
///
/// A post rests on the cell below. A wall sign faces away from the block
/// it hangs on, so the attached cell is one step against its facing.
/// Wall states without a horizontal facing cannot come out of placement
/// and resolve to nothing.
pub fn attached_cell(cell: CellPos, state: &BlockState) -> Option<CellPos> {
    match (SignMount::of(state.id)?, state.orientation) {
        (SignMount::Post, _) => Some(cell.below()),
        (SignMount::Wall, Orientation::Facing(facing)) => match facing {
            BlockFace::North => Some(cell.offset_by(0, 0, 1)),
            BlockFace::South => Some(cell.offset_by(0, 0, -1)),
            BlockFace::West => Some(cell.offset_by(1, 0, 0)),
            BlockFace::East => Some(cell.offset_by(-1, 0, 0)),
            BlockFace::Up | BlockFace::Down => None,
        },
        (SignMount::Wall, _) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AT: CellPos = CellPos::new(10, 20, 30);

    #[test]
    fn test_post_rests_on_block_below() {
        assert_eq!(attached_cell(AT, &BlockState::sign_post(0)), Some(CellPos::new(10, 19, 30)));
        // Stray facing data on a post is ignored
        let odd = BlockState::sign_post(0).with_orientation(Orientation::Facing(BlockFace::East));
        assert_eq!(attached_cell(AT, &odd), Some(CellPos::new(10, 19, 30)));
    }

    #[test]
    fn test_wall_sign_hangs_against_facing() {
        assert_eq!(attached_cell(AT, &BlockState::wall_sign(BlockFace::North)), Some(CellPos::new(10, 20, 31)));
        assert_eq!(attached_cell(AT, &BlockState::wall_sign(BlockFace::South)), Some(CellPos::new(10, 20, 29)));
        assert_eq!(attached_cell(AT, &BlockState::wall_sign(BlockFace::West)), Some(CellPos::new(11, 20, 30)));
        assert_eq!(attached_cell(AT, &BlockState::wall_sign(BlockFace::East)), Some(CellPos::new(9, 20, 30)));
    }

    #[test]
    fn test_wall_attachment_matches_opposite_face() {
        for facing in BlockFace::HORIZONTAL {
            assert_eq!(
                attached_cell(AT, &BlockState::wall_sign(facing)),
                Some(AT.offset(facing.opposite()))
            );
        }
    }

    #[test]
    fn test_invalid_wall_orientation() {
        assert_eq!(attached_cell(AT, &BlockState::wall_sign(BlockFace::Up)), None);
        let rotated = BlockState::wall_sign(BlockFace::North).with_orientation(Orientation::Rotation(3));
        assert_eq!(attached_cell(AT, &rotated), None);
    }

    #[test]
    fn test_not_a_sign() {
        assert_eq!(attached_cell(AT, &BlockState::AIR), None);
        assert_eq!(SignMount::of(BlockId::STONE), None);
        assert_eq!(SignMount::Wall.to_string(), "WallSign");
    }
}
