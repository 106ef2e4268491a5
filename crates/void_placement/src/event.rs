//! Sign placement event

use serde::{Deserialize, Serialize};
use std::any::Any;
use void_event::{Event, EventId};
use void_voxel::{BlockFace, BlockState, CellPos};
use void_world::PlayerIdentity;

/// Event name handlers subscribe to
pub const SIGN_PLACE_EVENT: &str = "block.place.sign";

/// A cell and the state it holds (or would hold)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    pub cell: CellPos,
    pub state: BlockState,
}

/// Raised once per placement, before anything is written.
///
/// The event is read-only. Cancelling it leaves the grid and the item
/// stack exactly as they were.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignPlaceEvent {
    clicked: BlockSnapshot,
    face: BlockFace,
    placed: BlockSnapshot,
    actor: PlayerIdentity,
}

impl SignPlaceEvent {
    /// Create a new placement event
    pub fn new(clicked: BlockSnapshot, face: BlockFace, placed: BlockSnapshot, actor: PlayerIdentity) -> Self {
        Self {
            clicked,
            face,
            placed,
            actor,
        }
    }

    /// Event id for subscriptions
    pub fn id() -> EventId {
        EventId::new(SIGN_PLACE_EVENT)
    }

    /// The block that was clicked, as it was before placement
    pub fn clicked(&self) -> &BlockSnapshot {
        &self.clicked
    }

    /// Face of the clicked block
    pub fn face(&self) -> BlockFace {
        self.face
    }

    /// The sign block about to be written
    pub fn placed(&self) -> &BlockSnapshot {
        &self.placed
    }

    /// Who is placing
    pub fn actor(&self) -> &PlayerIdentity {
        &self.actor
    }

    /// Whether a standing post (rather than a wall sign) is being placed
    pub fn is_post(&self) -> bool {
        self.face == BlockFace::Up
    }
}

impl Event for SignPlaceEvent {
    fn event_id(&self) -> EventId {
        Self::id()
    }

    fn cancellable(&self) -> bool {
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use void_voxel::BlockId;

    fn event() -> SignPlaceEvent {
        SignPlaceEvent::new(
            BlockSnapshot {
                cell: CellPos::new(0, 63, 0),
                state: BlockState::of(BlockId::STONE),
            },
            BlockFace::Up,
            BlockSnapshot {
                cell: CellPos::new(0, 64, 0),
                state: BlockState::sign_post(8),
            },
            PlayerIdentity::new("alice"),
        )
    }

    #[test]
    fn test_event_identity() {
        let event = event();
        assert_eq!(event.event_id().name(), "block.place.sign");
        assert!(event.cancellable());
        assert!(event.is_post());
    }

    #[test]
    fn test_downcast() {
        let event = event();
        let erased: &dyn Event = &event;
        let back = erased.downcast_ref::<SignPlaceEvent>().expect("same type");
        assert_eq!(back.actor().name, "alice");
        assert_eq!(back.placed().state.rotation(), Some(8));
    }
}
