//! Sign placement pipeline
//!
//! A placement is planned with no side effects, offered to event handlers
//! as an immutable [`SignPlaceEvent`], and only then committed with a
//! single grid write.

use crate::config::PlacementConfig;
use crate::event::{BlockSnapshot, SignPlaceEvent};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use void_event::EventBus;
use void_inventory::ItemStack;
use void_voxel::{BlockFace, BlockState, CellPos};
use void_world::{Actor, AllowAll, BuildPermission, WorldGrid};

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Signs cannot hang from the underside of a block
    InvalidFace,
    /// The clicked block offers no solid surface on that face
    NoSupport,
    /// The actor may not build at the target
    NotPermitted,
    /// The target cell is occupied
    NotReplaceable,
    /// A placement at the same cell is already being dispatched
    Reentrant,
    /// An event handler vetoed the placement
    Cancelled,
    /// Client-side prediction; nothing was committed
    Predicted,
    /// The sign was written
    Placed { cell: CellPos, state: BlockState },
}

impl PlacementOutcome {
    /// Whether the caller should treat the attempt as accepted
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Predicted | Self::Placed { .. })
    }

    /// Short reason, for diagnostics
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidFace => "invalid face",
            Self::NoSupport => "no support",
            Self::NotPermitted => "not permitted",
            Self::NotReplaceable => "not replaceable",
            Self::Reentrant => "reentrant",
            Self::Cancelled => "cancelled",
            Self::Predicted => "predicted",
            Self::Placed { .. } => "placed",
        }
    }
}

impl fmt::Display for PlacementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placed { cell, .. } => write!(f, "placed at {}", cell),
            other => f.write_str(other.reason()),
        }
    }
}

/// Post rotation (16 steps) for a player facing `yaw` degrees.
///
/// Rounds half up before wrapping, so yaw 0 maps to 8 and 180 maps to 0.
pub fn rotation_from_yaw(yaw: f32) -> u8 {
    let steps = ((f64::from(yaw) + 180.0) * 16.0 / 360.0 + 0.5).floor();
    ((steps as i64) & 15) as u8
}

/// Removes its cell from the in-flight set when dropped
struct InFlight<'p> {
    cells: &'p Mutex<HashSet<CellPos>>,
    cell: CellPos,
}

impl<'p> InFlight<'p> {
    fn acquire(cells: &'p Mutex<HashSet<CellPos>>, cell: CellPos) -> Option<Self> {
        // Build the guard only once the cell is ours
        let inserted = cells.lock().insert(cell);
        inserted.then(|| Self { cells, cell })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.cells.lock().remove(&self.cell);
    }
}

/// Places signs against a world grid
pub struct SignPlacer {
    world: Arc<dyn WorldGrid>,
    permissions: Arc<dyn BuildPermission>,
    events: Arc<EventBus>,
    config: PlacementConfig,
    in_flight: Mutex<HashSet<CellPos>>,
}

impl SignPlacer {
    /// Create a placer that permits every build
    pub fn new(world: Arc<dyn WorldGrid>, events: Arc<EventBus>) -> Self {
        Self {
            world,
            permissions: Arc::new(AllowAll),
            events,
            config: PlacementConfig::default(),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Set build permissions (builder pattern)
    pub fn with_permissions(mut self, permissions: Arc<dyn BuildPermission>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set configuration (builder pattern)
    pub fn with_config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration
    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// The grid placements are written to
    pub fn world(&self) -> &Arc<dyn WorldGrid> {
        &self.world
    }

    /// Whether a placement at `cell` is being dispatched right now
    pub fn is_in_flight(&self, cell: CellPos) -> bool {
        self.in_flight.lock().contains(&cell)
    }

    /// Place a sign from `stack` against `face` of the block at `target`.
    ///
    /// Returns whether the attempt was accepted. See [`Self::try_place`].
    pub fn attempt_place(
        &self,
        actor: &dyn Actor,
        stack: &mut ItemStack,
        target: CellPos,
        face: BlockFace,
        client_prediction: bool,
    ) -> bool {
        self.try_place(actor, stack, target, face, client_prediction)
            .is_success()
    }

    /// Place a sign, reporting why it was declined.
    ///
    /// Nothing is written and the stack is untouched unless the outcome
    /// is [`PlacementOutcome::Placed`].
    pub fn try_place(
        &self,
        actor: &dyn Actor,
        stack: &mut ItemStack,
        target: CellPos,
        face: BlockFace,
        client_prediction: bool,
    ) -> PlacementOutcome {
        let outcome = self.place(actor, stack, target, face, client_prediction);
        match &outcome {
            PlacementOutcome::Placed { cell, state } => {
                log::info!("{} placed {} at {}", actor.name(), state.id, cell);
            }
            PlacementOutcome::Reentrant => {
                log::warn!(
                    "Rejected reentrant sign placement by {} at {}",
                    actor.name(),
                    target.offset(face)
                );
            }
            declined => {
                log::debug!(
                    "Sign placement by {} against {} {}: {}",
                    actor.name(),
                    target,
                    face,
                    declined
                );
            }
        }
        outcome
    }

    fn place(
        &self,
        actor: &dyn Actor,
        stack: &mut ItemStack,
        target: CellPos,
        face: BlockFace,
        client_prediction: bool,
    ) -> PlacementOutcome {
        if face == BlockFace::Down {
            return PlacementOutcome::InvalidFace;
        }
        if !self.world.has_solid_support(target, face) {
            return PlacementOutcome::NoSupport;
        }

        let cell = target.offset(face);
        let Some(_guard) = InFlight::acquire(&self.in_flight, cell) else {
            return PlacementOutcome::Reentrant;
        };

        if !self.permissions.can_build(actor, cell, face) {
            return PlacementOutcome::NotPermitted;
        }
        if !self.world.is_replaceable(cell) {
            return PlacementOutcome::NotReplaceable;
        }
        if client_prediction {
            return PlacementOutcome::Predicted;
        }

        let state = if face == BlockFace::Up {
            BlockState::sign_post(rotation_from_yaw(actor.yaw()))
        } else {
            BlockState::wall_sign(face)
        };

        let event = SignPlaceEvent::new(
            BlockSnapshot {
                cell: target,
                state: self.world.block_state(target),
            },
            face,
            BlockSnapshot { cell, state },
            actor.identity().clone(),
        );
        if self.events.publish(&event).is_cancelled() {
            return PlacementOutcome::Cancelled;
        }

        self.commit(actor, stack, cell, state);
        PlacementOutcome::Placed { cell, state }
    }

    fn commit(&self, actor: &dyn Actor, stack: &mut ItemStack, cell: CellPos, state: BlockState) {
        self.world.set_block_state(cell, state, self.config.update_flags);
        if self.config.consume_item {
            stack.consume_one();
        }

        let is_sign = self
            .world
            .block_entity(cell)
            .is_some_and(|entity| entity.read().is_sign());
        if is_sign && !self.world.apply_item_entity_data(cell, stack) && self.config.notify_placer {
            actor.sign_placed(cell);
        }
    }
}
