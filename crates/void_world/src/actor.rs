//! Player identity and presence

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use void_voxel::CellPos;

/// Stored reference to a player, by name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
}

impl PlayerIdentity {
    /// Create a new identity
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for PlayerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A live player acting on the world
pub trait Actor: Send + Sync {
    /// Identity used for ownership and permissions
    fn identity(&self) -> &PlayerIdentity;

    /// Player name
    fn name(&self) -> &str {
        &self.identity().name
    }

    /// Horizontal facing angle in degrees
    fn yaw(&self) -> f32;

    /// A sign this player placed has just been committed at `cell`
    fn sign_placed(&self, _cell: CellPos) {}
}

/// Resolves stored identities to players currently online
pub trait PlayerDirectory: Send + Sync {
    /// The live player for `identity`, if connected
    fn online(&self, identity: &PlayerIdentity) -> Option<Arc<dyn Actor>>;
}

/// Minimal player with a settable facing
pub struct SimplePlayer {
    identity: PlayerIdentity,
    yaw: RwLock<f32>,
    placed_signs: Mutex<Vec<CellPos>>,
}

impl SimplePlayer {
    /// Create a new player facing yaw 0
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            identity: PlayerIdentity::new(name),
            yaw: RwLock::new(0.0),
            placed_signs: Mutex::new(Vec::new()),
        }
    }

    /// Set facing (builder pattern)
    pub fn with_yaw(self, yaw: f32) -> Self {
        *self.yaw.write() = yaw;
        self
    }

    /// Set facing
    pub fn set_yaw(&self, yaw: f32) {
        *self.yaw.write() = yaw;
    }

    /// Cells of the signs this player was told about, oldest first
    pub fn placed_signs(&self) -> Vec<CellPos> {
        self.placed_signs.lock().clone()
    }

    /// The most recently placed sign
    pub fn last_placed_sign(&self) -> Option<CellPos> {
        self.placed_signs.lock().last().copied()
    }
}

impl Actor for SimplePlayer {
    fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    fn yaw(&self) -> f32 {
        *self.yaw.read()
    }

    fn sign_placed(&self, cell: CellPos) {
        log::trace!("{} placed a sign at {}", self.identity, cell);
        self.placed_signs.lock().push(cell);
    }
}

/// Directory of connected players
#[derive(Default)]
pub struct OnlinePlayers {
    players: RwLock<HashMap<PlayerIdentity, Arc<dyn Actor>>>,
}

impl OnlinePlayers {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a player as connected
    pub fn join(&self, player: Arc<dyn Actor>) {
        let identity = player.identity().clone();
        log::debug!("Player {} joined", identity);
        self.players.write().insert(identity, player);
    }

    /// Mark a player as disconnected
    pub fn leave(&self, identity: &PlayerIdentity) -> bool {
        let removed = self.players.write().remove(identity).is_some();
        if removed {
            log::debug!("Player {} left", identity);
        }
        removed
    }

    /// Number of connected players
    pub fn len(&self) -> usize {
        self.players.read().len()
    }

    /// Whether nobody is connected
    pub fn is_empty(&self) -> bool {
        self.players.read().is_empty()
    }
}

impl PlayerDirectory for OnlinePlayers {
    fn online(&self, identity: &PlayerIdentity) -> Option<Arc<dyn Actor>> {
        self.players.read().get(identity).cloned()
    }
}
