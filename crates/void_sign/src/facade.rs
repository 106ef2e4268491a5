//! The sign facade

use crate::lines::{component_line, normalize_components, normalize_text, slot_index, text_line};
use crate::mount::{attached_cell, SignMount};
use crate::{SignError, SignResult};
use std::fmt;
use std::sync::Arc;
use void_text::RichText;
use void_voxel::CellPos;
use void_world::{Actor, BlockEntityHandle, PlayerDirectory, SignEntity, TextBoard, WorldGrid, SIGN_LINES};

/// A sign as seen by game logic
///
/// Holds only the world and the cell. The grid-owned entity is looked up
/// again on every call, so a facade survives the grid discarding and
/// recreating the entity, and it never keeps the entity alive.
///
/// Line numbers are `0..=3`. Reads outside that range return `None` and
/// writes outside it do nothing.
#[derive(Clone, Copy)]
pub struct Sign<'w> {
    world: &'w dyn WorldGrid,
    cell: CellPos,
}

impl<'w> Sign<'w> {
    /// Treat the block entity at `cell` as a sign, if it is one
    pub fn resolve(world: &'w dyn WorldGrid, cell: CellPos) -> Option<Self> {
        Self::try_resolve(world, cell).ok()
    }

    /// As [`Sign::resolve`], reporting why nothing was found
    pub fn try_resolve(world: &'w dyn WorldGrid, cell: CellPos) -> SignResult<Self> {
        let is_sign = world
            .block_entity(cell)
            .map_or(false, |handle| handle.read().is_sign());
        if is_sign {
            Ok(Self { world, cell })
        } else {
            Err(SignError::NotASign { cell })
        }
    }

    /// The cell this sign sits in
    pub fn cell(&self) -> CellPos {
        self.cell
    }

    pub fn x(&self) -> i32 {
        self.cell.x
    }

    pub fn y(&self) -> i32 {
        self.cell.y
    }

    pub fn z(&self) -> i32 {
        self.cell.z
    }

    /// Name of the world holding the sign
    pub fn world_name(&self) -> &'w str {
        self.world.name()
    }

    fn handle(&self) -> SignResult<BlockEntityHandle> {
        match self.world.block_entity(self.cell) {
            Some(handle) if handle.read().is_sign() => Ok(handle),
            _ => {
                log::warn!("Sign at {} lost its block entity", self.cell);
                Err(SignError::Detached { cell: self.cell })
            }
        }
    }

    fn read<R>(&self, f: impl FnOnce(&SignEntity) -> R) -> SignResult<R> {
        let handle = self.handle()?;
        let entity = handle.read();
        let sign = entity.as_sign().ok_or(SignError::Detached { cell: self.cell })?;
        Ok(f(sign))
    }

    fn write<R>(&self, f: impl FnOnce(&mut SignEntity) -> R) -> SignResult<R> {
        let handle = self.handle()?;
        let mut entity = handle.write();
        let sign = entity.as_sign_mut().ok_or(SignError::Detached { cell: self.cell })?;
        Ok(f(sign))
    }

    /// All four lines as stored
    pub fn lines(&self) -> SignResult<[RichText; SIGN_LINES]> {
        self.read(|sign| sign.slots().clone())
    }

    /// Same as [`Sign::lines`]
    pub fn components(&self) -> SignResult<[RichText; SIGN_LINES]> {
        self.lines()
    }

    /// Plain rendering of every line, computed now
    pub fn text(&self) -> SignResult<[String; SIGN_LINES]> {
        self.read(|sign| std::array::from_fn(|index| sign.slots()[index].plain_text()))
    }

    /// Plain rendering of one line
    pub fn text_on_line(&self, line: i32) -> SignResult<Option<String>> {
        match slot_index(line) {
            Some(index) => self.read(|sign| Some(sign.slots()[index].plain_text())),
            None => Ok(None),
        }
    }

    /// Stored value of one line
    pub fn component_on_line(&self, line: i32) -> SignResult<Option<RichText>> {
        match slot_index(line) {
            Some(index) => self.read(|sign| Some(sign.slots()[index].clone())),
            None => Ok(None),
        }
    }

    /// Replace all four lines with unstyled text.
    ///
    /// The input is padded or cut to four entries, `None` becomes empty and
    /// each line keeps its first 15 characters. The new lines are built
    /// before the entity is touched and land in one assignment.
    pub fn set_text(&self, lines: &[Option<&str>]) -> SignResult<()> {
        let normalized = normalize_text(lines);
        self.write(|sign| sign.replace_slots(normalized))?;
        log::trace!("Set text of sign at {}", self.cell);
        Ok(())
    }

    /// [`Sign::set_text`] for input without gaps
    pub fn set_text_lines<S: AsRef<str>>(&self, lines: &[S]) -> SignResult<()> {
        let wrapped: Vec<Option<&str>> = lines.iter().map(|line| Some(line.as_ref())).collect();
        self.set_text(&wrapped)
    }

    /// Replace all four lines with rich values; `None` becomes empty
    pub fn set_components(&self, components: &[Option<RichText>]) -> SignResult<()> {
        let normalized = normalize_components(components);
        self.write(|sign| sign.replace_slots(normalized))?;
        log::trace!("Set components of sign at {}", self.cell);
        Ok(())
    }

    /// Replace one line with unstyled text
    pub fn set_text_on_line(&self, text: Option<&str>, line: i32) -> SignResult<()> {
        match slot_index(line) {
            Some(index) => self.write(|sign| sign.replace_slot(index, text_line(text))),
            None => Ok(()),
        }
    }

    /// Replace one line with a rich value
    pub fn set_component_on_line(&self, component: Option<RichText>, line: i32) -> SignResult<()> {
        match slot_index(line) {
            Some(index) => {
                let value = component_line(component.as_ref());
                self.write(|sign| sign.replace_slot(index, value))
            }
            None => Ok(()),
        }
    }

    /// Mounting variant recorded by the grid at this cell
    pub fn mount(&self) -> Option<SignMount> {
        SignMount::of(self.world.block_state(self.cell).id)
    }

    pub fn is_wall_sign(&self) -> bool {
        self.mount() == Some(SignMount::Wall)
    }

    pub fn is_sign_post(&self) -> bool {
        self.mount() == Some(SignMount::Post)
    }

    /// The cell this sign hangs from or rests on
    pub fn block_attached(&self) -> Option<CellPos> {
        attached_cell(self.cell, &self.world.block_state(self.cell))
    }

    pub fn is_editable(&self) -> SignResult<bool> {
        self.read(|sign| sign.editable)
    }

    pub fn set_editable(&self, editable: bool) -> SignResult<()> {
        self.write(|sign| sign.editable = editable)
    }

    /// Stored owner name, whether or not that player is online
    pub fn owner_name(&self) -> SignResult<Option<String>> {
        self.read(|sign| sign.owner.as_ref().map(|owner| owner.name.clone()))
    }

    /// The owner, only while connected.
    ///
    /// An offline owner yields `None` here but still has a name in
    /// [`Sign::owner_name`].
    pub fn owner(&self, players: &dyn PlayerDirectory) -> SignResult<Option<Arc<dyn Actor>>> {
        let identity = self.read(|sign| sign.owner.clone())?;
        Ok(identity.and_then(|identity| players.online(&identity)))
    }

    /// Record or clear the owner
    pub fn set_owner(&self, owner: Option<&dyn Actor>) -> SignResult<()> {
        let identity = owner.map(|actor| actor.identity().clone());
        self.write(|sign| sign.owner = identity)
    }
}

/// Same text and the same cell of the same world
impl PartialEq for Sign<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.cell != other.cell || self.world.name() != other.world.name() {
            return false;
        }
        match (self.text(), other.text()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Debug for Sign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sign")
            .field("world", &self.world.name())
            .field("cell", &self.cell)
            .finish()
    }
}

impl fmt::Display for Sign<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.mount() {
            Some(SignMount::Wall) => "WallSign",
            _ => "SignPost",
        };
        write!(f, "Sign[X={} Y={} Z={} SignType={}", self.x(), self.y(), self.z(), kind)?;
        match self.lines() {
            Ok(lines) => {
                for (index, line) in lines.iter().enumerate() {
                    write!(f, " Text{}={:?}", index + 1, line)?;
                }
            }
            Err(_) => write!(f, " detached")?,
        }
        write!(f, "]")
    }
}
