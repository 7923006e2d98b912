use serde::{Deserialize, Serialize};

use crate::geometry::hex::{Direction, HexCoord};

/// Bitmask of passable directions out of a room.
///
/// Bit *i* corresponds to the direction with discriminant *i* (see
/// [`Direction`]); 1 = open, 0 = wall. New rooms start fully walled.
///
/// This is a placeholder for door bookkeeping: the graph records which edges
/// are open but attaches no further semantics to them.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DoorMask(u8);

impl DoorMask {
    /// `true` when the door toward `direction` is open.
    pub fn is_open(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    /// Open the door toward `direction`.
    pub fn open(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// Close the door toward `direction`.
    pub fn close(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }

    /// Raw bit pattern.
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl From<u8> for DoorMask {
    fn from(bits: u8) -> DoorMask {
        DoorMask(bits)
    }
}

/// A single room slot in the graph.
///
/// `definition` is an opaque handle to externally-owned room content (theme,
/// loot table, and so on); the graph stores and returns it but never
/// inspects it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomNode<D> {
    pub location: HexCoord,
    pub door_mask: DoorMask,
    pub definition: D,
    pub is_active: bool,
}

impl<D> RoomNode<D> {
    pub(crate) fn new(location: HexCoord, definition: D) -> RoomNode<D> {
        RoomNode {
            location,
            door_mask: DoorMask::default(),
            definition,
            is_active: true,
        }
    }
}
