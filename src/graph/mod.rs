//! Sparse room storage keyed by hex coordinate.

mod node;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::geometry::hex::{Bounds, Direction, HexCoord};

pub use node::{DoorMask, RoomNode};

/// Room creation was rejected; the graph is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CreateRoomError {
    #[error("coordinate {0} is outside the grid bounds")]
    OutOfBounds(HexCoord),
    #[error("a room already exists at {0}")]
    Occupied(HexCoord),
}

/// The sparse room graph: a map from coordinate to room, with a derived
/// per-floor room count.
///
/// The floor counts are a materialized view over the room map; both are
/// only ever updated together, inside [`create_room`], so reading the cache
/// is always equivalent to counting the map. Rooms are never removed in the
/// current design, so the counts only grow.
///
/// `D` is the opaque room-definition handle stored on each node; the graph
/// places no requirements on it beyond what individual methods need.
///
/// [`create_room`]: RoomGraph::create_room
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoomGraph<D> {
    rooms: HashMap<HexCoord, RoomNode<D>>,
    floor_counts: HashMap<i32, u32>,
    bounds: Bounds,
}

impl<D> RoomGraph<D> {
    pub fn new(bounds: Bounds) -> RoomGraph<D> {
        RoomGraph {
            rooms: HashMap::new(),
            floor_counts: HashMap::new(),
            bounds,
        }
    }

    /// The radial bound every stored coordinate satisfies.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Create a room at `index` if the slot is in bounds and unoccupied.
    ///
    /// On failure nothing is mutated, so a duplicate creation attempt never
    /// disturbs the floor counts.
    pub fn create_room(&mut self, index: HexCoord, definition: D) -> Result<(), CreateRoomError> {
        if !self.bounds.contains(index) {
            return Err(CreateRoomError::OutOfBounds(index));
        }
        if self.rooms.contains_key(&index) {
            return Err(CreateRoomError::Occupied(index));
        }

        self.rooms.insert(index, RoomNode::new(index, definition));
        *self.floor_counts.entry(index.floor).or_insert(0) += 1;

        log::debug!("created room at {index}");
        Ok(())
    }

    /// The room at `index`, as a copy.
    ///
    /// Room state is mutated only through the graph, so callers get a
    /// snapshot rather than a mutable reference.
    pub fn room(&self, index: HexCoord) -> Option<RoomNode<D>>
    where
        D: Clone,
    {
        self.rooms.get(&index).cloned()
    }

    /// `true` when a room exists at `index`.
    pub fn has_room_at(&self, index: HexCoord) -> bool {
        self.rooms.contains_key(&index)
    }

    /// Number of rooms on the given floor, from the materialized view.
    pub fn rooms_on_floor(&self, floor: i32) -> u32 {
        self.floor_counts.get(&floor).copied().unwrap_or(0)
    }

    /// Total number of rooms in the graph.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Iterate over all rooms, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RoomNode<D>> {
        self.rooms.values()
    }

    /// Open or close the door of the room at `index` toward `direction`.
    ///
    /// Returns `false` when no room exists at `index`. This only adjusts the
    /// local bitmask; the neighbor's mask is untouched.
    pub fn set_door(&mut self, index: HexCoord, direction: Direction, open: bool) -> bool {
        match self.rooms.get_mut(&index) {
            Some(room) => {
                if open {
                    room.door_mask.open(direction);
                } else {
                    room.door_mask.close(direction);
                }
                true
            }
            None => false,
        }
    }
}

impl<D> Default for RoomGraph<D> {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> RoomGraph<&'static str> {
        RoomGraph::new(Bounds::new(1))
    }

    #[test]
    fn test_create_room() {
        let mut graph = graph();
        assert!(graph.is_empty());

        graph.create_room(HexCoord::ORIGIN, "hub").unwrap();
        assert!(graph.has_room_at(HexCoord::ORIGIN));
        assert_eq!(graph.len(), 1);

        let room = graph.room(HexCoord::ORIGIN).unwrap();
        assert_eq!(room.location, HexCoord::ORIGIN);
        assert_eq!(room.definition, "hub");
        assert!(room.is_active);
        assert_eq!(room.door_mask.bits(), 0);
    }

    #[test]
    fn test_create_room_out_of_bounds() {
        let mut graph = graph();
        let far = HexCoord::new(2, 0, 0);
        assert_eq!(
            graph.create_room(far, "too far"),
            Err(CreateRoomError::OutOfBounds(far))
        );
        assert!(graph.is_empty());
        assert_eq!(graph.rooms_on_floor(0), 0);
    }

    #[test]
    fn test_duplicate_create_does_not_double_count() {
        let mut graph = graph();
        let index = HexCoord::new(1, 0, 3);

        graph.create_room(index, "first").unwrap();
        assert_eq!(graph.rooms_on_floor(3), 1);

        assert_eq!(
            graph.create_room(index, "second"),
            Err(CreateRoomError::Occupied(index))
        );
        assert_eq!(graph.rooms_on_floor(3), 1);
        assert_eq!(graph.room(index).unwrap().definition, "first");
    }

    #[test]
    fn test_floor_counts_match_map() {
        let mut graph = graph();
        for (n, coord) in Bounds::new(1).coords_on_floor(0).enumerate() {
            graph.create_room(coord, "cell").unwrap();
            assert_eq!(graph.rooms_on_floor(0) as usize, n + 1);
        }
        graph.create_room(HexCoord::new(0, 0, 1), "above").unwrap();

        assert_eq!(graph.rooms_on_floor(0), 7);
        assert_eq!(graph.rooms_on_floor(1), 1);
        assert_eq!(graph.rooms_on_floor(2), 0);
        assert_eq!(graph.len(), 8);

        // the cache must agree with a direct count over the map
        for floor in [0, 1, 2] {
            let counted = graph.iter().filter(|room| room.location.floor == floor).count();
            assert_eq!(graph.rooms_on_floor(floor) as usize, counted);
        }
    }

    #[test]
    fn test_set_door() {
        let mut graph = graph();
        graph.create_room(HexCoord::ORIGIN, "hub").unwrap();

        assert!(graph.set_door(HexCoord::ORIGIN, Direction::SouthEast, true));
        let room = graph.room(HexCoord::ORIGIN).unwrap();
        assert!(room.door_mask.is_open(Direction::SouthEast));
        assert!(!room.door_mask.is_open(Direction::North));

        assert!(graph.set_door(HexCoord::ORIGIN, Direction::SouthEast, false));
        let room = graph.room(HexCoord::ORIGIN).unwrap();
        assert_eq!(room.door_mask.bits(), 0);

        assert!(!graph.set_door(HexCoord::new(1, 0, 0), Direction::North, true));
    }

    #[test]
    fn test_room_returns_snapshot() {
        let mut graph = graph();
        graph.create_room(HexCoord::ORIGIN, "hub").unwrap();

        let mut snapshot = graph.room(HexCoord::ORIGIN).unwrap();
        snapshot.door_mask.open(Direction::North);

        // mutating the copy must not leak back into the graph
        assert_eq!(graph.room(HexCoord::ORIGIN).unwrap().door_mask.bits(), 0);
    }
}
