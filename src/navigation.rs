//! Read-only adjacency and placement queries over a [`RoomGraph`].

use serde::{Deserialize, Serialize};

use crate::geometry::hex::{Direction, HexCoord, InputDirection};
use crate::graph::{RoomGraph, RoomNode};

/// Cartesian placement of a hex cell, in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq, parse_display::Display)]
#[display("({x}, {y}, {z})")]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// World-space metrics of the grid: how large a hex cell is and how far
/// apart floors are.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    pub hex_size: f32,
    pub floor_height: f32,
}

impl Default for HexLayout {
    fn default() -> Self {
        HexLayout {
            hex_size: 1000.0,
            floor_height: 500.0,
        }
    }
}

impl HexLayout {
    /// Project a grid coordinate into world space (pointy-top axial
    /// projection).
    ///
    /// Works for any coordinate, in bounds or not; placement of invalid
    /// coordinates is the caller's concern.
    pub fn world_position(self, index: HexCoord) -> WorldPosition {
        let sqrt3 = 3.0_f32.sqrt();
        WorldPosition {
            x: self.hex_size * sqrt3 * (index.q as f32 + index.r as f32 / 2.0),
            y: self.hex_size * 1.5 * index.r as f32,
            z: index.floor as f32 * self.floor_height,
        }
    }
}

/// Outcome of a one-step cast: the resolved slot and whether a room already
/// occupies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spot {
    pub target: HexCoord,
    pub occupied: bool,
}

/// Navigation facade over a room graph.
///
/// Composes the coordinate math, the graph's bounds, and the room store into
/// the queries movement and layout-generation code actually asks. All
/// operations are read-only; a selector position is caller state, passed in
/// and returned.
pub struct Navigator<'g, D> {
    graph: &'g RoomGraph<D>,
    layout: HexLayout,
}

impl<'g, D> Navigator<'g, D> {
    pub fn new(graph: &'g RoomGraph<D>, layout: HexLayout) -> Navigator<'g, D> {
        Navigator { graph, layout }
    }

    pub fn layout(&self) -> HexLayout {
        self.layout
    }

    /// The neighbor coordinate in `direction`: raw math only.
    ///
    /// The result is not checked for bounds or occupancy.
    pub fn neighbor_index(&self, origin: HexCoord, direction: Direction) -> HexCoord {
        origin + direction
    }

    /// The room adjacent to `origin` in `direction`, resolved with the rim
    /// fallback.
    ///
    /// Returns `None` both when no in-bounds neighbor exists and when the
    /// resolved slot is empty; callers needing to tell those apart should use
    /// [`find_next_spot`].
    ///
    /// [`find_next_spot`]: Navigator::find_next_spot
    pub fn check_adjacency(&self, origin: HexCoord, direction: Direction) -> Option<RoomNode<D>>
    where
        D: Clone,
    {
        let target = self.graph.bounds().resolve_neighbor(origin, direction)?;
        self.graph.room(target)
    }

    /// Cast one step from `origin` in `direction`.
    ///
    /// Returns the resolved in-bounds slot and whether a room occupies it,
    /// or `None` when the cast is blocked at the grid boundary even after
    /// the fallback. A single step suffices at the current radii; a wider
    /// grid would need this to become an iterative walk.
    pub fn find_next_spot(&self, origin: HexCoord, direction: Direction) -> Option<Spot> {
        let target = self.graph.bounds().resolve_neighbor(origin, direction)?;
        Some(Spot {
            target,
            occupied: self.graph.has_room_at(target),
        })
    }

    /// Advance a selector cursor one step from `current` in the given input
    /// direction.
    ///
    /// The input direction is projected onto the hex neighborhood using the
    /// current column ([`InputDirection::to_hex`]). The cursor moves onto
    /// empty slots as well as occupied rooms; only a boundary block keeps it
    /// in place, in which case `None` is returned.
    pub fn move_selector(&self, input: InputDirection, current: HexCoord) -> Option<HexCoord> {
        let direction = input.to_hex(current.q);
        let spot = self.find_next_spot(current, direction)?;

        log::debug!(
            "selector {input} ({direction}) moved {current} -> {} (occupied: {})",
            spot.target,
            spot.occupied
        );
        Some(spot.target)
    }

    /// World-space placement of a grid coordinate; see
    /// [`HexLayout::world_position`].
    pub fn world_position(&self, index: HexCoord) -> WorldPosition {
        self.layout.world_position(index)
    }
}
