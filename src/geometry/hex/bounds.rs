use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::{coordinate::HexCoord, direction::Direction};

/// Radial bound on the hex plane.
///
/// A coordinate is in bounds when its planar axial distance from the origin
/// is at most `max_radius`; the floor index is unconstrained. The default
/// radius of 1 produces a "flower" of 7 cells per floor: the center plus one
/// ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    max_radius: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds { max_radius: 1 }
    }
}

impl Bounds {
    pub fn new(max_radius: u32) -> Bounds {
        Bounds { max_radius }
    }

    /// Inclusive bound on planar axial distance from the origin.
    #[inline]
    pub fn max_radius(self) -> u32 {
        self.max_radius
    }

    /// `true` when a coordinate is legal within this bound.
    #[inline]
    pub fn contains(self, coord: HexCoord) -> bool {
        coord.axial_distance() <= self.max_radius
    }

    /// Resolve the neighbor of `origin` in `direction`, staying in bounds.
    ///
    /// If the direct neighbor falls outside the bound and the direction has a
    /// designated fallback ([`Direction::fallback`]), the fallback neighbor
    /// is tried next. Returns `None` when neither candidate is in bounds.
    pub fn resolve_neighbor(self, origin: HexCoord, direction: Direction) -> Option<HexCoord> {
        let attempt = origin + direction;
        if self.contains(attempt) {
            return Some(attempt);
        }

        let attempt = origin + direction.fallback()?;
        self.contains(attempt).then_some(attempt)
    }

    /// Iterate over every in-bounds coordinate of one floor.
    ///
    /// Scans the bounding square of the radius and keeps the hexagonal
    /// interior; yields `3r² + 3r + 1` coordinates.
    pub fn coords_on_floor(self, floor: i32) -> impl Iterator<Item = HexCoord> {
        let radius = self.max_radius as i32;
        (-radius..=radius)
            .cartesian_product(-radius..=radius)
            .map(move |(q, r)| HexCoord::new(q, r, floor))
            .filter(move |&coord| self.contains(coord))
    }
}
