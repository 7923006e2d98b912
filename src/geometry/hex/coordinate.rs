use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// Axial hex coordinates plus a floor index.
///
/// See [reference](https://www.redblobgames.com/grids/hexagons/#coordinates).
///
/// Constraint on the planar part: `q + r + s == 0`. The floor axis is
/// independent of the hex plane; vertical neighbors share `q` and `r`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
)]
#[display("(q:{q}, r:{r}, z:{floor})")]
pub struct HexCoord {
    pub q: i32,
    pub r: i32,
    pub floor: i32,
}

impl HexCoord {
    pub const ORIGIN: HexCoord = HexCoord {
        q: 0,
        r: 0,
        floor: 0,
    };

    pub fn new(q: i32, r: i32, floor: i32) -> HexCoord {
        HexCoord { q, r, floor }
    }

    /// Derived cube coordinate: `s == -q - r`.
    pub fn s(self) -> i32 {
        -self.q - self.r
    }

    /// Planar axial distance from the origin: `(|q| + |q+r| + |r|) / 2`.
    ///
    /// The division is exact for any coordinate reachable by unit hex steps
    /// from the origin, which covers every coordinate this crate produces.
    /// The floor index does not contribute.
    pub fn axial_distance(self) -> u32 {
        ((self.q.abs() + (self.q + self.r).abs() + self.r.abs()) / 2) as u32
    }

    /// Iterate over all 8 adjacent coordinates: the 6 planar neighbors plus
    /// the cells directly above and below.
    pub fn neighbors(self) -> impl 'static + Iterator<Item = HexCoord> {
        Direction::iter().map(move |direction| self + direction)
    }
}

impl AddAssign<Direction> for HexCoord {
    fn add_assign(&mut self, rhs: Direction) {
        match rhs {
            Direction::North => {
                self.r -= 1;
            }
            Direction::NorthEast => {
                self.q += 1;
                self.r -= 1;
            }
            Direction::SouthEast => {
                self.q += 1;
            }
            Direction::South => {
                self.r += 1;
            }
            Direction::SouthWest => {
                self.q -= 1;
                self.r += 1;
            }
            Direction::NorthWest => {
                self.q -= 1;
            }
            Direction::Up => {
                self.floor += 1;
            }
            Direction::Down => {
                self.floor -= 1;
            }
        }
    }
}

impl Add<Direction> for HexCoord {
    type Output = HexCoord;

    fn add(mut self, rhs: Direction) -> Self::Output {
        self += rhs;
        self
    }
}

impl From<(i32, i32, i32)> for HexCoord {
    fn from((q, r, floor): (i32, i32, i32)) -> HexCoord {
        HexCoord { q, r, floor }
    }
}
