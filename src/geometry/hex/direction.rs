use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Direction in a stacked hexagonal coordinate system.
///
/// The six planar directions assume pointy-top hexes; `Up` and `Down` move
/// between floors. Declaration order is canonical: it drives [`iter`], and a
/// room's door mask assigns bit *i* to the direction with discriminant *i*.
///
/// [`iter`]: Direction::iter
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum Direction {
    North,
    NorthEast,
    SouthEast,
    South,
    SouthWest,
    NorthWest,
    Up,
    Down,
}

impl Direction {
    /// Iterate through all 8 `Direction`s, the planar six clockwise from
    /// `North`, then `Up` and `Down`.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::North), |direction| {
            use Direction::*;

            match direction {
                North => Some(NorthEast),
                NorthEast => Some(SouthEast),
                SouthEast => Some(South),
                South => Some(SouthWest),
                SouthWest => Some(NorthWest),
                NorthWest => Some(Up),
                Up => Some(Down),
                Down => None,
            }
        })
    }

    /// Iterate through the 6 planar `Direction`s, clockwise from `North`.
    pub fn iter_planar() -> impl Iterator<Item = Direction> {
        Self::iter().take(6)
    }

    /// The direction which undoes a step in this direction.
    pub fn opposite(self) -> Direction {
        use Direction::*;

        match self {
            North => South,
            NorthEast => SouthWest,
            SouthEast => NorthWest,
            South => North,
            SouthWest => NorthEast,
            NorthWest => SouthEast,
            Up => Down,
            Down => Up,
        }
    }

    /// Secondary direction to try when a step in this direction leaves the
    /// grid.
    ///
    /// Only the two northern diagonals have a designated fallback (toward
    /// their southern counterparts); everywhere else a boundary hit is final.
    /// This keeps simplified east/west movement from dead-ending at the rim.
    pub fn fallback(self) -> Option<Direction> {
        match self {
            Direction::NorthWest => Some(Direction::SouthWest),
            Direction::NorthEast => Some(Direction::SouthEast),
            _ => None,
        }
    }

    /// Door-mask bit assigned to this direction.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Simplified four-way-plus-vertical direction, as produced by grid cursor
/// input.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    parse_display::Display,
    parse_display::FromStr,
)]
pub enum InputDirection {
    North,
    South,
    West,
    East,
    Up,
    Down,
}

impl InputDirection {
    /// Project this input direction onto the hex neighborhood.
    ///
    /// North, South, Up and Down map directly. East and West are ambiguous on
    /// a hex grid and are resolved by the current position's `q` coordinate:
    /// on the central column (`q == 0`) they take the northern diagonal,
    /// elsewhere the southern one. The projection is position-dependent so
    /// that repeated east/west input stays on a locally consistent row.
    pub fn to_hex(self, current_q: i32) -> Direction {
        match self {
            InputDirection::North => Direction::North,
            InputDirection::South => Direction::South,
            InputDirection::Up => Direction::Up,
            InputDirection::Down => Direction::Down,
            InputDirection::West => {
                if current_q == 0 {
                    Direction::NorthWest
                } else {
                    Direction::SouthWest
                }
            }
            InputDirection::East => {
                if current_q == 0 {
                    Direction::NorthEast
                } else {
                    Direction::SouthEast
                }
            }
        }
    }

    /// Attempt to parse an input direction from the head of the given string.
    ///
    /// Returns `(maybe_direction, unused_portion)`.
    ///
    /// Legal inputs (case sensitive): `n`, `s`, `w`, `e`, `u`, `d`.
    pub fn try_parse(s: &str) -> (Option<InputDirection>, &str) {
        match s.chars().next() {
            Some('n') => (Some(InputDirection::North), &s[1..]),
            Some('s') => (Some(InputDirection::South), &s[1..]),
            Some('w') => (Some(InputDirection::West), &s[1..]),
            Some('e') => (Some(InputDirection::East), &s[1..]),
            Some('u') => (Some(InputDirection::Up), &s[1..]),
            Some('d') => (Some(InputDirection::Down), &s[1..]),
            _ => (None, s),
        }
    }
}

/// Helper for parsing a line of input directions.
pub struct InputSequence(pub Vec<InputDirection>);

impl FromStr for InputSequence {
    type Err = ParseInputError;

    fn from_str(mut s: &str) -> Result<Self, Self::Err> {
        let mut directions = Vec::with_capacity(s.len());

        while !s.is_empty() {
            let (direction, remaining) = InputDirection::try_parse(s);
            match direction {
                None => return Err(ParseInputError),
                Some(direction) => directions.push(direction),
            }

            s = remaining;
        }

        Ok(InputSequence(directions))
    }
}

/// Parsing failed for a line of input directions
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Parsing input direction failed")]
pub struct ParseInputError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_order_matches_door_bits() {
        for (position, direction) in Direction::iter().enumerate() {
            assert_eq!(direction.bit(), 1 << position);
        }
        assert_eq!(Direction::iter().count(), 8);
        assert_eq!(Direction::iter_planar().count(), 6);
    }

    #[test]
    fn test_opposite_is_involutive() {
        for direction in Direction::iter() {
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }

    #[test]
    fn test_fallback_only_for_northern_diagonals() {
        assert_eq!(
            Direction::NorthWest.fallback(),
            Some(Direction::SouthWest)
        );
        assert_eq!(
            Direction::NorthEast.fallback(),
            Some(Direction::SouthEast)
        );
        for direction in [
            Direction::North,
            Direction::South,
            Direction::SouthWest,
            Direction::SouthEast,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(direction.fallback(), None);
        }
    }

    #[test]
    fn test_input_projection_central_column() {
        assert_eq!(InputDirection::West.to_hex(0), Direction::NorthWest);
        assert_eq!(InputDirection::East.to_hex(0), Direction::NorthEast);
    }

    #[test]
    fn test_input_projection_off_column() {
        assert_eq!(InputDirection::West.to_hex(1), Direction::SouthWest);
        assert_eq!(InputDirection::West.to_hex(-2), Direction::SouthWest);
        assert_eq!(InputDirection::East.to_hex(1), Direction::SouthEast);
        assert_eq!(InputDirection::East.to_hex(-1), Direction::SouthEast);
    }

    #[test]
    fn test_input_projection_direct() {
        for q in [-1, 0, 1] {
            assert_eq!(InputDirection::North.to_hex(q), Direction::North);
            assert_eq!(InputDirection::South.to_hex(q), Direction::South);
            assert_eq!(InputDirection::Up.to_hex(q), Direction::Up);
            assert_eq!(InputDirection::Down.to_hex(q), Direction::Down);
        }
    }

    #[test]
    fn test_parse_sequence() {
        let InputSequence(directions) = "wwnud".parse().unwrap();
        assert_eq!(
            directions,
            vec![
                InputDirection::West,
                InputDirection::West,
                InputDirection::North,
                InputDirection::Up,
                InputDirection::Down,
            ]
        );
    }

    #[test]
    fn test_parse_sequence_rejects_unknown() {
        assert!("nwx".parse::<InputSequence>().is_err());
    }
}
