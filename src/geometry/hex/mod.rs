//! Hexagonal geometry for a stacked (multi-floor) pointy-top grid.
//!
//! Uses techniques from [this reference](https://www.redblobgames.com/grids/hexagons/)

pub mod bounds;
pub mod coordinate;
pub mod direction;

pub use bounds::Bounds;
pub use coordinate::HexCoord;
pub use direction::{Direction, InputDirection};
