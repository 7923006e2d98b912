pub mod hex;

pub use hex::{Bounds, Direction, HexCoord, InputDirection};
