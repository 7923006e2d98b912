pub mod config;
pub mod geometry;
pub mod graph;
pub mod navigation;

pub use config::GridConfig;
pub use geometry::hex::{Bounds, Direction, HexCoord, InputDirection};
pub use graph::{CreateRoomError, DoorMask, RoomGraph, RoomNode};
pub use navigation::{HexLayout, Navigator, Spot, WorldPosition};
