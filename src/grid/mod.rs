//! Hexagon placement on the grid: centers, bounding boxes and sides.
//!
//! Everything here is a pure function of `(coordinate, layout, size)`.

mod types;
mod placement;
mod side;

pub use self::types::{AxialCoord, HexCell, HexGeometry};
pub use self::placement::{cell, neighbour, pattern_tile, project};
pub use self::side::{edge, side_edge, Direction, EdgeSegment, Side};
