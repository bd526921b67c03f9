use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::{Extent, Point};

/// Identifies one cell of the grid.
///
/// Moving a hexagon means giving it a new AxialCoord; the coordinate itself
/// never changes.
#[derive(Clone, Copy, Debug, Default, Hash, Ord, Eq, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub fn new(q: i32, r: i32) -> AxialCoord {
        AxialCoord { q, r }
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "q{},r{}", self.q, self.r)
    }
}

/// Lengths derived from a hexagon's side length.
///
/// For pointy-topped hexagons `short` is the horizontal half-width; for
/// flat-topped ones it is the vertical half-height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexGeometry {
    pub side: f64,
    pub half: f64,
    pub short: f64,
    pub sep: f64,
}

impl HexGeometry {
    pub fn new(side: f64) -> HexGeometry {
        HexGeometry {
            side: side,
            half: side / 2.0,
            short: side * (30f64).to_radians().cos(),
            sep: side * 1.5,
        }
    }
}

/// Where one hexagon lands in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexCell {
    pub coord: AxialCoord,
    pub center: Point,
    pub extent: Extent,
}
