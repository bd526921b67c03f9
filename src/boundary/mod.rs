//! Named outlines drawn along hexagon sides.
//!
//! A Boundary is a walk: an ordered list of hexagon sides. Consecutive sides
//! that meet end-to-start are stitched into one run of path data.
use serde::{Deserialize, Serialize};

use crate::grid::{AxialCoord, Side};

mod walk;

pub use self::walk::{outline, stitch, stitch_edges};

/// One step of a Boundary: side `e` of the hexagon at `(q, r)`.
///
/// `e` keeps the dataset's signed form (see `Side::from_signed()`). It is not
/// validated here: a bad value is skipped when the Boundary is stitched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexEdge {
    pub q: i32,
    pub r: i32,
    pub e: i32,
}

impl HexEdge {
    pub fn new(coord: AxialCoord, side: Side) -> HexEdge {
        HexEdge { q: coord.q, r: coord.r, e: side.to_signed() }
    }

    pub fn coord(&self) -> AxialCoord {
        AxialCoord::new(self.q, self.r)
    }

    /// `None` if `e` is not a valid side.
    pub fn side(&self) -> Option<Side> {
        Side::from_signed(self.e)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    pub name: String,
    pub edges: Vec<HexEdge>,
}

impl Boundary {
    pub fn new<S: Into<String>>(name: S, edges: Vec<HexEdge>) -> Boundary {
        Boundary { name: name.into(), edges: edges }
    }
}
