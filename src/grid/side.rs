use std::fmt;

use crate::geo::Point;
use crate::layout::LayoutMode;

use super::placement::{lattice_center, lattice_point};
use super::types::{AxialCoord, HexGeometry};

/// Which way to walk along an edge.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// One of a hexagon's six sides, with a walking direction.
///
/// Sides are numbered 1 to 6 clockwise (on screen). For pointy-topped
/// hexagons side 1 runs from the top corner down to the upper-right corner;
/// for flat-topped hexagons it is the top side, left to right.
///
/// Datasets write a side as a signed integer: the magnitude is the index and
/// a negative sign means `Backward`. Convert with `from_signed()` and
/// `to_signed()`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Side {
    index: u8,
    direction: Direction,
}

impl Side {
    /// Returns `None` unless `index` is within 1..=6.
    pub fn new(index: u8, direction: Direction) -> Option<Side> {
        if index >= 1 && index <= 6 {
            Some(Side { index: index, direction: direction })
        } else {
            None
        }
    }

    pub fn forward(index: u8) -> Option<Side> {
        Side::new(index, Direction::Forward)
    }

    /// Decodes the signed-integer form: `-6..=-1` or `1..=6`.
    pub fn from_signed(e: i32) -> Option<Side> {
        let direction = if e >= 0 { Direction::Forward } else { Direction::Backward };
        let index = e.unsigned_abs();
        if index > 6 {
            return None;
        }
        Side::new(index as u8, direction)
    }

    pub fn to_signed(&self) -> i32 {
        match self.direction {
            Direction::Forward => self.index as i32,
            Direction::Backward => -(self.index as i32),
        }
    }

    /// The six sides in order, all walked forward.
    pub fn all() -> [Side; 6] {
        let mut ret = [Side { index: 1, direction: Direction::Forward }; 6];
        for (i, side) in ret.iter_mut().enumerate() {
            side.index = i as u8 + 1;
        }
        ret
    }

    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The same side, walked the other way.
    pub fn reversed(&self) -> Side {
        let direction = match self.direction {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        };
        Side { index: self.index, direction: direction }
    }

    /// The side across the hexagon (1 <-> 4, 2 <-> 5, 3 <-> 6).
    ///
    /// This is also how the neighbour sharing this side numbers it; walked in
    /// the same direction, its segment runs the opposite way to ours.
    pub fn opposite(&self) -> Side {
        Side { index: (self.index + 2) % 6 + 1, direction: self.direction }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_signed())
    }
}

/// A straight segment from `start` to `end`.
///
/// `start` and `end` are rounded to three decimals so that the same corner
/// computed from two different hexagons compares equal. `dx` and `dy` are
/// exact.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment {
    pub start: Point,
    pub dx: f64,
    pub dy: f64,
    pub end: Point,
}

impl EdgeSegment {
    /// `[x0, y0, dx, dy, x1, y1]`
    pub fn to_array(&self) -> [f64; 6] {
        [self.start.0, self.start.1, self.dx, self.dy, self.end.0, self.end.1]
    }
}

/// Corner offsets from the center on the lattice, clockwise. Side `i` runs
/// from corner `i - 1` to corner `i % 6`.
const POINTY_CORNERS: [(i64, i64); 6] = [(0, -2), (1, -1), (1, 1), (0, 2), (-1, 1), (-1, -1)];
const FLAT_CORNERS: [(i64, i64); 6] = [(-1, -1), (1, -1), (2, 0), (1, 1), (-1, 1), (-2, 0)];

/// Returns the segment for `side` of the hexagon at `coord`.
///
/// Corners are placed on the integer lattice before scaling (see
/// `lattice_center()`), so every hexagon sharing a corner computes exactly
/// the same point for it, whatever `size` is.
pub fn side_edge(coord: AxialCoord, layout: LayoutMode, size: f64, side: Side) -> EdgeSegment {
    let g = HexGeometry::new(size);
    let (cx, cy) = lattice_center(coord, layout);
    let corners = if layout.is_pointy() { &POINTY_CORNERS } else { &FLAT_CORNERS };

    let i = side.index() as usize;
    let (ax, ay) = corners[i - 1];
    let (bx, by) = corners[i % 6];
    let start = lattice_point((cx + ax, cy + ay), layout, &g);
    let end = lattice_point((cx + bx, cy + by), layout, &g);
    let Point(dx, dy) = lattice_point((bx - ax, by - ay), layout, &g);

    match side.direction() {
        Direction::Forward => EdgeSegment {
            start: start.rounded(3),
            dx: dx,
            dy: dy,
            end: end.rounded(3),
        },
        Direction::Backward => EdgeSegment {
            start: end.rounded(3),
            dx: -dx,
            dy: -dy,
            end: start.rounded(3),
        },
    }
}

/// Returns the segment for a signed edge reference, or `None` if `|e|` is
/// not within 1..=6.
///
/// # Examples
///
/// ```
/// use hexgeo::geo::Point;
/// use hexgeo::grid::{edge, AxialCoord};
/// use hexgeo::layout::LayoutMode;
///
/// let right = edge(AxialCoord::new(0, 0), LayoutMode::OddR, 10.0, 2).unwrap();
/// assert_eq!(Point(8.66, -5.0), right.start);
/// assert_eq!(Point(8.66, 5.0), right.end);
///
/// let back = edge(AxialCoord::new(0, 0), LayoutMode::OddR, 10.0, -2).unwrap();
/// assert_eq!(right.start, back.end);
///
/// assert!(edge(AxialCoord::new(0, 0), LayoutMode::OddR, 10.0, 7).is_none());
/// ```
pub fn edge(coord: AxialCoord, layout: LayoutMode, size: f64, e: i32) -> Option<EdgeSegment> {
    Side::from_signed(e).map(|side| side_edge(coord, layout, size, side))
}
