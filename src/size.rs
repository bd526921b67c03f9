//! Choosing a hexagon size that fits the occupied grid into a pixel box.
use std::fmt;

use itertools::Itertools;

use crate::grid::AxialCoord;
use crate::layout::{LayoutMode, Orientation};

/// A closed range of grid indexes along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexSpan {
    pub min: i32,
    pub max: i32,
}

impl IndexSpan {
    fn of<I: Iterator<Item=i32>>(values: I) -> Option<IndexSpan> {
        values.minmax().into_option().map(|(min, max)| IndexSpan { min: min, max: max })
    }

    /// `max - min`: 0 when every cell sits on the same line.
    pub fn span(&self) -> i64 {
        self.max as i64 - self.min as i64
    }

    fn padded(&self, padding: i32) -> IndexSpan {
        IndexSpan { min: self.min.saturating_sub(padding), max: self.max.saturating_add(padding) }
    }
}

/// The grid indexes occupied by a set of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoordRange {
    pub q: IndexSpan,
    pub r: IndexSpan,
}

impl CoordRange {
    /// Returns `None` when there are no coordinates.
    pub fn of<I: IntoIterator<Item=AxialCoord>>(coords: I) -> Option<CoordRange> {
        let coords: Vec<AxialCoord> = coords.into_iter().collect();

        match (IndexSpan::of(coords.iter().map(|c| c.q)), IndexSpan::of(coords.iter().map(|c| c.r))) {
            (Some(q), Some(r)) => Some(CoordRange { q: q, r: r }),
            _ => None,
        }
    }

    /// Grows the range by `padding` cells on every side, stopping at the
    /// limits of `i32`.
    pub fn padded(&self, padding: i32) -> CoordRange {
        CoordRange { q: self.q.padded(padding), r: self.r.padded(padding) }
    }

    pub fn q_span(&self) -> i64 {
        self.q.span()
    }

    pub fn r_span(&self) -> i64 {
        self.r.span()
    }

    /// The middle of the range, in (fractional) grid units.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.q.min as f64 + self.q.max as f64) / 2.0,
            (self.r.min as f64 + self.r.max as f64) / 2.0,
        )
    }
}

impl fmt::Display for CoordRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "q:{}..{}, r:{}..{}", self.q.min, self.q.max, self.r.min, self.r.max)
    }
}

/// Returns the largest hexagon side length at which every cell in `range`
/// fits within `width` by `height` pixels.
///
/// Shifted lines stick out by half a cell, so they count for an extra half
/// whenever there is more than one line.
///
/// # Examples
///
/// ```
/// use hexgeo::grid::AxialCoord;
/// use hexgeo::layout::LayoutMode;
/// use hexgeo::size::{estimate_size, CoordRange};
///
/// // one row of five hexagons, 300x150 pixels: the width binds
/// let range = CoordRange::of((0..5).map(|q| AxialCoord::new(q, 0))).unwrap();
/// let size = estimate_size(&range, LayoutMode::OddR, 300.0, 150.0);
/// assert!((size - 34.64).abs() < 0.01);
/// ```
pub fn estimate_size(range: &CoordRange, layout: LayoutMode, width: f64, height: f64) -> f64 {
    let q_span = range.q_span() as f64;
    let r_span = range.r_span() as f64;
    let stretch = 2.0 / 3f64.sqrt();

    match layout.orientation() {
        Orientation::R => {
            let (nx, ny) = if range.r_span() == 0 {
                (q_span + 1.0, 1.0)
            } else {
                (q_span + 1.5, r_span + 1.0)
            };
            let dx = nx * 2.0;
            let dy = 1.5 * ny + 0.5;
            (stretch * width / dx).min(height / dy)
        }
        Orientation::Q => {
            let (nx, ny) = if range.q_span() == 0 {
                (1.0, r_span + 1.0)
            } else {
                (q_span + 1.0, r_span + 1.5)
            };
            let dx = 1.5 * nx + 0.5;
            let dy = ny * 2.0;
            (width / dx).min(stretch * height / dy)
        }
    }
}
