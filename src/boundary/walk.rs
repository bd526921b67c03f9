use crate::grid::{edge, side_edge, AxialCoord, EdgeSegment, Side};
use crate::layout::LayoutMode;
use crate::path::{Path, PathCommand};

use super::{Boundary, HexEdge};

/// The shortest relative command that draws `segment`.
fn step(segment: &EdgeSegment) -> PathCommand {
    if segment.dx == 0.0 {
        PathCommand::Vertical(segment.dy)
    } else if segment.dy == 0.0 {
        PathCommand::Horizontal(segment.dx)
    } else {
        PathCommand::Line(segment.dx, segment.dy)
    }
}

/// Joins segments into runs.
///
/// A segment that starts where the previous one ended continues the current
/// run; any other segment starts a new run with a `MoveTo`.
fn stitch_segments<I: IntoIterator<Item=EdgeSegment>>(segments: I) -> Path {
    let mut path = Path::new();
    let mut previous: Option<EdgeSegment> = None;

    for segment in segments {
        let joined = match previous {
            Some(ref p) => p.end == segment.start,
            None => false,
        };

        if !joined {
            path.push(PathCommand::MoveTo(segment.start));
        }
        path.push(step(&segment));

        previous = Some(segment);
    }

    path
}

/// Stitches a list of hexagon sides into path data.
///
/// Sides with an invalid edge number are skipped. The result is empty when no
/// side resolves.
pub fn stitch_edges(edges: &[HexEdge], layout: LayoutMode, size: f64) -> Path {
    stitch_segments(edges.iter().filter_map(|hex_edge| {
        let segment = edge(hex_edge.coord(), layout, size, hex_edge.e);
        if segment.is_none() {
            log::debug!("skipping edge {} of hexagon {}: not a side", hex_edge.e, hex_edge.coord());
        }
        segment
    }))
}

/// Stitches a Boundary into path data.
///
/// If the Boundary is a correctly-ordered closed walk the result is a single
/// run. Every extra run means the walk has a gap (or the Boundary holds
/// several separate loops).
///
/// # Examples
///
/// ```
/// use hexgeo::boundary::{stitch, Boundary, HexEdge};
/// use hexgeo::layout::LayoutMode;
///
/// let boundary = Boundary::new("top", vec![
///     HexEdge { q: 0, r: 0, e: 6 },
///     HexEdge { q: 0, r: 0, e: 1 },
///     HexEdge { q: 0, r: 0, e: 2 },
/// ]);
///
/// assert_eq!("M-8.66 -5l8.66 -5l8.66 5v10", stitch(&boundary, LayoutMode::OddR, 10.0).to_string());
/// ```
pub fn stitch(boundary: &Boundary, layout: LayoutMode, size: f64) -> Path {
    let path = stitch_edges(&boundary.edges, layout, size);
    if path.runs() > 1 {
        log::debug!("boundary {:?} has {} separate runs", boundary.name, path.runs());
    }
    path
}

/// The closed outline of one hexagon, clockwise from side 1.
pub fn outline(coord: AxialCoord, layout: LayoutMode, size: f64) -> Path {
    let mut path = stitch_segments(Side::all().iter().map(|side| side_edge(coord, layout, size, *side)));
    path.push(PathCommand::Close);
    path
}
