use crate::geo::{Extent, Point};
use crate::layout::{LayoutMode, Orientation};

use super::side::Side;
use super::types::{AxialCoord, HexCell, HexGeometry};

/// Returns the pixel center of a hexagon of side `size`.
///
/// Larger `r` (or `q`, for column layouts) moves the hexagon up, to smaller
/// `y`.
///
/// # Examples
///
/// ```
/// use hexgeo::geo::Point;
/// use hexgeo::grid::{project, AxialCoord};
/// use hexgeo::layout::LayoutMode;
///
/// assert_eq!(Point(0.0, -60.0), project(AxialCoord::new(0, 2), LayoutMode::OddR, 20.0));
/// assert_eq!(Point(60.0, 0.0), project(AxialCoord::new(2, 0), LayoutMode::OddQ, 20.0));
/// ```
pub fn project(coord: AxialCoord, layout: LayoutMode, size: f64) -> Point {
    lattice_point(lattice_center(coord, layout), layout, &HexGeometry::new(size))
}

/// The center of `coord` on the corner lattice.
///
/// Every center and corner of the grid sits on a whole-numbered lattice: for
/// row layouts x counts `short`s and y counts `half`s; column layouts swap
/// the two. Doing the integer arithmetic first means a corner shared by
/// several hexagons comes out as the same float from each of them.
pub(super) fn lattice_center(coord: AxialCoord, layout: LayoutMode) -> (i64, i64) {
    let q = coord.q as i64;
    let r = coord.r as i64;

    match layout.orientation() {
        Orientation::R => (2 * q + layout.offset_units(coord.r) as i64, -3 * r),
        Orientation::Q => (3 * q, -(2 * r + layout.offset_units(coord.q) as i64)),
    }
}

/// Scales a lattice position to pixels.
pub(super) fn lattice_point(k: (i64, i64), layout: LayoutMode, g: &HexGeometry) -> Point {
    match layout.orientation() {
        Orientation::R => Point(k.0 as f64 * g.short, k.1 as f64 * g.half),
        Orientation::Q => Point(k.0 as f64 * g.half, k.1 as f64 * g.short),
    }
}

/// Returns the center and bounding box of one hexagon.
///
/// Pointy-topped hexagons reach `short` either side horizontally and `size`
/// vertically; flat-topped ones are the transpose.
pub fn cell(coord: AxialCoord, layout: LayoutMode, size: f64) -> HexCell {
    let g = HexGeometry::new(size);
    let center = project(coord, layout, size);

    let extent = if layout.is_pointy() {
        Extent::around(center, g.short, g.side)
    } else {
        Extent::around(center, g.side, g.short)
    };

    HexCell { coord: coord, center: center, extent: extent }
}

/// Returns the cell on the other side of `side`.
///
/// Seen from the returned cell the shared edge is `side.opposite()`. The
/// direction of `side` is ignored.
pub fn neighbour(coord: AxialCoord, layout: LayoutMode, side: Side) -> AxialCoord {
    // Per side: (step to the next shifted line, step within the line, half
    // step within the line when changing lines). The shift of both lines then
    // decides whether the half step lands on the same index or the next one.
    let (along, across, half) = match (layout.orientation(), side.index()) {
        (Orientation::R, 1) => (1, 0, 1),
        (Orientation::R, 2) => (0, 1, 0),
        (Orientation::R, 3) => (-1, 0, 1),
        (Orientation::R, 4) => (-1, 0, -1),
        (Orientation::R, 5) => (0, -1, 0),
        (Orientation::R, _) => (1, 0, -1),
        (Orientation::Q, 1) => (0, 1, 0),
        (Orientation::Q, 2) => (1, 0, 1),
        (Orientation::Q, 3) => (1, 0, -1),
        (Orientation::Q, 4) => (0, -1, 0),
        (Orientation::Q, 5) => (-1, 0, -1),
        (Orientation::Q, _) => (-1, 0, 1),
    };

    // `line` is the shifted axis (r for row layouts, q for column layouts)
    let (line, other) = match layout.orientation() {
        Orientation::R => (coord.r, coord.q),
        Orientation::Q => (coord.q, coord.r),
    };

    let new_line = line + along;
    let new_other = if along == 0 {
        other + across
    } else {
        other + (layout.offset_units(line) + half - layout.offset_units(new_line)) / 2
    };

    match layout.orientation() {
        Orientation::R => AxialCoord::new(new_other, new_line),
        Orientation::Q => AxialCoord::new(new_line, new_other),
    }
}

/// Returns the (width, height) of the tile that repeats across the grid.
pub fn pattern_tile(layout: LayoutMode, size: f64) -> (f64, f64) {
    let g = HexGeometry::new(size);
    if layout.is_pointy() {
        (g.short * 2.0, g.side * 3.0)
    } else {
        (g.side * 3.0, g.short * 2.0)
    }
}

#[cfg(test)]
mod test {
    use crate::geo::Point;
    use crate::grid::side::{side_edge, Side};
    use crate::grid::types::{AxialCoord, HexGeometry};
    use crate::layout::LayoutMode;
    use super::*;

    const LAYOUTS: [LayoutMode; 4] = [LayoutMode::OddR, LayoutMode::EvenR, LayoutMode::OddQ, LayoutMode::EvenQ];

    fn close(a: Point, b: Point) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn origin_is_zero() {
        for layout in LAYOUTS.iter() {
            assert_eq!(Point(0.0, 0.0), project(AxialCoord::new(0, 0), *layout, 10.0));
        }
    }

    #[test]
    fn odd_r() {
        let s = HexGeometry::new(10.0).short;
        assert!(close(Point(2.0 * s, 0.0), project(AxialCoord::new(1, 0), LayoutMode::OddR, 10.0)));
        assert!(close(Point(s, -15.0), project(AxialCoord::new(0, 1), LayoutMode::OddR, 10.0)));
        assert!(close(Point(s, 15.0), project(AxialCoord::new(0, -1), LayoutMode::OddR, 10.0)));
        assert!(close(Point(0.0, -30.0), project(AxialCoord::new(0, 2), LayoutMode::OddR, 10.0)));
    }

    #[test]
    fn even_r() {
        let s = HexGeometry::new(10.0).short;
        assert!(close(Point(-s, -15.0), project(AxialCoord::new(0, 1), LayoutMode::EvenR, 10.0)));
        assert!(close(Point(4.0 * s, -30.0), project(AxialCoord::new(2, 2), LayoutMode::EvenR, 10.0)));
    }

    #[test]
    fn odd_q() {
        let s = HexGeometry::new(10.0).short;
        assert!(close(Point(15.0, -s), project(AxialCoord::new(1, 0), LayoutMode::OddQ, 10.0)));
        assert!(close(Point(15.0, -3.0 * s), project(AxialCoord::new(1, 1), LayoutMode::OddQ, 10.0)));
        assert!(close(Point(30.0, -2.0 * s), project(AxialCoord::new(2, 1), LayoutMode::OddQ, 10.0)));
    }

    #[test]
    fn even_q() {
        let s = HexGeometry::new(10.0).short;
        assert!(close(Point(15.0, s), project(AxialCoord::new(1, 0), LayoutMode::EvenQ, 10.0)));
        assert!(close(Point(-15.0, 3.0 * s), project(AxialCoord::new(-1, -1), LayoutMode::EvenQ, 10.0)));
    }

    #[test]
    fn project_is_repeatable() {
        for layout in LAYOUTS.iter() {
            for q in -3..4 {
                for r in -3..4 {
                    let c = AxialCoord::new(q, r);
                    assert_eq!(project(c, *layout, 12.5), project(c, *layout, 12.5));
                }
            }
        }
    }

    #[test]
    fn pointy_cell_extent() {
        let s = HexGeometry::new(10.0).short;
        let hex = cell(AxialCoord::new(0, 0), LayoutMode::OddR, 10.0);
        assert!((hex.extent.x.min + s).abs() < 1e-9);
        assert!((hex.extent.x.max - s).abs() < 1e-9);
        assert_eq!(-10.0, hex.extent.y.min);
        assert_eq!(10.0, hex.extent.y.max);
    }

    #[test]
    fn flat_cell_extent() {
        let s = HexGeometry::new(10.0).short;
        let hex = cell(AxialCoord::new(2, 0), LayoutMode::EvenQ, 10.0);
        assert_eq!(Point(30.0, 0.0), hex.center);
        assert_eq!(20.0, hex.extent.x.min);
        assert_eq!(40.0, hex.extent.x.max);
        assert!((hex.extent.y.min + s).abs() < 1e-9);
        assert!((hex.extent.y.max - s).abs() < 1e-9);
    }

    #[test]
    fn neighbours_odd_r() {
        let forward = |i| Side::forward(i).unwrap();
        let c = AxialCoord::new(0, 0);
        assert_eq!(AxialCoord::new(0, 1), neighbour(c, LayoutMode::OddR, forward(1)));
        assert_eq!(AxialCoord::new(1, 0), neighbour(c, LayoutMode::OddR, forward(2)));
        assert_eq!(AxialCoord::new(0, -1), neighbour(c, LayoutMode::OddR, forward(3)));
        assert_eq!(AxialCoord::new(-1, -1), neighbour(c, LayoutMode::OddR, forward(4)));
        assert_eq!(AxialCoord::new(-1, 0), neighbour(c, LayoutMode::OddR, forward(5)));
        assert_eq!(AxialCoord::new(-1, 1), neighbour(c, LayoutMode::OddR, forward(6)));
    }

    #[test]
    fn neighbour_centers_are_one_step_away() {
        // Every neighbour's center sits 2·short away (the inner diameter).
        for layout in LAYOUTS.iter() {
            let step = HexGeometry::new(10.0).short * 2.0;
            for q in -2..3 {
                for r in -2..3 {
                    let c = AxialCoord::new(q, r);
                    let p = project(c, *layout, 10.0);
                    for side in Side::all().iter() {
                        let n = project(neighbour(c, *layout, *side), *layout, 10.0);
                        let d = ((n.0 - p.0).powi(2) + (n.1 - p.1).powi(2)).sqrt();
                        assert!((d - step).abs() < 1e-9, "{} {} {:?}", layout, c, side);
                    }
                }
            }
        }
    }

    #[test]
    fn shared_edges_coincide() {
        for layout in LAYOUTS.iter() {
            for q in -2..3 {
                for r in -2..3 {
                    let c = AxialCoord::new(q, r);
                    for side in Side::all().iter() {
                        let n = neighbour(c, *layout, *side);
                        let mine = side_edge(c, *layout, 10.0, *side);
                        let theirs = side_edge(n, *layout, 10.0, side.opposite());
                        assert_eq!(mine.start, theirs.end, "{} {} {:?}", layout, c, side);
                        assert_eq!(mine.end, theirs.start, "{} {} {:?}", layout, c, side);

                        // walking the neighbour's side backwards retraces ours
                        let retraced = side_edge(n, *layout, 10.0, side.opposite().reversed());
                        assert_eq!(mine.start, retraced.start);
                        assert_eq!(mine.end, retraced.end);
                    }
                }
            }
        }
    }

    #[test]
    fn shared_edges_coincide_at_any_size() {
        // sizes whose half lands on a fourth decimal of 5, far from the origin
        for size in &[12.371, 34.641, 7.0005, 10.0] {
            for layout in LAYOUTS.iter() {
                for q in (-40..40).step_by(3) {
                    for r in (-40..40).step_by(3) {
                        let c = AxialCoord::new(q, r);
                        for side in Side::all().iter() {
                            let mine = side_edge(c, *layout, *size, *side);
                            let theirs = side_edge(neighbour(c, *layout, *side), *layout, *size, side.opposite());
                            assert_eq!(mine.start, theirs.end, "{} {} {} {:?}", size, layout, c, side);
                            assert_eq!(mine.end, theirs.start, "{} {} {} {:?}", size, layout, c, side);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn lattice_matches_formulas() {
        let g = HexGeometry::new(12.371);
        let c = AxialCoord::new(-7, 5);
        let p = project(c, LayoutMode::OddR, 12.371);
        assert!(close(Point(-14.0 * g.short + g.short, -5.0 * g.sep), p));
        let p = project(c, LayoutMode::EvenQ, 12.371);
        assert!(close(Point(-7.0 * g.sep, -(10.0 * g.short - g.short)), p));
    }

    #[test]
    fn neighbour_is_symmetric() {
        for layout in LAYOUTS.iter() {
            let c = AxialCoord::new(3, -1);
            for side in Side::all().iter() {
                let n = neighbour(c, *layout, *side);
                assert_eq!(c, neighbour(n, *layout, side.opposite()));
            }
        }
    }

    #[test]
    fn tile_sizes() {
        let s = HexGeometry::new(10.0).short;
        assert_eq!((2.0 * s, 30.0), pattern_tile(LayoutMode::EvenR, 10.0));
        assert_eq!((30.0, 2.0 * s), pattern_tile(LayoutMode::OddQ, 10.0));
    }
}
