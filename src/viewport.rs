//! Fitting the map's bounding box to the shape of the drawing area.
use crate::geo::Extent;

/// Folds many boxes into the box that covers them all.
///
/// Returns the empty sentinel (see `Extent::is_empty()`) when there is
/// nothing to fold.
pub fn aggregate<'a, I: IntoIterator<Item=&'a Extent>>(extents: I) -> Extent {
    let mut ret = Extent::empty();
    for extent in extents {
        ret.extend(extent);
    }
    ret
}

/// Returns the viewport for a set of hexagon boxes and a target
/// width/height ratio.
///
/// # Examples
///
/// ```
/// use hexgeo::geo::{Extent, Point};
/// use hexgeo::viewport::fit;
///
/// // 10 wide by 20 tall, into a 2:1 box: widened to 40, around x = 5
/// let cells = vec![Extent::around(Point(5.0, 0.0), 5.0, 10.0)];
/// let viewport = fit(&cells, 2.0);
/// assert_eq!(-15.0, viewport.x.min);
/// assert_eq!(25.0, viewport.x.max);
/// assert_eq!("-15.00 -10.00 40.00 20.00", viewport.view_box());
/// ```
pub fn fit<'a, I: IntoIterator<Item=&'a Extent>>(extents: I, aspect_ratio: f64) -> Extent {
    aggregate(extents).fit_to_aspect(aspect_ratio)
}

impl Extent {
    /// Widens the box, evenly on both sides, if it is taller than
    /// `aspect_ratio` (width / height) allows.
    ///
    /// A box that is too wide is returned as it is: nothing grows vertically.
    /// The empty sentinel is returned unchanged.
    pub fn fit_to_aspect(&self, aspect_ratio: f64) -> Extent {
        let mut ret = *self;

        if self.is_empty() {
            return ret;
        }

        if !(aspect_ratio > 0.0) || !aspect_ratio.is_finite() {
            log::warn!("cannot fit to aspect ratio {}; leaving the viewport as it is", aspect_ratio);
            return ret;
        }

        let dx = self.width();
        let dy = self.height();

        if dy > dx / aspect_ratio {
            let w = dy * aspect_ratio;
            ret.x.min -= (w - dx) / 2.0;
            ret.x.max += (w - dx) / 2.0;
        }

        ret
    }

    /// `"min-x min-y width height"`, two decimals each, as an SVG `viewBox`.
    pub fn view_box(&self) -> String {
        format!("{:.2} {:.2} {:.2} {:.2}", self.x.min, self.y.min, self.width(), self.height())
    }
}

#[cfg(test)]
mod test {
    use crate::geo::{Extent, Point, Span};
    use super::*;

    fn hexes() -> Vec<Extent> {
        vec![
            Extent::around(Point(0.0, 0.0), 8.66, 10.0),
            Extent::around(Point(17.32, 0.0), 8.66, 10.0),
            Extent::around(Point(8.66, -15.0), 8.66, 10.0),
            Extent::around(Point(-8.66, 15.0), 8.66, 10.0),
        ]
    }

    #[test]
    fn aggregate_empty() {
        let extent = aggregate(Vec::<Extent>::new().iter());
        assert!(extent.is_empty());
    }

    #[test]
    fn fit_empty_stays_sentinel() {
        let extent = fit(Vec::<Extent>::new().iter(), 2.0);
        assert!(extent.is_empty());
        assert_eq!(Extent::empty(), extent);
    }

    #[test]
    fn aggregate_covers_all() {
        let cells = hexes();
        let extent = aggregate(&cells);
        for cell in cells.iter() {
            assert!(extent.contains(cell));
        }
        assert!((extent.x.min + 17.32).abs() < 1e-9);
        assert!((extent.x.max - 25.98).abs() < 1e-9);
        assert_eq!(Span { min: -25.0, max: 25.0 }, extent.y);
    }

    #[test]
    fn aggregate_never_shrinks() {
        let cells = hexes();
        let mut previous = aggregate(&cells[0..1]);
        for n in 2..cells.len() + 1 {
            let extent = aggregate(&cells[0..n]);
            assert!(extent.contains(&previous));
            previous = extent;
        }
    }

    #[test]
    fn too_tall_widens_symmetrically() {
        let tall = Extent::around(Point(100.0, 50.0), 10.0, 30.0);
        let fitted = tall.fit_to_aspect(1.0);
        assert_eq!(Span { min: 70.0, max: 130.0 }, fitted.x);
        assert_eq!(tall.y, fitted.y);
        assert_eq!(100.0, fitted.x.mid());
    }

    #[test]
    fn too_wide_is_untouched() {
        let wide = Extent::around(Point(0.0, 0.0), 50.0, 5.0);
        assert_eq!(wide, wide.fit_to_aspect(2.0));
    }

    #[test]
    fn already_fitting_is_unchanged() {
        let extent = Extent { x: Span { min: -30.0, max: 30.0 }, y: Span { min: 0.0, max: 20.0 } };
        let fitted = extent.fit_to_aspect(3.0);
        assert!((fitted.x.min - extent.x.min).abs() < 1e-9);
        assert!((fitted.x.max - extent.x.max).abs() < 1e-9);
        assert_eq!(extent.y, fitted.y);
    }

    #[test]
    fn fit_is_idempotent() {
        let once = fit(&hexes(), 16.0 / 9.0);
        let twice = once.fit_to_aspect(16.0 / 9.0);
        assert!((once.x.min - twice.x.min).abs() < 1e-9);
        assert!((once.x.max - twice.x.max).abs() < 1e-9);
        assert_eq!(once.y, twice.y);
    }

    #[test]
    fn fitted_ratio() {
        let fitted = fit(&hexes(), 2.0);
        assert!((fitted.width() / fitted.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn bad_ratio_is_ignored() {
        let extent = Extent::around(Point(0.0, 0.0), 1.0, 5.0);
        assert_eq!(extent, extent.fit_to_aspect(0.0));
        assert_eq!(extent, extent.fit_to_aspect(-1.0));
        assert_eq!(extent, extent.fit_to_aspect(f64::NAN));
    }

    #[test]
    fn view_box_format() {
        let extent = Extent { x: Span { min: -8.660254, max: 25.980762 }, y: Span { min: -25.0, max: 25.0 } };
        assert_eq!("-8.66 -25.00 34.64 50.00", extent.view_box());
    }
}
