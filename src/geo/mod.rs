use std::fmt;

mod extent;

pub use self::extent::{Extent, Span};

/// A place in pixel space.
///
/// `y` grows downwards, like SVG or HTML5 <canvas> coordinates. Grid rows and
/// columns with larger indexes land at smaller `y`, so the map reads upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point(pub f64, pub f64);

impl Point {
    /// Returns this Point with both coordinates rounded to `places` decimals.
    pub fn rounded(&self, places: usize) -> Point {
        Point(round_to(self.0, places), round_to(self.1, places))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", format_decimal(self.0, 3), format_decimal(self.1, 3))
    }
}

/// Rounds `v` to `places` decimals.
///
/// Negative zero comes back as zero, so rounded values compare and print the
/// same way regardless of which side of zero the noise was on.
pub fn round_to(v: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (v * factor).round() / factor + 0.0
}

/// Formats `v` with at most `places` decimals, dropping trailing zeros.
///
/// # Examples
///
/// ```
/// use hexgeo::geo::format_decimal;
///
/// assert_eq!("12.34", format_decimal(12.34000001, 3));
/// assert_eq!("10", format_decimal(10.00000, 3));
/// assert_eq!("-8.66", format_decimal(-8.660254, 2));
/// ```
pub fn format_decimal(v: f64, places: usize) -> String {
    let fixed = format!("{:.*}", places, v);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        &fixed[..]
    };

    if trimmed == "-0" {
        String::from("0")
    } else {
        trimmed.to_string()
    }
}
