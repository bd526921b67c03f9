use std::fmt;

use super::{format_decimal, Point};

/// A closed interval along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    /// The span that contains nothing: `min` is +∞ and `max` is -∞, so any
    /// real value widens it.
    pub fn empty() -> Span {
        Span { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn len(&self) -> f64 {
        self.max - self.min
    }

    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn extend(&mut self, other: &Span) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }
}

/// An axis-aligned bounding box in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub x: Span,
    pub y: Span,
}

impl Extent {
    /// The "nothing to render" sentinel.
    pub fn empty() -> Extent {
        Extent { x: Span::empty(), y: Span::empty() }
    }

    /// A box of `half_width` by `half_height` either side of `center`.
    pub fn around(center: Point, half_width: f64, half_height: f64) -> Extent {
        Extent {
            x: Span { min: center.0 - half_width, max: center.0 + half_width },
            y: Span { min: center.1 - half_height, max: center.1 + half_height },
        }
    }

    /// `true` until at least one real box has been folded in.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }

    pub fn width(&self) -> f64 {
        self.x.len()
    }

    pub fn height(&self) -> f64 {
        self.y.len()
    }

    /// Grows this Extent so it also covers `other`.
    pub fn extend(&mut self, other: &Extent) -> &mut Extent {
        self.x.extend(&other.x);
        self.y.extend(&other.y);
        self
    }

    pub fn contains(&self, other: &Extent) -> bool {
        self.x.min <= other.x.min && self.x.max >= other.x.max
            && self.y.min <= other.y.min && self.y.max >= other.y.max
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Extent(empty)");
        }
        write!(
            f,
            "Extent(x:{}..{}, y:{}..{})",
            format_decimal(self.x.min, 3),
            format_decimal(self.x.max, 3),
            format_decimal(self.y.min, 3),
            format_decimal(self.y.max, 3),
        )
    }
}
