//! Drawing instructions as data.
//!
//! A `Path` prints as SVG path data, but nothing here depends on how it is
//! eventually drawn.
use std::fmt;

use crate::geo::{format_decimal, Point};

/// Decimals kept for absolute coordinates.
pub const COORD_PLACES: usize = 3;

/// Decimals kept for relative steps.
pub const DELTA_PLACES: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Start a new run at an absolute point.
    MoveTo(Point),
    /// Relative step straight down (or up, if negative).
    Vertical(f64),
    /// Relative step straight right (or left, if negative).
    Horizontal(f64),
    /// Relative step in any direction.
    Line(f64, f64),
    /// Back to the start of the current run.
    Close,
}

impl fmt::Display for PathCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PathCommand::MoveTo(Point(x, y)) => {
                write!(f, "M{} {}", format_decimal(x, COORD_PLACES), format_decimal(y, COORD_PLACES))
            }
            PathCommand::Vertical(dy) => write!(f, "v{}", format_decimal(dy, DELTA_PLACES)),
            PathCommand::Horizontal(dx) => write!(f, "h{}", format_decimal(dx, DELTA_PLACES)),
            PathCommand::Line(dx, dy) => {
                write!(f, "l{} {}", format_decimal(dx, DELTA_PLACES), format_decimal(dy, DELTA_PLACES))
            }
            PathCommand::Close => write!(f, "z"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path(pub Vec<PathCommand>);

impl Path {
    pub fn new() -> Path {
        Path(vec![])
    }

    pub fn push(&mut self, command: PathCommand) {
        self.0.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.0
    }

    /// Number of separate runs, i.e. of `MoveTo` commands.
    pub fn runs(&self) -> usize {
        self.0.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for command in self.0.iter() {
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}
