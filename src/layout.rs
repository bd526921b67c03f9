//! The four grid layouts: `odd-r`, `even-r`, `odd-q` and `even-q`.
//!
//! A layout is parsed once, when a dataset is read, and is fixed for a whole
//! map after that.
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref LAYOUT_RE: Regex = Regex::new(r"^(odd|even)-(q|r)$").unwrap();
}

/// Which rows (or columns) are pushed half a cell along.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Shift {
    Odd,
    Even,
}

/// Which axis the offset applies to.
///
/// `R` layouts shift alternate rows and have pointy-topped hexagons. `Q`
/// layouts shift alternate columns and have flat-topped hexagons.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Orientation {
    Q,
    R,
}

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LayoutMode {
    OddR,
    EvenR,
    OddQ,
    EvenQ,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown layout {0:?}: expected one of odd-r, even-r, odd-q, even-q")]
    Unknown(String),
}

impl LayoutMode {
    pub fn new(shift: Shift, orientation: Orientation) -> LayoutMode {
        match (shift, orientation) {
            (Shift::Odd, Orientation::R) => LayoutMode::OddR,
            (Shift::Even, Orientation::R) => LayoutMode::EvenR,
            (Shift::Odd, Orientation::Q) => LayoutMode::OddQ,
            (Shift::Even, Orientation::Q) => LayoutMode::EvenQ,
        }
    }

    pub fn shift(&self) -> Shift {
        match *self {
            LayoutMode::OddR | LayoutMode::OddQ => Shift::Odd,
            LayoutMode::EvenR | LayoutMode::EvenQ => Shift::Even,
        }
    }

    pub fn orientation(&self) -> Orientation {
        match *self {
            LayoutMode::OddR | LayoutMode::EvenR => Orientation::R,
            LayoutMode::OddQ | LayoutMode::EvenQ => Orientation::Q,
        }
    }

    /// `true` for pointy-topped hexagons (the `-r` layouts).
    pub fn is_pointy(&self) -> bool {
        self.orientation() == Orientation::R
    }

    /// How far, in units of the hexagon's short radius, a row (or column)
    /// with the given index is pushed along.
    ///
    /// Odd layouts push odd lines forward; even layouts pull them back. Parity
    /// is two's-complement, so -1 counts as odd.
    pub fn offset_units(&self, line: i32) -> i32 {
        if line & 1 == 0 {
            0
        } else {
            match self.shift() {
                Shift::Odd => 1,
                Shift::Even => -1,
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            LayoutMode::OddR => "odd-r",
            LayoutMode::EvenR => "even-r",
            LayoutMode::OddQ => "odd-q",
            LayoutMode::EvenQ => "even-q",
        }
    }
}

impl Default for LayoutMode {
    fn default() -> LayoutMode {
        LayoutMode::OddR
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<LayoutMode, LayoutError> {
        let caps = LAYOUT_RE.captures(s).ok_or_else(|| LayoutError::Unknown(s.to_string()))?;

        let shift = if &caps[1] == "odd" { Shift::Odd } else { Shift::Even };
        let orientation = if &caps[2] == "r" { Orientation::R } else { Orientation::Q };

        Ok(LayoutMode::new(shift, orientation))
    }
}

impl TryFrom<String> for LayoutMode {
    type Error = LayoutError;

    fn try_from(s: String) -> Result<LayoutMode, LayoutError> {
        s.parse()
    }
}

impl From<LayoutMode> for String {
    fn from(layout: LayoutMode) -> String {
        layout.as_str().to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_all() {
        assert_eq!(Ok(LayoutMode::OddR), "odd-r".parse());
        assert_eq!(Ok(LayoutMode::EvenR), "even-r".parse());
        assert_eq!(Ok(LayoutMode::OddQ), "odd-q".parse());
        assert_eq!(Ok(LayoutMode::EvenQ), "even-q".parse());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Err(LayoutError::Unknown("odd-x".to_string())), "odd-x".parse::<LayoutMode>());
        assert!("Odd-R".parse::<LayoutMode>().is_err());
        assert!(" odd-r".parse::<LayoutMode>().is_err());
        assert!("odd-r-q".parse::<LayoutMode>().is_err());
        assert!("".parse::<LayoutMode>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for layout in &[LayoutMode::OddR, LayoutMode::EvenR, LayoutMode::OddQ, LayoutMode::EvenQ] {
            assert_eq!(Ok(*layout), layout.to_string().parse());
        }
    }

    #[test]
    fn queries() {
        assert_eq!(Shift::Even, LayoutMode::EvenQ.shift());
        assert_eq!(Orientation::Q, LayoutMode::EvenQ.orientation());
        assert!(LayoutMode::OddR.is_pointy());
        assert!(!LayoutMode::OddQ.is_pointy());
        assert_eq!(LayoutMode::EvenR, LayoutMode::new(Shift::Even, Orientation::R));
    }

    #[test]
    fn offset_units_parity() {
        assert_eq!(0, LayoutMode::OddR.offset_units(0));
        assert_eq!(1, LayoutMode::OddR.offset_units(1));
        assert_eq!(1, LayoutMode::OddR.offset_units(-1));
        assert_eq!(0, LayoutMode::EvenQ.offset_units(-2));
        assert_eq!(-1, LayoutMode::EvenQ.offset_units(3));
    }

    #[test]
    fn serde_string_form() {
        let layout: LayoutMode = serde_json::from_str("\"even-q\"").unwrap();
        assert_eq!(LayoutMode::EvenQ, layout);
        assert_eq!("\"even-q\"", serde_json::to_string(&layout).unwrap());
        assert!(serde_json::from_str::<LayoutMode>("\"even\"").is_err());
    }
}
