use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::boundary::{Boundary, HexEdge};
use crate::grid::AxialCoord;
use crate::layout::LayoutMode;
use crate::size::CoordRange;

/// One hexagon in a HexJSON document.
///
/// Anything besides the coordinate and name is kept, untouched, in `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexRecord {
    pub q: i32,
    pub r: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub data: BTreeMap<String, Value>,
}

impl HexRecord {
    pub fn new(q: i32, r: i32) -> HexRecord {
        HexRecord { q: q, r: r, n: None, name: None, data: BTreeMap::new() }
    }

    pub fn coord(&self) -> AxialCoord {
        AxialCoord::new(self.q, self.r)
    }

    /// The display name: `n` if set, else `name`.
    pub fn name(&self) -> Option<&str> {
        self.n.as_ref().or(self.name.as_ref()).map(|s| s.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundaryRecord {
    #[serde(default)]
    pub edges: Vec<HexEdge>,
}

/// A parsed HexJSON document.
///
/// Hexes and boundaries are keyed by name and iterate in key order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexJson {
    pub layout: LayoutMode,
    #[serde(default)]
    pub hexes: BTreeMap<String, HexRecord>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub boundaries: BTreeMap<String, BoundaryRecord>,
}

impl HexJson {
    pub fn new(layout: LayoutMode) -> HexJson {
        HexJson { layout: layout, hexes: BTreeMap::new(), boundaries: BTreeMap::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// The grid indexes the hexes occupy, or `None` with no hexes.
    pub fn range(&self) -> Option<CoordRange> {
        CoordRange::of(self.hexes.values().map(|hex| hex.coord()))
    }

    /// Looks a hex up by coordinate. Returns the first match in key order.
    pub fn hex_at(&self, coord: AxialCoord) -> Option<(&str, &HexRecord)> {
        self.hexes.iter()
            .find(|&(_, hex)| hex.coord() == coord)
            .map(|(key, hex)| (key.as_str(), hex))
    }

    pub fn boundaries(&self) -> Vec<Boundary> {
        self.boundaries.iter()
            .map(|(name, record)| Boundary::new(name.as_str(), record.edges.clone()))
            .collect()
    }

    /// Merges `other`'s hexes into this document.
    ///
    /// With the same layout, incoming hexes are added and replace any with the
    /// same key; boundaries are kept. With a different layout the two grids
    /// cannot be combined, so `other` replaces this document entirely.
    pub fn add_hexes(&mut self, other: HexJson) {
        if other.layout != self.layout {
            log::warn!(
                "cannot add {} hexes to a {} map; replacing the map",
                other.layout, self.layout
            );
            *self = other;
            return;
        }

        log::debug!("adding {} hexes to {} existing", other.hexes.len(), self.hexes.len());
        self.hexes.extend(other.hexes);
    }

    /// Moves the hex stored under `key` to `to`, carrying along every hex
    /// whose key starts with `key` by the same (dq, dr) step.
    ///
    /// Returns how many hexes moved, or `None` (moving nothing) if `key` is
    /// unknown or a moved hex would leave the `i32` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexgeo::grid::AxialCoord;
    /// use hexgeo::read::hexjson;
    ///
    /// let mut doc = hexjson::from_str(r#"{"layout": "odd-r", "hexes": {
    ///     "E06": { "q": 0, "r": 0 },
    ///     "E06a": { "q": 1, "r": 0 },
    ///     "W01": { "q": 5, "r": 5 }
    /// }}"#).unwrap();
    ///
    /// assert_eq!(Some(2), doc.move_hex("E06", AxialCoord::new(2, 3)));
    /// assert_eq!(AxialCoord::new(3, 3), doc.hexes["E06a"].coord());
    /// assert_eq!(AxialCoord::new(5, 5), doc.hexes["W01"].coord());
    /// ```
    pub fn move_hex(&mut self, key: &str, to: AxialCoord) -> Option<usize> {
        let from = self.hexes.get(key)?.coord();
        let dq = to.q as i64 - from.q as i64;
        let dr = to.r as i64 - from.r as i64;

        let mut moves = Vec::new();
        for (k, hex) in self.hexes.range(key.to_string()..) {
            if !k.starts_with(key) {
                break;
            }
            let q = i32::try_from(hex.q as i64 + dq).ok();
            let r = i32::try_from(hex.r as i64 + dr).ok();
            match (q, r) {
                (Some(q), Some(r)) => moves.push((k.clone(), q, r)),
                _ => {
                    log::warn!("cannot move hex {:?} by ({}, {}): off the grid", k, dq, dr);
                    return None;
                }
            }
        }

        for &(ref k, q, r) in moves.iter() {
            if let Some(hex) = self.hexes.get_mut(k) {
                hex.q = q;
                hex.r = r;
            }
        }

        log::debug!("moved {} hexes under {:?} by ({}, {})", moves.len(), key, dq, dr);
        Some(moves.len())
    }
}
