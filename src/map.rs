//! Lays a whole HexJSON document out in pixel space.
use std::collections::BTreeMap;

use crate::boundary::{outline, stitch};
use crate::config::MapOptions;
use crate::geo::Extent;
use crate::grid::{cell, AxialCoord, HexCell};
use crate::layout::LayoutMode;
use crate::path::Path;
use crate::read::hexjson::HexJson;
use crate::size::{estimate_size, CoordRange, IndexSpan};
use crate::viewport::aggregate;

/// Hexagon side length when there is nothing to fit.
pub const DEFAULT_SIZE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MapLayout {
    pub layout: LayoutMode,
    pub size: f64,
    /// Occupied grid indexes, grown by the padding. `None` with no hexes.
    pub range: Option<CoordRange>,
    pub cells: BTreeMap<String, HexCell>,
    /// Path data per boundary; boundaries that draw nothing are left out.
    pub boundaries: BTreeMap<String, Path>,
    /// The fitted drawing box. `None` with no hexes.
    pub viewport: Option<Extent>,
    /// Background tile (width, height), when the options ask for a grid.
    pub grid_tile: Option<(f64, f64)>,
}

impl MapLayout {
    /// Places every hex and stitches every boundary of `hexjson`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexgeo::config::MapOptions;
    /// use hexgeo::map::MapLayout;
    /// use hexgeo::read::hexjson;
    ///
    /// let doc = hexjson::from_str(r#"{
    ///     "layout": "odd-r",
    ///     "hexes": { "A": { "q": 0, "r": 0 }, "B": { "q": 1, "r": 0 } },
    ///     "boundaries": { "top": { "edges": [
    ///         { "q": 0, "r": 0, "e": 6 }, { "q": 0, "r": 0, "e": 1 }
    ///     ] } }
    /// }"#).unwrap();
    ///
    /// let options = MapOptions { size: Some(10.0), ..MapOptions::default() };
    /// let map = MapLayout::build(&doc, &options);
    ///
    /// assert_eq!("M-8.66 -5l8.66 -5l8.66 5", map.boundaries["top"].to_string());
    /// // 34.64 x 20 of cells, widened evenly to the default 2:1
    /// assert_eq!("-11.34 -10.00 40.00 20.00", map.viewport.unwrap().view_box());
    /// ```
    pub fn build(hexjson: &HexJson, options: &MapOptions) -> MapLayout {
        let layout = hexjson.layout;
        let range = hexjson.range().map(|r| r.padded(options.padding.max(0)));

        let size = match (options.size, range) {
            (Some(size), _) => size,
            (None, Some(ref r)) => estimate_size(r, layout, options.width, options.height),
            (None, None) => DEFAULT_SIZE,
        };

        let cells: BTreeMap<String, HexCell> = hexjson.hexes.iter()
            .map(|(key, hex)| (key.clone(), cell(hex.coord(), layout, size)))
            .collect();

        let mut boundaries = BTreeMap::new();
        for boundary in hexjson.boundaries() {
            let path = stitch(&boundary, layout, size);
            if path.is_empty() {
                log::warn!("boundary {:?} has no drawable edges; leaving it out", boundary.name);
                continue;
            }
            boundaries.insert(boundary.name, path);
        }

        let viewport = range.map(|r| {
            let mut extents: Vec<Extent> = cells.values().map(|c| c.extent).collect();
            if options.padding > 0 {
                extents.extend(border_cells(&r).map(|coord| cell(coord, layout, size).extent));
            }
            aggregate(&extents).fit_to_aspect(options.aspect_ratio())
        });

        let grid_tile = if options.grid {
            Some(crate::grid::pattern_tile(layout, size))
        } else {
            None
        };

        log::info!(
            "laid out {} hexes and {} boundaries ({} layout, size {:.3})",
            cells.len(), boundaries.len(), layout, size
        );

        MapLayout {
            layout: layout,
            size: size,
            range: range,
            cells: cells,
            boundaries: boundaries,
            viewport: viewport,
            grid_tile: grid_tile,
        }
    }

    /// The closed outline of the hex stored under `key`.
    pub fn cell_outline(&self, key: &str) -> Option<Path> {
        self.cells.get(key).map(|c| outline(c.coord, self.layout, self.size))
    }
}

/// The two outermost lines at each end of a range, on both axes.
///
/// Whichever way the layout shifts alternate lines, the cells furthest out
/// on every side are among these (at most 16), so their boxes cover the
/// whole range however large it is.
fn border_cells(range: &CoordRange) -> impl Iterator<Item=AxialCoord> {
    let ends = |span: IndexSpan| {
        [
            span.min,
            span.min.saturating_add(1).min(span.max),
            span.max.saturating_sub(1).max(span.min),
            span.max,
        ]
    };
    let qs = ends(range.q);
    let rs = ends(range.r);
    qs.into_iter().flat_map(move |q| rs.into_iter().map(move |r| AxialCoord::new(q, r)))
}
