//! Hexagonal grid geometry: places the cells of a HexJSON map in pixel space,
//! stitches boundary walks along hexagon sides into SVG path data and fits the
//! result into a drawing area.
//!
//! ```
//! use hexgeo::{LayoutMode, MapLayout, MapOptions};
//! use hexgeo::read::hexjson;
//!
//! # let mut path = std::env::current_dir().unwrap();
//! # path.push("test/read/hexjson/simple.hexjson");
//! let doc = hexjson::open_utf8(&path).unwrap();
//! let map = MapLayout::build(&doc, &MapOptions::default());
//!
//! assert_eq!(LayoutMode::OddR, map.layout);
//! assert_eq!(1, map.boundaries["north"].runs());
//! ```

#[macro_use] extern crate lazy_static;

pub mod geo;
pub mod layout;
pub mod grid;
pub mod path;
pub mod boundary;
pub mod viewport;
pub mod size;
pub mod config;
pub mod read;
pub mod map;

pub use crate::boundary::{stitch, Boundary, HexEdge};
pub use crate::config::MapOptions;
pub use crate::grid::{edge, project, AxialCoord, Side};
pub use crate::layout::LayoutMode;
pub use crate::map::MapLayout;
