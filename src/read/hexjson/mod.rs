//! Reads HexJSON documents.
//!
//! A HexJSON document names its grid layout, lists hexes by key and may
//! list named boundaries as walks along hexagon sides:
//!
//! ```json
//! {
//!   "layout": "odd-r",
//!   "hexes": { "A": { "q": 0, "r": 0, "n": "Alpha" } },
//!   "boundaries": { "north": { "edges": [ { "q": 0, "r": 0, "e": 1 } ] } }
//! }
//! ```
//!
//! # Examples
//!
//! Open by filename:
//!
//! ```
//! use hexgeo::read::hexjson;
//!
//! # let mut path = std::env::current_dir().unwrap();
//! # path.push("test/read/hexjson/simple.hexjson");
//! let doc = hexjson::open_utf8(&path).unwrap();
//!
//! for (key, hex) in doc.hexes.iter() {
//!     println!("{} at {}: {:?}", key, hex.coord(), hex.name());
//! }
//! ```
//!
//! Open by `io::Read` implementor, in a legacy encoding:
//!
//! ```
//! use std::fs;
//! use std::io;
//! use hexgeo::read::hexjson;
//!
//! # let mut path = std::env::current_dir().unwrap();
//! # path.push("test/read/hexjson/latin1.hexjson");
//! let r = io::BufReader::new(fs::File::open(&path).unwrap());
//! let doc = hexjson::from_reader(r, encoding::all::ISO_8859_1).unwrap();
//! assert_eq!(Some("Café"), doc.hexes["A"].name());
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use encoding::{DecoderTrap, Encoding, EncodingRef};
use thiserror::Error;

mod types;

pub use self::types::{BoundaryRecord, HexJson, HexRecord};

#[derive(Debug, Error)]
pub enum HexJsonError {
    #[error("could not read HexJSON: {0}")]
    Io(#[from] io::Error),
    #[error("could not decode HexJSON as {encoding}: {message}")]
    Decode {
        encoding: &'static str,
        message: String,
    },
    #[error("invalid HexJSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_str(s: &str) -> Result<HexJson, HexJsonError> {
    let doc: HexJson = serde_json::from_str(s.trim_start_matches('\u{feff}'))?;
    log::debug!(
        "parsed {} layout with {} hexes and {} boundaries",
        doc.layout, doc.hexes.len(), doc.boundaries.len()
    );
    Ok(doc)
}

/// Reads a whole document from `r`, decoding bytes with `encoding`.
pub fn from_reader<R: Read>(mut r: R, encoding: EncodingRef) -> Result<HexJson, HexJsonError> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes)?;

    let text = encoding.decode(&bytes, DecoderTrap::Strict).map_err(|message| HexJsonError::Decode {
        encoding: encoding.name(),
        message: message.into_owned(),
    })?;

    from_str(&text)
}

pub fn open(path: &Path, encoding: EncodingRef) -> Result<HexJson, HexJsonError> {
    log::info!("reading {}", path.display());
    let file = fs::File::open(path)?;
    from_reader(io::BufReader::new(file), encoding)
}

pub fn open_utf8(path: &Path) -> Result<HexJson, HexJsonError> {
    open(path, encoding::all::UTF_8)
}
