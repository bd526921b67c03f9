use std::env;
use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use hexgeo::config::MapOptions;
use hexgeo::map::MapLayout;
use hexgeo::read::hexjson;

fn fail(message: &str) -> ! {
    writeln!(&mut io::stderr(), "{}", message).ok();
    process::exit(1);
}

fn main() {
    env_logger::init();

    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "hexmap-layout".to_string());

    if args.len() < 1 || args.len() > 2 {
        fail(&format!("Usage: {} <HEXJSON_PATH> [OPTIONS_TOML]", program));
    }

    let hexjson_path = match args.next() {
        Some(arg) => PathBuf::from(arg),
        None => fail(&format!("Usage: {} <HEXJSON_PATH> [OPTIONS_TOML]", program)),
    };

    let options = match args.next() {
        None => MapOptions::default(),
        Some(arg) => match MapOptions::load(&PathBuf::from(arg)) {
            Err(err) => fail(&err.to_string()),
            Ok(options) => options,
        },
    };

    let doc = match hexjson::open_utf8(&hexjson_path) {
        Err(err) => fail(&err.to_string()),
        Ok(doc) => doc,
    };

    let map = MapLayout::build(&doc, &options);

    println!("layout {} size {:.3}", map.layout, map.size);

    for (key, cell) in map.cells.iter() {
        let name = doc.hexes.get(key).and_then(|hex| hex.name()).unwrap_or("");
        println!("hex {} {} {:?} center {} {}", key, cell.coord, name, cell.center, cell.extent);
    }

    for (name, path) in map.boundaries.iter() {
        println!("boundary {} {}", name, path);
    }

    if let Some((width, height)) = map.grid_tile {
        println!("grid tile {:.2} {:.2}", width, height);
    }

    match map.viewport {
        Some(viewport) => println!("viewBox {}", viewport.view_box()),
        None => println!("viewBox none: no hexes"),
    }
}
