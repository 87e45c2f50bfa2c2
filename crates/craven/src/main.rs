//! Craven Caverns dungeon inspector
//!
//! Generates a dungeon level from command-line parameters and prints it as
//! ASCII, together with summary statistics. Useful for eyeballing layouts
//! and for reproducing generation bugs from a seed.

use std::process::ExitCode;

use clap::Parser;

use cc_core::GameRng;
use cc_core::dungeon::{Dungeon, GenParams, Theme, TileType};

/// Generate and print a Craven Caverns dungeon level
#[derive(Parser, Debug)]
#[command(name = "craven")]
#[command(author, version, about = "Craven Caverns - dungeon layout inspector", long_about = None)]
struct Args {
    /// Grid width in tiles
    #[arg(short = 'W', long = "width")]
    width: Option<usize>,

    /// Grid height in tiles
    #[arg(short = 'H', long = "height")]
    height: Option<usize>,

    /// Maximum number of rooms to place
    #[arg(short = 'r', long = "rooms")]
    rooms: Option<usize>,

    /// Dungeon depth; scales width/height/rooms like a level transition
    #[arg(short = 'd', long = "depth", conflicts_with_all = ["width", "height", "rooms"])]
    depth: Option<usize>,

    /// Visual theme index (wraps modulo 3: dungeon, cave, crypt)
    #[arg(short = 't', long = "theme", default_value_t = 0)]
    theme: usize,

    /// RNG seed; random when omitted
    #[arg(short = 's', long = "seed")]
    seed: Option<u64>,

    /// Also list decorative prop placements
    #[arg(short = 'p', long = "props")]
    props: bool,
}

fn params_from(args: &Args) -> GenParams {
    let mut params = match args.depth {
        Some(depth) => GenParams::for_depth(depth),
        None => GenParams::default(),
    };
    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(rooms) = args.rooms {
        params.max_rooms = rooms;
    }
    params.with_theme(Theme::from_index(args.theme))
}

fn print_map(dungeon: &Dungeon) {
    let grid = dungeon.grid();
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| grid.get(x, y).unwrap_or(TileType::Empty).symbol())
            .collect();
        println!("{row}");
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let params = params_from(&args);

    let dungeon = match Dungeon::generate(&params, &mut rng) {
        Ok(dungeon) => dungeon,
        Err(err) => {
            eprintln!("generation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    print_map(&dungeon);

    let grid = dungeon.grid();
    println!();
    println!("seed:   {}", rng.seed());
    println!("theme:  {}", dungeon.theme());
    println!(
        "grid:   {}x{}, {} rooms (of {} requested)",
        grid.width(),
        grid.height(),
        dungeon.rooms().len(),
        params.max_rooms
    );
    println!(
        "tiles:  {} floor, {} doors, {} traps, {} chests",
        grid.count(TileType::Floor),
        grid.count(TileType::Door),
        grid.count(TileType::Trap),
        grid.count(TileType::Chest)
    );
    let start = dungeon.start_position();
    let end = dungeon.end_position();
    println!(
        "start:  ({:.0}, {:.0})  end: ({:.0}, {:.0})",
        start.x, start.z, end.x, end.z
    );
    println!("props:  {}", dungeon.props().len());

    if args.props {
        for prop in dungeon.props() {
            println!(
                "  {:<6} at ({:>4.1}, {:>4.1}) yaw {:>5.1}",
                prop.kind.to_string(),
                prop.position.x,
                prop.position.z,
                prop.rotation_deg
            );
        }
    }

    ExitCode::SUCCESS
}
