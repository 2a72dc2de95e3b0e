//! Marga command line: route search on a grayscale map image.
//!
//! Usage:
//!   marga --map maps/office.png --start 12,40 --goal 300,85
//!   marga --map maps/office.png --start 12,40 --goal 300,85 -n 4 --output route.png
//!   marga --map maps/office.png --start 12,40 --goal 300,85 --frames frames/
//!
//! Exit status: 0 when a route is found, 2 when the goal is unreachable,
//! 1 for invalid input or I/O failure.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info, warn};

use marga::config::MargaConfig;
use marga::io::{FrameRecorder, Overlay, load_luma};
use marga::{Cell, Connectivity, DiscoveryPolicy, OccupancyGrid, PathFinder, SearchOutcome};

/// Grid route search
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grayscale map image (PNG, PGM or BMP)
    #[arg(short, long)]
    map: PathBuf,

    /// Start cell as X,Y (pixel column, row)
    #[arg(short, long, value_parser = parse_cell)]
    start: Cell,

    /// Goal cell as X,Y (pixel column, row)
    #[arg(short, long, value_parser = parse_cell)]
    goal: Cell,

    /// Neighbor connectivity: 4 or 8 (overrides config)
    #[arg(short = 'n', long)]
    connectivity: Option<Connectivity>,

    /// Discovery policy: first-discovery or relaxing (overrides config)
    #[arg(short, long)]
    policy: Option<DiscoveryPolicy>,

    /// Configuration file path (default: configs/marga.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the map with explored cells and the route drawn on it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for frame snapshots (needs render.frame_every > 0 in the config)
    #[arg(short, long)]
    frames: Option<PathBuf>,
}

/// Parse "X,Y" into a cell
fn parse_cell(s: &str) -> Result<Cell, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad X in '{}': {}", s, e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad Y in '{}': {}", s, e))?;
    Ok(Cell::new(x, y))
}

fn load_config(path: Option<&Path>) -> marga::Result<MargaConfig> {
    let config = match path {
        Some(path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };
    Ok(config)
}

fn run(args: &Args) -> marga::Result<SearchOutcome> {
    let config = load_config(args.config.as_deref())?;

    let mut search = config.search_config();
    if let Some(connectivity) = args.connectivity {
        search.connectivity = connectivity;
    }
    if let Some(policy) = args.policy {
        search.policy = policy;
    }

    let image = load_luma(&args.map)?;
    let grid = OccupancyGrid::from_luma(&image, &config.map)?;
    info!(
        "Map {}: {}x{}, {} traversable cells",
        args.map.display(),
        grid.width(),
        grid.height(),
        grid.free_count()
    );
    info!(
        "Searching {} -> {} ({}, {:?})",
        args.start, args.goal, search.connectivity, search.policy
    );

    let finder = PathFinder::new(&grid, search);
    let outcome = match &args.frames {
        Some(dir) => {
            let mut recorder = FrameRecorder::new(&image, config.render, dir)?;
            if !recorder.is_enabled() {
                warn!("--frames given but render.frame_every is 0; no frames will be written");
            }
            let outcome = finder.find_path_observed(args.start, args.goal, |cell, cost| {
                recorder.observe(cell, cost)
            })?;
            let frames = recorder.finish(&outcome)?;
            info!("Wrote {} frames to {}", frames, dir.display());
            outcome
        }
        None => finder.find_path(args.start, args.goal)?,
    };

    if let Some(output) = &args.output {
        let mut overlay = Overlay::new(&image, config.render);
        overlay.draw_outcome(&outcome);
        overlay.save(output)?;
        info!("Saved: {}", output.display());
    }

    Ok(outcome)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Malformed arguments exit 1; status 2 is reserved for "no path"
    let args = Args::try_parse().unwrap_or_else(|e| {
        if e.use_stderr() {
            let _ = e.print();
            std::process::exit(1);
        }
        e.exit()
    });

    match run(&args) {
        Ok(SearchOutcome::Found(found)) => {
            println!(
                "Path found: {} cells, cost {:.3}, {} explored, {} expansions",
                found.path.len(),
                found.cost,
                found.explored.len(),
                found.expansions
            );
            let route: Vec<String> = found.path.iter().map(|c| c.to_string()).collect();
            println!("{}", route.join(" -> "));
        }
        Ok(SearchOutcome::NoPathFound {
            explored,
            expansions,
        }) => {
            println!(
                "No path from {} to {}: {} explored, {} expansions",
                args.start,
                args.goal,
                explored.len(),
                expansions
            );
            std::process::exit(2);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
