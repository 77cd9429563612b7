mod report;
mod tower;

use std::path::PathBuf;
use std::process;

use tessera_core::{CubeRotation, PatternType};
use tessera_grid::{load_grid_config, GridConfig, VoxelGrid};
use tessera_patterns::PatternCatalog;
use tower::LoggingVisuals;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut block_count = 8usize;
    let mut base_rotation = CubeRotation::IDENTITY;
    let mut teardown = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                config_path = args.get(i).map(PathBuf::from);
                if config_path.is_none() {
                    exit_with("--config needs a path");
                }
            }
            "--blocks" => {
                i += 1;
                block_count = match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(n) => n,
                    None => exit_with("invalid --blocks value"),
                };
            }
            "--rotation" => {
                i += 1;
                base_rotation = match args.get(i).and_then(|s| tower::parse_rotation(s)) {
                    Some(r) => r,
                    None => exit_with("invalid --rotation value, expected x,y,z,w"),
                };
            }
            "--teardown" => teardown = true,
            "--help" | "-h" => {
                eprintln!("Usage: tessera-demo [OPTIONS]");
                eprintln!("  --config <path>   Grid config RON file (default: 20x40x20 grid)");
                eprintln!("  --blocks <n>      Blocks to grow the tower to (default: 8)");
                eprintln!("  --rotation <q>    Base block rotation as quaternion x,y,z,w, snapped to");
                eprintln!("                    the nearest cube rotation (default: upright)");
                eprintln!("  --teardown        Destroy every block afterwards");
                process::exit(0);
            }
            other => exit_with(&format!("Unknown argument: {other}")),
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                exit_with(&format!("cannot read {}: {e}", path.display()))
            });
            load_grid_config(&text).unwrap_or_else(|e| exit_with(&e.to_string()))
        }
        None => GridConfig::default(),
    };

    let catalog = PatternCatalog::with_builtins().unwrap_or_else(|e| exit_with(&e.to_string()));
    let mut grid = VoxelGrid::new(&config).unwrap_or_else(|e| exit_with(&e.to_string()));
    let mut visuals = LoggingVisuals::default();

    log::info!("Growing a tower of {block_count} block(s)...");
    let (mut blocks, stats) = tower::grow(
        &catalog,
        PatternType::B,
        base_rotation,
        &mut grid,
        &mut visuals,
        block_count,
    )
    .unwrap_or_else(|e| exit_with(&e.to_string()));

    println!("\n## Tower\n");
    println!("{}", report::format_markdown(&stats, &grid));

    if teardown {
        tower::teardown(&mut blocks, &mut grid, &mut visuals);
        log::info!(
            "Tore down {} block(s), {} visual(s) still live",
            blocks.len(),
            visuals.live()
        );
    }

    log::info!("Done.");
}

fn exit_with(message: &str) -> ! {
    eprintln!("ERROR: {message}");
    process::exit(1);
}
