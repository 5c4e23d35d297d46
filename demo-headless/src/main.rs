use clap::Parser;
use forest_fire_core::{
    generate, render_console, render_html, FireScenario, GeneratorConfig, TerrainGrid,
};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Forest fire demo: burn a grid, then search for preventive cuts
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Forest fire spread and preventive cut demo", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 10)]
    width: i32,

    /// Grid height in cells
    #[arg(long, default_value_t = 8)]
    height: i32,

    /// Probability that a generated cell is a tree (0-1)
    #[arg(short, long, default_value_t = 0.6)]
    tree_fraction: f64,

    /// Probability that a generated cell is water (0-1)
    #[arg(short, long, default_value_t = 0.1)]
    water_fraction: f64,

    /// RNG seed for a reproducible grid
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load the grid from a text file ('.', 'T', 'W', 'X') instead of generating it
    #[arg(short, long)]
    grid: Option<PathBuf>,

    /// Fire origin column (default: grid centre)
    #[arg(long)]
    fire_x: Option<i32>,

    /// Fire origin row (default: grid centre)
    #[arg(long)]
    fire_y: Option<i32>,

    /// Maximum number of greedy preventive cuts
    #[arg(short, long, default_value_t = 3)]
    cuts: usize,

    /// Directory to write HTML snapshots into
    #[arg(long)]
    html_dir: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Forest Fire Demo ===\n");

    let grid = match &args.grid {
        Some(path) => {
            info!("Loading grid from {}", path.display());
            fs::read_to_string(path)?.parse::<TerrainGrid>()?
        }
        None => {
            let mut config = GeneratorConfig::new(args.width, args.height)
                .with_fractions(args.tree_fraction, args.water_fraction);
            config.seed = args.seed;
            generate(&config)?
        }
    };

    let fire_x = args.fire_x.unwrap_or(grid.width() / 2);
    let fire_y = args.fire_y.unwrap_or(grid.height() / 2);

    let mut scenario = FireScenario::new(grid);

    println!("Initial map:");
    print!("{}", render_console(scenario.baseline()));
    export(&args, "initial_map.html", "Initial map", scenario.baseline())?;

    let burned = scenario.ignite(fire_x, fire_y)?;
    println!("\nFire from ({fire_x}, {fire_y}) burned {burned} cells:");
    print!("{}", render_console(scenario.working()));
    export(&args, "fire.html", "Fire without cuts", scenario.working())?;

    // Single cut on a copy so the multi-cut run starts from the same terrain
    let mut single = scenario.clone();
    single.reset();
    match single.apply_best_cut(fire_x, fire_y)? {
        Some(record) => println!("\nBest single {record}"),
        None => println!("\nNo single cut improves the situation."),
    }
    print!("{}", render_console(single.working()));
    export(&args, "single_cut.html", "Fire after best cut", single.working())?;

    scenario.reset();
    let records = scenario.apply_best_cuts(fire_x, fire_y, args.cuts)?;
    println!("\nUp to {} greedy cuts ({} applied):", args.cuts, records.len());
    for (i, record) in records.iter().enumerate() {
        println!("  {}. {} (saves {})", i + 1, record, record.reduction());
    }
    print!("{}", render_console(scenario.working()));
    export(&args, "n_cuts.html", "Fire after greedy cuts", scenario.working())?;

    println!("\nLegend: ⬜ bare ground, 🌳 tree, 💧 water, 🔥 burnt");
    Ok(())
}

fn export(args: &Args, file_name: &str, title: &str, grid: &TerrainGrid) -> Result<(), Box<dyn Error>> {
    let Some(dir) = &args.html_dir else {
        return Ok(());
    };
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, render_html(grid, title))?;
    info!("HTML export written to {}", path.display());
    Ok(())
}
