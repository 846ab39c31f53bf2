// Import the clap Parser derive macro for CLI argument parsing
use clap::{Parser, ValueEnum};

// Import our library types
use ascii_garden::config::terminal_width;
use ascii_garden::registry::{FLOWER, TREE};
use ascii_garden::{
    ClearMode, ComposeOptions, GardenComposer, GardenRenderer, LayoutPolicy, PlantParams,
    PlantRegistry, PlantSpec,
};

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How plants are arranged on screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Layout {
    /// Single row, all plants standing on one ground line
    Row,
    /// Rows of `--cols` plants
    Grid,
    /// One plant under another
    Stack,
}

/// ASCII garden - draw a row of flowers and trees in the terminal
///
/// Every plant is drawn from its own seed, derived from `--seed`, so the
/// same seed always grows the same garden.
#[derive(Parser)]
#[command(name = "garden")]
#[command(about = "Draw ASCII flowers and trees as a garden", long_about = None)]
#[command(version)]
struct Args {
    /// Number of flowers (random style each)
    #[arg(short = 'n', long, default_value_t = 6)]
    count: usize,

    /// Number of trees (random style each)
    #[arg(short, long, default_value_t = 0)]
    trees: usize,

    /// Extra plants by kind, e.g. `-p tulip -p pine` (see --list)
    #[arg(short, long = "plant", value_name = "KIND")]
    plants: Vec<String>,

    /// Plant size
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=3))]
    size: u8,

    /// Seed for reproducible gardens (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// How to arrange the plants
    #[arg(short, long, value_enum, default_value_t = Layout::Row)]
    layout: Layout,

    /// Plants per row for the grid layout
    #[arg(long, default_value_t = 3)]
    cols: usize,

    /// Grid layout with as many columns as fit the terminal width
    #[arg(long)]
    auto_fit: bool,

    /// Blank columns between neighbouring plants
    #[arg(long, default_value_t = 2)]
    gap: usize,

    /// Only use ASCII characters
    #[arg(long)]
    no_unicode: bool,

    /// Clear the screen before drawing
    #[arg(long)]
    clear: bool,

    /// Strip trailing spaces from printed lines
    #[arg(long)]
    trim: bool,

    /// Print every plant kind and exit
    #[arg(long)]
    list: bool,
}

/// Main entry point for the CLI application
///
/// Any error from the garden engine ends up here: it is printed to stderr
/// and the process exits with status 1.
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// One full render pass: pick plants, compose, print
fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let registry = PlantRegistry::with_defaults();

    if args.list {
        for kind in registry.kinds() {
            println!("{}", kind);
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("garden seed {}", seed);

    let plants = plant_specs(&args, seed);

    let layout = if args.auto_fit {
        let width = terminal_width();
        info!("auto-fitting to {} columns", width);
        LayoutPolicy::AutoFit {
            terminal_width: width,
        }
    } else {
        match args.layout {
            Layout::Row => LayoutPolicy::Row,
            Layout::Grid => LayoutPolicy::Grid { columns: args.cols },
            Layout::Stack => LayoutPolicy::Stack,
        }
    };

    let options = ComposeOptions {
        gap: args.gap,
        ..ComposeOptions::default()
    };
    let composer = GardenComposer::with_options(registry, options);
    let lines = composer.compose(&plants, &layout)?;

    let clear = if args.clear {
        ClearMode::Ansi
    } else {
        ClearMode::None
    };
    GardenRenderer::new(clear, args.trim).render(&lines)?;

    Ok(())
}

/// Flowers first, then trees, then explicitly named plants
///
/// Each plant gets its own sub-seed drawn from the master seed, so plants
/// never share random state.
fn plant_specs(args: &Args, seed: u64) -> Vec<PlantSpec> {
    let mut rng = StdRng::seed_from_u64(seed);

    let kinds = std::iter::repeat(FLOWER)
        .take(args.count)
        .chain(std::iter::repeat(TREE).take(args.trees))
        .chain(args.plants.iter().map(String::as_str));

    kinds
        .map(|kind| {
            let params = PlantParams {
                size: args.size as usize,
                seed: rng.gen(),
                unicode: !args.no_unicode,
            };
            PlantSpec::new(kind, params)
        })
        .collect()
}
