//! CLI frontend for the Prime Labyrinth.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use labyrinth_core::config::DEFAULT_START_ROOM;

#[derive(Parser)]
#[command(
    name = "labyrinth",
    about = "Prime Labyrinth: walk a graph of numbered rooms",
    version,
    propagate_version = true
)]
struct Cli {
    /// Room catalog JSON file (default: the built-in Prime Labyrinth map)
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Log navigation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// How `walk` picks the next door.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Strategy {
    /// Always the first door
    Leftmost,
    /// A uniformly random door
    Random,
}

#[derive(Subcommand)]
enum Commands {
    /// List the authored rooms of the catalog
    Rooms,

    /// Show a room and its doors (authored or procedural)
    Show {
        /// Room id (decimal digits)
        id: String,

        /// Also print the storyboard derived from the room's digits
        #[arg(long)]
        story: bool,
    },

    /// Walk from a room until a loop closes or the step budget runs out
    Walk {
        /// Door choice strategy
        #[arg(short = 'S', long, value_enum, default_value = "leftmost")]
        strategy: Strategy,

        /// Start room id
        #[arg(long, default_value = DEFAULT_START_ROOM)]
        start: String,

        /// Maximum number of doors to take
        #[arg(short = 'n', long, default_value = "100")]
        steps: usize,

        /// RNG seed for random walks
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print the walk as JSON
        #[arg(long)]
        json: bool,
    },

    /// Explore every room within a number of doors from the start
    Explore {
        /// Start room id
        #[arg(long, default_value = DEFAULT_START_ROOM)]
        start: String,

        /// Maximum distance from the start, in doors
        #[arg(short, long, default_value = "4")]
        depth: usize,

        /// Stop after reaching this many rooms
        #[arg(long, default_value = "10000")]
        max_rooms: usize,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play the labyrinth interactively
    Play {
        /// Start room id
        #[arg(long, default_value = DEFAULT_START_ROOM)]
        start: String,

        /// Number of rooms shown in the breadcrumb trail
        #[arg(short, long, default_value = "5")]
        trail: usize,
    },

    /// Write the active catalog as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "labyrinth_core=debug,labyrinth_play=debug,labyrinth_cli=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = cli.catalog.as_deref();
    let result = match cli.command {
        Commands::Rooms => commands::rooms::run(catalog),
        Commands::Show { id, story } => commands::show::run(catalog, &id, story),
        Commands::Walk {
            strategy,
            start,
            steps,
            seed,
            json,
        } => commands::walk::run(catalog, strategy, &start, steps, seed, json),
        Commands::Explore {
            start,
            depth,
            max_rooms,
            json,
        } => commands::explore::run(catalog, &start, depth, max_rooms, json),
        Commands::Play { start, trail } => commands::play::run(catalog, &start, trail),
        Commands::Export { output } => commands::export::run(catalog, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
