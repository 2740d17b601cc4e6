//! CLI frontend for Monster Hunt.

mod animation;
mod commands;
mod logging;
mod render;
mod session;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use mh_core::HuntConfig;
use mh_core::config::DEFAULT_STORE_FILE;

#[derive(Parser)]
#[command(
    name = "mh",
    about = "Monster Hunt: track D&D monster hunts one roll at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// JSON file holding the open hunts
    #[arg(
        short,
        long,
        global = true,
        env = "MONSTER_HUNT_FILE",
        default_value = DEFAULT_STORE_FILE
    )]
    file: PathBuf,

    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Continue or start a hunt and roll once (the default)
    Play {
        /// Skip the dice rolling animation
        #[arg(long)]
        no_animation: bool,
    },

    /// List open hunts
    List,

    /// Start a new hunt
    New {
        /// Monster name
        name: String,

        /// Marks needed to complete the hunt
        marks: u32,

        /// Start over if a hunt with this name already exists
        #[arg(long)]
        replace: bool,
    },

    /// Roll once for a named hunt without prompts
    Roll {
        /// Monster name
        name: String,
    },

    /// Drop a hunt without completing it
    Abandon {
        /// Monster name
        name: String,
    },

    /// Show the outcome table
    Table,
}

fn main() {
    logging::init();
    let cli = Cli::parse();

    let mut config = HuntConfig::default().with_store_path(cli.file);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let command = cli.command.unwrap_or(Commands::Play {
        no_animation: false,
    });

    let result = match command {
        Commands::Play { no_animation } => commands::play::run(&config, !no_animation),
        Commands::List => commands::list::run(&config),
        Commands::New {
            name,
            marks,
            replace,
        } => commands::new::run(&config, &name, marks, replace),
        Commands::Roll { name } => commands::roll::run(&config, &name),
        Commands::Abandon { name } => commands::abandon::run(&config, &name),
        Commands::Table => commands::table::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
