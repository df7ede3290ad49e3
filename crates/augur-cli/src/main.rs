//! CLI frontend for the Augur number-guessing games.

mod commands;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "augur",
    about = "Augur: number-guessing games that reward getting close",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RNG seed for the secret numbers (random when omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Your name, used by gliding and oracle
    #[arg(short, long, global = true)]
    name: Option<String>,

    /// Print the final report as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Tiered daily puzzle: clues are earned by getting close
    Daily {
        /// Play a single level (1-based) instead of all of them
        #[arg(short, long)]
        level: Option<usize>,
    },

    /// Gliding powers: chase base^exponent as the exponent moves
    Gliding {
        /// Turn budget
        #[arg(long, default_value = "50")]
        max_turns: u32,

        /// Exponent ceiling
        #[arg(long, default_value = "12")]
        max_exponent: u32,
    },

    /// The brutal oracle: divine the master number from omens
    Oracle,

    /// Ritual of powers: sharper clues at lower exponents
    Ritual,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let seed = cli.seed.unwrap_or_else(rand::random);
    let result = match cli.command {
        Commands::Daily { level } => commands::daily::run(level, cli.json),
        Commands::Gliding {
            max_turns,
            max_exponent,
        } => commands::gliding::run(seed, cli.name.as_deref(), max_turns, max_exponent, cli.json),
        Commands::Oracle => commands::oracle::run(seed, cli.name.as_deref(), cli.json),
        Commands::Ritual => commands::ritual::run(seed, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
