//! `avl-view` — build an AVL tree, then delete its keys one at a time,
//! printing the grid layout after every step.
//!
//! Usage:
//!   avl-view [--config FILE] [--keys 5,10,3] [--stdin] [--delete-order ORDER]
//!            [--seed N] [--format text|json] [--check] [-v...]
//!
//! Frames go to stdout, logs to stderr (`RUST_LOG` is honoured).

use std::io::{self, Read, Write};
use std::path::PathBuf;

use avl_view::{
    parse_keys, render, DeleteOrder, OutputFormat, Playback, ViewConfig, ViewError, ViewOverrides,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "avl-view")]
#[command(about = "Replay AVL insertions and deletions as grid layouts", long_about = None)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Keys to insert, comma separated
    #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
    keys: Option<Vec<i64>>,

    /// Read keys from stdin instead
    #[arg(long, conflicts_with = "keys")]
    stdin: bool,

    /// Order in which keys are deleted after building
    #[arg(short, long, value_enum)]
    delete_order: Option<DeleteOrder>,

    /// Seed for the shuffled delete order
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Validate the tree after every step
    #[arg(long)]
    check: bool,

    /// More logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<ViewConfig, ViewError> {
        let mut config = match &self.config {
            Some(path) => ViewConfig::load(path)?,
            None => ViewConfig::default(),
        };
        let keys = if self.stdin {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Some(parse_keys(&buf)?)
        } else {
            self.keys
        };
        config.apply_overrides(ViewOverrides {
            keys,
            delete_order: self.delete_order,
            seed: self.seed,
            format: self.format,
            check: self.check,
        });
        Ok(config)
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), ViewError> {
    let config = cli.into_config()?;
    info!(keys = config.keys.len(), order = ?config.delete_order, "starting playback");

    let mut playback = Playback::new(&config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    while let Some(frame) = playback.next_frame()? {
        out.write_all(render(&frame, config.format)?.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
