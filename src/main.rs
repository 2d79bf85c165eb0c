//! Demonstration driver: fills a tree with random keys, prints its in-order
//! traversal, probes it for a key, deletes that key and prints it again.

use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ordered_tree::{arena, owned};

/// Fill an unbalanced binary search tree with random keys and show insert,
/// contains, delete and in-order traversal at work.
#[derive(Parser, Debug)]
#[command(name = "ordered-tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How many random keys to insert (duplicates are dropped)
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Smallest key that may be generated
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    min: i32,

    /// Largest key that may be generated
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    max: i32,

    /// Key to look up and then delete
    #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
    probe: i32,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Which tree implementation to drive
    #[arg(short, long, value_enum, default_value_t = Backend::Owned)]
    backend: Backend,

    /// Log verbosity, repeat for more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Boxed nodes owning their children
    Owned,
    /// Nodes stored in an arena and linked by index
    Arena,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("empty key range: --min {min} is greater than --max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Validated settings for one run.
#[derive(Debug)]
struct Config {
    count: usize,
    range: RangeInclusive<i32>,
    probe: i32,
    seed: Option<u64>,
    backend: Backend,
}

impl TryFrom<&Cli> for Config {
    type Error = DemoError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.min > cli.max {
            return Err(DemoError::EmptyRange {
                min: cli.min,
                max: cli.max,
            });
        }

        Ok(Self {
            count: cli.count,
            range: cli.min..=cli.max,
            probe: cli.probe,
            seed: cli.seed,
            backend: cli.backend,
        })
    }
}

/// Lets the driver treat both implementations alike.
enum DemoTree {
    Owned(owned::Tree<i32>),
    Arena(arena::Tree<i32>),
}

impl DemoTree {
    fn new(backend: Backend) -> Self {
        match backend {
            Backend::Owned => Self::Owned(owned::Tree::new()),
            Backend::Arena => Self::Arena(arena::Tree::new()),
        }
    }

    fn insert(&mut self, key: i32) {
        match self {
            Self::Owned(t) => t.insert(key),
            Self::Arena(t) => t.insert(key),
        }
    }

    fn contains(&self, key: i32) -> bool {
        match self {
            Self::Owned(t) => t.contains(&key),
            Self::Arena(t) => t.contains(&key),
        }
    }

    fn delete(&mut self, key: i32) {
        match self {
            Self::Owned(t) => t.delete(&key),
            Self::Arena(t) => t.delete(&key),
        }
    }

    /// The keys in ascending order, space separated.
    fn render(&self) -> String {
        let keys: Vec<String> = match self {
            Self::Owned(t) => t.traverse().map(i32::to_string).collect(),
            Self::Arena(t) => t.traverse().map(i32::to_string).collect(),
        };
        keys.join(" ")
    }
}

fn generate_keys(rng: &mut impl Rng, count: usize, range: &RangeInclusive<i32>) -> Vec<i32> {
    (0..count).map(|_| rng.random_range(range.clone())).collect()
}

fn run(config: &Config, out: &mut impl Write) -> Result<(), DemoError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let keys = generate_keys(&mut rng, config.count, &config.range);
    debug!(?keys, "generated keys");

    let mut tree = DemoTree::new(config.backend);
    writeln!(
        out,
        "Inserting unique values between {} and {} into the tree...",
        config.range.start(),
        config.range.end()
    )?;
    for key in keys {
        tree.insert(key);
    }

    writeln!(out, "In-order traversal of the tree:")?;
    writeln!(out, "{}", tree.render())?;

    let probe = config.probe;
    writeln!(out, "Checking if the tree contains the value {probe}:")?;
    let found = tree.contains(probe);
    info!(probe, found, "probed tree");
    if found {
        writeln!(out, "Value {probe} was found.")?;
    } else {
        writeln!(out, "Value {probe} was not found.")?;
    }

    writeln!(out, "Deleting the value {probe} from the tree...")?;
    tree.delete(probe);
    writeln!(out, "In-order traversal after deletion:")?;
    writeln!(out, "{}", tree.render())?;

    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    debug!(?cli, "parsed arguments");

    let result = Config::try_from(&cli)
        .and_then(|config| run(&config, &mut io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
