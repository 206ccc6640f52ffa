//! Command-line entrypoint for the Cosmic Cyberpunk Room Escape.
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use cosmic_escape::GameState;
use cosmic_escape::config::{MAX_TIME_LIMIT_MINUTES, Overrides, Settings};
use cosmic_escape::session;
use cosmic_escape::world::{self, ClockMode};

#[derive(Clone, Copy, ValueEnum)]
enum ClockArg {
    Frozen,
    Wall,
}

impl From<ClockArg> for ClockMode {
    fn from(c: ClockArg) -> Self {
        match c {
            ClockArg::Frozen => ClockMode::Frozen,
            ClockArg::Wall => ClockMode::Wall,
        }
    }
}

#[derive(Parser)]
#[command(name = "cosmic_escape")]
#[command(about = "A text room-escape adventure with quests")]
#[command(version)]
struct Cli {
    /// World file to play instead of the built-in one
    #[arg(short, long)]
    world: Option<PathBuf>,

    /// Number of quests drawn for this session
    #[arg(short, long)]
    quests: Option<usize>,

    /// Play without quests (explore and find the way out)
    #[arg(long)]
    no_quests: bool,

    /// Seed for quest selection
    #[arg(long)]
    seed: Option<u64>,

    /// Whether the time budget actually runs down
    #[arg(long, value_enum)]
    clock: Option<ClockArg>,

    /// Override the time budget, in minutes
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=MAX_TIME_LIMIT_MINUTES))]
    time_limit: Option<u64>,

    /// Verbose logging to stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    // Gameplay owns stdout; keep logs quiet unless asked
    let base_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    builder.filter_level(base_level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.target(env_logger::Target::Stderr);
    let _ = builder.try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let world = match &cli.world {
        Some(path) => world::load_world_from_file(path)
            .inspect_err(|e| warn!("rejected world file {}: {}", path.display(), e))
            .with_context(|| format!("failed to load world file '{}'", path.display()))?,
        None => world::load_default_world().context("built-in world is invalid")?,
    };
    info!("loaded world '{}'", world.id);

    let overrides = Overrides {
        quest_count: cli.quests,
        quests_enabled: cli.no_quests.then_some(false),
        clock: cli.clock.map(ClockMode::from),
        time_limit_minutes: cli.time_limit,
        seed: cli.seed,
    };
    let settings = Settings::resolve(&world.settings, &overrides);
    let mut clock = session::clock_for(settings.game.clock);

    let mut state = GameState::new(world, &settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run(&mut state, stdin.lock(), &mut stdout, clock.as_mut())?;

    Ok(())
}
