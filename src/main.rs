use clap::Parser;
use std::path::PathBuf;

use twenty48::game::{RandomSource, Session, SpawnOdds};
use twenty48::logging::{setup_logging, LogTarget};
use twenty48::parse_script;
use twenty48::play::{interactive, scripted};

#[derive(Parser, Debug)]
#[command(name = "twenty48", version, about = "2048 in the terminal")]
struct Config {
    /// Seed for tile spawns (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Probability that a spawned tile is a 2 rather than a 4
    #[arg(long, default_value_t = SpawnOdds::DEFAULT_TWO_PROBABILITY)]
    two_probability: f64,

    /// Run these commands headless instead of opening the game,
    /// e.g. "down left undo" or "D L z"
    #[arg(long)]
    script: Option<String>,

    /// Print the final session as JSON (with --script)
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Log level, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Directory for log files; scripted runs log to stderr without it
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

const DEFAULT_LOG_DIR: &str = "logs";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    // The interactive game owns the terminal, so it always logs to files.
    let target = match (&config.script, &config.log_dir) {
        (_, Some(dir)) => LogTarget::File(dir.clone()),
        (Some(_), None) => LogTarget::Stderr,
        (None, None) => LogTarget::File(PathBuf::from(DEFAULT_LOG_DIR)),
    };
    let _logger = setup_logging(&config.log_level, target)?;

    let odds = SpawnOdds::new(config.two_probability)?;
    let mut source = RandomSource::from_seed_opt(config.seed);
    let session = Session::with_odds(odds);
    log::info!(
        "🎮 {} {} starting (seed={:?}, p(2)={})",
        twenty48::NAME,
        twenty48::VERSION,
        config.seed,
        odds.two_probability()
    );

    match &config.script {
        Some(script) => {
            let commands = parse_script(script)?;
            let session = scripted::run(session, &commands, &mut source);
            if config.json {
                println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
            } else {
                print!("{}", session.board());
                println!("status: {}  undo: {}", session.status(), session.history_len());
            }
        }
        None => {
            let session = interactive::run(session, &mut source)?;
            log::info!(
                "👋 Finished with status {} (highest tile {:?})",
                session.status(),
                session.board().highest_tile()
            );
        }
    }

    Ok(())
}
