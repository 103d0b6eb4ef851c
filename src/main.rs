use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

use vocabbuilder::{BuildConfig, BuildError, LOOKUP_FILE, VOCABULARY_FILE, run};

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_OUT_DIR: &str = ".";

#[derive(Parser)]
#[command(name = "vocabbuilder")]
#[command(about = "Build vocabulary.json and word_lookup.json from CEFR word lists")]
struct Cli {
    /// Directory containing the `*.csv` word lists.
    #[arg(long, env = "VOCAB_ASSETS_DIR", default_value = DEFAULT_ASSETS_DIR)]
    assets_dir: PathBuf,

    /// Directory the JSON files are written to.
    #[arg(long, env = "VOCAB_OUT_DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = BuildConfig {
        assets_dir: cli.assets_dir,
        out_dir: cli.out_dir,
    };
    info!("reading word lists from {}", config.assets_dir.display());

    let start = Instant::now();
    let summary = match run(&config) {
        Ok(summary) => summary,
        Err(BuildError::MissingAssets(dir)) => {
            error!("assets directory not found: {}", dir.display());
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    info!(
        "wrote {} and {} to {} in {} ms",
        VOCABULARY_FILE,
        LOOKUP_FILE,
        config.out_dir.display(),
        start.elapsed().as_millis()
    );
    info!(
        "files processed: {}, skipped: {}",
        summary.files_processed, summary.files_skipped
    );
    info!("total vocabulary entries: {}", summary.vocabulary_entries);
    info!("total lookup entries: {}", summary.lookup_entries);
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
