mod config;
mod engine;
mod seed;
mod shell;

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use engine::PrefixIndex;
use shell::Shell;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(io::stderr)
        .init();

    let config = Config::load()?;
    let mut index = PrefixIndex::new();
    seed::apply(&mut index);
    info!(
        seed_words = seed::DEFAULT_WORDS.len(),
        max_results = config.suggest.max_results,
        "typeahead index seeded"
    );

    let mut shell = Shell::new(index, &config);
    shell.run(io::stdin().lock(), io::stdout().lock())
}
