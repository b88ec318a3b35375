use anyhow::Result;
use env_logger::Env;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};

use sectorgen::cli::args;
use sectorgen::io::TerminalIO;
use sectorgen::ui::presenters::SectorPresenter;
use sectorgen::Sector;

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = args::parse();
    let config = args.generation_config()?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("sector seed {} (pass --seed {} to reproduce)", seed, seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let sector = Sector::generate(&config, &mut rng)?;

    let mut output = TerminalIO;
    match args.format.markup() {
        Some(fmt) => SectorPresenter::show(&sector, fmt, &mut output),
        None => SectorPresenter::show_json(&sector, &mut output)?,
    }
    Ok(())
}

/// Seed from the wall clock when none was given.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
