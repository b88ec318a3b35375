use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::naming::assign_system_name;
use super::Sector;
use crate::models::config::GenerationConfig;
use crate::models::constants::MAX_PLACEMENT_ATTEMPTS;
use crate::models::errors::{GenerationError, GenerationResult};
use crate::models::position::HexPosition;
use crate::models::star::Star;

/// Number of stars to place: a quarter of the hexes, plus a random bonus of
/// up to half that again, plus `extra_stars`.
pub fn star_target(config: &GenerationConfig, rng: &mut StdRng) -> usize {
    let base = config.base_stars();
    let bonus = rng.gen_range(0..=base / 2);
    base + bonus + config.extra_stars
}

/// Generate a sector. Each star gets a random free hex, then a sector-unique
/// name, then its contents.
pub fn generate_sector(config: &GenerationConfig, rng: &mut StdRng) -> GenerationResult<Sector> {
    config.validate()?;

    let mut sector = Sector::new(config.rows, config.cols);
    let target = star_target(config, rng);
    debug!(
        "placing {} stars in {}x{} sector",
        target, config.rows, config.cols
    );

    while sector.stars().len() < target {
        let position = find_free_hex(&sector, rng, MAX_PLACEMENT_ATTEMPTS)?;
        let name = assign_system_name(&sector, rng)?;
        debug!("star {} at hex {}", name, position);

        let star = Star::new(
            rng,
            position,
            name,
            &config.excluded_tags,
            config.poi_chance,
            config.other_world_chance,
        );
        sector.push(star);
    }

    info!(
        "generated {} stars, {} worlds, {} points of interest",
        sector.stars().len(),
        sector.stars().iter().map(|s| s.worlds().len()).sum::<usize>(),
        sector.stars().iter().map(|s| s.pois().len()).sum::<usize>(),
    );
    Ok(sector)
}

/// Draw random hexes until one is free. After `max_attempts` misses, pick
/// uniformly among the hexes still free; fails only on a full grid.
fn find_free_hex(
    sector: &Sector,
    rng: &mut StdRng,
    max_attempts: usize,
) -> GenerationResult<HexPosition> {
    for _ in 0..max_attempts {
        let pos = HexPosition::new(rng.gen_range(0..sector.rows()), rng.gen_range(0..sector.cols()));
        if !sector.is_occupied(pos) {
            return Ok(pos);
        }
    }

    let free: Vec<HexPosition> = (0..sector.rows())
        .flat_map(|row| (0..sector.cols()).map(move |col| HexPosition::new(row, col)))
        .filter(|pos| !sector.is_occupied(*pos))
        .collect();
    debug!(
        "{} random draws missed, choosing among {} free hexes",
        max_attempts,
        free.len()
    );

    match free.choose(rng) {
        Some(pos) => Ok(*pos),
        None => {
            warn!(
                "no free hex left in {}x{} sector",
                sector.rows(),
                sector.cols()
            );
            Err(GenerationError::PlacementExhausted {
                attempts: max_attempts,
            })
        }
    }
}
