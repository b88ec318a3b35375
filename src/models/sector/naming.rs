use log::{debug, warn};
use rand::rngs::StdRng;
use rand::Rng;

use super::Sector;
use crate::models::constants::{MAX_NAME_ATTEMPTS, MAX_NAME_LENGTH, MIN_NAME_LENGTH};
use crate::models::errors::{GenerationError, GenerationResult};
use crate::models::names::{generate_name, roll_system_name};

/// Pick a name no star in the sector uses yet. Tries the system name table
/// once, then falls back to generated names of 3 to 6 letters.
pub fn assign_system_name(sector: &Sector, rng: &mut StdRng) -> GenerationResult<String> {
    assign_name_within(sector, rng, MAX_NAME_ATTEMPTS)
}

fn assign_name_within(
    sector: &Sector,
    rng: &mut StdRng,
    max_attempts: usize,
) -> GenerationResult<String> {
    let name = roll_system_name(rng);
    if !sector.name_used(&name) {
        return Ok(name);
    }
    debug!("system name {} taken, generating one", name);

    for _ in 0..max_attempts {
        let length = rng.gen_range(MIN_NAME_LENGTH..=MAX_NAME_LENGTH);
        let name = generate_name(rng, length);
        if !sector.name_used(&name) {
            return Ok(name);
        }
    }
    warn!("no unused system name after {} generated names", max_attempts);
    Err(GenerationError::NamesExhausted {
        attempts: max_attempts,
    })
}
