use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

use super::culture::Culture;
use super::poi::PointOfInterest;
use super::position::HexPosition;
use super::world::World;

/// A star system occupying one hex. Built once by [`Star::new`] and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Star {
    position: HexPosition,
    culture: Culture,
    name: String,
    /// Primary world first, then any secondary worlds.
    worlds: Vec<World>,
    pois: Vec<PointOfInterest>,
}

/// True on a d100 roll (0-99) below `chance`.
pub(crate) fn percent_roll(rng: &mut StdRng, chance: i32) -> bool {
    rng.gen_range(0..100) < chance
}

impl Star {
    /// Generate the contents of a star system.
    ///
    /// The primary world uses a freshly rolled culture. Each further world
    /// is added with `other_world_chance` percent, stopping at the first
    /// failed roll, and gets its own culture. A single `poi_chance` roll
    /// decides whether the system has a point of interest.
    pub fn new(
        rng: &mut StdRng,
        position: HexPosition,
        name: String,
        excluded_tags: &[String],
        poi_chance: i32,
        other_world_chance: i32,
    ) -> Self {
        let culture = Culture::random(rng);
        let mut worlds = vec![World::new(rng, culture, true, excluded_tags)];

        while percent_roll(rng, other_world_chance) {
            let culture = Culture::random(rng);
            worlds.push(World::new(rng, culture, false, excluded_tags));
        }

        let mut pois = Vec::new();
        if percent_roll(rng, poi_chance) {
            pois.push(PointOfInterest::new(rng));
        }

        Star {
            position,
            culture,
            name,
            worlds,
            pois,
        }
    }

    // ========== Accessor Methods ==========

    pub fn position(&self) -> HexPosition {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Culture of the primary world.
    pub fn culture(&self) -> Culture {
        self.culture
    }

    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn primary_world(&self) -> &World {
        &self.worlds[0]
    }

    pub fn secondary_worlds(&self) -> &[World] {
        &self.worlds[1..]
    }

    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }
}
