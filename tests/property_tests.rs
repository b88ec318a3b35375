use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sectorgen::models::position::HexPosition;
use sectorgen::models::sector::star_target;
use sectorgen::{GenerationConfig, Sector};
use std::collections::HashSet;

fn config(rows: usize, cols: usize, poi_chance: i32, other_world_chance: i32) -> GenerationConfig {
    GenerationConfig {
        rows,
        cols,
        poi_chance,
        other_world_chance,
        ..GenerationConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: no two stars share a hex
    #[test]
    fn coordinates_unique(seed in any::<u64>(), rows in 1usize..16, cols in 1usize..16) {
        let sector = Sector::generate(&config(rows, cols, 30, 10), &mut StdRng::seed_from_u64(seed)).unwrap();
        let positions: HashSet<HexPosition> = sector.stars().iter().map(|s| s.position()).collect();
        prop_assert_eq!(positions.len(), sector.stars().len());
    }

    /// Property: no two stars share a name
    #[test]
    fn names_unique(seed in any::<u64>(), rows in 1usize..16, cols in 1usize..16) {
        let sector = Sector::generate(&config(rows, cols, 30, 10), &mut StdRng::seed_from_u64(seed)).unwrap();
        let names: HashSet<&str> = sector.stars().iter().map(|s| s.name()).collect();
        prop_assert_eq!(names.len(), sector.stars().len());
    }

    /// Property: every star lies inside the grid
    #[test]
    fn stars_within_bounds(seed in any::<u64>(), rows in 1usize..16, cols in 1usize..16) {
        let sector = Sector::generate(&config(rows, cols, 30, 10), &mut StdRng::seed_from_u64(seed)).unwrap();
        for star in sector.stars() {
            prop_assert!(star.row() < rows, "row {} outside {} rows", star.row(), rows);
            prop_assert!(star.col() < cols, "col {} outside {} cols", star.col(), cols);
        }
    }

    /// Property: star count is base + [0, base/2] + extra stars
    #[test]
    fn occupancy_density(
        seed in any::<u64>(),
        rows in 1usize..16,
        cols in 1usize..16,
        extra in 0usize..2
    ) {
        let mut c = config(rows, cols, 30, 10);
        c.extra_stars = extra;
        let sector = Sector::generate(&c, &mut StdRng::seed_from_u64(seed)).unwrap();

        let base = rows * cols / 4;
        let count = sector.stars().len();
        prop_assert!(
            count >= base + extra && count <= base + base / 2 + extra,
            "{} stars for {} hexes", count, rows * cols
        );
    }

    /// Property: the count equals the target drawn from the same stream
    #[test]
    fn count_matches_target(seed in any::<u64>(), rows in 1usize..16, cols in 1usize..16) {
        let c = config(rows, cols, 30, 10);
        let target = star_target(&c, &mut StdRng::seed_from_u64(seed));
        let sector = Sector::generate(&c, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(sector.stars().len(), target);
    }

    /// Property: sorted view is stable, ordered and a permutation of the stars
    #[test]
    fn sort_idempotent(seed in any::<u64>()) {
        let sector = Sector::generate(&GenerationConfig::default(), &mut StdRng::seed_from_u64(seed)).unwrap();
        let first = sector.by_coords();
        let second = sector.by_coords();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), sector.stars().len());

        for pair in first.windows(2) {
            let (a, b) = (pair[0].position(), pair[1].position());
            prop_assert!(a.row < b.row || (a.row == b.row && a.col < b.col));
        }
    }

    /// Property: with no cascade every star has exactly one world
    #[test]
    fn no_cascade_single_world(seed in any::<u64>(), chance in -50i32..=0) {
        let sector = Sector::generate(&config(8, 8, 30, chance), &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(sector.stars().iter().all(|s| s.worlds().len() == 1));
    }

    /// Property: primary world is always first and secondaries follow
    #[test]
    fn primary_world_first(seed in any::<u64>(), chance in 0i32..90) {
        let sector = Sector::generate(&config(8, 8, 30, chance), &mut StdRng::seed_from_u64(seed)).unwrap();
        for star in sector.stars() {
            prop_assert!(star.worlds()[0].primary);
            prop_assert!(star.worlds()[1..].iter().all(|w| !w.primary));
        }
    }

    /// Property: POI presence at the chance extremes
    #[test]
    fn poi_presence_extremes(seed in any::<u64>(), never in -50i32..=0, always in 100i32..200) {
        let none = Sector::generate(&config(8, 8, never, 10), &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(none.stars().iter().all(|s| s.pois().is_empty()));

        let all = Sector::generate(&config(8, 8, always, 10), &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(all.stars().iter().all(|s| s.pois().len() == 1));
    }
}
