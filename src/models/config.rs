use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::constants::{
    DEFAULT_COLS, DEFAULT_OTHER_WORLD_CHANCE, DEFAULT_POI_CHANCE, DEFAULT_ROWS, EXTRA_STARS,
};
use super::errors::{GenerationError, GenerationResult};

/// Parameters for one sector generation run.
///
/// Percentages are compared raw against a d100 roll in `[0, 100)`, so values
/// at or below 0 never succeed and values at or above 100 always do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub rows: usize,
    pub cols: usize,
    /// World tags that must never be rolled.
    pub excluded_tags: Vec<String>,
    /// Chance (percent) that a star gets a point of interest.
    pub poi_chance: i32,
    /// Cascading chance (percent) of each additional world.
    pub other_world_chance: i32,
    /// Stars placed on top of the density target.
    pub extra_stars: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            excluded_tags: Vec::new(),
            poi_chance: DEFAULT_POI_CHANCE,
            other_world_chance: DEFAULT_OTHER_WORLD_CHANCE,
            extra_stars: EXTRA_STARS,
        }
    }
}

impl GenerationConfig {
    /// Load a config from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> GenerationResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Density target before the random bonus: a quarter of all hexes.
    pub fn base_stars(&self) -> usize {
        self.cells() / 4
    }

    /// Largest star count a run with this config can produce.
    pub fn max_stars(&self) -> usize {
        let base = self.base_stars();
        base + base / 2 + self.extra_stars
    }

    /// Reject configs that would make generation loop forever.
    pub fn validate(&self) -> GenerationResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GenerationError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.other_world_chance >= 100 {
            return Err(GenerationError::DegenerateCascade(self.other_world_chance));
        }
        if self.max_stars() > self.cells() {
            return Err(GenerationError::SectorTooSmall {
                stars: self.max_stars(),
                cells: self.cells(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: usize, cols: usize) -> GenerationConfig {
        GenerationConfig {
            rows,
            cols,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn default_is_standard_sector() {
        let c = GenerationConfig::default();
        assert_eq!((c.rows, c.cols), (10, 8));
        assert_eq!(c.poi_chance, 30);
        assert_eq!(c.other_world_chance, 10);
        assert_eq!(c.extra_stars, 1);
        assert!(c.excluded_tags.is_empty());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn star_bounds_follow_density_formula() {
        let c = config(4, 4);
        assert_eq!(c.cells(), 16);
        assert_eq!(c.base_stars(), 4);
        assert_eq!(c.max_stars(), 7);

        let c = config(10, 8);
        assert_eq!(c.base_stars(), 20);
        assert_eq!(c.max_stars(), 31);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            config(0, 5).validate(),
            Err(GenerationError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(matches!(
            config(5, 0).validate(),
            Err(GenerationError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn full_cascade_rejected() {
        let mut c = config(4, 4);
        c.other_world_chance = 100;
        assert!(matches!(
            c.validate(),
            Err(GenerationError::DegenerateCascade(100))
        ));
        c.other_world_chance = 99;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn out_of_range_percentages_are_permissive() {
        let mut c = config(4, 4);
        c.poi_chance = 250;
        c.other_world_chance = -20;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn tiny_grid_with_extra_stars_rejected() {
        let mut c = config(1, 1);
        assert!(c.validate().is_ok());
        c.extra_stars = 2;
        assert!(matches!(
            c.validate(),
            Err(GenerationError::SectorTooSmall { stars: 2, cells: 1 })
        ));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let c: GenerationConfig =
            serde_json::from_str(r#"{ "rows": 6, "excluded_tags": ["Zombies"] }"#).unwrap();
        assert_eq!(c.rows, 6);
        assert_eq!(c.cols, 8);
        assert_eq!(c.excluded_tags, vec!["Zombies".to_string()]);
        assert_eq!(c.poi_chance, 30);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = GenerationConfig::from_json_file("/nonexistent/sector.json");
        assert!(matches!(result, Err(GenerationError::Io(_))));
    }
}
