//! Sector model
//!
//! The sector is the aggregate root: a fixed-size hex grid and the stars
//! placed on it. It is filled once by [`Sector::generate`] and only read
//! after that.

mod generation;
mod naming;

use rand::rngs::StdRng;
use serde::Serialize;

use super::config::GenerationConfig;
use super::constants::{EMPTY_SYMBOL, STAR_SYMBOL};
use super::errors::GenerationResult;
use super::position::HexPosition;
use super::star::Star;

pub use generation::{generate_sector, star_target};
pub use naming::assign_system_name;

/// A generated starmap.
#[derive(Debug, Clone, Serialize)]
pub struct Sector {
    rows: usize,
    cols: usize,
    /// Stars in placement order.
    stars: Vec<Star>,
}

impl Sector {
    /// An empty sector of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Sector {
            rows,
            cols,
            stars: Vec::new(),
        }
    }

    /// Generate a fully populated sector.
    pub fn generate(config: &GenerationConfig, rng: &mut StdRng) -> GenerationResult<Self> {
        generate_sector(config, rng)
    }

    // ========== Accessor Methods ==========

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Stars in the order they were placed.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    // ========== End Accessor Methods ==========

    /// Check if a star occupies the hex.
    pub fn is_occupied(&self, pos: HexPosition) -> bool {
        self.stars.iter().any(|star| star.position() == pos)
    }

    pub fn star_at(&self, pos: HexPosition) -> Option<&Star> {
        self.stars.iter().find(|star| star.position() == pos)
    }

    /// Exact, case-sensitive match against every placed star's name.
    pub fn name_used(&self, name: &str) -> bool {
        self.stars.iter().any(|star| star.name() == name)
    }

    /// Stars ordered by row, then column. Built fresh on every call.
    pub fn by_coords(&self) -> Vec<&Star> {
        let mut sorted: Vec<&Star> = self.stars.iter().collect();
        sorted.sort_by_key(|star| star.position());
        sorted
    }

    /// Render one grid row as fixed-width cells. `row` is 0-based.
    pub fn render_row(&self, row: usize) -> String {
        (0..self.cols)
            .map(|col| {
                if self.is_occupied(HexPosition::new(row, col)) {
                    STAR_SYMBOL
                } else {
                    EMPTY_SYMBOL
                }
            })
            .collect()
    }

    /// Append a star while generating.
    pub(crate) fn push(&mut self, star: Star) {
        debug_assert!(star.position().within(self.rows, self.cols));
        debug_assert!(!self.is_occupied(star.position()));
        debug_assert!(!self.name_used(star.name()));
        self.stars.push(star);
    }
}


#[cfg(test)]
mod tests {
    use super::test_utils::star_at;
    use super::*;
    use crate::models::constants::CELL_WIDTH;

    fn sample_sector() -> Sector {
        let mut sector = Sector::new(4, 5);
        sector.push(star_at(3, 1, "Ember"));
        sector.push(star_at(0, 4, "Haven"));
        sector.push(star_at(3, 0, "Nadir"));
        sector.push(star_at(0, 2, "Reach"));
        sector
    }

    #[test]
    fn new_sector_is_empty() {
        let sector = Sector::new(3, 7);
        assert_eq!(sector.rows(), 3);
        assert_eq!(sector.cols(), 7);
        assert!(sector.stars().is_empty());
        assert!(sector.by_coords().is_empty());
    }

    #[test]
    fn is_occupied_matches_placed_stars() {
        let sector = sample_sector();
        assert!(sector.is_occupied(HexPosition::new(3, 1)));
        assert!(sector.is_occupied(HexPosition::new(0, 4)));
        assert!(!sector.is_occupied(HexPosition::new(1, 3)));
        assert!(!sector.is_occupied(HexPosition::new(4, 1)));
    }

    #[test]
    fn star_at_finds_by_position() {
        let sector = sample_sector();
        assert_eq!(sector.star_at(HexPosition::new(3, 0)).map(|s| s.name()), Some("Nadir"));
        assert!(sector.star_at(HexPosition::new(2, 2)).is_none());
    }

    #[test]
    fn name_used_is_exact_match() {
        let sector = sample_sector();
        assert!(sector.name_used("Haven"));
        assert!(!sector.name_used("haven"));
        assert!(!sector.name_used("Haven "));
    }

    #[test]
    fn by_coords_sorts_row_then_column() {
        let sector = sample_sector();
        let names: Vec<&str> = sector.by_coords().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["Reach", "Haven", "Nadir", "Ember"]);
    }

    #[test]
    fn by_coords_leaves_insertion_order_alone() {
        let sector = sample_sector();
        let first = sector.by_coords();
        let second = sector.by_coords();
        assert_eq!(first, second);

        let placed: Vec<&str> = sector.stars().iter().map(|s| s.name()).collect();
        assert_eq!(placed, vec!["Ember", "Haven", "Nadir", "Reach"]);
    }

    #[test]
    fn render_row_marks_stars() {
        let sector = sample_sector();
        assert_eq!(sector.render_row(0), " .  .  *  .  * ");
        assert_eq!(sector.render_row(1), " .  .  .  .  . ");
        assert_eq!(sector.render_row(3), " *  *  .  .  . ");
    }

    #[test]
    fn render_row_width_is_cols_times_cell() {
        let sector = sample_sector();
        for row in 0..sector.rows() {
            assert_eq!(sector.render_row(row).len(), sector.cols() * CELL_WIDTH);
        }
    }
}
