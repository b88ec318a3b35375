/// Standard sector map size from the rulebook: 8 columns by 10 rows.
pub const DEFAULT_ROWS: usize = 10;
pub const DEFAULT_COLS: usize = 8;

pub const DEFAULT_POI_CHANCE: i32 = 30;
pub const DEFAULT_OTHER_WORLD_CHANCE: i32 = 10;

/// Stars placed beyond the nominal target. The reference generator loops
/// while `placed <= target`, which always yields one extra star.
pub const EXTRA_STARS: usize = 1;

/// Coordinate draws allowed while looking for a free hex for one star.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Generic-name draws allowed after the themed roll collides.
pub const MAX_NAME_ATTEMPTS: usize = 10_000;

/// Length range (inclusive) for fallback system names.
pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 6;

/// Tags rolled for every world.
pub const TAGS_PER_WORLD: usize = 2;

/// Width of one hex cell in the grid overview.
pub const CELL_WIDTH: usize = 3;

pub const STAR_SYMBOL: &str = " * ";
pub const EMPTY_SYMBOL: &str = " . ";
