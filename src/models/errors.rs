use thiserror::Error;

/// Everything that can stop a sector from being generated.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A grid with no rows or no columns has nowhere to put stars
    #[error("invalid sector dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimensions { rows: usize, cols: usize },
    /// A 100% cascade never stops adding worlds
    #[error("other world chance {0}% would add worlds forever, it must be below 100")]
    DegenerateCascade(i32),
    /// More stars requested than the grid has hexes
    #[error("sector too small: up to {stars} stars requested but only {cells} hexes available")]
    SectorTooSmall { stars: usize, cells: usize },
    /// Every hex is taken, even after the random draws ran out
    #[error("no free hex found after {attempts} attempts")]
    PlacementExhausted { attempts: usize },
    /// The name generator kept producing names already in use
    #[error("no unused system name found after {attempts} attempts")]
    NamesExhausted { attempts: usize },
    /// Config file could not be read
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Config file is not valid JSON, or output failed to serialise
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Type alias for Results using GenerationError
pub type GenerationResult<T> = Result<T, GenerationError>;
