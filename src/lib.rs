//! Sector Generator
//!
//! Procedural starmap generation for a science-fiction tabletop RPG.
//!
//! # Overview
//!
//! A sector is a grid of hexes. Roughly a quarter to three eighths of the
//! hexes hold a star system; each system carries a primary world, a
//! cascading chance of further worlds, and an optional point of interest.
//! System names are unique across the whole sector.
//!
//! # Modules
//!
//! - [`models`] - Domain models (Sector, Star, World, etc.) and generation
//! - [`io`] - Output abstractions for testing
//! - [`ui`] - Text, markdown and JSON rendering
//! - [`cli`] - Command line arguments
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use sectorgen::{GenerationConfig, Sector};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let sector = Sector::generate(&GenerationConfig::default(), &mut rng).unwrap();
//! assert!(!sector.stars().is_empty());
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod ui;

// Re-export commonly used types
pub use models::config::GenerationConfig;
pub use models::errors::{GenerationError, GenerationResult};
pub use models::sector::Sector;
pub use models::star::Star;
pub use ui::format::{Format, OutputFormat};
