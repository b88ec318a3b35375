//! Domain models
//!
//! This module contains the sector, its stars, and the content that hangs
//! off each star. Generation lives next to the type it builds.

pub mod config;
pub mod constants;
pub mod culture;
pub mod errors;
pub mod names;
pub mod poi;
pub mod position;
pub mod sector;
pub mod star;
pub mod world;
