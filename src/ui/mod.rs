//! User interface and presentation
//!
//! Formatting of stars, worlds and points of interest, and presenters that
//! write a whole sector to an output sink.

pub mod format;
pub mod presenters;
