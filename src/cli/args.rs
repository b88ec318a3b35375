use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::models::config::GenerationConfig;
use crate::models::errors::GenerationResult;
use crate::ui::format::OutputFormat;

/// Generate a starmap sector of star systems, worlds and points of interest.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Number of hex rows
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of hex columns
    #[arg(long)]
    pub cols: Option<usize>,

    /// World tag that must never be rolled (repeatable)
    #[arg(long = "exclude", value_name = "TAG")]
    pub excluded_tags: Vec<String>,

    /// Percent chance of a point of interest per system
    #[arg(long, allow_negative_numbers = true)]
    pub poi_chance: Option<i32>,

    /// Cascading percent chance of each additional world
    #[arg(long, allow_negative_numbers = true)]
    pub other_world_chance: Option<i32>,

    /// Stars placed on top of the density target
    #[arg(long)]
    pub extra_stars: Option<usize>,

    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// JSON config file; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output style
    #[arg(long, value_enum, default_value_t = OutputStyle::Text)]
    pub format: OutputStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputStyle {
    Text,
    Markdown,
    Json,
}

impl OutputStyle {
    /// Markup for rendered output, `None` for JSON.
    pub fn markup(&self) -> Option<OutputFormat> {
        match self {
            OutputStyle::Text => Some(OutputFormat::Text),
            OutputStyle::Markdown => Some(OutputFormat::Markdown),
            OutputStyle::Json => None,
        }
    }
}

impl Args {
    /// Merge the config file (if any) with command line overrides.
    pub fn generation_config(&self) -> GenerationResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_json_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(chance) = self.poi_chance {
            config.poi_chance = chance;
        }
        if let Some(chance) = self.other_world_chance {
            config.other_world_chance = chance;
        }
        if let Some(extra) = self.extra_stars {
            config.extra_stars = extra;
        }
        config.excluded_tags.extend(self.excluded_tags.iter().cloned());

        Ok(config)
    }
}

pub fn parse() -> Args {
    Args::parse()
}
