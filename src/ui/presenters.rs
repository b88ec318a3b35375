use crate::io::OutputWriter;
use crate::models::errors::GenerationResult;
use crate::models::sector::Sector;
use crate::ui::format::{header, Format, OutputFormat};

pub struct SectorPresenter;

impl SectorPresenter {
    /// Write the sector title, the grid overview, then every star in
    /// coordinate order.
    pub fn show(sector: &Sector, fmt: OutputFormat, output: &mut dyn OutputWriter) {
        output.write(&header(
            fmt,
            1,
            &format!(
                "Sector {}x{} ({} systems)",
                sector.rows(),
                sector.cols(),
                sector.stars().len()
            ),
        ));

        Self::show_grid(sector, fmt, output);

        for star in sector.by_coords() {
            output.write(&star.format(fmt));
        }
    }

    /// Grid overview, one line per row. Fenced as code in markdown.
    pub fn show_grid(sector: &Sector, fmt: OutputFormat, output: &mut dyn OutputWriter) {
        if fmt == OutputFormat::Markdown {
            output.writeln("```");
        }
        for row in 0..sector.rows() {
            output.writeln(&format!("{:>3} {}", row, sector.render_row(row)));
        }
        if fmt == OutputFormat::Markdown {
            output.writeln("```");
        }
        output.writeln("");
    }

    /// Whole sector as pretty-printed JSON.
    pub fn show_json(sector: &Sector, output: &mut dyn OutputWriter) -> GenerationResult<()> {
        output.writeln(&serde_json::to_string_pretty(sector)?);
        Ok(())
    }
}
