//! Text and markdown rendering of sector contents.

use crate::models::poi::PointOfInterest;
use crate::models::star::Star;
use crate::models::world::World;

/// Markup style for rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
}

/// Anything that can render itself in a given [`OutputFormat`].
pub trait Format {
    fn format(&self, fmt: OutputFormat) -> String;
}

/// A section header at nesting `level` (1 is the top).
pub fn header(fmt: OutputFormat, level: usize, text: &str) -> String {
    match fmt {
        OutputFormat::Markdown => format!("{} {}\n\n", "#".repeat(level.max(1)), text),
        OutputFormat::Text => match level {
            0 | 1 => format!("{}\n{}\n\n", text, "=".repeat(text.chars().count())),
            2 => format!("{}\n{}\n", text, "-".repeat(text.chars().count())),
            _ => format!("{}:\n", text),
        },
    }
}

/// One labelled line inside an entity body.
fn field(fmt: OutputFormat, label: &str, value: &str) -> String {
    match fmt {
        OutputFormat::Markdown => format!("- **{}:** {}\n", label, value),
        OutputFormat::Text => format!("  {:<14}{}\n", format!("{}:", label), value),
    }
}

fn title(fmt: OutputFormat, text: &str) -> String {
    match fmt {
        OutputFormat::Markdown => format!("**{}**\n\n", text),
        OutputFormat::Text => format!("  {}\n", text),
    }
}

impl Format for World {
    fn format(&self, fmt: OutputFormat) -> String {
        let mut out = title(fmt, &format!("{} ({})", self.name, self.culture.name()));
        out.push_str(&field(fmt, "Tags", &self.tags.join(", ")));
        out.push_str(&field(fmt, "Atmosphere", self.atmosphere));
        out.push_str(&field(fmt, "Temperature", self.temperature));
        out.push_str(&field(fmt, "Biosphere", self.biosphere));
        out.push_str(&field(fmt, "Population", self.population));
        out.push_str(&field(fmt, "Tech Level", self.tech_level));
        if let Some(origin) = self.origin {
            out.push_str(&field(fmt, "Origin", origin));
        }
        if let Some(relationship) = self.relationship {
            out.push_str(&field(fmt, "Relationship", relationship));
        }
        if let Some(contact) = self.contact {
            out.push_str(&field(fmt, "Contact", contact));
        }
        out.push('\n');
        out
    }
}

impl Format for PointOfInterest {
    fn format(&self, fmt: OutputFormat) -> String {
        let mut out = title(fmt, self.point);
        out.push_str(&field(fmt, "Occupied By", self.occupied_by));
        out.push_str(&field(fmt, "Situation", self.situation));
        out.push('\n');
        out
    }
}

impl Format for Star {
    fn format(&self, fmt: OutputFormat) -> String {
        let mut out = header(fmt, 2, &format!("{}  (Hex {})", self.name(), self.position()));

        out.push_str(&header(fmt, 3, "Primary World"));
        out.push_str(&self.primary_world().format(fmt));

        if !self.secondary_worlds().is_empty() {
            out.push_str(&header(fmt, 3, "Other Worlds"));
            for world in self.secondary_worlds() {
                out.push_str(&world.format(fmt));
            }
        }

        if !self.pois().is_empty() {
            out.push_str(&header(fmt, 3, "Points of Interest"));
            for poi in self.pois() {
                out.push_str(&poi.format(fmt));
            }
        }

        out
    }
}
