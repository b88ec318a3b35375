use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::constants::TAGS_PER_WORLD;
use super::culture::Culture;

/// World tags from the rulebook's tag list.
pub const WORLD_TAGS: &[&str] = &[
    "Abandoned Colony", "Alien Ruins", "Altered Humanity", "Anarchists", "Anthropomorphs",
    "Area 51", "Badlands World", "Battleground", "Beastmasters", "Bubble Cities",
    "Cheap Life", "Civil War", "Cold War", "Colonized Population", "Cultural Power",
    "Cybercommunists", "Cyborgs", "Cyclical Doom", "Desert World", "Doomed World",
    "Dying Race", "Eugenic Cult", "Exchange Consulate", "Fallen Hegemon", "Feral World",
    "Flying Cities", "Forbidden Tech", "Former Warriors", "Freak Geology", "Freak Weather",
    "Friendly Foe", "Gold Rush", "Great Work", "Hatred", "Heavy Industry",
    "Heavy Mining", "Hivemind", "Holy War", "Hostile Biosphere", "Hostile Space",
    "Immortals", "Local Specialty", "Local Tech", "Major Spaceyard", "Mandarinate",
    "Mandate Base", "Maneaters", "Megacorps", "Mercenaries", "Minimal Contact",
    "Misandry/Misogyny", "Night World", "Nomads", "Oceanic World", "Out of Contact",
    "Outpost World", "Perimeter Agency", "Pilgrimage Site", "Pleasure World", "Police State",
    "Post-Scarcity", "Preceptor Archive", "Pretech Cultists", "Primitive Aliens", "Prison Planet",
    "Psionics Academy", "Psionics Fear", "Psionics Worship", "Quarantined World", "Radioactive World",
    "Refugees", "Regional Hegemon", "Restrictive Laws", "Revanchists", "Revolutionaries",
    "Rigid Culture", "Rising Hegemon", "Ritual Combat", "Robots", "Seagoing Cities",
    "Sealed Menace", "Secret Masters", "Sectarians", "Seismic Instability", "Shackled World",
    "Societal Despair", "Sole Supplier", "Taboo Treasure", "Terraform Failure", "Theocracy",
    "Tomb World", "Trade Hub", "Tyranny", "Unbraked AI", "Urbanized Surface",
    "Utopia", "Warlords", "Xenophiles", "Xenophobes", "Zombies",
];

const ATMOSPHERE: [&str; 11] = [
    "Corrosive",
    "Inert gas",
    "Airless or thin atmosphere",
    "Breathable mix",
    "Breathable mix",
    "Breathable mix",
    "Breathable mix",
    "Breathable mix",
    "Thick atmosphere, breathable with a pressure mask",
    "Invasive, toxic atmosphere",
    "Corrosive and invasive atmosphere",
];

const TEMPERATURE: [&str; 11] = [
    "Frozen",
    "Cold",
    "Variable cold-to-temperate",
    "Temperate",
    "Temperate",
    "Temperate",
    "Temperate",
    "Temperate",
    "Variable temperate-to-warm",
    "Warm",
    "Burning",
];

const BIOSPHERE: [&str; 11] = [
    "Remnant biosphere",
    "Microbial life",
    "No native biosphere",
    "No native biosphere",
    "Human-miscible biosphere",
    "Human-miscible biosphere",
    "Human-miscible biosphere",
    "Immiscible biosphere",
    "Immiscible biosphere",
    "Hybrid biosphere",
    "Engineered biosphere",
];

const POPULATION: [&str; 11] = [
    "Failed colony",
    "Outpost",
    "Fewer than a million inhabitants",
    "Several million inhabitants",
    "Several million inhabitants",
    "Hundreds of millions of inhabitants",
    "Hundreds of millions of inhabitants",
    "Hundreds of millions of inhabitants",
    "Billions of inhabitants",
    "Billions of inhabitants",
    "Alien inhabitants",
];

const TECH_LEVEL: [&str; 11] = [
    "TL0, neolithic-level technology",
    "TL1, medieval technology",
    "TL2, early Industrial Age technology",
    "TL3, tech like that of present-day Earth",
    "TL3, tech like that of present-day Earth",
    "TL4, baseline postech",
    "TL4, baseline postech",
    "TL4, baseline postech",
    "TL4, baseline postech with specialties",
    "TL4, baseline postech with specialties",
    "TL5, pretech with surviving infrastructure",
];

const ORIGIN: [&str; 8] = [
    "Recent colony from the primary world",
    "Refuge for exiles from the primary world",
    "Founded ages ago by a different group",
    "Founded long before the primary world",
    "Lost ancient colony of the primary world",
    "Colony established on the same wave as the primary",
    "Founded by refugees from a dying world",
    "Pre-scream outpost that outlived its makers",
];

const RELATIONSHIP: [&str; 8] = [
    "Total economic dependence on the primary world",
    "Supplies the primary world with something vital",
    "Cultural rivals of the primary world",
    "Open hostility towards the primary world",
    "Mutual distrust and grudging trade",
    "Close allies of the primary world",
    "Subjects of the primary world",
    "Pays little heed to the primary world",
];

const CONTACT: [&str; 8] = [
    "Trade in an important resource",
    "Shared religion",
    "Intermarriage of ruling families",
    "Formal treaty of protection",
    "Smuggling and black markets",
    "Pilgrims travelling between worlds",
    "Migrant workers",
    "Old feuds kept alive by both sides",
];

/// A world orbiting a star. The primary world comes first in a star's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct World {
    pub name: String,
    pub primary: bool,
    pub culture: Culture,
    pub tags: Vec<&'static str>,
    pub atmosphere: &'static str,
    pub temperature: &'static str,
    pub biosphere: &'static str,
    pub population: &'static str,
    pub tech_level: &'static str,
    /// Only rolled for secondary worlds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<&'static str>,
}

impl World {
    /// Roll a new world. Tags listed in `excluded_tags` (case-insensitive)
    /// are never chosen.
    pub fn new(
        rng: &mut StdRng,
        culture: Culture,
        primary: bool,
        excluded_tags: &[String],
    ) -> Self {
        let names = culture.place_names();
        let name = names[rng.gen_range(0..names.len())].to_string();
        let tags = roll_tags(rng, excluded_tags);

        let atmosphere = roll_2d6(rng, &ATMOSPHERE);
        let temperature = roll_2d6(rng, &TEMPERATURE);
        let biosphere = roll_2d6(rng, &BIOSPHERE);
        let population = roll_2d6(rng, &POPULATION);
        let tech_level = roll_2d6(rng, &TECH_LEVEL);

        let (origin, relationship, contact) = if primary {
            (None, None, None)
        } else {
            (
                Some(roll_d8(rng, &ORIGIN)),
                Some(roll_d8(rng, &RELATIONSHIP)),
                Some(roll_d8(rng, &CONTACT)),
            )
        };

        World {
            name,
            primary,
            culture,
            tags,
            atmosphere,
            temperature,
            biosphere,
            population,
            tech_level,
            origin,
            relationship,
            contact,
        }
    }
}

/// True if `tag` appears in the exclusion list, ignoring ASCII case.
pub fn is_excluded(tag: &str, excluded_tags: &[String]) -> bool {
    excluded_tags.iter().any(|e| e.eq_ignore_ascii_case(tag))
}

fn roll_tags(rng: &mut StdRng, excluded_tags: &[String]) -> Vec<&'static str> {
    let allowed: Vec<&'static str> = WORLD_TAGS
        .iter()
        .copied()
        .filter(|tag| !is_excluded(tag, excluded_tags))
        .collect();
    allowed
        .choose_multiple(rng, TAGS_PER_WORLD)
        .copied()
        .collect()
}

/// Index a 2..=12 table with a 2d6 roll.
fn roll_2d6(rng: &mut StdRng, table: &[&'static str; 11]) -> &'static str {
    let roll = rng.gen_range(1..=6usize) + rng.gen_range(1..=6usize);
    table[roll - 2]
}

fn roll_d8(rng: &mut StdRng, table: &[&'static str; 8]) -> &'static str {
    table[rng.gen_range(0..8)]
}
