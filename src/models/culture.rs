use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const NUM_CULTURES: usize = 10;

/// Earth culture a colony descends from. Flavours world names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Culture {
    Arabic,
    Chinese,
    English,
    Greek,
    Indian,
    Japanese,
    Latin,
    Nigerian,
    Russian,
    Spanish,
}

impl Culture {
    pub const ALL: [Culture; NUM_CULTURES] = [
        Culture::Arabic,
        Culture::Chinese,
        Culture::English,
        Culture::Greek,
        Culture::Indian,
        Culture::Japanese,
        Culture::Latin,
        Culture::Nigerian,
        Culture::Russian,
        Culture::Spanish,
    ];

    /// Uniform draw over all cultures.
    pub fn random(rng: &mut StdRng) -> Culture {
        Culture::ALL[rng.gen_range(0..NUM_CULTURES)]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Culture::Arabic => "Arabic",
            Culture::Chinese => "Chinese",
            Culture::English => "English",
            Culture::Greek => "Greek",
            Culture::Indian => "Indian",
            Culture::Japanese => "Japanese",
            Culture::Latin => "Latin",
            Culture::Nigerian => "Nigerian",
            Culture::Russian => "Russian",
            Culture::Spanish => "Spanish",
        }
    }

    /// Place names typical of the culture, used for world names.
    pub fn place_names(&self) -> &'static [&'static str] {
        match self {
            Culture::Arabic => &[
                "Adan", "Bahrah", "Dimashq", "Halab", "Jazirah", "Makkah", "Qasr", "Sana",
            ],
            Culture::Chinese => &[
                "Anqing", "Changsha", "Fuzhou", "Guilin", "Kunming", "Lanzhou", "Suzhou", "Xining",
            ],
            Culture::English => &[
                "Ashby", "Bramley", "Dunmore", "Fairhaven", "Kingsbridge", "Marlow", "Thornbury",
                "Whitby",
            ],
            Culture::Greek => &[
                "Argos", "Delos", "Ithaka", "Korinthos", "Naxos", "Pylos", "Rhodos", "Thebai",
            ],
            Culture::Indian => &[
                "Agra", "Bhopal", "Indore", "Kochi", "Madurai", "Nashik", "Pune", "Vellore",
            ],
            Culture::Japanese => &[
                "Akita", "Fukui", "Hakone", "Kanazawa", "Matsue", "Nara", "Sendai", "Tottori",
            ],
            Culture::Latin => &[
                "Aquileia", "Brundisium", "Capua", "Emerita", "Lugdunum", "Ostia", "Tarraco", "Verona",
            ],
            Culture::Nigerian => &[
                "Abeokuta", "Benin", "Enugu", "Ibadan", "Jos", "Kano", "Owerri", "Zaria",
            ],
            Culture::Russian => &[
                "Irkutsk", "Kazan", "Murmansk", "Novgorod", "Perm", "Samara", "Tomsk", "Vyatka",
            ],
            Culture::Spanish => &[
                "Almeria", "Burgos", "Cadiz", "Girona", "Leon", "Malaga", "Toledo", "Zamora",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_draw_reaches_every_culture() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Culture> = (0..1000).map(|_| Culture::random(&mut rng)).collect();
        assert_eq!(seen.len(), NUM_CULTURES);
    }

    #[test]
    fn every_culture_has_place_names() {
        for culture in Culture::ALL.iter() {
            assert!(!culture.place_names().is_empty(), "{} has no names", culture.name());
        }
    }
}
