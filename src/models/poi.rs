use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;

/// One row of the points-of-interest table: a kind of location plus the
/// occupants and situations that fit it.
struct PoiEntry {
    point: &'static str,
    occupied_by: &'static [&'static str],
    situation: &'static [&'static str],
}

const POI_TABLE: &[PoiEntry] = &[
    PoiEntry {
        point: "Deep-space station",
        occupied_by: &[
            "Dangerously odd transhumans",
            "Freeze-dried ancient corpses",
            "Secretive military observers",
            "Eccentric oligarch and minions",
            "Deranged but brilliant scientist",
        ],
        situation: &[
            "Systems breaking down",
            "Foreign sabotage attempt",
            "Black market for the elite",
            "Vault for dangerous pretech",
            "Supply base for pirates",
        ],
    },
    PoiEntry {
        point: "Asteroid base",
        occupied_by: &[
            "Zealous religious sectarians",
            "Failed rebels from another world",
            "Wage-slave corporate miners",
            "Independent asteroid prospectors",
            "Pirates masquerading as otherwise",
        ],
        situation: &[
            "Life support is threatened",
            "Base needs a new asteroid",
            "Dug out something nasty",
            "Fighting another asteroid",
            "Hit a priceless vein of ore",
        ],
    },
    PoiEntry {
        point: "Remote moon base",
        occupied_by: &[
            "Unlucky corporate researchers",
            "Reclusive hermit genius",
            "Remnants of a failed colony",
            "Military listening post",
            "Lonely overseers and robot miners",
        ],
        situation: &[
            "Something dark has awoken",
            "Criminals trying to take over",
            "Moon plague breaking out",
            "Desperate for vital supplies",
            "Rich but badly-protected",
        ],
    },
    PoiEntry {
        point: "Ancient orbital ruin",
        occupied_by: &[
            "Robots of dubious sentience",
            "Trigger-happy scavengers",
            "Government researchers",
            "Military quarantine enforcers",
            "Heirs of the original alien builders",
        ],
        situation: &[
            "Trying to stop it awakening",
            "Meddling with strange tech",
            "Impending tech calamity",
            "A terrible secret is unearthed",
            "Fighting outside interlopers",
        ],
    },
    PoiEntry {
        point: "Research base",
        occupied_by: &[
            "Experiments that have gotten loose",
            "Scientists from a major local corp",
            "Black-ops governmental researchers",
            "Secret employees of a foreign power",
            "Aliens studying the human locals",
        ],
        situation: &[
            "Perilous research underway",
            "Hideously immoral research",
            "Held hostage by outsiders",
            "Scientists are mind-controlled",
            "Selling research on the black market",
        ],
    },
    PoiEntry {
        point: "Asteroid belt",
        occupied_by: &[
            "Grizzled belter mine laborers",
            "Ancient automated guardian drones",
            "Survivors of a destroyed asteroid base",
            "Pirates hiding out among the rocks",
            "Lonely military patrol base staff",
        ],
        situation: &[
            "Ruptured rock released a peril",
            "Foreign spy ships hide there",
            "Gold rush for new minerals",
            "Ancient ruins dot the rocks",
            "War between rival rocks",
        ],
    },
    PoiEntry {
        point: "Gas giant mine",
        occupied_by: &[
            "Miserable gas-miner slaves or serfs",
            "Strange robots and their overseers",
            "Scientists studying the alien life",
            "Scrappers in the ruined old mine",
            "Impoverished separatist group",
        ],
        situation: &[
            "Things are emerging below",
            "They need vital supplies",
            "The mine is running out",
            "A miner's revolt is underway",
            "Ancient tech has been found",
        ],
    },
    PoiEntry {
        point: "Refueling station",
        occupied_by: &[
            "Half-crazed hermit caretaker",
            "Sordid purveyors of decadent fun",
            "Extortionate corporate minions",
            "Religious missionaries to travelers",
            "Brainwashed servitors",
        ],
        situation: &[
            "A ship is in severe distress",
            "Pirates have taken over",
            "A murder has been committed",
            "Station is about to explode",
            "A nearby ship has gone dark",
        ],
    },
];

/// Something worth visiting in a star system besides its worlds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointOfInterest {
    pub point: &'static str,
    pub occupied_by: &'static str,
    pub situation: &'static str,
}

impl PointOfInterest {
    pub fn new(rng: &mut StdRng) -> Self {
        let entry = &POI_TABLE[rng.gen_range(0..POI_TABLE.len())];
        PointOfInterest {
            point: entry.point,
            occupied_by: entry.occupied_by[rng.gen_range(0..entry.occupied_by.len())],
            situation: entry.situation[rng.gen_range(0..entry.situation.len())],
        }
    }
}
