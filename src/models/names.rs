//! Name tables and the generic name generator.

use rand::rngs::StdRng;
use rand::Rng;

/// Short, evocative star system names. Rolls are not unique.
pub const SYSTEM_NAMES: &[&str] = &[
    "Acheron", "Aegis", "Albion", "Anvil", "Arcadia", "Ashfall", "Beacon", "Bastion",
    "Cairn", "Caldera", "Cinder", "Corona", "Crucible", "Dawn", "Delphi", "Drift",
    "Ember", "Eyrie", "Fathom", "Forge", "Gallows", "Gloam", "Halcyon", "Harrow",
    "Haven", "Hollow", "Ichor", "Janus", "Kestrel", "Lantern", "Lodestar", "Maw",
    "Meridian", "Mire", "Nadir", "Nimbus", "Obelisk", "Oracle", "Pale", "Pyre",
    "Quarry", "Rampart", "Reach", "Relic", "Sable", "Sepulchre", "Shoal", "Solace",
    "Spire", "Talon", "Tether", "Thule", "Umber", "Vale", "Vesper", "Vigil",
    "Warden", "Wither", "Yonder", "Zenith",
];

const ONSETS: &[&str] = &[
    "b", "c", "d", "f", "g", "h", "k", "l", "m", "n", "p", "r", "s", "t", "v", "z", "th", "sh",
    "kr", "tr",
];
const VOWELS: &[&str] = &["a", "e", "i", "o", "u", "ae", "ia", "ou"];

/// One roll on the system name table.
pub fn roll_system_name(rng: &mut StdRng) -> String {
    SYSTEM_NAMES[rng.gen_range(0..SYSTEM_NAMES.len())].to_string()
}

/// Build a capitalised name from alternating syllable parts, cut to
/// `length` characters. A length of 0 is treated as 1.
pub fn generate_name(rng: &mut StdRng, length: usize) -> String {
    let length = length.max(1);
    let mut name = String::with_capacity(length + 2);

    // Half the names open on a vowel
    let mut vowel_next = rng.gen_bool(0.5);
    while name.len() < length {
        let table = if vowel_next { VOWELS } else { ONSETS };
        name.push_str(table[rng.gen_range(0..table.len())]);
        vowel_next = !vowel_next;
    }
    name.truncate(length);

    capitalise(&name)
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
