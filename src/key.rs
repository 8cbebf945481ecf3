//! Key table: pitch classes for the conventional key spellings, plus the
//! respelling tables used when chords are rewritten after a transposition.

use crate::error::ChartError;

/// The canonical key spellings offered by key pickers, in chart order.
pub const ALL_KEYS: [&str; 17] = [
    "C", "C#", "Db", "D", "D#", "Eb", "E", "F", "F#", "Gb", "G", "G#", "Ab", "A", "A#", "Bb", "B",
];

/// Chromatic spellings by pitch class, sharp convention.
const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Chromatic spellings by pitch class, flat convention.
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Canonical key labels by pitch class, using conventional key signature
/// choices for the black keys (Db over C#, F# over Gb, etc.).
const KEY_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// Resolve a key or note spelling to its pitch class (0..=11).
///
/// Total over the 17 conventional spellings, including enharmonic pairs
/// (C#/Db, D#/Eb, F#/Gb, G#/Ab, A#/Bb). Any other input is an error, never a
/// default pitch class.
///
/// # Example
/// ```
/// # use chordkeeper::key::pitch_class_of;
/// assert_eq!(pitch_class_of("F#").unwrap(), 6);
/// assert_eq!(pitch_class_of("Gb").unwrap(), 6);
/// assert!(pitch_class_of("H").is_err());
/// ```
pub fn pitch_class_of(spelling: &str) -> Result<i8, ChartError> {
    let pitch_class = match spelling.trim() {
        "C" => 0,
        "C#" | "Db" => 1,
        "D" => 2,
        "D#" | "Eb" => 3,
        "E" => 4,
        "F" => 5,
        "F#" | "Gb" => 6,
        "G" => 7,
        "G#" | "Ab" => 8,
        "A" => 9,
        "A#" | "Bb" => 10,
        "B" => 11,
        other => {
            return Err(ChartError::UnknownKey {
                name: other.to_string(),
            })
        }
    };
    Ok(pitch_class)
}

/// Spell a pitch class as a note name, choosing the sharp or flat table.
///
/// The pitch class is normalized with a proper modulo first, so callers can
/// pass the raw result of a signed shift.
pub fn spell(pitch_class: i8, prefer_flat: bool) -> &'static str {
    let normalized = pitch_class.rem_euclid(12) as usize;
    if prefer_flat {
        FLAT_NAMES[normalized]
    } else {
        SHARP_NAMES[normalized]
    }
}

/// Canonical key label for a pitch class.
pub fn key_name(pitch_class: i8) -> &'static str {
    KEY_NAMES[pitch_class.rem_euclid(12) as usize]
}

/// Whether chromatic notes in this key are conventionally spelled with flats.
///
/// Flat-side keys (F, Bb, Eb, Ab, Db, Gb) spell with flats; every other key,
/// including C, spells with sharps. Charts with no declared key also default
/// to sharps.
pub fn prefers_flats(key: &str) -> bool {
    matches!(key.trim(), "F" | "Bb" | "Eb" | "Ab" | "Db" | "Gb")
}
