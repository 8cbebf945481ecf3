use crate::error::ChartError;
use crate::key::{key_name, pitch_class_of, prefers_flats, spell};
use crate::song::{ChordToken, Line, Segment, Song};

/// Direction of a transposition step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    fn delta(self) -> i8 {
        match self {
            Direction::Up => 1,
            Direction::Down => -1,
        }
    }
}

/// Transpose a song by whole semitone steps, producing a new song.
///
/// Applies `steps` atomic single-semitone shifts one after another, so a
/// multi-step call behaves exactly like repeated single-step calls. Zero
/// steps returns a structurally equal song.
///
/// Each shift rewrites every chord root and bass note, re-spelled under the
/// accidental convention of the resulting declared key (sharps when the
/// chart declares no key), and updates every `{key: ...}` directive so the
/// declared key stays consistent with the chords. Quality suffixes are
/// never touched.
///
/// # Errors
/// [`ChartError::UnrecognizedChord`] if any chord's root or bass is outside
/// the key table; [`ChartError::UnknownKey`] if a `{key: ...}` directive
/// holds an unresolvable spelling. Either way the whole operation fails and
/// the input song is unaffected.
pub fn transpose(song: &Song, direction: Direction, steps: usize) -> Result<Song, ChartError> {
    let mut current = song.clone();
    for _ in 0..steps {
        current = shift_semitone(&current, direction.delta())?;
    }
    Ok(current)
}

/// Apply one semitone shift across the whole chart.
fn shift_semitone(song: &Song, delta: i8) -> Result<Song, ChartError> {
    // The resulting key decides how chromatic notes are spelled.
    let new_key = match song.key() {
        Some(key) => Some(shifted_key_label(key, delta)?),
        None => None,
    };
    let prefer_flat = new_key.map(prefers_flats).unwrap_or(false);

    let mut lines = Vec::with_capacity(song.lines.len());
    for (index, line) in song.lines.iter().enumerate() {
        let line_no = index + 1;
        let shifted = match line {
            Line::Directive { name, value } if name == "key" => Line::Directive {
                name: name.clone(),
                value: shifted_key_label(value, delta)?.to_string(),
            },
            Line::Lyric { segments } => {
                let segments = segments
                    .iter()
                    .map(|segment| shift_segment(segment, delta, prefer_flat, line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                Line::Lyric { segments }
            }
            other => other.clone(),
        };
        lines.push(shifted);
    }
    Ok(Song { lines })
}

fn shifted_key_label(key: &str, delta: i8) -> Result<&'static str, ChartError> {
    let pitch_class = pitch_class_of(key)?;
    Ok(key_name(pitch_class + delta))
}

fn shift_segment(
    segment: &Segment,
    delta: i8,
    prefer_flat: bool,
    line: usize,
) -> Result<Segment, ChartError> {
    match segment {
        Segment::Text { .. } => Ok(segment.clone()),
        Segment::Chord { chord } => Ok(Segment::Chord {
            chord: shift_chord(chord, delta, prefer_flat, line)?,
        }),
    }
}

fn shift_chord(
    chord: &ChordToken,
    delta: i8,
    prefer_flat: bool,
    line: usize,
) -> Result<ChordToken, ChartError> {
    let root = shift_note(&chord.root, delta, prefer_flat)
        .ok_or_else(|| unrecognized(chord, line))?;
    let bass = match &chord.bass {
        Some(bass) => {
            let shifted = shift_note(bass, delta, prefer_flat)
                .ok_or_else(|| unrecognized(chord, line))?;
            Some(shifted.to_string())
        }
        None => None,
    };
    Ok(ChordToken {
        root: root.to_string(),
        quality: chord.quality.clone(),
        bass,
    })
}

fn shift_note(spelling: &str, delta: i8, prefer_flat: bool) -> Option<&'static str> {
    let pitch_class = pitch_class_of(spelling).ok()?;
    Some(spell(pitch_class + delta, prefer_flat))
}

fn unrecognized(chord: &ChordToken, line: usize) -> ChartError {
    ChartError::UnrecognizedChord {
        symbol: chord.symbol(),
        line,
    }
}
