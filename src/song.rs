//! # Song Model
//!
//! This module defines the structured song produced by the ChordPro parser
//! and consumed by the transposer and renderer.
//!
//! ## Type Hierarchy
//! ```text
//! Song
//!   └── Vec<Line>
//!         ├── Directive { name, value }   e.g. {key: C}, {start_of_verse: Verse 1}
//!         ├── Lyric { segments }
//!         │     └── Segment (enum)
//!         │           ├── Text { text }
//!         │           └── Chord { chord: ChordToken }
//!         ├── Comment { text }            lines starting with '#'
//!         └── Empty
//!
//! ChordToken
//!   ├── root: String                     "C", "F#", "Bb"
//!   ├── quality: String                  "m7", "sus4", "" (never altered)
//!   └── bass: Option<String>             slash chords, e.g. D/F#
//! ```
//!
//! A `Song` is an immutable value for the duration of one render cycle:
//! transposition produces a new `Song` rather than mutating in place, so two
//! chart views can never alias each other's state.
//!
//! All types serialize to camelCase JSON for the application boundary.

use serde::Serialize;

/// A parsed chord chart: an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub lines: Vec<Line>,
}

/// One line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Line {
    /// A `{name}` or `{name: value}` directive. `value` is empty for bare
    /// directives such as `{end_of_verse}`.
    Directive { name: String, value: String },
    /// Lyrics with inline chords.
    Lyric { segments: Vec<Segment> },
    /// A `#` source comment. Not rendered.
    Comment { text: String },
    /// A blank line.
    Empty,
}

/// A run of text or an inline chord within a lyric line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment {
    Text { text: String },
    Chord { chord: ChordToken },
}

/// An inline chord: root spelling, opaque quality suffix, optional bass.
///
/// Only `root` and `bass` are pitch material; `quality` passes through
/// transposition byte-for-byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordToken {
    pub root: String,
    pub quality: String,
    pub bass: Option<String>,
}

impl ChordToken {
    /// Reassemble the display symbol, e.g. "Dm7" or "D/F#".
    pub fn symbol(&self) -> String {
        match &self.bass {
            Some(bass) => format!("{}{}/{}", self.root, self.quality, bass),
            None => format!("{}{}", self.root, self.quality),
        }
    }
}

impl Song {
    /// Value of the first directive with the given name.
    pub fn directive(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| match line {
            Line::Directive { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The declared key from the `{key: ...}` directive, if any.
    pub fn key(&self) -> Option<&str> {
        self.directive("key")
    }

    /// The `{title: ...}` directive, if any.
    pub fn title(&self) -> Option<&str> {
        self.directive("title")
    }

    /// The `{artist: ...}` directive, if any.
    pub fn artist(&self) -> Option<&str> {
        self.directive("artist")
    }

    /// Iterate every chord token in the chart, in order.
    pub fn chords(&self) -> impl Iterator<Item = &ChordToken> {
        self.lines.iter().flat_map(|line| {
            let segments: &[Segment] = match line {
                Line::Lyric { segments } => segments,
                _ => &[],
            };
            segments.iter().filter_map(|segment| match segment {
                Segment::Chord { chord } => Some(chord),
                Segment::Text { .. } => None,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chord(root: &str, quality: &str, bass: Option<&str>) -> ChordToken {
        ChordToken {
            root: root.to_string(),
            quality: quality.to_string(),
            bass: bass.map(str::to_string),
        }
    }

    #[test]
    fn symbol_reassembles_suffix_and_bass() {
        assert_eq!(chord("C", "", None).symbol(), "C");
        assert_eq!(chord("D", "m7", None).symbol(), "Dm7");
        assert_eq!(chord("D", "", Some("F#")).symbol(), "D/F#");
        assert_eq!(chord("G", "7", Some("B")).symbol(), "G7/B");
    }

    #[test]
    fn directive_accessors_find_the_first_match() {
        let song = Song {
            lines: vec![
                Line::Directive {
                    name: "title".to_string(),
                    value: "Amazing Song".to_string(),
                },
                Line::Directive {
                    name: "key".to_string(),
                    value: "G".to_string(),
                },
                Line::Directive {
                    name: "key".to_string(),
                    value: "A".to_string(),
                },
            ],
        };
        assert_eq!(song.title(), Some("Amazing Song"));
        assert_eq!(song.key(), Some("G"));
        assert_eq!(song.artist(), None);
    }

    #[test]
    fn serializes_to_camel_case_tagged_json() {
        let song = Song {
            lines: vec![
                Line::Directive {
                    name: "key".to_string(),
                    value: "C".to_string(),
                },
                Line::Lyric {
                    segments: vec![
                        Segment::Chord {
                            chord: chord("C", "maj7", None),
                        },
                        Segment::Text {
                            text: "hello".to_string(),
                        },
                    ],
                },
            ],
        };
        let json = serde_json::to_value(&song).unwrap();
        assert_eq!(json["lines"][0]["type"], "directive");
        assert_eq!(json["lines"][1]["segments"][0]["chord"]["root"], "C");
        assert_eq!(json["lines"][1]["segments"][0]["chord"]["quality"], "maj7");
        assert!(json["lines"][1]["segments"][0]["chord"]["bass"].is_null());
    }
}
