//! ChordPro parser.
//!
//! Turns raw ChordPro text into a [`Song`]: one [`Line`] per source line.
//!
//! - `{name}` / `{name: value}` lines are directives.
//! - Lines starting with `#` are source comments.
//! - Blank lines stay in the chart as spacing.
//! - Everything else is a lyric line: text interleaved with `[...]` chord
//!   brackets. A bracket holding whitespace or bar separators, such as
//!   `[D / / / | G / / / |]`, is an inline chord run; bare `/` and `|`
//!   marks inside it stay literal text.
//!
//! The parser does not check chord roots against the key table. A chord
//! like `[H7]` parses fine and fails later, at transposition, so the error
//! can name the exact symbol and line.

use crate::error::ChartError;
use crate::song::{ChordToken, Line, Segment, Song};

/// Parse ChordPro source into a structured song.
///
/// # Example
/// ```
/// # use chordkeeper::parse;
/// let song = parse("{key: G}\nSwing [G]low, sweet [C]chari[G]ot").unwrap();
/// assert_eq!(song.key(), Some("G"));
/// assert_eq!(song.chords().count(), 3);
/// ```
///
/// # Errors
/// Returns [`ChartError::UnreadableChart`] on an unterminated directive or
/// an unclosed chord bracket.
pub fn parse(source: &str) -> Result<Song, ChartError> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = raw.trim();
        let line = if trimmed.is_empty() {
            Line::Empty
        } else if let Some(comment) = trimmed.strip_prefix('#') {
            Line::Comment {
                text: comment.trim().to_string(),
            }
        } else if trimmed.starts_with('{') {
            parse_directive(trimmed, line_no)?
        } else {
            parse_lyric(raw, line_no)?
        };
        lines.push(line);
    }
    Ok(Song { lines })
}

fn parse_directive(trimmed: &str, line_no: usize) -> Result<Line, ChartError> {
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| ChartError::UnreadableChart {
            line: line_no,
            message: format!("unterminated directive '{}'", trimmed),
        })?;
    let (name, value) = match inner.split_once(':') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => (inner.trim(), ""),
    };
    if name.is_empty() {
        return Err(ChartError::UnreadableChart {
            line: line_no,
            message: "empty directive name".to_string(),
        });
    }
    Ok(Line::Directive {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn parse_lyric(line: &str, line_no: usize) -> Result<Line, ChartError> {
    let mut segments = Vec::new();
    let mut text = String::new();
    let mut remainder = line;

    while let Some(open) = remainder.find('[') {
        text.push_str(&remainder[..open]);
        let after = &remainder[open + 1..];
        let close = after.find(']').ok_or_else(|| ChartError::UnreadableChart {
            line: line_no,
            message: "unclosed chord bracket '['".to_string(),
        })?;
        if !text.is_empty() {
            segments.push(Segment::Text {
                text: std::mem::take(&mut text),
            });
        }
        push_chord_run(&after[..close], &mut segments);
        remainder = &after[close + 1..];
    }
    text.push_str(remainder);
    if !text.is_empty() {
        segments.push(Segment::Text { text });
    }

    Ok(Line::Lyric { segments })
}

/// Split bracket content into chord and literal-text segments.
fn push_chord_run(content: &str, segments: &mut Vec<Segment>) {
    if content.trim().is_empty() {
        return;
    }
    if !content.chars().any(is_run_separator) {
        segments.push(Segment::Chord {
            chord: parse_chord_symbol(content),
        });
        return;
    }
    let mut rest = content;
    while !rest.is_empty() {
        let boundary = if rest.starts_with(is_run_separator) {
            let end = rest
                .find(|c: char| !is_run_separator(c))
                .unwrap_or(rest.len());
            segments.push(Segment::Text {
                text: rest[..end].to_string(),
            });
            end
        } else {
            let end = rest.find(is_run_separator).unwrap_or(rest.len());
            let item = &rest[..end];
            if item == "/" {
                // beat marker, not a slash chord
                segments.push(Segment::Text {
                    text: item.to_string(),
                });
            } else {
                segments.push(Segment::Chord {
                    chord: parse_chord_symbol(item),
                });
            }
            end
        };
        rest = &rest[boundary..];
    }
}

fn is_run_separator(c: char) -> bool {
    c.is_whitespace() || c == '|'
}

/// Split a chord symbol into root, quality suffix, and optional bass.
///
/// The split is purely structural. An unresolvable root (e.g. `H`) is kept
/// as written and rejected by the transposer, never silently dropped.
fn parse_chord_symbol(symbol: &str) -> ChordToken {
    let (body, bass) = match symbol.rsplit_once('/') {
        Some((body, tail)) if !body.is_empty() && is_note_spelling(tail) => {
            (body, Some(tail.to_string()))
        }
        _ => (symbol, None),
    };
    let root_len = root_span(body);
    if root_len == 0 {
        return ChordToken {
            root: body.to_string(),
            quality: String::new(),
            bass,
        };
    }
    let (root, quality) = body.split_at(root_len);
    ChordToken {
        root: root.to_string(),
        quality: quality.to_string(),
        bass,
    }
}

/// Byte length of the leading note spelling: a capital letter plus an
/// optional `#` or `b`.
fn root_span(body: &str) -> usize {
    let mut chars = body.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => match chars.next() {
            Some('#') | Some('b') => 2,
            _ => 1,
        },
        _ => 0,
    }
}

fn is_note_spelling(s: &str) -> bool {
    !s.is_empty() && root_span(s) == s.len()
}
