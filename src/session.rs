//! # Transposition Session
//!
//! The per-view orchestration layer: one `Session` backs one chord chart
//! view for its lifetime.
//!
//! ## Lifecycle
//! - `load` parses the source, reads the authored key, resolves the
//!   shortest-path step to the requested preview key, and applies it once.
//! - `transpose_up` / `transpose_down` apply exactly one further semitone
//!   step and refresh the current-key label.
//! - `reload` resets the session from new source text; prior steps are
//!   never replayed, because the key declared in the new text is the new
//!   ground truth.
//!
//! The original key is fixed at load time and anchors the "Original Key"
//! display no matter how many steps are applied afterwards.
//!
//! A session is a plain value with no shared state. Operations are
//! synchronous, complete in one pass over the chart, and always leave the
//! stored song and the current-key label consistent: on any error the
//! session is unchanged.
//!
//! ## Example
//! ```rust
//! use chordkeeper::Session;
//!
//! let source = "{key: C}\nThis is a [C]ChordPro [G]example";
//! let mut session = Session::load(source, Some("D"))?;
//!
//! assert_eq!(session.original_key(), "C");
//! assert_eq!(session.current_key(), "D");
//!
//! session.transpose_up()?;
//! assert_eq!(session.current_key(), "Eb");
//! assert_eq!(session.original_key(), "C");
//! # Ok::<(), chordkeeper::ChartError>(())
//! ```

use crate::error::ChartError;
use crate::interval::resolve_step;
use crate::parser::parse;
use crate::song::Song;
use crate::transpose::{transpose, Direction};

/// View-model for one transposable chord chart.
#[derive(Debug, Clone)]
pub struct Session {
    source: String,
    song: Song,
    original_key: String,
    current_key: String,
    steps_applied: i32,
}

impl Session {
    /// Parse `source` and, when a preview key is given, transpose the chart
    /// into it.
    ///
    /// The initial step is the shortest signed path from the authored key to
    /// the preview key, applied as that many atomic semitone shifts.
    ///
    /// # Errors
    /// - [`ChartError::UnreadableChart`] if the source does not parse.
    /// - [`ChartError::MissingKey`] if the chart has no `{key: ...}`
    ///   directive to anchor the session.
    /// - [`ChartError::UnknownKey`] if the declared or preview key is not a
    ///   canonical spelling.
    /// - [`ChartError::UnrecognizedChord`] if any chord cannot be shifted.
    pub fn load(source: &str, preview_key: Option<&str>) -> Result<Self, ChartError> {
        let song = parse(source)?;
        let original_key = song
            .key()
            .map(str::to_string)
            .ok_or(ChartError::MissingKey)?;

        let (song, steps_applied) = match preview_key {
            Some(target) => {
                let step = resolve_step(&original_key, target)?;
                let direction = if step < 0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
                let transposed = transpose(&song, direction, step.unsigned_abs() as usize)?;
                (transposed, i32::from(step))
            }
            None => (song, 0),
        };

        let current_key = song
            .key()
            .map(str::to_string)
            .ok_or(ChartError::MissingKey)?;

        Ok(Self {
            source: source.to_string(),
            song,
            original_key,
            current_key,
            steps_applied,
        })
    }

    /// Shift the chart one semitone up.
    pub fn transpose_up(&mut self) -> Result<(), ChartError> {
        self.step(Direction::Up)
    }

    /// Shift the chart one semitone down.
    pub fn transpose_down(&mut self) -> Result<(), ChartError> {
        self.step(Direction::Down)
    }

    fn step(&mut self, direction: Direction) -> Result<(), ChartError> {
        let next = transpose(&self.song, direction, 1)?;
        self.current_key = next
            .key()
            .map(str::to_string)
            .ok_or(ChartError::MissingKey)?;
        self.steps_applied += match direction {
            Direction::Up => 1,
            Direction::Down => -1,
        };
        self.song = next;
        Ok(())
    }

    /// Reset the session from new source text, discarding applied steps.
    pub fn reload(&mut self, source: &str, preview_key: Option<&str>) -> Result<(), ChartError> {
        *self = Session::load(source, preview_key)?;
        Ok(())
    }

    /// The chart as currently transposed.
    pub fn song(&self) -> &Song {
        &self.song
    }

    /// The source text this session was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The key declared in the source, fixed at load time.
    pub fn original_key(&self) -> &str {
        &self.original_key
    }

    /// The key of the chart as currently displayed.
    pub fn current_key(&self) -> &str {
        &self.current_key
    }

    /// Signed number of semitone steps between the displayed chart and the
    /// authored key.
    pub fn steps_applied(&self) -> i32 {
        self.steps_applied
    }
}
