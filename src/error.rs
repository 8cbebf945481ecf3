//! # Error Types
//!
//! This module defines all error types for the ChordKeeper core.
//!
//! Errors carry the 1-based line number in the chart source where one is
//! available, so the editor can point users at the offending line.
//!
//! ## Error Types
//! - `UnreadableChart` - Parse errors with line information
//! - `UnknownKey` - A key spelling outside the canonical key table
//! - `UnrecognizedChord` - A chord whose root or bass note cannot be resolved
//! - `MissingKey` - A chart with no `{key: ...}` directive
//!
//! ## Usage
//! ```rust
//! use chordkeeper::{Session, ChartError};
//!
//! match Session::load("{key: C}\n[C]Hello", Some("D")) {
//!     Ok(session) => println!("Current key: {}", session.current_key()),
//!     Err(ChartError::UnreadableChart { line, message }) => {
//!         eprintln!("Unreadable chart at line {}: {}", line, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// Parse error with line information.
    ///
    /// Occurs when the ChordPro source is malformed (unterminated directive,
    /// unclosed chord bracket). The whole chart is rejected; no partial chart
    /// is ever produced.
    ///
    /// # Example
    /// ```
    /// # use chordkeeper::ChartError;
    /// let err = ChartError::UnreadableChart {
    ///     line: 3,
    ///     message: "unclosed chord bracket '['".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unreadable chart at line 3: unclosed chord bracket '['");
    /// ```
    #[error("Unreadable chart at line {line}: {message}")]
    UnreadableChart { line: usize, message: String },

    /// Unknown key spelling.
    ///
    /// Occurs when a key name falls outside the canonical table of the 17
    /// conventional spellings. Callers must not assume a default pitch class;
    /// silently defaulting would mistranspose real songs.
    ///
    /// # Example
    /// ```
    /// # use chordkeeper::ChartError;
    /// let err = ChartError::UnknownKey { name: "H".to_string() };
    /// assert_eq!(err.to_string(), "Unknown key: H");
    /// ```
    #[error("Unknown key: {name}")]
    UnknownKey { name: String },

    /// Chord token whose root or bass note cannot be resolved.
    ///
    /// Fails the whole transposition rather than skipping the token, so the
    /// displayed key can never drift out of sync with the chord spellings.
    #[error("Unrecognized chord '{symbol}' at line {line}")]
    UnrecognizedChord { symbol: String, line: usize },

    /// The chart declares no key.
    ///
    /// A transposition session needs the authored key as its anchor; a chart
    /// without a `{key: ...}` directive cannot be loaded into one.
    #[error("Chart declares no key")]
    MissingKey,
}
