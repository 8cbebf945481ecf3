//! Interval resolution between two keys.
//!
//! The step between two keys is the signed shortest path around the 12-tone
//! circle, so moving from C to B is one step down, not eleven steps up. At
//! exactly a tritone (raw difference of 6 or -6) both directions are equally
//! short; the sign stays whatever `target - original` produced. That choice
//! is canonical here and pinned by tests.

use crate::error::ChartError;
use crate::key::pitch_class_of;

/// Compute the signed semitone step from `original` to `target`.
///
/// The result is always in -6..=6. Positive steps transpose up, negative
/// steps transpose down.
///
/// # Example
/// ```
/// # use chordkeeper::resolve_step;
/// assert_eq!(resolve_step("C", "D").unwrap(), 2);
/// assert_eq!(resolve_step("C", "B").unwrap(), -1);
/// assert_eq!(resolve_step("G", "Db").unwrap(), -6);
/// ```
pub fn resolve_step(original: &str, target: &str) -> Result<i8, ChartError> {
    let raw = pitch_class_of(target)? - pitch_class_of(original)?;
    let step = if raw > 6 {
        raw - 12
    } else if raw < -6 {
        raw + 12
    } else {
        raw
    };
    Ok(step)
}
