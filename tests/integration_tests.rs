//! Integration tests for the ChordKeeper core
//!
//! Tests the full pipeline from ChordPro source to transposed, rendered
//! chart output.

use chordkeeper::{render, render_in_key, ChartError, Session};

const SOURCE: &str = r#"{title: Example Song}
{artist: The Examples}
{key: G}

{c: Intro}
[G / / / | C / / / | Em / / / | C / / / |]

{start_of_verse: Verse 1}
Swing [G]low, sweet [C]chari[G]ot
{end_of_verse}

{start_of_chorus: Chorus}
Comin' for to carry me [D/F#]home
{end_of_chorus}
"#;

#[test]
fn test_render_in_authored_key() {
    let result = render(SOURCE);
    assert!(result.is_ok(), "Should render a well-formed chart");
    let html = result.unwrap();
    assert!(html.contains("Example Song"));
    assert!(html.contains("Key: G"));
    assert!(html.contains("<span class=\"chord\">G</span>"));
    assert!(html.contains("<span class=\"chord\">D/F#</span>"));
    assert!(html.contains("<div class=\"section-label\">Verse 1</div>"));
}

#[test]
fn test_render_in_target_key() {
    let result = render_in_key(SOURCE, "A");
    assert!(result.is_ok(), "Should transpose and render");
    let html = result.unwrap();
    assert!(html.contains("Key: A"));
    assert!(html.contains("<span class=\"chord\">A</span>"));
    assert!(html.contains("<span class=\"chord\">D</span>"));
    assert!(html.contains("<span class=\"chord\">F#m</span>"));
    assert!(html.contains("<span class=\"chord\">E/G#</span>"));
    assert!(!html.contains("Key: G"));
}

#[test]
fn test_instrumental_runs_are_transposed() {
    let session = Session::load(SOURCE, Some("A")).unwrap();
    let chords: Vec<String> = session.song().chords().map(|c| c.symbol()).collect();
    assert_eq!(
        chords,
        vec!["A", "D", "F#m", "D", "A", "D", "A", "E/G#"]
    );
}

#[test]
fn test_session_scenario_from_the_chart_view() {
    let source = "{key: C}\nThis is a [C]ChordPro [G]example";
    let mut session = Session::load(source, Some("D")).unwrap();
    assert_eq!(session.original_key(), "C");
    assert_eq!(session.current_key(), "D");
    let chords: Vec<String> = session.song().chords().map(|c| c.symbol()).collect();
    assert_eq!(chords, vec!["D", "A"]);

    session.transpose_down().unwrap();
    session.transpose_down().unwrap();
    assert_eq!(session.current_key(), "C");
    let chords: Vec<String> = session.song().chords().map(|c| c.symbol()).collect();
    assert_eq!(chords, vec!["C", "G"]);
    assert_eq!(session.original_key(), "C");
}

#[test]
fn test_unknown_target_key_is_rejected() {
    let result = render_in_key(SOURCE, "Z");
    assert!(matches!(result, Err(ChartError::UnknownKey { .. })));
}

#[test]
fn test_unreadable_chart_is_rejected_whole() {
    let result = render_in_key("{key: C}\nla [C la", "D");
    assert!(matches!(result, Err(ChartError::UnreadableChart { .. })));
}

#[test]
fn test_chart_without_key_cannot_open_a_session() {
    let result = Session::load("[C]la [G]la", Some("D"));
    assert!(matches!(result, Err(ChartError::MissingKey)));
}
