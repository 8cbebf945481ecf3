pub mod error;
pub mod html;
pub mod interval;
pub mod key;
pub mod parser;
pub mod session;
pub mod song;
pub mod transpose;
pub mod validate;

pub use error::ChartError;
pub use html::to_html;
pub use interval::resolve_step;
pub use parser::parse;
pub use session::Session;
pub use song::{ChordToken, Line, Segment, Song};
pub use transpose::{transpose, Direction};

/// Parse a chart and render it in its authored key.
/// This is the main entry point for plain chart views.
pub fn render(source: &str) -> Result<String, ChartError> {
    let song = parse(source)?;
    Ok(to_html(&song))
}

/// Parse a chart, transpose it into `target_key`, and render it.
pub fn render_in_key(source: &str, target_key: &str) -> Result<String, ChartError> {
    let session = Session::load(source, Some(target_key))?;
    Ok(to_html(session.song()))
}
