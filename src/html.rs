use crate::song::{Line, Segment, Song};

/// Render a song as an HTML chart fragment.
///
/// The fragment is meant to be injected into a surrounding view or print
/// flow; it carries CSS class hooks and no styling of its own. Chords are
/// emitted inline as `<span class="chord">` ahead of the lyric text they
/// sit over. All chart text is escaped.
pub fn to_html(song: &Song) -> String {
    let mut html = String::new();

    for line in &song.lines {
        match line {
            Line::Directive { name, value } => directive_to_html(&mut html, name, value),
            Line::Lyric { segments } => {
                html.push_str("<p class=\"chart-line\">");
                for segment in segments {
                    match segment {
                        Segment::Text { text } => html.push_str(&escape_html(text)),
                        Segment::Chord { chord } => {
                            html.push_str("<span class=\"chord\">");
                            html.push_str(&escape_html(&chord.symbol()));
                            html.push_str("</span>");
                        }
                    }
                }
                html.push_str("</p>\n");
            }
            // source comments never reach the chart
            Line::Comment { .. } => {}
            Line::Empty => html.push_str("<br/>\n"),
        }
    }

    html
}

fn directive_to_html(html: &mut String, name: &str, value: &str) {
    match name {
        "title" => {
            html.push_str("<h1 class=\"song-title\">");
            html.push_str(&escape_html(value));
            html.push_str("</h1>\n");
        }
        "artist" | "subtitle" => {
            html.push_str("<h2 class=\"song-artist\">");
            html.push_str(&escape_html(value));
            html.push_str("</h2>\n");
        }
        "key" => {
            html.push_str("<p class=\"song-key\">Key: ");
            html.push_str(&escape_html(value));
            html.push_str("</p>\n");
        }
        "c" | "comment" => {
            html.push_str("<p class=\"chart-comment\">");
            html.push_str(&escape_html(value));
            html.push_str("</p>\n");
        }
        _ if name.starts_with("start_of_") => {
            html.push_str("<div class=\"section-label\">");
            html.push_str(&escape_html(value));
            html.push_str("</div>\n");
        }
        // end_of_* markers and unknown directives have no visual form
        _ => {}
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
