//! Block-glyph rendering for the big countdown digits.

/// Rows in every glyph.
pub const GLYPH_ROWS: usize = 5;

/// 5-row block glyph for a digit or the colon separator.
fn glyph(c: char) -> Option<[&'static str; GLYPH_ROWS]> {
    match c {
        '0' => Some([
            "█████",
            "█   █",
            "█   █",
            "█   █",
            "█████",
        ]),
        '1' => Some([
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
            "  █  ",
        ]),
        '2' => Some([
            "█████",
            "    █",
            "█████",
            "█    ",
            "█████",
        ]),
        '3' => Some([
            "█████",
            "    █",
            "█████",
            "    █",
            "█████",
        ]),
        '4' => Some([
            "█   █",
            "█   █",
            "█████",
            "    █",
            "    █",
        ]),
        '5' => Some([
            "█████",
            "█    ",
            "█████",
            "    █",
            "█████",
        ]),
        '6' => Some([
            "█████",
            "█    ",
            "█████",
            "█   █",
            "█████",
        ]),
        '7' => Some([
            "█████",
            "    █",
            "    █",
            "    █",
            "    █",
        ]),
        '8' => Some([
            "█████",
            "█   █",
            "█████",
            "█   █",
            "█████",
        ]),
        '9' => Some([
            "█████",
            "█   █",
            "█████",
            "    █",
            "█████",
        ]),
        ':' => Some([
            "     ",
            "  █  ",
            "     ",
            "  █  ",
            "     ",
        ]),
        _ => None,
    }
}

/// Render text as block-glyph rows; unknown characters are skipped.
pub fn big_text(text: &str) -> Vec<String> {
    let mut rows = vec![String::new(); GLYPH_ROWS];

    for c in text.chars() {
        let Some(glyph) = glyph(c) else { continue };
        for (i, row) in rows.iter_mut().enumerate() {
            if !row.is_empty() {
                row.push_str("  "); // spacing between characters
            }
            row.push_str(glyph[i]);
        }
    }

    rows
}

/// Render a countdown as `MM:SS` block-glyph rows.
pub fn big_time(minutes: u64, seconds: u64) -> Vec<String> {
    big_text(&format!("{minutes:02}:{seconds:02}"))
}
