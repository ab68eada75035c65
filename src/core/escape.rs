//! Lyrics escaping
//!
//! Turns raw lyrics into the body of a single-quoted string literal by
//! applying a fixed, ordered rule table.

/// A single substitution applied to every occurrence of `from`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeRule {
    pub from: char,
    pub to: &'static str,
}

/// Substitutions in application order. Each rule sees the output of the
/// previous one.
pub const ESCAPE_RULES: [EscapeRule; 5] = [
    EscapeRule {
        from: '\n',
        to: "\\n",
    },
    EscapeRule {
        from: '"',
        to: "\\\"",
    },
    // FOUR-PER-EM SPACE
    EscapeRule {
        from: '\u{2005}',
        to: " ",
    },
    // MEDIUM MATHEMATICAL SPACE
    EscapeRule {
        from: '\u{205F}',
        to: " ",
    },
    // CYRILLIC SMALL LETTER IE
    EscapeRule {
        from: '\u{0435}',
        to: "e",
    },
];

/// Apply every rule of [`ESCAPE_RULES`] in order
pub fn escape_lyrics(text: &str) -> String {
    ESCAPE_RULES
        .iter()
        .fold(text.to_string(), |acc, rule| {
            if acc.contains(rule.from) {
                acc.replace(rule.from, rule.to)
            } else {
                acc
            }
        })
}

/// Escape `text` and wrap it as `lyrics: '<escaped>',`
pub fn lrc_to_literal(text: &str) -> String {
    format!("lyrics: '{}',", escape_lyrics(text))
}
