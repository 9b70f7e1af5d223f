//! FILENAME: core/parser/src/cursor.rs
//! PURPOSE: Character cursor over a normalized expression string.
//! CONTEXT: The evaluator works directly on characters with one char of
//! lookahead. There is no token stream; the cursor is the only scan state
//! and it is owned by the Evaluator for the duration of a parse.

/// Display glyphs accepted as aliases for the canonical operators.
const GLYPH_ALIASES: [(char, char); 2] = [('×', '*'), ('÷', '/')];

/// Rewrites display glyphs to canonical operators and strips spaces.
/// Only the space character is removed; any other whitespace is kept and
/// later rejected as an unknown character.
pub fn normalize(expression: &str) -> String {
    expression
        .chars()
        .filter(|&ch| ch != ' ')
        .map(|ch| {
            GLYPH_ALIASES
                .iter()
                .find(|(glyph, _)| *glyph == ch)
                .map(|(_, canonical)| *canonical)
                .unwrap_or(ch)
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Cursor {
    chars: Vec<char>,
    pos: usize,
    current: Option<char>,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        let chars: Vec<char> = input.chars().collect();
        let current = chars.first().copied();
        Cursor {
            chars,
            pos: 0,
            current,
        }
    }

    /// The lookahead character, or None at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn advance(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
        self.current = self.chars.get(self.pos).copied();
    }

    /// Consumes `expected` if it is the lookahead. Input is expected to be
    /// normalized already, so no whitespace is skipped here.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.current == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` only if the remaining input starts with all of it.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let matches = keyword
            .chars()
            .enumerate()
            .all(|(offset, ch)| self.chars.get(self.pos + offset) == Some(&ch));

        if matches {
            for _ in keyword.chars() {
                self.advance();
            }
        }
        matches
    }

    /// Consumes the maximal run of ASCII digits and dots and returns it.
    pub fn take_number(&mut self) -> String {
        let mut literal = String::new();
        while let Some(ch) = self.current {
            if !(ch.is_ascii_digit() || ch == '.') {
                break;
            }
            literal.push(ch);
            self.advance();
        }
        literal
    }
}
