//! Bring the homoglyphs, decimal separators and junk of a human-typed query
//! to a stream of the canonical tokens.
//!
//! The numbers are kept as they were typed (only a decimal comma becomes a point),
//! so the normalization never changes any value.

use std::fmt;

use geoquery_types::{
    consts::{DECIMAL_POINT, MINUS_SIGN},
    Hemisphere, Mark,
};

use crate::glyphs::{self, Word};

/// The single meaningful piece of the query
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Decimal literal with an optional leading minus
    Number(String),
    /// Degree, minute or second sign
    Mark(Mark),
    /// One of `NSEW`
    Hemisphere(Hemisphere),
    /// Anything that cannot be a part of coordinates
    Unknown(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(literal) => write!(f, "{literal}"),
            Self::Mark(mark) => write!(f, "{mark}"),
            Self::Hemisphere(hemisphere) => write!(f, "{hemisphere}"),
            Self::Unknown(text) => write!(f, "{text}"),
        }
    }
}

/// The query as a sequence of the canonical tokens.
///
/// Its string form (`N 55° 52.981′ E 36° 59.540′`) is canonical:
/// normalizing it once more gives the same tokens and the same string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Normalized {
    tokens: Vec<Token>,
}

impl Normalized {
    /// All the tokens in the order of appearance
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// How many numbers are in the query
    pub fn numbers_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token, Token::Number(_)))
            .count()
    }

    /// Whether something in the query cannot be a part of coordinates
    pub fn has_unknown(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::Unknown(_)))
    }
}

impl FromIterator<Token> for Normalized {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Normalized {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev: Option<&Token> = None;
        for token in &self.tokens {
            // the mark sticks to its number
            let glued = matches!((prev, token), (Some(Token::Number(_)), Token::Mark(_)));
            if prev.is_some() && !glued {
                write!(f, " ")?;
            }
            write!(f, "{token}")?;
            prev = Some(token);
        }
        Ok(())
    }
}

/// Split the query into the canonical tokens
pub fn normalize(query: &str) -> Normalized {
    Lexer::new(query).collect()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    // the query has no decimal points between digits, so `55,2` is a number
    decimal_comma: bool,
    // `ш` or `д` which should be swallowed after a Cyrillic hemisphere letter
    pending_suffix: Option<char>,
}

impl Lexer {
    fn new(query: &str) -> Self {
        let chars: Vec<_> = query.chars().collect();
        // the dots of the abbreviations like `с.ш.` do not count
        let has_decimal_point = chars.windows(3).any(|w| {
            w[0].is_ascii_digit() && w[1] == DECIMAL_POINT && w[2].is_ascii_digit()
        });
        let decimal_comma = !has_decimal_point;
        Self {
            chars,
            pos: 0,
            decimal_comma,
            pending_suffix: None,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn prev(&self) -> Option<char> {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.chars.get(i))
            .copied()
    }

    fn prev_is_digit(&self) -> bool {
        self.prev().map_or(false, |ch| ch.is_ascii_digit())
    }

    fn next_is_digit(&self) -> bool {
        self.peek(1).map_or(false, |ch| ch.is_ascii_digit())
    }

    fn number(&mut self) -> Token {
        let mut literal = String::new();
        if self.peek(0) == Some(MINUS_SIGN) {
            literal.push(MINUS_SIGN);
            self.pos += 1;
        }

        while let Some(ch) = self.peek(0) {
            if ch.is_ascii_digit() || ch == DECIMAL_POINT {
                literal.push(ch);
            } else if ch == ',' && self.decimal_comma && self.next_is_digit() {
                literal.push(DECIMAL_POINT);
            } else {
                break;
            }
            self.pos += 1;
        }

        Token::Number(literal)
    }

    fn mark(&mut self, mark: Mark) -> Token {
        self.pos += 1;
        // `''` is the arc second typed with two apostrophes
        if mark == Mark::ArcMinute && self.peek(0).and_then(glyphs::mark) == Some(Mark::ArcMinute)
        {
            self.pos += 1;
            return Token::Mark(Mark::ArcSecond);
        }
        Token::Mark(mark)
    }

    /// `None` when the word is swallowed as a suffix
    fn word(&mut self) -> Option<Token> {
        let after_digit = self.prev_is_digit();
        let start = self.pos;
        while let Some(ch) = self.peek(0) {
            let is_letter = ch.is_alphabetic() && glyphs::mark(ch).is_none();
            if !is_letter && ch != DECIMAL_POINT {
                break;
            }
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();

        let pending_suffix = self.pending_suffix.take();
        match glyphs::word(&word, after_digit) {
            Word::Hemisphere { hemisphere, suffix } => {
                self.pending_suffix = suffix;
                Some(Token::Hemisphere(hemisphere))
            }
            Word::Suffix(suffix) if pending_suffix == Some(suffix) => None,
            Word::DegreeMark => Some(Token::Mark(Mark::Degree)),
            Word::Suffix(_) | Word::Other => Some(Token::Unknown(word)),
        }
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let ch = self.peek(0)?;

            if ch.is_alphabetic() && glyphs::mark(ch).is_none() {
                match self.word() {
                    Some(token) => return Some(token),
                    None => continue,
                }
            }

            let token = if ch.is_ascii_digit() {
                self.number()
            } else if ch == MINUS_SIGN {
                // the minus is only a sign right before the number: `55-37` or `- 55` are junk
                let prev_is_number = self.prev_is_digit() || self.prev() == Some(DECIMAL_POINT);
                if self.next_is_digit() && !prev_is_number {
                    self.number()
                } else {
                    self.pos += 1;
                    continue;
                }
            } else if glyphs::is_separator(ch) {
                self.pos += 1;
                continue;
            } else if let Some(mark) = glyphs::mark(ch) {
                self.mark(mark)
            } else {
                self.pos += 1;
                Token::Unknown(ch.to_string())
            };

            self.pending_suffix = None;
            return Some(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use geoquery_types::{Pole::North, RotationalDirection::West};

    use super::*;

    fn canonical(query: &str) -> String {
        normalize(query).to_string()
    }

    fn num(s: &str) -> Token {
        Token::Number(s.into())
    }

    #[test]
    fn decimal_degrees() {
        assert_eq!(
            normalize("55.94920 -36.82205").tokens(),
            [num("55.94920"), num("-36.82205")]
        );
    }

    #[test]
    fn marks_stick_to_numbers() {
        assert_eq!(
            canonical("N 55°52.981′ E 36°59.540′"),
            "N 55° 52.981′ E 36° 59.540′"
        );
    }

    #[test]
    fn hemispheres_are_separate_words() {
        assert_eq!(canonical("55.93382N36.93604E"), "55.93382 N 36.93604 E");
        assert_eq!(canonical("N55.93382,36.93604E"), "N 55.93382 36.93604 E");
    }

    #[test]
    fn ascii_marks() {
        assert_eq!(
            canonical(r#"43°20'13"С, 42°27'24"В"#),
            "43° 20′ 13″ N 42° 27′ 24″ E"
        );
    }

    #[test]
    fn two_apostrophes_are_seconds() {
        assert_eq!(
            canonical("57°57'11.65''C|33°16'8.37''В"),
            "57° 57′ 11.65″ N 33° 16′ 8.37″ E"
        );
    }

    #[test]
    fn degree_homoglyphs() {
        assert_eq!(canonical("N 43º 12 13"), "N 43° 12 13");
        assert_eq!(canonical("N 43о 12 13  E 58О 14 15"), "N 43° 12 13 E 58° 14 15");
        assert_eq!(canonical("N 43o 12 13  E 58O 14 15"), "N 43° 12 13 E 58° 14 15");
    }

    #[test]
    fn russian_hemispheres() {
        assert_eq!(canonical("55.93382 юш 36.93604 зд"), "55.93382 S 36.93604 W");
        assert_eq!(canonical("55.93382 ю ш 36.93604 з д"), "55.93382 S 36.93604 W");
        assert_eq!(
            canonical("55.93382 ю. ш. 36.93604 з. д."),
            "55.93382 S 36.93604 W"
        );
        assert_eq!(
            canonical("55.93382 с.ш. 36.93604 в.д."),
            "55.93382 N 36.93604 E"
        );
    }

    #[test]
    fn lowercase_hemispheres() {
        assert_eq!(
            normalize("s 55.93382 w 36.93604").tokens()[2],
            Token::Hemisphere(West.into())
        );
        assert_eq!(normalize("n1").tokens()[0], Token::Hemisphere(North.into()));
    }

    #[test]
    fn decimal_comma() {
        assert_eq!(canonical("55,2 37,6"), "55.2 37.6");
        assert_eq!(canonical("S 55°52,981′ E 36°59,540′"), "S 55° 52.981′ E 36° 59.540′");
    }

    #[test]
    fn decimal_comma_with_dotted_words() {
        assert_eq!(canonical("N. 55,5 E. 37,5"), "N 55.5 E 37.5");
        assert_eq!(
            canonical("55,93382 с.ш. 36,93604 в.д."),
            "55.93382 N 36.93604 E"
        );
        assert_eq!(canonical("55,5 ю. ш. 37,5 з. д."), "55.5 S 37.5 W");
    }

    #[test]
    fn comma_is_separator_when_points_present() {
        assert_eq!(canonical("55.2,37.6"), "55.2 37.6");
        assert_eq!(canonical("55.2,37,6"), "55.2 37 6");
    }

    #[test]
    fn comma_chain_is_a_single_number() {
        assert_eq!(canonical("55,2,37,6"), "55.2.37.6");
    }

    #[test]
    fn junk_dashes() {
        assert_eq!(canonical("55.94920-36.82205"), "55.94920 36.82205");
        assert_eq!(canonical("- 55.94920- 36.82205-"), "55.94920 36.82205");
        assert_eq!(canonical("-55° -37°"), "-55° -37°");
    }

    #[test]
    fn whitespace_collapsed() {
        assert_eq!(canonical("  55 \t 37  "), "55 37");
    }

    #[test]
    fn unknown_kept() {
        let normalized = normalize("8 мая 122/43");
        assert!(normalized.has_unknown());
        assert_eq!(normalized.to_string(), "8 мая 122 / 43");
        assert_eq!(normalized.numbers_count(), 3);

        assert!(normalize("55a37").has_unknown());
        assert!(normalize("wee").has_unknown());
        assert!(!normalize("N 1 E 2").has_unknown());
    }

    #[test]
    fn detached_suffix_without_hemisphere_is_unknown() {
        assert!(normalize("55 ш 37").has_unknown());
        assert!(normalize("N ш 55 E 37").has_unknown());
    }

    #[test]
    fn empty() {
        assert!(normalize("").tokens().is_empty());
        assert_eq!(canonical(" - , | "), "");
    }

    #[test]
    fn idempotent() {
        for query in [
            "55 37",
            "N 55°52.981′ E 36°59.540′",
            "55.93382 ю. ш. 36.93604 з. д.",
            "57°57'11.65''C|33°16'8.37''В",
            "- 55.94920- 36.82205-",
            "55,2 37,6",
            "55,2,37,6",
            "N 43о 12 13  E 58О 14 15",
            "8 мая 122/43",
            "a55 37",
            "55 ш 37",
            "-0 -0",
            "N° 5",
        ] {
            let once = normalize(query);
            let twice = normalize(&once.to_string());
            assert_eq!(once, twice, "{query:?}");
            assert_eq!(once.to_string(), twice.to_string(), "{query:?}");
        }
    }
}
