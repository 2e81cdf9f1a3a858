//! Read-only tables of the homoglyphs used to type the coordinates

use std::collections::HashMap;

use geoquery_types::{Hemisphere, Mark, Pole, RotationalDirection};
use lazy_static::lazy_static;

/// Characters which only split the numbers apart
const SEPARATORS: [char; 3] = [',', ';', '|'];

/// Letters looking like the degree sign when typed right after a number
const DEGREE_LETTERS: [char; 4] = ['o', 'O', 'о', 'О'];

// the second letter of the Russian abbreviations: `с.ш.`, `ю.ш.`, `в.д.`, `з.д.`
const LATITUDE_SUFFIX: char = 'ш';
const LONGITUDE_SUFFIX: char = 'д';

lazy_static! {
    static ref MARKS: HashMap<char, Mark> = [
        ('°', Mark::Degree),
        ('º', Mark::Degree),
        ('\'', Mark::ArcMinute),
        ('′', Mark::ArcMinute),
        ('"', Mark::ArcSecond),
        ('″', Mark::ArcSecond),
    ]
    .into_iter()
    .collect();

    /// The lowercase words without dots and the optional detached suffix expected after them
    static ref HEMISPHERE_WORDS: HashMap<&'static str, (Hemisphere, Option<char>)> = {
        use Pole::{North, South};
        use RotationalDirection::{East, West};

        let north = Hemisphere::from(North);
        let south = Hemisphere::from(South);
        let east = Hemisphere::from(East);
        let west = Hemisphere::from(West);

        [
            ("n", (north, None)),
            ("s", (south, None)),
            ("e", (east, None)),
            ("w", (west, None)),
            // Cyrillic
            ("с", (north, Some(LATITUDE_SUFFIX))),
            ("сш", (north, None)),
            ("ю", (south, Some(LATITUDE_SUFFIX))),
            ("юш", (south, None)),
            ("в", (east, Some(LONGITUDE_SUFFIX))),
            ("вд", (east, None)),
            ("з", (west, Some(LONGITUDE_SUFFIX))),
            ("зд", (west, None)),
            // Latin C typed instead of the Cyrillic С
            ("c", (north, Some(LATITUDE_SUFFIX))),
            ("cш", (north, None)),
        ]
        .into_iter()
        .collect()
    };
}

/// What a run of letters means
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Word {
    Hemisphere {
        hemisphere: Hemisphere,
        suffix: Option<char>,
    },
    /// `ш` or `д` detached from its hemisphere letter
    Suffix(char),
    DegreeMark,
    Other,
}

/// The canonical mark for the given glyph
pub(crate) fn mark(ch: char) -> Option<Mark> {
    MARKS.get(&ch).copied()
}

pub(crate) fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || SEPARATORS.contains(&ch)
}

/// Classify the run of letters (possibly with the dots, like `с.ш.`).
/// The `after_digit` means there is no space between the word and the previous number.
pub(crate) fn word(word: &str, after_digit: bool) -> Word {
    let mut chars = word.chars();
    if let (Some(single), None) = (chars.next(), chars.next()) {
        if after_digit && DEGREE_LETTERS.contains(&single) {
            return Word::DegreeMark;
        }
    }

    let key: String = word
        .chars()
        .filter(|&ch| ch != '.')
        .flat_map(char::to_lowercase)
        .collect();

    if let Some(&(hemisphere, suffix)) = HEMISPHERE_WORDS.get(key.as_str()) {
        return Word::Hemisphere { hemisphere, suffix };
    }

    let mut key_chars = key.chars();
    match (key_chars.next(), key_chars.next()) {
        (Some(ch), None) if ch == LATITUDE_SUFFIX || ch == LONGITUDE_SUFFIX => Word::Suffix(ch),
        _ => Word::Other,
    }
}
