//! Unsigned decimal literal which keeps the precision it was typed with.
//!
//! The value is never rounded: `59.540` is shown as `59.54`
//! and `02.95` as `2.95`, but `36.82205` stays exactly the same.

use std::{error::Error, fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::StripChar;

use super::consts::DECIMAL_POINT;

lazy_static! {
    static ref RE_LITERAL: Regex = Regex::new(
        r"(?x)
        ^
        (?P<whole>\d+)              # mandatory whole part
        (?:\.(?P<fraction>\d+))?    # optional fraction after the decimal point
        $
        "
    )
    .expect("Decimal literal regex is valid");
}

/// Unsigned decimal number stored as its canonical text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DecimalNumber {
    whole: String,
    fraction: String,
    has_point: bool,
    value: f64,
}

impl DecimalNumber {
    /// The numeric value of the literal
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether the literal was written with the decimal point,
    /// even if the fraction consists of zeros only (`1.0`)
    pub const fn is_fractional(&self) -> bool {
        self.has_point
    }

    /// Is the value exactly zero
    pub fn is_zero(&self) -> bool {
        self.whole == "0" && self.fraction.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The text is not a plain decimal number
pub struct ParseNumberError {
    literal: String,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a decimal number", self.literal)
    }
}

impl Error for ParseNumberError {}

impl FromStr for DecimalNumber {
    type Err = ParseNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseNumberError {
            literal: s.to_string(),
        };

        let caps = RE_LITERAL.captures(s).ok_or_else(err)?;
        let whole = caps.name("whole").map_or("", |m| m.as_str());
        let fraction = caps.name("fraction").map(|m| m.as_str());

        // digits only, so always a valid float
        let value = s.parse().map_err(|_| err())?;

        Ok(Self {
            whole: whole.trim_start_char_keep_one('0'),
            fraction: fraction.map_or_else(String::new, |fr| fr.trim_end_char('0')),
            has_point: fraction.is_some(),
            value,
        })
    }
}

impl fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.whole)?;
        if !self.fraction.is_empty() {
            write!(f, "{}{}", DECIMAL_POINT, self.fraction)?;
        }
        Ok(())
    }
}
