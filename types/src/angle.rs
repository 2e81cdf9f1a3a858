//! An angle as typed by a human: degrees with optional arc minutes and seconds

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::StructuralMismatch;

use self::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEGREE_SIGN, MINUTES_IN_DEGREE, SECONDS_IN_MINUTE,
};
pub use self::number::{DecimalNumber, ParseNumberError};

pub mod consts;
mod number;

/// The sign following a number to mark its position in the angle
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mark {
    /// `°`
    Degree,
    /// `′`
    ArcMinute,
    /// `″`
    ArcSecond,
}

impl Mark {
    /// Canonical glyph of the mark
    pub const fn sign(self) -> char {
        match self {
            Self::Degree => DEGREE_SIGN,
            Self::ArcMinute => ARC_MINUTE_SIGN,
            Self::ArcSecond => ARC_SECOND_SIGN,
        }
    }

    /// The mark which is allowed after the component with the given (zero-based) index
    pub const fn for_position(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Degree),
            1 => Some(Self::ArcMinute),
            2 => Some(Self::ArcSecond),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sign())
    }
}

/// How many components an angle was written with
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Precision {
    /// `55.9492°`
    Degrees,
    /// `55°52.981′`
    DegreesMinutes,
    /// `55°49′2.95″`
    DegreesMinutesSeconds,
}

impl Precision {
    /// Find the precision by the number of the components
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::Degrees),
            2 => Some(Self::DegreesMinutes),
            3 => Some(Self::DegreesMinutesSeconds),
            _ => None,
        }
    }
}

/// Degrees, optional minutes and optional seconds with a sign.
///
/// The seconds could only be present along with the minutes.
/// The sign is only meaningful when the axis has no hemisphere.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AngleComponent {
    negative: bool,
    degrees: DecimalNumber,
    minutes: Option<DecimalNumber>,
    seconds: Option<DecimalNumber>,
}

impl AngleComponent {
    /// Construct the angle from the components in the DMS order.
    ///
    /// # Errors
    /// Nothing or more than three components provided.
    pub fn with_components(
        negative: bool,
        components: Vec<DecimalNumber>,
    ) -> Result<Self, StructuralMismatch> {
        let mut components = components.into_iter();
        let degrees = components.next().ok_or(StructuralMismatch::EmptyAxis)?;
        let minutes = components.next();
        let seconds = components.next();
        if components.next().is_some() {
            return Err(StructuralMismatch::TooManyComponents);
        }

        Ok(Self {
            negative,
            degrees,
            minutes,
            seconds,
        })
    }

    /// The form of the angle
    pub const fn precision(&self) -> Precision {
        match (&self.minutes, &self.seconds) {
            (None, _) => Precision::Degrees,
            (Some(_), None) => Precision::DegreesMinutes,
            (Some(_), Some(_)) => Precision::DegreesMinutesSeconds,
        }
    }

    /// The degrees component
    pub const fn degrees(&self) -> &DecimalNumber {
        &self.degrees
    }

    /// The arc minutes component
    pub const fn minutes(&self) -> Option<&DecimalNumber> {
        self.minutes.as_ref()
    }

    /// The arc seconds component
    pub const fn seconds(&self) -> Option<&DecimalNumber> {
        self.seconds.as_ref()
    }

    /// All the present components in the DMS order
    pub fn components(&self) -> impl Iterator<Item = &DecimalNumber> {
        std::iter::once(&self.degrees)
            .chain(self.minutes.as_ref())
            .chain(self.seconds.as_ref())
    }

    /// Whether the angle was typed with the minus sign.
    /// The negative zero is not negative.
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// No angle
    pub fn is_zero(&self) -> bool {
        self.components().all(DecimalNumber::is_zero)
    }

    /// Unsigned value of the angle in decimal degrees
    pub fn magnitude(&self) -> f64 {
        let minutes = self.minutes.as_ref().map_or(0.0, DecimalNumber::value);
        let seconds = self.seconds.as_ref().map_or(0.0, DecimalNumber::value);

        let min_in_deg = f64::from(MINUTES_IN_DEGREE);
        let sec_in_deg = min_in_deg * f64::from(SECONDS_IN_MINUTE);
        self.degrees.value() + minutes / min_in_deg + seconds / sec_in_deg
    }
}

impl fmt::Display for AngleComponent {
    /// The unsigned angle: `D°[M′[S″]]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degrees, DEGREE_SIGN)?;
        if let Some(minutes) = &self.minutes {
            write!(f, "{}{}", minutes, ARC_MINUTE_SIGN)?;
        }
        if let Some(seconds) = &self.seconds {
            write!(f, "{}{}", seconds, ARC_SECOND_SIGN)?;
        }
        Ok(())
    }
}
