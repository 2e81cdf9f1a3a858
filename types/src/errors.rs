use std::{error::Error, fmt};

use crate::{angle::ParseNumberError, enum_trivial_from_impl};

/// The query does not match any of the accepted shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralMismatch {
    /// A word which is neither a number, nor a mark, nor a hemisphere
    UnexpectedToken(String),
    /// Number is malformed (e.g. has two decimal points)
    Literal(ParseNumberError),
    /// A degree/minute/second sign does not follow any number
    DanglingMark,
    /// A degree/minute/second sign stands at the wrong position
    MisplacedMark,
    /// The hemisphere letters cannot split the numbers into two axes
    NoShape,
    /// Only one of the axes has the hemisphere
    PartialHemisphere,
    /// More than two hemisphere letters
    TooManyHemispheres,
    /// Both hemisphere letters belong to the same axis (N and S, E and W)
    SameAxisHemispheres,
    /// Numbers cannot be split equally between two axes
    OddComponentCount,
    /// The axis has no numbers at all
    EmptyAxis,
    /// More than degrees, minutes and seconds
    TooManyComponents,
    /// The axes are written with the different number of components
    PrecisionMismatch,
    /// The minus sign is only allowed before the degrees
    MisplacedSign,
    /// The minus sign along with the hemisphere letter
    SignedHemisphere,
    /// Only the last component can have a decimal fraction
    FractionalComponent,
}

enum_trivial_from_impl!(ParseNumberError => StructuralMismatch:Literal);

impl fmt::Display for StructuralMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken(token) => write!(f, "unexpected token {token:?}"),
            Self::Literal(inner) => write!(f, "{inner}"),
            Self::DanglingMark => write!(f, "the angle sign does not follow a number"),
            Self::MisplacedMark => write!(f, "the angle sign does not match its position"),
            Self::NoShape => write!(f, "cannot find two axes around the hemispheres"),
            Self::PartialHemisphere => write!(f, "only one axis has a hemisphere"),
            Self::TooManyHemispheres => write!(f, "too many hemispheres"),
            Self::SameAxisHemispheres => write!(f, "both hemispheres belong to the same axis"),
            Self::OddComponentCount => write!(f, "cannot split the numbers into two axes"),
            Self::EmptyAxis => write!(f, "the axis has no value"),
            Self::TooManyComponents => {
                write!(f, "only degrees, minutes and seconds are allowed")
            }
            Self::PrecisionMismatch => {
                write!(f, "the axes have different number of components")
            }
            Self::MisplacedSign => write!(f, "only the degrees can be negative"),
            Self::SignedHemisphere => write!(f, "negative value along with the hemisphere"),
            Self::FractionalComponent => write!(f, "only the last component can be fractional"),
        }
    }
}

impl Error for StructuralMismatch {}

/// The value of the angle is not valid for its axis
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutOfRange {
    Latitude,            // |lat| > 90
    Longitude,           // |lon| > 180
    ArcMinutes,          // min >= 60
    ArcSeconds,          // sec >= 60
    FractionalComponent, // fraction before the last component
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Latitude => "Only latitudes up to 90 degrees are allowed",
            Self::Longitude => "Only longitudes up to 180 degrees are allowed",
            Self::ArcMinutes => "Angle's arc minute value not in range [0..60)",
            Self::ArcSeconds => "Angle's arc second value not in range [0..60)",
            Self::FractionalComponent => "Fraction is only allowed for the last angle's component",
        };

        write!(f, "{msg}")
    }
}

impl Error for OutOfRange {}

/// Why the query is not a valid location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCoordinatesError {
    /// No accepted shape matches the query
    Structural(StructuralMismatch),
    /// The only interpretation has a value out of its range
    Range(OutOfRange),
    /// Every ordering of the axes without hemispheres is invalid
    AmbiguityExhausted,
}

enum_trivial_from_impl!(StructuralMismatch => ParseCoordinatesError:Structural);
enum_trivial_from_impl!(OutOfRange => ParseCoordinatesError:Range);

impl From<ParseNumberError> for ParseCoordinatesError {
    fn from(err: ParseNumberError) -> Self {
        Self::Structural(err.into())
    }
}

impl fmt::Display for ParseCoordinatesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot parse coordinates: ")?;
        match self {
            Self::Structural(inner) => write!(f, "{inner}"),
            Self::Range(inner) => write!(f, "{inner}"),
            Self::AmbiguityExhausted => {
                write!(f, "neither order of latitude and longitude is valid")
            }
        }
    }
}

impl Error for ParseCoordinatesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Structural(inner) => Some(inner),
            Self::Range(inner) => Some(inner),
            Self::AmbiguityExhausted => None,
        }
    }
}
