use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{bool_enum, enum_trivial_from_impl};

use super::AxisKind;

bool_enum!(Pole: North and South; displayed as 'N':'S');
bool_enum!(RotationalDirection: East and West; displayed as 'E':'W');

/// The direction letter defining both the axis and the sign of a coordinate
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Hemisphere {
    /// N or S, latitude
    Pole(Pole),
    /// E or W, longitude
    Direction(RotationalDirection),
}

impl Hemisphere {
    /// The axis this hemisphere belongs to
    pub const fn axis(self) -> AxisKind {
        match self {
            Self::Pole(_) => AxisKind::Latitude,
            Self::Direction(_) => AxisKind::Longitude,
        }
    }

    /// South and west make the coordinate negative
    pub const fn is_negative(self) -> bool {
        match self {
            Self::Pole(pole) => pole.is_negative(),
            Self::Direction(dir) => dir.is_negative(),
        }
    }

    /// The hemisphere for the axis and the sign of its value
    pub fn with_sign(axis: AxisKind, is_negative: bool) -> Self {
        let is_positive = !is_negative;
        match axis {
            AxisKind::Latitude => Self::Pole(is_positive.into()),
            AxisKind::Longitude => Self::Direction(is_positive.into()),
        }
    }
}

enum_trivial_from_impl!(Pole => Hemisphere:Pole);
enum_trivial_from_impl!(RotationalDirection => Hemisphere:Direction);

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pole(pole) => write!(f, "{pole}"),
            Self::Direction(dir) => write!(f, "{dir}"),
        }
    }
}
