#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::consts::{MAX_LATITUDE, MAX_LONGITUDE};

pub use self::{
    axis::Axis,
    hemisphere::{Hemisphere, Pole, RotationalDirection},
    pair::{Candidates, CoordinatePair},
};

mod axis;
mod hemisphere;
mod pair;

/// Which of the two coordinates the angle represents
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AxisKind {
    /// Along the meridian: north-south
    Latitude,
    /// Along the parallel: east-west
    Longitude,
}

impl AxisKind {
    /// The largest valid magnitude of the axis, degrees
    pub fn max_degrees(self) -> f64 {
        let max = match self {
            Self::Latitude => MAX_LATITUDE,
            Self::Longitude => MAX_LONGITUDE,
        };
        f64::from(max)
    }
}
