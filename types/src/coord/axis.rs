use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::angle::{consts::MINUS_SIGN, AngleComponent};

use super::{AxisKind, Hemisphere};

/// The angle assigned to latitude or longitude.
///
/// The explicit hemisphere always defines the sign of the coordinate.
/// Without it, the sign of the angle is used.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Axis {
    kind: AxisKind,
    angle: AngleComponent,
    hemisphere: Option<Hemisphere>,
}

impl Axis {
    /// The axis is defined by its hemisphere letter
    pub const fn tagged(angle: AngleComponent, hemisphere: Hemisphere) -> Self {
        Self {
            kind: hemisphere.axis(),
            angle,
            hemisphere: Some(hemisphere),
        }
    }

    /// The axis is assigned without any hemisphere letter
    pub const fn untagged(kind: AxisKind, angle: AngleComponent) -> Self {
        Self {
            kind,
            angle,
            hemisphere: None,
        }
    }

    /// Replace the sign of the angle with the corresponding hemisphere letter.
    /// Does nothing if the hemisphere is already there.
    #[must_use]
    pub fn with_derived_hemisphere(self) -> Self {
        if self.hemisphere.is_some() {
            return self;
        }

        let hemisphere = Hemisphere::with_sign(self.kind, self.angle.is_negative());
        Self {
            hemisphere: Some(hemisphere),
            ..self
        }
    }

    /// Latitude or longitude
    pub const fn kind(&self) -> AxisKind {
        self.kind
    }

    /// The angle as it was typed
    pub const fn angle(&self) -> &AngleComponent {
        &self.angle
    }

    /// The explicit hemisphere
    pub const fn hemisphere(&self) -> Option<Hemisphere> {
        self.hemisphere
    }

    /// Is the coordinate south of the equator or west of the prime meridian
    pub fn is_negative(&self) -> bool {
        self.hemisphere
            .map_or_else(|| self.angle.is_negative(), Hemisphere::is_negative)
    }

    /// The signed value in decimal degrees
    pub fn decimal_degrees(&self) -> f64 {
        let magnitude = self.angle.magnitude();
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for Axis {
    /// `N 55°52.981′` with the hemisphere or `-55.9492°` without it
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(hemisphere) = self.hemisphere {
            write!(f, "{} ", hemisphere)?;
        } else if self.angle.is_negative() {
            write!(f, "{}", MINUS_SIGN)?;
        }

        write!(f, "{}", self.angle)
    }
}

#[cfg(test)]
mod tests {
    use crate::coord::{Pole::South, RotationalDirection::East};

    use super::*;

    fn angle(negative: bool, parts: &[&str]) -> AngleComponent {
        let parts = parts.iter().map(|p| p.parse().unwrap()).collect();
        AngleComponent::with_components(negative, parts).unwrap()
    }

    #[test]
    fn tagged_kind_from_hemisphere() {
        let axis = Axis::tagged(angle(false, &["55", "52.981"]), South.into());
        assert_eq!(axis.kind(), AxisKind::Latitude);
        assert!(axis.is_negative());
        assert_eq!(axis.to_string(), "S 55°52.981′");
        assert!((axis.decimal_degrees() + (55.0 + 52.981 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn untagged_negative() {
        let axis = Axis::untagged(AxisKind::Longitude, angle(true, &["36.82205"]));
        assert!(axis.is_negative());
        assert_eq!(axis.to_string(), "-36.82205°");
        assert!((axis.decimal_degrees() + 36.822_05).abs() < 1e-12);
    }

    #[test]
    fn untagged_negative_zero() {
        let axis = Axis::untagged(AxisKind::Latitude, angle(true, &["0"]));
        assert!(!axis.is_negative());
        assert_eq!(axis.to_string(), "0°");
    }

    #[test]
    fn derived_hemisphere() {
        let axis = Axis::untagged(AxisKind::Latitude, angle(true, &["1", "2"]));
        let axis = axis.with_derived_hemisphere();
        assert_eq!(axis.hemisphere(), Some(South.into()));
        assert_eq!(axis.to_string(), "S 1°2′");

        let axis = Axis::untagged(AxisKind::Longitude, angle(false, &["3", "4.9"]));
        let axis = axis.with_derived_hemisphere();
        assert_eq!(axis.hemisphere(), Some(East.into()));
        assert_eq!(axis.to_string(), "E 3°4.9′");
    }

    #[test]
    fn derived_hemisphere_keeps_explicit() {
        let axis = Axis::tagged(angle(false, &["1"]), East.into());
        assert_eq!(axis.clone().with_derived_hemisphere(), axis);
    }
}
