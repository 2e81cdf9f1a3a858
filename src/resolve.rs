//! Assign the matched axes to latitude and longitude

use geoquery_types::{
    Axis, AxisKind, Candidates, CoordinatePair, Precision, StructuralMismatch,
};
use tracing::debug;

use crate::grammar::{RawAxis, ShapeMatch};

fn tagged(first: RawAxis, second: RawAxis) -> Result<CoordinatePair, StructuralMismatch> {
    let (Some(first_hemi), Some(second_hemi)) = (first.hemisphere, second.hemisphere) else {
        return Err(StructuralMismatch::PartialHemisphere);
    };

    let first = Axis::tagged(first.angle, first_hemi);
    let second = Axis::tagged(second.angle, second_hemi);
    let (lat, lon) = match first.kind() {
        AxisKind::Latitude => (first, second),
        AxisKind::Longitude => (second, first),
    };

    CoordinatePair::new(lat, lon).ok_or(StructuralMismatch::SameAxisHemispheres)
}

/// Both orders: as typed and swapped.
/// The order is dropped if its latitude is beyond the pole.
fn untagged(first: RawAxis, second: RawAxis, precision: Precision) -> Candidates {
    let orders = [
        (first.clone(), second.clone()),
        (second, first),
    ];

    orders
        .into_iter()
        .filter(|(lat, _)| {
            let fits = lat.angle.magnitude() <= AxisKind::Latitude.max_degrees();
            if !fits {
                debug!(latitude = %lat.angle, "dropping the order with too big latitude");
            }
            fits
        })
        .filter_map(|(lat, lon)| {
            let lat = Axis::untagged(AxisKind::Latitude, lat.angle);
            let lon = Axis::untagged(AxisKind::Longitude, lon.angle);
            CoordinatePair::new(lat, lon)
        })
        .map(|pair| {
            // only the decimal degrees are shown with the sign
            if precision == Precision::Degrees {
                pair
            } else {
                pair.map_axes(Axis::with_derived_hemisphere)
            }
        })
        .collect()
}

/// Produce the candidates in the order they should be shown.
///
/// With the hemispheres there is exactly one candidate.
/// Without them, both orders of the axes are possible.
pub(crate) fn resolve(matched: ShapeMatch) -> Result<Candidates, StructuralMismatch> {
    let ShapeMatch {
        shape,
        first,
        second,
    } = matched;

    match (first.hemisphere.is_some(), second.hemisphere.is_some()) {
        (true, true) => {
            let pair = tagged(first, second)?;
            Ok(std::iter::once(pair).collect())
        }
        (false, false) => Ok(untagged(first, second, shape.precision)),
        _ => Err(StructuralMismatch::PartialHemisphere),
    }
}
