//! Range checks of the resolved candidates

use geoquery_types::{
    consts::{MINUTES_IN_DEGREE, SECONDS_IN_MINUTE},
    Axis, AxisKind, Candidates, CoordinatePair, DecimalNumber, OutOfRange,
    ParseCoordinatesError,
};
use tracing::debug;

use crate::grammar::HemisphereLayout;

fn check_sexagesimal(
    value: Option<&DecimalNumber>,
    limit: u8,
    err: OutOfRange,
) -> Result<(), OutOfRange> {
    match value {
        Some(value) if value.value() >= f64::from(limit) => Err(err),
        _ => Ok(()),
    }
}

/// Validate a single axis:
/// - minutes and seconds are in `[0..60)`;
/// - only the last component has a fraction;
/// - the whole angle is not beyond its axis bound.
pub(crate) fn validate_axis(axis: &Axis) -> Result<(), OutOfRange> {
    let angle = axis.angle();

    let count = angle.components().count();
    if angle
        .components()
        .take(count.saturating_sub(1))
        .any(DecimalNumber::is_fractional)
    {
        return Err(OutOfRange::FractionalComponent);
    }

    check_sexagesimal(angle.minutes(), MINUTES_IN_DEGREE, OutOfRange::ArcMinutes)?;
    check_sexagesimal(angle.seconds(), SECONDS_IN_MINUTE, OutOfRange::ArcSeconds)?;

    if angle.magnitude() > axis.kind().max_degrees() {
        return Err(match axis.kind() {
            AxisKind::Latitude => OutOfRange::Latitude,
            AxisKind::Longitude => OutOfRange::Longitude,
        });
    }

    Ok(())
}

pub(crate) fn validate_pair(pair: &CoordinatePair) -> Result<(), OutOfRange> {
    validate_axis(pair.lat())?;
    validate_axis(pair.lon())
}

/// Keep only the valid candidates.
///
/// # Errors
/// No candidate survived: the range error of the only candidate
/// for the query with hemispheres, or the exhausted ambiguity otherwise.
pub(crate) fn validate(
    mut candidates: Candidates,
    layout: HemisphereLayout,
) -> Result<Candidates, ParseCoordinatesError> {
    let mut last_err = None;
    candidates.retain(|pair| match validate_pair(pair) {
        Ok(()) => true,
        Err(err) => {
            debug!(candidate = %pair, %err, "invalid candidate");
            last_err = Some(err);
            false
        }
    });

    if !candidates.is_empty() {
        return Ok(candidates);
    }

    match (layout.is_tagged(), last_err) {
        (true, Some(err)) => Err(err.into()),
        _ => Err(ParseCoordinatesError::AmbiguityExhausted),
    }
}
