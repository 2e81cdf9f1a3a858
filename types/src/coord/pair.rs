use std::{fmt, slice, vec};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Axis, AxisKind};

/// The point represented as the pair (latitude, longitude)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoordinatePair {
    lat: Axis,
    lon: Axis,
}

impl CoordinatePair {
    /// Construct a pair from the given latitude and longitude.
    ///
    /// Returns `None` if the axes do not have the matching kinds.
    pub fn new(lat: Axis, lon: Axis) -> Option<Self> {
        if lat.kind() != AxisKind::Latitude || lon.kind() != AxisKind::Longitude {
            return None;
        }

        Some(Self { lat, lon })
    }

    /// The latitude axis
    pub const fn lat(&self) -> &Axis {
        &self.lat
    }

    /// The longitude axis
    pub const fn lon(&self) -> &Axis {
        &self.lon
    }

    /// Signed latitude in decimal degrees, positive to the north
    pub fn latitude(&self) -> f64 {
        self.lat.decimal_degrees()
    }

    /// Signed longitude in decimal degrees, positive to the east
    pub fn longitude(&self) -> f64 {
        self.lon.decimal_degrees()
    }

    /// Transform both axes at once
    #[must_use]
    pub fn map_axes(self, f: impl Fn(Axis) -> Axis) -> Self {
        Self {
            lat: f(self.lat),
            lon: f(self.lon),
        }
    }
}

impl fmt::Display for CoordinatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lat, self.lon)
    }
}

/// Ordered interpretations of a single query.
///
/// The order of the insertion is preserved and the duplicates are ignored,
/// so `55 55` produces a single candidate rather than the same one twice.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidates(Vec<CoordinatePair>);

impl Candidates {
    /// No candidates
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append the candidate unless the same location is already present.
    /// Two pairs are the same if their titles match (`-0` and `0` are the same).
    pub fn push(&mut self, pair: CoordinatePair) {
        let title = pair.to_string();
        if self.iter().all(|present| present.to_string() != title) {
            self.0.push(pair);
        }
    }

    /// Keep only the candidates satisfying the predicate
    pub fn retain(&mut self, f: impl FnMut(&CoordinatePair) -> bool) {
        self.0.retain(f);
    }

    /// The number of candidates
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No interpretation survived
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in the order of generation
    pub fn iter(&self) -> slice::Iter<'_, CoordinatePair> {
        self.0.iter()
    }

    /// Canonical titles in the order of generation
    pub fn titles(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl FromIterator<CoordinatePair> for Candidates {
    fn from_iter<I: IntoIterator<Item = CoordinatePair>>(iter: I) -> Self {
        let mut candidates = Self::new();
        for pair in iter {
            candidates.push(pair);
        }
        candidates
    }
}

impl IntoIterator for Candidates {
    type Item = CoordinatePair;
    type IntoIter = vec::IntoIter<CoordinatePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Candidates {
    type Item = &'a CoordinatePair;
    type IntoIter = slice::Iter<'a, CoordinatePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
