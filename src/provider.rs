//! The search provider contract consumed by the search dispatcher

use std::future::{self, Future};

use geoquery_types::{Candidates, CoordinatePair, ParseCoordinatesError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{classify, parse};

/// The only error message shown for any query which is not a valid location
pub const INVALID_COORDINATES: &str = "Invalid coordinates";

/// A single found location
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Canonical representation of the coordinates
    pub title: String,
    /// Signed decimal degrees, positive to the north
    pub latitude: f64,
    /// Signed decimal degrees, positive to the east
    pub longitude: f64,
}

impl From<&CoordinatePair> for SearchResult {
    fn from(pair: &CoordinatePair) -> Self {
        Self {
            title: pair.to_string(),
            latitude: pair.latitude(),
            longitude: pair.longitude(),
        }
    }
}

/// Either the non-empty list of locations or the error message
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SearchOutcome {
    /// Found locations in the order they should be shown
    Results(Vec<SearchResult>),
    /// Why nothing was found
    Error(String),
}

impl SearchOutcome {
    /// The found locations, if any
    pub fn results(&self) -> Option<&[SearchResult]> {
        match self {
            Self::Results(results) => Some(results),
            Self::Error(_) => None,
        }
    }

    /// The error message, if nothing was found
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Results(_) => None,
            Self::Error(msg) => Some(msg),
        }
    }

    /// The titles of the found locations
    pub fn titles(&self) -> Vec<&str> {
        self.results()
            .unwrap_or_default()
            .iter()
            .map(|result| result.title.as_str())
            .collect()
    }
}

impl From<Result<Candidates, ParseCoordinatesError>> for SearchOutcome {
    fn from(parsed: Result<Candidates, ParseCoordinatesError>) -> Self {
        match parsed {
            Ok(candidates) if !candidates.is_empty() => {
                Self::Results(candidates.iter().map(SearchResult::from).collect())
            }
            // the details are for the logs only
            Ok(_) | Err(_) => Self::Error(INVALID_COORDINATES.to_string()),
        }
    }
}

/// The component which the dispatcher asks to search for the user's query
/// along with the other (probably network-backed) providers.
pub trait SearchProvider: Send + Sync {
    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Cheap check whether the query should be passed to the [`search`](Self::search).
    /// Suitable for running on every keystroke.
    fn is_our_query(&self, query: &str) -> bool;

    /// Search for the query.
    /// The failure is a normal outcome rather than an error.
    fn search(&self, query: &str) -> impl Future<Output = SearchOutcome> + Send;
}

/// Search provider recognizing the coordinates typed in a variety of notations
#[derive(Debug, Default, Copy, Clone)]
pub struct CoordinatesProvider;

impl CoordinatesProvider {
    /// Construct the provider
    pub const fn new() -> Self {
        Self
    }
}

impl SearchProvider for CoordinatesProvider {
    fn name(&self) -> &str {
        "Coordinates"
    }

    fn is_our_query(&self, query: &str) -> bool {
        classify::is_our_query(query)
    }

    fn search(&self, query: &str) -> impl Future<Output = SearchOutcome> + Send {
        // pure CPU work, nothing to wait for
        future::ready(SearchOutcome::from(parse(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_candidates() {
        let outcome = SearchOutcome::from(parse("N 55°52.981′ W 36°59.540′"));
        assert_eq!(outcome.titles(), ["N 55°52.981′ W 36°59.54′"]);
        assert!(outcome.error().is_none());

        let result = &outcome.results().unwrap()[0];
        assert!((result.latitude - (55.0 + 52.981 / 60.0)).abs() < 1e-9);
        assert!((result.longitude + (36.0 + 59.54 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn outcome_from_error() {
        let outcome = SearchOutcome::from(parse("91 92"));
        assert_eq!(outcome.error(), Some(INVALID_COORDINATES));
        assert!(outcome.results().is_none());
        assert!(outcome.titles().is_empty());
    }

    #[test]
    fn empty_candidates_are_error() {
        let outcome = SearchOutcome::from(Ok(Candidates::new()));
        assert_eq!(outcome, SearchOutcome::Error(INVALID_COORDINATES.into()));
    }

    #[test]
    fn provider_name() {
        assert_eq!(CoordinatesProvider::new().name(), "Coordinates");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn wire_format() {
        let outcome = SearchOutcome::from(parse("90 180"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "results": [{"title": "90° 180°", "latitude": 90.0, "longitude": 180.0}]
            })
        );

        let outcome = SearchOutcome::from(parse("aaa"));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Invalid coordinates"}));
    }
}
