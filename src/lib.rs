//! Recognize the geographic coordinates typed by a human
//! in a variety of notations and turn them into the canonical form.
//!
//! ```
//! use geoquery::{is_our_query, parse};
//!
//! assert!(is_our_query("55.93382 ю. ш. 36.93604 з. д."));
//! let found = parse("N 55°52.981′ E 36°59.540′").unwrap();
//! assert_eq!(found.titles(), ["N 55°52.981′ E 36°59.54′"]);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use geoquery_types::{
    consts, AngleComponent, Axis, AxisKind, Candidates, CoordinatePair, DecimalNumber,
    Hemisphere, Mark, OutOfRange, ParseCoordinatesError, ParseNumberError, Pole, Precision,
    RotationalDirection, StructuralMismatch,
};
use tracing::{debug, trace};
// dev-dependencies of the integration tests
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;

pub use self::{
    classify::is_our_query,
    normalize::{normalize, Normalized, Token},
    provider::{
        CoordinatesProvider, SearchOutcome, SearchProvider, SearchResult, INVALID_COORDINATES,
    },
};

mod classify;
mod glyphs;
mod grammar;
mod normalize;
mod provider;
mod resolve;
mod validate;

/// Parse the query into the list of the possible locations.
///
/// The candidates are deduplicated and ordered:
/// the query with hemispheres gives exactly one location,
/// the query without them gives the location as typed
/// and then the one with the swapped axes, if it is valid.
///
/// # Errors
/// - the query does not fit any of the known shapes;
/// - the values are out of their ranges;
/// - none of the orders of the axes is valid.
pub fn parse(query: &str) -> Result<Candidates, ParseCoordinatesError> {
    let normalized = normalize(query);
    trace!(query, %normalized, "normalized the query");

    let matched = grammar::match_shape(&normalized).map_err(|err| {
        debug!(%normalized, %err, "the query does not fit any shape");
        err
    })?;

    let shape = matched.shape;
    trace!(?shape, "matched the shape");

    let candidates = resolve::resolve(matched).map_err(|err| {
        debug!(%normalized, %err, "failed to assign the axes");
        err
    })?;

    let candidates = validate::validate(candidates, shape.layout).map_err(|err| {
        debug!(%normalized, %err, "no valid candidates");
        err
    })?;

    debug!(%normalized, count = candidates.len(), "found the candidates");
    Ok(candidates)
}
