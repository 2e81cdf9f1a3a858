//! Fast structural check whether the query looks like coordinates at all

use tracing::trace;

use crate::normalize::normalize;

/// The query has the coordinate-like shape: nothing but numbers, angle signs
/// and hemisphere letters, with at least two numbers.
///
/// No range validation happens here, so `91 92` is still the query to parse.
pub fn is_our_query(query: &str) -> bool {
    let normalized = normalize(query);
    let is_ours = !normalized.has_unknown() && normalized.numbers_count() >= 2;
    trace!(query, %normalized, is_ours, "classified the query");
    is_ours
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_shaped() {
        for query in [
            "55 37",
            "N 55°52.981′ E 36°59.540′",
            "55.93382 ю. ш. 36.93604 з. д.",
            "57°57'11.65''C|33°16'8.37''В",
            "- 55.94920- 36.82205-",
        ] {
            assert!(is_our_query(query), "{query}");
        }
    }

    #[test]
    fn shaped_but_invalid() {
        for query in [
            "91 92",
            "N 90 1 E 1 1",
            "1 2 3",
            "n1 2 3 e 4 5 6 w",
            "55.2,37,6",
            "N 1 2",
            "1 2 N",
        ] {
            assert!(is_our_query(query), "{query}");
        }
    }

    #[test]
    fn not_coordinates() {
        for query in [
            "",
            "aaa",
            "111",
            "1.23",
            "-1.23",
            "1 a",
            "55 a 37",
            "55 37 a",
            "a 55 37",
            "55a37",
            "55 37a",
            "a55 37",
            "8 мая 122/43",
            "wee",
        ] {
            assert!(!is_our_query(query), "{query}");
        }
    }

    #[test]
    fn hemispheres_alone() {
        assert!(!is_our_query("N E"));
        assert!(!is_our_query("N 55 E"));
    }
}
