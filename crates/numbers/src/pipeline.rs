use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::qualifier::Qualifier;

/// Body of `POST /numbers/{numberid}`.
///
/// Missing and `null` fields both decode to their zero value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub qualifiers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub window_size: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl NumbersRequest {
    /// Recognised qualifiers in request order; unknown codes are dropped.
    pub fn parsed_qualifiers(&self) -> Vec<Qualifier> {
        self.qualifiers
            .iter()
            .filter_map(|code| Qualifier::from_code(code))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumbersResponse {
    pub numbers: Vec<i64>,
}

/// Keep every number matched by at least one qualifier, in input order.
pub fn apply_qualifiers(numbers: &[i64], qualifiers: &[Qualifier]) -> Vec<i64> {
    numbers
        .iter()
        .copied()
        .filter(|&n| qualifiers.iter().any(|q| q.matches(n)))
        .collect()
}

/// Drop repeats, keeping the first occurrence of each value.
pub fn dedup_preserving_order(numbers: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(numbers.len());
    let mut out = Vec::with_capacity(numbers.len());
    for &n in numbers {
        if seen.insert(n) {
            out.push(n);
        }
    }
    out
}

/// Truncate to `window_size` when `0 < window_size < len`; otherwise unchanged.
pub fn apply_window(mut numbers: Vec<i64>, window_size: i64) -> Vec<i64> {
    if let Ok(size) = usize::try_from(window_size) {
        if size > 0 && size < numbers.len() {
            numbers.truncate(size);
        }
    }
    numbers
}

/// Qualify, dedup, window.
pub fn run_pipeline(fetched: &[i64], request: &NumbersRequest) -> NumbersResponse {
    let qualifiers = request.parsed_qualifiers();
    let filtered = apply_qualifiers(fetched, &qualifiers);
    let unique = dedup_preserving_order(&filtered);
    let numbers = apply_window(unique, request.window_size);

    tracing::debug!(
        qualifiers = %qualifiers.iter().map(Qualifier::code).collect::<String>(),
        fetched = fetched.len(),
        filtered = filtered.len(),
        returned = numbers.len(),
        window_size = request.window_size,
        "numbers pipeline"
    );

    NumbersResponse { numbers }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(qualifiers: &[&str], window_size: i64) -> NumbersRequest {
        NumbersRequest {
            qualifiers: qualifiers.iter().map(|s| s.to_string()).collect(),
            window_size,
        }
    }

    #[test]
    fn even_qualifier() {
        let out = run_pipeline(&[1, 2, 3, 4], &request(&["e"], 0));
        assert_eq!(out.numbers, vec![2, 4]);
    }

    #[test]
    fn prime_qualifier() {
        let out = run_pipeline(&[1, 2, 3, 4, 5, 6, 7], &request(&["p"], 0));
        assert_eq!(out.numbers, vec![2, 3, 5, 7]);
    }

    #[test]
    fn fibonacci_qualifier_skips_zero() {
        let out = run_pipeline(&[0, 1, 4, 8, 13, 14], &request(&["f"], 0));
        assert_eq!(out.numbers, vec![1, 8, 13]);
    }

    #[test]
    fn overlapping_qualifiers_yield_each_number_once() {
        let out = run_pipeline(&[2, 3, 4], &request(&["p", "e"], 0));
        assert_eq!(out.numbers, vec![2, 3, 4]);
    }

    #[test]
    fn repeated_qualifier_codes_do_not_duplicate() {
        let out = run_pipeline(&[2, 3, 4], &request(&["e", "e"], 0));
        assert_eq!(out.numbers, vec![2, 4]);
    }

    #[test]
    fn upstream_duplicates_collapse_to_first_occurrence() {
        let out = run_pipeline(&[5, 1, 5, 2, 1, 9], &request(&["r"], 0));
        assert_eq!(out.numbers, vec![5, 1, 2, 9]);
    }

    #[test]
    fn window_truncates_deduplicated_result() {
        let out = run_pipeline(&[2, 3, 4], &request(&["p", "e"], 2));
        assert_eq!(out.numbers, vec![2, 3]);
    }

    #[test]
    fn window_is_ignored_when_not_smaller_than_result() {
        for window in [0, -1, 3, 10] {
            let out = run_pipeline(&[2, 3, 4], &request(&["r"], window));
            assert_eq!(out.numbers, vec![2, 3, 4], "window {window}");
        }
    }

    #[test]
    fn unknown_and_empty_qualifiers_select_nothing() {
        assert!(run_pipeline(&[1, 2, 3], &request(&["x", "?"], 0)).numbers.is_empty());
        assert!(run_pipeline(&[1, 2, 3], &request(&[], 0)).numbers.is_empty());
    }

    #[test]
    fn unknown_codes_are_ignored_next_to_known_ones() {
        let out = run_pipeline(&[1, 2, 3, 4], &request(&["zz", "e"], 0));
        assert_eq!(out.numbers, vec![2, 4]);
    }

    #[test]
    fn request_fields_default_when_missing() {
        let req: NumbersRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(req, NumbersRequest::default());

        let req: NumbersRequest = serde_json::from_value(json!({"qualifiers": ["p"]})).unwrap();
        assert_eq!(req.window_size, 0);
        assert_eq!(req.parsed_qualifiers(), vec![Qualifier::Prime]);
    }

    #[test]
    fn request_null_fields_decode_as_zero_values() {
        let req: NumbersRequest =
            serde_json::from_value(json!({"qualifiers": null, "window_size": null})).unwrap();
        assert_eq!(req, NumbersRequest::default());
    }

    #[test]
    fn request_rejects_wrong_types() {
        assert!(serde_json::from_value::<NumbersRequest>(json!({"qualifiers": "p"})).is_err());
        assert!(serde_json::from_value::<NumbersRequest>(json!({"window_size": "2"})).is_err());
    }

    #[test]
    fn response_wire_shape() {
        let res = NumbersResponse { numbers: vec![2, 3] };
        assert_eq!(serde_json::to_value(&res).unwrap(), json!({"numbers": [2, 3]}));

        let empty = NumbersResponse::default();
        assert_eq!(serde_json::to_value(&empty).unwrap(), json!({"numbers": []}));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_codes() -> impl Strategy<Value = Vec<&'static str>> {
            prop::collection::vec(prop::sample::select(vec!["p", "f", "e", "r", "x"]), 0..5)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: output is unique, bounded by the window, and every element qualifies.
            #[test]
            fn output_is_unique_qualified_and_windowed(
                numbers in prop::collection::vec(-50i64..200, 0..60),
                codes in arb_codes(),
                window in -3i64..20,
            ) {
                let req = request(&codes, window);
                let qualifiers = req.parsed_qualifiers();
                let out = run_pipeline(&numbers, &req).numbers;

                let unique: HashSet<i64> = out.iter().copied().collect();
                prop_assert_eq!(unique.len(), out.len());
                prop_assert!(out.iter().all(|&n| qualifiers.iter().any(|q| q.matches(n))));

                let full = dedup_preserving_order(&apply_qualifiers(&numbers, &qualifiers));
                if window > 0 && (window as usize) < full.len() {
                    prop_assert_eq!(&out[..], &full[..window as usize]);
                } else {
                    prop_assert_eq!(out, full);
                }
            }
        }
    }
}
