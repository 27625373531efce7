//! Pure list-narrowing transforms over the country collection.
//!
//! Both transforms are case-insensitive substring matches with the term
//! trimmed first, and both return new sequences preserving input order; the
//! source collection is never mutated.

use crate::models::Country;

/// Narrow to countries whose region contains the term.
///
/// An empty (or whitespace-only) term is the identity: the input comes back
/// unchanged. Countries with no region never match a non-empty term.
pub fn filter_by_region(countries: &[Country], region_term: &str) -> Vec<Country> {
    let needle = region_term.trim().to_lowercase();
    if needle.is_empty() {
        return countries.to_vec();
    }

    countries
        .iter()
        .filter(|country| country.region.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Narrow to countries whose common name contains the term.
///
/// An empty (or whitespace-only) term matches everything.
pub fn search_by_name(countries: &[Country], search_term: &str) -> Vec<Country> {
    let needle = search_term.trim().to_lowercase();
    if needle.is_empty() {
        return countries.to_vec();
    }

    countries
        .iter()
        .filter(|country| country.name.common.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// The composed pipeline, in its fixed order: region filter first, then
/// name search over its result.
pub fn apply_filters(countries: &[Country], region_term: &str, search_term: &str) -> Vec<Country> {
    search_by_name(&filter_by_region(countries, region_term), search_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn country(name: &str, region: &str) -> Country {
        serde_json::from_value(json!({
            "name": { "common": name },
            "region": region
        }))
        .unwrap()
    }

    fn sample() -> Vec<Country> {
        vec![
            country("France", "Europe"),
            country("Germany", "Europe"),
            country("Brazil", "Americas"),
            country("Japan", "Asia"),
            country("Bouvet Island", ""),
        ]
    }

    fn names(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.name.common.as_str()).collect()
    }

    #[test]
    fn empty_terms_are_identity() {
        let all = sample();
        assert_eq!(filter_by_region(&all, ""), all);
        assert_eq!(filter_by_region(&all, "   "), all);
        assert_eq!(search_by_name(&all, ""), all);
        assert_eq!(search_by_name(&all, "   "), all);
    }

    #[test]
    fn region_filter_is_idempotent() {
        let all = sample();
        let once = filter_by_region(&all, "Europe");
        let twice = filter_by_region(&once, "Europe");
        assert_eq!(once, twice);
    }

    #[test]
    fn region_filter_membership_is_exact() {
        let all = sample();
        let result = filter_by_region(&all, "eur");
        assert!(result.iter().all(|c| c.region.to_lowercase().contains("eur")));
        for excluded in all.iter().filter(|c| !result.contains(c)) {
            assert!(!excluded.region.to_lowercase().contains("eur"));
        }
    }

    #[test]
    fn no_region_never_matches_a_nonempty_term() {
        let all = sample();
        for term in ["Europe", "Americas", "o"] {
            let result = filter_by_region(&all, term);
            assert!(result.iter().all(|c| !c.region.is_empty()), "term {term:?}");
        }
    }

    #[test]
    fn search_is_case_insensitive() {
        let all = sample();
        assert_eq!(search_by_name(&all, "FRANCE"), search_by_name(&all, "france"));
        assert_eq!(names(&search_by_name(&all, "FRANCE")), ["France"]);
    }

    #[test]
    fn term_whitespace_is_trimmed() {
        let all = sample();
        assert_eq!(names(&search_by_name(&all, "  fra  ")), ["France"]);
        assert_eq!(
            names(&filter_by_region(&all, " europe ")),
            ["France", "Germany"]
        );
    }

    #[test]
    fn output_preserves_input_order() {
        let all = sample();
        assert_eq!(names(&filter_by_region(&all, "e")), ["France", "Germany"]);
        assert_eq!(
            names(&search_by_name(&all, "a")),
            ["France", "Germany", "Brazil", "Japan", "Bouvet Island"]
        );
    }

    #[test]
    fn composition_equals_joint_predicate() {
        let all = sample();
        for (region_term, search_term) in [("europe", "a"), ("", "an"), ("as", ""), ("e", "zz")] {
            let chained = apply_filters(&all, region_term, search_term);
            let joint: Vec<Country> = all
                .iter()
                .filter(|c| {
                    let r = region_term.trim().to_lowercase();
                    let q = search_term.trim().to_lowercase();
                    (r.is_empty() || c.region.to_lowercase().contains(&r))
                        && (q.is_empty() || c.name.common.to_lowercase().contains(&q))
                })
                .cloned()
                .collect();
            assert_eq!(chained, joint, "terms ({region_term:?}, {search_term:?})");
        }
    }

    #[test]
    fn france_scenario() {
        let all = sample();
        assert_eq!(names(&apply_filters(&all, "europe", "fra")), ["France"]);
        assert!(apply_filters(&all, "", "zz").is_empty());
    }
}
