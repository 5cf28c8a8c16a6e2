//! End-to-end tests for the combinator contract.
//!
//! Exercises the full public surface the way an embedding system would:
//! construction at the boundary, transformation in the core, and
//! elimination back out.

use perhaps::{
    attempt, AbsentError, FirstMaybe, IntoMaybe, Just, Maybe, MaybeLookup, Nothing, Sequential,
};
use std::collections::HashMap;

fn configured_name() -> Maybe<String> {
    Some("ferris".to_string()).into_maybe()
}

fn missing_name() -> Maybe<String> {
    None::<String>.into_maybe()
}

#[test]
fn pattern_matching_is_exhaustive_over_both_variants() {
    match configured_name() {
        Just(name) => assert_eq!(name, "ferris"),
        Nothing => panic!("expected a present value"),
    }

    match missing_name() {
        Just(_) => panic!("expected absence"),
        Nothing => {}
    }
}

#[test]
fn get_or_else_falls_back_only_on_absence() {
    assert_eq!(
        configured_name().get_or_else(|| "gopher".to_string()),
        "ferris"
    );
    assert_eq!(
        missing_name().get_or_else(|| "gopher".to_string()),
        "gopher"
    );
}

#[test]
fn into_option_bridges_to_nullable_code() {
    assert!(configured_name().into_option().is_some());
    assert!(missing_name().into_option().is_none());
}

#[test]
fn map_transforms_only_present_values() {
    assert_eq!(
        configured_name().map(|name| name.to_uppercase()).get(),
        "FERRIS"
    );
    assert_eq!(missing_name().map(|name| name.to_uppercase()), Nothing);
}

#[test]
fn map2_combines_two_present_values() {
    assert_eq!(
        configured_name()
            .map2(Just(12), |name, version| format!(
                "{} v{}",
                name.to_uppercase(),
                version
            ))
            .get(),
        "FERRIS v12"
    );
    assert_eq!(
        missing_name().map2(Just(12), |name, version| format!(
            "{} v{}",
            name.to_uppercase(),
            version
        )),
        Nothing
    );
}

#[test]
fn fold_eliminates_totally() {
    assert_eq!(configured_name().fold(|| 0, |name| name.len()), 6);
    assert_eq!(missing_name().fold(|| 0, |name| name.len()), 0);
}

#[test]
fn flat_map_chains_optional_computations() {
    assert_eq!(
        configured_name()
            .flat_map(|name| Just(name.to_uppercase()))
            .get(),
        "FERRIS"
    );
    assert_eq!(
        missing_name().flat_map(|name| Just(name.to_uppercase())),
        Nothing
    );
}

#[test]
fn filter_applies_the_predicate() {
    assert_eq!(configured_name().filter(|name| name == "gopher"), Nothing);
    assert_eq!(missing_name().filter(|name| name == "gopher"), Nothing);
    assert_eq!(
        configured_name()
            .filter(|name| name.starts_with('f'))
            .get(),
        "ferris"
    );
}

#[test]
fn filter_not_negates_the_predicate() {
    assert_eq!(
        configured_name()
            .filter_not(|name| name == "gopher")
            .get(),
        "ferris"
    );
    assert_eq!(missing_name().filter_not(|name| name == "gopher"), Nothing);
    assert_eq!(
        configured_name().filter_not(|name| name.starts_with('f')),
        Nothing
    );
}

#[test]
fn exists_tests_presence_against_a_predicate() {
    assert!(configured_name().exists(|name| name.starts_with('f')));
    assert!(!missing_name().exists(|name| name.starts_with('f')));
}

#[test]
fn for_each_runs_the_action_only_when_present() {
    configured_name().for_each(|name| {
        assert_eq!(name, "ferris");
    });

    missing_name().for_each(|_| {
        panic!("action must not run on absence");
    });
}

#[test]
fn or_else_supplies_a_lazy_alternative() {
    assert_eq!(
        configured_name()
            .or_else(|| Just("gopher".to_string()))
            .get(),
        "ferris"
    );
    assert_eq!(
        missing_name().or_else(|| Just("gopher".to_string())).get(),
        "gopher"
    );
}

#[test]
fn to_vec_yields_zero_or_one_elements() {
    assert_eq!(configured_name().to_vec(), vec!["ferris".to_string()]);
    assert_eq!(missing_name().to_vec(), Vec::<String>::new());
}

#[test]
fn to_right_carries_the_default_on_the_left() {
    assert!(configured_name().to_right(|| 0).is_right());
    assert!(!missing_name().to_right(|| 0).is_right());
}

#[test]
fn to_left_carries_the_default_on_the_right() {
    assert!(configured_name().to_left(|| 0).is_left());
    assert!(!missing_name().to_left(|| 0).is_left());
}

#[test]
fn try_get_propagates_absence_as_an_error() {
    assert_eq!(configured_name().try_get(), Ok("ferris".to_string()));
    assert_eq!(missing_name().try_get(), Err(AbsentError));
}

#[test]
fn keyed_lookup_collapses_both_absence_causes() {
    let mut translations: HashMap<i32, Option<String>> = HashMap::new();
    translations.insert(1, Some("uno".to_string()));
    translations.insert(2, Some("dos".to_string()));
    translations.insert(4, None);

    assert_eq!(translations.lookup(&1), Just(&"uno".to_string()));
    assert_eq!(translations.lookup(&3), Nothing);
    assert_eq!(translations.lookup(&4), Nothing);
}

#[test]
fn first_match_takes_the_earliest_element() {
    let numbers = vec![1, 2, 3, 4, 5, 6];
    assert_eq!(numbers.iter().first_maybe(), Just(&1));
    assert_eq!(numbers.into_iter().find_maybe(|n| *n > 2), Just(3));
}

#[test]
fn attempt_absorbs_failure_into_absence() {
    assert_eq!(attempt(|| "1".parse::<i32>()), Just(1));
    assert_eq!(attempt(|| "foo".parse::<i32>()), Nothing);
}

#[test]
fn sequential_requires_every_parse_to_succeed() {
    fn parse_ints(raw: &[&str]) -> Maybe<Vec<i32>> {
        raw.iter()
            .map(|s| attempt(|| s.parse::<i32>()))
            .sequential()
    }

    assert_eq!(parse_ints(&["1", "2", "3"]), Just(vec![1, 2, 3]));
    assert_eq!(parse_ints(&["1", "foo", "3"]), Nothing);
}
