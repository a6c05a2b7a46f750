use ceaiscore::{Dimension, QUESTION_COUNT};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn dimension_sets_are_disjoint() {
    let mut seen = HashSet::new();
    for dim in Dimension::ALL {
        for &column in dim.items() {
            assert!(seen.insert(column), "column {column} appears twice");
        }
    }
}

#[test]
fn dimension_sets_cover_all_columns() {
    let covered: HashSet<usize> = Dimension::ALL
        .iter()
        .flat_map(|d| d.items().iter().copied())
        .collect();
    assert_eq!(covered.len(), QUESTION_COUNT);
    assert_eq!(covered, (0..QUESTION_COUNT).collect::<HashSet<_>>());
}

#[test]
fn no_dimension_is_empty() {
    for dim in Dimension::ALL {
        assert!(dim.items().len() >= 2, "{dim} has too few items");
    }
}

proptest! {
    // partition property: every column belongs to exactly one dimension
    #[test]
    fn every_column_has_exactly_one_owner(column in 0..QUESTION_COUNT) {
        let owners = Dimension::ALL
            .iter()
            .filter(|d| d.items().contains(&column))
            .count();
        prop_assert_eq!(owners, 1);
        prop_assert!(Dimension::containing(column).is_some());
    }
}
