// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use trove::Trove;
use trove_test_utils::test_data::{
    animal_bird, animal_dog, animal_spider, person_alice, person_bob, plant_rose,
};
use trove_test_utils::Person;

#[test]
fn test_map_produces_same_length_same_type() {
    let trove = Trove::new(vec![1, 2, 3]);

    let tripled = trove.map(|n| n * 3);

    assert_eq!(tripled, vec![3, 6, 9]);
    assert_eq!(trove.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_map_over_domain_elements() {
    let trove = Trove::new(vec![Person::new("Alice".to_string(), 25)]);

    let older = trove.map(|p| Person::new(p.name.clone(), p.age + 1));

    assert_eq!(older[0].age, 26);
    assert_eq!(trove.nth(0).unwrap().age, 25);
}

#[test]
fn test_each_visits_in_order_and_chains() {
    let trove = Trove::new(vec![1, 2, 3]);
    let mut visited = Vec::new();
    let mut doubled = Vec::new();

    trove
        .each(|n| visited.push(*n))
        .each(|n| doubled.push(n * 2));

    assert_eq!(visited, vec![1, 2, 3]);
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn test_flat_map_concatenates_in_order() {
    let trove = Trove::new(vec![1, 2]);

    let expanded = trove.flat_map(|n| vec![*n, n * 10]);

    assert_eq!(expanded, vec![1, 10, 2, 20]);
}

#[test]
fn test_flat_map_drops_empty_expansions() {
    let trove = Trove::new(vec![1, 2, 3]);

    let odds_doubled = trove.flat_map(|n| {
        if n % 2 == 1 {
            vec![*n, *n]
        } else {
            vec![]
        }
    });

    assert_eq!(odds_doubled, vec![1, 1, 3, 3]);
}

#[test]
fn test_group_by_keeps_all_sharers_in_order() {
    // Arrange - keys land as a, b, a, c
    let trove = Trove::new(vec![
        person_alice(),
        animal_dog(),
        person_bob(),
        plant_rose(),
    ]);

    // Act
    let groups = trove.group_by(|d| d.kind().to_string());

    // Assert
    assert_eq!(groups.len(), 3);
    assert_eq!(groups["person"], vec![person_alice(), person_bob()]);
    assert_eq!(groups["animal"], vec![animal_dog()]);
    assert_eq!(groups["plant"], vec![plant_rose()]);
}

#[test]
fn test_key_by_keeps_last_writer() {
    let trove = Trove::new(vec![
        person_alice(),
        animal_dog(),
        person_bob(),
        plant_rose(),
    ]);

    let index = trove.key_by(|d| d.kind().to_string());

    assert_eq!(index.len(), 3);
    assert_eq!(index["person"], person_bob());
    assert_eq!(index["animal"], animal_dog());
}

#[test]
fn test_group_by_on_empty_yields_no_groups() {
    let trove = Trove::<i32>::new(vec![]);
    assert!(trove.group_by(|n| n.to_string()).is_empty());
}

#[test]
fn test_unique_keeps_first_occurrence_per_class() {
    let trove = Trove::new(vec![
        animal_dog(),
        animal_spider(),
        animal_dog(),
        animal_bird(),
        animal_spider(),
    ]);

    let unique = trove.unique();

    assert_eq!(unique, vec![animal_dog(), animal_spider(), animal_bird()]);
}

#[test]
fn test_unique_with_no_duplicates_is_identity() {
    let trove = Trove::new(vec![1, 2, 3]);
    assert_eq!(trove.unique(), vec![1, 2, 3]);
}

#[test]
fn test_unique_on_empty() {
    let trove = Trove::<i32>::new(vec![]);
    assert!(trove.unique().is_empty());
}
