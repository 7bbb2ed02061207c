//! Unit tests for DistinctCollection.
//!
//! These tests cover key-based membership, duplicate rejection, the
//! same-kind filter, the trusted and checked restore paths, and both
//! configuration routes (closure and Distinct trait).

use orderly::distinct::{Distinct, DistinctCollection, KeyedCollection};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Person {
    id: u32,
    name: String,
}

impl Person {
    fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }
}

impl Distinct for Person {
    type Key = u32;

    fn distinct_key(&self) -> u32 {
        self.id
    }
}

#[rstest]
fn test_new_creates_empty_collection() {
    let collection = DistinctCollection::new(|person: &Person| person.id);
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

#[rstest]
fn test_seeded_construction_admits_distinct_keys() {
    let people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    assert_eq!(people.len(), 2);
    assert!(people.contains(&Person::new(1, "Ada")));
    assert!(people.contains(&Person::new(2, "Grace")));
}

#[rstest]
fn test_add_rejects_duplicate_key_and_keeps_count_stable() {
    let mut people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    // Same id, different name: the key decides, so this is a duplicate.
    let error = people.add(Person::new(2, "Margaret")).unwrap_err();
    assert_eq!(error.index, 1);
    assert_eq!(people.len(), 2);

    // A fresh key is admitted as usual afterwards.
    assert!(people.add(Person::new(3, "Margaret")).is_ok());
    assert_eq!(people.len(), 3);
}

#[rstest]
fn test_add_reports_containment_after_insertion() {
    let mut people = KeyedCollection::of();
    assert_eq!(people.add(Person::new(1, "Ada")), Ok(true));
}

#[rstest]
fn test_contains_ignores_non_key_fields() {
    let people = KeyedCollection::of_elements(vec![Person::new(1, "Ada")]).unwrap();

    assert!(people.contains(&Person::new(1, "someone else entirely")));
    assert!(!people.contains(&Person::new(2, "Ada")));
}

#[rstest]
fn test_remove_deletes_the_stored_key_holder() {
    let mut people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    // The argument only names the key; the stored element is removed.
    assert!(people.remove(&Person::new(1, "anyone")));
    assert_eq!(people.as_slice(), &[Person::new(2, "Grace")]);

    assert!(!people.remove(&Person::new(1, "anyone")));
    assert_eq!(people.len(), 1);
}

#[rstest]
fn test_contains_key_accepts_borrowed_queries() {
    let mut devices = DistinctCollection::new(|device: &(String, u32)| device.0.clone());
    assert!(devices.add(("printer".to_string(), 1)).is_ok());

    assert!(devices.contains_key("printer"));
    assert!(!devices.contains_key("scanner"));
}

#[rstest]
fn test_find_returns_the_stored_element() {
    let people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    assert_eq!(people.find(&2), Some(&Person::new(2, "Grace")));
    assert_eq!(people.find(&3), None);
}

#[rstest]
fn test_remove_by_key_returns_the_stored_element() {
    let mut people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    assert_eq!(people.remove_by_key(&1), Some(Person::new(1, "Ada")));
    assert_eq!(people.remove_by_key(&1), None);
    assert_eq!(people.len(), 1);
}

#[rstest]
fn test_filter_returns_same_kind_with_retained_order() {
    let people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
        Person::new(3, "Margaret"),
    ])
    .unwrap();

    let mut odd_ids = people.filter(|person| person.id % 2 == 1).unwrap();

    assert_eq!(odd_ids.as_slice(), &[
        Person::new(1, "Ada"),
        Person::new(3, "Margaret"),
    ]);

    // The result enforces the same uniqueness as its source.
    assert!(odd_ids.add(Person::new(3, "impostor")).is_err());
}

#[rstest]
fn test_clone_empty_preserves_the_accessor_configuration() {
    let collection =
        DistinctCollection::from_elements(|word: &String| word.len(), vec!["one".to_string()])
            .unwrap();

    let mut empty = collection.clone_empty();
    assert!(empty.is_empty());
    assert!(empty.add("two".to_string()).is_ok());
    assert!(empty.add("six".to_string()).is_err());
}

#[rstest]
fn test_exists_evaluates_predicate_over_elements() {
    let people = KeyedCollection::of_elements(vec![
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    assert!(people.exists(|person| person.name == "Grace"));
    assert!(!people.exists(|person| person.id > 10));
}

#[rstest]
fn test_restore_replaces_state_without_validation() {
    let mut collection = DistinctCollection::new(|element: &i32| *element);
    assert!(collection.add(1).is_ok());

    collection.restore(vec![5, 5]);

    assert_eq!(collection.as_slice(), &[5, 5]);
    // The violated invariant surfaces on the next validated insertion.
    assert_eq!(collection.add(5).unwrap_err().index, 0);
}

#[rstest]
fn test_remove_after_bypass_reports_remaining_duplicate() {
    let mut collection = DistinctCollection::new(|element: &i32| *element);
    collection.restore(vec![5, 5]);

    // One holder of the key remains, so the containment-style report is false.
    assert!(!collection.remove(&5));
    assert_eq!(collection.as_slice(), &[5]);

    assert!(collection.remove(&5));
    assert!(collection.is_empty());
}

#[rstest]
fn test_restore_checked_rejects_colliding_payload_atomically() {
    let mut collection =
        DistinctCollection::from_elements(|element: &i32| *element, vec![1, 2]).unwrap();

    let error = collection.restore_checked(vec![7, 8, 7]).unwrap_err();
    assert_eq!(error.index, 0);
    // Prior state is untouched on error.
    assert_eq!(collection.as_slice(), &[1, 2]);
}

#[rstest]
fn test_restore_checked_replaces_state_on_valid_payload() {
    let mut collection =
        DistinctCollection::from_elements(|element: &i32| *element, vec![1, 2]).unwrap();

    collection.restore_checked(vec![7, 8]).unwrap();
    assert_eq!(collection.as_slice(), &[7, 8]);
}

#[rstest]
fn test_closure_and_trait_routes_behave_identically() {
    let mut by_closure = DistinctCollection::new(|person: &Person| person.id);
    let mut by_trait = KeyedCollection::of();

    for person in [Person::new(1, "Ada"), Person::new(2, "Grace")] {
        assert!(by_closure.add(person.clone()).is_ok());
        assert!(by_trait.add(person).is_ok());
    }
    assert_eq!(by_closure.as_slice(), by_trait.as_slice());

    assert!(by_closure.add(Person::new(2, "again")).is_err());
    assert!(by_trait.add(Person::new(2, "again")).is_err());
}

#[rstest]
fn test_equality_compares_elements_not_configuration() {
    fn identity_key(element: &i32) -> i32 {
        *element
    }

    fn negated_key(element: &i32) -> i32 {
        -*element
    }

    let mut first: DistinctCollection<i32, i32> = DistinctCollection::new(identity_key);
    let mut second: DistinctCollection<i32, i32> = DistinctCollection::new(negated_key);

    for element in [1, 2, 3] {
        assert!(first.add(element).is_ok());
        assert!(second.add(element).is_ok());
    }

    assert_eq!(first, second);
}

#[rstest]
fn test_iteration_follows_insertion_order() {
    let people = KeyedCollection::of_elements(vec![
        Person::new(3, "Margaret"),
        Person::new(1, "Ada"),
        Person::new(2, "Grace"),
    ])
    .unwrap();

    let ids: Vec<u32> = people.iter().map(|person| person.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);

    let names: Vec<String> = people.into_iter().map(|person| person.name).collect();
    assert_eq!(names, vec!["Margaret", "Ada", "Grace"]);
}

#[rstest]
fn test_debug_and_display_render_the_element_sequence() {
    let collection =
        DistinctCollection::from_elements(|element: &i32| *element, vec![1, 2]).unwrap();

    assert_eq!(format!("{collection:?}"), "[1, 2]");
    assert_eq!(collection.to_string(), "[1, 2]");
}

#[rstest]
fn test_as_collection_exposes_a_read_only_view() {
    let people = KeyedCollection::of_elements(vec![Person::new(1, "Ada")]).unwrap();

    let view = people.as_collection();
    assert_eq!(view.len(), 1);
    assert!(view.exists(|person| person.name == "Ada"));
}
