//! ContactStore Tests
//!
//! Tests verify:
//! - ID assignment and reuse after deleting the highest ID
//! - Edit with partial and empty updates
//! - Compacting delete preserving order
//! - Capacity growth and shrink thresholds
//! - Substring search
//! - Test record generation and memory report

use contactbook::store::{ContactStore, INITIAL_CAPACITY, NAME_WIDTH, PHONE_WIDTH, RECORD_SIZE};
use contactbook::ContactError;

// =============================================================================
// Helper Functions
// =============================================================================

fn store_with(count: usize) -> ContactStore {
    let mut store = ContactStore::new();
    for i in 1..=count {
        store
            .add(&format!("Name {}", i), &format!("{:04}", i), &format!("n{}@x.com", i))
            .unwrap();
    }
    store
}

fn ids(store: &ContactStore) -> Vec<u32> {
    store.iter().map(|c| c.id()).collect()
}

// =============================================================================
// Create / Add Tests
// =============================================================================

#[test]
fn test_new_store_is_empty() {
    let store = ContactStore::new();
    assert_eq!(store.len(), 0);
    assert!(store.is_empty());
    assert_eq!(store.capacity(), INITIAL_CAPACITY);
}

#[test]
fn test_add_assigns_sequential_ids() {
    let mut store = ContactStore::new();

    assert_eq!(store.add("Ana", "111", "a@x.com").unwrap(), 1);
    assert_eq!(store.add("Bo", "222", "b@x.com").unwrap(), 2);
    assert_eq!(store.add("Cy", "333", "c@x.com").unwrap(), 3);
    assert_eq!(store.len(), 3);
}

#[test]
fn test_ids_unique_across_adds_and_deletes() {
    let mut store = store_with(8);
    store.delete(3).unwrap();
    store.delete(8).unwrap();
    store.add("x", "y", "z").unwrap();
    store.add("x", "y", "z").unwrap();

    let mut seen = ids(&store);
    assert!(seen.iter().all(|&id| id > 0));
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), store.len());
}

#[test]
fn test_add_truncates_long_fields() {
    let mut store = ContactStore::new();
    let id = store
        .add(&"N".repeat(250), &"9".repeat(50), "e@x.com")
        .unwrap();

    let contact = store.find_by_id(id).unwrap();
    assert_eq!(contact.name().len(), NAME_WIDTH - 1);
    assert_eq!(contact.phone().len(), PHONE_WIDTH - 1);
    assert_eq!(contact.email(), "e@x.com");
}

#[test]
fn test_new_contacts_are_active() {
    let store = store_with(3);
    assert!(store.iter().all(|c| c.is_active()));
}

// =============================================================================
// ID Reuse Tests
// =============================================================================

#[test]
fn test_deleting_only_record_reuses_id() {
    let mut store = ContactStore::new();
    let id = store.add("Ana", "111", "a@x.com").unwrap();
    store.delete(id).unwrap();

    assert_eq!(store.add("Bo", "222", "b@x.com").unwrap(), id);
}

#[test]
fn test_deleting_highest_id_reuses_it() {
    let mut store = ContactStore::new();
    assert_eq!(store.add("Ana", "111", "a@x.com").unwrap(), 1);
    assert_eq!(store.add("Bo", "222", "b@x.com").unwrap(), 2);

    store.delete(2).unwrap();

    assert_eq!(store.add("Cy", "333", "c@x.com").unwrap(), 2);
}

#[test]
fn test_deleting_lower_id_does_not_reuse_it() {
    let mut store = ContactStore::new();
    store.add("Ana", "111", "a@x.com").unwrap();
    store.add("Bo", "222", "b@x.com").unwrap();

    store.delete(1).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_id(2).unwrap().name(), "Bo");

    assert_eq!(store.add("Cy", "333", "c@x.com").unwrap(), 3);
}

// =============================================================================
// Find / Edit Tests
// =============================================================================

#[test]
fn test_find_by_id() {
    let store = store_with(5);

    assert_eq!(store.find_by_id(4).unwrap().name(), "Name 4");
    assert!(store.find_by_id(6).is_none());
    assert!(store.find_by_id(0).is_none());
}

#[test]
fn test_edit_partial_update() {
    let mut store = store_with(2);

    store.edit(1, None, Some("999"), None).unwrap();

    let contact = store.find_by_id(1).unwrap();
    assert_eq!(contact.name(), "Name 1");
    assert_eq!(contact.phone(), "999");
    assert_eq!(contact.email(), "n1@x.com");
}

#[test]
fn test_edit_with_empty_values_changes_nothing() {
    let mut store = store_with(1);
    let before = store.find_by_id(1).unwrap().clone();

    store.edit(1, Some(""), Some(""), Some("")).unwrap();
    store.edit(1, None, None, None).unwrap();

    assert_eq!(store.find_by_id(1).unwrap(), &before);
}

#[test]
fn test_edit_truncates() {
    let mut store = store_with(1);
    store.edit(1, Some(&"z".repeat(300)), None, None).unwrap();

    assert_eq!(store.find_by_id(1).unwrap().name().len(), NAME_WIDTH - 1);
}

#[test]
fn test_edit_unknown_id() {
    let mut store = store_with(2);
    let result = store.edit(9, Some("x"), None, None);

    assert!(matches!(result, Err(ContactError::NotFound(9))));
}

// =============================================================================
// Delete / Compaction Tests
// =============================================================================

#[test]
fn test_delete_compacts_and_preserves_order() {
    let mut store = store_with(6);
    let before: Vec<_> = store.iter().cloned().collect();

    let removed = store.delete(3).unwrap();
    assert_eq!(removed.name(), "Name 3");
    assert_eq!(store.len(), 5);

    let expected: Vec<_> = before.into_iter().filter(|c| c.id() != 3).collect();
    let after: Vec<_> = store.iter().cloned().collect();
    assert_eq!(after, expected);
}

#[test]
fn test_delete_first_and_last() {
    let mut store = store_with(4);

    store.delete(1).unwrap();
    store.delete(4).unwrap();

    assert_eq!(ids(&store), vec![2, 3]);
}

#[test]
fn test_delete_unknown_id() {
    let mut store = store_with(2);
    let result = store.delete(5);

    assert!(matches!(result, Err(ContactError::NotFound(5))));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_delete_from_empty_store() {
    let mut store = ContactStore::new();
    assert!(matches!(store.delete(1), Err(ContactError::NotFound(1))));
}

// =============================================================================
// Capacity Tests
// =============================================================================

#[test]
fn test_capacity_doubles_when_full() {
    let mut store = store_with(10);
    assert_eq!(store.capacity(), 10);

    store.add("eleventh", "11", "e@x.com").unwrap();
    assert_eq!(store.capacity(), 20);
}

#[test]
fn test_capacity_keeps_doubling() {
    let store = store_with(41);
    assert_eq!(store.capacity(), 80);
}

#[test]
fn test_shrink_halves_capacity_below_half_full() {
    let mut store = store_with(40);
    assert_eq!(store.capacity(), 40);

    // Down to 20 contacts: not yet below half
    for id in 21..=40 {
        store.delete(id).unwrap();
    }
    assert_eq!(store.len(), 20);
    assert_eq!(store.capacity(), 40);

    // 19 < 40 / 2 triggers the shrink
    store.delete(20).unwrap();
    assert_eq!(store.capacity(), 20);
}

#[test]
fn test_no_shrink_at_twice_initial_capacity() {
    let mut store = store_with(11);
    assert_eq!(store.capacity(), 20);

    for id in 2..=11 {
        store.delete(id).unwrap();
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.capacity(), 20);
}

#[test]
fn test_shrink_stops_at_twice_initial_capacity() {
    let mut store = store_with(80);
    assert_eq!(store.capacity(), 80);

    // Delete from the back: shrinks at 39 (to 40) and never below 20
    for id in (1..=80).rev() {
        store.delete(id).unwrap();
        assert!(store.capacity() >= store.len());
    }

    assert!(store.is_empty());
    assert_eq!(store.capacity(), 20);
}

#[test]
fn test_count_never_exceeds_capacity() {
    let mut store = ContactStore::new();
    for i in 0..100 {
        store.add(&i.to_string(), "p", "e").unwrap();
        assert!(store.len() <= store.capacity());
    }
}

// =============================================================================
// Search / List Tests
// =============================================================================

#[test]
fn test_search_matches_any_field() {
    let mut store = ContactStore::new();
    store.add("Ana Souza", "11-1111", "ana@mail.com").unwrap();
    store.add("Bruno", "22-2222", "bruno@work.org").unwrap();
    store.add("Carla", "33-3333", "carla@mail.com").unwrap();

    let by_name: Vec<_> = store.search("Souza").iter().map(|c| c.id()).collect();
    assert_eq!(by_name, vec![1]);

    let by_phone: Vec<_> = store.search("22-").iter().map(|c| c.id()).collect();
    assert_eq!(by_phone, vec![2]);

    let by_email: Vec<_> = store.search("mail.com").iter().map(|c| c.id()).collect();
    assert_eq!(by_email, vec![1, 3]);
}

#[test]
fn test_search_is_case_sensitive() {
    let mut store = ContactStore::new();
    store.add("Ana", "111", "a@x.com").unwrap();

    assert!(store.search("ana").is_empty());
    assert_eq!(store.search("Ana").len(), 1);
}

#[test]
fn test_search_empty_term_or_store() {
    let store = store_with(3);
    assert!(store.search("").is_empty());

    let empty = ContactStore::new();
    assert!(empty.search("Name").is_empty());
}

#[test]
fn test_list_is_repeatable() {
    let store = store_with(4);

    let first: Vec<_> = store.list().iter().map(|c| c.id()).collect();
    let second: Vec<_> = (&store).into_iter().map(|c| c.id()).collect();

    assert_eq!(first, vec![1, 2, 3, 4]);
    assert_eq!(first, second);
    assert_eq!(store.len(), 4);
}

// =============================================================================
// Generation / Memory Report Tests
// =============================================================================

#[test]
fn test_generate_test_records() {
    let mut store = ContactStore::new();
    let added = store.generate_test_records(25).unwrap();

    assert_eq!(added, 25);
    assert_eq!(store.len(), 25);
    assert_eq!(store.capacity(), 40);

    let first = store.find_by_id(1).unwrap();
    assert_eq!(first.name(), "Test Contact 1");
    assert_eq!(first.phone(), "11-90000-0000");
    assert_eq!(first.email(), "contact1@test.com");

    let last = store.find_by_id(25).unwrap();
    assert_eq!(last.name(), "Test Contact 25");
    assert_eq!(last.phone(), "11-90000-0024");
}

#[test]
fn test_generate_zero_records() {
    let mut store = ContactStore::new();
    assert_eq!(store.generate_test_records(0).unwrap(), 0);
    assert!(store.is_empty());
}

#[test]
fn test_memory_report_tracks_store() {
    let store = store_with(15);
    let report = store.memory_report();

    assert_eq!(report.count, 15);
    assert_eq!(report.capacity, 20);
    assert!((report.occupancy - 0.75).abs() < 1e-9);
    assert_eq!(report.array_bytes, 20 * RECORD_SIZE);
    assert_eq!(report.used_bytes, 15 * RECORD_SIZE);
    assert_eq!(report.wasted_bytes, 5 * RECORD_SIZE);
    assert_eq!(report.total_bytes, report.struct_bytes + report.array_bytes);
}

#[test]
fn test_memory_report_is_pure() {
    let store = store_with(3);
    let first = store.memory_report();
    let second = store.memory_report();

    assert_eq!(first, second);
    assert_eq!(store.len(), 3);
}
