use todolist_core::{in_memory_service, TodoServiceError};

#[test]
fn move_completed_item_recreates_it_in_destination() {
    let mut service = in_memory_service();
    let a = service.create_list("A").unwrap();
    let b = service.create_list("B").unwrap();
    let item = service.create_item(a.id, "x").unwrap();
    service.set_completion(a.id, item.id, true).unwrap();

    let moved = service.move_item(a.id, b.id, item.id).unwrap();
    assert_eq!(moved.description, "x");
    assert!(moved.completed);

    let a = service.get_list(a.id).unwrap();
    let b = service.get_list(b.id).unwrap();
    assert!(a.items.is_empty());
    assert_eq!(b.items, vec![moved]);
}

#[test]
fn move_assigns_fresh_destination_scoped_id() {
    let mut service = in_memory_service();
    let a = service.create_list("A").unwrap();
    let b = service.create_list("B").unwrap();
    service.create_item(b.id, "b1").unwrap();
    service.create_item(b.id, "b2").unwrap();
    let item = service.create_item(a.id, "a1").unwrap();

    let moved = service.move_item(a.id, b.id, item.id).unwrap();
    assert_eq!(item.id, 1);
    assert_eq!(moved.id, 3);
    assert!(!moved.completed);

    let ids = service
        .get_list(b.id)
        .unwrap()
        .items
        .into_iter()
        .map(|item| item.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn move_missing_item_leaves_both_lists_unchanged() {
    let mut service = in_memory_service();
    let a = service.create_list("A").unwrap();
    let b = service.create_list("B").unwrap();
    service.create_item(a.id, "keep").unwrap();
    let before = service.list_all();

    let err = service.move_item(a.id, b.id, 9).unwrap_err();
    assert_eq!(
        err,
        TodoServiceError::ItemNotFound {
            list_id: a.id,
            item_id: 9
        }
    );
    assert_eq!(service.list_all(), before);
}

#[test]
fn move_into_missing_destination_keeps_source_item() {
    let mut service = in_memory_service();
    let a = service.create_list("A").unwrap();
    let item = service.create_item(a.id, "keep").unwrap();

    let err = service.move_item(a.id, 77, item.id).unwrap_err();
    assert_eq!(err, TodoServiceError::ListNotFound(77));
    assert_eq!(service.get_list(a.id).unwrap().items, vec![item]);
}

#[test]
fn move_from_missing_source_fails_before_touching_destination() {
    let mut service = in_memory_service();
    let b = service.create_list("B").unwrap();

    let err = service.move_item(12, b.id, 1).unwrap_err();
    assert_eq!(err, TodoServiceError::ListNotFound(12));
    assert!(service.get_list(b.id).unwrap().items.is_empty());
}

#[test]
fn move_within_same_list_reissues_id_and_keeps_one_copy() {
    let mut service = in_memory_service();
    let a = service.create_list("A").unwrap();
    let item = service.create_item(a.id, "loop").unwrap();
    service.set_completion(a.id, item.id, true).unwrap();

    let moved = service.move_item(a.id, a.id, item.id).unwrap();
    let items = service.get_list(a.id).unwrap().items;
    assert_eq!(items.len(), 1);
    assert_ne!(moved.id, item.id);
    assert_eq!(items[0], moved);
    assert!(moved.completed);
}

#[test]
fn groceries_to_errands_scenario() {
    let mut service = in_memory_service();
    let groceries = service.create_list("Groceries").unwrap();
    let milk = service.create_item(groceries.id, "milk").unwrap();
    assert_eq!(milk.id, 1);
    assert!(!milk.completed);
    service.set_completion(groceries.id, milk.id, true).unwrap();
    let errands = service.create_list("Errands").unwrap();

    let source = service.get_list_by_name("Groceries").unwrap();
    let dest = service.get_list_by_name("Errands").unwrap();
    let moved = service.move_item(source.id, dest.id, milk.id).unwrap();

    assert!(service.get_list(groceries.id).unwrap().items.is_empty());
    let errands = service.get_list(errands.id).unwrap();
    assert_eq!(errands.items.len(), 1);
    assert_eq!(errands.items[0].description, "milk");
    assert!(errands.items[0].completed);
    assert_eq!(errands.items[0].id, moved.id);
}
