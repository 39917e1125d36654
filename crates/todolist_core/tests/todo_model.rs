use todolist_core::{TodoItem, TodoList};

#[test]
fn item_new_sets_defaults() {
    let item = TodoItem::new(7, "walk dog");
    assert_eq!(item.id, 7);
    assert_eq!(item.description, "walk dog");
    assert!(!item.completed);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut list = TodoList::new(2, "Errands");
    let mut item = TodoItem::new(1, "milk");
    item.completed = true;
    list.items.push(item);

    let json = serde_json::to_value(&list).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 2,
            "name": "Errands",
            "items": [{ "itemId": 1, "description": "milk", "completed": true }]
        })
    );

    let decoded: TodoList = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, list);
}
