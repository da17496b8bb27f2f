use todo_core::{TodoItem, TodoStatus, User};

#[test]
fn todo_item_uses_expected_wire_fields() {
    let value = serde_json::json!({
        "id": "tdo_23456789ABCDEFGHJKLMNP",
        "list_id": "lst_23456789ABCDEFGHJKLMNP",
        "user_id": "usr_23456789ABCDEFGHJKLMNP",
        "description": "buy milk",
        "status": "ongoing",
        "updated_at": 1_700_000_000_000_i64
    });

    let item: TodoItem = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(item.status, TodoStatus::Ongoing);
    assert_eq!(item.description, "buy milk");
    assert_eq!(serde_json::to_value(&item).unwrap(), value);
}

#[test]
fn deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": "tdo_23456789ABCDEFGHJKLMNP",
        "list_id": "lst_23456789ABCDEFGHJKLMNP",
        "user_id": "usr_23456789ABCDEFGHJKLMNP",
        "description": "buy milk",
        "status": "blocked",
        "updated_at": 0
    });

    assert!(serde_json::from_value::<TodoItem>(value).is_err());
}

#[test]
fn deserialize_rejects_mismatched_id_prefix() {
    let value = serde_json::json!({
        "id": "lst_23456789ABCDEFGHJKLMNP",
        "name": "Ada"
    });

    let err = serde_json::from_value::<User>(value).unwrap_err();
    assert!(err.to_string().contains("invalid user id"), "{err}");
}
