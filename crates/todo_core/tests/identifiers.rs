use std::collections::HashSet;
use todo_core::validation::{is_valid_id, ID_ALPHABET, ID_TOKEN_LEN};
use todo_core::{
    IdFormatError, IdGenerator, IdKind, RandomIdGenerator, SequentialIdGenerator, TodoItemId,
    TodoListId, UserId,
};

const ALL_KINDS: [IdKind; 4] = [
    IdKind::User,
    IdKind::AccessToken,
    IdKind::TodoList,
    IdKind::TodoItem,
];

#[test]
fn random_ids_match_prefix_and_alphabet() {
    let ids = RandomIdGenerator;
    for kind in ALL_KINDS {
        for _ in 0..200 {
            let id = ids.generate(kind);
            let (prefix, token) = id.split_once('_').unwrap();
            assert_eq!(prefix, kind.prefix());
            assert_eq!(token.len(), ID_TOKEN_LEN);
            assert!(token.chars().all(|symbol| ID_ALPHABET.contains(symbol)));
            assert!(is_valid_id(kind, &id), "{id} should be valid");
        }
    }
}

#[test]
fn random_ids_do_not_collide() {
    let ids = RandomIdGenerator;
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(ids.generate(IdKind::TodoItem)));
    }
}

#[test]
fn sequential_ids_are_valid_and_distinct() {
    let ids = SequentialIdGenerator::new();
    let first = ids.generate(IdKind::User);
    let second = ids.generate(IdKind::User);
    assert_ne!(first, second);
    assert!(is_valid_id(IdKind::User, &first));
    assert!(is_valid_id(IdKind::User, &second));
}

#[test]
fn typed_ids_reject_other_namespaces() {
    let list_id = RandomIdGenerator.generate(IdKind::TodoList);

    assert!(TodoListId::parse(&list_id).is_ok());
    assert_eq!(
        TodoItemId::parse(&list_id).unwrap_err(),
        IdFormatError::new(IdKind::TodoItem, list_id.clone())
    );
    assert!(UserId::parse(&list_id).is_err());
}

#[test]
fn typed_ids_validate_on_deserialize() {
    let user_id = RandomIdGenerator.generate(IdKind::User);
    let parsed: UserId = serde_json::from_value(serde_json::json!(user_id)).unwrap();
    assert_eq!(parsed.as_str(), user_id);
    assert_eq!(serde_json::to_value(&parsed).unwrap(), serde_json::json!(user_id));

    let err = serde_json::from_value::<UserId>(serde_json::json!("usr_short")).unwrap_err();
    assert!(err.to_string().contains("invalid user id"), "{err}");
}
