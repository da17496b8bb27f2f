use todo_core::{StatusTransitionError, TodoItem, TodoItemId, TodoListId, TodoStatus, UserId};

fn item(status: TodoStatus) -> TodoItem {
    TodoItem {
        id: TodoItemId::parse("tdo_23456789ABCDEFGHJKLMNP").unwrap(),
        list_id: TodoListId::parse("lst_23456789ABCDEFGHJKLMNP").unwrap(),
        user_id: UserId::parse("usr_23456789ABCDEFGHJKLMNP").unwrap(),
        description: "fake description".to_string(),
        status,
        updated_at: 1_609_459_200_000,
    }
}

#[test]
fn allowed_transitions_update_status_only() {
    let cases = [
        (TodoStatus::Todo, "ongoing", TodoStatus::Ongoing),
        (TodoStatus::Ongoing, "done", TodoStatus::Done),
        (TodoStatus::Done, "ongoing", TodoStatus::Ongoing),
        (TodoStatus::Ongoing, "todo", TodoStatus::Todo),
    ];

    for (from, requested, expected) in cases {
        let mut todo = item(from);
        todo.change_status(requested)
            .unwrap_or_else(|err| panic!("{from} -> {requested} should pass: {err}"));
        assert_eq!(todo.status, expected);
        assert_eq!(todo.updated_at, 1_609_459_200_000);
    }
}

#[test]
fn rejected_transitions_carry_pair_and_leave_item_untouched() {
    let cases = [
        (TodoStatus::Todo, "done"),
        (TodoStatus::Done, "todo"),
        (TodoStatus::Todo, "invalid"),
        (TodoStatus::Todo, "todo"),
        (TodoStatus::Ongoing, "ongoing"),
        (TodoStatus::Done, "done"),
        (TodoStatus::Ongoing, "DONE"),
    ];

    for (from, requested) in cases {
        let mut todo = item(from);
        let before = todo.clone();
        let err = todo.change_status(requested).unwrap_err();

        assert_eq!(
            err,
            StatusTransitionError {
                from,
                to: requested.to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            format!("invalid status transition from {from} to {requested}")
        );
        assert_eq!(todo, before);
    }
}

#[test]
fn typed_transition_matches_string_transition() {
    let mut todo = item(TodoStatus::Todo);
    assert!(todo.transition_to(TodoStatus::Done).is_err());
    todo.transition_to(TodoStatus::Ongoing).unwrap();
    todo.transition_to(TodoStatus::Done).unwrap();
    assert_eq!(todo.status, TodoStatus::Done);
}

#[test]
fn full_cycle_returns_to_todo() {
    let mut todo = item(TodoStatus::Todo);
    for step in ["ongoing", "done", "ongoing", "todo"] {
        todo.change_status(step).unwrap();
    }
    assert_eq!(todo.status, TodoStatus::Todo);
}
