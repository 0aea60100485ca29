use rstest::{fixture, rstest};
use todolist_core::{Filterable, ListError, Sequence, Todo, TodoList};

struct Today {
    todos: Vec<Todo>,
    list: TodoList,
}

#[fixture]
fn today() -> Today {
    let todos = vec![
        Todo::new("Buy milk"),
        Todo::new("Clean room"),
        Todo::new("Go to gym"),
    ];
    let mut list = TodoList::new("Today's Todos");
    for todo in &todos {
        list.add(todo.clone());
    }
    Today { todos, list }
}

fn assert_same_sequence(actual: &[Todo], expected: &[Todo]) {
    assert_eq!(actual.len(), expected.len());
    for (left, right) in actual.iter().zip(expected) {
        assert!(left.same_as(right), "expected `{right}`, got `{left}`");
    }
}

#[rstest]
fn to_vec_returns_todos_in_insertion_order(today: Today) {
    assert_same_sequence(&today.list.to_vec(), &today.todos);
}

#[rstest]
fn len_counts_todos(today: Today) {
    assert_eq!(today.list.len(), 3);
    assert!(!today.list.is_empty());
}

#[rstest]
fn first_and_last(today: Today) {
    assert!(today.list.first().unwrap().same_as(&today.todos[0]));
    assert!(today.list.last().unwrap().same_as(&today.todos[2]));
}

#[rstest]
fn shift_removes_first(mut today: Today) {
    let shifted = today.list.shift().unwrap();
    assert!(shifted.same_as(&today.todos[0]));
    assert_same_sequence(&today.list.to_vec(), &today.todos[1..]);
}

#[rstest]
fn pop_removes_last(mut today: Today) {
    let popped = today.list.pop().unwrap();
    assert!(popped.same_as(&today.todos[2]));
    assert_same_sequence(&today.list.to_vec(), &today.todos[..2]);
}

#[rstest]
fn list_is_not_done_while_todos_are_open(today: Today) {
    assert!(!today.list.is_done());
}

#[rstest]
#[case::one(1)]
#[case::negative(-42)]
fn try_add_rejects_numbers(mut today: Today, #[case] value: i32) {
    let err = today.list.try_add(value).unwrap_err();
    assert_eq!(
        err,
        ListError::TypeMismatch {
            expected: std::any::type_name::<Todo>(),
            found: "i32",
        }
    );
    assert_eq!(today.list.len(), 3);
}

#[rstest]
fn try_add_rejects_text(mut today: Today) {
    let err = today.list.try_add("string").unwrap_err();
    assert!(matches!(
        err,
        ListError::TypeMismatch { found, .. } if found.contains("str")
    ));

    let err = today.list.try_add(String::from("string")).unwrap_err();
    assert!(matches!(err, ListError::TypeMismatch { .. }));
    assert_eq!(today.list.len(), 3);
}

#[rstest]
fn try_add_accepts_todos(mut today: Today) {
    let trash = Todo::new("Take out trash");
    today.list.try_add(trash.clone()).unwrap();
    assert!(today.list.last().unwrap().same_as(&trash));
}

#[rstest]
fn add_appends_and_chains(mut today: Today) {
    let trash = Todo::new("Take out trash");
    let dishes = Todo::new("Do dishes");
    today.todos.push(trash.clone());
    today.todos.push(dishes.clone());

    today.list.add(trash).add(dishes);
    assert_same_sequence(&today.list.to_vec(), &today.todos);
}

#[rstest]
fn shovel_operators_append(mut today: Today) {
    let trash = Todo::new("Take out trash");
    let dishes = Todo::new("Do dishes");
    let laundry = Todo::new("Laundry");
    today.todos.push(trash.clone());
    today.todos.push(dishes.clone());
    today.todos.push(laundry.clone());

    today.list <<= trash;
    let _ = &mut today.list << dishes << laundry;
    assert_same_sequence(&today.list.to_vec(), &today.todos);
}

#[rstest]
fn item_at(today: Today) {
    assert_eq!(
        today.list.item_at(3).unwrap_err(),
        ListError::OutOfRange { index: 3, len: 3 }
    );
    assert!(today.list.item_at(0).unwrap().same_as(&today.todos[0]));
}

#[rstest]
fn mark_done_at(today: Today) {
    assert!(matches!(
        today.list.mark_done_at(3),
        Err(ListError::OutOfRange { .. })
    ));

    today.list.mark_done_at(0).unwrap();
    assert!(today.todos[0].is_done());
    assert!(!today.todos[1].is_done());
    assert!(!today.todos[2].is_done());
}

#[rstest]
fn mark_undone_at(today: Today) {
    assert!(matches!(
        today.list.mark_undone_at(3),
        Err(ListError::OutOfRange { .. })
    ));
    today.todos.iter().for_each(Todo::mark_done);

    today.list.mark_undone_at(1).unwrap();
    assert!(today.todos[0].is_done());
    assert!(!today.todos[1].is_done());
    assert!(today.todos[2].is_done());
}

#[rstest]
fn remove_at(mut today: Today) {
    assert!(matches!(
        today.list.remove_at(3),
        Err(ListError::OutOfRange { .. })
    ));

    let removed = today.list.remove_at(1).unwrap();
    assert!(removed.same_as(&today.todos[1]));
    assert_same_sequence(
        &today.list.to_vec(),
        &[today.todos[0].clone(), today.todos[2].clone()],
    );
}

#[rstest]
fn each_visits_in_order(today: Today) {
    let mut visited = Vec::new();
    today.list.each(|todo| visited.push(todo.clone()));
    assert_same_sequence(&visited, &today.todos);
}

#[rstest]
fn each_returns_the_same_list(today: Today) {
    let returned = today.list.each(|_| {});
    assert!(std::ptr::eq(returned, &today.list));
}

#[rstest]
fn select_keeps_title_and_matching_todos(today: Today) {
    today.todos[0].mark_done();
    let mut expected = TodoList::new(today.list.title());
    expected.add(today.todos[0].clone());

    let selected = today.list.select(Todo::is_done);
    assert_eq!(selected.title(), today.list.title());
    assert_eq!(selected.to_string(), expected.to_string());
    assert_eq!(selected, expected);
    assert_eq!(today.list.len(), 3);
}

#[rstest]
fn all_done(today: Today) {
    today.todos[1].mark_done();
    assert_same_sequence(&today.list.all_done().to_vec(), &today.todos[1..2]);
}

#[rstest]
fn all_not_done(today: Today) {
    today.todos[1].mark_done();
    assert_same_sequence(
        &today.list.all_not_done().to_vec(),
        &[today.todos[0].clone(), today.todos[2].clone()],
    );
}

#[rstest]
fn find_by_title(today: Today) {
    assert!(today
        .list
        .find_by_title("Clean room")
        .unwrap()
        .same_as(&today.todos[1]));
    assert!(today.list.find_by_title("Learn French").is_none());
}

#[rstest]
fn find_by_title_returns_first_match(mut today: Today) {
    let duplicate = Todo::new("Clean room");
    today.list.add(duplicate.clone());

    let found = today.list.find_by_title("Clean room").unwrap();
    assert!(found.same_as(&today.todos[1]));
    assert!(!found.same_as(&duplicate));
}

#[rstest]
fn mark_done_by_description(today: Today) {
    assert!(today.list.mark_done("Clean room"));
    assert!(today.todos[1].is_done());

    assert!(!today.list.mark_done("Learn French"));
    assert!(!today.todos[0].is_done());
    assert!(!today.todos[2].is_done());
}

#[rstest]
fn mark_all_done(today: Today) {
    today.list.mark_all_done();
    assert!(today.todos.iter().all(Todo::is_done));
    assert!(today.list.is_done());
}

#[rstest]
fn mark_all_undone(today: Today) {
    today.todos[0].mark_done();
    today.todos[1].mark_done();

    today.list.mark_all_undone();
    assert!(today.todos.iter().all(|todo| !todo.is_done()));
    assert!(!today.list.is_done());
}

#[rstest]
fn to_vec_is_a_snapshot(today: Today) {
    let mut snapshot = today.list.to_vec();
    snapshot.clear();
    assert_eq!(today.list.len(), 3);

    let snapshot = today.list.to_vec();
    snapshot[0].mark_done();
    assert!(today.list.item_at(0).unwrap().is_done());
}

#[rstest]
fn for_loop_and_sequence_iter_agree(today: Today) {
    let by_loop: Vec<Todo> = (&today.list).into_iter().cloned().collect();
    let by_iter: Vec<Todo> = today.list.iter().cloned().collect();
    assert_same_sequence(&by_loop, &by_iter);
    assert!(today.list.get(2).unwrap().same_as(&today.todos[2]));
    assert!(today.list.get(3).is_none());
}

#[rstest]
fn extend_appends_in_order(mut today: Today) {
    let extra = vec![Todo::new("Read"), Todo::new("Sleep")];
    today.todos.extend(extra.iter().cloned());

    today.list.extend(extra);
    assert_same_sequence(&today.list.to_vec(), &today.todos);
}

#[rstest]
fn lists_compare_by_title_and_values(today: Today) {
    let mut copy = TodoList::new("Today's Todos");
    copy.extend(["Buy milk", "Clean room", "Go to gym"].map(Todo::new));
    assert_eq!(copy, today.list);

    copy.mark_done_at(2).unwrap();
    assert_ne!(copy, today.list);

    assert_ne!(TodoList::new("Tomorrow"), TodoList::new("Today's Todos"));
}

#[test]
fn empty_list_policy() {
    let mut list = TodoList::new("Nothing");

    assert!(list.is_empty());
    assert!(list.first().is_none());
    assert!(list.last().is_none());
    assert!(list.shift().is_none());
    assert!(list.pop().is_none());
    assert!(list.is_done());
    assert!(matches!(
        list.item_at(0),
        Err(ListError::OutOfRange { index: 0, len: 0 })
    ));
    assert_eq!(list.to_string(), "---- Nothing ----");
}
