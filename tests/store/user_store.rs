use usersapp::store::{StoreError, User, UserStore};

fn names(store: &UserStore) -> Vec<&str> {
    store.iter().map(User::name).collect()
}

#[test]
fn invalid_users_leave_store_unchanged() {
    let mut store = UserStore::new();

    assert_eq!(store.add(User::new("", 5.0)), Err(StoreError::InvalidName));
    assert_eq!(store.add(User::new("A", 0.0)), Err(StoreError::InvalidAge));
    assert!(store.is_empty());
}

#[test]
fn added_user_is_listed_exactly_once() {
    let mut store = UserStore::new();
    let ann = User::new("Ann", 30.0);

    store.add(ann.clone()).unwrap();

    assert_eq!(store.list(), &[ann]);
}

#[test]
fn list_preserves_insertion_order() {
    let mut store = UserStore::new();
    for (name, age) in [("Cid", 3.0), ("Ann", 30.0), ("Bob", 40.0)] {
        store.add(User::new(name, age)).unwrap();
    }

    assert_eq!(names(&store), vec!["Cid", "Ann", "Bob"]);
}

#[test]
fn duplicate_names_coexist_and_find_returns_first() {
    let mut store = UserStore::new();
    store.add(User::new("Ann", 30.0)).unwrap();
    store.add(User::new("Ann", 50.0)).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.find("Ann").map(User::age), Some(30.0));
    assert!(store.find("ann").is_none());
}

#[test]
fn remove_is_idempotent_failure_once_empty() {
    let mut store = UserStore::new();
    store.add(User::new("Ann", 30.0)).unwrap();

    assert_eq!(store.remove("Ann"), Ok(1));
    assert!(store.is_empty());
    assert_eq!(store.remove("Ann"), Err(StoreError::NotFound("Ann".into())));
    assert!(store.is_empty());
}

#[test]
fn remove_drops_every_match_and_keeps_order() {
    let mut store = UserStore::new();
    for (name, age) in [("Ann", 1.0), ("Bob", 2.0), ("Ann", 3.0), ("Cid", 4.0)] {
        store.add(User::new(name, age)).unwrap();
    }

    assert_eq!(store.remove("Ann"), Ok(2));
    assert_eq!(names(&store), vec!["Bob", "Cid"]);
}

#[test]
fn edit_overwrites_first_match_in_place() {
    let mut store = UserStore::new();
    store.add(User::new("Ann", 30.0)).unwrap();
    store.add(User::new("Ann", 50.0)).unwrap();

    store.edit("Ann", User::new("Anna", 31.0)).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(
        store.list(),
        &[User::new("Anna", 31.0), User::new("Ann", 50.0)]
    );
}

#[test]
fn edit_of_missing_user_is_not_found() {
    let mut store = UserStore::new();
    store.add(User::new("Bob", 40.0)).unwrap();

    assert_eq!(
        store.edit("Ann", User::new("Anna", 31.0)),
        Err(StoreError::NotFound("Ann".into()))
    );
    assert_eq!(store.list(), &[User::new("Bob", 40.0)]);
}
