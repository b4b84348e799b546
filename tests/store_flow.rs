mod common;

use common::console_store;
use console_state::action::Action;
use console_state::domains::user;
use console_state::payload::Outcome;
use console_state::store;
use serde_json::json;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

#[test]
fn login_round_trip_through_store() {
    let (store, notifier) = console_store();

    store.dispatch(&Action::request("auth", "LOGIN"));
    assert!(store.snapshot().slice("auth").unwrap().loading());

    store.dispatch(&Action::response("auth", "LOGIN", Outcome::err(-2, "wrong password")));
    let auth = store.snapshot();
    let auth = auth.slice("auth").unwrap();
    assert!(!auth.loading());
    assert_eq!(auth.get("user"), Some(&json!(null)));
    assert_eq!(notifier.messages(), vec!["wrong password"]);

    store.dispatch(&Action::request("auth", "LOGIN"));
    store.dispatch(&Action::response("auth", "LOGIN", Outcome::ok(json!({ "id": 3 }))));
    let snapshot = store.snapshot();
    assert_eq!(snapshot.slice("auth").unwrap().get("user"), Some(&json!({ "id": 3 })));
    assert_eq!(notifier.count(), 1);
}

#[test]
fn user_list_paging_through_store() {
    let (store, _) = console_store();

    store.dispatch(&Action::request(user::DOMAIN, user::USERS));
    store.dispatch(&Action::page_list(
        user::DOMAIN,
        user::USERS,
        Outcome::ok(json!({ "users": { "list": [{ "id": 1 }], "page": 1 } })),
    ));
    // The page-list action carries no `_RES`, so the response closes loading.
    store.dispatch(&Action::response(user::DOMAIN, user::USERS, Outcome::ok(json!(null))));

    let snapshot = store.snapshot();
    let users = snapshot.slice(user::DOMAIN).unwrap();
    assert_eq!(users.get(user::USERS_KEY), Some(&json!([{ "id": 1 }])));
    assert_eq!(users.get("usersPage"), Some(&json!(1)));
    assert!(!users.loading());
}

#[test]
fn subscriber_can_dispatch_without_deadlock() {
    let (store, _) = console_store();
    let store = Arc::new(store);
    let weak = Arc::downgrade(&store);
    let fired = Arc::new(AtomicBool::new(false));
    let calls = Arc::new(AtomicUsize::new(0));

    let seen = Arc::clone(&calls);
    store.subscribe(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        if fired.swap(true, Ordering::SeqCst) {
            return;
        }
        if let Some(store) = weak.upgrade() {
            store.dispatch(&Action::response(
                "auth",
                "LOGIN",
                Outcome::ok(json!({ "id": 1 })),
            ));
        }
    });

    let (done, finished) = mpsc::channel();
    let worker = Arc::clone(&store);
    std::thread::spawn(move || {
        worker.dispatch(&Action::request("auth", "LOGIN"));
        let _ = done.send(());
    });

    finished
        .recv_timeout(Duration::from_secs(3))
        .expect("dispatch from a subscriber must not deadlock");

    let snapshot = store.snapshot();
    let auth = snapshot.slice("auth").unwrap();
    assert_eq!(auth.get("user"), Some(&json!({ "id": 1 })));
    assert!(!auth.loading());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn subscribers_see_latest_state_after_nested_dispatch() {
    let (store, _) = console_store();
    let store = Arc::new(store);
    let weak = Arc::downgrade(&store);
    let fired = Arc::new(AtomicBool::new(false));
    let last_loading = Arc::new(AtomicBool::new(true));

    // The first subscriber dispatches a response; the second must then see
    // loading cleared, even on the outer request's notification.
    store.subscribe(move |_| {
        if !fired.swap(true, Ordering::SeqCst) {
            if let Some(store) = weak.upgrade() {
                store.dispatch(&Action::response("auth", "LOGIN", Outcome::ok(json!(null))));
            }
        }
    });
    let observed = Arc::clone(&last_loading);
    store.subscribe(move |state| {
        let loading = state.slice("auth").map(|s| s.loading()).unwrap_or(true);
        observed.store(loading, Ordering::SeqCst);
    });

    store.dispatch(&Action::request("auth", "LOGIN"));
    assert!(!last_loading.load(Ordering::SeqCst));
}

#[test]
fn global_store_initializes_once() {
    assert_eq!(store::global().err(), Some(store::StoreError::NotInitialized));

    let (first, _) = console_store();
    let installed = store::init(first).expect("first init succeeds");
    installed.dispatch(&Action::request("auth", "LOGIN"));

    let (second, _) = console_store();
    assert_eq!(store::init(second).err(), Some(store::StoreError::AlreadyInitialized));

    let global = store::global().expect("initialized");
    assert!(global.snapshot().slice("auth").unwrap().loading());
}
