use std::collections::HashSet;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use std::{fs, thread};

use hunt_gate::db::UserStorage;

fn temp_database_url(tag: &str) -> (String, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "hunt-gate-{}-{}-{}.sqlite",
        tag,
        std::process::id(),
        nanos
    ));

    (format!("sqlite:{}", temp_path.display()), temp_path)
}

#[tokio::test]
async fn repeated_logins_keep_one_record_per_username() {
    let (url, temp_path) = temp_database_url("upsert");
    let storage = UserStorage::connect(&url).await.expect("connect failed");

    let first_id = storage
        .record_login("max1112", "TeamA", true)
        .await
        .expect("first login failed");
    let first = storage.list_all().await.expect("list failed");
    assert_eq!(first.len(), 1);

    thread::sleep(Duration::from_millis(10));

    let second_id = storage
        .record_login("max1112", "TeamB", true)
        .await
        .expect("second login failed");
    let second = storage.list_all().await.expect("list failed");

    assert_eq!(second_id, first_id);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].team_captain_entry, "TeamB");
    assert!(second[0].login_time > first[0].login_time);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn listing_orders_most_recent_login_first() {
    let (url, temp_path) = temp_database_url("ordering");
    let storage = UserStorage::connect(&url).await.expect("connect failed");

    for username in ["first", "second", "third"] {
        storage
            .record_login(username, "team", false)
            .await
            .expect("login failed");
        thread::sleep(Duration::from_millis(10));
    }

    let users = storage.list_all().await.expect("list failed");
    let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names, ["third", "second", "first"]);

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_logins_produce_one_record_each() {
    let (url, temp_path) = temp_database_url("concurrent");
    let storage = UserStorage::connect(&url).await.expect("connect failed");

    let mut tasks = tokio::task::JoinSet::new();
    for i in 0..24 {
        let storage = storage.clone();
        tasks.spawn(async move {
            storage
                .record_login(&format!("player{i}"), "team", false)
                .await
        });
    }
    while let Some(result) = tasks.join_next().await {
        result.expect("task panicked").expect("login failed");
    }

    let users = storage.list_all().await.expect("list failed");
    assert_eq!(users.len(), 24);

    let names: HashSet<&str> = users.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(names.len(), 24, "usernames were lost or duplicated");

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn find_by_id_returns_the_matching_record() {
    let (url, temp_path) = temp_database_url("find");
    let storage = UserStorage::connect(&url).await.expect("connect failed");

    let id = storage
        .record_login("ismp@esportz", "Hunters", false)
        .await
        .expect("login failed");

    let found = storage
        .find_by_id(id)
        .await
        .expect("lookup failed")
        .expect("record missing");
    assert_eq!(found.id, id);
    assert_eq!(found.username, "ismp@esportz");
    assert_eq!(found.team_captain_entry, "Hunters");
    assert!(!found.is_admin);

    let missing = storage.find_by_id(id + 1000).await.expect("lookup failed");
    assert!(missing.is_none());

    let _ = fs::remove_file(&temp_path);
}

#[tokio::test]
async fn connect_is_idempotent_and_keeps_existing_rows() {
    let (url, temp_path) = temp_database_url("reopen");

    {
        let storage = UserStorage::connect(&url).await.expect("connect failed");
        storage
            .record_login("max1112", "TeamA", true)
            .await
            .expect("login failed");
    }

    let reopened = UserStorage::connect(&url).await.expect("reconnect failed");
    let users = reopened.list_all().await.expect("list failed");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "max1112");

    let _ = fs::remove_file(&temp_path);
}
