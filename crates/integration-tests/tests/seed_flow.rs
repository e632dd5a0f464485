//! Seeding behavior against a live (mock) gateway.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use marquee_core::NewUser;
use marquee_dashboard::api::ApiClient;
use marquee_dashboard::seed::seed_demo_data;
use marquee_integration_tests::MockGateway;

#[tokio::test]
async fn seeding_empty_store_creates_three_users_and_three_movies() {
    let gateway = MockGateway::spawn().await;
    let client = ApiClient::new(&gateway.base_url);

    seed_demo_data(&client).await;

    let users = gateway.users();
    let movies = gateway.movies();
    assert_eq!(users.len(), 3);
    assert_eq!(movies.len(), 3);

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["김영희", "이철수", "박민수"]);

    let titles: Vec<&str> = movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["어벤져스: 엔드게임", "기생충", "탑건: 매버릭"]);
}

#[tokio::test]
async fn second_seeding_pass_performs_zero_writes() {
    let gateway = MockGateway::spawn().await;
    let client = ApiClient::new(&gateway.base_url);

    seed_demo_data(&client).await;
    assert_eq!(gateway.post_count("users"), 3);
    assert_eq!(gateway.post_count("movies"), 3);

    // Both collections are now populated, so the guard fires.
    seed_demo_data(&client).await;
    assert_eq!(gateway.post_count("users"), 3);
    assert_eq!(gateway.post_count("movies"), 3);
}

#[tokio::test]
async fn partially_populated_store_is_reseeded_in_full() {
    let gateway = MockGateway::spawn().await;
    let client = ApiClient::new(&gateway.base_url);

    // One user exists but no movies: the guard only skips when BOTH
    // collections are populated, so the whole pass runs again and the
    // users collection picks up duplicates. Documented behavior.
    client
        .create_user(&NewUser {
            name: "기존사용자".to_owned(),
            email: "existing@example.com".to_owned(),
        })
        .await
        .expect("precondition user");

    seed_demo_data(&client).await;

    assert_eq!(gateway.users().len(), 4);
    assert_eq!(gateway.movies().len(), 3);
}

#[tokio::test]
async fn seed_failures_do_not_abort_remaining_inserts() {
    let gateway = MockGateway::spawn().await;
    let client = ApiClient::new(&gateway.base_url);

    // Every user insert fails, yet all three are attempted and the movie
    // inserts still run afterwards.
    gateway.fail("users");
    seed_demo_data(&client).await;

    assert_eq!(gateway.post_count("users"), 3);
    assert!(gateway.users().is_empty());
    assert_eq!(gateway.movies().len(), 3);
}
