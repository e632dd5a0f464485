//! View cache refresh semantics against a live (mock) gateway.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use marquee_dashboard::api::ApiClient;
use marquee_dashboard::cache::ViewCache;
use marquee_dashboard::seed::seed_demo_data;
use marquee_integration_tests::MockGateway;

#[tokio::test]
async fn failed_refresh_leaves_all_snapshots_untouched() {
    let gateway = MockGateway::spawn().await;
    let client = ApiClient::new(&gateway.base_url);
    let cache = ViewCache::new();

    seed_demo_data(&client).await;
    cache.refresh_users(&client).await.expect("users");
    cache.refresh_movies(&client).await.expect("movies");
    cache.refresh_bookings(&client).await.expect("bookings");

    let users_before = cache.users();
    let movies_before = cache.movies();
    let bookings_before = cache.bookings();

    gateway.fail("bookings");
    assert!(cache.refresh_bookings(&client).await.is_err());

    // The failed slot keeps its previous snapshot and the other two are
    // untouched.
    assert_eq!(cache.users(), users_before);
    assert_eq!(cache.movies(), movies_before);
    assert_eq!(cache.bookings(), bookings_before);

    // Healthy slots keep refreshing while one resource is down.
    gateway.heal("bookings");
    cache.refresh_users(&client).await.expect("users again");
}

#[tokio::test]
async fn refresh_replaces_slot_with_latest_remote_snapshot() {
    let gateway = MockGateway::spawn().await;
    let client = ApiClient::new(&gateway.base_url);
    let cache = ViewCache::new();

    seed_demo_data(&client).await;
    cache.refresh_users(&client).await.expect("users");
    assert_eq!(cache.users().len(), 3);

    client
        .create_user(&marquee_core::NewUser {
            name: "네번째".to_owned(),
            email: "fourth@example.com".to_owned(),
        })
        .await
        .expect("extra user");

    // Until the next refresh the old snapshot stays visible.
    assert_eq!(cache.users().len(), 3);
    cache.refresh_users(&client).await.expect("users again");
    assert_eq!(cache.users().len(), 4);
}
