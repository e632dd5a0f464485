//! One-time demo data seeding.
//!
//! Runs at startup, before the server starts answering requests, and is also
//! exposed through `marquee-cli seed`. Seeding is best-effort, not
//! transactional: individual create failures are logged and skipped so a
//! half-reachable backend still ends up with as much demo data as possible.

use marquee_core::{NewMovie, NewUser};
use tracing::{info, warn};

use crate::api::ApiClient;

/// The fixed demo users inserted on first run.
fn demo_users() -> Vec<NewUser> {
    vec![
        NewUser {
            name: "김영희".to_owned(),
            email: "kim@example.com".to_owned(),
        },
        NewUser {
            name: "이철수".to_owned(),
            email: "lee@example.com".to_owned(),
        },
        NewUser {
            name: "박민수".to_owned(),
            email: "park@example.com".to_owned(),
        },
    ]
}

/// The fixed demo movies inserted on first run.
fn demo_movies() -> Vec<NewMovie> {
    vec![
        NewMovie {
            title: "어벤져스: 엔드게임".to_owned(),
            genre: "액션".to_owned(),
            year: Some(2019),
            director: None,
        },
        NewMovie {
            title: "기생충".to_owned(),
            genre: "드라마".to_owned(),
            year: Some(2019),
            director: None,
        },
        NewMovie {
            title: "탑건: 매버릭".to_owned(),
            genre: "액션".to_owned(),
            year: Some(2022),
            director: None,
        },
    ]
}

/// Seed the remote store with demo users and movies, exactly once.
///
/// The guard fetches both collections first and skips the whole pass when
/// BOTH are already populated. When only one of the two is populated,
/// seeding still runs in full for both collections, which can duplicate the
/// populated collection's counterpart - documented behavior inherited from
/// the original demo, kept as-is rather than silently fixed.
///
/// If the existence check itself fails the pass proceeds to seeding: better
/// to risk duplicates than to leave an empty demo.
pub async fn seed_demo_data(client: &ApiClient) {
    match existing_data_present(client).await {
        Ok(true) => {
            info!("Demo data already present, skipping seeding");
            return;
        }
        Ok(false) => {}
        Err(e) => {
            warn!(error = %e, "Existence check failed, seeding anyway");
        }
    }

    let mut created = 0usize;

    for user in demo_users() {
        match client.create_user(&user).await {
            Ok(_) => created += 1,
            Err(e) => warn!(name = %user.name, error = %e, "Failed to seed user"),
        }
    }

    for movie in demo_movies() {
        match client.create_movie(&movie).await {
            Ok(_) => created += 1,
            Err(e) => warn!(title = %movie.title, error = %e, "Failed to seed movie"),
        }
    }

    info!(created, "Demo data seeding finished");
}

/// The skip guard: true only when BOTH users and movies are non-empty.
async fn existing_data_present(client: &ApiClient) -> Result<bool, crate::api::ApiError> {
    let users = client.list_users().await?;
    let movies = client.list_movies().await?;
    Ok(!users.is_empty() && !movies.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_shape() {
        let users = demo_users();
        let movies = demo_movies();
        assert_eq!(users.len(), 3);
        assert_eq!(movies.len(), 3);
        assert_eq!(users.first().map(|u| u.name.as_str()), Some("김영희"));
        assert_eq!(
            movies.first().map(|m| m.title.as_str()),
            Some("어벤져스: 엔드게임")
        );
    }

    #[test]
    fn test_demo_movies_carry_year_not_director() {
        for movie in demo_movies() {
            assert!(movie.year.is_some());
            assert!(movie.director.is_none());
        }
    }
}
