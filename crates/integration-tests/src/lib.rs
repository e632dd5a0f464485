//! Integration test support for Marquee.
//!
//! Provides an in-process mock of the remote booking API gateway so the
//! dashboard's client, cache, and seeding flows can be driven end-to-end
//! without Docker or a real backend.
//!
//! # Example
//!
//! ```rust,ignore
//! let gateway = MockGateway::spawn().await;
//! let client = ApiClient::new(&gateway.base_url);
//!
//! seed_demo_data(&client).await;
//! assert_eq!(gateway.users().len(), 3);
//!
//! gateway.fail("bookings");
//! assert!(client.list_bookings().await.is_err());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use url::Url;

use marquee_core::{
    Booking, BookingId, DeploymentInfo, Movie, MovieId, NewBooking, NewMovie, NewUser, User,
    UserId,
};
use marquee_dashboard::config::DashboardConfig;
use marquee_dashboard::routes;
use marquee_dashboard::state::AppState;

/// Shared state behind the mock gateway.
#[derive(Clone, Default)]
struct MockState {
    inner: Arc<MockStateInner>,
}

#[derive(Default)]
struct MockStateInner {
    users: Mutex<Vec<User>>,
    movies: Mutex<Vec<Movie>>,
    bookings: Mutex<Vec<Booking>>,
    /// Resources currently answering every request with a non-JSON 500.
    failing: Mutex<HashSet<String>>,
    /// POST counts per resource, for idempotence assertions.
    post_counts: Mutex<HashMap<String, usize>>,
}

impl MockState {
    fn lock<'a, T>(&self, m: &'a Mutex<T>) -> MutexGuard<'a, T> {
        m.lock().expect("mock state lock")
    }

    fn is_failing(&self, resource: &str) -> bool {
        self.lock(&self.inner.failing).contains(resource)
    }

    fn count_post(&self, resource: &str) {
        *self
            .lock(&self.inner.post_counts)
            .entry(resource.to_owned())
            .or_insert(0) += 1;
    }
}

/// An in-process mock of the remote booking API gateway.
///
/// Collections start empty; ids are assigned as `u1`, `m1`, `b1`, ... in
/// insertion order, matching the gateway's role of being the id authority.
pub struct MockGateway {
    /// Base URL the gateway is listening on.
    pub base_url: Url,
    state: MockState,
}

impl MockGateway {
    /// Bind the mock gateway on an ephemeral port and start serving.
    pub async fn spawn() -> Self {
        let state = MockState::default();
        let app = gateway_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock gateway");
        let addr = listener.local_addr().expect("mock gateway addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock gateway serve");
        });

        Self {
            base_url: Url::parse(&format!("http://{addr}")).expect("mock gateway url"),
            state,
        }
    }

    /// Make a resource answer every request with a non-JSON 500 body.
    pub fn fail(&self, resource: &str) {
        self.state
            .lock(&self.state.inner.failing)
            .insert(resource.to_owned());
    }

    /// Undo [`Self::fail`].
    pub fn heal(&self, resource: &str) {
        self.state.lock(&self.state.inner.failing).remove(resource);
    }

    /// How many POSTs a resource has received since startup.
    #[must_use]
    pub fn post_count(&self, resource: &str) -> usize {
        self.state
            .lock(&self.state.inner.post_counts)
            .get(resource)
            .copied()
            .unwrap_or(0)
    }

    /// Current users collection.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state.lock(&self.state.inner.users).clone()
    }

    /// Current movies collection.
    #[must_use]
    pub fn movies(&self) -> Vec<Movie> {
        self.state.lock(&self.state.inner.movies).clone()
    }

    /// Current bookings collection.
    #[must_use]
    pub fn bookings(&self) -> Vec<Booking> {
        self.state.lock(&self.state.inner.bookings).clone()
    }

    /// Insert a booking row directly, bypassing `POST /bookings/`.
    ///
    /// Lets tests plant rows the creation path would never produce, such as
    /// legacy rows with a scalar seats value.
    pub fn insert_booking(&self, booking: Booking) {
        self.state.lock(&self.state.inner.bookings).push(booking);
    }
}

/// Spawn a dashboard instance pointed at the given gateway.
///
/// Returns the dashboard's base URL. Seeding is NOT run here; tests invoke
/// it explicitly when the scenario calls for it.
pub async fn spawn_dashboard(gateway_url: &Url) -> Url {
    let config = DashboardConfig {
        host: "127.0.0.1".parse().expect("loopback"),
        port: 0,
        api_base_url: gateway_url.clone(),
        skip_seed: true,
    };
    let state = AppState::new(config);
    let app = Router::new().merge(routes::routes()).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind dashboard");
    let addr = listener.local_addr().expect("dashboard addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("dashboard serve");
    });

    Url::parse(&format!("http://{addr}")).expect("dashboard url")
}

fn gateway_router(state: MockState) -> Router {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/movies/", get(list_movies).post(create_movie))
        .route("/bookings/", get(list_bookings).post(create_booking))
        .route("/deployment-status", get(deployment_status))
        .with_state(state)
}

fn failure() -> Response {
    // Deliberately not JSON so the client's parse step trips as well.
    (StatusCode::INTERNAL_SERVER_ERROR, "gateway exploded").into_response()
}

async fn list_users(State(state): State<MockState>) -> Response {
    if state.is_failing("users") {
        return failure();
    }
    Json(state.lock(&state.inner.users).clone()).into_response()
}

async fn create_user(State(state): State<MockState>, Json(payload): Json<NewUser>) -> Response {
    state.count_post("users");
    if state.is_failing("users") {
        return failure();
    }
    let mut users = state.lock(&state.inner.users);
    let user = User {
        id: UserId::new(format!("u{}", users.len() + 1)),
        name: payload.name,
        email: payload.email,
    };
    users.push(user.clone());
    (StatusCode::CREATED, Json(user)).into_response()
}

async fn list_movies(State(state): State<MockState>) -> Response {
    if state.is_failing("movies") {
        return failure();
    }
    Json(state.lock(&state.inner.movies).clone()).into_response()
}

async fn create_movie(State(state): State<MockState>, Json(payload): Json<NewMovie>) -> Response {
    state.count_post("movies");
    if state.is_failing("movies") {
        return failure();
    }
    let mut movies = state.lock(&state.inner.movies);
    let movie = Movie {
        id: MovieId::new(format!("m{}", movies.len() + 1)),
        title: payload.title,
        genre: payload.genre,
        year: payload.year,
        director: payload.director,
    };
    movies.push(movie.clone());
    (StatusCode::CREATED, Json(movie)).into_response()
}

async fn list_bookings(State(state): State<MockState>) -> Response {
    if state.is_failing("bookings") {
        return failure();
    }
    Json(state.lock(&state.inner.bookings).clone()).into_response()
}

async fn create_booking(
    State(state): State<MockState>,
    Json(payload): Json<NewBooking>,
) -> Response {
    state.count_post("bookings");
    if state.is_failing("bookings") {
        return failure();
    }
    let mut bookings = state.lock(&state.inner.bookings);
    let booking = Booking {
        id: Some(BookingId::new(format!("b{}", bookings.len() + 1))),
        user_id: payload.user_id,
        movie_id: payload.movie_id,
        seats: Some(payload.seats.into()),
        booking_date: None,
    };
    bookings.push(booking.clone());
    (StatusCode::CREATED, Json(booking)).into_response()
}

async fn deployment_status(State(state): State<MockState>) -> Response {
    if state.is_failing("deployment-status") {
        return failure();
    }
    let services = vec![
        DeploymentInfo {
            service: "user-service".to_owned(),
            icon: "👤".to_owned(),
            platform: "Docker Compose".to_owned(),
            environment: "local".to_owned(),
            container_id: Some("c0ffee".to_owned()),
            port: "8081".to_owned(),
            last_checked: "2024-01-01 12:00:00".to_owned(),
            status: "운영중".to_owned(),
        },
        DeploymentInfo {
            service: "movie-service".to_owned(),
            icon: "🎥".to_owned(),
            platform: "Docker Compose".to_owned(),
            environment: "local".to_owned(),
            container_id: None,
            port: "8082".to_owned(),
            last_checked: "2024-01-01 12:00:00".to_owned(),
            status: "중지됨".to_owned(),
        },
    ];
    Json(services).into_response()
}
