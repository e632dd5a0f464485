//! Movie entity and creation payload.

use serde::{Deserialize, Serialize};

use super::id::MovieId;

/// A movie, as served by `GET /movies/`.
///
/// Read-only from the client; the remote catalogue is the source of truth.
/// Depending on which service populated the row, a movie carries a release
/// `year`, a `director`, or both - absent fields are omitted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

/// Payload for `POST /movies/`.
///
/// Only the seeding path creates movies from this client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub genre: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_without_director() {
        let json = r#"{"id":"m1","title":"기생충","genre":"드라마","year":2019}"#;
        let movie: Movie = serde_json::from_str(json).expect("deserialize");
        assert_eq!(movie.year, Some(2019));
        assert_eq!(movie.director, None);
    }

    #[test]
    fn test_movie_with_director_only() {
        let json = r#"{"id":"m2","title":"올드보이","genre":"스릴러","director":"박찬욱"}"#;
        let movie: Movie = serde_json::from_str(json).expect("deserialize");
        assert_eq!(movie.year, None);
        assert_eq!(movie.director.as_deref(), Some("박찬욱"));
    }

    #[test]
    fn test_new_movie_skips_absent_fields() {
        let payload = NewMovie {
            title: "탑건: 매버릭".to_owned(),
            genre: "액션".to_owned(),
            year: Some(2022),
            director: None,
        };
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["year"], 2022);
        assert!(json.get("director").is_none());
    }
}
