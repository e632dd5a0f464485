//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. The remote store
//! assigns ids and their format is opaque to this client, so the wrappers
//! hold the raw string unchanged.

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>` and `From<&str>` implementations
/// - A `Display` implementation printing the raw id
///
/// # Example
///
/// ```rust
/// # use marquee_core::define_id;
/// define_id!(UserId);
/// define_id!(MovieId);
///
/// let user_id = UserId::new("u1");
/// let movie_id = MovieId::new("m1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = movie_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying id string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the raw id.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(UserId);
define_id!(MovieId);
define_id!(BookingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_is_raw_string() {
        let id = UserId::new("user-42");
        assert_eq!(id.to_string(), "user-42");
        assert_eq!(id.as_str(), "user-42");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = MovieId::new("m1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"m1\"");

        let back: MovieId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Equality only compiles within one id type; the macro gives each
        // entity its own wrapper.
        let a = BookingId::new("b1");
        let b = BookingId::from("b1");
        assert_eq!(a, b);
    }
}
