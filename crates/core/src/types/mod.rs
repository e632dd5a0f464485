//! Core types for Marquee.
//!
//! Wire-level entities for the remote booking API plus type-safe ID wrappers.

pub mod booking;
pub mod deployment;
pub mod id;
pub mod movie;
pub mod user;

pub use booking::{Booking, NewBooking, Seats};
pub use deployment::DeploymentInfo;
pub use id::*;
pub use movie::{Movie, NewMovie};
pub use user::{NewUser, User};
