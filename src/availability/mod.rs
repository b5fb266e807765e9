//! Availability lookups against the Beds24 reservation API.
//!
//! Enforces the minimum stay before calling upstream, and never fails the
//! booking widget: an unconfigured property or an upstream error yields a
//! placeholder "available" quote instead.

pub mod client;
pub mod models;
pub mod routes;
pub mod services;

pub use client::{AvailabilityError, Beds24Client};
pub use models::{room_details, AvailabilityResult, RoomInfo, StayRequest, MIN_NIGHTS};
pub use routes::router;
pub use services::get_availability;
