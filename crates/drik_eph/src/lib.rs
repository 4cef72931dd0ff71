//! Self-contained Sun and Moon ephemeris for the drik panchanga engine.
//!
//! This crate provides:
//! - Apparent solar longitude, declination, and right ascension (VSOP87)
//! - Apparent lunar longitude (Moshier DE404-fitted theory)
//! - The Earth-Sun radius vector
//!
//! Every function takes a Julian Date in UT and applies Delta-T internally.
//! There is no module-level state and no caching: two threads can query
//! any mix of instants concurrently.

pub mod moon;
pub mod sun;

pub use moon::lunar_longitude;
pub use sun::{earth_radius_vector, solar_declination, solar_longitude, solar_ra};
