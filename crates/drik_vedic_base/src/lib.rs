//! Base Vedic quantities for the drik panchanga engine.
//!
//! This crate provides:
//! - The Lahiri (Chitrapaksha) ayanamsha
//! - Sunrise/sunset for an observer location
//! - Rashi, tithi, paksha, and masa value types with their pure geometry
//!
//! The calendar decision layer (tithi-at-sunrise, masa determination, the
//! regional solar calendars) builds on these in `drik_panchanga`.

pub mod ayanamsha;
pub mod masa;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod util;

pub use ayanamsha::{LAHIRI_AYAN_T0, LAHIRI_T0, ayanamsha_deg};
pub use masa::{ALL_MASAS, Masa};
pub use rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};
pub use riseset::{sunrise, sunset};
pub use riseset_types::{Location, RiseSetResult};
pub use tithi::{
    Paksha, TITHI_SEGMENT_DEG, paksha_of, tithi_from_elongation, tithi_in_paksha, tithi_name,
};
pub use util::{normalize_360, normalize_pm180};
