//! Drik Siddhanta calendar determination.
//!
//! This crate provides:
//! - Tithi at sunrise with kshaya/adhika handling
//! - Masa (Amanta lunar month) with adhika detection and Saka/Vikram years
//! - The composed `HinduDate` for a civil day
//! - Four regional solar calendars (Tamil, Bengali, Odia, Malayalam),
//!   Gregorian -> solar and back
//!
//! Every function is a pure function of the Gregorian date, the observer
//! location, and the calendar variant. Queries from different threads do
//! not interact.

pub mod error;
pub mod masa;
pub mod panchang;
pub mod phase;
pub mod solar;
pub mod solar_types;
pub mod tithi;

pub use error::PanchangaError;
pub use masa::{MasaInfo, masa_for_date, new_moon_after, new_moon_before, solar_rashi};
pub use panchang::{
    HinduDate, PanchangaDay, gregorian_to_hindu, jd_to_local_hms, month_panchanga,
};
pub use phase::{lunar_phase, sun_sidereal_longitude, sunrise_or_noon, tithi_at_moment};
pub use solar::{gregorian_to_solar, sankranti_jd, solar_to_gregorian};
pub use solar_types::{ALL_SOLAR_CALENDARS, SolarCalendar, SolarDate};
pub use tithi::{TithiInfo, tithi_at_sunrise};
