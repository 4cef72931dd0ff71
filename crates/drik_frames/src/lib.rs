//! Frame rotations for the drik panchanga engine.
//!
//! This crate provides:
//! - IAU 1980 nutation (13 principal terms)
//! - Mean obliquity: Laskar series and the IAU 1976 cubic
//! - IAU 1976 equatorial precession for the ayanamsha chain
//!
//! All functions are pure; inputs are Julian centuries of TT since J2000.0
//! unless a Julian Date is named explicitly.

pub mod nutation;
pub mod obliquity;
pub mod precession;

pub use nutation::{fundamental_arguments, nutation_iau1980};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_iau1976_deg, mean_obliquity_laskar_deg};
pub use precession::{
    equatorial_to_ecliptic, precess_from_j2000, precess_to_j2000, precession_angles_iau1976,
};
