//! Mean sidereal time at Greenwich.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed.), chapter 12. The rise/set
//! module turns this into apparent sidereal time by adding the equation of
//! the equinoxes.

use crate::julian::J2000_JD;

/// Normalize an angle in degrees to [0, 360).
fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Mean sidereal time at Greenwich at 0h UT, in degrees.
///
/// `jd_0h` must be a Julian Date ending in .5 (0h UT); fractional input is
/// accepted but the polynomial is calibrated for midnight epochs.
pub fn mean_sidereal_time_0h_deg(jd_0h: f64) -> f64 {
    let t = (jd_0h - J2000_JD) / 36_525.0;
    let t2 = t * t;
    let theta = 100.460_618_37 + 36_000.770_053_608 * t + 0.000_387_933 * t2
        - t2 * t / 38_710_000.0;
    normalize_360(theta)
}

/// Advance of sidereal time per fraction of a UT day, in degrees.
pub const SIDEREAL_DEG_PER_DAY_FRACTION: f64 = 360.985_647;
