//! Time foundations for the drik panchanga engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions and ISO weekday
//! - Delta-T (TT − UT) from a yearly table with long-term extrapolation
//! - Mean sidereal time at Greenwich
//!
//! Everything here is a pure function of its arguments; there is no state.

pub mod delta_t;
pub mod julian;
pub mod sidereal;

pub use delta_t::{delta_t_days, delta_t_seconds};
pub use julian::{J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, jd_to_ymd, weekday};
pub use sidereal::{SIDEREAL_DEG_PER_DAY_FRACTION, mean_sidereal_time_0h_deg};

/// Convert a Julian Date in TT to Julian centuries since J2000.0.
pub fn jd_tt_to_centuries(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36_525.0
}

/// Convert a Julian Date in UT to TT using the Delta-T model.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_days(jd_ut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(jd_tt_to_centuries(J2000_JD), 0.0);
    }

    #[test]
    fn tt_exceeds_ut_in_modern_era() {
        let jd_ut = calendar_to_jd(2020, 6, 1.0);
        let jd_tt = jd_ut_to_tt(jd_ut);
        let dt_s = (jd_tt - jd_ut) * SECONDS_PER_DAY;
        assert!(dt_s > 60.0 && dt_s < 80.0, "Delta-T 2020 = {dt_s}");
    }
}
