//! Tithi at sunrise: the civil-day lunar date with kshaya detection.
//!
//! The tithi that rules a civil day is the one running at local sunrise.
//! A tithi that begins and ends between two sunrises is skipped (kshaya);
//! one that covers two sunrises repeats (adhika, detected by the panchanga
//! composition from consecutive days).

use drik_time::calendar_to_jd;
use drik_vedic_base::{Location, Paksha, paksha_of, tithi_in_paksha};

use crate::phase::{phase_crossing, sunrise_or_noon, tithi_at_moment};

/// The tithi ruling one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// Whole-month tithi number, 1..30.
    pub tithi_num: i32,
    /// Fortnight the tithi belongs to.
    pub paksha: Paksha,
    /// Position within the paksha, 1..15.
    pub paksha_tithi: i32,
    /// Instant the tithi began (phase reached (t-1)*12 deg), JD UT.
    pub jd_start: f64,
    /// Instant the tithi ends (phase reaches t*12 deg), JD UT.
    pub jd_end: f64,
    /// Whether the *next* tithi contains no sunrise and is skipped.
    pub is_kshaya: bool,
}

/// Tithi at sunrise for a Gregorian civil day.
pub fn tithi_at_sunrise(year: i32, month: u32, day: u32, loc: &Location) -> TithiInfo {
    let jd_day = calendar_to_jd(year, month, day as f64);
    let jd_rise = sunrise_or_noon(jd_day, loc);

    let t = tithi_at_moment(jd_rise);
    let paksha = paksha_of(t);
    let paksha_tithi = tithi_in_paksha(t);

    // Boundary instants bracket the sunrise; a tithi spans ~0.9-1.05 days,
    // so +-2 days always contains exactly one crossing of each target.
    let jd_start = phase_crossing(jd_rise - 2.0, jd_rise, (t - 1) as f64 * 12.0);
    let next = (t % 30) + 1;
    let jd_end = phase_crossing(jd_rise, jd_rise + 2.0, (next - 1) as f64 * 12.0);

    // Kshaya: tomorrow's sunrise tithi jumps by more than one.
    let rise_tomorrow = drik_vedic_base::sunrise(jd_day + 1.0, loc);
    let is_kshaya = match rise_tomorrow {
        drik_vedic_base::RiseSetResult::Event(jd) => {
            let t_tomorrow = tithi_at_moment(jd);
            (t_tomorrow - t).rem_euclid(30) > 1
        }
        drik_vedic_base::RiseSetResult::Circumpolar => false,
    };

    TithiInfo {
        tithi_num: t,
        paksha,
        paksha_tithi,
        jd_start,
        jd_end,
        is_kshaya,
    }
}
