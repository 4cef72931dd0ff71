//! Julian Date ↔ calendar conversions.
//!
//! Algorithms from Meeus, "Astronomical Algorithms" (2nd ed.), chapter 7.
//! The inverse keeps the Gregorian-reform branch at Z < 2299161, which only
//! matters for dates before 1582-Oct-15.

/// J2000.0 epoch as Julian Date (2000-Jan-01 12:00:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one Julian day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to Julian Date.
///
/// `day` may be fractional (e.g. 1.5 = noon on the 1st).
/// An integral `day` yields the JD of 0h UT on that civil date.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = y / 100;
    let b = 2 - a + a / 4;

    let jd_year = (365.25 * (y as f64 + 4716.0)).floor();
    let jd_month = (30.6001 * (m as f64 + 1.0)).floor();

    jd_year + jd_month + day + b as f64 - 1524.5
}

/// Convert a Julian Date to Gregorian calendar date.
///
/// Returns `(year, month, day)` where `day` is fractional, so the
/// time-of-day survives a round trip.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd_plus = jd + 0.5;
    let z = jd_plus.floor() as i64;
    let f = jd_plus - z as f64;

    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d) as f64 - (30.6001 * e as f64).floor() + f;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    (year as i32, month as u32, day)
}

/// Convert a Julian Date to whole-day Gregorian `(year, month, day)`.
pub fn jd_to_ymd(jd: f64) -> (i32, u32, u32) {
    let (y, m, d) = jd_to_calendar(jd);
    (y, m, d.floor() as u32)
}

/// Day of week for a Julian Date: 0 = Monday .. 6 = Sunday (ISO).
pub fn weekday(jd: f64) -> u32 {
    let days = (jd + 0.5).floor() as i64;
    // 2000-Jan-03 (JD 2451546.5) was a Monday.
    (days - 2_451_547).rem_euclid(7) as u32
}
