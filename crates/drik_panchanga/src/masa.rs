//! Masa determination: bracketing new moons, adhika months, era years.
//!
//! Amanta scheme. The month is delimited by the new moons on either side of
//! the query sunrise; it takes its name from the Sun's sidereal rashi at the
//! opening new moon, and it is adhika (intercalary) when both new moons fall
//! in the same rashi.

use drik_time::calendar_to_jd;
use drik_vedic_base::{Location, Masa};

use crate::phase::{lunar_phase, sun_sidereal_longitude, sunrise_or_noon, tithi_at_moment};

/// Kali epoch ahargana offset (JD of the Kali Yuga epoch, 0h).
const KALI_EPOCH_JD: f64 = 588_465.5;

/// Sidereal year length in days.
const SIDEREAL_YEAR_DAYS: f64 = 365.256_36;

/// Kali -> Saka era offset in years.
const KALI_TO_SAKA: i32 = 3179;

/// Saka -> Vikram era offset in years.
const SAKA_TO_VIKRAM: i32 = 135;

/// One lunar month around a civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasaInfo {
    /// The month name, Chaitra..Phalguna.
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub is_adhika: bool,
    /// Saka era year.
    pub year_saka: i32,
    /// Vikram era year (Saka + 135).
    pub year_vikram: i32,
    /// Opening new moon, JD UT.
    pub jd_start: f64,
    /// Closing new moon, JD UT.
    pub jd_end: f64,
}

/// Inverse Lagrange interpolation: the abscissa where the sampled curve
/// reaches `target`.
fn inverse_lagrange(x: &[f64], y: &[f64], target: f64) -> f64 {
    let n = x.len();
    let mut total = 0.0;
    for i in 0..n {
        let mut numer = 1.0;
        let mut denom = 1.0;
        for j in 0..n {
            if j != i {
                numer *= target - y[j];
                denom *= y[i] - y[j];
            }
        }
        total += numer * x[i] / denom;
    }
    total
}

/// Make a sampled phase sequence monotonic through the 360 -> 0 wrap.
fn unwrap_angles(angles: &mut [f64]) {
    for i in 1..angles.len() {
        if angles[i] < angles[i - 1] {
            angles[i] += 360.0;
        }
    }
}

/// Sample the phase on a 17-point, 0.25-day grid around `seed` and invert
/// for the instant of phase 360 (the new moon).
fn new_moon_near(seed: f64) -> f64 {
    let mut x = [0.0f64; 17];
    let mut y = [0.0f64; 17];
    for i in 0..17 {
        x[i] = -2.0 + i as f64 * 0.25;
        y[i] = lunar_phase(seed + x[i]);
    }
    unwrap_angles(&mut y);
    seed + inverse_lagrange(&x, &y, 360.0)
}

/// New moon at or before the given sunrise. `tithi_hint` is the tithi
/// number at that sunrise, which places the seed within the sampling grid.
pub fn new_moon_before(jd_rise: f64, tithi_hint: i32) -> f64 {
    new_moon_near(jd_rise - tithi_hint as f64)
}

/// New moon after the given sunrise.
pub fn new_moon_after(jd_rise: f64, tithi_hint: i32) -> f64 {
    new_moon_near(jd_rise + (30 - tithi_hint) as f64)
}

/// Sidereal rashi number (1..12) at a JD, ceiling convention.
///
/// Exactly 0 deg maps to 12 (Meena) and exactly 30 deg to 1 (Mesha); this
/// is the masa-naming convention and deliberately differs from the floor
/// convention of the solar calendars.
pub fn solar_rashi(jd_ut: f64) -> i32 {
    rashi_ceil(sun_sidereal_longitude(jd_ut))
}

fn rashi_ceil(nirayana_deg: f64) -> i32 {
    let mut rashi = (nirayana_deg / 30.0).ceil() as i32;
    if rashi <= 0 {
        rashi = 12;
    }
    if rashi > 12 {
        rashi %= 12;
        if rashi == 0 {
            rashi = 12;
        }
    }
    rashi
}

/// Saka year for a sunrise inside a month named `masa_num`.
///
/// Kali Ahargana: days since the Kali epoch, shifted so the year boundary
/// falls at the right month, divided by the sidereal year.
fn year_saka(jd_rise: f64, masa_num: i32) -> i32 {
    let ahargana = jd_rise - KALI_EPOCH_JD;
    let kali = ((ahargana + (4 - masa_num) as f64 * 30.0) / SIDEREAL_YEAR_DAYS) as i32;
    kali - KALI_TO_SAKA
}

/// Masa for a Gregorian civil day.
pub fn masa_for_date(year: i32, month: u32, day: u32, loc: &Location) -> MasaInfo {
    let jd_day = calendar_to_jd(year, month, day as f64);
    let jd_rise = sunrise_or_noon(jd_day, loc);

    let t = tithi_at_moment(jd_rise);
    let last_nm = new_moon_before(jd_rise, t);
    let next_nm = new_moon_after(jd_rise, t);

    let rashi_last = solar_rashi(last_nm);
    let rashi_next = solar_rashi(next_nm);
    let is_adhika = rashi_last == rashi_next;

    let mut masa_num = rashi_last + 1;
    if masa_num > 12 {
        masa_num -= 12;
    }

    let saka = year_saka(jd_rise, masa_num);

    MasaInfo {
        masa: Masa::from_number(masa_num),
        is_adhika,
        year_saka: saka,
        year_vikram: saka + SAKA_TO_VIKRAM,
        jd_start: last_nm,
        jd_end: next_nm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELHI: Location = Location {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
        altitude_m: 0.0,
        utc_offset_hours: 5.5,
    };

    #[test]
    fn inverse_lagrange_linear() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [10.0, 12.0, 14.0, 16.0];
        let r = inverse_lagrange(&x, &y, 13.0);
        assert!((r - 1.5).abs() < 1e-12, "got {r}");
    }

    #[test]
    fn unwrap_monotonic() {
        let mut a = [350.0, 355.0, 2.0, 8.0];
        unwrap_angles(&mut a);
        assert!(a.windows(2).all(|w| w[0] <= w[1]), "{a:?}");
    }

    #[test]
    fn new_moons_bracket_sunrise() {
        let jd_day = calendar_to_jd(2025, 2, 10.0);
        let jd_rise = sunrise_or_noon(jd_day, &DELHI);
        let t = tithi_at_moment(jd_rise);
        let before = new_moon_before(jd_rise, t);
        let after = new_moon_after(jd_rise, t);
        assert!(before < jd_rise && jd_rise < after);
        let span = after - before;
        assert!((29.2..29.9).contains(&span), "synodic span {span}");
        // Both instants sit on the conjunction to a couple of minutes.
        for nm in [before, after] {
            let p = lunar_phase(nm);
            let d = if p > 180.0 { 360.0 - p } else { p };
            assert!(d < 0.05, "phase at new moon = {p}");
        }
    }

    #[test]
    fn adhika_bhadrapada_2012() {
        // 2012 had Adhika Bhadrapada (Aug 18) followed by the nija month.
        let adhika = masa_for_date(2012, 8, 18, &DELHI);
        assert_eq!(adhika.masa, Masa::Bhadrapada);
        assert!(adhika.is_adhika, "2012-08-18 should be adhika");
        assert_eq!(adhika.year_saka, 1934);

        let nija = masa_for_date(2012, 9, 18, &DELHI);
        assert_eq!(nija.masa, Masa::Bhadrapada);
        assert!(!nija.is_adhika, "2012-09-18 should be nija");
        assert_eq!(nija.year_saka, 1934);
    }

    #[test]
    fn era_relation() {
        for (y, m, d) in [(1950, 6, 1), (2000, 1, 15), (2025, 4, 20), (2048, 11, 3)] {
            let mi = masa_for_date(y, m, d, &DELHI);
            assert_eq!(mi.year_vikram - mi.year_saka, 135, "({y}, {m}, {d})");
        }
    }

    #[test]
    fn consecutive_months_chain() {
        // Month end of one query equals month start of a query 30 days on.
        let a = masa_for_date(2025, 3, 10, &DELHI);
        let b = masa_for_date(2025, 4, 9, &DELHI);
        assert!(
            (a.jd_end - b.jd_start).abs() < 0.01,
            "chain gap = {}",
            a.jd_end - b.jd_start
        );
    }

    #[test]
    fn metonic_adhika_count() {
        // Across a 19-year window the 15th of each month sees ~7 distinct
        // adhika masas (Metonic cycle).
        let mut count = 0;
        let mut prev_was_adhika = false;
        for y in 2001..2020 {
            for m in 1..=12u32 {
                let mi = masa_for_date(y, m, 15, &DELHI);
                if mi.is_adhika {
                    if !prev_was_adhika {
                        count += 1;
                    }
                    prev_was_adhika = true;
                } else {
                    prev_was_adhika = false;
                }
            }
        }
        assert!((6..=8).contains(&count), "adhika months in 19 years: {count}");
    }

    #[test]
    fn rashi_ceiling_edges() {
        // The convention itself: ceil puts an exact multiple of 30 in the
        // preceding sign, with 0 wrapping to 12.
        assert_eq!(rashi_ceil(0.0), 12);
        assert_eq!(rashi_ceil(30.0), 1);
        assert_eq!(rashi_ceil(45.0), 2);
        assert_eq!(rashi_ceil(359.9), 12);
    }
}
