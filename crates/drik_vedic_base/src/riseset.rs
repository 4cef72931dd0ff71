//! Sunrise and sunset.
//!
//! Iterative hour-angle method of Meeus, "Astronomical Algorithms"
//! (2nd ed.), chapter 15, with the Sinclair refraction formula for the
//! horizon depression and apparent sidereal time at 0h UT. The computation
//! is anchored to the observer's civil date: pass the JD of 0h UT of the
//! Gregorian day, and the event returned is the one belonging to that
//! local day.

use drik_eph::{solar_declination, solar_ra};
use drik_frames::{mean_obliquity_laskar_deg, nutation_iau1980};
use drik_time::{
    SIDEREAL_DEG_PER_DAY_FRACTION, jd_to_ymd, jd_tt_to_centuries, jd_ut_to_tt,
    mean_sidereal_time_0h_deg,
};

use crate::riseset_types::{Location, RiseSetResult};
use crate::util::normalize_360;

/// Sea-level standard pressure, hPa.
const STANDARD_PRESSURE_HPA: f64 = 1013.25;

/// Air temperature assumed by the refraction model, deg C.
const ATMOSPHERIC_TEMP_C: f64 = 10.0;

/// Convergence threshold for the day-fraction correction (~8.6 ms).
const CONVERGENCE_FRACTION: f64 = 1e-7;

/// Maximum refinement iterations.
const MAX_ITERATIONS: usize = 10;

/// Sinclair refraction at the horizon, degrees.
///
/// `pressure_hpa` and `temp_c` are the local meteorological conditions;
/// the 34.46' base value is the refraction of a ray grazing the horizon.
fn sinclair_refraction_deg(pressure_hpa: f64, temp_c: f64) -> f64 {
    let r = 34.46; // arcminutes
    ((pressure_hpa - 80.0) / 930.0 / (1.0 + 0.000_08 * (r + 39.0) * (temp_c - 10.0)) * r) / 60.0
}

/// Horizon altitude target for the Sun's center, degrees (negative).
fn horizon_altitude_deg(altitude_m: f64) -> f64 {
    let pressure = if altitude_m > 0.0 {
        STANDARD_PRESSURE_HPA * (1.0 - 0.0065 * altitude_m / 288.0).powf(5.255)
    } else {
        STANDARD_PRESSURE_HPA
    };
    let mut h0 = -sinclair_refraction_deg(pressure, ATMOSPHERIC_TEMP_C);
    if altitude_m > 0.0 {
        // Geometric dip of the horizon for an elevated observer.
        h0 -= 0.0353 * altitude_m.sqrt();
    }
    h0
}

/// One Meeus chapter-15 pass for the UT day starting at `jd_0h`.
///
/// Returns `None` when the Sun never crosses the target altitude
/// (circumpolar day).
fn event_for_ut_day(jd_0h: f64, loc: &Location, h0: f64, rising: bool) -> Option<f64> {
    let phi = loc.latitude_rad();

    // Apparent sidereal time at 0h UT: mean value plus the equation of
    // the equinoxes.
    let jd_noon = jd_0h + 0.5;
    let t_noon = jd_tt_to_centuries(jd_ut_to_tt(jd_noon));
    let (dpsi, _) = nutation_iau1980(t_noon);
    let eps = mean_obliquity_laskar_deg(t_noon).to_radians();
    let theta0 = mean_sidereal_time_0h_deg(jd_0h) + dpsi * eps.cos();

    let ra = solar_ra(jd_noon);
    let decl = solar_declination(jd_noon).to_radians();

    let cos_h0 = (h0.to_radians().sin() - phi.sin() * decl.sin()) / (phi.cos() * decl.cos());
    if !(-1.0..=1.0).contains(&cos_h0) {
        return None;
    }
    let h0_deg = cos_h0.acos().to_degrees();

    // Transit fraction, then shift by the half-arc.
    let m0 = ((ra - loc.longitude_deg - theta0) / 360.0).rem_euclid(1.0);
    let mut m = if rising {
        m0 - h0_deg / 360.0
    } else {
        m0 + h0_deg / 360.0
    };
    m = m.rem_euclid(1.0);

    for _ in 0..MAX_ITERATIONS {
        let jd_trial = jd_0h + m;
        let ra_i = solar_ra(jd_trial);
        let decl_i = solar_declination(jd_trial).to_radians();

        let theta = theta0 + SIDEREAL_DEG_PER_DAY_FRACTION * m;
        let mut hour_angle = normalize_360(theta + loc.longitude_deg - ra_i);
        if hour_angle > 180.0 {
            hour_angle -= 360.0;
        }

        let sin_alt = phi.sin() * decl_i.sin()
            + phi.cos() * decl_i.cos() * hour_angle.to_radians().cos();
        let alt = sin_alt.asin().to_degrees();

        let denom = 360.0 * decl_i.cos() * phi.cos() * hour_angle.to_radians().sin();
        if denom.abs() < 1e-12 {
            break;
        }
        let dm = (alt - h0) / denom;
        m += dm;

        if dm.abs() < CONVERGENCE_FRACTION {
            break;
        }
    }

    // The iteration can land on the event of the neighboring UT day.
    if rising && m > 0.75 {
        m -= 1.0;
    }
    if !rising && m < 0.25 {
        m += 1.0;
    }

    Some(jd_0h + m)
}

fn rise_or_set(jd_day: f64, loc: &Location, rising: bool) -> RiseSetResult {
    let h0 = horizon_altitude_deg(loc.altitude_m);

    // Anchor to local midnight so the event belongs to the civil date.
    let jd_local_start = jd_day - loc.utc_offset_days();
    let (y, m, d) = jd_to_ymd(jd_local_start);
    let jd_0h = drik_time::calendar_to_jd(y, m, d as f64);

    if let Some(jd_event) = event_for_ut_day(jd_0h, loc, h0, rising) {
        if jd_event >= jd_local_start - 1e-4 {
            return RiseSetResult::Event(jd_event);
        }
    }
    match event_for_ut_day(jd_0h + 1.0, loc, h0, rising) {
        Some(jd_event) => RiseSetResult::Event(jd_event),
        None => RiseSetResult::Circumpolar,
    }
}

/// Sunrise of the civil day whose 0h UT is `jd_day`, as a JD in UT.
pub fn sunrise(jd_day: f64, loc: &Location) -> RiseSetResult {
    rise_or_set(jd_day, loc, true)
}

/// Sunset of the civil day whose 0h UT is `jd_day`, as a JD in UT.
pub fn sunset(jd_day: f64, loc: &Location) -> RiseSetResult {
    rise_or_set(jd_day, loc, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drik_time::calendar_to_jd;

    const DELHI: Location = Location {
        latitude_deg: 28.6139,
        longitude_deg: 77.2090,
        altitude_m: 0.0,
        utc_offset_hours: 5.5,
    };

    /// Local clock hours of a JD (UT) under the location's offset.
    fn local_hours(jd: f64, loc: &Location) -> f64 {
        let local = jd + loc.utc_offset_days() + 0.5;
        (local - local.floor()) * 24.0
    }

    #[test]
    fn delhi_january_sunrise() {
        // Mid-January sunrise in Delhi is close to 07:15 IST.
        let jd = calendar_to_jd(2025, 1, 13.0);
        let rise = sunrise(jd, &DELHI);
        assert!(rise.is_event());
        let h = local_hours(rise.jd_or(0.0), &DELHI);
        assert!((7.0..7.5).contains(&h), "sunrise at {h} h IST");
    }

    #[test]
    fn delhi_june_sunrise() {
        // Summer solstice sunrise in Delhi is close to 05:23 IST.
        let jd = calendar_to_jd(2025, 6, 21.0);
        let rise = sunrise(jd, &DELHI);
        let h = local_hours(rise.jd_or(0.0), &DELHI);
        assert!((5.2..5.6).contains(&h), "sunrise at {h} h IST");
    }

    #[test]
    fn delhi_january_sunset() {
        // Mid-January sunset in Delhi is close to 17:45 IST.
        let jd = calendar_to_jd(2025, 1, 13.0);
        let set = sunset(jd, &DELHI);
        let h = local_hours(set.jd_or(0.0), &DELHI);
        assert!((17.5..18.0).contains(&h), "sunset at {h} h IST");
    }

    #[test]
    fn sunrise_precedes_sunset() {
        for month in 1..=12u32 {
            let jd = calendar_to_jd(2024, month, 15.0);
            let rise = sunrise(jd, &DELHI).jd_or(0.0);
            let set = sunset(jd, &DELHI).jd_or(0.0);
            assert!(rise < set, "month {month}: rise {rise} >= set {set}");
            let daylight = (set - rise) * 24.0;
            assert!(
                (9.5..14.5).contains(&daylight),
                "month {month}: {daylight} h of daylight"
            );
        }
    }

    #[test]
    fn polar_night_is_circumpolar() {
        // Longyearbyen in late December: the Sun never rises.
        let svalbard = Location::new(78.22, 15.64, 0.0, 1.0);
        let jd = calendar_to_jd(2024, 12, 21.0);
        assert_eq!(sunrise(jd, &svalbard), RiseSetResult::Circumpolar);
    }

    #[test]
    fn equatorial_sunrise_near_six() {
        // Quito: sunrise stays near 06:00 local all year.
        let quito = Location::new(-0.18, -78.47, 0.0, -5.0);
        for month in [1u32, 4, 7, 10] {
            let jd = calendar_to_jd(2024, month, 10.0);
            let rise = sunrise(jd, &quito).jd_or(0.0);
            let h = local_hours(rise, &quito);
            assert!((5.6..6.6).contains(&h), "month {month}: sunrise {h} h");
        }
    }

    #[test]
    fn elevation_advances_sunrise() {
        let hill = Location::new(28.6139, 77.2090, 2000.0, 5.5);
        let jd = calendar_to_jd(2025, 3, 1.0);
        let flat = sunrise(jd, &DELHI).jd_or(0.0);
        let high = sunrise(jd, &hill).jd_or(0.0);
        assert!(high < flat, "elevated horizon should see the Sun earlier");
        assert!((flat - high) * 24.0 * 60.0 < 15.0, "shift suspiciously large");
    }
}
