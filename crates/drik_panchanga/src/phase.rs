//! Lunar phase and shared per-day primitives.
//!
//! The phase (Moon-Sun elongation) is taken in tropical longitudes: the
//! ayanamsha cancels in the difference. Sidereal solar longitude is the
//! tropical value minus the Lahiri ayanamsha.

use drik_eph::{lunar_longitude, solar_longitude};
use drik_vedic_base::{Location, ayanamsha_deg, normalize_360, normalize_pm180, sunrise};
use drik_vedic_base::tithi::tithi_from_elongation;

/// Moon-Sun elongation in degrees [0, 360) at a JD (UT).
pub fn lunar_phase(jd_ut: f64) -> f64 {
    normalize_360(lunar_longitude(jd_ut) - solar_longitude(jd_ut))
}

/// Tithi number (1..30) running at a JD (UT).
pub fn tithi_at_moment(jd_ut: f64) -> i32 {
    tithi_from_elongation(lunar_phase(jd_ut))
}

/// Sidereal (nirayana) solar longitude in degrees [0, 360).
pub fn sun_sidereal_longitude(jd_ut: f64) -> f64 {
    normalize_360(solar_longitude(jd_ut) - ayanamsha_deg(jd_ut))
}

/// Sunrise of the civil day at `jd_day` (0h UT), falling back to local noon
/// on circumpolar days so every query stays total.
pub fn sunrise_or_noon(jd_day: f64, loc: &Location) -> f64 {
    sunrise(jd_day, loc).jd_or(jd_day + 0.5 - loc.utc_offset_days())
}

/// Instant where the phase crosses `target_deg`, by bisection on the signed
/// difference. `lo` and `hi` must bracket exactly one crossing within half
/// a circle; the 360->0 wrap inside the bracket is handled by the signed
/// reduction.
pub fn phase_crossing(lo: f64, hi: f64, target_deg: f64) -> f64 {
    let mut lo = lo;
    let mut hi = hi;
    for _ in 0..50 {
        let mid = 0.5 * (lo + hi);
        let diff = normalize_pm180(lunar_phase(mid) - target_deg);
        if diff >= 0.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    0.5 * (lo + hi)
}
