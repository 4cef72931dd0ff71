//! Lahiri (Chitrapaksha) ayanamsha.
//!
//! The sidereal zero point is anchored by the Indian Calendar Reform
//! Committee value at the 1956 reference epoch. The ayanamsha at any other
//! date follows from IAU 1976 precession: carry the equinox-of-date
//! direction to J2000, then to the reference epoch, read its longitude on
//! the reference ecliptic, and offset by the anchor value.
//!
//! This is the MEAN ayanamsha: nutation is deliberately not applied,
//! matching the Drik Siddhanta convention. Adding nutation here would put
//! an oscillating ~17" error on every sidereal longitude.

use drik_frames::{
    equatorial_to_ecliptic, mean_obliquity_iau1976_deg, precess_from_j2000, precess_to_j2000,
};
use drik_time::{jd_tt_to_centuries, jd_ut_to_tt};

use crate::util::normalize_360;

/// Reference epoch: 1956-Mar-21 0h (JD).
pub const LAHIRI_T0: f64 = 2_435_553.5;

/// Lahiri ayanamsha at the reference epoch, degrees.
pub const LAHIRI_AYAN_T0: f64 = 23.245_524_743;

/// Mean Lahiri ayanamsha in degrees at a Julian Date (UT).
pub fn ayanamsha_deg(jd_ut: f64) -> f64 {
    let jd_tt = jd_ut_to_tt(jd_ut);

    // Equinox-of-date direction, equatorial frame of date.
    let v = [1.0, 0.0, 0.0];

    // Into J2000, then to the frame of the reference epoch.
    let v = precess_to_j2000(v, jd_tt);
    let v = precess_from_j2000(v, LAHIRI_T0);

    // Longitude on the ecliptic of the reference epoch.
    let eps_t0 = mean_obliquity_iau1976_deg(jd_tt_to_centuries(LAHIRI_T0)).to_radians();
    let v = equatorial_to_ecliptic(v, eps_t0);
    let lon = v[1].atan2(v[0]).to_degrees();

    normalize_360(-lon + LAHIRI_AYAN_T0)
}
