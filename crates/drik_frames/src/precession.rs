//! IAU 1976 equatorial precession.
//!
//! Rotates unit vectors between the mean equatorial frame of an arbitrary
//! epoch and J2000.0 using the Lieske ζ, z, θ angles. Only the ayanamsha
//! chain uses this; apparent places go through nutation instead.

use std::f64::consts::PI;

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);
const J2000_JD: f64 = 2_451_545.0;

/// IAU 1976 precession angles (ζ, z, θ) in radians.
///
/// `t` = Julian centuries of TT between J2000.0 and the target epoch.
pub fn precession_angles_iau1976(t: f64) -> (f64, f64, f64) {
    let zeta = ((0.017_998 * t + 0.301_88) * t + 2306.2181) * t * ARCSEC_TO_RAD;
    let z = ((0.018_203 * t + 1.094_68) * t + 2306.2181) * t * ARCSEC_TO_RAD;
    let theta = ((-0.041_833 * t - 0.426_65) * t + 2004.3109) * t * ARCSEC_TO_RAD;
    (zeta, z, theta)
}

/// Precess an equatorial unit vector from the mean frame of `jd_tt` to J2000.0.
pub fn precess_to_j2000(v: [f64; 3], jd_tt: f64) -> [f64; 3] {
    if jd_tt == J2000_JD {
        return v;
    }
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let (zeta, z, theta) = precession_angles_iau1976(t);

    let (sin_th, cos_th) = theta.sin_cos();
    let (sin_zeta, cos_zeta) = zeta.sin_cos();
    let (sin_z, cos_z) = z.sin_cos();
    let a = cos_zeta * cos_th;
    let b = sin_zeta * cos_th;

    [
        (a * cos_z - sin_zeta * sin_z) * v[0]
            + (a * sin_z + sin_zeta * cos_z) * v[1]
            + cos_zeta * sin_th * v[2],
        -(b * cos_z + cos_zeta * sin_z) * v[0]
            - (b * sin_z - cos_zeta * cos_z) * v[1]
            - sin_zeta * sin_th * v[2],
        -sin_th * cos_z * v[0] - sin_th * sin_z * v[1] + cos_th * v[2],
    ]
}

/// Precess an equatorial unit vector from J2000.0 to the mean frame of `jd_tt`.
pub fn precess_from_j2000(v: [f64; 3], jd_tt: f64) -> [f64; 3] {
    if jd_tt == J2000_JD {
        return v;
    }
    let t = (jd_tt - J2000_JD) / 36_525.0;
    let (zeta, z, theta) = precession_angles_iau1976(t);

    let (sin_th, cos_th) = theta.sin_cos();
    let (sin_zeta, cos_zeta) = zeta.sin_cos();
    let (sin_z, cos_z) = z.sin_cos();
    let a = cos_zeta * cos_th;
    let b = sin_zeta * cos_th;

    [
        (a * cos_z - sin_zeta * sin_z) * v[0]
            - (b * cos_z + cos_zeta * sin_z) * v[1]
            - sin_th * cos_z * v[2],
        (a * sin_z + sin_zeta * cos_z) * v[0]
            - (b * sin_z - cos_zeta * cos_z) * v[1]
            - sin_th * sin_z * v[2],
        cos_zeta * sin_th * v[0] - sin_zeta * sin_th * v[1] + cos_th * v[2],
    ]
}

/// Rotate an equatorial vector into the ecliptic frame sharing its equinox.
///
/// `eps_rad` is the mean obliquity of the target epoch in radians.
pub fn equatorial_to_ecliptic(v: [f64; 3], eps_rad: f64) -> [f64; 3] {
    let (sin_e, cos_e) = eps_rad.sin_cos();
    [
        v[0],
        cos_e * v[1] + sin_e * v[2],
        -sin_e * v[1] + cos_e * v[2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: [f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn roundtrip_identity() {
        let jd = 2_435_553.5;
        let v = [0.5f64, -0.3, 0.81];
        let there = precess_to_j2000(v, jd);
        let back = precess_from_j2000(there, jd);
        for i in 0..3 {
            assert!((v[i] - back[i]).abs() < 1e-13, "component {i}");
        }
    }

    #[test]
    fn preserves_length() {
        let v = [1.0f64, 0.0, 0.0];
        let r = precess_from_j2000(v, 2_469_807.5);
        assert!((norm(r) - 1.0).abs() < 1e-13);
    }

    #[test]
    fn equinox_drift_rate() {
        // The equinox of a date one century after J2000, viewed from J2000,
        // drifts in right ascension by about zeta + z (~1.28 deg/century).
        let jd = J2000_JD + 36_525.0;
        let v = precess_to_j2000([1.0, 0.0, 0.0], jd);
        let ra_drift = v[1].atan2(v[0]).to_degrees().abs();
        assert!((1.0..1.5).contains(&ra_drift), "drift = {ra_drift} deg");
    }

    #[test]
    fn ecliptic_rotation_pole() {
        // The equatorial pole maps to (0, -sin eps, cos eps) ... i.e. the
        // ecliptic-frame latitude of the celestial pole is 90 deg - eps.
        let eps = 0.409_092_8; // ~23.439 deg
        let r = equatorial_to_ecliptic([0.0, 0.0, 1.0], eps);
        let lat = r[2].asin().to_degrees();
        assert!((lat - (90.0 - 23.439_3)).abs() < 1e-3, "lat = {lat}");
    }

    #[test]
    fn noop_at_j2000() {
        let v = [0.1, 0.2, 0.97];
        assert_eq!(precess_to_j2000(v, J2000_JD), v);
        assert_eq!(precess_from_j2000(v, J2000_JD), v);
    }
}
