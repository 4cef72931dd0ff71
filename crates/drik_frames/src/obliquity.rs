//! Mean obliquity of the ecliptic.
//!
//! Two models are provided on purpose. The Laskar 10th-degree polynomial
//! (Meeus 22.3) serves the equatorial conversions (declination, right
//! ascension, rise/set). The ayanamsha frame chain uses the IAU 1976 cubic
//! instead, so the sidereal zero point stays anchored to the same precession
//! theory that defines it; the two must not be interchanged.

/// Obliquity at J2000.0 in degrees: 23 deg 26' 21.448".
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291_111_111_11;

/// Mean obliquity (Laskar), degrees. Valid for |U| < 1 (10,000 years).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_laskar_deg(t: f64) -> f64 {
    let u = t / 100.0;
    let series_arcsec = (((((((((2.45 * u + 5.79) * u + 27.87) * u + 7.12) * u
        - 39.05) * u
        - 249.67) * u
        - 51.38) * u
        + 1999.25) * u
        - 1.55) * u
        - 4680.93)
        * u;
    OBLIQUITY_J2000_DEG + series_arcsec / 3600.0
}

/// Mean obliquity (IAU 1976 cubic), degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn mean_obliquity_iau1976_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG + (-46.8150 * t - 0.000_59 * t * t + 0.001_813 * t * t * t) / 3600.0
}
