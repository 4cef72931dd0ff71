//! Tithi and paksha: the pure geometry of the lunar day.
//!
//! A synodic month divides into 30 tithis of 12 degrees of Moon-Sun
//! elongation each. Tithis 1-15 form the Shukla (bright) paksha, 16-30 the
//! Krishna (dark) paksha; 15 is Purnima, 30 Amavasya. The time-dependent
//! parts (boundaries, kshaya/adhika at sunrise) live in `drik_panchanga`.

use crate::util::normalize_360;

/// Degrees of elongation per tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// The two halves of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, elongation 0-180 deg, tithis 1-15.
    Shukla,
    /// Waning half, elongation 180-360 deg, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Paksha-local tithi names, index 1..15.
const TITHI_NAMES: [&str; 16] = [
    "",
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

/// Paksha of a whole-month tithi number (1..30).
pub fn paksha_of(tithi_num: i32) -> Paksha {
    if tithi_num <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    }
}

/// Position of a tithi within its paksha (1..15).
pub fn tithi_in_paksha(tithi_num: i32) -> i32 {
    if tithi_num <= 15 { tithi_num } else { tithi_num - 15 }
}

/// Display name of a whole-month tithi number.
///
/// 15 is Purnima and 30 Amavasya regardless of the paksha-local name.
pub fn tithi_name(tithi_num: i32) -> &'static str {
    match tithi_num {
        15 => "Purnima",
        30 => "Amavasya",
        n if (1..30).contains(&n) => TITHI_NAMES[tithi_in_paksha(n) as usize],
        _ => "",
    }
}

/// Tithi number (1..30) from a Moon-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> i32 {
    let phase = normalize_360(elongation_deg);
    let t = (phase / TITHI_SEGMENT_DEG) as i32 + 1;
    t.min(30)
}
