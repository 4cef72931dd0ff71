//! Rashi (sidereal zodiac sign) enumeration and longitude mapping.
//!
//! The ecliptic is divided into 12 equal signs of 30 degrees starting from
//! Mesha at sidereal 0 deg. Two boundary conventions coexist in the
//! calendar layer: the solar calendars use floor(lon/30)+1 (0 deg belongs
//! to Mesha), while the masa naming uses ceil(lon/30) (0 deg belongs to
//! Meena). Both call sites live in `drik_panchanga`; this module only
//! carries the shared floor-based mapping and the names.

use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 1-based number (Mesha = 1 .. Meena = 12), the indexing the calendar
    /// layer works in.
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }

    /// Rashi from a 1-based number; numbers outside 1..12 wrap.
    pub fn from_number(n: i32) -> Rashi {
        ALL_RASHIS[(n - 1).rem_euclid(12) as usize]
    }
}

/// Rashi containing a sidereal longitude, floor convention:
/// [0, 30) -> Mesha, [30, 60) -> Vrishabha, ...
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> Rashi {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / 30.0).floor() as usize).min(11);
    ALL_RASHIS[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.number(), i as i32 + 1);
        }
    }

    #[test]
    fn from_number_roundtrip() {
        for r in ALL_RASHIS {
            assert_eq!(Rashi::from_number(r.number()), r);
        }
    }

    #[test]
    fn from_number_wraps() {
        assert_eq!(Rashi::from_number(13), Rashi::Mesha);
        assert_eq!(Rashi::from_number(0), Rashi::Meena);
    }

    #[test]
    fn floor_boundaries() {
        assert_eq!(rashi_from_longitude(0.0), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(29.999), Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0), Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999), Rashi::Meena);
    }

    #[test]
    fn negative_wraps() {
        assert_eq!(rashi_from_longitude(-5.0), Rashi::Meena);
    }

    #[test]
    fn names_nonempty() {
        for r in ALL_RASHIS {
            assert!(!r.name().is_empty());
        }
    }
}
