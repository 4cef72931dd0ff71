//! Panchanga composition: the full Hindu calendar identity of a civil day.

use drik_time::calendar_to_jd;
use drik_vedic_base::{Location, Masa, Paksha};

use crate::masa::{MasaInfo, masa_for_date};
use crate::phase::sunrise_or_noon;
use crate::tithi::{TithiInfo, tithi_at_sunrise};

/// The Hindu lunisolar date at one civil sunrise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HinduDate {
    pub year_saka: i32,
    pub year_vikram: i32,
    pub masa: Masa,
    pub is_adhika_masa: bool,
    pub paksha: Paksha,
    /// Paksha-local tithi, 1..15.
    pub tithi: i32,
    /// Whether the same tithi also ruled the previous day's sunrise.
    pub is_adhika_tithi: bool,
}

/// One civil day of a generated panchanga.
#[derive(Debug, Clone, Copy)]
pub struct PanchangaDay {
    pub greg_year: i32,
    pub greg_month: u32,
    pub greg_day: u32,
    /// Sunrise (or the noon fallback), JD UT.
    pub jd_sunrise: f64,
    pub hindu_date: HinduDate,
    pub tithi: TithiInfo,
}

fn days_in_month(year: i32, month: u32) -> u32 {
    const MDAYS: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && ((year % 4 == 0 && year % 100 != 0) || year % 400 == 0) {
        29
    } else {
        MDAYS[month as usize]
    }
}

/// Hindu calendar identity for a Gregorian civil day.
pub fn gregorian_to_hindu(year: i32, month: u32, day: u32, loc: &Location) -> HinduDate {
    let ti = tithi_at_sunrise(year, month, day, loc);
    let mi: MasaInfo = masa_for_date(year, month, day, loc);

    // Adhika tithi: yesterday's sunrise saw the same tithi number.
    let is_adhika_tithi = {
        let jd_prev = calendar_to_jd(year, month, day as f64) - 1.0;
        let (py, pm, pd) = drik_time::jd_to_ymd(jd_prev);
        let ti_prev = tithi_at_sunrise(py, pm, pd, loc);
        ti.tithi_num == ti_prev.tithi_num
    };

    HinduDate {
        year_saka: mi.year_saka,
        year_vikram: mi.year_vikram,
        masa: mi.masa,
        is_adhika_masa: mi.is_adhika,
        paksha: ti.paksha,
        tithi: ti.paksha_tithi,
        is_adhika_tithi,
    }
}

/// Panchanga for every day of a Gregorian month.
pub fn month_panchanga(year: i32, month: u32, loc: &Location) -> Vec<PanchangaDay> {
    let ndays = days_in_month(year, month);
    let mut days = Vec::with_capacity(ndays as usize);

    for d in 1..=ndays {
        let jd = calendar_to_jd(year, month, d as f64);
        days.push(PanchangaDay {
            greg_year: year,
            greg_month: month,
            greg_day: d,
            jd_sunrise: sunrise_or_noon(jd, loc),
            hindu_date: gregorian_to_hindu(year, month, d, loc),
            tithi: tithi_at_sunrise(year, month, d, loc),
        });
    }

    days
}

/// Split a JD (UT) into local wall-clock (h, m, s) under a UTC offset.
pub fn jd_to_local_hms(jd_ut: f64, utc_offset_hours: f64) -> (u32, u32, u32) {
    let local_jd = jd_ut + 0.5 + utc_offset_hours / 24.0;
    let frac = local_jd - local_jd.floor();
    let hours = frac * 24.0;
    let mut h = hours as u32;
    let mut m = ((hours - h as f64) * 60.0) as u32;
    let mut s = (((hours - h as f64) * 60.0 - m as f64) * 60.0 + 0.5) as u32;
    if s == 60 {
        s = 0;
        m += 1;
    }
    if m == 60 {
        m = 0;
        h += 1;
    }
    (h % 24, m, s)
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
    fn leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2025, 4), 30);
    }

    #[test]
    fn hindu_date_consistency() {
        let hd = gregorian_to_hindu(2025, 1, 13, &DELHI);
        assert_eq!(hd.paksha, Paksha::Shukla);
        assert_eq!(hd.tithi, 15, "Purnima at sunrise");
        assert_eq!(hd.year_vikram - hd.year_saka, 135);
    }

    #[test]
    fn adhika_tithi_flag_tracks_repeat() {
        // 2025-01-19 repeats the tithi of 01-18.
        let hd = gregorian_to_hindu(2025, 1, 19, &DELHI);
        assert!(hd.is_adhika_tithi, "2025-01-19 repeats Krishna Panchami");
        let hd_prev = gregorian_to_hindu(2025, 1, 18, &DELHI);
        assert!(!hd_prev.is_adhika_tithi, "first day of the pair is not adhika");
    }

    #[test]
    fn month_generation_runs_full_month() {
        let days = month_panchanga(2025, 1, &DELHI);
        assert_eq!(days.len(), 31);
        for d in &days {
            assert!((1..=15).contains(&d.hindu_date.tithi));
            assert!(d.jd_sunrise > 0.0);
        }
    }

    #[test]
    fn local_hms_conversion() {
        // 01:45 UT + 5.5h = 07:15 IST.
        let jd = calendar_to_jd(2025, 1, 13.0) + 1.75 / 24.0;
        let (h, m, _) = jd_to_local_hms(jd, 5.5);
        assert_eq!((h, m), (7, 15));
    }

    #[test]
    fn local_hms_rollover() {
        // 59.7s rounds up through the minute without producing 60.
        let jd = calendar_to_jd(2025, 1, 13.0) + (59.0 * 60.0 + 59.7) / 86_400.0;
        let (h, m, s) = jd_to_local_hms(jd, 0.0);
        assert_eq!((h, m, s), (1, 0, 0));
    }
}
