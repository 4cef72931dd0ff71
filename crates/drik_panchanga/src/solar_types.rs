//! Regional solar calendar variants and their parameters.
//!
//! Each tradition differs in three ways: which rashi opens its year, how
//! its era maps onto the Gregorian year, and which instant of the civil
//! day decides sankranti ownership (the critical time, dispatched in the
//! conversion module).

/// The four supported regional solar calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolarCalendar {
    Tamil,
    Bengali,
    Odia,
    Malayalam,
}

/// All variants, for iteration and CLI parsing.
pub const ALL_SOLAR_CALENDARS: [SolarCalendar; 4] = [
    SolarCalendar::Tamil,
    SolarCalendar::Bengali,
    SolarCalendar::Odia,
    SolarCalendar::Malayalam,
];

const TAMIL_MONTHS: [&str; 12] = [
    "Chithirai",
    "Vaikaasi",
    "Aani",
    "Aadi",
    "Aavani",
    "Purattaasi",
    "Aippasi",
    "Karthikai",
    "Maargazhi",
    "Thai",
    "Maasi",
    "Panguni",
];

const BENGALI_MONTHS: [&str; 12] = [
    "Boishakh",
    "Joishtho",
    "Asharh",
    "Srabon",
    "Bhadro",
    "Ashshin",
    "Kartik",
    "Ogrohaeon",
    "Poush",
    "Magh",
    "Falgun",
    "Choitro",
];

const ODIA_MONTHS: [&str; 12] = [
    "Baisakha",
    "Jyeshtha",
    "Ashadha",
    "Shravana",
    "Bhadrapada",
    "Ashvina",
    "Kartika",
    "Margashirsha",
    "Pausha",
    "Magha",
    "Phalguna",
    "Chaitra",
];

const MALAYALAM_MONTHS: [&str; 12] = [
    "Chingam",
    "Kanni",
    "Thulam",
    "Vrishchikam",
    "Dhanu",
    "Makaram",
    "Kumbham",
    "Meenam",
    "Medam",
    "Edavam",
    "Mithunam",
    "Karkadakam",
];

impl SolarCalendar {
    /// Rashi (1..12) whose sankranti opens the regional year:
    /// Mesha for Tamil/Bengali/Odia, Simha for Malayalam.
    pub const fn first_rashi(self) -> i32 {
        match self {
            Self::Malayalam => 5,
            _ => 1,
        }
    }

    /// Era offset from the Gregorian year for dates on or after the
    /// year-start sankranti.
    pub const fn gy_offset_on(self) -> i32 {
        match self {
            Self::Tamil | Self::Odia => 78,
            Self::Bengali => 593,
            Self::Malayalam => 824,
        }
    }

    /// Era offset for dates before the year-start sankranti.
    pub const fn gy_offset_before(self) -> i32 {
        self.gy_offset_on() + 1
    }

    /// Name of the era the calendar counts in.
    pub const fn era_name(self) -> &'static str {
        match self {
            Self::Tamil | Self::Odia => "Saka",
            Self::Bengali => "Bangabda",
            Self::Malayalam => "Kollam",
        }
    }

    /// Display name of the calendar.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tamil => "Tamil",
            Self::Bengali => "Bengali",
            Self::Odia => "Odia",
            Self::Malayalam => "Malayalam",
        }
    }

    /// Regional month names, index 0 = first month of the year.
    pub const fn month_names(self) -> &'static [&'static str; 12] {
        match self {
            Self::Tamil => &TAMIL_MONTHS,
            Self::Bengali => &BENGALI_MONTHS,
            Self::Odia => &ODIA_MONTHS,
            Self::Malayalam => &MALAYALAM_MONTHS,
        }
    }

    /// Name of a 1-based regional month.
    pub fn month_name(self, month: i32) -> &'static str {
        if (1..=12).contains(&month) {
            self.month_names()[(month - 1) as usize]
        } else {
            ""
        }
    }
}

/// A date in a regional solar calendar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDate {
    /// Year in the calendar's own era.
    pub year: i32,
    /// Regional month, 1..12.
    pub month: i32,
    /// Day within the month, 1..32.
    pub day: i32,
    /// Sidereal rashi (1..12) whose sankranti opened the month. Tied to
    /// `month` by the calendar's fixed mapping
    /// (`rashi = ((month - 1 + first_rashi - 1) mod 12) + 1`); the inverse
    /// conversion rejects a pair that breaks it.
    pub rashi: i32,
    /// Sankranti that opened the month, JD UT.
    pub jd_sankranti: f64,
}
