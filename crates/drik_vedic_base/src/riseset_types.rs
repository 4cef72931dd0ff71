//! Types for sunrise/sunset computation.

/// Geographic observer location plus civil clock offset.
///
/// Latitude north positive, longitude east positive, altitude in meters,
/// UTC offset in hours (e.g. 5.5 for IST). Out-of-range values are accepted
/// but produce undefined astronomical results downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub altitude_m: f64,
    pub utc_offset_hours: f64,
}

impl Location {
    pub fn new(
        latitude_deg: f64,
        longitude_deg: f64,
        altitude_m: f64,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
            utc_offset_hours,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// 0h UT of the civil date containing `jd_local_midnight`, i.e. shift a
    /// JD at 0h local back to the UT scale.
    pub fn utc_offset_days(&self) -> f64 {
        self.utc_offset_hours / 24.0
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// The event occurs at the given Julian Date (UT).
    Event(f64),
    /// The Sun stays above or below the horizon for the whole day.
    Circumpolar,
}

impl RiseSetResult {
    /// The event time, or `fallback` for circumpolar days.
    ///
    /// The calendar layer always substitutes local noon, so the query is
    /// total even at polar locations.
    pub fn jd_or(self, fallback: f64) -> f64 {
        match self {
            Self::Event(jd) => jd,
            Self::Circumpolar => fallback,
        }
    }

    pub fn is_event(self) -> bool {
        matches!(self, Self::Event(_))
    }
}
