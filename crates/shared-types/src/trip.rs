use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ── Trip status ─────────────────────────────────────────────────────

/// Lifecycle state of a planned trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl TripStatus {
    /// Parse a status string, defaulting to Upcoming for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ongoing" => TripStatus::Ongoing,
            "completed" => TripStatus::Completed,
            _ => TripStatus::Upcoming,
        }
    }

    /// Lowercase string as carried on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "upcoming",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Completed => "completed",
        }
    }

    /// Human-readable label for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Upcoming => "Upcoming",
            TripStatus::Ongoing => "Ongoing",
            TripStatus::Completed => "Completed",
        }
    }
}

// ── Trip record ─────────────────────────────────────────────────────

/// An upcoming (or past) trip as delivered by the retrieval API.
///
/// Dates are calendar dates in ISO `YYYY-MM-DD` form, with no
/// time-of-day or timezone component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub status: TripStatus,
    pub image: String,
}

impl Trip {
    /// Length of the trip in whole days, or `None` if either date fails
    /// to parse.
    ///
    /// The difference is taken between the two calendar dates directly,
    /// with no timezone normalization — midnight-to-midnight arithmetic,
    /// absolute so reversed inputs still yield a length.
    pub fn duration_days(&self) -> Option<i64> {
        let start = parse_iso_date(&self.start_date)?;
        let end = parse_iso_date(&self.end_date)?;
        Some((end - start).num_days().abs())
    }

    /// Duration rendered as "`<N> days`", or `None` when dates are
    /// unparseable.
    pub fn duration_label(&self) -> Option<String> {
        self.duration_days().map(|days| format!("{days} days"))
    }
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
