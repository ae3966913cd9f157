use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::AppError;

// ── Traveler party size buckets ─────────────────────────────────────

/// How many people are traveling, bucketed the way the intake form asks.
///
/// Serialized as the form values ("1", "2", "3-4", "5+") so the future
/// submission payload matches what the select control collects.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum TravelerParty {
    #[default]
    #[serde(rename = "1")]
    Solo,
    #[serde(rename = "2")]
    Pair,
    #[serde(rename = "3-4")]
    SmallGroup,
    #[serde(rename = "5+")]
    LargeGroup,
}

/// All party sizes in form display order.
pub const ALL_PARTIES: &[TravelerParty] = &[
    TravelerParty::Solo,
    TravelerParty::Pair,
    TravelerParty::SmallGroup,
    TravelerParty::LargeGroup,
];

impl TravelerParty {
    /// Form value as submitted by the select control.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelerParty::Solo => "1",
            TravelerParty::Pair => "2",
            TravelerParty::SmallGroup => "3-4",
            TravelerParty::LargeGroup => "5+",
        }
    }

    /// Human-readable label for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            TravelerParty::Solo => "1 Person",
            TravelerParty::Pair => "2 People",
            TravelerParty::SmallGroup => "3-4 People",
            TravelerParty::LargeGroup => "5+ People",
        }
    }

    /// Parse a form value, defaulting to a solo traveler.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "2" => TravelerParty::Pair,
            "3-4" => TravelerParty::SmallGroup,
            "5+" => TravelerParty::LargeGroup,
            _ => TravelerParty::Solo,
        }
    }
}

// ── Budget buckets ──────────────────────────────────────────────────

/// Budget range for the planned trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRange {
    #[default]
    Budget,
    #[serde(rename = "mid")]
    MidRange,
    Luxury,
}

/// All budget ranges in form display order.
pub const ALL_BUDGETS: &[BudgetRange] = &[
    BudgetRange::Budget,
    BudgetRange::MidRange,
    BudgetRange::Luxury,
];

impl BudgetRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Budget => "budget",
            BudgetRange::MidRange => "mid",
            BudgetRange::Luxury => "luxury",
        }
    }

    /// Human-readable label for display in UI.
    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Budget => "Budget ($500-$1000)",
            BudgetRange::MidRange => "Mid-range ($1000-$3000)",
            BudgetRange::Luxury => "Luxury ($3000+)",
        }
    }

    /// Parse a form value, defaulting to the lowest bucket.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "mid" => BudgetRange::MidRange,
            "luxury" => BudgetRange::Luxury,
            _ => BudgetRange::Budget,
        }
    }
}

// ── Plan-a-trip request ─────────────────────────────────────────────

/// Intake payload for the trip-planning generation service.
///
/// Collected by the plan-a-trip form; the service that consumes it does
/// not exist yet, so today this type only defines the wire shape and the
/// client-side validation rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTripRequest {
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub travelers: TravelerParty,
    pub budget: BudgetRange,
}

impl PlanTripRequest {
    /// Check the required fields, collecting per-field messages.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut field_errors = HashMap::new();
        if self.destination.trim().is_empty() {
            field_errors.insert("destination".to_string(), "Destination is required".to_string());
        }
        if self.start_date.trim().is_empty() {
            field_errors.insert("start_date".to_string(), "Start date is required".to_string());
        }
        if self.end_date.trim().is_empty() {
            field_errors.insert("end_date".to_string(), "End date is required".to_string());
        }
        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", field_errors))
        }
    }
}
