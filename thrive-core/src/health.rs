//! Health check-in data model: daily logs, moods, detected anomalies,
//! and the generated weekly insight.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mood reported in a daily check-in. Wire names match the check-in
/// collaborator exactly ("Happy", "Sad", ...).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
    Anxious,
}

impl Mood {
    /// Numeric value used by the mood average (Happy highest)
    pub fn score(&self) -> f64 {
        match self {
            Mood::Happy => 4.0,
            Mood::Neutral => 3.0,
            Mood::Sad => 2.0,
            Mood::Anxious => 1.0,
        }
    }

    /// Moods that raise an anomaly on their own
    pub fn is_negative(&self) -> bool {
        matches!(self, Mood::Sad | Mood::Anxious)
    }
}

/// One daily health check-in. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthLog {
    pub user_id: String,
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub sleep_hours: f64,
    pub meals: u32,
    pub exercise_minutes: u32,
    #[serde(default)]
    pub symptoms: String,
}

impl HealthLog {
    /// Create a new HealthLog with no symptoms
    pub fn new(
        user_id: impl Into<String>,
        date: DateTime<Utc>,
        mood: Mood,
        sleep_hours: f64,
        meals: u32,
        exercise_minutes: u32,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            mood,
            sleep_hours,
            meals,
            exercise_minutes,
            symptoms: String::new(),
        }
    }

    pub fn with_symptoms(mut self, symptoms: impl Into<String>) -> Self {
        self.symptoms = symptoms.into();
        self
    }
}

/// Severity of a detected anomaly
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

/// A health reading that deviates from the user's recent norm
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthAnomaly {
    pub date: DateTime<Utc>,
    pub description: String,
    pub severity: Severity,
}

/// Health score aggregated into one time bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthTrendPoint {
    pub date: String,
    pub score: u32,
}

/// Narrative summary generated from recent health and financial data.
/// Produced on demand; persistence belongs to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInsight {
    pub user_id: String,
    pub week_of: DateTime<Utc>,
    pub health_summary: String,
    pub financial_summary: String,
    pub recommendations: Vec<String>,
}
