use serde::{Deserialize, Serialize};

/// Editorial classification of a student on the teacher roster.
///
/// Set by hand in the roster data; nothing derives it from CGPA or attendance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RosterStatus {
    Excellent,
    Good,
    AtRisk,
    Critical,
}

/// Direction of the arrow drawn next to a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl RosterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterStatus::Excellent => "excellent",
            RosterStatus::Good => "good",
            RosterStatus::AtRisk => "at-risk",
            RosterStatus::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RosterStatus::Excellent => "Excellent",
            RosterStatus::Good => "Good",
            RosterStatus::AtRisk => "At-risk",
            RosterStatus::Critical => "Critical",
        }
    }

    pub fn trend(&self) -> Trend {
        match self {
            RosterStatus::Excellent | RosterStatus::Good => Trend::Up,
            RosterStatus::AtRisk | RosterStatus::Critical => Trend::Down,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub roll_number: String,
    pub course: String,
    pub year: String,
    pub cgpa: f32,
    pub attendance: u8,
    pub status: RosterStatus,
}

/// Case-insensitive substring match on name or roll number.
pub fn filter_roster<'a>(entries: &'a [RosterEntry], query: &str) -> Vec<&'a RosterEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.name.to_lowercase().contains(&needle)
                || e.roll_number.to_lowercase().contains(&needle)
        })
        .collect()
}
