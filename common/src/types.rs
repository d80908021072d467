//! Domain types shared by the dashboard and the upload flow
//!
//! Shared between native tests and the Web (WASM) front end:
//! - SubmissionRecord: a Form 34A submission as shown in the feed
//! - CountyMarker: a county heat-map marker with fixed map coordinates
//! - HeadlineStat / RealtimeMetric / StatusPanel: dashboard copy
//! - GpsFix: a device-reported coordinate pair, captured for display only

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state of a submitted Form 34A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubmissionStatus {
    Verified,
    Processing,
    Flagged,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Verified => "verified",
            SubmissionStatus::Processing => "processing",
            SubmissionStatus::Flagged => "flagged",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionStatus::Verified => "Verified",
            SubmissionStatus::Processing => "Processing",
            SubmissionStatus::Flagged => "Flagged",
        }
    }

    /// Verified submissions show the per-candidate breakdown.
    pub fn shows_vote_breakdown(&self) -> bool {
        matches!(self, SubmissionStatus::Verified)
    }

    /// Flagged submissions show the manual-review notice instead.
    pub fn needs_review(&self) -> bool {
        matches!(self, SubmissionStatus::Flagged)
    }
}

/// Per-candidate vote counts from a single form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTally {
    pub candidate_a: u32,
    pub candidate_b: u32,
    pub candidate_c: u32,
}

/// A Form 34A submission as listed in the recent-submissions feed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    pub polling_station: String,
    pub county: String,
    pub constituency: String,
    /// Display string ("2 minutes ago"); sample data, not a clock reading.
    pub submitted: String,
    pub status: SubmissionStatus,
    pub votes: VoteTally,
}

/// A county on the heat map, positioned by fixed percentage coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyMarker {
    pub name: String,
    pub submissions: u32,
    pub verified: u32,
    pub x_pct: f32,
    pub y_pct: f32,
}

/// Accent color for cards and panels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Accent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
        }
    }
}

/// One of the four headline stat cards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineStat {
    pub title: String,
    pub value: String,
    pub change: String,
    pub accent: Accent,
}

/// Trend direction for a real-time metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
}

/// A real-time metric row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtimeMetric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

/// A system status panel (blockchain / OCR / storage labels)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPanel {
    pub name: String,
    pub badge: String,
    pub detail: String,
    pub accent: Accent,
}

/// A device-reported coordinate pair, captured once for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GpsFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl fmt::Display for GpsFix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_rendering_rules() {
        assert!(SubmissionStatus::Verified.shows_vote_breakdown());
        assert!(!SubmissionStatus::Verified.needs_review());

        assert!(SubmissionStatus::Flagged.needs_review());
        assert!(!SubmissionStatus::Flagged.shows_vote_breakdown());

        assert!(!SubmissionStatus::Processing.shows_vote_breakdown());
        assert!(!SubmissionStatus::Processing.needs_review());
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(SubmissionStatus::Verified.as_str(), "verified");
        assert_eq!(SubmissionStatus::Processing.as_str(), "processing");
        assert_eq!(SubmissionStatus::Flagged.as_str(), "flagged");
    }

    #[test]
    fn test_gps_fix_display_six_decimals() {
        let fix = GpsFix {
            latitude: -1.286389,
            longitude: 36.817223,
        };
        assert_eq!(fix.to_string(), "-1.286389, 36.817223");

        let rounded = GpsFix {
            latitude: 0.5,
            longitude: 35.0,
        };
        assert_eq!(rounded.to_string(), "0.500000, 35.000000");
    }

    #[test]
    fn test_submission_record_serializes_camel_case() {
        let record = SubmissionRecord {
            id: "F34A-2024-001".to_string(),
            polling_station: "001A".to_string(),
            county: "Nairobi".to_string(),
            constituency: "Westlands".to_string(),
            submitted: "2 minutes ago".to_string(),
            status: SubmissionStatus::Verified,
            votes: VoteTally {
                candidate_a: 234,
                candidate_b: 189,
                candidate_c: 156,
            },
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"pollingStation\":\"001A\""));
        assert!(json.contains("\"status\":\"verified\""));
        assert!(json.contains("\"candidateA\":234"));
    }
}
