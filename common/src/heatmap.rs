//! Heat-map bucketing for county markers
//!
//! Marker color and size come from a step function on the submission
//! count. The thresholds are fixed display constants, not derived from
//! the dataset.

use crate::types::CountyMarker;

/// Intensity bucket for a county marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeatBucket {
    Low,
    Moderate,
    High,
    Critical,
}

impl HeatBucket {
    /// All buckets in legend order, coolest first.
    pub const ALL: [HeatBucket; 4] = [
        HeatBucket::Low,
        HeatBucket::Moderate,
        HeatBucket::High,
        HeatBucket::Critical,
    ];

    /// Bucket a submission count: >120 critical, >80 high, >40 moderate.
    pub fn for_submissions(submissions: u32) -> Self {
        if submissions > 120 {
            HeatBucket::Critical
        } else if submissions > 80 {
            HeatBucket::High
        } else if submissions > 40 {
            HeatBucket::Moderate
        } else {
            HeatBucket::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            HeatBucket::Low => "heat-low",
            HeatBucket::Moderate => "heat-moderate",
            HeatBucket::High => "heat-high",
            HeatBucket::Critical => "heat-critical",
        }
    }

    /// Marker diameter in pixels, hotter buckets render larger.
    pub fn marker_size_px(&self) -> u32 {
        match self {
            HeatBucket::Low => 12,
            HeatBucket::Moderate => 16,
            HeatBucket::High => 20,
            HeatBucket::Critical => 24,
        }
    }

    /// Legend range label for this bucket.
    pub fn legend_range(&self) -> &'static str {
        match self {
            HeatBucket::Low => "1-40",
            HeatBucket::Moderate => "41-80",
            HeatBucket::High => "81-120",
            HeatBucket::Critical => "120+",
        }
    }
}

/// Sum of submission counts across all markers, shown on the total badge.
pub fn total_submissions(markers: &[CountyMarker]) -> u32 {
    markers.iter().map(|m| m.submissions).sum()
}
