//! Hardcoded demonstration datasets
//!
//! Everything the dashboard renders comes from these fixed arrays. No
//! fetching, no persistence; the values are illustrative only.

use crate::types::{
    Accent, CountyMarker, HeadlineStat, RealtimeMetric, StatusPanel, SubmissionRecord,
    SubmissionStatus, Trend, VoteTally,
};

/// County markers for the heat map. Positions are percentage offsets
/// into the map container, not projected coordinates.
pub fn county_markers() -> Vec<CountyMarker> {
    [
        ("Nairobi", 156, 142, 60.0, 65.0),
        ("Kiambu", 89, 81, 58.0, 60.0),
        ("Mombasa", 134, 128, 75.0, 85.0),
        ("Kisumu", 78, 72, 25.0, 70.0),
        ("Nakuru", 112, 105, 35.0, 55.0),
        ("Eldoret", 67, 61, 30.0, 45.0),
        ("Meru", 93, 87, 65.0, 50.0),
        ("Machakos", 71, 68, 65.0, 70.0),
    ]
    .into_iter()
    .map(|(name, submissions, verified, x_pct, y_pct)| CountyMarker {
        name: name.to_string(),
        submissions,
        verified,
        x_pct,
        y_pct,
    })
    .collect()
}

/// The recent-submissions feed, newest first.
pub fn recent_submissions() -> Vec<SubmissionRecord> {
    let record = |id: &str,
                  station: &str,
                  county: &str,
                  constituency: &str,
                  submitted: &str,
                  status: SubmissionStatus,
                  votes: (u32, u32, u32)| SubmissionRecord {
        id: id.to_string(),
        polling_station: station.to_string(),
        county: county.to_string(),
        constituency: constituency.to_string(),
        submitted: submitted.to_string(),
        status,
        votes: VoteTally {
            candidate_a: votes.0,
            candidate_b: votes.1,
            candidate_c: votes.2,
        },
    };

    vec![
        record(
            "F34A-2024-001",
            "001A",
            "Nairobi",
            "Westlands",
            "2 minutes ago",
            SubmissionStatus::Verified,
            (234, 189, 156),
        ),
        record(
            "F34A-2024-002",
            "045B",
            "Kiambu",
            "Kikuyu",
            "5 minutes ago",
            SubmissionStatus::Processing,
            (312, 278, 201),
        ),
        record(
            "F34A-2024-003",
            "023C",
            "Mombasa",
            "Mvita",
            "8 minutes ago",
            SubmissionStatus::Verified,
            (198, 245, 167),
        ),
        record(
            "F34A-2024-004",
            "067A",
            "Kisumu",
            "Kisumu Central",
            "12 minutes ago",
            SubmissionStatus::Flagged,
            (156, 134, 189),
        ),
        record(
            "F34A-2024-005",
            "089D",
            "Nakuru",
            "Nakuru Town West",
            "15 minutes ago",
            SubmissionStatus::Verified,
            (267, 223, 198),
        ),
    ]
}

/// The four headline stat cards.
pub fn headline_stats() -> Vec<HeadlineStat> {
    let stat = |title: &str, value: &str, change: &str, accent| HeadlineStat {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        accent,
    };

    vec![
        stat("Total Forms Uploaded", "2,847", "+156 today", Accent::Blue),
        stat("Blockchain Verified", "2,691", "94.5% verified", Accent::Green),
        stat("Active Counties", "41/47", "87% coverage", Accent::Purple),
        stat("Citizen Contributors", "1,523", "+67 new", Accent::Orange),
    ]
}

/// The real-time metrics panel rows.
pub fn realtime_metrics() -> Vec<RealtimeMetric> {
    let metric = |label: &str, value: &str, trend| RealtimeMetric {
        label: label.to_string(),
        value: value.to_string(),
        trend,
    };

    vec![
        metric("Forms per Hour", "23", Trend::Up),
        metric("Verification Rate", "96.2%", Trend::Up),
        metric("Response Time", "2.4s", Trend::Down),
    ]
}

/// The three system-status panels. The blockchain/OCR/IPFS claims are
/// cosmetic labels only; nothing behind them is implemented.
pub fn status_panels() -> Vec<StatusPanel> {
    let panel = |name: &str, badge: &str, detail: &str, accent| StatusPanel {
        name: name.to_string(),
        badge: badge.to_string(),
        detail: detail.to_string(),
        accent,
    };

    vec![
        panel(
            "Blockchain Network",
            "Online",
            "All systems operational",
            Accent::Green,
        ),
        panel(
            "OCR Processing",
            "Active",
            "Processing queue: 3 forms",
            Accent::Blue,
        ),
        panel("Data Storage", "IPFS", "Distributed & secure", Accent::Purple),
    ]
}

/// Counties offered by the upload form's select.
pub fn county_names() -> Vec<&'static str> {
    vec![
        "Nairobi",
        "Kiambu",
        "Mombasa",
        "Kisumu",
        "Nakuru",
        "Uasin Gishu",
        "Meru",
        "Machakos",
        "Kakamega",
        "Bungoma",
        "Kilifi",
        "Taita Taveta",
        "Laikipia",
        "Isiolo",
        "Marsabit",
    ]
}
