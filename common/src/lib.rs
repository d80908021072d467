//! OpenVote Kenya Common Library
//!
//! Domain types, sample datasets and view models shared between the
//! Web (WASM) front end and native tests.

pub mod error;
pub mod heatmap;
pub mod sample;
pub mod types;
pub mod wizard;

pub use error::{Error, Result};
pub use heatmap::{total_submissions, HeatBucket};
pub use types::{
    Accent, CountyMarker, GpsFix, HeadlineStat, RealtimeMetric, StatusPanel, SubmissionRecord,
    SubmissionStatus, Trend, VoteTally,
};
pub use wizard::{
    ImageAttachment, StationDetails, SubmissionReceipt, SubmissionRequest, UploadWizard,
    WizardStep, PLACEHOLDER_ANCHOR_HASH,
};
