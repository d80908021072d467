//! Upload wizard view model
//!
//! The three-step Form 34A upload flow as an explicit state machine:
//! Capture (attach an image) → Details (station metadata) →
//! Confirmation (receipt). All state is local and ephemeral; `reset`
//! discards everything. The UI disables buttons via the `can_*`
//! predicates, and the transition methods enforce the same rules so
//! the model cannot be driven into an illegal state.

use crate::error::{Error, Result};
use crate::types::{GpsFix, SubmissionStatus};
use serde::{Deserialize, Serialize};

/// Placeholder anchor hash shown on the success screen. A real backend
/// would return the transaction hash of the anchoring write.
pub const PLACEHOLDER_ANCHOR_HASH: &str = "0x7f9a8b2c3d...";

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Capture,
    Details,
    Confirmation,
}

impl WizardStep {
    /// 1-based step number for the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Capture => 1,
            WizardStep::Details => 2,
            WizardStep::Confirmation => 3,
        }
    }
}

/// Handle to the selected image. The file is never read or uploaded;
/// only its name is kept for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub file_name: String,
}

/// Station metadata entered on the details step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationDetails {
    pub polling_station: String,
    pub county: String,
    pub constituency: String,
    pub ward: String,
    pub notes: String,
}

/// What the wizard would hand to a submission backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub polling_station: String,
    pub county: String,
    pub constituency: String,
    pub ward: String,
    pub notes: String,
    pub image_name: String,
    pub gps: Option<GpsFix>,
}

/// Outcome of a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub anchor_hash: String,
    pub status: SubmissionStatus,
}

impl SubmissionReceipt {
    /// The fixed receipt the simulated backend always returns.
    pub fn simulated() -> Self {
        SubmissionReceipt {
            anchor_hash: PLACEHOLDER_ANCHOR_HASH.to_string(),
            status: SubmissionStatus::Verified,
        }
    }
}

/// The upload flow's local state
#[derive(Debug, Clone, Default)]
pub struct UploadWizard {
    pub step: WizardStep,
    pub image: Option<ImageAttachment>,
    pub details: StationDetails,
    pub gps: Option<GpsFix>,
    pub uploading: bool,
    pub receipt: Option<SubmissionReceipt>,
}

impl UploadWizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected image. Only meaningful on the capture step.
    pub fn attach_image(&mut self, file_name: impl Into<String>) -> Result<()> {
        if self.step != WizardStep::Capture {
            return Err(Error::Transition("image can only be attached on capture"));
        }
        self.image = Some(ImageAttachment {
            file_name: file_name.into(),
        });
        Ok(())
    }

    /// Record a one-shot geolocation fix. Best effort; absence is fine.
    pub fn set_gps(&mut self, fix: GpsFix) {
        self.gps = Some(fix);
    }

    /// Continue is enabled once an image is attached.
    pub fn can_continue(&self) -> bool {
        self.step == WizardStep::Capture && self.image.is_some()
    }

    /// Capture → Details
    pub fn advance(&mut self) -> Result<()> {
        if !self.can_continue() {
            return Err(Error::Transition("continue requires an attached image"));
        }
        self.step = WizardStep::Details;
        Ok(())
    }

    /// Details → Capture. No-op elsewhere.
    pub fn back(&mut self) {
        if self.step == WizardStep::Details && !self.uploading {
            self.step = WizardStep::Capture;
        }
    }

    /// Submit is enabled once the station code and county are filled in.
    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Details
            && !self.details.polling_station.is_empty()
            && !self.details.county.is_empty()
            && !self.uploading
    }

    /// Mark the submission in flight. At most one per form instance.
    pub fn begin_upload(&mut self) -> Result<()> {
        if !self.can_submit() {
            return Err(Error::Transition("submit requires station code and county"));
        }
        self.uploading = true;
        Ok(())
    }

    /// Build the request the backend receives.
    pub fn submission_request(&self) -> SubmissionRequest {
        SubmissionRequest {
            polling_station: self.details.polling_station.clone(),
            county: self.details.county.clone(),
            constituency: self.details.constituency.clone(),
            ward: self.details.ward.clone(),
            notes: self.details.notes.clone(),
            image_name: self
                .image
                .as_ref()
                .map(|i| i.file_name.clone())
                .unwrap_or_default(),
            gps: self.gps,
        }
    }

    /// Details → Confirmation with the returned receipt.
    pub fn complete_upload(&mut self, receipt: SubmissionReceipt) -> Result<()> {
        if !self.uploading {
            return Err(Error::Transition("no submission in flight"));
        }
        self.uploading = false;
        self.receipt = Some(receipt);
        self.step = WizardStep::Confirmation;
        Ok(())
    }

    /// Clear everything and return to the capture step.
    pub fn reset(&mut self) {
        *self = UploadWizard::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let wizard = UploadWizard::new();
        assert_eq!(wizard.step, WizardStep::Capture);
        assert!(wizard.image.is_none());
        assert!(!wizard.can_continue());
        assert!(!wizard.can_submit());
    }

    #[test]
    fn test_continue_gated_on_image() {
        let mut wizard = UploadWizard::new();
        assert!(wizard.advance().is_err());

        wizard.attach_image("form34a.jpg").unwrap();
        assert!(wizard.can_continue());
        wizard.advance().unwrap();
        assert_eq!(wizard.step, WizardStep::Details);
    }

    #[test]
    fn test_attach_rejected_off_capture_step() {
        let mut wizard = UploadWizard::new();
        wizard.attach_image("form34a.jpg").unwrap();
        wizard.advance().unwrap();

        let err = wizard.attach_image("other.jpg").unwrap_err();
        assert!(matches!(err, Error::Transition(_)));
    }

    #[test]
    fn test_submit_gated_on_station_and_county() {
        let mut wizard = UploadWizard::new();
        wizard.attach_image("form34a.jpg").unwrap();
        wizard.advance().unwrap();
        assert!(!wizard.can_submit());
        assert!(wizard.begin_upload().is_err());

        wizard.details.polling_station = "001A".to_string();
        assert!(!wizard.can_submit());

        wizard.details.county = "Nairobi".to_string();
        assert!(wizard.can_submit());
    }

    #[test]
    fn test_single_in_flight_submission() {
        let mut wizard = UploadWizard::new();
        wizard.attach_image("form34a.jpg").unwrap();
        wizard.advance().unwrap();
        wizard.details.polling_station = "001A".to_string();
        wizard.details.county = "Nairobi".to_string();

        wizard.begin_upload().unwrap();
        assert!(wizard.uploading);
        assert!(!wizard.can_submit());
        assert!(wizard.begin_upload().is_err());
    }

    #[test]
    fn test_back_blocked_while_uploading() {
        let mut wizard = UploadWizard::new();
        wizard.attach_image("form34a.jpg").unwrap();
        wizard.advance().unwrap();
        wizard.details.polling_station = "001A".to_string();
        wizard.details.county = "Nairobi".to_string();
        wizard.begin_upload().unwrap();

        wizard.back();
        assert_eq!(wizard.step, WizardStep::Details);
    }

    #[test]
    fn test_complete_requires_in_flight() {
        let mut wizard = UploadWizard::new();
        let err = wizard.complete_upload(SubmissionReceipt::simulated()).unwrap_err();
        assert!(matches!(err, Error::Transition(_)));
    }

    #[test]
    fn test_submission_request_carries_fields() {
        let mut wizard = UploadWizard::new();
        wizard.attach_image("form34a.jpg").unwrap();
        wizard.set_gps(GpsFix {
            latitude: -1.286389,
            longitude: 36.817223,
        });
        wizard.advance().unwrap();
        wizard.details.polling_station = "001A".to_string();
        wizard.details.county = "Nairobi".to_string();
        wizard.details.constituency = "Westlands".to_string();
        wizard.details.ward = "Parklands".to_string();
        wizard.details.notes = "Clear photo".to_string();

        let request = wizard.submission_request();
        assert_eq!(request.polling_station, "001A");
        assert_eq!(request.image_name, "form34a.jpg");
        assert!(request.gps.is_some());

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"pollingStation\":\"001A\""));
        assert!(json.contains("\"imageName\":\"form34a.jpg\""));
    }

    #[test]
    fn test_simulated_receipt_is_fixed() {
        let receipt = SubmissionReceipt::simulated();
        assert_eq!(receipt.anchor_hash, PLACEHOLDER_ANCHOR_HASH);
        assert_eq!(receipt.status, SubmissionStatus::Verified);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut wizard = UploadWizard::new();
        wizard.attach_image("form34a.jpg").unwrap();
        wizard.set_gps(GpsFix {
            latitude: 0.0,
            longitude: 35.0,
        });
        wizard.advance().unwrap();
        wizard.details.polling_station = "001A".to_string();
        wizard.details.county = "Nairobi".to_string();
        wizard.begin_upload().unwrap();
        wizard.complete_upload(SubmissionReceipt::simulated()).unwrap();
        assert_eq!(wizard.step, WizardStep::Confirmation);

        wizard.reset();
        assert_eq!(wizard.step, WizardStep::Capture);
        assert!(wizard.image.is_none());
        assert!(wizard.gps.is_none());
        assert!(wizard.receipt.is_none());
        assert_eq!(wizard.details, StationDetails::default());
        assert!(!wizard.uploading);
    }
}
