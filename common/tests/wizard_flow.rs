//! Upload wizard lifecycle tests
//!
//! Walks the full capture → details → confirmation flow the way the
//! browser UI drives it.

use openvote_common::{
    GpsFix, SubmissionReceipt, SubmissionStatus, UploadWizard, WizardStep,
    PLACEHOLDER_ANCHOR_HASH,
};

/// The happy path: attach, fill in, submit, land on the receipt.
#[test]
fn test_full_upload_flow() {
    let mut wizard = UploadWizard::new();

    wizard.attach_image("IMG_2024_0834.jpg").unwrap();
    wizard.set_gps(GpsFix {
        latitude: -1.292066,
        longitude: 36.821946,
    });
    wizard.advance().unwrap();
    assert_eq!(wizard.step.number(), 2);

    wizard.details.polling_station = "045B".to_string();
    wizard.details.county = "Kiambu".to_string();
    wizard.details.constituency = "Kikuyu".to_string();

    wizard.begin_upload().unwrap();
    let request = wizard.submission_request();
    assert_eq!(request.county, "Kiambu");
    assert_eq!(request.image_name, "IMG_2024_0834.jpg");
    assert_eq!(request.gps.unwrap().to_string(), "-1.292066, 36.821946");

    wizard.complete_upload(SubmissionReceipt::simulated()).unwrap();
    assert_eq!(wizard.step, WizardStep::Confirmation);

    let receipt = wizard.receipt.as_ref().unwrap();
    assert_eq!(receipt.anchor_hash, PLACEHOLDER_ANCHOR_HASH);
    assert_eq!(receipt.status, SubmissionStatus::Verified);
}

/// Going back from details keeps the attached image and entered fields.
#[test]
fn test_back_preserves_entered_state() {
    let mut wizard = UploadWizard::new();
    wizard.attach_image("form.png").unwrap();
    wizard.advance().unwrap();
    wizard.details.polling_station = "023C".to_string();

    wizard.back();
    assert_eq!(wizard.step, WizardStep::Capture);
    assert!(wizard.image.is_some());
    assert_eq!(wizard.details.polling_station, "023C");

    // Forward again without re-attaching.
    wizard.advance().unwrap();
    assert_eq!(wizard.step, WizardStep::Details);
}

/// Skipping geolocation never blocks the flow.
#[test]
fn test_flow_without_gps_fix() {
    let mut wizard = UploadWizard::new();
    wizard.attach_image("form.jpg").unwrap();
    wizard.advance().unwrap();
    wizard.details.polling_station = "001A".to_string();
    wizard.details.county = "Nairobi".to_string();

    wizard.begin_upload().unwrap();
    assert!(wizard.submission_request().gps.is_none());
    wizard.complete_upload(SubmissionReceipt::simulated()).unwrap();
    assert_eq!(wizard.step, WizardStep::Confirmation);
}

/// After reset the wizard accepts a fresh submission from scratch.
#[test]
fn test_reset_allows_second_submission() {
    let mut wizard = UploadWizard::new();
    wizard.attach_image("first.jpg").unwrap();
    wizard.advance().unwrap();
    wizard.details.polling_station = "089D".to_string();
    wizard.details.county = "Nakuru".to_string();
    wizard.begin_upload().unwrap();
    wizard.complete_upload(SubmissionReceipt::simulated()).unwrap();

    wizard.reset();
    assert!(wizard.advance().is_err());

    wizard.attach_image("second.jpg").unwrap();
    wizard.advance().unwrap();
    wizard.details.polling_station = "067A".to_string();
    wizard.details.county = "Kisumu".to_string();
    wizard.begin_upload().unwrap();
    wizard.complete_upload(SubmissionReceipt::simulated()).unwrap();
    assert_eq!(wizard.step, WizardStep::Confirmation);
}
