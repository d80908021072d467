//! Submission backend stub
//!
//! The upload form talks to a `SubmissionBackend`; the only
//! implementation here simulates the network round trip with a fixed
//! delay and an unconditional success. A real backend would POST the
//! request and return the anchoring transaction hash without the view
//! changing.

use gloo::console;
use gloo::timers::future::TimeoutFuture;
use openvote_common::{SubmissionReceipt, SubmissionRequest};

/// Where a submitted form goes
#[allow(async_fn_in_trait)]
pub trait SubmissionBackend {
    /// Submit a form. The stub is infallible; a networked
    /// implementation would surface transport errors here.
    async fn submit(&self, request: &SubmissionRequest) -> SubmissionReceipt;
}

/// Simulated backend: log, wait, succeed.
pub struct SimulatedBackend {
    delay_ms: u32,
}

/// Matches the original demo's artificial upload duration.
pub const SIMULATED_DELAY_MS: u32 = 3000;

impl SimulatedBackend {
    pub fn new() -> Self {
        SimulatedBackend {
            delay_ms: SIMULATED_DELAY_MS,
        }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionBackend for SimulatedBackend {
    async fn submit(&self, request: &SubmissionRequest) -> SubmissionReceipt {
        match serde_json::to_string(request) {
            Ok(json) => console::log!("simulated submission:", json),
            Err(e) => console::warn!("submission request not serializable:", e.to_string()),
        }
        TimeoutFuture::new(self.delay_ms).await;
        SubmissionReceipt::simulated()
    }
}
