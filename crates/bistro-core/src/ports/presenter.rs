//! Presentation port: the only mutation channel to the visible surface.

use crate::domain::Receipt;

/// Rendering surface driven by the session.
///
/// The session never touches presentation state except through these calls.
/// Blocking notices (validation failures) are rendered as status text.
pub trait PresenterPort: Send + Sync {
    /// Show the live or final transcript.
    fn render_transcript(&self, text: &str);

    /// Show a status or notice line.
    fn render_status(&self, text: &str);

    /// Show the order receipt.
    fn render_receipt(&self, receipt: &Receipt);

    /// Enable or disable the confirmation control.
    fn set_confirm_enabled(&self, enabled: bool);

    /// Clear the transcript and email inputs.
    fn clear_inputs(&self);
}

/// A presenter that discards everything. Useful for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPresenter;

impl PresenterPort for NoopPresenter {
    fn render_transcript(&self, _text: &str) {}
    fn render_status(&self, _text: &str) {}
    fn render_receipt(&self, _receipt: &Receipt) {}
    fn set_confirm_enabled(&self, _enabled: bool) {}
    fn clear_inputs(&self) {}
}
