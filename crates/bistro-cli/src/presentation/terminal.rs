//! Line-oriented presenter.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use bistro_core::{PresenterPort, Receipt};

struct View<W> {
    out: W,
    transcript: String,
    email: String,
    confirm_enabled: bool,
}

/// Renders session output as lines and holds the input fields a graphical
/// surface would show: the email box and the confirm control.
pub struct TerminalPresenter<W: Write + Send = io::Stdout> {
    view: Mutex<View<W>>,
}

impl TerminalPresenter {
    /// Presenter writing to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            view: Mutex::new(View {
                out,
                transcript: String::new(),
                email: String::new(),
                confirm_enabled: false,
            }),
        }
    }

    /// Current contents of the email field.
    pub fn email(&self) -> String {
        self.view().email.clone()
    }

    pub fn set_email(&self, email: impl Into<String>) {
        self.view().email = email.into();
    }

    /// Whether the confirm control currently accepts input.
    pub fn confirm_enabled(&self) -> bool {
        self.view().confirm_enabled
    }

    /// The transcript as last rendered.
    pub fn transcript(&self) -> String {
        self.view().transcript.clone()
    }

    /// Print a free-form notice outside the session's own output.
    pub fn notice(&self, text: &str) {
        self.write(|out| writeln!(out, "  {text}"));
    }

    /// Consume the presenter and return its writer.
    pub fn into_inner(self) -> W {
        self.view
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }

    fn view(&self) -> MutexGuard<'_, View<W>> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self, render: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut view = self.view();
        if let Err(e) = render(&mut view.out).and_then(|()| view.out.flush()) {
            tracing::debug!(error = %e, "Terminal write failed");
        }
    }
}

impl<W: Write + Send> PresenterPort for TerminalPresenter<W> {
    fn render_transcript(&self, text: &str) {
        self.view().transcript = text.to_string();
        if !text.is_empty() {
            self.write(|out| writeln!(out, "  🎤 {text}"));
        }
    }

    fn render_status(&self, text: &str) {
        self.write(|out| writeln!(out, "» {text}"));
    }

    fn render_receipt(&self, receipt: &Receipt) {
        self.write(|out| {
            writeln!(out, "🧾 Your order")?;
            for line in &receipt.lines {
                writeln!(out, "   {line}")?;
            }
            writeln!(out, "   {}", receipt.total_line())
        });
    }

    fn set_confirm_enabled(&self, enabled: bool) {
        self.view().confirm_enabled = enabled;
    }

    fn clear_inputs(&self) {
        let mut view = self.view();
        view.email.clear();
        view.transcript.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bistro_core::{OrderLine, OrderResult};

    fn printed(presenter: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn renders_status_and_transcript_lines() {
        let presenter = TerminalPresenter::new(Vec::new());
        presenter.render_status("Listening... please say your order");
        presenter.render_transcript("two tea");
        presenter.render_transcript("");

        assert_eq!(presenter.transcript(), "");
        assert_eq!(
            printed(presenter),
            "» Listening... please say your order\n  🎤 two tea\n"
        );
    }

    #[test]
    fn renders_receipt() {
        let result = OrderResult {
            saved: true,
            items: vec![OrderLine {
                name: "Tea".to_string(),
                qty: 2,
                price: 20.0,
            }],
            total: 40.0,
            email_sent: true,
            error: None,
        };
        let presenter = TerminalPresenter::new(Vec::new());
        presenter.render_receipt(&result.receipt());

        assert_eq!(
            printed(presenter),
            "🧾 Your order\n   Tea × 2 — ₹40\n   Total: ₹40\n"
        );
    }

    #[test]
    fn clear_inputs_empties_email_and_transcript() {
        let presenter = TerminalPresenter::new(Vec::new());
        presenter.set_email("guest@example.com");
        presenter.render_transcript("two tea");
        presenter.clear_inputs();

        assert!(presenter.email().is_empty());
        assert!(presenter.transcript().is_empty());
    }

    #[test]
    fn confirm_flag_is_tracked() {
        let presenter = TerminalPresenter::new(Vec::new());
        assert!(!presenter.confirm_enabled());
        presenter.set_confirm_enabled(true);
        assert!(presenter.confirm_enabled());
    }
}
