//! Contact form orchestration: validation, honeypot short-circuit, dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use terra_mailer::MailDispatch;
use terra_types::{ContactField, ContactForm, SubmissionStatus, SubmitDecision, status_msg};

/// How long "Message sent." (or the failure notice) stays visible before the
/// form returns to idle.
pub(crate) const SENT_REVERT_DELAY: Duration = Duration::from_secs(3);
/// Bots get a shorter acknowledgement window than real senders.
pub(crate) const HONEYPOT_REVERT_DELAY: Duration = Duration::from_secs(2);

/// Outcome of an in-flight dispatch, reported back to the frame loop.
#[derive(Debug)]
pub enum MailEvent {
    Sent,
    Failed(String),
}

/// The contact form component: field values, focus, and submission lifecycle.
///
/// ```text
/// Idle ──submit (valid)──> Sending ──ok──>  Sent  ──delay──> Idle
///   ^                         │
///   │                         └──err──> Failed ──delay──> Idle
///   └──submit (honeypot)──> Sent (no dispatch, form cleared)
/// ```
#[derive(Debug)]
pub struct ContactFormState {
    form: ContactForm,
    focus: ContactField,
    status: SubmissionStatus,
    status_line: String,
    revert_at: Option<Instant>,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            form: ContactForm::default(),
            focus: ContactField::default(),
            status: SubmissionStatus::Idle,
            status_line: String::new(),
            revert_at: None,
        }
    }
}

impl ContactFormState {
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Test and bot entry point; the focusable UI never reaches the honeypot.
    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn input_char(&mut self, c: char) {
        self.form.field_mut(self.focus).push(c);
    }

    pub fn backspace(&mut self) {
        self.form.field_mut(self.focus).pop();
    }

    /// Attempt a submission. Returns `true` when a dispatch task was spawned.
    ///
    /// While `Sending`, repeated activation is ignored: the submit affordance
    /// is disabled for the duration of the outstanding request.
    pub fn submit(
        &mut self,
        dispatch: &Arc<dyn MailDispatch>,
        events: &mpsc::UnboundedSender<MailEvent>,
        now: Instant,
    ) -> bool {
        if !self.status.submit_enabled() {
            return false;
        }

        match self.form.decide_submit() {
            SubmitDecision::Rejected(message) => {
                self.status = SubmissionStatus::Idle;
                self.status_line = message.to_string();
                self.revert_at = None;
                false
            }
            SubmitDecision::HoneypotTripped => {
                // Detected bot: report success without touching the relay.
                tracing::info!("honeypot tripped; dropping submission");
                self.form.clear();
                self.status = SubmissionStatus::Sent;
                self.status_line = status_msg::HONEYPOT_ACCEPTED.to_string();
                self.revert_at = Some(now + HONEYPOT_REVERT_DELAY);
                false
            }
            SubmitDecision::Dispatch(payload) => {
                self.status = SubmissionStatus::Sending;
                self.status_line = status_msg::SENDING.to_string();
                self.revert_at = None;

                let send = dispatch.send(payload);
                let events = events.clone();
                tokio::spawn(async move {
                    let event = match send.await {
                        Ok(()) => MailEvent::Sent,
                        Err(e) => {
                            tracing::warn!(error = %e, "mail dispatch failed");
                            MailEvent::Failed(e.to_string())
                        }
                    };
                    // Receiver dropped means the app is gone; nothing to report.
                    let _ = events.send(event);
                });
                true
            }
        }
    }

    /// Apply a dispatch outcome reported by the spawned task.
    pub fn apply_event(&mut self, event: MailEvent, now: Instant) {
        if self.status != SubmissionStatus::Sending {
            // Stale event after a revert; the single-outstanding-call rule
            // makes this unreachable in practice, but stay defensive.
            return;
        }
        match event {
            MailEvent::Sent => {
                self.form.clear();
                self.status = SubmissionStatus::Sent;
                self.status_line = status_msg::SENT.to_string();
                self.revert_at = Some(now + SENT_REVERT_DELAY);
            }
            MailEvent::Failed(_) => {
                // Field values stay intact so the user can retry.
                self.status = SubmissionStatus::Failed;
                self.status_line = status_msg::FAILED.to_string();
                self.revert_at = Some(now + SENT_REVERT_DELAY);
            }
        }
    }

    /// Time-driven revert: `Sent`/`Failed` fall back to `Idle` after the
    /// fixed delay, clearing the status line.
    pub fn tick(&mut self, now: Instant) {
        if let Some(revert_at) = self.revert_at
            && now >= revert_at
        {
            self.status = SubmissionStatus::Idle;
            self.status_line.clear();
            self.revert_at = None;
        }
    }
}
