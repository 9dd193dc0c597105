//! Contact form data and submission state machine types.

use serde::Serialize;

/// Status line copy, kept verbatim from the adventterra.com site.
pub mod status_msg {
    pub const HONEYPOT_ACCEPTED: &str = "Thanks.";
    pub const MISSING_REQUIRED: &str = "Please fill required fields.";
    pub const SENDING: &str = "Sending...";
    pub const SENT: &str = "Message sent. Thanks.";
    pub const FAILED: &str = "Send failed. Try again later.";
}

/// The payload forwarded to the mail-dispatch collaborator.
///
/// Field names match the relay's template parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// The visible, focusable form fields, in tab order.
///
/// The honeypot is deliberately absent: it must never be reachable from the
/// keyboard, only from automated form fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Phone,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Message,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Message => "Message",
        }
    }

    #[must_use]
    pub const fn required(self) -> bool {
        matches!(self, ContactField::Email | ContactField::Message)
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Phone,
            ContactField::Phone => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Phone => ContactField::Email,
            ContactField::Message => ContactField::Phone,
        }
    }
}

/// Free-text form values, including the hidden honeypot field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// Honeypot. Hidden from the UI; a non-empty value marks a bot.
    pub website: String,
}

/// What a submission attempt should do, decided before any IO happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Validation failed; stay in `Idle` and show the message.
    Rejected(&'static str),
    /// Honeypot tripped; report success without contacting the relay.
    HoneypotTripped,
    /// Genuine submission; dispatch this payload.
    Dispatch(MailPayload),
}

impl ContactForm {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Message => &mut self.message,
        }
    }

    /// Reset every field, honeypot included.
    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    /// Decide what submitting the current values should do.
    ///
    /// The honeypot check runs first: detected bots must produce zero relay
    /// traffic, so validation messages are never shown to them either.
    #[must_use]
    pub fn decide_submit(&self) -> SubmitDecision {
        if !self.website.is_empty() {
            return SubmitDecision::HoneypotTripped;
        }
        if self.email.is_empty() || self.message.is_empty() {
            return SubmitDecision::Rejected(status_msg::MISSING_REQUIRED);
        }
        SubmitDecision::Dispatch(MailPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            message: self.message.clone(),
        })
    }
}

/// Submission lifecycle: `Idle -> Sending -> {Sent | Failed} -> Idle`.
///
/// Both `Sent` and `Failed` auto-revert to `Idle` after a fixed delay
/// (driven by the engine tick). `Failed` leaves the field values intact so
/// the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

impl SubmissionStatus {
    /// The submit affordance is disabled while a dispatch is outstanding.
    #[must_use]
    pub const fn submit_enabled(self) -> bool {
        !matches!(self, SubmissionStatus::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactField, ContactForm, MailPayload, SubmitDecision, status_msg};

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            message: "Interested in Singapore listings".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn valid_form_dispatches_exact_payload() {
        let decision = filled_form().decide_submit();
        assert_eq!(
            decision,
            SubmitDecision::Dispatch(MailPayload {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: String::new(),
                message: "Interested in Singapore listings".to_string(),
            })
        );
    }

    #[test]
    fn missing_required_fields_reject() {
        let mut form = filled_form();
        form.email.clear();
        assert_eq!(
            form.decide_submit(),
            SubmitDecision::Rejected(status_msg::MISSING_REQUIRED)
        );

        let mut form = filled_form();
        form.message.clear();
        assert_eq!(
            form.decide_submit(),
            SubmitDecision::Rejected(status_msg::MISSING_REQUIRED)
        );
    }

    #[test]
    fn honeypot_wins_over_validation() {
        // A bot that fills the honeypot but nothing else still gets the
        // silent-accept path, never a validation message.
        let form = ContactForm {
            website: "https://spam.example".to_string(),
            ..ContactForm::default()
        };
        assert_eq!(form.decide_submit(), SubmitDecision::HoneypotTripped);
    }

    #[test]
    fn tab_order_cycles_and_skips_honeypot() {
        let mut field = ContactField::Name;
        for _ in 0..ContactField::ALL.len() {
            field = field.next();
        }
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
    }
}
