//! Contact form validation and lifecycle.
//!
//! The form is `Editing` until a valid submission hands its payload to the
//! email worker, then `Sending` until the outcome comes back. Fields are only
//! cleared on a successful send.

use crate::model::{ContactField, ContactPayload, SendError};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::{Duration, Instant};
use tracing::{info, warn};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid regex"));

/// How long the "message sent" notice stays on screen.
pub const SENT_NOTICE_DURATION: Duration = Duration::from_secs(5);

/// Validation messages keyed by field, in form order.
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

/// Validate a payload; an empty map means it may be submitted.
pub fn validate(payload: &ContactPayload) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if payload.name.trim().is_empty() {
        errors.insert(ContactField::Name, "Name is required");
    }
    let email = payload.email.trim();
    if email.is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(email) {
        errors.insert(ContactField::Email, "Email is invalid");
    }
    if payload.subject.trim().is_empty() {
        errors.insert(ContactField::Subject, "Subject is required");
    }
    if payload.message.trim().is_empty() {
        errors.insert(ContactField::Message, "Message is required");
    }
    errors
}

/// Whether a send is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Accepting input and submissions.
    Editing,
    /// Waiting for the dispatcher; submissions are ignored.
    Sending,
}

/// Transient line shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The last message went out; shown until `until`.
    Sent {
        /// When the notice expires.
        until: Instant,
    },
    /// The last send failed with this message. Stays until dismissed or replaced.
    Failed(String),
}

/// Field values, validation errors and submission status of the contact form.
#[derive(Debug, Clone)]
pub struct ContactForm {
    payload: ContactPayload,
    errors: FieldErrors,
    focus: ContactField,
    editing: bool,
    status: FormStatus,
    notice: Option<Notice>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Empty form focused on the name field.
    pub fn new() -> Self {
        Self {
            payload: ContactPayload::default(),
            errors: FieldErrors::new(),
            focus: ContactField::Name,
            editing: false,
            status: FormStatus::Editing,
            notice: None,
        }
    }

    /// Current field values.
    pub fn payload(&self) -> &ContactPayload {
        &self.payload
    }

    /// Errors from the last submission attempt still standing.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error for a single field.
    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    /// Focused field.
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    /// True while keystrokes go to the form.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Submission status.
    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Notice shown under the form, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Start capturing keystrokes into the focused field.
    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    /// Return keystrokes to the key bindings.
    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    /// Focus a specific field.
    pub fn focus_field(&mut self, field: ContactField) {
        self.focus = field;
    }

    /// Focus the following field, wrapping.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Focus the preceding field, wrapping.
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Append to the focused field, clearing its error.
    pub fn insert_char(&mut self, c: char) {
        self.payload.field_mut(self.focus).push(c);
        self.errors.remove(&self.focus);
    }

    /// Remove the last character of the focused field, clearing its error.
    pub fn backspace(&mut self) {
        self.payload.field_mut(self.focus).pop();
        self.errors.remove(&self.focus);
    }

    /// Replace a field's value wholesale.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        *self.payload.field_mut(field) = value.into();
        self.errors.remove(&field);
    }

    /// Validate and, if clean, move to `Sending` and return the payload to dispatch.
    ///
    /// Returns `None` while a send is already in flight or if validation fails.
    pub fn submit(&mut self) -> Option<ContactPayload> {
        if self.status == FormStatus::Sending {
            return None;
        }
        self.errors = validate(&self.payload);
        if !self.errors.is_empty() {
            self.focus = self.errors.keys().next().copied().unwrap_or(self.focus);
            return None;
        }
        self.status = FormStatus::Sending;
        self.editing = false;
        self.notice = None;
        Some(self.payload.clone())
    }

    /// Apply the outcome of a dispatched send.
    pub fn on_send_result(&mut self, result: Result<(), SendError>, now: Instant) {
        self.status = FormStatus::Editing;
        match result {
            Ok(()) => {
                info!("contact message sent");
                self.payload.clear();
                self.focus = ContactField::Name;
                self.notice = Some(Notice::Sent {
                    until: now + SENT_NOTICE_DURATION,
                });
            }
            Err(err) => {
                warn!(error = %err, "contact message failed to send");
                self.notice = Some(Notice::Failed(format!("Could not send message: {err}")));
            }
        }
    }

    /// Expire the sent notice once its time is up.
    pub fn tick(&mut self, now: Instant) {
        if let Some(Notice::Sent { until }) = self.notice {
            if now >= until {
                self.notice = None;
            }
        }
    }

    /// Hide the current notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactPayload {
        ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Nice portfolio".into(),
        }
    }

    #[test]
    fn valid_payload_has_no_errors() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn whitespace_only_fields_are_required() {
        let payload = ContactPayload {
            name: "   ".into(),
            email: "\t".into(),
            subject: String::new(),
            message: " \n ".into(),
        };
        let errors = validate(&payload);
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&ContactField::Name], "Name is required");
        assert_eq!(errors[&ContactField::Email], "Email is required");
        assert_eq!(errors[&ContactField::Subject], "Subject is required");
        assert_eq!(errors[&ContactField::Message], "Message is required");
    }

    #[test]
    fn malformed_email_is_invalid() {
        for email in ["a@b", "ab.com", "a b@c.d", "@.", "a@b."] {
            let payload = ContactPayload {
                email: email.into(),
                ..filled()
            };
            assert_eq!(
                validate(&payload).get(&ContactField::Email),
                Some(&"Email is invalid"),
                "{email}"
            );
        }
    }

    #[test]
    fn email_is_trimmed_before_matching() {
        let payload = ContactPayload {
            email: "  ada@example.com  ".into(),
            ..filled()
        };
        assert!(validate(&payload).is_empty());
    }

    #[test]
    fn failed_validation_keeps_fields_and_focuses_first_error() {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Ada");
        form.set_field(ContactField::Subject, "Hi");
        form.focus_field(ContactField::Message);
        assert_eq!(form.submit(), None);
        assert_eq!(form.payload().name, "Ada");
        assert_eq!(form.focus(), ContactField::Email);
        assert_eq!(form.status(), FormStatus::Editing);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::new();
        form.submit();
        assert!(form.error(ContactField::Name).is_some());
        form.focus_field(ContactField::Name);
        form.insert_char('A');
        assert_eq!(form.error(ContactField::Name), None);
        assert!(form.error(ContactField::Email).is_some());
    }

    #[test]
    fn successful_send_resets_fields_and_shows_notice() {
        let t0 = Instant::now();
        let mut form = ContactForm::new();
        for field in ContactField::ALL {
            form.set_field(field, filled().field(field));
        }
        let payload = form.submit();
        assert_eq!(payload, Some(filled()));
        assert_eq!(form.status(), FormStatus::Sending);
        assert_eq!(form.submit(), None);

        form.on_send_result(Ok(()), t0);
        assert_eq!(form.payload(), &ContactPayload::default());
        assert!(matches!(form.notice(), Some(Notice::Sent { .. })));

        form.tick(t0 + Duration::from_millis(4999));
        assert!(form.notice().is_some());
        form.tick(t0 + SENT_NOTICE_DURATION);
        assert!(form.notice().is_none());
    }

    #[test]
    fn failed_send_keeps_fields() {
        let mut form = ContactForm::new();
        for field in ContactField::ALL {
            form.set_field(field, filled().field(field));
        }
        form.submit();
        form.on_send_result(Err(SendError::WorkerGone), Instant::now());
        assert_eq!(form.payload(), &filled());
        assert_eq!(form.status(), FormStatus::Editing);
        assert!(matches!(form.notice(), Some(Notice::Failed(_))));
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut form = ContactForm::new();
        form.insert_char('a');
        form.insert_char('b');
        form.backspace();
        assert_eq!(form.payload().name, "a");
    }
}
