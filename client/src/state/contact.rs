//! Contact form state: field values, derived validation, submit lifecycle.
//!
//! DESIGN
//! ======
//! Validation errors are a pure function of `ContactForm`, recomputed on
//! every read and never stored, so they cannot go stale. Lifecycle changes
//! go only through `begin_submit` / `finish_submit`; `Sending` doubles as the
//! latch that keeps at most one request in flight.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::net::api::ContactError;
use crate::net::types::ContactRequest;

pub const NAME_REQUIRED: &str = "Please enter your name.";
pub const EMAIL_REQUIRED: &str = "Please enter your email.";
pub const EMAIL_INVALID: &str = "Please enter a valid email address.";
pub const MESSAGE_REQUIRED: &str = "Please tell us how we can help.";
pub const FIX_FIELDS: &str = "Please fix the highlighted fields.";
pub const SENDING: &str = "Sending...";

// One `@`, no whitespace, a dot somewhere after the `@`. U+FEFF counts as
// whitespace here, matching browser `trim()` and `\s`.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

/// Trim Unicode whitespace plus the byte-order mark.
fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

// =============================================================
// FIELDS
// =============================================================

/// Inputs of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Wire / DOM name of the field.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// Current raw values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Trimmed request body for the contact-intake endpoint.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: trim_blank(&self.name).to_owned(),
            email: trim_blank(&self.email).to_owned(),
            subject: trim_blank(&self.subject).to_owned(),
            message: trim_blank(&self.message).to_owned(),
        }
    }
}

// =============================================================
// VALIDATION
// =============================================================

/// Per-field error messages derived from a [`ContactForm`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ContactField, &'static str>);

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Compute the error set for `form`. Subject is never validated.
pub fn validate(form: &ContactForm) -> ValidationErrors {
    let mut errors = BTreeMap::new();

    if trim_blank(&form.name).is_empty() {
        errors.insert(ContactField::Name, NAME_REQUIRED);
    }

    let email = trim_blank(&form.email);
    if email.is_empty() {
        errors.insert(ContactField::Email, EMAIL_REQUIRED);
    } else if !is_plausible_email(email) {
        errors.insert(ContactField::Email, EMAIL_INVALID);
    }

    if trim_blank(&form.message).is_empty() {
        errors.insert(ContactField::Message, MESSAGE_REQUIRED);
    }

    ValidationErrors(errors)
}

/// `<non-space>@<non-space>.<non-space>` shape check; not RFC validation.
pub fn is_plausible_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

// =============================================================
// SUBMISSION
// =============================================================

/// Lifecycle of the latest submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Ok(String),
    Error(String),
}

impl SubmissionStatus {
    /// Banner text, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(SENDING),
            Self::Ok(message) | Self::Error(message) => Some(message),
        }
    }

    /// Short tag used for styling (`idle`, `sending`, `ok`, `error`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Sending => "sending",
            Self::Ok(_) => "ok",
            Self::Error(_) => "error",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

/// Why `begin_submit` declined to start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// A request is already in flight; nothing changed.
    InFlight,
    /// Validation failed; status now asks the user to fix fields.
    Invalid,
}

/// Everything the Contact page tracks for one page view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    /// Set once a submit was attempted; gates inline error display.
    pub touched: bool,
}

impl ContactState {
    pub fn errors(&self) -> ValidationErrors {
        validate(&self.form)
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    pub fn is_sending(&self) -> bool {
        self.status.is_sending()
    }

    /// Error to render under `field`; hidden until the first submit attempt.
    pub fn visible_error(&self, field: ContactField) -> Option<&'static str> {
        if !self.touched {
            return None;
        }
        self.errors().get(field)
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set(field, value);
    }

    /// Start a submit attempt.
    ///
    /// On success the state is `Sending` and the caller must issue exactly one
    /// request with the returned body, then call [`Self::finish_submit`].
    ///
    /// # Errors
    ///
    /// [`SubmitRejected::InFlight`] while a request is pending (state untouched);
    /// [`SubmitRejected::Invalid`] when validation fails (status set to error).
    pub fn begin_submit(&mut self) -> Result<ContactRequest, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::InFlight);
        }

        self.touched = true;
        self.status = SubmissionStatus::Idle;

        if !self.is_valid() {
            self.status = SubmissionStatus::Error(FIX_FIELDS.to_owned());
            return Err(SubmitRejected::Invalid);
        }

        self.status = SubmissionStatus::Sending;
        Ok(self.form.to_request())
    }

    /// Apply the outcome of the request started by [`Self::begin_submit`].
    pub fn finish_submit(&mut self, outcome: Result<String, ContactError>) {
        match outcome {
            Ok(message) => {
                self.status = SubmissionStatus::Ok(message);
                self.form = ContactForm::default();
                self.touched = false;
            }
            Err(err) => {
                self.status = SubmissionStatus::Error(err.user_message());
            }
        }
    }
}
