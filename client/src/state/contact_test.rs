use super::*;
use crate::net::api::{UNEXPECTED_FAILURE_MESSAGE, send_contact};
use crate::net::test_support::MockTransport;
use futures::executor::block_on;

fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

fn jane() -> ContactForm {
    form("Jane", "jane@example.com", "", "Hello")
}

/// Drive one full submit through `transport`, the way the Contact page does.
fn submit(state: &mut ContactState, transport: &MockTransport) -> Result<(), SubmitRejected> {
    let request = state.begin_submit()?;
    let outcome = block_on(send_contact(transport, &request));
    state.finish_submit(outcome);
    Ok(())
}

// =============================================================
// validate
// =============================================================

#[test]
fn blank_name_is_an_error() {
    for name in ["", "   ", "\t\n"] {
        let errors = validate(&form(name, "a@b.com", "", "hi"));
        assert_eq!(errors.get(ContactField::Name), Some(NAME_REQUIRED), "name {name:?}");
    }
    assert_eq!(validate(&jane()).get(ContactField::Name), None);
}

#[test]
fn blank_email_asks_for_email() {
    let errors = validate(&form("Jane", "  ", "", "hi"));
    assert_eq!(errors.get(ContactField::Email), Some(EMAIL_REQUIRED));
}

#[test]
fn malformed_email_asks_for_valid_address() {
    for email in ["a@b", "jane", "jane@", "@example.com", "a b@c.d", "a@@b.c", "a@b.", "a@.", "a@b c.d"] {
        let errors = validate(&form("Jane", email, "", "hi"));
        assert_eq!(errors.get(ContactField::Email), Some(EMAIL_INVALID), "email {email:?}");
    }
}

#[test]
fn permissive_email_shapes_are_accepted() {
    for email in ["a@b.com", "a@b.c", "first.last@sub.example.org", "  jane@example.com  ", "x@y.z.w"] {
        let errors = validate(&form("Jane", email, "", "hi"));
        assert_eq!(errors.get(ContactField::Email), None, "email {email:?}");
    }
}

#[test]
fn blank_message_is_an_error() {
    let errors = validate(&form("Jane", "a@b.com", "", " \n "));
    assert_eq!(errors.get(ContactField::Message), Some(MESSAGE_REQUIRED));
}

#[test]
fn subject_never_errors() {
    for subject in ["", "   ", "anything at all", "@@@"] {
        assert_eq!(validate(&form("", "", subject, "")).get(ContactField::Subject), None);
    }
}

#[test]
fn valid_form_has_no_errors() {
    let errors = validate(&jane());
    assert!(errors.is_empty());
}

#[test]
fn validate_is_pure() {
    let f = form("", "a@b", "x", "");
    assert_eq!(validate(&f), validate(&f));
}

#[test]
fn byte_order_mark_counts_as_blank() {
    let errors = validate(&form("\u{FEFF}", " \u{FEFF} ", "", "\u{FEFF}\n"));
    assert_eq!(errors.get(ContactField::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.get(ContactField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(ContactField::Message), Some(MESSAGE_REQUIRED));
}

#[test]
fn byte_order_mark_inside_email_is_rejected() {
    let errors = validate(&form("Jane", "ja\u{FEFF}ne@example.com", "", "hi"));
    assert_eq!(errors.get(ContactField::Email), Some(EMAIL_INVALID));
    let errors = validate(&form("Jane", "\u{FEFF}jane@example.com\u{FEFF}", "", "hi"));
    assert_eq!(errors.get(ContactField::Email), None);
}

// =============================================================
// ContactForm
// =============================================================

#[test]
fn form_set_and_get_by_field() {
    let mut f = ContactForm::default();
    for field in [ContactField::Name, ContactField::Email, ContactField::Subject, ContactField::Message] {
        f.set(field, field.key().to_uppercase());
    }
    assert_eq!(f.get(ContactField::Name), "NAME");
    assert_eq!(f.get(ContactField::Email), "EMAIL");
    assert_eq!(f.get(ContactField::Subject), "SUBJECT");
    assert_eq!(f.get(ContactField::Message), "MESSAGE");
}

#[test]
fn to_request_trims_every_field() {
    let req = form("  Jane ", " jane@example.com ", "  Hi  ", "\nHello\n").to_request();
    assert_eq!(
        req,
        ContactRequest {
            name: "Jane".to_owned(),
            email: "jane@example.com".to_owned(),
            subject: "Hi".to_owned(),
            message: "Hello".to_owned(),
        }
    );
}

#[test]
fn to_request_strips_byte_order_marks() {
    let req = form("\u{FEFF}Jane", "jane@example.com", "Hi\u{FEFF}", "Hello").to_request();
    assert_eq!(req.name, "Jane");
    assert_eq!(req.subject, "Hi");
}

// =============================================================
// SubmissionStatus
// =============================================================

#[test]
fn status_messages_and_kinds() {
    assert_eq!(SubmissionStatus::Idle.message(), None);
    assert_eq!(SubmissionStatus::Sending.message(), Some("Sending..."));
    assert_eq!(SubmissionStatus::Ok("done".to_owned()).message(), Some("done"));
    assert_eq!(SubmissionStatus::Error("bad".to_owned()).message(), Some("bad"));
    assert_eq!(SubmissionStatus::Idle.kind(), "idle");
    assert_eq!(SubmissionStatus::Sending.kind(), "sending");
    assert_eq!(SubmissionStatus::Ok(String::new()).kind(), "ok");
    assert_eq!(SubmissionStatus::Error(String::new()).kind(), "error");
}

// =============================================================
// ContactState
// =============================================================

#[test]
fn errors_hidden_until_touched() {
    let mut state = ContactState::default();
    assert_eq!(state.visible_error(ContactField::Name), None);
    state.touched = true;
    assert_eq!(state.visible_error(ContactField::Name), Some(NAME_REQUIRED));
    assert_eq!(state.visible_error(ContactField::Subject), None);
}

#[test]
fn set_field_updates_derived_errors() {
    let mut state = ContactState { touched: true, ..ContactState::default() };
    state.set_field(ContactField::Email, "a@b".to_owned());
    assert_eq!(state.visible_error(ContactField::Email), Some(EMAIL_INVALID));
    state.set_field(ContactField::Email, "a@b.com".to_owned());
    assert_eq!(state.visible_error(ContactField::Email), None);
}

#[test]
fn scenario_a_empty_form_never_reaches_network() {
    let transport = MockTransport::replying(200, r#"{"ok":true}"#);
    let mut state = ContactState::default();

    assert_eq!(submit(&mut state, &transport), Err(SubmitRejected::Invalid));
    assert_eq!(transport.calls(), 0);
    assert_eq!(state.status, SubmissionStatus::Error(FIX_FIELDS.to_owned()));
    assert!(state.touched);

    let errors = state.errors();
    assert_eq!(errors.get(ContactField::Name), Some(NAME_REQUIRED));
    assert_eq!(errors.get(ContactField::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(ContactField::Message), Some(MESSAGE_REQUIRED));
    assert_eq!(errors.get(ContactField::Subject), None);
}

#[test]
fn scenario_b_success_clears_form_and_touched() {
    let transport = MockTransport::replying(200, r#"{"ok":true,"message":"Message sent."}"#);
    let mut state = ContactState { form: jane(), ..ContactState::default() };

    assert_eq!(submit(&mut state, &transport), Ok(()));
    assert_eq!(transport.calls(), 1);
    assert_eq!(transport.sent.borrow()[0], jane().to_request());
    assert_eq!(state.status, SubmissionStatus::Ok("Message sent.".to_owned()));
    assert_eq!(state.form, ContactForm::default());
    assert!(!state.touched);
}

#[test]
fn scenario_c_server_error_keeps_fields() {
    let transport = MockTransport::replying(500, r#"{"ok":false,"message":"Server busy"}"#);
    let mut state = ContactState { form: jane(), ..ContactState::default() };

    assert_eq!(submit(&mut state, &transport), Ok(()));
    assert_eq!(state.status, SubmissionStatus::Error("Server busy".to_owned()));
    assert_eq!(state.form, jane());
    assert!(state.touched);
}

#[test]
fn scenario_d_transport_failure_shows_generic_message() {
    let transport = MockTransport::failing(ContactError::Transport("connection refused".to_owned()));
    let mut state = ContactState { form: jane(), ..ContactState::default() };

    assert_eq!(submit(&mut state, &transport), Ok(()));
    assert_eq!(state.status, SubmissionStatus::Error(UNEXPECTED_FAILURE_MESSAGE.to_owned()));
    assert_eq!(state.form, jane());
}

#[test]
fn scenario_e_email_needs_dot_after_at() {
    let mut state = ContactState { form: jane(), touched: true, ..ContactState::default() };
    state.set_field(ContactField::Email, "a@b".to_owned());
    assert_eq!(state.visible_error(ContactField::Email), Some(EMAIL_INVALID));
    state.set_field(ContactField::Email, "a@b.com".to_owned());
    assert_eq!(state.visible_error(ContactField::Email), None);
}

#[test]
fn timeout_is_reported_as_error() {
    let transport = MockTransport::failing(ContactError::Timeout(15_000));
    let mut state = ContactState { form: jane(), ..ContactState::default() };
    submit(&mut state, &transport).unwrap();
    assert_eq!(state.status, SubmissionStatus::Error(UNEXPECTED_FAILURE_MESSAGE.to_owned()));
}

#[test]
fn begin_submit_enters_sending_and_returns_trimmed_body() {
    let mut state = ContactState { form: form(" Jane ", "jane@example.com ", "", " Hello"), ..ContactState::default() };
    let request = state.begin_submit().unwrap();
    assert_eq!(request.name, "Jane");
    assert_eq!(request.email, "jane@example.com");
    assert_eq!(request.message, "Hello");
    assert_eq!(state.status, SubmissionStatus::Sending);
    assert!(state.touched);
}

#[test]
fn second_submit_while_sending_is_latched() {
    let mut state = ContactState { form: jane(), ..ContactState::default() };
    state.begin_submit().unwrap();
    let before = state.clone();

    assert_eq!(state.begin_submit(), Err(SubmitRejected::InFlight));
    assert_eq!(state, before);
}

#[test]
fn retry_after_error_is_allowed() {
    let failing = MockTransport::replying(500, r#"{"ok":false}"#);
    let ok = MockTransport::replying(200, r#"{"ok":true}"#);
    let mut state = ContactState { form: jane(), ..ContactState::default() };

    submit(&mut state, &failing).unwrap();
    assert_eq!(state.status, SubmissionStatus::Error("Failed to send message.".to_owned()));

    submit(&mut state, &ok).unwrap();
    assert_eq!(state.status, SubmissionStatus::Ok("Message sent.".to_owned()));
}

#[test]
fn invalid_attempt_after_success_sets_touched_again() {
    let ok = MockTransport::replying(200, r#"{"ok":true}"#);
    let mut state = ContactState { form: jane(), ..ContactState::default() };
    submit(&mut state, &ok).unwrap();
    assert!(!state.touched);

    assert_eq!(state.begin_submit(), Err(SubmitRejected::Invalid));
    assert!(state.touched);
    assert_eq!(state.visible_error(ContactField::Name), Some(NAME_REQUIRED));
}
