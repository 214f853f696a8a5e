use super::*;

#[test]
fn contact_request_serializes_all_four_fields() {
    let req = ContactRequest {
        name: "Jane".to_owned(),
        email: "jane@example.com".to_owned(),
        subject: String::new(),
        message: "Hello".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "",
            "message": "Hello"
        })
    );
}

#[test]
fn reply_from_success_body() {
    let reply = ContactReply::from_body(r#"{"ok":true,"message":"Message sent."}"#);
    assert!(reply.ok);
    assert_eq!(reply.message.as_deref(), Some("Message sent."));
}

#[test]
fn reply_from_failure_body() {
    let reply = ContactReply::from_body(r#"{"ok":false,"message":"Server busy"}"#);
    assert!(!reply.ok);
    assert_eq!(reply.message.as_deref(), Some("Server busy"));
}

#[test]
fn reply_from_garbage_is_empty() {
    assert_eq!(ContactReply::from_body("<html>502 Bad Gateway</html>"), ContactReply::default());
    assert_eq!(ContactReply::from_body(""), ContactReply::default());
    assert_eq!(ContactReply::from_body("[1,2,3]"), ContactReply::default());
}

#[test]
fn reply_ok_uses_loose_truthiness() {
    assert!(ContactReply::from_body(r#"{"ok":1}"#).ok);
    assert!(ContactReply::from_body(r#"{"ok":"yes"}"#).ok);
    assert!(ContactReply::from_body(r#"{"ok":{}}"#).ok);
    assert!(!ContactReply::from_body(r#"{"ok":0}"#).ok);
    assert!(!ContactReply::from_body(r#"{"ok":""}"#).ok);
    assert!(!ContactReply::from_body(r#"{"ok":null}"#).ok);
    assert!(!ContactReply::from_body(r#"{"message":"hi"}"#).ok);
}

#[test]
fn reply_drops_blank_or_non_string_message() {
    assert_eq!(ContactReply::from_body(r#"{"ok":true,"message":""}"#).message, None);
    assert_eq!(ContactReply::from_body(r#"{"ok":true,"message":42}"#).message, None);
}
