//! End-to-end contact form flows against a mock mail relay.

use wiremock::matchers::{body_json_string, method, path};
use wiremock::{Mock, ResponseTemplate};

use terra_types::{SubmissionStatus, status_msg};

use crate::common::{
    SEND_PATH, fill_valid_form, mount_send_error, mount_send_ok, relay_app, settle_mail_events,
    start_relay_mock,
};

#[tokio::test]
async fn valid_submission_reaches_the_relay_and_reports_sent() {
    let server = start_relay_mock().await;
    mount_send_ok(&server, 1).await;

    let mut app = relay_app(&server.uri());
    fill_valid_form(&mut app);

    assert!(app.submit_form());
    assert_eq!(app.contact().status(), SubmissionStatus::Sending);

    settle_mail_events(&mut app).await;

    assert_eq!(app.contact().status(), SubmissionStatus::Sent);
    assert_eq!(app.contact().status_line(), status_msg::SENT);
    assert_eq!(app.contact().form().name, "", "fields clear on success");
}

#[tokio::test]
async fn relay_receives_the_exact_send_envelope() {
    let server = start_relay_mock().await;
    let expected = serde_json::json!({
        "service_id": "contact_service",
        "template_id": "contact_form",
        "user_id": "mLOCb2mbvx16-WXal",
        "template_params": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "",
            "message": "Interested in Singapore listings",
        }
    });
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(body_json_string(expected.to_string()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = relay_app(&server.uri());
    fill_valid_form(&mut app);
    assert!(app.submit_form());
    settle_mail_events(&mut app).await;

    assert_eq!(app.contact().status(), SubmissionStatus::Sent);
}

#[tokio::test]
async fn relay_failure_reports_failed_and_keeps_the_draft() {
    let server = start_relay_mock().await;
    mount_send_error(&server, 500).await;

    let mut app = relay_app(&server.uri());
    fill_valid_form(&mut app);

    assert!(app.submit_form());
    settle_mail_events(&mut app).await;

    assert_eq!(app.contact().status(), SubmissionStatus::Failed);
    assert_eq!(app.contact().status_line(), status_msg::FAILED);
    assert_eq!(app.contact().form().email, "jane@example.com");
}

#[tokio::test]
async fn honeypot_submission_never_reaches_the_relay() {
    let server = start_relay_mock().await;
    // Zero expected hits: the mock server verifies this on drop.
    mount_send_ok(&server, 0).await;

    let mut app = relay_app(&server.uri());
    fill_valid_form(&mut app);
    app.contact_mut().form_mut().website = "https://spam.example".to_string();

    assert!(!app.submit_form());
    assert_eq!(app.contact().status(), SubmissionStatus::Sent);
    assert_eq!(app.contact().status_line(), status_msg::HONEYPOT_ACCEPTED);
    assert_eq!(app.contact().form().name, "", "form clears including honeypot");
}

#[tokio::test]
async fn invalid_submission_never_reaches_the_relay() {
    let server = start_relay_mock().await;
    mount_send_ok(&server, 0).await;

    let mut app = relay_app(&server.uri());
    app.contact_mut().form_mut().name = "Jane Doe".to_string();

    assert!(!app.submit_form());
    assert_eq!(app.contact().status(), SubmissionStatus::Idle);
    assert_eq!(app.contact().status_line(), status_msg::MISSING_REQUIRED);
}
