//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use terra_engine::{App, DocumentLayout, EmailRelay, RelayCredentials, SectionExtent};
use terra_types::{SectionId, UiOptions};

pub const SEND_PATH: &str = "/api/v1.0/email/send";

/// Start a mock server that stands in for the mail relay.
pub async fn start_relay_mock() -> MockServer {
    MockServer::start().await
}

/// Mount an accepting send endpoint, asserting it is hit exactly `hits` times.
pub async fn mount_send_ok(server: &MockServer, hits: u64) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(hits)
        .mount(server)
        .await;
}

/// Mount a failing send endpoint.
pub async fn mount_send_error(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("relay unavailable"))
        .mount(server)
        .await;
}

/// Build an app wired to the mock relay, with a fixed four-section layout.
pub fn relay_app(server_uri: &str) -> App {
    let relay = EmailRelay::new(RelayCredentials::default())
        .expect("client builds")
        .with_base_url(server_uri);
    let mut app = App::with_dispatch(UiOptions::default(), Arc::new(relay));
    app.set_layout(stacked_layout(), (80, 30));
    app
}

/// Four equal 50-row sections stacked top to bottom.
pub fn stacked_layout() -> DocumentLayout {
    let sections = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| SectionExtent {
            id,
            top: (i * 50) as u16,
            height: 50,
        })
        .collect();
    DocumentLayout::new(sections)
}

pub fn fill_valid_form(app: &mut App) {
    let form = app.contact_mut().form_mut();
    form.name = "Jane Doe".to_string();
    form.email = "jane@example.com".to_string();
    form.message = "Interested in Singapore listings".to_string();
}

/// Let the spawned dispatch task complete against the mock server.
pub async fn settle_mail_events(app: &mut App) {
    for _ in 0..200 {
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        app.process_mail_events();
        if app.contact().status() != terra_types::SubmissionStatus::Sending {
            return;
        }
    }
    panic!("dispatch outcome never arrived");
}
