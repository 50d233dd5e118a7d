// Common utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use reqwest::{Method, StatusCode};
use std::sync::{Arc, Mutex};
use tableau_client::prelude::*;

pub const SITE_ID: &str = "site-1";
pub const TOKEN: &str = "tok-123";

/// Wire event captured by [`RecordingTracer`]
#[derive(Debug, Clone, PartialEq)]
pub enum WireEvent {
    Request {
        method: Method,
        url: String,
        body: Option<String>,
    },
    Response {
        method: Method,
        url: String,
        status: StatusCode,
    },
}

/// Tracer keeping every event in memory
#[derive(Default)]
pub struct RecordingTracer {
    events: Mutex<Vec<WireEvent>>,
}

impl RecordingTracer {
    pub fn events(&self) -> Vec<WireEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn responses(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, WireEvent::Response { .. }))
            .count()
    }
}

impl WireTracer for RecordingTracer {
    fn on_request(&self, method: &Method, url: &str, body: Option<&[u8]>) {
        self.events.lock().unwrap().push(WireEvent::Request {
            method: method.clone(),
            url: url.to_string(),
            body: body.map(|b| String::from_utf8_lossy(b).into_owned()),
        });
    }

    fn on_response(&self, method: &Method, url: &str, status: StatusCode, _body: &[u8]) {
        self.events.lock().unwrap().push(WireEvent::Response {
            method: method.clone(),
            url: url.to_string(),
            status,
        });
    }
}

/// Configuration pointing at a mock server
pub fn test_config(base_url: &str) -> Config {
    setup_logger();
    let mut config = Config::with_base_url(base_url);
    config.publish.boundary = "B1".to_string();
    config
}

/// Creates a client for a mock server, with a recording tracer
pub fn create_test_client(base_url: &str) -> (Client, Arc<RecordingTracer>) {
    let tracer = Arc::new(RecordingTracer::default());
    let client = Client::with_tracer(test_config(base_url), tracer.clone())
        .expect("Failed to create client");
    (client, tracer)
}

/// Mocks a successful sign-in returning [`TOKEN`] for [`SITE_ID`]
pub async fn mock_sign_in(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/api/2.8/auth/signin")
        .match_header("content-type", "application/xml")
        .match_header("x-tableau-auth", Matcher::Missing)
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<tsResponse xmlns="http://tableau.com/api">
  <credentials token="{TOKEN}">
    <site id="{SITE_ID}" contentUrl=""/>
    <user id="user-1"/>
  </credentials>
</tsResponse>"#
        ))
        .create_async()
        .await
}

/// Signed-in client for a mock server
pub async fn signed_in_client(server: &mut ServerGuard) -> (Client, Arc<RecordingTracer>) {
    let _sign_in = mock_sign_in(server).await;
    let (mut client, tracer) = create_test_client(&server.url());
    client
        .sign_in("admin", "secret", "Default", None)
        .await
        .expect("Failed to sign in");
    (client, tracer)
}
