/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Wire tracing
//!
//! The dispatcher reports every outgoing request and every received response
//! to a [`WireTracer`]. The tracer is injected into the client, so tracing can
//! be switched on per client (or captured in tests) without global state.

use crate::constants::WIRE_TRACE_TARGET;
use reqwest::{Method, StatusCode};
use tracing::debug;

/// Receives wire-level traces from the dispatcher
pub trait WireTracer: Send + Sync {
    /// Called before a request is sent
    fn on_request(&self, method: &Method, url: &str, body: Option<&[u8]>);

    /// Called once the full response body has been read
    fn on_response(&self, method: &Method, url: &str, status: StatusCode, body: &[u8]);
}

/// Tracer that drops every trace
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopWireTracer;

impl WireTracer for NoopWireTracer {
    fn on_request(&self, _method: &Method, _url: &str, _body: Option<&[u8]>) {}

    fn on_response(&self, _method: &Method, _url: &str, _status: StatusCode, _body: &[u8]) {}
}

/// Tracer that emits `tracing` events at DEBUG level on the wire target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWireTracer;

impl WireTracer for TracingWireTracer {
    fn on_request(&self, method: &Method, url: &str, body: Option<&[u8]>) {
        match body {
            Some(body) => debug!(
                target: WIRE_TRACE_TARGET,
                "{} {}\n{}",
                method,
                url,
                String::from_utf8_lossy(body)
            ),
            None => debug!(target: WIRE_TRACE_TARGET, "{} {}", method, url),
        }
    }

    fn on_response(&self, method: &Method, url: &str, status: StatusCode, body: &[u8]) {
        debug!(
            target: WIRE_TRACE_TARGET,
            "{} {} -> {}\n{}",
            method,
            url,
            status,
            String::from_utf8_lossy(body)
        );
    }
}
