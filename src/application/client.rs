/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Client for the Tableau REST API
//!
//! The client owns the configuration, the session and the dispatcher. All API
//! operations are provided by the service traits in
//! [`crate::application::interfaces`].
//!
//! # Example
//! ```ignore
//! use tableau_client::prelude::*;
//!
//! let mut client = Client::new(Config::new())?;
//! client.sign_in("admin", "secret", "Default", None).await?;
//! let projects = client.query_projects(&client.session().site_id.clone().unwrap()).await?;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::constants::SERVER_INFO_API_VERSION;
use crate::error::AppError;
use crate::model::http::{ApiRequest, HttpDispatcher, ResponseBody};
use crate::model::trace::{NoopWireTracer, TracingWireTracer, WireTracer};
use reqwest::Url;
use std::sync::Arc;

/// Client for one server and one session
///
/// Operations that change the session (`sign_in`, `sign_out`) take `&mut self`;
/// everything else takes `&self`. The client is not synchronized internally.
pub struct Client {
    config: Arc<Config>,
    dispatcher: HttpDispatcher,
    session: Session,
}

impl Client {
    /// Creates a client without signing in
    ///
    /// Wire tracing goes to `tracing` when `config.trace_wire` is set and is
    /// dropped otherwise.
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to sign in
    /// * `Err(AppError)` - If the HTTP client could not be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let tracer: Arc<dyn WireTracer> = if config.trace_wire {
            Arc::new(TracingWireTracer)
        } else {
            Arc::new(NoopWireTracer)
        };
        Self::with_tracer(config, tracer)
    }

    /// Creates a client reporting wire traces to `tracer`
    pub fn with_tracer(config: Config, tracer: Arc<dyn WireTracer>) -> Result<Self, AppError> {
        let dispatcher = HttpDispatcher::new(config.timeouts.to_timeouts(), tracer)?;
        Ok(Self {
            config: Arc::new(config),
            dispatcher,
            session: Session::default(),
        })
    }

    /// Gets the configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Gets the current session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether a session token is held
    pub fn is_signed_in(&self) -> bool {
        self.session.is_signed_in()
    }

    /// Replaces the wire tracer
    pub fn set_tracer(&mut self, tracer: Arc<dyn WireTracer>) {
        self.dispatcher.set_tracer(tracer);
    }

    pub(crate) fn set_session(&mut self, session: Session) {
        self.session = session;
    }

    /// URL below the versioned API root
    ///
    /// Segments are percent-encoded; an empty last segment yields a trailing slash.
    pub(crate) fn endpoint(
        &self,
        segments: &[&str],
        params: &[(&str, &str)],
    ) -> Result<String, AppError> {
        build_url(&self.config.api_root(), segments, params)
    }

    /// URL of the server info endpoint, which ignores the configured API version
    pub(crate) fn server_info_endpoint(&self) -> Result<String, AppError> {
        let root = format!(
            "{}/api/{}",
            self.config.server.base_url, SERVER_INFO_API_VERSION
        );
        build_url(&root, &["serverinfo"], &[])
    }

    /// Executes a request with the session token and decodes the response
    pub(crate) async fn send<T: ResponseBody>(&self, request: ApiRequest) -> Result<T, AppError> {
        self.dispatcher.dispatch(request, self.session.token()).await
    }
}

fn build_url(root: &str, segments: &[&str], params: &[(&str, &str)]) -> Result<String, AppError> {
    let mut url =
        Url::parse(root).map_err(|e| AppError::InvalidInput(format!("invalid url {root}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| AppError::InvalidInput(format!("url {root} cannot take a path")))?
        .pop_if_empty()
        .extend(segments);
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url.to_string())
}
