/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::constants::{
    AUTH_HEADER, EXPORT_CONNECT_TIMEOUT_MS, EXPORT_READ_WRITE_TIMEOUT_MS, USER_AGENT,
};
use crate::error::AppError;
use crate::model::responses::ErrorResponse;
use crate::model::trace::WireTracer;
use crate::model::xml::from_xml;
use crate::presentation::ViewData;
use reqwest::header::CONTENT_LENGTH;
use reqwest::{Client, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Connect and read/write timeouts of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    /// Maximum time to establish the connection
    pub connect: Duration,
    /// Maximum time for sending the request and reading the whole response
    pub read_write: Duration,
}

impl Timeouts {
    /// Creates timeouts from milliseconds
    #[must_use]
    pub fn from_millis(connect_ms: u64, read_write_ms: u64) -> Self {
        Self {
            connect: Duration::from_millis(connect_ms),
            read_write: Duration::from_millis(read_write_ms),
        }
    }

    /// Longer timeouts used for tabular view exports
    #[must_use]
    pub fn export() -> Self {
        Self::from_millis(EXPORT_CONNECT_TIMEOUT_MS, EXPORT_READ_WRITE_TIMEOUT_MS)
    }
}

/// Decoding strategies for successful response bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Body is ignored
    Empty,
    /// Body is an XML `tsResponse` document
    Xml,
    /// Body is CSV
    Tabular,
}

/// A value a successful response body can be decoded into
///
/// The decode target of a call decides the strategy, so a call cannot ask for
/// a format that has no decoder.
pub trait ResponseBody: Sized {
    /// Strategy used by this target
    const FORMAT: ResponseFormat;

    /// Decodes the full response body
    fn decode(body: Vec<u8>) -> Result<Self, AppError>;
}

impl ResponseBody for () {
    const FORMAT: ResponseFormat = ResponseFormat::Empty;

    fn decode(_body: Vec<u8>) -> Result<Self, AppError> {
        Ok(())
    }
}

impl ResponseBody for ViewData {
    const FORMAT: ResponseFormat = ResponseFormat::Tabular;

    fn decode(body: Vec<u8>) -> Result<Self, AppError> {
        Ok(ViewData::new(body))
    }
}

/// A single API request described as data
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Full target URL
    pub url: String,
    /// Extra headers
    pub headers: Vec<(String, String)>,
    /// Raw body
    pub body: Option<Vec<u8>>,
    /// Timeouts; `None` uses the dispatcher's standard timeouts
    pub timeouts: Option<Timeouts>,
}

impl ApiRequest {
    /// Creates a request without body or headers
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeouts: None,
        }
    }

    /// GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// DELETE request
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Adds a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the raw body
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Overrides the timeouts
    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = Some(timeouts);
        self
    }
}

/// Executes requests and maps responses
///
/// Keeps one pooled HTTP client built with the standard connect timeout.
/// Requests asking for a different connect timeout get a dedicated client.
pub struct HttpDispatcher {
    client: Client,
    timeouts: Timeouts,
    tracer: Arc<dyn WireTracer>,
}

impl HttpDispatcher {
    /// Creates a dispatcher
    ///
    /// # Arguments
    /// * `timeouts` - Standard timeouts applied to requests that do not override them
    /// * `tracer` - Receives wire-level traces
    pub fn new(timeouts: Timeouts, tracer: Arc<dyn WireTracer>) -> Result<Self, AppError> {
        let client = build_client(timeouts.connect)?;
        Ok(Self {
            client,
            timeouts,
            tracer,
        })
    }

    /// Standard timeouts
    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Replaces the wire tracer
    pub fn set_tracer(&mut self, tracer: Arc<dyn WireTracer>) {
        self.tracer = tracer;
    }

    fn client_for(&self, timeouts: &Timeouts) -> Result<Client, AppError> {
        if timeouts.connect == self.timeouts.connect {
            Ok(self.client.clone())
        } else {
            build_client(timeouts.connect)
        }
    }

    /// Executes a request and decodes the response into `T`
    ///
    /// # Arguments
    /// * `request` - Request to execute
    /// * `auth_token` - Session token, attached as `X-Tableau-Auth` when present
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded body of a successful response
    /// * `Err(AppError::NotFound)` - The server answered 404
    /// * `Err(AppError::Server)` - The server answered >= 300 with an error body
    /// * `Err(AppError)` - Transport, timeout or decode failure
    pub async fn dispatch<T: ResponseBody>(
        &self,
        request: ApiRequest,
        auth_token: Option<&str>,
    ) -> Result<T, AppError> {
        let timeouts = request.timeouts.unwrap_or(self.timeouts);
        let client = self.client_for(&timeouts)?;
        let method = request.method;
        let url = request.url.trim().to_string();

        self.tracer.on_request(&method, &url, request.body.as_deref());
        debug!("{} {}", method, url);

        let mut builder = client
            .request(method.clone(), &url)
            .timeout(timeouts.read_write);

        if let Some(body) = &request.body {
            builder = builder.header(CONTENT_LENGTH, body.len());
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(token) = auth_token.filter(|token| !token.is_empty()) {
            builder = builder.header(AUTH_HEADER, token);
        }

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!("Response status: {}", status);
        self.tracer.on_response(&method, &url, status, &body);

        check_status(status, &body)?;

        debug!("Decoding {} byte body as {:?}", body.len(), T::FORMAT);
        T::decode(body)
    }
}

/// Maps a response status to an error
///
/// 404 is always `NotFound`, whatever the body. Any other status >= 300 must
/// carry an XML error body; when it does not, the status is kept in
/// `MalformedErrorBody`.
pub fn check_status(status: StatusCode, body: &[u8]) -> Result<(), AppError> {
    if status == StatusCode::NOT_FOUND {
        warn!("Resource does not exist");
        return Err(AppError::NotFound);
    }

    if status.as_u16() >= 300 {
        return match from_xml::<ErrorResponse>(body) {
            Ok(response) => {
                error!("Request failed with status {}: {}", status, response.error);
                Err(AppError::Server {
                    status,
                    error: response.error,
                })
            }
            Err(e) => {
                error!("Request failed with status {} and unreadable body: {}", status, e);
                Err(AppError::MalformedErrorBody {
                    status,
                    message: e.to_string(),
                })
            }
        };
    }

    Ok(())
}

fn build_client(connect_timeout: Duration) -> Result<Client, AppError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(connect_timeout)
        .build()?)
}
