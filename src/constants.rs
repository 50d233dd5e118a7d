/// Header carrying the session token on authenticated requests
pub const AUTH_HEADER: &str = "X-Tableau-Auth";
/// Content type used for XML request payloads
pub const APPLICATION_XML: &str = "application/xml";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("tableau-client/", env!("CARGO_PKG_VERSION"));
/// Default REST API version when none is configured
pub const DEFAULT_API_VERSION: &str = "2.8";
/// The server info endpoint only exists from this API version on
pub const SERVER_INFO_API_VERSION: &str = "2.4";
/// Name the server gives to the default site
pub const DEFAULT_SITE_NAME: &str = "Default";
/// Default connect timeout in milliseconds
pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 30_000;
/// Default read/write timeout in milliseconds
pub const DEFAULT_READ_WRITE_TIMEOUT_MS: u64 = 30_000;
/// Connect timeout in milliseconds for tabular view exports
pub const EXPORT_CONNECT_TIMEOUT_MS: u64 = 60_000;
/// Read/write timeout in milliseconds for tabular view exports
pub const EXPORT_READ_WRITE_TIMEOUT_MS: u64 = 60_000;
/// Length of generated multipart boundaries
pub const BOUNDARY_LENGTH: usize = 30;
/// Multipart part name carrying the XML metadata of a published datasource
pub const REQUEST_PAYLOAD_PART: &str = "request_payload";
/// Multipart part name carrying the datasource file itself
pub const DATASOURCE_PART: &str = "tableau_datasource";
/// Tracing target for wire-level request/response traces
pub const WIRE_TRACE_TARGET: &str = "tableau_client::wire";
