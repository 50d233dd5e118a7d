use crate::constants::{
    DEFAULT_API_VERSION, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_READ_WRITE_TIMEOUT_MS,
    DEFAULT_SITE_NAME,
};
use crate::model::http::Timeouts;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use crate::utils::id::generate_boundary;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const DEFAULT_SERVER_URL: &str = "https://localhost";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Tableau REST API client
pub struct Config {
    /// Server and API settings
    pub server: ServerConfig,
    /// Datasource publishing settings
    pub publish: PublishConfig,
    /// Standard request timeouts
    pub timeouts: TimeoutConfig,
    /// Whether requests and responses are traced at DEBUG level
    pub trace_wire: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Server location and site conventions
pub struct ServerConfig {
    /// Base URL of the server, without the `/api` suffix
    pub base_url: String,
    /// REST API version, e.g. `2.8`
    pub api_version: String,
    /// Name of the default site
    pub default_site_name: String,
    /// Sign in to the default site with an empty site selector
    pub omit_default_site_name: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Settings for multipart publishing
pub struct PublishConfig {
    /// Multipart boundary
    pub boundary: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Standard timeouts in milliseconds
pub struct TimeoutConfig {
    /// Connect timeout
    pub connect_ms: u64,
    /// Read/write timeout
    pub read_write_ms: u64,
}

impl TimeoutConfig {
    /// Timeouts as durations
    #[must_use]
    pub fn to_timeouts(&self) -> Timeouts {
        Timeouts::from_millis(self.connect_ms, self.read_write_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// A `.env` file is loaded first when present. See the crate README for
    /// the list of `TABLEAU_*` variables and their defaults.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("TABLEAU_SERVER_URL", String::from(DEFAULT_SERVER_URL));
        if base_url == DEFAULT_SERVER_URL {
            error!("TABLEAU_SERVER_URL not found in environment variables or .env file");
        }

        let boundary = get_env_or_none::<String>("TABLEAU_BOUNDARY")
            .filter(|b| !b.is_empty())
            .unwrap_or_else(generate_boundary);

        Config {
            server: ServerConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_version: get_env_or_default(
                    "TABLEAU_API_VERSION",
                    String::from(DEFAULT_API_VERSION),
                ),
                default_site_name: get_env_or_default(
                    "TABLEAU_DEFAULT_SITE",
                    String::from(DEFAULT_SITE_NAME),
                ),
                omit_default_site_name: get_env_flag("TABLEAU_OMIT_DEFAULT_SITE", true),
            },
            publish: PublishConfig { boundary },
            timeouts: TimeoutConfig {
                connect_ms: get_env_or_default(
                    "TABLEAU_CONNECT_TIMEOUT_MS",
                    DEFAULT_CONNECT_TIMEOUT_MS,
                ),
                read_write_ms: get_env_or_default(
                    "TABLEAU_READ_WRITE_TIMEOUT_MS",
                    DEFAULT_READ_WRITE_TIMEOUT_MS,
                ),
            },
            trace_wire: get_env_flag("TABLEAU_TRACE_WIRE", false),
        }
    }

    /// Configuration for a given server with every other value at its default
    ///
    /// Does not read the environment.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            server: ServerConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_version: DEFAULT_API_VERSION.to_string(),
                default_site_name: DEFAULT_SITE_NAME.to_string(),
                omit_default_site_name: true,
            },
            publish: PublishConfig {
                boundary: generate_boundary(),
            },
            timeouts: TimeoutConfig {
                connect_ms: DEFAULT_CONNECT_TIMEOUT_MS,
                read_write_ms: DEFAULT_READ_WRITE_TIMEOUT_MS,
            },
            trace_wire: false,
        }
    }

    /// Root of the versioned API, e.g. `https://host/api/2.8`
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}/api/{}", self.server.base_url, self.server.api_version)
    }
}
