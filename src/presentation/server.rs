use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Version information about the server
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfo {
    /// Product version and build
    #[serde(rename = "productVersion")]
    pub product_version: ProductVersion,
    /// Highest REST API version supported
    #[serde(rename = "restApiVersion")]
    pub rest_api_version: String,
}

/// Product version element (`<productVersion build="..">10.0</productVersion>`)
#[derive(Debug, Clone, Default, PartialEq, DisplaySimple, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductVersion {
    /// Build number
    #[serde(rename = "@build")]
    pub build: String,
    /// Product version
    #[serde(rename = "$text")]
    pub value: String,
}

/// Error reported by the server in the body of a failed response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerError {
    /// Server error code, e.g. `401000`
    #[serde(rename = "@code")]
    pub code: String,
    /// Short summary
    pub summary: String,
    /// Detailed message
    pub detail: String,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.summary, self.code, self.detail)
    }
}

impl std::error::Error for ServerError {}
