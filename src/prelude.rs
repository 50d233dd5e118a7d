/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Tableau Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Tableau Client library. Importing the prelude brings the client, its service
//! traits and the returned entities into scope.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tableau_client::prelude::*;
//!
//! let config = Config::with_base_url("https://tableau.example.com");
//! let client = Client::new(config).expect("client");
//! assert!(!client.is_signed_in());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Tableau REST API client
pub use crate::application::config::{Config, PublishConfig, ServerConfig, TimeoutConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// Client for one server and one session
pub use crate::application::client::Client;

/// Session state and sign-in helpers
pub use crate::application::auth::{Session, site_selector};

// ============================================================================
// CORE SERVICES (TRAITS)
// ============================================================================

/// Service traits implemented by the client
pub use crate::application::interfaces::{
    AuthService, ContentService, ProjectService, SiteService,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Request description and timeouts
pub use crate::model::http::{ApiRequest, Timeouts};

/// Wire tracing
pub use crate::model::trace::{NoopWireTracer, TracingWireTracer, WireTracer};

// ============================================================================
// ENTITIES
// ============================================================================

/// Entities returned by the API
pub use crate::presentation::{
    ConnectionCredentials, Credentials, Datasource, DatasourceFileType, OwnerRef, Pagination,
    ProductVersion, Project, ProjectRef, ServerError, ServerInfo, Site, SiteKey, SiteUsage, Tag,
    Tags, User, UserRef, View, ViewData, ViewUsage, Workbook, WorkbookRef,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
