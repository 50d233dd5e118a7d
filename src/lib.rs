/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! # Tableau Client
//!
//! An async client for the Tableau Server REST API. Every remote operation
//! (sign in, query sites, create a project, publish a datasource, ...) is a
//! typed method on [`application::client::Client`]: the client builds the
//! request, executes it and decodes the XML (or CSV) response.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tableau_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let mut client = Client::new(Config::new())?;
//! client.sign_in("admin", "secret", "Default", None).await?;
//!
//! for site in client.query_sites().await? {
//!     info!("site {} ({})", site.name, site.id);
//! }
//!
//! client.sign_out().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Layout
//! - `application`: configuration, session, the `Client` and its service traits
//! - `model`: request dispatching, wire tracing, XML envelopes, multipart bodies
//! - `presentation`: the entities returned to callers
//! - `utils`: environment helpers, logger setup, id generation

/// Client, configuration, session and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error type shared by every operation
pub mod error;
/// Request dispatching and wire formats
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Entities returned by the API
pub mod presentation;
/// Helpers for environment, logging and ids
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
