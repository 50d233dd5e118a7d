/// Session state and sign-in helpers
pub mod auth;
/// Client holding configuration, session and dispatcher
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits grouping the API operations
pub mod interfaces;
/// Service implementations for the client
pub mod services;
