use crate::application::auth::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Interface for signing in and out
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Signs in and stores the session token
    ///
    /// # Arguments
    /// * `username` - User name
    /// * `password` - Password
    /// * `site` - Content URL of the site; the configured default site name
    ///   is sent as an empty selector when `omit_default_site_name` is set
    /// * `impersonate_user_id` - LUID of a user to act as
    ///
    /// # Returns
    /// * The new session
    async fn sign_in(
        &mut self,
        username: &str,
        password: &str,
        site: &str,
        impersonate_user_id: Option<&str>,
    ) -> Result<Session, AppError>;

    /// Signs out; the local session is cleared once the server confirms
    async fn sign_out(&mut self) -> Result<(), AppError>;
}
