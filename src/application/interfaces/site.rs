use crate::error::AppError;
use crate::presentation::{ServerInfo, Site, User};
use async_trait::async_trait;

/// Interface for server information, sites and users
#[async_trait]
pub trait SiteService: Send + Sync {
    /// Gets product and REST API versions of the server
    async fn server_info(&self) -> Result<ServerInfo, AppError>;

    /// Gets all sites visible to the signed-in user
    async fn query_sites(&self) -> Result<Vec<Site>, AppError>;

    /// Gets a site by LUID
    ///
    /// # Arguments
    /// * `site_id` - Site LUID
    /// * `include_storage` - Also return usage figures
    async fn query_site(&self, site_id: &str, include_storage: bool) -> Result<Site, AppError>;

    /// Gets a site by display name
    async fn query_site_by_name(&self, name: &str, include_storage: bool)
    -> Result<Site, AppError>;

    /// Gets a site by content URL
    async fn query_site_by_content_url(
        &self,
        content_url: &str,
        include_storage: bool,
    ) -> Result<Site, AppError>;

    /// Gets the LUID of the site with the given name
    async fn get_site_id(&self, site_name: &str) -> Result<String, AppError>;

    /// Gets a user of a site
    async fn query_user_on_site(&self, site_id: &str, user_id: &str) -> Result<User, AppError>;

    /// Deletes a site by LUID
    async fn delete_site(&self, site_id: &str) -> Result<(), AppError>;

    /// Deletes a site by display name
    async fn delete_site_by_name(&self, name: &str) -> Result<(), AppError>;

    /// Deletes a site by content URL
    async fn delete_site_by_content_url(&self, content_url: &str) -> Result<(), AppError>;
}
