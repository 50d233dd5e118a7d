/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::SiteService;
use crate::error::AppError;
use crate::model::http::ApiRequest;
use crate::model::responses::{
    QuerySiteResponse, QuerySitesResponse, QueryUserOnSiteResponse, ServerInfoResponse,
};
use crate::presentation::{ServerInfo, Site, SiteKey, User};
use async_trait::async_trait;
use tracing::{debug, info};

impl Client {
    async fn query_site_by_key(
        &self,
        key: SiteKey,
        value: &str,
        include_storage: bool,
    ) -> Result<Site, AppError> {
        info!("Getting site by {}: {}", key.as_str(), value);
        let mut params = vec![("key", key.as_str())];
        if include_storage {
            params.push(("includeStorage", "true"));
        }
        let url = self.endpoint(&["sites", value], &params)?;
        let response: QuerySiteResponse = self.send(ApiRequest::get(url)).await?;
        Ok(response.site)
    }

    async fn delete_site_by_key(&self, key: SiteKey, value: &str) -> Result<(), AppError> {
        info!("Deleting site by {}: {}", key.as_str(), value);
        let url = self.endpoint(&["sites", value], &[("key", key.as_str())])?;
        self.send(ApiRequest::delete(url)).await
    }
}

#[async_trait]
impl SiteService for Client {
    async fn server_info(&self) -> Result<ServerInfo, AppError> {
        info!("Getting server info");
        let response: ServerInfoResponse =
            self.send(ApiRequest::get(self.server_info_endpoint()?)).await?;
        debug!(
            "Server version {} (REST API {})",
            response.server_info.product_version.value, response.server_info.rest_api_version
        );
        Ok(response.server_info)
    }

    async fn query_sites(&self) -> Result<Vec<Site>, AppError> {
        info!("Getting sites");
        let url = self.endpoint(&["sites", ""], &[])?;
        let response: QuerySitesResponse = self.send(ApiRequest::get(url)).await?;
        debug!("Sites obtained: {} sites", response.sites.sites.len());
        Ok(response.sites.sites)
    }

    async fn query_site(&self, site_id: &str, include_storage: bool) -> Result<Site, AppError> {
        info!("Getting site: {}", site_id);
        let params: &[(&str, &str)] = if include_storage {
            &[("includeStorage", "true")]
        } else {
            &[]
        };
        let url = self.endpoint(&["sites", site_id], params)?;
        let response: QuerySiteResponse = self.send(ApiRequest::get(url)).await?;
        Ok(response.site)
    }

    async fn query_site_by_name(
        &self,
        name: &str,
        include_storage: bool,
    ) -> Result<Site, AppError> {
        self.query_site_by_key(SiteKey::Name, name, include_storage)
            .await
    }

    async fn query_site_by_content_url(
        &self,
        content_url: &str,
        include_storage: bool,
    ) -> Result<Site, AppError> {
        self.query_site_by_key(SiteKey::ContentUrl, content_url, include_storage)
            .await
    }

    async fn get_site_id(&self, site_name: &str) -> Result<String, AppError> {
        let site = self.query_site_by_name(site_name, false).await?;
        Ok(site.id)
    }

    async fn query_user_on_site(&self, site_id: &str, user_id: &str) -> Result<User, AppError> {
        info!("Getting user {} on site {}", user_id, site_id);
        let url = self.endpoint(&["sites", site_id, "users", user_id], &[])?;
        let response: QueryUserOnSiteResponse = self.send(ApiRequest::get(url)).await?;
        Ok(response.user)
    }

    async fn delete_site(&self, site_id: &str) -> Result<(), AppError> {
        info!("Deleting site: {}", site_id);
        let url = self.endpoint(&["sites", site_id], &[])?;
        self.send(ApiRequest::delete(url)).await
    }

    async fn delete_site_by_name(&self, name: &str) -> Result<(), AppError> {
        self.delete_site_by_key(SiteKey::Name, name).await
    }

    async fn delete_site_by_content_url(&self, content_url: &str) -> Result<(), AppError> {
        self.delete_site_by_key(SiteKey::ContentUrl, content_url)
            .await
    }
}
