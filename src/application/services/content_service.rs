/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::ContentService;
use crate::error::AppError;
use crate::model::http::{ApiRequest, Timeouts};
use crate::model::multipart;
use crate::model::responses::{
    DatasourceResponse, QueryDatasourcesResponse, QueryViewsResponse, QueryWorkbooksResponse,
};
use crate::presentation::{Datasource, DatasourceFileType, View, ViewData, Workbook};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

#[async_trait]
impl ContentService for Client {
    async fn query_views(&self, site_id: &str) -> Result<Vec<View>, AppError> {
        info!("Getting views for site: {}", site_id);
        let url = self.endpoint(&["sites", site_id, "views"], &[])?;
        let response: QueryViewsResponse = self.send(ApiRequest::get(url)).await?;
        debug!("Views obtained: {} views", response.views.views.len());
        Ok(response.views.views)
    }

    async fn query_workbook_views(
        &self,
        site_id: &str,
        workbook_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<View>, AppError> {
        info!("Getting views for workbook: {}", workbook_id);
        let url = self.endpoint(
            &["sites", site_id, "workbooks", workbook_id, "views"],
            params,
        )?;
        let response: QueryViewsResponse = self.send(ApiRequest::get(url)).await?;
        debug!("Views obtained: {} views", response.views.views.len());
        Ok(response.views.views)
    }

    async fn query_view_data(&self, site_id: &str, view_id: &str) -> Result<ViewData, AppError> {
        info!("Exporting data of view: {}", view_id);
        let url = self.endpoint(&["sites", site_id, "views", view_id, "data"], &[])?;
        let request = ApiRequest::get(url).with_timeouts(Timeouts::export());
        let data: ViewData = self.send(request).await?;
        debug!("View data obtained: {} bytes", data.as_bytes().len());
        Ok(data)
    }

    async fn query_workbooks(
        &self,
        site_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Workbook>, AppError> {
        info!("Getting workbooks for site: {}", site_id);
        let url = self.endpoint(&["sites", site_id, "workbooks"], params)?;
        let response: QueryWorkbooksResponse = self.send(ApiRequest::get(url)).await?;
        debug!(
            "Workbooks obtained: {} workbooks",
            response.workbooks.workbooks.len()
        );
        Ok(response.workbooks.workbooks)
    }

    async fn query_datasources(&self, site_id: &str) -> Result<Vec<Datasource>, AppError> {
        info!("Getting datasources for site: {}", site_id);
        let url = self.endpoint(&["sites", site_id, "datasources"], &[])?;
        let response: QueryDatasourcesResponse = self.send(ApiRequest::get(url)).await?;
        debug!(
            "Datasources obtained: {} datasources",
            response.datasources.datasources.len()
        );
        Ok(response.datasources.datasources)
    }

    async fn publish_tds(
        &self,
        site_id: &str,
        metadata: &Datasource,
        tds: &str,
        overwrite: bool,
    ) -> Result<Datasource, AppError> {
        self.publish_datasource(
            site_id,
            metadata,
            DatasourceFileType::Tds,
            tds.as_bytes(),
            overwrite,
        )
        .await
    }

    async fn publish_datasource(
        &self,
        site_id: &str,
        metadata: &Datasource,
        file_type: DatasourceFileType,
        content: &[u8],
        overwrite: bool,
    ) -> Result<Datasource, AppError> {
        info!(
            "Publishing datasource {}.{} to site {}",
            metadata.name,
            file_type.extension(),
            site_id
        );
        let config = self.config();
        let boundary = config.publish.boundary.as_str();
        let body = multipart::publish_body(boundary, metadata, file_type, content)?;
        let overwrite = if overwrite { "true" } else { "false" };
        let url = self.endpoint(
            &["sites", site_id, "datasources"],
            &[
                ("datasourceType", file_type.extension()),
                ("overwrite", overwrite),
            ],
        )?;
        let request = ApiRequest::post(url)
            .with_header(CONTENT_TYPE.as_str(), multipart::content_type(boundary))
            .with_body(body);

        let response: DatasourceResponse = self.send(request).await?;
        debug!("Datasource published: {}", response.datasource.id);
        Ok(response.datasource)
    }

    async fn delete_datasource(&self, site_id: &str, datasource_id: &str) -> Result<(), AppError> {
        info!("Deleting datasource {} on site {}", datasource_id, site_id);
        let url = self.endpoint(&["sites", site_id, "datasources", datasource_id], &[])?;
        self.send(ApiRequest::delete(url)).await
    }
}
