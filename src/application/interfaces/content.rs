use crate::error::AppError;
use crate::presentation::{Datasource, DatasourceFileType, View, ViewData, Workbook};
use async_trait::async_trait;

/// Interface for views, workbooks and datasources
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Gets all views of a site
    async fn query_views(&self, site_id: &str) -> Result<Vec<View>, AppError>;

    /// Gets the views of a workbook
    ///
    /// # Arguments
    /// * `site_id` - Site LUID
    /// * `workbook_id` - Workbook LUID
    /// * `params` - Query parameters passed through, e.g. `("includeUsageStatistics", "true")`
    async fn query_workbook_views(
        &self,
        site_id: &str,
        workbook_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<View>, AppError>;

    /// Exports the data of a view as CSV
    async fn query_view_data(&self, site_id: &str, view_id: &str) -> Result<ViewData, AppError>;

    /// Gets the workbooks of a site
    ///
    /// # Arguments
    /// * `site_id` - Site LUID
    /// * `params` - Query parameters passed through, e.g. paging or filters
    async fn query_workbooks(
        &self,
        site_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Workbook>, AppError>;

    /// Gets the datasources of a site
    async fn query_datasources(&self, site_id: &str) -> Result<Vec<Datasource>, AppError>;

    /// Publishes a `.tds` datasource
    async fn publish_tds(
        &self,
        site_id: &str,
        metadata: &Datasource,
        tds: &str,
        overwrite: bool,
    ) -> Result<Datasource, AppError>;

    /// Publishes a datasource file
    ///
    /// # Arguments
    /// * `site_id` - Site LUID
    /// * `metadata` - Name, project and optional connection credentials
    /// * `file_type` - Format of `content`
    /// * `content` - The datasource file
    /// * `overwrite` - Replace an existing datasource with the same name
    async fn publish_datasource(
        &self,
        site_id: &str,
        metadata: &Datasource,
        file_type: DatasourceFileType,
        content: &[u8],
        overwrite: bool,
    ) -> Result<Datasource, AppError>;

    /// Deletes a datasource
    async fn delete_datasource(&self, site_id: &str, datasource_id: &str) -> Result<(), AppError>;
}
