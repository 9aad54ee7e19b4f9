use async_trait::async_trait;
use cinetrack_models::{MoviePage, PageQuery};

use crate::client::TmdbClient;
use crate::error::CatalogError;

/// Seam between the pagination controller and the metadata provider.
/// Tests substitute scripted implementations.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery, page: u32) -> Result<MoviePage, CatalogError>;
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn fetch_page(&self, query: &PageQuery, page: u32) -> Result<MoviePage, CatalogError> {
        match query {
            PageQuery::Popular => self.popular(page).await,
            PageQuery::Search { query } => self.search(query, page).await,
            PageQuery::Discover(filters) => self.discover(filters, page).await,
        }
    }
}
