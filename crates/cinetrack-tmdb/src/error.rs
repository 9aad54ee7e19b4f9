use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Non-success HTTP status from the metadata provider.
    #[error("catalog API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),
}
