pub mod browse;
pub mod catalog;
pub mod client;
pub mod details;
pub mod error;

pub use catalog::MovieCatalog;
pub use client::TmdbClient;
pub use details::{CastMember, Credits, Genre, MovieDetails, Video, VideoList};
pub use error::CatalogError;

pub type Result<T> = std::result::Result<T, CatalogError>;
