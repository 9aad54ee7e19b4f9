use serde::{Deserialize, Serialize};

/// Query signature identifying one logical paginated result stream.
/// Two signatures compare equal exactly when their accumulated results
/// may be merged together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PageQuery {
    Popular,
    Search { query: String },
    Discover(DiscoverFilters),
}

/// Filter parameters for the discover endpoint. Field names mirror the
/// provider's query parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscoverFilters {
    #[serde(default)]
    pub with_genres: Option<String>,
    #[serde(default)]
    pub primary_release_year: Option<u32>,
    #[serde(default)]
    pub vote_average_gte: Option<f32>,
    #[serde(default)]
    pub with_original_language: Option<String>,
    #[serde(default = "default_sort_by")]
    pub sort_by: String,
    #[serde(default)]
    pub include_adult: bool,
}

fn default_sort_by() -> String {
    "popularity.desc".to_string()
}

impl Default for DiscoverFilters {
    fn default() -> Self {
        Self {
            with_genres: None,
            primary_release_year: None,
            vote_average_gte: None,
            with_original_language: None,
            sort_by: default_sort_by(),
            include_adult: false,
        }
    }
}
