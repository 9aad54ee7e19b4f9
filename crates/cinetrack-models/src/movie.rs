use serde::{Deserialize, Serialize};

/// A movie as returned by the catalog's list endpoints. The list
/// subsystem treats this as an opaque value keyed by `id`: entries are
/// copied into lists and compared, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub original_language: String,
    #[serde(default)]
    pub original_title: String,
    #[serde(default)]
    pub video: bool,
}

impl Movie {
    /// Minimal constructor used in tests and examples; provider payloads
    /// come in through serde.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: String::new(),
            poster_path: None,
            backdrop_path: None,
            overview: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            popularity: 0.0,
            genre_ids: Vec::new(),
            adult: false,
            original_language: String::new(),
            original_title: String::new(),
            video: false,
        }
    }
}
