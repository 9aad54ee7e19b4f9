use serde::{Deserialize, Serialize};

use crate::movie::Movie;

/// One page of a paginated catalog response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoviePage {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<Movie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl MoviePage {
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}
