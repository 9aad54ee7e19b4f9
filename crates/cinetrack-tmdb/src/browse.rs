use cinetrack_models::{DiscoverFilters, MoviePage};
use tracing::debug;

use crate::client::TmdbClient;

impl TmdbClient {
    /// GET /movie/popular
    pub async fn popular(&self, page: u32) -> crate::Result<MoviePage> {
        let mut url = self.url("/movie/popular");
        url.push_str(&format!("&page={}", page));

        debug!(page, "fetching popular movies");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }

    /// GET /search/movie
    pub async fn search(&self, query: &str, page: u32) -> crate::Result<MoviePage> {
        let mut url = self.url("/search/movie");
        url.push_str(&format!(
            "&query={}&page={}&include_adult={}",
            urlencoding::encode(query),
            page,
            self.include_adult
        ));

        debug!(query, page, "searching movies");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }

    /// GET /discover/movie
    pub async fn discover(&self, filters: &DiscoverFilters, page: u32) -> crate::Result<MoviePage> {
        let mut url = self.url("/discover/movie");
        url.push_str(&format!(
            "&page={}&sort_by={}&include_adult={}",
            page, filters.sort_by, filters.include_adult
        ));
        if let Some(genres) = &filters.with_genres {
            url.push_str(&format!("&with_genres={}", urlencoding::encode(genres)));
        }
        if let Some(year) = filters.primary_release_year {
            url.push_str(&format!("&primary_release_year={}", year));
        }
        if let Some(min_rating) = filters.vote_average_gte {
            url.push_str(&format!("&vote_average.gte={}", min_rating));
        }
        if let Some(language) = &filters.with_original_language {
            url.push_str(&format!("&with_original_language={}", urlencoding::encode(language)));
        }

        debug!(page, "fetching discover page");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use cinetrack_models::MoviePage;

    #[test]
    fn test_page_deserializes_from_provider_payload() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 693134, "title": "Dune: Part Two", "release_date": "2024-02-27",
                 "poster_path": "/dune2.jpg", "vote_average": 8.2, "vote_count": 4000,
                 "popularity": 1200.5, "genre_ids": [878, 12], "adult": false,
                 "original_language": "en", "original_title": "Dune: Part Two",
                 "overview": "Paul Atreides unites with Chani.", "video": false,
                 "backdrop_path": "/bg.jpg"}
            ],
            "total_pages": 42,
            "total_results": 836
        }"#;

        let page: MoviePage = serde_json::from_str(body).unwrap();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 42);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].id, 693134);
        assert_eq!(page.results[0].title, "Dune: Part Two");
        assert!(!page.is_last());
    }

    #[test]
    fn test_page_tolerates_sparse_movie_fields() {
        // The provider omits poster_path/release_date for some titles.
        let body = r#"{
            "page": 3,
            "results": [{"id": 7, "title": "Obscure"}],
            "total_pages": 3,
            "total_results": 41
        }"#;

        let page: MoviePage = serde_json::from_str(body).unwrap();
        assert!(page.is_last());
        assert_eq!(page.results[0].poster_path, None);
        assert_eq!(page.results[0].release_date, "");
    }
}
