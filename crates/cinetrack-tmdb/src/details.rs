use cinetrack_models::{Movie, MoviePage};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::TmdbClient;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credits {
    pub id: u64,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub character: String,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoList {
    pub id: u64,
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<MovieDetails> for Movie {
    /// Flattens a details payload into the list-endpoint shape, so a
    /// movie looked up by id can be stored in a named list.
    fn from(details: MovieDetails) -> Self {
        let mut movie = Movie::new(details.id, details.title);
        movie.release_date = details.release_date;
        movie.overview = details.overview;
        movie.poster_path = details.poster_path;
        movie.backdrop_path = details.backdrop_path;
        movie.vote_average = details.vote_average;
        movie.vote_count = details.vote_count;
        movie.genre_ids = details.genres.iter().map(|g| g.id).collect();
        movie
    }
}

impl TmdbClient {
    /// GET /movie/{id}
    pub async fn movie_details(&self, id: u64) -> crate::Result<MovieDetails> {
        let url = self.url(&format!("/movie/{}", id));

        debug!(id, "fetching movie details");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }

    /// GET /movie/{id}/credits
    pub async fn credits(&self, id: u64) -> crate::Result<Credits> {
        let url = self.url(&format!("/movie/{}/credits", id));

        debug!(id, "fetching movie credits");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }

    /// GET /movie/{id}/recommendations
    pub async fn recommendations(&self, id: u64, page: u32) -> crate::Result<MoviePage> {
        let mut url = self.url(&format!("/movie/{}/recommendations", id));
        url.push_str(&format!("&page={}", page));

        debug!(id, page, "fetching recommendations");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }

    /// GET /movie/{id}/videos
    pub async fn videos(&self, id: u64) -> crate::Result<VideoList> {
        let url = self.url(&format!("/movie/{}/videos", id));

        debug!(id, "fetching movie videos");
        let response = self.client().get(&url).send().await?;
        self.handle_response(response).await
    }
}
