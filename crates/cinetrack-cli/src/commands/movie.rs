use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use serde_json::json;

pub async fn run_movie(id: u64, output: &Output) -> Result<()> {
    let config = super::config::load_config()?;
    let client = super::config::catalog_client(&config);

    let details = client
        .movie_details(id)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load movie {}: {}", id, e))?;
    let credits = client
        .credits(id)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load credits for {}: {}", id, e))?;
    let videos = client
        .videos(id)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load videos for {}: {}", id, e))?;

    match output.format() {
        OutputFormat::Human => {
            let year = details.release_date.get(..4).unwrap_or("");
            output.info(format!("{} ({})", details.title, year));
            if !details.tagline.is_empty() {
                output.info(format!("  \"{}\"", details.tagline));
            }
            let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
            if !genres.is_empty() {
                output.info(format!("  Genres: {}", genres.join(", ")));
            }
            if let Some(runtime) = details.runtime {
                output.info(format!("  Runtime: {} min", runtime));
            }
            output.info(format!(
                "  Rating: {:.1} ({} votes)",
                details.vote_average, details.vote_count
            ));
            if !details.overview.is_empty() {
                output.info("");
                output.info(format!("  {}", details.overview));
            }

            if !credits.cast.is_empty() {
                output.info("");
                output.info("Cast:");
                for member in credits.cast.iter().take(10) {
                    output.info(format!("  {} as {}", member.name, member.character));
                }
            }

            let trailers: Vec<_> = videos
                .results
                .iter()
                .filter(|v| v.site == "YouTube" && v.kind == "Trailer")
                .collect();
            if !trailers.is_empty() {
                output.info("");
                output.info("Trailers:");
                for trailer in trailers {
                    output.info(format!(
                        "  {} - https://www.youtube.com/watch?v={}",
                        trailer.name, trailer.key
                    ));
                }
            }
        }
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&json!({
                "details": details,
                "credits": credits,
                "videos": videos,
            }));
        }
    }

    Ok(())
}
