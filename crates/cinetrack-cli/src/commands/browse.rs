use crate::output::{Output, OutputFormat};
use cinetrack_core::{Pager, PagerStatus};
use cinetrack_models::PageQuery;
use color_eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Fetches up to `pages` result pages for the query, one trigger per
/// page, then renders the accumulated list.
pub async fn run_browse(mut query: PageQuery, pages: u32, output: &Output) -> Result<()> {
    let config = super::config::load_config()?;
    if let PageQuery::Discover(filters) = &mut query {
        filters.include_adult = config.tmdb.include_adult;
    }

    let client = super::config::catalog_client(&config);
    let pager = Pager::new(Arc::new(client), query);

    let bar = progress_bar(pages.into(), output);
    for page in 1..=pages {
        bar.set_message(format!("page {}", page));
        let merged = pager
            .trigger()
            .await
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load results: {}", e))?;
        if !merged {
            // stream exhausted before the requested page count
            break;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let results = pager.results().await;
    if results.is_empty() {
        output.info("No movies found.");
        return Ok(());
    }

    output.movies(&results);

    if output.format() == OutputFormat::Human {
        match pager.status().await {
            PagerStatus::Exhausted => output.info("End of results."),
            _ => {
                if let Some(total) = pager.total_pages().await {
                    output.info(format!(
                        "Fetched {} of {} pages.",
                        pager.pages_loaded().await,
                        total
                    ));
                }
            }
        }
    }

    Ok(())
}

fn progress_bar(pages: u64, output: &Output) -> ProgressBar {
    if output.is_quiet() || output.format() != OutputFormat::Human {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(pages);
    bar.set_style(
        ProgressStyle::with_template("{spinner} Fetching {msg} [{bar:30}] {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}
