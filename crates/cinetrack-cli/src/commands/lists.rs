use crate::output::{Output, OutputFormat};
use cinetrack_config::PathManager;
use cinetrack_core::{ListEvent, ListMembership, ListStore, NotificationSink, Notifier};
use cinetrack_models::{ListKind, Movie};
use color_eyre::Result;
use owo_colors::OwoColorize;
use std::sync::Arc;

/// Prints toggle notifications straight to the terminal. The CLI exits
/// right after a toggle, so the notifier runs without a debounce
/// window.
struct TerminalSink {
    enabled: bool,
}

impl NotificationSink for TerminalSink {
    fn publish(&self, event: ListEvent) {
        if !self.enabled {
            return;
        }
        match &event {
            ListEvent::Added { .. } => println!("{} {}", "✓".green(), event),
            ListEvent::Removed { .. } => println!("{} {}", "✗".red(), event),
        }
    }
}

pub async fn run_list(kind: ListKind, cmd: crate::ListCommands, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    if let Err(e) = path_manager.ensure_directories() {
        tracing::warn!("Could not create data directories: {}", e);
    }
    let store = ListStore::open(path_manager.lists_dir());

    match cmd {
        crate::ListCommands::Show => {
            let list = store.read(kind.storage_key());
            if list.is_empty() {
                output.info(format!("{} is empty.", kind.label()));
            } else {
                output.movies(&list);
            }
            Ok(())
        }
        crate::ListCommands::Toggle { id } => {
            let config = super::config::load_config()?;
            let client = super::config::catalog_client(&config);

            let details = client
                .movie_details(id)
                .await
                .map_err(|e| color_eyre::eyre::eyre!("Failed to load movie {}: {}", id, e))?;
            let movie: Movie = details.into();

            let sink = Arc::new(TerminalSink {
                enabled: !output.is_quiet() && output.format() == OutputFormat::Human,
            });
            let notifier = Notifier::immediate(sink);
            let mut membership = ListMembership::new(kind, movie, store, notifier);
            let present = membership.toggle().await;

            if output.format() != OutputFormat::Human {
                output.json(&serde_json::json!({
                    "id": id,
                    "list": kind.label(),
                    "present": present,
                }));
            }
            Ok(())
        }
    }
}
