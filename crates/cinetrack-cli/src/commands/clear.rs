use crate::output::Output;
use cinetrack_config::PathManager;
use cinetrack_core::ListStore;
use cinetrack_models::ListKind;
use color_eyre::Result;

pub fn run_clear(watchlist: bool, favorites: bool, all: bool, output: &Output) -> Result<()> {
    if !watchlist && !favorites && !all {
        output.warn("Nothing to clear. Use --watchlist, --favorites, or --all.");
        return Ok(());
    }

    let path_manager = PathManager::default();
    let store = ListStore::open(path_manager.lists_dir());

    let mut kinds = Vec::new();
    if all || watchlist {
        kinds.push(ListKind::Watchlist);
    }
    if all || favorites {
        kinds.push(ListKind::Favorites);
    }

    for kind in kinds {
        store
            .clear(kind.storage_key())
            .map_err(|e| color_eyre::eyre::eyre!("Failed to clear {}: {}", kind.label(), e))?;
        output.success(format!("Cleared {}", kind.label()));
    }

    Ok(())
}
