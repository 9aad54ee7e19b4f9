use crate::output::{Output, OutputFormat};
use cinetrack_config::{Config, PathManager};
use cinetrack_tmdb::TmdbClient;
use color_eyre::Result;
use serde_json::json;

/// Loads the config file (defaults when absent) and validates that a
/// usable API key exists.
pub fn load_config() -> Result<Config> {
    let path_manager = PathManager::default();
    let path = path_manager.config_file();

    let config = if path.exists() {
        Config::load_from_file(&path)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to load config from {}: {}", path.display(), e))?
    } else {
        Config::default()
    };

    config.validate().map_err(|e| {
        color_eyre::eyre::eyre!("{}. Run 'cinetrack config init' to create {}", e, path.display())
    })?;

    Ok(config)
}

pub fn catalog_client(config: &Config) -> TmdbClient {
    TmdbClient::new(config.api_key().unwrap_or_default())
        .with_language(config.tmdb.language.clone())
        .with_include_adult(config.tmdb.include_adult)
}

pub fn run_config(cmd: crate::ConfigCommands, output: &Output) -> Result<()> {
    let path_manager = PathManager::default();
    let path = path_manager.config_file();

    match cmd {
        crate::ConfigCommands::Show => {
            let config = if path.exists() {
                Config::load_from_file(&path).map_err(|e| {
                    color_eyre::eyre::eyre!("Failed to load config from {}: {}", path.display(), e)
                })?
            } else {
                output.warn(format!("No config file at {}, showing defaults", path.display()));
                Config::default()
            };

            let masked_key = mask(&config.tmdb.api_key);
            match output.format() {
                OutputFormat::Human => {
                    output.info(format!("Config file:  {}", path.display()));
                    output.info(format!("API key:      {}", masked_key));
                    output.info(format!("Language:     {}", config.tmdb.language));
                    output.info(format!("Include adult: {}", config.tmdb.include_adult));
                    output.info(format!(
                        "Notification debounce: {}ms",
                        config.notifications.debounce_ms
                    ));
                }
                OutputFormat::Json | OutputFormat::JsonPretty => {
                    output.json(&json!({
                        "config_file": path.display().to_string(),
                        "tmdb": {
                            "api_key": masked_key,
                            "language": config.tmdb.language,
                            "include_adult": config.tmdb.include_adult,
                        },
                        "notifications": {
                            "debounce_ms": config.notifications.debounce_ms,
                        },
                    }));
                }
            }
            Ok(())
        }
        crate::ConfigCommands::Init => {
            if path.exists() {
                output.warn(format!("Config file already exists at {}", path.display()));
                return Ok(());
            }
            Config::default()
                .save_to_file(&path)
                .map_err(|e| color_eyre::eyre::eyre!("Failed to write {}: {}", path.display(), e))?;
            output.success(format!("Wrote starter config to {}", path.display()));
            output.info("Set [tmdb] api_key, or export TMDB_API_KEY.");
            Ok(())
        }
    }
}

fn mask(key: &str) -> String {
    if key.is_empty() {
        return "(unset)".to_string();
    }
    if key.len() <= 4 {
        return "****".to_string();
    }
    format!("****{}", &key[key.len() - 4..])
}
