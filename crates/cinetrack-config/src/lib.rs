pub mod config;
pub mod paths;

pub use config::{Config, NotificationOptions, TmdbOptions};
pub use paths::{container_base_path, PathManager};
