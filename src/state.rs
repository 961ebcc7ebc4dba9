use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::catalog::{
    load_catalog, Catalog, CatalogProvider, JsonCatalogProvider, SampleCatalogProvider,
};
use crate::error::DeskError;
use crate::types::Config;

/// Where the config and catalog come from, and an optional pinned "today".
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub date: Option<NaiveDate>,
}

/// Everything a command needs: settings, the loaded catalog and the
/// reference moment that "today" and "upcoming" are measured from.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub now: NaiveDateTime,
}

impl AppState {
    pub fn load(options: &LoadOptions) -> Result<Self, DeskError> {
        let config = load_config(options.config_path.as_deref())?;
        let now = reference_now(&config, options.date)?;

        let catalog_path = options
            .catalog_path
            .clone()
            .or_else(|| config.catalog_path.as_deref().map(PathBuf::from));
        let provider: Box<dyn CatalogProvider> = match catalog_path {
            Some(path) => Box::new(JsonCatalogProvider::new(path)),
            None => Box::new(SampleCatalogProvider::new(now.date())),
        };
        let catalog = load_catalog(provider.as_ref())?;

        Ok(Self {
            config,
            catalog,
            now,
        })
    }

    pub fn new(config: Config, catalog: Catalog, now: NaiveDateTime) -> Self {
        Self {
            config,
            catalog,
            now,
        }
    }
}

/// ~/.projectdesk/config.json
pub fn default_config_path() -> Result<PathBuf, DeskError> {
    let home = dirs::home_dir()
        .ok_or_else(|| DeskError::ConfigurationError("Could not find home directory".to_string()))?;
    Ok(home.join(".projectdesk").join("config.json"))
}

/// Load configuration.
///
/// With an explicit path the file must exist. The default location is
/// optional: when it is missing the built-in defaults are used.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, DeskError> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(DeskError::ConfigNotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                log::warn!(
                    "No config at {}, using defaults with sample data",
                    path.display()
                );
                return Ok(Config::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&config_path)?;
    let config: Config = serde_json::from_str(&content)
        .map_err(|e| DeskError::parse(format!("config {}", config_path.display()), e))?;

    // Unknown timezone names fail here, not on first use.
    resolve_timezone(&config)?;

    log::info!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// The configured timezone. `None` means system local time.
pub fn resolve_timezone(config: &Config) -> Result<Option<Tz>, DeskError> {
    match config.timezone.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(name) => name
            .parse::<Tz>()
            .map(Some)
            .map_err(|_| DeskError::InvalidTimezone(name.to_string())),
    }
}

/// Wall-clock "now" in the configured timezone. A pinned date yields the
/// start of that day.
pub fn reference_now(config: &Config, pinned: Option<NaiveDate>) -> Result<NaiveDateTime, DeskError> {
    if let Some(date) = pinned {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    let now = match resolve_timezone(config)? {
        Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
        None => Local::now().naive_local(),
    };
    Ok(now)
}
