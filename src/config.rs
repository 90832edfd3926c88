use std::{fs::File, io::Read};

use serde::Deserialize;

/// Settings for a catalog build, straight from the configuration file.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Slug of the root project whose sub-projects we are cataloging
    pub slug: String,
    /// Ask the directory only for projects under the configured slug
    #[serde(default = "default_true")]
    pub filter_by_parent_slug: bool,
    #[serde(default = "default_true")]
    pub add_technology_sector: bool,
    #[serde(default = "default_true")]
    pub add_industry_sector: bool,
    #[serde(default = "default_true")]
    pub add_pmo_managed_status: bool,
    #[serde(default = "default_true")]
    pub add_parent_project: bool,
    /// Crunchbase profile to fall back on when a project has none of its own
    #[serde(default = "default_crunchbase")]
    pub default_crunchbase: String,
    /// Artwork repo URL template with a `{slug}` placeholder
    #[serde(default)]
    pub artwork_repo_url: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_crunchbase() -> String {
    "https://www.crunchbase.com/organization/linux-foundation".to_string()
}

/// Get the configuration for the catalog build.
/// If the path is not provided, we will check the current directory
/// for a catalog.toml file.
pub fn get_configuration(path: Option<String>) -> Result<Config, String> {
    let path = path.unwrap_or_else(|| "catalog.toml".to_string());
    let mut file = File::open(&path).map_err(|e| format!("Failed to open config file: {}", e))?;
    let mut buf = String::new();
    file.read_to_string(&mut buf)
        .map_err(|e| format!("Failed to read config file: {}", e))?;
    let config: Config =
        toml::from_str(&buf).map_err(|e| format!("Failed to parse config file: {}", e))?;
    Ok(config)
}
