//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::listing::MAX_VISIBLE_PAGES_LIMIT;

/// Sitescout configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub listing: ListingConfig,
    pub blog: BlogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub suggestions_per_family: usize,
    pub max_suggestions: usize,
    pub preview_per_family: usize,
    pub suggestion_description_chars: usize,
    pub popular_categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub page_size: usize,
    pub max_visible_pages: u32,
    pub featured_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub api_base_url: Option<String>,
    pub timeout_secs: u64,
    pub fallback_categories: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suggestions_per_family: 2,
            max_suggestions: 6,
            preview_per_family: 3,
            suggestion_description_chars: 80,
            popular_categories: vec![
                "Web Design".to_string(),
                "Development".to_string(),
                "Digital Marketing".to_string(),
                "SEO".to_string(),
                "E-commerce".to_string(),
                "Branding".to_string(),
            ],
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            page_size: 6,
            max_visible_pages: 5,
            featured_count: 3,
        }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            timeout_secs: 10,
            fallback_categories: vec![
                "All".to_string(),
                "Web Design".to_string(),
                "Development".to_string(),
                "Marketing".to_string(),
                "SEO".to_string(),
                "Branding".to_string(),
            ],
        }
    }
}

impl BlogConfig {
    /// Base URL for the blog API, preferring the environment over the file
    pub fn resolved_api_base_url(&self) -> Option<String> {
        env::var("SITESCOUT_BLOG_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("SITESCOUT_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("sitescout")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or use defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.listing.page_size == 0 {
            return Err(anyhow!("listing.page_size must be at least 1"));
        }
        check_visible_pages(self.listing.max_visible_pages)?;
        if self.search.max_suggestions == 0 {
            return Err(anyhow!("search.max_suggestions must be at least 1"));
        }
        if self.search.suggestions_per_family == 0 {
            return Err(anyhow!("search.suggestions_per_family must be at least 1"));
        }
        if self.search.suggestion_description_chars < 10 {
            return Err(anyhow!(
                "search.suggestion_description_chars must be at least 10"
            ));
        }
        if let Some(url) = &self.blog.api_base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!(
                    "blog.api_base_url must start with http:// or https://, got '{}'",
                    url
                ));
            }
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "search.suggestions_per_family" => Ok(self.search.suggestions_per_family.to_string()),
            "search.max_suggestions" => Ok(self.search.max_suggestions.to_string()),
            "search.preview_per_family" => Ok(self.search.preview_per_family.to_string()),
            "search.suggestion_description_chars" => {
                Ok(self.search.suggestion_description_chars.to_string())
            }
            "search.popular_categories" => Ok(self.search.popular_categories.join(", ")),

            "listing.page_size" => Ok(self.listing.page_size.to_string()),
            "listing.max_visible_pages" => Ok(self.listing.max_visible_pages.to_string()),
            "listing.featured_count" => Ok(self.listing.featured_count.to_string()),

            "blog.api_base_url" => Ok(self
                .blog
                .api_base_url
                .clone()
                .unwrap_or_else(|| "(not set - using local catalog)".to_string())),
            "blog.timeout_secs" => Ok(self.blog.timeout_secs.to_string()),
            "blog.fallback_categories" => Ok(self.blog.fallback_categories.join(", ")),

            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `sitescout config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "search.suggestions_per_family" => {
                self.search.suggestions_per_family = parse_count(key, value, 1)?;
            }
            "search.max_suggestions" => {
                self.search.max_suggestions = parse_count(key, value, 1)?;
            }
            "search.preview_per_family" => {
                self.search.preview_per_family = parse_count(key, value, 1)?;
            }
            "search.suggestion_description_chars" => {
                self.search.suggestion_description_chars = parse_count(key, value, 10)?;
            }
            "search.popular_categories" => {
                self.search.popular_categories = split_list(value);
            }

            "listing.page_size" => {
                self.listing.page_size = parse_count(key, value, 1)?;
            }
            "listing.max_visible_pages" => {
                let pages: u32 = value
                    .parse()
                    .with_context(|| format!("Invalid max_visible_pages value: {}", value))?;
                check_visible_pages(pages)?;
                self.listing.max_visible_pages = pages;
            }
            "listing.featured_count" => {
                self.listing.featured_count = parse_count(key, value, 0)?;
            }

            "blog.api_base_url" => {
                let trimmed = value.trim();
                if trimmed.is_empty() || trimmed == "none" {
                    self.blog.api_base_url = None;
                } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
                    self.blog.api_base_url = Some(trimmed.trim_end_matches('/').to_string());
                } else {
                    return Err(anyhow!(
                        "blog.api_base_url must start with http:// or https://"
                    ));
                }
            }
            "blog.timeout_secs" => {
                self.blog.timeout_secs = value
                    .parse()
                    .with_context(|| format!("Invalid timeout_secs value: {}", value))?;
            }
            "blog.fallback_categories" => {
                let categories = split_list(value);
                if categories.is_empty() {
                    return Err(anyhow!("blog.fallback_categories cannot be empty"));
                }
                self.blog.fallback_categories = categories;
            }

            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `sitescout config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = vec![
            "search.suggestions_per_family",
            "search.max_suggestions",
            "search.preview_per_family",
            "search.suggestion_description_chars",
            "search.popular_categories",
            "listing.page_size",
            "listing.max_visible_pages",
            "listing.featured_count",
            "blog.api_base_url",
            "blog.timeout_secs",
            "blog.fallback_categories",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

fn check_visible_pages(pages: u32) -> anyhow::Result<()> {
    if !(3..=MAX_VISIBLE_PAGES_LIMIT).contains(&pages) {
        return Err(anyhow!(
            "listing.max_visible_pages must be between 3 and {}",
            MAX_VISIBLE_PAGES_LIMIT
        ));
    }
    Ok(())
}

fn parse_count(key: &str, value: &str, min: usize) -> anyhow::Result<usize> {
    let parsed: usize = value
        .parse()
        .with_context(|| format!("Invalid value for {}: {}", key, value))?;
    if parsed < min {
        return Err(anyhow!("{} must be at least {}", key, min));
    }
    Ok(parsed)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
