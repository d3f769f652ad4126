//! # Unified Application Configuration
//!
//! This module provides a centralized configuration system that consolidates
//! all application settings into a single, structured configuration object.
//! It supports loading from environment variables, validation, and provides
//! a clean interface for accessing configuration throughout the application.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Bot-specific configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Telegram bot token
    pub token: String,
    /// HTTP client timeout in seconds
    pub http_timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            http_timeout_secs: 30,
        }
    }
}

impl BotConfig {
    /// Validate bot configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.token.trim().is_empty() {
            return Err(AppError::Config("Bot token cannot be empty".to_string()));
        }

        // Basic bot token format validation
        if !self.token.contains(':') {
            return Err(AppError::Config(
                "Bot token format is invalid. Expected format: 'bot_id:bot_token'".to_string(),
            ));
        }

        let parts: Vec<&str> = self.token.split(':').collect();
        if parts.len() != 2 {
            return Err(AppError::Config(
                "Bot token format is invalid. Expected format: 'bot_id:bot_token'".to_string(),
            ));
        }

        // Validate bot ID is numeric
        if parts[0].parse::<u64>().is_err() {
            return Err(AppError::Config(
                "Bot token bot ID must be numeric".to_string(),
            ));
        }

        // Validate bot token length
        if parts[1].len() < 20 {
            return Err(AppError::Config(
                "Bot token appears to be too short. Please verify it's a valid token".to_string(),
            ));
        }

        if self.http_timeout_secs == 0 {
            return Err(AppError::Config("HTTP timeout cannot be 0".to_string()));
        }

        if self.http_timeout_secs > 300 {
            return Err(AppError::Config(
                "HTTP timeout cannot be greater than 300 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

/// Open Library catalog configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base URL of the book-search HTTP service
    pub base_url: String,
    /// Maximum number of results formatted per search call
    pub result_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
            result_limit: 5,
        }
    }
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(AppError::Config(
                "Catalog base URL cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(AppError::Config(
                "Catalog base URL must start with 'http://' or 'https://'".to_string(),
            ));
        }

        // Detail links are built by concatenating the base URL with a
        // result key that already starts with '/'.
        if self.base_url.ends_with('/') {
            return Err(AppError::Config(
                "Catalog base URL must not end with a trailing slash".to_string(),
            ));
        }

        if self.result_limit == 0 {
            return Err(AppError::Config("Result limit cannot be 0".to_string()));
        }

        if self.result_limit > 25 {
            return Err(AppError::Config(
                "Result limit cannot be greater than 25".to_string(),
            ));
        }

        Ok(())
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bot configuration
    pub bot: BotConfig,
    /// Catalog configuration
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        // Load bot configuration
        config.bot.token = env::var("TELEGRAM_BOT_TOKEN").map_err(|_| {
            AppError::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
        })?;
        config.bot.http_timeout_secs = env::var("HTTP_CLIENT_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("HTTP_CLIENT_TIMEOUT_SECS must be a valid number".to_string())
            })?;

        // Load catalog configuration
        config.catalog.base_url = env::var("CATALOG_BASE_URL")
            .unwrap_or_else(|_| "https://openlibrary.org".to_string());
        config.catalog.result_limit = env::var("SEARCH_RESULT_LIMIT")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| {
                AppError::Config("SEARCH_RESULT_LIMIT must be a valid number".to_string())
            })?;

        Ok(config)
    }

    /// Validate the complete configuration
    pub fn validate(&self) -> AppResult<()> {
        self.bot.validate()?;
        self.catalog.validate()?;
        Ok(())
    }
}
