//! # Kitap Telegram Bot
//!
//! A Telegram bot that searches the Open Library catalog for books by
//! title, falls back to an author search when the title yields nothing,
//! and replies in the user's chosen language (Kazakh or Russian).

pub mod bot;
pub mod config;
pub mod errors;
pub mod localization;
pub mod preferences;
pub mod search;

// Re-export types for easier access
pub use preferences::{Language, PreferenceStore};
pub use search::{BookDoc, CatalogClient, SearchResponse};
