//! # User Language Preferences
//!
//! In-memory store mapping Telegram user identifiers to their selected
//! language. The store lives for the process lifetime and is shared
//! across handler invocations behind an `Arc`; a mutex guards it since
//! the dispatcher may run handlers on different worker threads.

use parking_lot::Mutex;
use std::collections::HashMap;

/// Language a user can select for bot replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// Kazakh
    Kk,
    /// Russian (the default for new users)
    #[default]
    Ru,
}

impl Language {
    /// Two-letter language code used as the message catalog locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kk => "kk",
            Language::Ru => "ru",
        }
    }

    /// Button label shown on the language-selection keyboard
    pub fn label(&self) -> &'static str {
        match self {
            Language::Kk => "Қазақша",
            Language::Ru => "Русский",
        }
    }
}

/// In-memory mapping from user identifier to selected language
#[derive(Debug, Default)]
pub struct PreferenceStore {
    inner: Mutex<HashMap<i64, Language>>,
}

impl PreferenceStore {
    /// Create an empty preference store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user's language, falling back to the Russian default
    pub fn get(&self, user_id: i64) -> Language {
        self.inner
            .lock()
            .get(&user_id)
            .copied()
            .unwrap_or_default()
    }

    /// Record a language for a user, overwriting any prior value
    pub fn set(&self, user_id: i64, language: Language) {
        self.inner.lock().insert(user_id, language);
    }

    /// Record the default language for a user seen for the first time
    ///
    /// An already-recorded preference is left untouched.
    pub fn ensure_default(&self, user_id: i64) {
        self.inner.lock().entry(user_id).or_default();
    }

    /// Number of users with a recorded preference
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no user has a recorded preference yet
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
