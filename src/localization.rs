//! # Localization
//!
//! Fluent-based message catalog for the bot. Two locales are bundled
//! ("ru" and "kk"); Russian is the default for new users and the
//! fallback for unknown language codes. Bundles are built from FTL
//! resources embedded at compile time so the binary carries its own
//! catalog.

use anyhow::Result;
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::collections::HashMap;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

/// Language the bot falls back to when a code is unknown or unset
pub const DEFAULT_LANGUAGE: &str = "ru";

const RU_FTL: &str = include_str!("../locales/ru/main.ftl");
const KK_FTL: &str = include_str!("../locales/kk/main.ftl");

/// Localization manager for the Kitap Bot
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    /// Create a new localization manager
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for (locale_str, source) in [("ru", RU_FTL), ("kk", KK_FTL)] {
            let locale: LanguageIdentifier = locale_str.parse()?;
            let bundle = Self::create_bundle(&locale, source)?;
            bundles.insert(locale_str.to_string(), bundle);
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(
        locale: &LanguageIdentifier,
        source: &str,
    ) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);

        // Templates are plain chat messages; Unicode isolation marks
        // around placeables would leak into the replies.
        bundle.set_use_isolating(false);

        if let Ok(resource) = FluentResource::try_new(source.to_string()) {
            let _ = bundle.add_resource(resource);
        }

        Ok(bundle)
    }

    /// Get a localized message in a specific language
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let bundle = match self.bundles.get(language) {
            Some(bundle) => bundle,
            None => {
                // Fallback to Russian if language not found
                match self.bundles.get(DEFAULT_LANGUAGE) {
                    Some(bundle) => bundle,
                    None => return format!("Missing translation: {}", key),
                }
            }
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {}", key),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {}", key),
        };

        let mut value = String::new();

        if let Some(args) = args {
            let fluent_args = FluentArgs::from_iter(
                args.iter().map(|(k, v)| (*k, FluentValue::from(*v))),
            );

            let _ = bundle.write_pattern(&mut value, pattern, Some(&fluent_args), &mut vec![]);
        } else {
            let _ = bundle.write_pattern(&mut value, pattern, None, &mut vec![]);
        }

        value
    }

    /// Get a localized message with arguments in a specific language
    pub fn get_message_with_args_in_language(
        &self,
        key: &str,
        language: &str,
        args: &[(&str, &str)],
    ) -> String {
        let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
        self.get_message_in_language(key, language, Some(&args_map))
    }

    /// Check if a language is supported
    pub fn is_language_supported(&self, language: &str) -> bool {
        self.bundles.contains_key(language)
    }
}

/// Create a shared localization manager for use across handlers
pub fn create_localization_manager() -> Result<Arc<LocalizationManager>> {
    Ok(Arc::new(LocalizationManager::new()?))
}

/// Convenience function to get a localized message in a specific language
pub fn t_lang(localization: &LocalizationManager, key: &str, language: &str) -> String {
    localization.get_message_in_language(key, language, None)
}

/// Convenience function to get a localized message with arguments in a specific language
pub fn t_args_lang(
    localization: &LocalizationManager,
    key: &str,
    language: &str,
    args: &[(&str, &str)],
) -> String {
    localization.get_message_with_args_in_language(key, language, args)
}

/// Normalize a raw language code to a supported locale
///
/// Region suffixes are stripped (e.g. "kk-KZ" -> "kk"); anything the
/// catalog does not carry resolves to the Russian default.
pub fn detect_language(localization: &LocalizationManager, language_code: Option<&str>) -> String {
    if let Some(code) = language_code {
        let lang = if code.contains('-') {
            code.split('-').next().unwrap_or(DEFAULT_LANGUAGE)
        } else {
            code
        };

        if localization.is_language_supported(lang) {
            return lang.to_string();
        }
    }

    DEFAULT_LANGUAGE.to_string()
}
