//! Command Handlers module for the /start command and language selection

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, info};

// Import localization
use crate::localization::{t_lang, LocalizationManager};

// Import the preference store
use crate::preferences::{Language, PreferenceStore};

// Import UI builder functions
use super::ui_builder::create_language_keyboard;

/// Handle the /start command
///
/// Records the Russian default for first-time users and replies with
/// the greeting plus the language-selection keyboard. The greeting is
/// always sent in Russian, even for users who already picked Kazakh;
/// the text itself offers both languages.
pub async fn handle_start_command(
    bot: &Bot,
    msg: &Message,
    user_id: i64,
    store: &PreferenceStore,
    localization: &LocalizationManager,
) -> Result<()> {
    debug!(user_id = %user_id, "Handling /start command");

    store.ensure_default(user_id);

    bot.send_message(msg.chat.id, t_lang(localization, "start-greeting", "ru"))
        .reply_markup(create_language_keyboard())
        .await?;

    Ok(())
}

/// Handle a press on one of the two language-selector buttons
///
/// Overwrites any previously recorded preference and confirms in the
/// newly selected language.
pub async fn handle_language_selection(
    bot: &Bot,
    msg: &Message,
    user_id: i64,
    language: Language,
    store: &PreferenceStore,
    localization: &LocalizationManager,
) -> Result<()> {
    store.set(user_id, language);

    info!(user_id = %user_id, language = %language.as_str(), "Language preference updated");

    bot.send_message(
        msg.chat.id,
        t_lang(localization, "language-set", language.as_str()),
    )
    .await?;

    Ok(())
}
