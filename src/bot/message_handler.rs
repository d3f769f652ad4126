//! Message Handler module for processing incoming Telegram messages
//!
//! This is the single dispatcher endpoint: it pulls the text and sender
//! identity out of the update, classifies the text through the router
//! and dispatches exactly one handler.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

// Import localization
use crate::localization::LocalizationManager;

// Import the preference store and search client
use crate::preferences::PreferenceStore;
use crate::search::CatalogClient;

// Import the router and handlers
use super::command_handlers::{handle_language_selection, handle_start_command};
use super::router::{classify, IncomingCommand};
use super::search_handler::handle_search_query;

/// Handle one incoming Telegram message
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    store: Arc<PreferenceStore>,
    catalog: Arc<CatalogClient>,
    localization: Arc<LocalizationManager>,
    result_limit: usize,
) -> Result<()> {
    // Only text messages are routed; stickers, photos and the like are
    // outside the command set.
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    // Private chats without a sender do not occur in practice; fall
    // back to the chat id so group/channel posts still get a bucket.
    let user_id = msg
        .from
        .as_ref()
        .map(|user| user.id.0 as i64)
        .unwrap_or(msg.chat.id.0);

    match classify(text) {
        IncomingCommand::Start => {
            handle_start_command(&bot, &msg, user_id, &store, &localization).await
        }
        IncomingCommand::SelectLanguage(language) => {
            handle_language_selection(&bot, &msg, user_id, language, &store, &localization).await
        }
        IncomingCommand::Query(query) => {
            handle_search_query(
                &bot,
                &msg,
                user_id,
                &query,
                &store,
                &catalog,
                result_limit,
                &localization,
            )
            .await
        }
    }
}
