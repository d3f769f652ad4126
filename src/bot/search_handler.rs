//! Search Handler module for the title-then-author catalog fallback
//!
//! A free-text query first runs against the title-filtered endpoint.
//! Only an explicit zero result count triggers the author fallback;
//! network or decode faults propagate and abort processing of that one
//! message without any user-visible reply.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{LinkPreviewOptions, ParseMode};
use tracing::{debug, info};

// Import localization
use crate::localization::{t_lang, LocalizationManager};

// Import the preference store and search client
use crate::preferences::PreferenceStore;
use crate::search::{CatalogClient, SearchResponse};

// Import UI builder functions
use super::ui_builder::format_book_reply;

/// One outbound reply produced by a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Plain status text (book-not-found / author-not-found)
    Notice(String),
    /// Formatted book-info text, sent with Markdown and no link preview
    BookInfo(String),
}

/// Build the ordered reply list for one search
///
/// `author_response` is the result of the author fallback and is only
/// consulted when the title search reported zero matches. Docs are
/// formatted in API order, capped at `limit` per call.
pub fn reply_plan(
    title_response: &SearchResponse,
    author_response: Option<&SearchResponse>,
    language: &str,
    base_url: &str,
    limit: usize,
    localization: &LocalizationManager,
) -> Vec<Reply> {
    if title_response.has_results() {
        return book_info_replies(title_response, language, base_url, limit, localization);
    }

    let mut replies = vec![Reply::Notice(t_lang(
        localization,
        "book-not-found",
        language,
    ))];

    match author_response {
        Some(response) if response.has_results() => {
            replies.extend(book_info_replies(
                response,
                language,
                base_url,
                limit,
                localization,
            ));
        }
        _ => {
            replies.push(Reply::Notice(t_lang(
                localization,
                "author-not-found",
                language,
            )));
        }
    }

    replies
}

fn book_info_replies(
    response: &SearchResponse,
    language: &str,
    base_url: &str,
    limit: usize,
    localization: &LocalizationManager,
) -> Vec<Reply> {
    response
        .docs
        .iter()
        .take(limit)
        .map(|doc| Reply::BookInfo(format_book_reply(doc, language, base_url, localization)))
        .collect()
}

/// Handle a free-text search query
pub async fn handle_search_query(
    bot: &Bot,
    msg: &Message,
    user_id: i64,
    query: &str,
    store: &PreferenceStore,
    catalog: &CatalogClient,
    result_limit: usize,
    localization: &LocalizationManager,
) -> Result<()> {
    let language = store.get(user_id);

    debug!(user_id = %user_id, language = %language.as_str(), query = %query, "Handling search query");

    let title_response = catalog.search_by_title(query).await?;

    // The author fallback is only issued when the title search came
    // back empty.
    let author_response = if title_response.has_results() {
        None
    } else {
        Some(catalog.search_by_author(query).await?)
    };

    let replies = reply_plan(
        &title_response,
        author_response.as_ref(),
        language.as_str(),
        catalog.base_url(),
        result_limit,
        localization,
    );

    info!(
        user_id = %user_id,
        title_found = title_response.num_found,
        author_fallback = author_response.is_some(),
        replies = replies.len(),
        "Search completed"
    );

    // Replies for one message go out in plan order, one awaited send
    // at a time.
    for reply in replies {
        match reply {
            Reply::Notice(text) => {
                bot.send_message(msg.chat.id, text).await?;
            }
            Reply::BookInfo(text) => {
                bot.send_message(msg.chat.id, text)
                    .parse_mode(ParseMode::Markdown)
                    .link_preview_options(disabled_link_preview())
                    .await?;
            }
        }
    }

    Ok(())
}

fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}
