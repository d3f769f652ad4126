//! UI Builder module for creating keyboards and formatting messages

use teloxide::types::{KeyboardButton, KeyboardMarkup};

// Import localization
use crate::localization::{t_args_lang, t_lang, LocalizationManager};

// Import search types
use crate::preferences::Language;
use crate::search::BookDoc;

/// Create the two-button reply keyboard for language selection
pub fn create_language_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(Language::Kk.label()),
        KeyboardButton::new(Language::Ru.label()),
    ]])
    .resize_keyboard()
    .one_time_keyboard()
}

/// Format one search result into the localized book-info reply
///
/// Missing title or authors render as the locale's sentinel strings;
/// the detail link is the catalog base URL plus the result key.
pub fn format_book_reply(
    doc: &BookDoc,
    language: &str,
    base_url: &str,
    localization: &LocalizationManager,
) -> String {
    let title = doc
        .title
        .clone()
        .unwrap_or_else(|| t_lang(localization, "unknown-title", language));
    let author = doc
        .joined_authors()
        .unwrap_or_else(|| t_lang(localization, "unknown-authors", language));
    let link = doc.detail_link(base_url);

    t_args_lang(
        localization,
        "book-info",
        language,
        &[("title", &title), ("author", &author), ("link", &link)],
    )
}
