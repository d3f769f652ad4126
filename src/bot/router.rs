//! Command Router module for classifying inbound text
//!
//! Every text message maps to exactly one command, checked in fixed
//! priority order: the start command first, then the two literal
//! language-selector labels, then the free-text catch-all. There is no
//! error path; any input the first two patterns miss is a search query.

use crate::preferences::Language;

/// Token that triggers the start handler
pub const START_COMMAND: &str = "/start";

/// Classified inbound command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomingCommand {
    /// The /start command
    Start,
    /// One of the two language-selector buttons was pressed
    SelectLanguage(Language),
    /// Anything else: a free-text book search query
    Query(String),
}

/// Classify inbound text into exactly one command
///
/// `/start` may carry a bot mention suffix (`/start@kitap_bot`), which
/// Telegram appends in group chats.
pub fn classify(text: &str) -> IncomingCommand {
    let trimmed = text.trim();

    if trimmed == START_COMMAND
        || trimmed
            .strip_prefix(START_COMMAND)
            .is_some_and(|rest| rest.starts_with('@'))
    {
        return IncomingCommand::Start;
    }

    if trimmed == Language::Kk.label() {
        return IncomingCommand::SelectLanguage(Language::Kk);
    }

    if trimmed == Language::Ru.label() {
        return IncomingCommand::SelectLanguage(Language::Ru);
    }

    IncomingCommand::Query(text.to_string())
}
