//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `router`: classifies inbound text into one of the three commands
//! - `command_handlers`: handles /start and language selection
//! - `search_handler`: runs the title-then-author catalog search
//! - `message_handler`: the dispatcher endpoint tying it all together
//! - `ui_builder`: creates keyboards and formats messages

pub mod command_handlers;
pub mod message_handler;
pub mod router;
pub mod search_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use message_handler::message_handler;

// Re-export utility functions that might be used elsewhere
pub use router::{classify, IncomingCommand};
pub use search_handler::{reply_plan, Reply};
pub use ui_builder::{create_language_keyboard, format_book_reply};
