//! # Bot Reply Tests
//!
//! Unit tests for the language keyboard and the search reply plan:
//! fallback ordering, the five-result cap and sentinel rendering.

use kitap_bot::bot::search_handler::{reply_plan, Reply};
use kitap_bot::bot::ui_builder::{create_language_keyboard, format_book_reply};
use kitap_bot::localization::{create_localization_manager, LocalizationManager};
use kitap_bot::search::{BookDoc, SearchResponse};
use std::sync::Arc;

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://openlibrary.org";
    const LIMIT: usize = 5;

    fn setup_localization() -> Arc<LocalizationManager> {
        create_localization_manager().expect("Failed to create localization manager")
    }

    fn doc(title: &str, author: &str, key: &str) -> BookDoc {
        BookDoc {
            title: Some(title.to_string()),
            author_name: Some(vec![author.to_string()]),
            key: Some(key.to_string()),
        }
    }

    fn response(docs: Vec<BookDoc>) -> SearchResponse {
        SearchResponse {
            num_found: docs.len() as u64,
            docs,
        }
    }

    fn empty_response() -> SearchResponse {
        SearchResponse {
            num_found: 0,
            docs: vec![],
        }
    }

    #[test]
    fn test_language_keyboard_shape() {
        let keyboard = create_language_keyboard();

        assert_eq!(keyboard.keyboard.len(), 1);
        assert_eq!(keyboard.keyboard[0].len(), 2);
        assert_eq!(keyboard.keyboard[0][0].text, "Қазақша");
        assert_eq!(keyboard.keyboard[0][1].text, "Русский");
        assert!(keyboard.resize_keyboard);
        assert!(keyboard.one_time_keyboard);
    }

    #[test]
    fn test_format_book_reply_fills_template() {
        let localization = setup_localization();
        let reply = format_book_reply(
            &doc("The Hobbit", "J.R.R. Tolkien", "/works/OL262758W"),
            "ru",
            BASE,
            &localization,
        );

        assert!(reply.contains("📚 The Hobbit"));
        assert!(reply.contains("Автор(ы): J.R.R. Tolkien"));
        assert!(reply.contains("[Подробнее о книге](https://openlibrary.org/works/OL262758W)"));
    }

    #[test]
    fn test_format_book_reply_renders_sentinels() {
        let localization = setup_localization();
        let reply = format_book_reply(&BookDoc::default(), "ru", BASE, &localization);

        assert!(reply.contains("Без названия"));
        assert!(reply.contains("Неизвестные авторы"));
    }

    #[test]
    fn test_title_hit_yields_one_book_info_per_result() {
        let localization = setup_localization();
        let title = response(vec![
            doc("Book 1", "A", "/works/1"),
            doc("Book 2", "B", "/works/2"),
            doc("Book 3", "C", "/works/3"),
        ]);

        let replies = reply_plan(&title, None, "ru", BASE, LIMIT, &localization);

        assert_eq!(replies.len(), 3);
        for (i, reply) in replies.iter().enumerate() {
            match reply {
                Reply::BookInfo(text) => assert!(text.contains(&format!("Book {}", i + 1))),
                Reply::Notice(_) => panic!("unexpected notice in a title hit"),
            }
        }
    }

    #[test]
    fn test_results_capped_at_five_in_api_order() {
        let localization = setup_localization();
        let docs: Vec<BookDoc> = (1..=7)
            .map(|i| doc(&format!("Book {}", i), "A", &format!("/works/{}", i)))
            .collect();
        let title = SearchResponse {
            num_found: 7,
            docs,
        };

        let replies = reply_plan(&title, None, "ru", BASE, LIMIT, &localization);

        assert_eq!(replies.len(), 5);
        for (i, reply) in replies.iter().enumerate() {
            let Reply::BookInfo(text) = reply else {
                panic!("expected book info");
            };
            assert!(text.contains(&format!("Book {}", i + 1)));
        }
        // Entries 6 and 7 are never formatted
        assert!(!replies.iter().any(|r| match r {
            Reply::BookInfo(text) => text.contains("Book 6") || text.contains("Book 7"),
            Reply::Notice(_) => false,
        }));
    }

    #[test]
    fn test_title_miss_author_hit_sequence() {
        let localization = setup_localization();
        let author = response(vec![
            doc("Book 1", "A", "/works/1"),
            doc("Book 2", "A", "/works/2"),
        ]);

        let replies = reply_plan(
            &empty_response(),
            Some(&author),
            "ru",
            BASE,
            LIMIT,
            &localization,
        );

        assert_eq!(replies.len(), 3);
        assert_eq!(
            replies[0],
            Reply::Notice("Книга не найдена. Начинаем поиск по автору...".to_string())
        );
        assert!(matches!(&replies[1], Reply::BookInfo(text) if text.contains("Book 1")));
        assert!(matches!(&replies[2], Reply::BookInfo(text) if text.contains("Book 2")));
    }

    #[test]
    fn test_double_miss_sequence() {
        let localization = setup_localization();

        let replies = reply_plan(
            &empty_response(),
            Some(&empty_response()),
            "ru",
            BASE,
            LIMIT,
            &localization,
        );

        assert_eq!(
            replies,
            vec![
                Reply::Notice("Книга не найдена. Начинаем поиск по автору...".to_string()),
                Reply::Notice("По автору тоже ничего не найдено.".to_string()),
            ]
        );
    }

    #[test]
    fn test_author_fallback_capped_at_five() {
        let localization = setup_localization();
        let docs: Vec<BookDoc> = (1..=9)
            .map(|i| doc(&format!("Book {}", i), "A", &format!("/works/{}", i)))
            .collect();
        let author = SearchResponse {
            num_found: 9,
            docs,
        };

        let replies = reply_plan(
            &empty_response(),
            Some(&author),
            "ru",
            BASE,
            LIMIT,
            &localization,
        );

        // One notice plus five book-info replies
        assert_eq!(replies.len(), 6);
        assert!(matches!(replies[0], Reply::Notice(_)));
    }

    #[test]
    fn test_author_response_ignored_when_title_hits() {
        let localization = setup_localization();
        let title = response(vec![doc("Title Match", "A", "/works/1")]);
        let author = response(vec![doc("Author Match", "B", "/works/2")]);

        let replies = reply_plan(&title, Some(&author), "ru", BASE, LIMIT, &localization);

        assert_eq!(replies.len(), 1);
        assert!(matches!(&replies[0], Reply::BookInfo(text) if text.contains("Title Match")));
    }

    #[test]
    fn test_kazakh_templates_used_for_kk() {
        let localization = setup_localization();

        let replies = reply_plan(
            &empty_response(),
            Some(&empty_response()),
            "kk",
            BASE,
            LIMIT,
            &localization,
        );

        assert_eq!(
            replies,
            vec![
                Reply::Notice("Кітап табылмады. Автор бойынша іздеу басталды...".to_string()),
                Reply::Notice("Автор бойынша да ештеңе табылмады.".to_string()),
            ]
        );
    }
}
