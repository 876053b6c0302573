// Catalog and flavour-text invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

use london_picker::catalog::{ADVENTUROUS, CHILL, CULTURE};
use london_picker::controller::THINKING_MESSAGES;
use london_picker::modifier::TWISTS;
use london_picker::{Catalog, CategoryKey, SuggestionRecord};

fn all_lists() -> [(&'static str, &'static [SuggestionRecord]); 3] {
    [("chill", &CHILL), ("adventurous", &ADVENTUROUS), ("culture", &CULTURE)]
}

#[test]
fn every_category_has_more_than_history_capacity_entries() {
    for category in CategoryKey::ALL {
        let list = Catalog::builtin().list(category).unwrap();
        assert!(list.len() > 3, "category '{}' has only {} entries", category, list.len());
    }
    assert_eq!(CHILL.len(), 30);
    assert_eq!(ADVENTUROUS.len(), 31);
    assert_eq!(CULTURE.len(), 30);
}

#[test]
fn titles_are_unique_within_a_category() {
    for (name, list) in all_lists() {
        let mut seen = HashSet::new();
        for record in list {
            assert!(seen.insert(record.title), "duplicate title '{}' in {}", record.title, name);
        }
    }
}

#[test]
fn records_have_text_in_every_field() {
    for (name, list) in all_lists() {
        for r in list {
            assert!(!r.title.trim().is_empty(), "empty title in {name}");
            assert!(!r.description.trim().is_empty(), "empty description for '{}'", r.title);
            assert!(
                r.duration.ends_with(" min"),
                "odd duration '{}' for '{}'",
                r.duration,
                r.title
            );
            let minutes: u32 = r.duration.trim_end_matches(" min").parse().unwrap();
            assert!(minutes > 0 && minutes <= 240, "duration {} for '{}'", minutes, r.title);
        }
    }
}

#[test]
fn map_links_are_https() {
    for (_, list) in all_lists() {
        for r in list {
            if let Some(link) = r.map_link {
                assert!(link.starts_with("https://"), "link '{}' for '{}'", link, r.title);
                assert!(!link.contains(' '), "unencoded space in link for '{}'", r.title);
            }
        }
    }
}

#[test]
fn flavour_text_is_distinct() {
    let twists: HashSet<&str> = TWISTS.iter().copied().collect();
    assert_eq!(twists.len(), TWISTS.len());
    assert_eq!(TWISTS.len(), 10);
    let messages: HashSet<&str> = THINKING_MESSAGES.iter().copied().collect();
    assert_eq!(messages.len(), THINKING_MESSAGES.len());
}
