//! Formatting utilities for terminal output

use crate::core::WordMeaning;
use crate::engine::{SolutionOrder, SortKey};

/// Direction marker for a sort button; empty when `key` is not the active axis
#[must_use]
pub fn order_marker(order: &SolutionOrder, key: SortKey) -> &'static str {
    match (order.key == key, order.reverse) {
        (false, _) => "",
        (true, false) => " ▲",
        (true, true) => " ▼",
    }
}

/// Short label for the active ordering
#[must_use]
pub const fn order_label(order: &SolutionOrder) -> &'static str {
    match (order.key, order.reverse) {
        (SortKey::Name, false) => "name, A → Ö",
        (SortKey::Name, true) => "name, Ö → A",
        (SortKey::Length, false) => "length, shortest first",
        (SortKey::Length, true) => "length, longest first",
    }
}

/// One-line summary of a meaning: "word class (descriptors)"
#[must_use]
pub fn meaning_heading(meaning: &WordMeaning) -> String {
    if meaning.descriptors.is_empty() {
        meaning.word_class.clone()
    } else {
        format!("{} ({})", meaning.word_class, meaning.descriptor_line())
    }
}

/// Lay out words in fixed-width columns
#[must_use]
pub fn columns(words: &[&str], width: usize, per_line: usize) -> Vec<String> {
    words
        .chunks(per_line.max(1))
        .map(|chunk| {
            chunk
                .iter()
                .map(|w| format!("{w:<width$}"))
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_only_on_active_axis() {
        let order = SolutionOrder::new(SortKey::Length, true);
        assert_eq!(order_marker(&order, SortKey::Name), "");
        assert_eq!(order_marker(&order, SortKey::Length), " ▼");
        assert_eq!(order_marker(&SolutionOrder::default(), SortKey::Name), " ▲");
    }

    #[test]
    fn labels() {
        assert_eq!(order_label(&SolutionOrder::default()), "name, A → Ö");
        assert_eq!(
            order_label(&SolutionOrder::new(SortKey::Length, true)),
            "length, longest first"
        );
    }

    #[test]
    fn meaning_heading_with_and_without_descriptors() {
        let mut meaning = WordMeaning {
            word_class: "substantiivi".to_string(),
            description: "kala".to_string(),
            descriptors: vec![],
        };
        assert_eq!(meaning_heading(&meaning), "substantiivi");

        meaning.descriptors = vec!["eläin".to_string(), "ruoka".to_string()];
        assert_eq!(meaning_heading(&meaning), "substantiivi (eläin, ruoka)");
    }

    #[test]
    fn columns_wrap() {
        let lines = columns(&["ala", "laka", "kala"], 6, 2);
        assert_eq!(lines, ["ala   laka", "kala"]);
    }

    #[test]
    fn columns_empty() {
        assert!(columns(&[], 6, 4).is_empty());
    }
}
