use crate::models::{GroupedEntities, Span};

/// Group tagged spans into deduplicated per-category mention lists.
///
/// Spans are visited in input order (left-to-right occurrence in the
/// transcript as returned by the tagger). Each span lands in at most one
/// category; spans whose label carries no recognized marker are dropped
/// without error. Within a category the first occurrence of a text wins
/// and later duplicates are skipped.
///
/// Pure function: deterministic for identical input order, never mutates
/// its input, never fails for well-formed spans.
pub fn aggregate(spans: &[Span]) -> GroupedEntities {
    let mut entities = GroupedEntities::new();

    for span in spans {
        if let Some(category) = span.category() {
            entities.insert(category, &span.text);
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(pairs: &[(&str, &str)]) -> Vec<Span> {
        pairs
            .iter()
            .map(|(text, label)| Span::new(*text, *label))
            .collect()
    }

    #[test]
    fn test_groups_by_category() {
        let input = spans(&[
            ("Alice", "PER"),
            ("Acme", "ORG"),
            ("Paris", "LOC"),
            ("Alice", "PER"),
            ("Bob", "PER"),
        ]);

        let entities = aggregate(&input);

        assert_eq!(entities.persons, vec!["Alice", "Bob"]);
        assert_eq!(entities.organizations, vec!["Acme"]);
        assert_eq!(entities.locations, vec!["Paris"]);
    }

    #[test]
    fn test_empty_input() {
        let entities = aggregate(&[]);

        assert!(entities.persons.is_empty());
        assert!(entities.organizations.is_empty());
        assert!(entities.locations.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let input = spans(&[
            ("Alice", "B-PER"),
            ("Acme Corp", "ORG"),
            ("Berlin", "I-LOC"),
            ("Acme Corp", "ORG"),
        ]);

        assert_eq!(aggregate(&input), aggregate(&input));
    }

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let input = spans(&[
            ("Charlie", "PER"),
            ("Alice", "PER"),
            ("Charlie", "PER"),
            ("Bob", "PER"),
            ("Alice", "PER"),
        ]);

        let entities = aggregate(&input);
        assert_eq!(entities.persons, vec!["Charlie", "Alice", "Bob"]);
    }

    #[test]
    fn test_drops_unknown_labels() {
        let input = spans(&[
            ("tomorrow", "DATE"),
            ("Q3", "MISC"),
            ("Alice", "PER"),
        ]);

        let entities = aggregate(&input);
        assert_eq!(entities.persons, vec!["Alice"]);
        assert!(entities.organizations.is_empty());
        assert!(entities.locations.is_empty());
    }

    #[test]
    fn test_category_exclusivity() {
        // A label containing two markers lands in exactly one category,
        // the first in check order
        let input = spans(&[("Acme", "ORG-LOC")]);

        let entities = aggregate(&input);
        assert_eq!(entities.organizations, vec!["Acme"]);
        assert!(entities.locations.is_empty());
        assert!(entities.persons.is_empty());
    }

    #[test]
    fn test_premerged_mention_appears_once() {
        // The tagging adapter merges sub-word tokens before the aggregator
        // runs, so a mention arrives as a single span
        let input = spans(&[("Acme Corp", "ORG")]);

        let entities = aggregate(&input);
        assert_eq!(entities.organizations, vec!["Acme Corp"]);
        assert!(entities.persons.is_empty());
        assert!(entities.locations.is_empty());
    }

    #[test]
    fn test_never_mutates_input() {
        let input = spans(&[("Alice", "PER"), ("Acme", "ORG")]);
        let before = input.clone();

        let _ = aggregate(&input);
        assert_eq!(input, before);
    }
}
