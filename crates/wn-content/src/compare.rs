//! Line ordering rules.
//!
//! A store binary-searches a sorted resource by comparing raw lines (or the
//! key field a line starts with). Each ordering rule below describes how
//! one family of resources is sorted. Header lines that begin with two
//! spaces are comments and sort before every record line.

use std::cmp::Ordering;
use std::fmt;

/// A total order over the lines of one resource.
pub trait LineComparator: Send + Sync + fmt::Debug {
    /// Short name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Compare two lines. Only the leading key field is significant.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

fn is_comment(line: &str) -> bool {
    line.starts_with("  ")
}

fn key_field(line: &str) -> &str {
    line.split(' ').next().unwrap_or("")
}

/// Comments first, then `records` on the key fields.
fn compare_records(a: &str, b: &str, records: impl Fn(&str, &str) -> Ordering) -> Ordering {
    match (is_comment(a), is_comment(b)) {
        (true, true) => a.cmp(b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => records(key_field(a), key_field(b)),
    }
}

/// Index lines, keyed by lemma: case-insensitive, ties broken by exact bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexLineComparator;

impl LineComparator for IndexLineComparator {
    fn name(&self) -> &'static str {
        "index"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_records(a, b, |a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        })
    }
}

/// Data lines, keyed by numeric byte offset.
///
/// Keys that do not parse as numbers sort after numeric keys, by bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataLineComparator;

impl LineComparator for DataLineComparator {
    fn name(&self) -> &'static str {
        "data"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        compare_records(a, b, |a, b| match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
            (Ok(_), Err(_)) => Ordering::Less,
            (Err(_), Ok(_)) => Ordering::Greater,
            (Err(_), Err(_)) => a.cmp(b),
        })
    }
}

/// Exception lines, keyed by surface form in byte order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExceptionLineComparator;

impl LineComparator for ExceptionLineComparator {
    fn name(&self) -> &'static str {
        "exception"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        key_field(a).cmp(key_field(b))
    }
}

/// Sense-index lines, keyed by sense key.
///
/// The lemma part compares case-insensitively; the numeric remainder
/// (`ss_type:lex_filenum:lex_id:head:head_id`) compares by bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SenseKeyLineComparator;

impl LineComparator for SenseKeyLineComparator {
    fn name(&self) -> &'static str {
        "sense-key"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        let split = |key: &str| -> (String, String) {
            match key.rsplit_once('%') {
                Some((lemma, rest)) => (lemma.to_lowercase(), rest.to_string()),
                None => (key.to_lowercase(), String::new()),
            }
        };
        let (a_full, b_full) = (key_field(a), key_field(b));
        let (a_lemma, a_rest) = split(a_full);
        let (b_lemma, b_rest) = split(b_full);
        a_lemma
            .cmp(&b_lemma)
            .then_with(|| a_rest.cmp(&b_rest))
            .then_with(|| a_full.cmp(b_full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sorted(cmp: &dyn LineComparator, lines: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| cmp.compare(a, b));
        v
    }

    #[test]
    fn index_is_case_insensitive_with_comments_first() {
        let lines = sorted(
            &IndexLineComparator,
            &["young a 3", "Young n 1", "  1 license header", "abandon v 2"],
        );
        assert_eq!(
            lines,
            vec!["  1 license header", "abandon v 2", "Young n 1", "young a 3"]
        );
    }

    #[test]
    fn index_compares_only_the_lemma() {
        assert_eq!(
            IndexLineComparator.compare("dog n 7 5", "dog"),
            Ordering::Equal
        );
    }

    #[test]
    fn data_is_numeric() {
        let lines = sorted(
            &DataLineComparator,
            &["00010000 03 n", "00001740 03 n", "  header", "00001930 03 n"],
        );
        assert_eq!(
            lines,
            vec!["  header", "00001740 03 n", "00001930 03 n", "00010000 03 n"]
        );
        assert_eq!(DataLineComparator.compare("1740", "00001740"), Ordering::Greater);
        assert_eq!(DataLineComparator.compare("garbage", "00001740"), Ordering::Greater);
    }

    #[test]
    fn exception_is_bytewise_on_surface_form() {
        assert_eq!(
            ExceptionLineComparator.compare("geese goose", "geese"),
            Ordering::Equal
        );
        assert_eq!(
            ExceptionLineComparator.compare("Aa x", "aa x"),
            Ordering::Less
        );
    }

    #[test]
    fn sense_key_lemma_then_remainder() {
        let lines = sorted(
            &SenseKeyLineComparator,
            &[
                "dog%2:38:00:: 02009433 1 0",
                "dog%1:05:00:: 02084071 1 42",
                "Dog%1:05:00:: x",
                "do%2:41:01:: 0 1 0",
            ],
        );
        assert_eq!(lines[0], "do%2:41:01:: 0 1 0");
        assert_eq!(lines[1], "Dog%1:05:00:: x");
        assert_eq!(lines[2], "dog%1:05:00:: 02084071 1 42");
        assert_eq!(lines[3], "dog%2:38:00:: 02009433 1 0");
    }

    fn comparators() -> Vec<&'static dyn LineComparator> {
        vec![
            &IndexLineComparator,
            &DataLineComparator,
            &ExceptionLineComparator,
            &SenseKeyLineComparator,
        ]
    }

    proptest! {
        #[test]
        fn comparators_are_antisymmetric(a in "[ a-zA-Z0-9%:]{0,12}", b in "[ a-zA-Z0-9%:]{0,12}") {
            for cmp in comparators() {
                prop_assert_eq!(cmp.compare(&a, &b), cmp.compare(&b, &a).reverse());
                prop_assert_eq!(cmp.compare(&a, &a), Ordering::Equal);
            }
        }

        #[test]
        fn sorted_lines_are_binary_searchable(mut keys in prop::collection::vec("[a-z]{1,6}", 1..20)) {
            let cmp = IndexLineComparator;
            keys.sort_by(|a, b| cmp.compare(a, b));
            keys.dedup();
            for key in &keys {
                let found = keys.binary_search_by(|probe| cmp.compare(probe, key));
                prop_assert!(found.is_ok());
            }
        }
    }
}
