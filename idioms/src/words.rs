//! Word and line pipelines over plain text.
//!
//! A word is a maximal run of alphanumerics and underscores; everything
//! else separates words.

use std::collections::{BTreeSet, HashMap};

pub const SONNET_I: &str = "\
From fairest creatures we desire increase,
That thereby beauty's rose might never die,
But as the riper should by time decease,
His tender heir might bear his memory:
But thou contracted to thine own bright eyes,
Feed'st thy light's flame with self-substantial fuel,
Making a famine where abundance lies,
Thy self thy foe, to thy sweet self too cruel:
Thou that art now the world's fresh ornament,
And only herald to the gaudy spring,
Within thine own bud buriest thy content,
And, tender churl, mak'st waste in niggarding:
Pity the world, or else this glutton be,
To eat the world's due, by the grave and thee.
";

pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
}

pub fn upper_case<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|w| w.as_ref().to_uppercase()).collect()
}

/// Concatenates `take` lines after skipping `skip`, without separators.
pub fn join_line_range(text: &str, skip: usize, take: usize) -> String {
    text.lines().skip(skip).take(take).collect()
}

/// Length in characters of the longest line, 0 for empty text.
pub fn longest_line(text: &str) -> usize {
    text.lines().map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Distinct lower-cased words, shortest first, ties alphabetical.
pub fn sorted_distinct_lowercase(text: &str) -> Vec<String> {
    let distinct: BTreeSet<(usize, String)> = words(text)
        .map(str::to_lowercase)
        .map(|w| (w.chars().count(), w))
        .collect();
    distinct.into_iter().map(|(_, w)| w).collect()
}

/// Case-sensitive occurrence count per word.
pub fn word_frequencies(text: &str) -> HashMap<String, u64> {
    words(text).fold(HashMap::new(), |mut counts, w| {
        *counts.entry(w.to_string()).or_insert(0) += 1;
        counts
    })
}

pub fn first_to_uppercase(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn each_first_to_uppercase<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|v| first_to_uppercase(v.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAMPSON: [&str; 14] = [
        "every", "problem", "in", "computer", "science", "can", "be", "solved", "by", "adding",
        "another", "level", "of", "indirection",
    ];

    #[test]
    fn upper_cases_every_word() {
        let upper = upper_case(&LAMPSON);
        assert_eq!(upper.len(), LAMPSON.len());
        assert_eq!(upper[0], "EVERY");
        assert_eq!(upper[13], "INDIRECTION");
    }

    #[test]
    fn joins_third_and_fourth_lines() {
        assert_eq!(
            join_line_range(SONNET_I, 2, 2),
            "But as the riper should by time decease,His tender heir might bear his memory:"
        );
    }

    #[test]
    fn longest_sonnet_line() {
        assert_eq!(longest_line(SONNET_I), 53);
        assert_eq!(longest_line(""), 0);
    }

    #[test]
    fn sorts_by_length_then_alphabet() {
        let sorted = sorted_distinct_lowercase("Bb a ccc A bb b");
        assert_eq!(sorted, vec!["a", "b", "bb", "ccc"]);

        let sonnet = sorted_distinct_lowercase(SONNET_I);
        assert_eq!(sonnet[..3], ["a", "s", "as"]);
        assert_eq!(sonnet.last().map(String::as_str), Some("substantial"));
    }

    #[test]
    fn sonnet_word_counts() {
        let counts = word_frequencies(SONNET_I);
        assert_eq!(counts.get("tender"), Some(&2));
        assert_eq!(counts.get("the"), Some(&6));
        assert_eq!(counts.get("churl"), Some(&1));
        assert_eq!(counts.get("thine"), Some(&2));
        assert_eq!(counts.get("world"), Some(&3));
        assert!(!counts.contains_key("lambda"));
    }

    #[test]
    fn capitalises_first_letter() {
        assert_eq!(each_first_to_uppercase(&["a", "bc", "", "ßx"]), vec!["A", "Bc", "", "SSx"]);
    }
}
