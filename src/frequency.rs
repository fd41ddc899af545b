//! Word frequency counting.
//!
//! [`FrequencyTable`] maps each word to the number of times it occurs and
//! remembers the order in which words were first seen. That order is the
//! tie-break of [`FrequencyTable::most_common`], which makes Zipf ranks
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use zipfian::frequency::FrequencyTable;
//!
//! let table: FrequencyTable = ["cat", "sat", "mat", "cat", "ran"].into_iter().collect();
//!
//! assert_eq!(table.total(), 5);
//! assert_eq!(table.len(), 4);
//! assert_eq!(table.most_common(2), vec![("cat", 2), ("sat", 1)]);
//! ```

use ahash::AHashMap;

/// Occurrence counts per word.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    /// (word, count) in first-seen order.
    entries: Vec<(String, usize)>,
    /// word -> index into `entries`.
    index: AHashMap<String, usize>,
    /// Number of tokens counted.
    total: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of `tokens`.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        table.extend(tokens);
        table
    }

    /// Count one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.total += 1;
        match self.index.get(word) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(word.to_string(), self.entries.len());
                self.entries.push((word.to_string(), 1));
            }
        }
    }

    /// Occurrences of `word` (0 when unseen).
    pub fn count(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&slot| self.entries[slot].1)
            .unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate over (word, count) in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// Number of words that occur exactly once.
    pub fn hapax_legomena(&self) -> usize {
        self.entries.iter().filter(|(_, count)| *count == 1).count()
    }

    /// The `n` most frequent words in descending order of count.
    ///
    /// Words with equal counts keep their first-seen order. `n` larger than
    /// the vocabulary returns every word.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // Stable sort: equal counts stay in first-seen order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FrequencyTable {
        FrequencyTable::from_tokens(["cat", "sat", "mat", "cat", "ran"])
    }

    #[test]
    fn test_counts() {
        let table = sample();

        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("sat"), 1);
        assert_eq!(table.count("dog"), 0);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total(), 5);
        assert_eq!(table.hapax_legomena(), 3);
    }

    #[test]
    fn test_total_matches_sum_of_counts() {
        let words = "a b c a b a d e f d a".split(' ').collect::<Vec<_>>();
        let table = FrequencyTable::from_tokens(&words);

        let sum: usize = table.iter().map(|(_, count)| count).sum();
        assert_eq!(sum, words.len());
        assert_eq!(table.total(), words.len());
    }

    #[test]
    fn test_empty_table() {
        let table = FrequencyTable::from_tokens(Vec::<String>::new());

        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.most_common(10).is_empty());
    }

    #[test]
    fn test_most_common_ties_keep_first_seen_order() {
        let table = FrequencyTable::from_tokens(["zeta", "alpha", "beta", "alpha", "mid", "mid"]);

        assert_eq!(
            table.most_common(10),
            vec![("alpha", 2), ("mid", 2), ("zeta", 1), ("beta", 1)]
        );
    }

    #[test]
    fn test_most_common_is_clamped() {
        let table = sample();

        assert!(table.most_common(0).is_empty());
        assert_eq!(table.most_common(1), vec![("cat", 2)]);
        assert_eq!(table.most_common(100).len(), 4);
    }

    #[test]
    fn test_iter_is_first_seen_order() {
        let table = sample();
        let words: Vec<&str> = table.iter().map(|(word, _)| word).collect();

        assert_eq!(words, vec!["cat", "sat", "mat", "ran"]);
    }

    #[test]
    fn test_extend_accumulates() {
        let mut table = sample();
        table.extend(vec!["cat".to_string(), "dog".to_string()]);

        assert_eq!(table.count("cat"), 3);
        assert_eq!(table.count("dog"), 1);
        assert_eq!(table.total(), 7);
    }
}
