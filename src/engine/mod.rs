mod ranking;
mod trie;

use ranking::top_k;
use trie::Trie;

pub const DEFAULT_MAX_RESULTS: usize = 5;

/// In-memory prefix-completion index. All words are ASCII-lowercased on the
/// way in and on every query, so lookups are case-insensitive. The index only
/// learns; there is no removal.
///
/// Single logical caller at a time: no internal locking. Wrap the index in a
/// mutex if it ever has to be shared across threads.
#[derive(Debug, Default, Clone)]
pub struct PrefixIndex {
    words: Trie,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one use of `word`, adding `increment` to its frequency and
    /// creating the word if it is new. Empty input is a no-op.
    pub fn insert(&mut self, word: &str, increment: u32) {
        let word = word.to_ascii_lowercase();
        if word.is_empty() {
            return;
        }
        self.words.insert(&word, increment);
    }

    /// True iff `word` was inserted exactly (not merely as a prefix of some
    /// other word).
    pub fn lookup(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_lowercase())
    }

    /// Accumulated frequency of an exactly-stored word.
    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.words.frequency(&word.to_ascii_lowercase())
    }

    /// Up to `max_results` completions of `prefix`, best first: frequency
    /// descending, ties by ascending word order. An unknown prefix (or an
    /// empty one) yields an empty vec, which is the normal "no completions"
    /// result rather than an error.
    pub fn suggest(&self, prefix: &str, max_results: usize) -> Vec<String> {
        let prefix = prefix.to_ascii_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        top_k(self.words.collect_prefixed(&prefix), max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_descending_frequency() {
        let mut index = PrefixIndex::new();
        index.insert("code", 12);
        index.insert("coding", 8);
        index.insert("cool", 4);

        assert_eq!(index.suggest("co", 5), vec!["code", "coding", "cool"]);
    }

    #[test]
    fn breaks_frequency_ties_lexicographically() {
        let mut index = PrefixIndex::new();
        index.insert("cat", 3);
        index.insert("car", 3);

        assert_eq!(index.suggest("ca", 5), vec!["car", "cat"]);
    }

    #[test]
    fn unknown_word_is_not_found() {
        let index = PrefixIndex::new();
        assert!(!index.lookup("zebra"));
    }

    #[test]
    fn unknown_prefix_has_no_completions() {
        let mut index = PrefixIndex::new();
        index.insert("hello", 10);
        assert!(index.suggest("xyz", 5).is_empty());
    }

    #[test]
    fn repeated_inserts_accumulate_and_promote() {
        let mut index = PrefixIndex::new();
        index.insert("help", 8);
        index.insert("hello", 9);
        index.insert("help", 1);
        index.insert("help", 1);

        assert_eq!(index.frequency("help"), Some(10));
        assert_eq!(index.suggest("he", 1), vec!["help"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut index = PrefixIndex::new();
        index.insert("Hello", 1);
        assert!(index.lookup("hello"));
        assert!(index.lookup("HELLO"));
    }

    #[test]
    fn suggest_is_case_insensitive() {
        let mut index = PrefixIndex::new();
        index.insert("hello", 10);
        index.insert("help", 8);
        assert_eq!(index.suggest("HEL", 5), index.suggest("hel", 5));
    }

    #[test]
    fn bounded_output() {
        let mut index = PrefixIndex::new();
        for (i, word) in ["data", "database", "debug", "deploy", "design", "developer"]
            .iter()
            .enumerate()
        {
            index.insert(word, i as u32 + 1);
        }
        assert_eq!(index.suggest("d", 3).len(), 3);
        assert_eq!(index.suggest("d", 100).len(), 6);
    }

    #[test]
    fn every_prefix_of_a_stored_word_reaches_it() {
        let mut index = PrefixIndex::new();
        index.insert("structure", 8);
        for end in 1..="structure".len() {
            let prefix = &"structure"[..end];
            assert!(
                index.suggest(prefix, 100).contains(&"structure".to_string()),
                "missing for prefix {prefix:?}"
            );
        }
    }

    #[test]
    fn empty_input_is_inert() {
        let mut index = PrefixIndex::new();
        index.insert("", 5);
        assert!(!index.lookup(""));
        assert!(index.suggest("", 5).is_empty());
    }

    #[test]
    fn adjacent_results_respect_the_total_order() {
        let mut index = PrefixIndex::new();
        for (word, freq) in [
            ("chat", 10),
            ("chatbot", 15),
            ("change", 6),
            ("challenge", 6),
            ("cat", 3),
            ("car", 3),
        ] {
            index.insert(word, freq);
        }

        let results = index.suggest("c", 10);
        for pair in results.windows(2) {
            let (fa, fb) = (
                index.frequency(&pair[0]).unwrap(),
                index.frequency(&pair[1]).unwrap(),
            );
            assert!(fa > fb || (fa == fb && pair[0] <= pair[1]), "{pair:?}");
        }
    }
}
