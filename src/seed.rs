use crate::engine::PrefixIndex;

/// Startup vocabulary with hand-tuned frequencies. The index is re-seeded
/// from this list on every launch; nothing persists across runs.
pub const DEFAULT_WORDS: &[(&str, u32)] = &[
    ("hello", 10),
    ("help", 8),
    ("how", 7),
    ("house", 5),
    ("happy", 6),
    ("computer", 9),
    ("code", 12),
    ("coding", 8),
    ("cool", 4),
    ("cat", 3),
    ("chatbot", 15),
    ("chat", 10),
    ("change", 6),
    ("challenge", 7),
    ("programming", 11),
    ("program", 9),
    ("project", 8),
    ("practice", 5),
    ("python", 7),
    ("java", 6),
    ("javascript", 8),
    ("algorithm", 9),
    ("data", 10),
    ("structure", 8),
    ("database", 6),
    ("design", 7),
    ("development", 9),
    ("developer", 8),
    ("debug", 5),
    ("deploy", 4),
    ("machine", 6),
    ("learning", 8),
    ("artificial", 5),
    ("intelligence", 7),
    ("network", 6),
    ("security", 8),
    ("software", 10),
    ("system", 9),
    ("technology", 7),
    ("technical", 6),
    ("tutorial", 8),
    ("training", 5),
    ("dbms", 4),
];

pub fn apply(index: &mut PrefixIndex) {
    for (word, freq) in DEFAULT_WORDS {
        index.insert(word, *freq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_every_default_word() {
        let mut index = PrefixIndex::new();
        apply(&mut index);
        for (word, freq) in DEFAULT_WORDS {
            assert!(index.lookup(word), "missing {word}");
            assert_eq!(index.frequency(word), Some(*freq));
        }
    }
}
