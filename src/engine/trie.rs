use std::collections::HashMap;

/// One character position in the trie. `frequency` and `word` carry meaning
/// only while `terminal` is true; non-terminal nodes keep them at their
/// defaults and nothing reads them.
#[derive(Debug, Default, Clone)]
pub struct Node {
    children: HashMap<char, Node>,
    terminal: bool,
    frequency: u32,
    word: String,
}

/// Raw character trie over already-normalized words. Every node below the
/// root is owned exclusively by its parent, so dropping the trie drops the
/// whole tree. Vocabulary only grows; nodes are never removed.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: Node,
}

impl Trie {
    pub fn insert(&mut self, word: &str, freq: u32) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.terminal {
            node.frequency = node.frequency.saturating_add(freq.max(1));
        } else {
            node.terminal = true;
            node.frequency = freq.max(1);
            node.word = word.to_string();
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).is_some_and(|node| node.terminal)
    }

    pub fn frequency(&self, word: &str) -> Option<u32> {
        self.descend(word)
            .filter(|node| node.terminal)
            .map(|node| node.frequency)
    }

    /// Every (word, frequency) stored at or below `prefix`. Returns an empty
    /// vec when no stored word starts with `prefix`. Order is unspecified;
    /// callers re-rank.
    pub fn collect_prefixed(&self, prefix: &str) -> Vec<(String, u32)> {
        let Some(start) = self.descend(prefix) else {
            return Vec::new();
        };

        // Explicit stack instead of recursion so a deep vocabulary cannot
        // exhaust call depth.
        let mut words = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if node.terminal {
                words.push((node.word.clone(), node.frequency));
            }
            stack.extend(node.children.values());
        }
        words
    }

    fn descend(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }
}
