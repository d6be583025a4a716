use ahash::AHashMap;

#[derive(Default)]
pub(crate) struct TrieNode {
    children: AHashMap<char, TrieNode>,
    term: Option<String>,
}

/// Prefix index over normalized terms. Terminal nodes carry the canonical
/// term string so subtree collection never has to rebuild prefixes.
#[derive(Default)]
pub(crate) struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Inserting an already-known term leaves the structure unchanged.
    pub fn insert(&mut self, term: &str) {
        let mut node = &mut self.root;
        for ch in term.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.term.is_none() {
            node.term = Some(term.to_string());
        }
    }

    pub fn prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        if prefix.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// All terminal terms reachable from `node`, the node itself included.
    /// Uses an explicit work list so depth is bounded by heap, not stack.
    /// Order is unspecified; callers re-sort.
    pub fn collect_terms(node: &TrieNode) -> Vec<String> {
        let mut terms = Vec::new();
        let mut stack = vec![node];
        while let Some(node) = stack.pop() {
            if let Some(term) = &node.term {
                terms.push(term.clone());
            }
            stack.extend(node.children.values());
        }
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collected(trie: &Trie, prefix: &str) -> Vec<String> {
        let mut terms = trie
            .prefix_node(prefix)
            .map(Trie::collect_terms)
            .unwrap_or_default();
        terms.sort();
        terms
    }

    #[test]
    fn insert_and_collect() {
        let mut trie = Trie::default();
        trie.insert("apple");
        trie.insert("apricot");
        trie.insert("avocado");

        assert_eq!(collected(&trie, "ap"), vec!["apple", "apricot"]);
        assert_eq!(collected(&trie, "a"), vec!["apple", "apricot", "avocado"]);
    }

    #[test]
    fn insert_is_structurally_idempotent() {
        let mut trie = Trie::default();
        trie.insert("apple");
        trie.insert("apple");

        assert_eq!(collected(&trie, "a"), vec!["apple"]);
    }

    #[test]
    fn term_that_prefixes_another_stays_terminal() {
        let mut trie = Trie::default();
        trie.insert("app");
        trie.insert("apple");

        assert_eq!(collected(&trie, "app"), vec!["app", "apple"]);
    }

    #[test]
    fn unknown_prefix_is_none() {
        let mut trie = Trie::default();
        trie.insert("apple");

        assert!(trie.prefix_node("b").is_none());
        assert!(trie.prefix_node("apz").is_none());
        assert!(trie.prefix_node("").is_none());
    }
}
