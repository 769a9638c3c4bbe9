use tracing::debug;

struct TrieNode<T> {
    children: [Option<Box<Self>>; 10], // 0..9
    value: Option<T>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        Self {
            children: std::array::from_fn(|_| None),
            value: None,
        }
    }

    fn is_leaf(&self) -> bool {
        self.value.is_none() && self.children.iter().all(Option::is_none)
    }

    fn count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|child| child.count())
            .sum::<usize>()
    }
}

/// A trie keyed by ASCII decimal digit sequences.
///
/// Nodes are created lazily on insert. Removing a key only clears the value
/// unless pruning is requested, so the path stays allocated until `clear`.
pub struct DigitTrie<T> {
    root: TrieNode<T>,
    len: usize,
}

fn byte2idx(b: u8) -> usize {
    if !b.is_ascii_digit() {
        panic!("Expect numeric byte, found: {b}");
    }
    (b - b'0').into()
}

fn idx2byte(idx: usize) -> u8 {
    b'0' + idx as u8
}

impl<T> Default for DigitTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DigitTrie<T> {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            len: 0,
        }
    }

    /// Inserts `value` at `key`, returning the value it replaced.
    pub fn insert(&mut self, key: &[u8], value: T) -> Option<T> {
        let mut node = &mut self.root;

        for &c in key {
            node = node.children[byte2idx(c)].get_or_insert_with(|| Box::new(TrieNode::new()));
        }

        let prev = node.value.replace(value);
        if prev.is_none() {
            self.len += 1;
        }
        prev
    }

    fn find(&self, key: &[u8]) -> Option<&TrieNode<T>> {
        let mut node = &self.root;

        for &c in key {
            node = node.children[byte2idx(c)].as_deref()?;
        }

        Some(node)
    }

    pub fn get(&self, key: &[u8]) -> Option<&T> {
        self.find(key).and_then(|node| node.value.as_ref())
    }

    /// Clears the value stored at `key`.
    ///
    /// With `prune`, nodes on the path left without a value and without
    /// children are dropped, deepest first. The root is never dropped.
    pub fn remove(&mut self, key: &[u8], prune: bool) -> Option<T> {
        let removed = Self::remove_at(&mut self.root, key, prune)?;
        self.len -= 1;
        Some(removed)
    }

    fn remove_at(node: &mut TrieNode<T>, key: &[u8], prune: bool) -> Option<T> {
        let Some((&c, rest)) = key.split_first() else {
            return node.value.take();
        };

        let idx = byte2idx(c);
        let child = node.children[idx].as_deref_mut()?;
        let removed = Self::remove_at(child, rest, prune)?;

        if prune && child.is_leaf() {
            debug!(depth = key.len(), "Pruning empty node");
            node.children[idx] = None;
        }
        Some(removed)
    }

    /// Every stored key with its value, in ascending digit order.
    pub fn entries(&self) -> Vec<(Vec<u8>, &T)> {
        // DFS; children pushed in reverse so that 0 is popped first
        let mut data = Vec::with_capacity(self.len);
        let mut stack = vec![(Vec::new(), &self.root)];

        while let Some((chars, n)) = stack.pop() {
            for idx in (0..10).rev() {
                if let Some(child) = &n.children[idx] {
                    let mut _chars = chars.clone();
                    _chars.push(idx2byte(idx));
                    stack.push((_chars, child.as_ref()));
                }
            }
            if let Some(v) = &n.value {
                data.push((chars, v));
            }
        }

        data
    }

    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}
