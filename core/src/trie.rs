/// Byte-keyed prefix trie holding transliteration rules.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TranslitError};
use crate::rules::Rule;

/// Handle of a node in the trie arena.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Node {
    /// Replacement bytes, present iff the path to this node is a rule source.
    value: Option<Vec<u8>>,
    children: AHashMap<u8, NodeId>,
}

/// A prefix tree mapping byte sequences to replacement bytes.
///
/// Nodes live in a flat arena and refer to their children by [`NodeId`];
/// the root is always [`Trie::ROOT`]. The trie is filled once with
/// [`Trie::insert`] and only read afterwards, so a built trie can be shared
/// between threads behind an `Arc` and scanned without locking.
///
/// # Example
/// ```
/// use translit_core::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("ш".as_bytes(), b"sh");
/// trie.insert("щ".as_bytes(), b"shch");
///
/// assert_eq!(trie.get("щ".as_bytes()), Some(&b"shch"[..]));
/// assert_eq!(trie.rule_count(), 2);
///
/// // "ш" and "щ" share their first UTF-8 byte
/// let first = trie.lookup_child(Trie::ROOT, "ш".as_bytes()[0]).unwrap();
/// assert!(trie.value(first).is_none());
/// assert!(trie.has_children(first));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTrie")]
pub struct Trie {
    nodes: Vec<Node>,
    #[serde(skip)]
    rules: usize,
    #[serde(skip)]
    max_depth: usize,
}

/// Undecoded arena; becomes a [`Trie`] only after validation.
#[derive(Deserialize)]
struct RawTrie {
    nodes: Vec<Node>,
}

impl TryFrom<RawTrie> for Trie {
    type Error = TranslitError;

    fn try_from(raw: RawTrie) -> Result<Self> {
        let mut trie = Trie {
            nodes: raw.nodes,
            rules: 0,
            max_depth: 0,
        };
        trie.validate()?;
        Ok(trie)
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub const ROOT: NodeId = NodeId(0);

    /// Create a trie holding only the (valueless) root.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            rules: 0,
            max_depth: 0,
        }
    }

    /// Build a trie from rules, inserted in iteration order.
    ///
    /// # Panics
    /// Panics if any rule has an empty source; use [`crate::rules`] to
    /// validate untrusted data first.
    pub fn from_rules<I: IntoIterator<Item = Rule>>(rules: I) -> Self {
        let mut trie = Self::new();
        for rule in rules {
            trie.insert(&rule.source, &rule.replacement);
        }
        debug!(
            rules = trie.rules,
            nodes = trie.nodes.len(),
            max_depth = trie.max_depth,
            "built transliteration trie"
        );
        trie
    }

    /// Register `source` with the given replacement.
    ///
    /// Missing intermediate nodes are created along the way. Inserting a
    /// source that is already present overwrites its replacement.
    ///
    /// # Panics
    /// Panics if `source` is empty. The root never carries a value.
    pub fn insert(&mut self, source: &[u8], replacement: &[u8]) {
        assert!(!source.is_empty(), "transliteration rule source must not be empty");

        let mut node = Self::ROOT;
        for &b in source {
            node = self.ensure_child(node, b);
        }
        let slot = &mut self.nodes[node.index()].value;
        if slot.is_none() {
            self.rules += 1;
        }
        *slot = Some(replacement.to_vec());
        self.max_depth = self.max_depth.max(source.len());
    }

    fn ensure_child(&mut self, node: NodeId, b: u8) -> NodeId {
        if let Some(&child) = self.nodes[node.index()].children.get(&b) {
            return child;
        }
        let index = u32::try_from(self.nodes.len()).expect("trie arena exceeds u32 node handles");
        let child = NodeId(index);
        self.nodes.push(Node::default());
        self.nodes[node.index()].children.insert(b, child);
        child
    }

    /// Child of `node` along the edge labelled `b`.
    #[inline]
    pub fn lookup_child(&self, node: NodeId, b: u8) -> Option<NodeId> {
        self.nodes[node.index()].children.get(&b).copied()
    }

    #[inline]
    pub fn has_children(&self, node: NodeId) -> bool {
        !self.nodes[node.index()].children.is_empty()
    }

    /// Replacement stored at `node`, if the path to it is a registered source.
    #[inline]
    pub fn value(&self, node: NodeId) -> Option<&[u8]> {
        self.nodes[node.index()].value.as_deref()
    }

    /// Exact lookup of a registered source.
    pub fn get(&self, source: &[u8]) -> Option<&[u8]> {
        let mut node = Self::ROOT;
        for &b in source {
            node = self.lookup_child(node, b)?;
        }
        self.value(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct registered sources.
    pub fn rule_count(&self) -> usize {
        self.rules
    }

    /// Length in bytes of the longest registered source.
    ///
    /// A streaming host that keeps at least this much lookahead never splits
    /// a potential match across buffers.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    /// All registered `(source, replacement)` pairs. Order is unspecified.
    pub fn rules(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        let mut out = Vec::with_capacity(self.rules);
        let mut stack = vec![(Self::ROOT, Vec::new())];
        while let Some((node, path)) = stack.pop() {
            if let Some(v) = self.value(node) {
                out.push((path.clone(), v.to_vec()));
            }
            for (&b, &child) in self.nodes[node.index()].children.iter() {
                let mut next = path.clone();
                next.push(b);
                stack.push((child, next));
            }
        }
        out
    }

    /// Serialize the node arena.
    pub fn to_bincode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode an arena produced by [`Trie::to_bincode`].
    ///
    /// The decoded arena is checked to be a tree rooted at [`Trie::ROOT`]:
    /// every child handle in range, every non-root node reached exactly
    /// once, and no value on the root.
    pub fn from_bincode(bytes: &[u8]) -> Result<Self> {
        let raw: RawTrie = bincode::deserialize(bytes)?;
        let trie = Trie::try_from(raw)?;
        debug!(
            rules = trie.rules,
            nodes = trie.nodes.len(),
            "decoded transliteration trie"
        );
        Ok(trie)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_bincode()?)?;
        Ok(())
    }

    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bincode(&bytes)
    }

    // Recomputes `rules` and `max_depth` from the arena.
    fn validate(&mut self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(TranslitError::CorruptTrie("missing root node".into()));
        }
        if self.nodes[0].value.is_some() {
            return Err(TranslitError::CorruptTrie("root carries a value".into()));
        }

        let mut seen = vec![false; self.nodes.len()];
        seen[0] = true;
        let mut reached = 1usize;
        let mut rules = 0usize;
        let mut max_depth = 0usize;
        let mut stack = vec![(Self::ROOT, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if self.nodes[node.index()].value.is_some() {
                rules += 1;
                max_depth = max_depth.max(depth);
            }
            for &child in self.nodes[node.index()].children.values() {
                let idx = child.index();
                if idx >= self.nodes.len() {
                    return Err(TranslitError::CorruptTrie(format!(
                        "child handle {} out of range",
                        idx
                    )));
                }
                if seen[idx] {
                    return Err(TranslitError::CorruptTrie(format!(
                        "node {} reached twice",
                        idx
                    )));
                }
                seen[idx] = true;
                reached += 1;
                stack.push((child, depth + 1));
            }
        }

        if reached != self.nodes.len() {
            return Err(TranslitError::CorruptTrie(format!(
                "{} unreachable nodes",
                self.nodes.len() - reached
            )));
        }

        self.rules = rules;
        self.max_depth = max_depth;
        Ok(())
    }
}
