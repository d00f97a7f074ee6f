//! Dense visited sets for graph traversals.
//!
//! One bit per vertex, packed into `u64` words. Traversals create a fresh set
//! per call, so the graph itself carries no visited state between queries.

const WORD_BITS: usize = u64::BITS as usize;

/// A word-packed visited set for a fixed number of vertices.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    fn locate(node: usize) -> (usize, u64) {
        (node / WORD_BITS, 1u64 << (node % WORD_BITS))
    }

    /// Returns `true` iff `node` was not yet visited; marks it visited either way.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        debug_assert!(node < self.len, "node {node} out of bounds");
        let (word, mask) = Self::locate(node);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        debug_assert!(node < self.len, "node {node} out of bounds");
        let (word, mask) = Self::locate(node);
        self.words[word] & mask != 0
    }

    /// Number of visited nodes.
    pub(crate) fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}
