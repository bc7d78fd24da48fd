//! Disjoint Set (Union-Find) keyed by vertex id.
//!
//! Tracks which spanning-tree vertices are already connected while Kruskal
//! grows its forest.
//!
//! # Performance
//!
//! - Parent pointers live in one contiguous `Vec<usize>`.
//! - Path compression and union-by-rank give nearly constant time operations.

/// A Disjoint Set (Union-Find) data structure.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    /// Parent pointers.
    parent: Vec<usize>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    /// Number of disjoint sets.
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self) -> usize {
        let id = self.parent.len();
        self.parent.push(id);
        self.rank.push(0);
        self.components += 1;
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id` is not an element of the set.
    pub fn find(&mut self, id: usize) -> usize {
        // 1. Find root
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // 2. Compress path
        let mut curr = id;
        while curr != root {
            let parent = self.parent[curr];
            self.parent[curr] = root;
            curr = parent;
        }

        root
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        let root1 = self.find(id1);
        let root2 = self.find(id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1] = root2;
        } else if rank1 > rank2 {
            self.parent[root2] = root1;
        } else {
            self.parent[root2] = root1;
            self.rank[root1] = rank1.saturating_add(1);
        }

        self.components -= 1;
        true
    }

    /// Returns true if `id1` and `id2` belong to the same set.
    pub fn connected(&mut self, id1: usize, id2: usize) -> bool {
        self.find(id1) == self.find(id2)
    }

    /// Number of disjoint sets currently tracked.
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
