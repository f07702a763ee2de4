//! Disjoint-set (union-find) over room indices

use std::collections::TryReserveError;

/// Partition of `0..n` into disjoint sets
///
/// Uses union by rank together with path compression, so that
/// [DisjointSet::find] runs in near-constant amortized time.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent of each element; roots point to themselves
    parent: Vec<usize>,
    /// Upper bound for the height of the tree below each root
    rank: Vec<u32>,
    /// Number of disjoint sets currently represented
    sets: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    ///
    /// # Examples
    /// ```
    /// use kruskal_maze::disjoint_set::DisjointSet;
    ///
    /// let mut set = DisjointSet::new(4);
    /// assert!(set.union(0, 1));
    /// assert!(set.same_set(1, 0));
    /// assert_eq!(set.set_count(), 3);
    /// ```
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Like [DisjointSet::new], but reports allocation failure instead of
    /// aborting.
    pub fn try_new(n: usize) -> Result<Self, TryReserveError> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(n)?;
        parent.extend(0..n);

        let mut rank = Vec::new();
        rank.try_reserve_exact(n)?;
        rank.resize(n, 0);

        Ok(Self {
            parent,
            rank,
            sets: n,
        })
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Find the representative of the set containing `x`.
    ///
    /// Every node on the way up is re-pointed directly at the root.
    ///
    /// Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// Returns `false` without modifying anything if they already share a set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else {
            self.parent[root_y] = root_x;
            if self.rank[root_x] == self.rank[root_y] {
                self.rank[root_x] += 1;
            }
        }
        self.sets -= 1;
        true
    }

    /// Whether `x` and `y` belong to the same set
    pub fn same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}
