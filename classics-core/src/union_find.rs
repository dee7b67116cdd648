//! Disjoint-set union with path halving and union by size.
//!
//! Kruskal uses this to reject edges whose endpoints already share a
//! component. The structure is single-threaded: every call takes `&mut self`
//! because `find` rewrites parent links as it walks.

/// Union-find over the dense element range `0..len`.
///
/// # Examples
/// ```
/// use classics_core::DisjointSetUnion;
///
/// let mut sets = DisjointSetUnion::new(4);
/// assert!(sets.union(0, 1));
/// assert!(!sets.union(1, 0));
/// assert!(sets.same(0, 1));
/// assert_eq!(sets.component_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetUnion {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl DisjointSetUnion {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            components: len,
        }
    }

    /// Number of elements tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Number of disjoint sets remaining.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `element`.
    ///
    /// Every node visited on the way up is re-pointed at its grandparent.
    ///
    /// # Panics
    /// Panics if `element >= self.len()`.
    pub fn find(&mut self, element: usize) -> usize {
        let mut current = element;
        loop {
            let parent = self.parent[current];
            if parent == current {
                return current;
            }
            let grandparent = self.parent[parent];
            self.parent[current] = grandparent;
            current = grandparent;
        }
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `true` when a merge happened and `false` when both elements
    /// were already in the same set. The root of the smaller set is attached
    /// beneath the larger root.
    ///
    /// # Panics
    /// Panics if either element is `>= self.len()`.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = if self.size[left_root] < self.size[right_root] {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        true
    }

    /// Returns `true` when `left` and `right` share a representative.
    ///
    /// # Panics
    /// Panics if either element is `>= self.len()`.
    pub fn same(&mut self, left: usize, right: usize) -> bool {
        self.find(left) == self.find(right)
    }

    /// Number of elements in the set containing `element`.
    ///
    /// # Panics
    /// Panics if `element >= self.len()`.
    pub fn set_size(&mut self, element: usize) -> usize {
        let root = self.find(element);
        self.size[root]
    }
}
