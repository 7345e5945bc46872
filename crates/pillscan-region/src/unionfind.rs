//! Disjoint-set forest
//!
//! Array-backed union-find with union by size and path halving. Elements are
//! linear pixel indices, so one set covers a whole image.

use crate::error::{RegionError, RegionResult};

/// Union-find over the elements `0..n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisjointSet {
    /// parent[i] == i marks a root
    parent: Vec<usize>,
    /// Tree size, valid for roots only
    size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidParameters`] if `n` is zero.
    pub fn new(n: usize) -> RegionResult<Self> {
        if n == 0 {
            return Err(RegionError::InvalidParameters(
                "disjoint set size must be positive".to_string(),
            ));
        }
        Ok(Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        })
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Always false: a disjoint set has at least one element
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    /// Root of the set containing `p`
    ///
    /// Every node visited on the way up is re-pointed to its grandparent.
    pub fn find(&mut self, p: usize) -> RegionResult<usize> {
        self.check(p)?;
        Ok(self.find_root(p))
    }

    /// Check whether `p` and `q` are in the same set
    pub fn connected(&mut self, p: usize, q: usize) -> RegionResult<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Size of the set containing `p`
    pub fn component_size(&mut self, p: usize) -> RegionResult<usize> {
        let root = self.find(p)?;
        Ok(self.size[root])
    }

    /// Merge the sets containing `p` and `q`
    ///
    /// The smaller tree is attached below the larger one; on equal sizes the
    /// root of `p` stays the root. Returns `true` if two sets were merged and
    /// `false` if `p` and `q` were already connected.
    pub fn union(&mut self, p: usize, q: usize) -> RegionResult<bool> {
        self.check(p)?;
        self.check(q)?;
        Ok(self.union_roots(p, q))
    }

    /// Current roots in ascending order
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(i, &parent)| i == parent)
            .map(|(i, _)| i)
    }

    #[inline]
    fn check(&self, p: usize) -> RegionResult<()> {
        if p >= self.parent.len() {
            return Err(RegionError::IndexOutOfBounds {
                index: p,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// `find` without the bounds check, for callers that iterate a grid of
    /// the same size
    pub(crate) fn find_root(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    pub(crate) fn union_roots(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find_root(p);
        let root_q = self.find_root(q);
        if root_p == root_q {
            return false;
        }

        let (parent, child) = if self.size[root_p] < self.size[root_q] {
            (root_q, root_p)
        } else {
            (root_p, root_q)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.components -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            DisjointSet::new(0),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_singletons() {
        let mut ds = DisjointSet::new(5).unwrap();
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.components(), 5);
        for p in 0..5 {
            assert_eq!(ds.find(p).unwrap(), p);
            assert_eq!(ds.component_size(p).unwrap(), 1);
        }
    }

    #[test]
    fn test_union_counts_components() {
        let mut ds = DisjointSet::new(6).unwrap();
        assert!(ds.union(0, 1).unwrap());
        assert_eq!(ds.components(), 5);
        assert!(!ds.union(1, 0).unwrap());
        assert_eq!(ds.components(), 5);
        assert!(ds.union(2, 3).unwrap());
        assert!(ds.union(1, 3).unwrap());
        assert_eq!(ds.components(), 3);
        assert!(ds.connected(0, 2).unwrap());
        assert!(!ds.connected(0, 4).unwrap());
        assert_eq!(ds.component_size(3).unwrap(), 4);
    }

    #[test]
    fn test_equal_sizes_keep_first_root() {
        let mut ds = DisjointSet::new(4).unwrap();
        ds.union(2, 3).unwrap();
        assert_eq!(ds.find(3).unwrap(), 2);
        ds.union(1, 0).unwrap();
        assert_eq!(ds.find(0).unwrap(), 1);
        ds.union(0, 3).unwrap();
        assert_eq!(ds.find(2).unwrap(), 1);
    }

    #[test]
    fn test_smaller_tree_joins_larger() {
        let mut ds = DisjointSet::new(5).unwrap();
        ds.union(1, 2).unwrap();
        ds.union(1, 3).unwrap();
        ds.union(0, 1).unwrap();
        assert_eq!(ds.find(0).unwrap(), 1);
        assert_eq!(ds.component_size(0).unwrap(), 4);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut ds = DisjointSet::new(3).unwrap();
        assert_eq!(
            ds.find(3),
            Err(RegionError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(ds.union(0, 7).is_err());
        assert!(ds.connected(9, 0).is_err());
        assert!(ds.component_size(3).is_err());
        assert_eq!(ds.components(), 3);
    }

    #[test]
    fn test_roots() {
        let mut ds = DisjointSet::new(5).unwrap();
        ds.union(0, 4).unwrap();
        ds.union(2, 3).unwrap();
        assert_eq!(ds.roots().collect::<Vec<_>>(), vec![0, 1, 2]);
    }
}
