//! Disjoint-set (union-find) structure with union-by-rank and path
//! compression.
//!
//! Tracks a partition of `n` objects into disjoint sets. Invariants upheld
//! by every operation: the parent mapping contains no non-trivial cycles
//! (every chain of parents reaches a root in finitely many steps), and each
//! root's rank upper-bounds the height of its tree — compression may make
//! the bound loose, never wrong.

use crate::error::{Error, Result};

/// A partition of `n` objects into disjoint sets.
///
/// # Examples
///
/// ```
/// use minspan_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4)?;
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert!(sets.same_set(0, 1)?);
/// assert!(!sets.same_set(0, 2)?);
/// # Ok::<(), minspan_core::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    // Ranks fit in a byte: union-by-rank grows tree height logarithmically,
    // so a rank of 255 would need more objects than any address space holds.
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `object_count` singleton sets, each object its own root with
    /// rank 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfMemory`] when the backing arrays cannot be
    /// reserved.
    pub fn new(object_count: usize) -> Result<Self> {
        let mut parent = Vec::new();
        parent
            .try_reserve_exact(object_count)
            .map_err(|_| Error::OutOfMemory {
                requested: object_count,
            })?;
        parent.extend(0..object_count);

        let mut rank = Vec::new();
        rank.try_reserve_exact(object_count)
            .map_err(|_| Error::OutOfMemory {
                requested: object_count,
            })?;
        rank.resize(object_count, 0);

        Ok(Self { parent, rank })
    }

    /// Returns the number of objects tracked by the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the partition tracks no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check_object(&self, object: usize) -> Result<()> {
        if object < self.parent.len() {
            Ok(())
        } else {
            Err(Error::ObjectOutOfBounds {
                object,
                object_count: self.parent.len(),
            })
        }
    }

    /// Returns the representative root of `object`'s set.
    ///
    /// This is a mutating read: each visited object is redirected to its
    /// grandparent before stepping there, so repeated finds flatten the
    /// trees and amortise to near-constant time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectOutOfBounds`] for an out-of-range object.
    pub fn find(&mut self, object: usize) -> Result<usize> {
        self.check_object(object)?;
        let mut current = object;
        while self.parent[current] != current {
            let grandparent = self.parent[self.parent[current]];
            self.parent[current] = grandparent;
            current = grandparent;
        }
        Ok(current)
    }

    /// Unions the sets containing `left` and `right`.
    ///
    /// Returns `true` when two distinct sets were merged and `false` when
    /// the objects were already in the same set. The lower-rank root is
    /// attached under the higher-rank root; on a rank tie the surviving
    /// root's rank increments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectOutOfBounds`] for an out-of-range object.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank[left_root];
        let right_rank = self.rank[right_root];
        if left_rank > right_rank {
            self.parent[right_root] = left_root;
        } else if left_rank < right_rank {
            self.parent[left_root] = right_root;
        } else {
            self.parent[right_root] = left_root;
            self.rank[left_root] = left_rank.saturating_add(1);
        }
        Ok(true)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ObjectOutOfBounds`] for an out-of-range object.
    pub fn same_set(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }
}
