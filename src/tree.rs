//! A BST built balanced from a batch of values. Inserts and deletes leave
//! the shape alone; [`Tree::rebalance`] rebuilds it.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{DuplicateValueError, Tree};
//!
//! let mut tree = Tree::from_values([5, 3, 8, 3]);
//!
//! // Duplicates are dropped while building.
//! assert_eq!(tree.inorder(), vec![&3, &5, &8]);
//!
//! // And rejected afterwards.
//! assert_eq!(tree.insert(8), Err(DuplicateValueError(8)));
//! assert_eq!(tree.insert(9), Ok(()));
//!
//! // Deleting a node returns its value.
//! assert_eq!(tree.delete(&5), Some(5));
//! assert_eq!(tree.delete(&5), None);
//! assert_eq!(tree.inorder(), vec![&3, &8, &9]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::error::DuplicateValueError;
use crate::node::{self, Link, Node};
use crate::traversal::IntoIter;
use crate::util;

/// A Binary Search Tree of unique values.
#[derive(Clone)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

/// Shows the values level by level, which is enough to read off the shape.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("levels", &self.levels())
            .finish()
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree out of `values`. They are sorted and
    /// de-duplicated first, so any order and any repeats are fine.
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([3, 1, 2, 3]);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(2));
    /// assert_eq!(tree.len(), 3);
    /// ```
    pub fn from_values<I>(values: I) -> Self
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        let sorted = Self::prepare(values);
        let len = sorted.len();
        Self {
            root: build_link(&mut sorted.into_iter(), len),
            len,
        }
    }

    /// Sorts and de-duplicates `values` into the shape [`build`][Self::build]
    /// expects.
    pub fn prepare<I>(values: I) -> Vec<T>
    where
        T: Ord,
        I: IntoIterator<Item = T>,
    {
        util::sort_unique(values)
    }

    /// Builds a height-balanced subtree from strictly ascending values. The
    /// middle value (index `len / 2`) becomes the root, the values before it
    /// the left subtree and the values after it the right subtree.
    ///
    /// The input is not checked: unsorted or repeated values produce a tree
    /// that breaks the BST invariant.
    pub fn build(sorted: Vec<T>) -> Option<Node<T>> {
        let len = sorted.len();
        build_link(&mut sorted.into_iter(), len).map(|root| *root)
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, `-1` for an empty tree.
    pub fn height(&self) -> isize {
        Node::height_of(self.root())
    }

    /// Finds the node holding `value`.
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.value()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.find_with_parent(value).map(|(node, _)| node)
    }

    /// Finds the node holding `value` along with its parent. The parent is
    /// `None` when the value sits at the root.
    pub fn find_with_parent(&self, value: &T) -> Option<(&Node<T>, Option<&Node<T>>)>
    where
        T: Ord,
    {
        let mut parent = None;
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(&node.value) {
                Ordering::Less => current = node.left(),
                Ordering::Equal => return Some((node, parent)),
                Ordering::Greater => current = node.right(),
            }
            parent = Some(node);
        }
        None
    }

    /// Whether a node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Number of edges from the root to the node holding `value`. The root
    /// has depth `0`.
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values([1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&3), Some(1));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut depth = 0;
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }
        None
    }

    /// Inserts `value` as a new leaf. No rebalancing happens.
    ///
    /// # Errors
    ///
    /// [`DuplicateValueError`] carrying `value` back if an equal value is
    /// already stored. The tree is unchanged in that case.
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateValueError<T>>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return Err(DuplicateValueError(value)),
                Ordering::Greater => &mut node.right,
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        Ok(())
    }

    /// Deletes the node holding `value` and returns the value. If the tree
    /// does not hold `value`, nothing happens.
    ///
    /// A node with two children keeps its place in the tree: it takes over
    /// its in-order successor's value and the successor node is removed
    /// instead.
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let slot = find_slot(&mut self.root, value)?;
        let removed = unlink(slot);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Whether, at every node, the heights of the two subtrees differ by at
    /// most one. An empty tree is balanced.
    pub fn balanced(&self) -> bool {
        balance_of(self.root()).1
    }

    /// Rebuilds the whole tree from its in-order values, the same way
    /// [`from_values`][Self::from_values] builds it. This runs in `O(N)`
    /// whether or not the tree is already balanced.
    pub fn rebalance(&mut self) {
        let mut values = IntoIter::new(self.root.take());
        self.root = build_link(&mut values, self.len);
    }
}

/// Builds a balanced subtree out of the next `len` values of `values`, which
/// must be ascending. Consuming the left subtree's values first leaves the
/// middle value next in line.
fn build_link<T, I>(values: &mut I, len: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if len == 0 {
        return None;
    }
    let mid = len / 2;
    let left = build_link(values, mid);
    let value = values.next()?;
    let right = build_link(values, len - mid - 1);
    Some(Box::new(Node { value, left, right }))
}

/// The slot holding the node with `value`: either the tree's root or one of
/// its parent's child slots.
fn find_slot<'a, T: Ord>(mut slot: &'a mut Link<T>, value: &T) -> Option<&'a mut Link<T>> {
    loop {
        let ordering = value.cmp(&slot.as_ref()?.value);
        slot = match ordering {
            Ordering::Less => &mut slot.as_mut()?.left,
            Ordering::Equal => return Some(slot),
            Ordering::Greater => &mut slot.as_mut()?.right,
        };
    }
}

/// Removes the node in `slot` and returns its value.
fn unlink<T: Ord>(slot: &mut Link<T>) -> Option<T> {
    let node = slot.as_mut()?;
    if node.left.is_some() && node.right.is_some() {
        // The successor has no left child so this recursion ends right away.
        let successor = node
            .successor_slot()
            .map(unlink)
            .expect("a node with two children has a right child")?;
        let removed = std::mem::replace(&mut node.value, successor);

        if cfg!(debug_assertions) {
            if let Some(left) = node.left() {
                assert!(left.value < node.value);
            }
            if let Some(right) = node.right() {
                assert!(right.value > node.value);
            }
        }
        return Some(removed);
    }

    let mut node = slot.take()?;
    *slot = node.left.take().or_else(|| node.right.take());
    Some(node.value)
}

/// `(height, balanced)` for the subtree rooted at `node`.
fn balance_of<T>(node: Option<&Node<T>>) -> (isize, bool) {
    const EMPTY: (isize, bool) = (-1, true);
    let Some(node) = node else {
        return EMPTY;
    };
    node::fold_up(node, |_, left, right| {
        let (left_height, left_balanced) = left.unwrap_or(EMPTY);
        let (right_height, right_balanced) = right.unwrap_or(EMPTY);
        (
            1 + left_height.max(right_height),
            left_balanced && right_balanced && left_height.abs_diff(right_height) <= 1,
        )
    })
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a set. This way we can
    /// ensure that after a random smattering of inserts and deletes we have
    /// the same values in both.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + std::fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(v) => {
                    let inserted = bst.insert(v.clone()).is_ok();
                    assert_eq!(inserted, set.insert(v.clone()));
                }
                Op::Delete(v) => {
                    assert_eq!(bst.delete(v), set.take(v));
                }
                Op::Rebalance => {
                    bst.rebalance();
                    assert!(bst.balanced());
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                }
            }
            assert_eq!(bst.len(), set.len());
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|value| tree.contains(value))
                && tree.inorder().into_iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn built_tree_is_balanced(xs: Vec<i16>) -> bool {
            let tree = Tree::from_values(xs.clone());
            let expected: BTreeSet<_> = xs.into_iter().collect();

            tree.balanced() && tree.iter().eq(expected.iter()) && tree.len() == expected.len()
        }
    }

    quickcheck::quickcheck! {
        fn delete_preserves_order(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let mut tree = Tree::from_values(xs);
            for delete in &deletes {
                let mut expected: Vec<i8> = tree.iter().copied().collect();
                expected.retain(|x| x != delete);

                tree.delete(delete);
                if tree.find(delete).is_some() || !tree.iter().copied().eq(expected) {
                    return false;
                }
            }
            true
        }
    }
}
