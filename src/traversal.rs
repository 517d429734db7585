//! Ways to walk a [`Tree`].
//!
//! Each traversal comes in two flavours: one that collects references to the
//! visited values (`inorder`, `preorder`, ...) and one that hands every
//! visited [`Node`] to a caller-supplied visitor (`inorder_with`,
//! `preorder_with`, ...). `inorder` collects from [`Tree::iter`]; the other
//! collecting flavours are built on their visitors.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let tree = Tree::from_values(1..=7);
//!
//! assert_eq!(tree.inorder(), vec![&1, &2, &3, &4, &5, &6, &7]);
//! assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &6, &5, &7]);
//! assert_eq!(tree.postorder(), vec![&1, &3, &2, &5, &7, &6, &4]);
//! assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
//!
//! let mut leaves = 0;
//! tree.postorder_with(|node| leaves += usize::from(node.is_leaf()));
//! assert_eq!(leaves, 4);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{self, Link, Node};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Values in ascending order (left, visit, right).
    pub fn inorder(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Values in pre-order (visit, left, right).
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.preorder_with(|node| values.push(node.value()));
        values
    }

    /// Values in post-order (left, right, visit).
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.postorder_with(|node| values.push(node.value()));
        values
    }

    /// Values level by level from the root down, left to right within a
    /// level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.level_order_with(|node| values.push(node.value()));
        values
    }

    /// Calls `visit` on every node in ascending order.
    pub fn inorder_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut stack = Vec::new();
        push_left_spine(&mut stack, self.root());
        while let Some(node) = stack.pop() {
            visit(node);
            push_left_spine(&mut stack, node.right());
        }
    }

    /// Calls `visit` on every node in pre-order.
    pub fn preorder_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            visit(node);
            // Right first so the left subtree pops first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }

    /// Calls `visit` on every node in post-order.
    pub fn postorder_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        // Each node is pushed twice: once to expand its children and once,
        // underneath them, to be visited after they are done.
        let mut stack: Vec<(&Node<T>, bool)> =
            self.root().into_iter().map(|node| (node, false)).collect();
        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                visit(node);
                continue;
            }
            stack.push((node, true));
            stack.extend(node.right().map(|right| (right, false)));
            stack.extend(node.left().map(|left| (left, false)));
        }
    }

    /// Calls `visit` on every node in level order using a FIFO queue seeded
    /// with the root.
    pub fn level_order_with<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a Node<T>),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }

    /// Values grouped by depth. `levels()[d]` holds the values at depth `d`
    /// from left to right.
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::from_values(1..=5);
    /// assert_eq!(tree.levels(), vec![vec![&3], vec![&2, &5], vec![&1, &4]]);
    /// ```
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            levels.push(level.iter().map(|node| node.value()).collect());
            level = level
                .into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        levels
    }

    /// An iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut stack = Vec::new();
        push_left_spine(&mut stack, self.root());
        Iter {
            stack,
            remaining: self.len(),
        }
    }
}

fn push_left_spine<'a, T>(stack: &mut Vec<&'a Node<T>>, mut node: Option<&'a Node<T>>) {
    while let Some(n) = node {
        stack.push(n);
        node = n.left();
    }
}

/// Borrowing in-order iterator returned by [`Tree::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        push_left_spine(&mut self.stack, node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning in-order iterator. Nodes are taken apart as the walk passes them
/// so values move out without cloning.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        Some(node.value)
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Left children are already detached; only right subtrees remain.
        for node in self.stack.drain(..) {
            node::release(Some(node));
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        IntoIter::new(self.root.take())
    }
}
