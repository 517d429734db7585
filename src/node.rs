//! The vertex of a [`Tree`][crate::Tree]. A `Node` owns its children outright:
//! there are no parent pointers and no sharing, so a subtree is released
//! when its owning slot is.

use std::fmt;

use crate::error::PreconditionError;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` has a value that is used for searching/sorting and up to two
/// children.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        *fold_up(self, |node, left, right| {
            Box::new(Node {
                value: node.value.clone(),
                left,
                right,
            })
        })
    }
}

/// Two nodes are equal when their subtrees have the same shape and values.
impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Only shows the children's values, not whole subtrees. Use
/// [`Tree`][crate::Tree]'s `Debug` or `Display` to see everything.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` with the given children. Nothing checks that the
    /// children are ordered relative to `value`.
    pub fn with_children(value: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            value,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Replaces the left subtree, returning the previous one.
    pub fn set_left(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.left, child.map(Box::new)).map(|old| *old)
    }

    /// Replaces the right subtree, returning the previous one.
    pub fn set_right(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.right, child.map(Box::new)).map(|old| *old)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of an optional node. An absent node has height `-1` so that a
    /// leaf has height `0`.
    ///
    /// ```
    /// use balanced_bst::Node;
    ///
    /// assert_eq!(Node::<i32>::height_of(None), -1);
    /// assert_eq!(Node::height_of(Some(&Node::new(1))), 0);
    /// ```
    pub fn height_of(node: Option<&Self>) -> isize {
        node.map_or(-1, Self::height)
    }

    /// Number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> isize {
        fold_up(self, |_, left: Option<isize>, right| {
            1 + left.unwrap_or(-1).max(right.unwrap_or(-1))
        })
    }

    /// Returns the left-most node of the right subtree (the next node in an
    /// in-order walk) together with that node's parent. The parent is `self`
    /// when the right child has no left child.
    ///
    /// # Errors
    ///
    /// [`PreconditionError::NoRightChild`] if this node has no right child.
    ///
    /// ```
    /// use balanced_bst::{Node, PreconditionError};
    ///
    /// let node = Node::with_children(5, Some(Node::new(3)), Some(Node::new(8)));
    /// let (successor, parent) = node.find_inorder_successor().unwrap();
    /// assert_eq!((successor.value(), parent.value()), (&8, &5));
    ///
    /// assert_eq!(
    ///     Node::new(1).find_inorder_successor().unwrap_err(),
    ///     PreconditionError::NoRightChild,
    /// );
    /// ```
    pub fn find_inorder_successor(&self) -> Result<(&Self, &Self), PreconditionError> {
        let mut parent = self;
        let mut successor = self.right().ok_or(PreconditionError::NoRightChild)?;
        while let Some(left) = successor.left() {
            parent = successor;
            successor = left;
        }
        Ok((successor, parent))
    }

    /// The slot holding this node's in-order successor. Same walk as
    /// [`find_inorder_successor`][Self::find_inorder_successor] but hands out
    /// the parent's child slot so the successor can be spliced out.
    pub(crate) fn successor_slot(&mut self) -> Result<&mut Link<T>, PreconditionError> {
        let mut slot = &mut self.right;
        if slot.is_none() {
            return Err(PreconditionError::NoRightChild);
        }
        while slot.as_ref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        Ok(slot)
    }
}

/// Folds the subtree under `root` bottom-up: `combine` sees each node along
/// with its children's results (`None` for an absent child). Walks with an
/// explicit stack so list-shaped subtrees can't exhaust the call stack.
pub(crate) fn fold_up<T, R, F>(root: &Node<T>, mut combine: F) -> R
where
    F: FnMut(&Node<T>, Option<R>, Option<R>) -> R,
{
    let mut stack = vec![(root, false)];
    let mut results: Vec<R> = Vec::new();
    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            stack.extend(node.right().map(|right| (right, false)));
            stack.extend(node.left().map(|left| (left, false)));
            continue;
        }
        // The left subtree finished first so its result sits below the right's.
        let right = node.right.as_ref().and_then(|_| results.pop());
        let left = node.left.as_ref().and_then(|_| results.pop());
        let result = combine(node, left, right);
        if stack.is_empty() {
            return result;
        }
        results.push(result);
    }
    unreachable!("the root is always combined last")
}

/// Releases a subtree with an explicit stack instead of recursing through
/// `Box`'s drop, so list-shaped subtrees can't exhaust the call stack.
pub(crate) fn release<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
