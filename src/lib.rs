//! A Binary Search Tree (BST) that is built balanced from a batch of values
//! and can be rebuilt balanced on demand.
//!
//! ## Shape of the tree
//!
//! Every [`Node`] holds one value and owns up to two children. Values to the
//! left of a node sort before it and values to the right sort after it, and
//! no value appears twice. That ordering is all a lookup needs: compare,
//! step left or right, repeat. So [`find`][Tree::find] costs one comparison
//! per level.
//!
//! A [`Tree`] starts life from a batch of values. They are sorted and
//! de-duplicated, and the middle one becomes the root. The halves on either
//! side become its subtrees, built the same way. The result is as short as
//! the value count allows, about `lg N` levels for `N` values.
//!
//! ## Balance
//!
//! This tree does _not_ rebalance itself on [`insert`][Tree::insert] or
//! [`delete`][Tree::delete]. A run of ascending inserts will happily turn it
//! into a linked list. Instead, [`balanced`][Tree::balanced] reports whether
//! every node's subtrees differ in height by at most one and
//! [`rebalance`][Tree::rebalance] rebuilds the whole tree in `O(N)`.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::from_values([1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
//! assert!(tree.balanced());
//!
//! for value in [7000, 8000, 9000, 10000, 11000] {
//!     tree.insert(value).unwrap();
//! }
//! assert!(!tree.balanced());
//!
//! tree.rebalance();
//! assert!(tree.balanced());
//! assert_eq!(tree.len(), 16);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod display;
pub mod error;
pub mod node;
pub mod traversal;
pub mod tree;
pub mod util;

pub use error::{DuplicateValueError, PreconditionError};
pub use node::Node;
pub use tree::Tree;
