use std::fmt;

use crate::node::Node;
use crate::tree::Tree;

/// Draws the tree on its side: the right subtree above a node and the left
/// subtree below it, one value per line.
///
/// ```
/// use balanced_bst::Tree;
///
/// let tree = Tree::from_values([3, 5, 8]);
/// assert_eq!(
///     tree.to_string(),
///     "│   ┌── 8\n└── 5\n    └── 3\n",
/// );
/// ```
impl<T: fmt::Display> fmt::Display for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Reverse in-order: right subtree, the node itself, then left subtree.
        // The root is drawn as a left child so its subtrees line up under the
        // first column.
        let mut stack: Vec<Step<'_, T>> = self
            .root()
            .map(|root| Step::Expand(root, String::new(), true))
            .into_iter()
            .collect();

        while let Some(step) = stack.pop() {
            match step {
                Step::Write(node, prefix, is_left) => {
                    let connector = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{connector}{}", node.value())?;
                }
                Step::Expand(node, prefix, is_left) => {
                    if let Some(left) = node.left() {
                        let bar = if is_left { "    " } else { "│   " };
                        stack.push(Step::Expand(left, format!("{prefix}{bar}"), true));
                    }
                    if let Some(right) = node.right() {
                        let bar = if is_left { "│   " } else { "    " };
                        stack.push(Step::Write(node, prefix.clone(), is_left));
                        stack.push(Step::Expand(right, format!("{prefix}{bar}"), false));
                    } else {
                        stack.push(Step::Write(node, prefix, is_left));
                    }
                }
            }
        }
        Ok(())
    }
}

/// Pending work for the printer: a node with the prefix for its line and
/// whether it hangs below its parent's line.
enum Step<'a, T> {
    Expand(&'a Node<T>, String, bool),
    Write(&'a Node<T>, String, bool),
}
