//! Errors reported by [`Tree`][crate::Tree] and [`Node`][crate::Node] operations.

/// Returned by [`Tree::insert`][crate::Tree::insert] when the tree already
/// holds an equal value. The rejected value is handed back and the tree is
/// left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tree already contains an equal value")]
pub struct DuplicateValueError<T>(pub T);

impl<T> DuplicateValueError<T> {
    /// Takes back the value that was rejected.
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Errors triggered by structural queries on a [`Node`][crate::Node] whose
/// shape doesn't allow them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PreconditionError {
    /// An in-order successor was requested from a node without a right child.
    #[error("in-order successor requires a right child")]
    NoRightChild,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_value_hands_back_the_value() {
        let err = DuplicateValueError(String::from("seven"));
        assert_eq!(err.to_string(), "tree already contains an equal value");
        assert_eq!(err.into_inner(), "seven");
    }

    #[test]
    fn errors_are_std_errors() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(DuplicateValueError(3)),
            Box::new(PreconditionError::NoRightChild),
        ];
        assert_eq!(
            errors[1].to_string(),
            "in-order successor requires a right child"
        );
    }
}
