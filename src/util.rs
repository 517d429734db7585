//! The sort-and-dedup step that turns arbitrary input into something
//! [`Tree::build`][crate::Tree::build] can use.

/// Sorts `values` ascending and removes duplicates, keeping the first of each
/// run of equal values. The result is suitable input for
/// [`Tree::build`][crate::Tree::build].
///
/// ```
/// use balanced_bst::util::sort_unique;
///
/// assert_eq!(sort_unique([3, 1, 3, 2, 1]), vec![1, 2, 3]);
/// ```
pub fn sort_unique<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut values: Vec<T> = values.into_iter().collect();
    values.sort();
    values.dedup();
    values
}
