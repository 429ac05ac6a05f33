/// Errors triggered by tree operations.
///
/// Looking up, deleting, or measuring the depth of a key that isn't in the
/// tree is not an error. Those operations return `None` or do nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The value passed to [`Tree::insert`](crate::Tree::insert) can't be
    /// converted into the tree's key type. The tree is left unchanged.
    #[error("value is not a valid key for this tree")]
    InvalidKey,
}
