//! Offset/limit slicing.

/// Skip `offset` items, then keep at most `limit`.
///
/// Out-of-range values yield an empty result.
pub fn paginate<T>(items: Vec<T>, offset: usize, limit: usize) -> Vec<T> {
    items.into_iter().skip(offset).take(limit).collect()
}
