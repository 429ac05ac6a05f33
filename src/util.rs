/// Sorts `keys` ascending and drops repeated keys so every key appears once.
pub(crate) fn sorted_unique<K: Ord>(keys: impl IntoIterator<Item = K>) -> Vec<K> {
    let mut keys: Vec<K> = keys.into_iter().collect();
    keys.sort_unstable();
    keys.dedup();
    keys
}
