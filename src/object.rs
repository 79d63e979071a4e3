use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Returns the first key, in iteration order, whose value satisfies `pred`.
pub fn find_key<K, V, I, F>(entries: I, pred: F) -> Option<K>
where
    I: IntoIterator<Item = (K, V)>,
    F: Fn(&V) -> bool,
{
    entries
        .into_iter()
        .find(|(_, value)| pred(value))
        .map(|(key, _)| key)
}

/// Copy of `record` without the properties named in `keys`. Keys that are not
/// present are ignored.
pub fn omit<K, V, Q>(record: &BTreeMap<K, V>, keys: &[&Q]) -> BTreeMap<K, V>
where
    K: Ord + Clone + Borrow<Q>,
    V: Clone,
    Q: Ord + ?Sized,
{
    record
        .iter()
        .filter(|&(key, _)| {
            let key: &Q = key.borrow();
            !keys.iter().any(|k| *k == key)
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
