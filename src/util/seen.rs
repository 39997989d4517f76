use std::{collections::BTreeSet, hash::Hash};

#[cfg(feature = "ahash")]
type HashSet<K> = ahash::AHashSet<K>;
#[cfg(not(feature = "ahash"))]
type HashSet<K> = std::collections::HashSet<K>;

/// Tracks which keys have already been observed during a left-to-right scan.
pub trait SeenSet<K> {
    fn with_capacity(capacity: usize) -> Self;

    /// Records the key, returning `true` only the first time it is observed.
    fn insert(&mut self, key: K) -> bool;
}

pub struct HashSeen<K> {
    set: HashSet<K>,
}

impl<K> SeenSet<K> for HashSeen<K>
where
    K: Eq + Hash,
{
    fn with_capacity(capacity: usize) -> Self {
        HashSeen {
            set: HashSet::with_capacity(capacity),
        }
    }

    fn insert(&mut self, key: K) -> bool {
        self.set.insert(key)
    }
}

pub struct OrdSeen<K> {
    set: BTreeSet<K>,
}

impl<K> SeenSet<K> for OrdSeen<K>
where
    K: Ord,
{
    fn with_capacity(_capacity: usize) -> Self {
        OrdSeen {
            set: BTreeSet::new(),
        }
    }

    fn insert(&mut self, key: K) -> bool {
        self.set.insert(key)
    }
}

/// Marks, for each item, whether its key is the first of its kind.
pub fn first_occurrences<'a, S, T, K, F>(items: &'a [T], mut key: F) -> Vec<bool>
where
    S: SeenSet<K>,
    F: FnMut(&'a T) -> K,
{
    let mut seen = S::with_capacity(items.len());
    items.iter().map(|item| seen.insert(key(item))).collect()
}

/// Keeps the items whose mask entry is `true`, preserving order.
pub fn retain_by_mask<T>(items: &mut Vec<T>, mask: Vec<bool>) {
    debug_assert_eq!(items.len(), mask.len());
    // `retain` visits each element exactly once, in order.
    let mut mask = mask.into_iter();
    items.retain(|_| mask.next().unwrap_or(false));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_seen_reports_first_sighting_only() {
        let mut seen = HashSeen::<&str>::with_capacity(4);
        assert!(seen.insert("a"));
        assert!(seen.insert("b"));
        assert!(!seen.insert("a"));
    }

    #[test]
    fn ord_seen_reports_first_sighting_only() {
        let mut seen = OrdSeen::<i32>::with_capacity(0);
        assert!(seen.insert(3));
        assert!(!seen.insert(3));
        assert!(seen.insert(1));
    }

    #[test]
    fn first_occurrences_marks_leading_duplicates() {
        let items = [3, 1, 3, 2, 1];
        let mask = first_occurrences::<HashSeen<_>, _, _, _>(&items, |i| i);
        assert_eq!(mask, vec![true, true, false, true, false]);
    }

    #[test]
    fn retain_by_mask_keeps_marked_items_in_order() {
        let mut items = vec!['a', 'b', 'c', 'd'];
        retain_by_mask(&mut items, vec![false, true, false, true]);
        assert_eq!(items, vec!['b', 'd']);
    }
}
