use std::{
    collections::hash_map::RandomState,
    hash::{BuildHasher, Hash},
};

/// Hash table with a fixed number of buckets; colliding keys share a bucket.
#[derive(Debug, Clone)]
pub struct ChainedHashTable<K, V, H = RandomState> {
    buckets: Box<[Vec<(K, V)>]>,
    hasher: H,
    len: usize,
}

impl<K: Hash + Eq, V> ChainedHashTable<K, V> {
    pub fn new(buckets: usize) -> Self {
        Self::with_hasher(buckets, RandomState::new())
    }
}

impl<K: Hash + Eq, V, H: BuildHasher> ChainedHashTable<K, V, H> {
    pub fn with_hasher(buckets: usize, hasher: H) -> Self {
        assert!(buckets > 0, "ChainedHashTable: bucket count must be > 0");
        Self {
            buckets: (0..buckets).map(|_| Vec::new()).collect(),
            hasher,
            len: 0,
        }
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) % self.buckets.len() as u64) as usize
    }

    /// Inserts or replaces the value for `key`. Always succeeds.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let idx = self.bucket_index(&key);
        let bucket = &mut self.buckets[idx];

        if let Some(slot) = bucket.iter_mut().find(|(stored, _)| *stored == key) {
            slot.1 = value;
            return true;
        }

        bucket.push((key, value));
        self.len += 1;
        true
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value)
    }

    /// Removes `key`, returning whether it was present.
    pub fn delete(&mut self, key: &K) -> bool {
        let idx = self.bucket_index(key);
        let bucket = &mut self.buckets[idx];

        match bucket.iter().position(|(stored, _)| stored == key) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_delete() {
        let mut table = ChainedHashTable::new(3);
        assert!(table.insert("apple", 10));
        assert!(table.insert("orange", 20));
        assert!(table.insert("banana", 30));

        assert_eq!(table.get(&"apple"), Some(&10));
        assert_eq!(table.len(), 3);

        assert!(table.delete(&"apple"));
        assert_eq!(table.get(&"apple"), None);
        assert!(!table.delete(&"apple"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn insert_replaces_existing() {
        let mut table = ChainedHashTable::new(2);
        table.insert("k", 1);
        table.insert("k", 2);
        assert_eq!(table.get(&"k"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn single_bucket_chains_everything() {
        let mut table = ChainedHashTable::new(1);
        for i in 0..50 {
            table.insert(i, i * 2);
        }
        assert_eq!(table.bucket_count(), 1);
        assert_eq!(table.len(), 50);
        for i in 0..50 {
            assert_eq!(table.get(&i), Some(&(i * 2)));
        }
        assert!(table.delete(&25));
        assert_eq!(table.get(&25), None);
        assert_eq!(table.get(&26), Some(&52));
    }

    #[test]
    #[should_panic]
    fn zero_buckets_panics() {
        let _ = ChainedHashTable::<u32, u32>::new(0);
    }
}
