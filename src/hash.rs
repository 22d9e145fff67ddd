//! An unordered set implemented with a separately-chained hash table.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::mem;

use crate::{Set, ZeroCapacity};

/// Number of buckets a [`HashSet`] starts with when no capacity is given.
pub const DEFAULT_CAPACITY: usize = 10;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

/// The hash function type used by [`HashSet::default`].
pub type HashFn<T> = fn(&T) -> u64;

/// Hashes a value with the standard library's [`DefaultHasher`].
///
/// The hasher is created with fixed keys, so the result is stable within a build.
pub fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// An unordered set implemented with a separately-chained hash table.
///
/// Every bucket holds a singly-linked chain of the elements that hash to it. When
/// an insertion pushes the load factor (`len / capacity`) above 4/5, the bucket
/// array doubles and every element is moved into the new one.
///
/// The hash function is supplied by the caller and must be consistent with
/// equality: equal elements must hash identically. This is not checked; an
/// inconsistent function makes `contains` and duplicate detection unreliable.
///
/// # Time Complexity
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` on growth |
/// | `contains` | `O(1)`* |
///
/// \* Expected, for a well-distributed hash function.
///
/// ```
/// use spellset::HashSet;
/// let mut set = HashSet::new(|x: &u32| u64::from(*x));
/// for x in 0..9 {
///     set.insert(x);
/// }
/// assert!(set.contains(&4));
/// assert_eq!(set.capacity(), 20);
/// ```
pub struct HashSet<T, F = HashFn<T>> {
    buckets: Box<[Chain<T>]>,
    len: usize,
    hash_fn: F,
}

type Chain<T> = Option<Box<ChainNode<T>>>;

struct ChainNode<T> {
    value: T,
    next: Chain<T>,
}

fn empty_buckets<T>(capacity: usize) -> Box<[Chain<T>]> {
    (0..capacity).map(|_| None).collect()
}

impl<T: Eq, F: Fn(&T) -> u64> HashSet<T, F> {
    /// Creates an empty set with [`DEFAULT_CAPACITY`] buckets that hashes elements
    /// with `hash_fn`.
    pub fn new(hash_fn: F) -> Self {
        Self {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            hash_fn,
        }
    }

    /// Creates an empty set with `capacity` buckets that hashes elements with `hash_fn`.
    pub fn with_capacity(capacity: usize, hash_fn: F) -> Result<Self, ZeroCapacity> {
        if capacity == 0 {
            return Err(ZeroCapacity);
        }
        Ok(Self {
            buckets: empty_buckets(capacity),
            len: 0,
            hash_fn,
        })
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.capacity() as f64
    }

    /// Removes all elements. The capacity is kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
        self.len = 0;
    }

    /// Returns true if the set contains the value.
    pub fn contains(&self, value: &T) -> bool {
        let mut current = &self.buckets[self.index_of(value)];
        while let Some(node) = current {
            if node.value == *value {
                return true;
            }
            current = &node.next;
        }
        false
    }

    /// Inserts a value into the set, growing the table if the load factor
    /// would exceed 4/5. Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            return false;
        }

        self.push_front(value);
        self.len += 1;

        if self.should_grow() {
            self.grow();
        }
        true
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_values = 0;
        for (index, bucket) in self.buckets.iter().enumerate() {
            let mut current = bucket;
            while let Some(node) = current {
                // Every value sits in the bucket its hash selects
                assert_eq!(self.index_of(&node.value), index);

                // No value appears twice in its chain
                let mut rest = &node.next;
                while let Some(other) = rest {
                    assert!(other.value != node.value);
                    rest = &other.next;
                }

                num_values += 1;
                current = &node.next;
            }
        }

        // Check number of values and load factor
        assert_eq!(num_values, self.len);
        assert!(!self.should_grow());
    }

    fn index_of(&self, value: &T) -> usize {
        ((self.hash_fn)(value) % self.buckets.len() as u64) as usize
    }

    // Chains are unordered, so new values go to the front.
    fn push_front(&mut self, value: T) {
        let index = self.index_of(&value);
        let bucket = &mut self.buckets[index];
        *bucket = Some(Box::new(ChainNode {
            value,
            next: bucket.take(),
        }));
    }

    fn should_grow(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.buckets.len() * LOAD_FACTOR_NUMERATOR
    }

    fn grow(&mut self) {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity * GROWTH_FACTOR;
        log::debug!(
            "hash set: growing from {} to {} buckets at {} elements",
            old_capacity,
            new_capacity,
            self.len
        );

        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        for mut chain in old_buckets.into_vec() {
            while let Some(node) = chain {
                let ChainNode { value, next } = *node;
                chain = next;
                self.push_front(value);
            }
        }
    }
}

/// Drops a chain node by node, so long chains can't overflow the stack.
fn drop_chain<T>(mut chain: Chain<T>) {
    while let Some(mut node) = chain {
        chain = node.next.take();
    }
}

impl<T, F> Drop for HashSet<T, F> {
    fn drop(&mut self) {
        for bucket in self.buckets.iter_mut() {
            drop_chain(bucket.take());
        }
    }
}

impl<T: Clone, F: Clone> Clone for HashSet<T, F> {
    fn clone(&self) -> Self {
        let mut buckets = empty_buckets(self.buckets.len());
        for (source, target) in self.buckets.iter().zip(buckets.iter_mut()) {
            let mut values = Vec::new();
            let mut current = source;
            while let Some(node) = current {
                values.push(node.value.clone());
                current = &node.next;
            }
            // Rebuild back to front to keep the chain order.
            for value in values.into_iter().rev() {
                *target = Some(Box::new(ChainNode {
                    value,
                    next: target.take(),
                }));
            }
        }
        Self {
            buckets,
            len: self.len,
            hash_fn: self.hash_fn.clone(),
        }
    }
}

impl<T: Hash + Eq> Default for HashSet<T, HashFn<T>> {
    fn default() -> Self {
        Self::new(std_hash::<T>)
    }
}

impl<T: Eq, F: Fn(&T) -> u64> Set<T> for HashSet<T, F> {
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T, HashFn<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Eq, F: Fn(&T) -> u64> Extend<T> for HashSet<T, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
