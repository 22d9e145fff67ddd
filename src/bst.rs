//! An ordered set implemented with an unbalanced binary search tree.

use std::cmp::{self, Ordering};

use crate::Set;

/// An ordered set implemented with an unbalanced binary search tree.
///
/// Insertion never restructures the tree, so its shape depends on insertion
/// order: a sorted sequence degenerates into a list of height `n`.
///
/// ```
/// use spellset::BstSet;
/// let mut set = BstSet::new();
/// for x in 1..=4 {
///     set.insert(x);
/// }
/// assert!(set.contains(&3));
/// assert_eq!(set.height(), 4);
/// ```
#[derive(Clone)]
pub struct BstSet<T> {
    nodes: Vec<Node<T>>,
    root: Link,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link,
    right: Link,
}

type NodeIdx = usize;
type Link = Option<NodeIdx>;

impl<T: Ord> BstSet<T> {
    /// Creates an empty set.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Returns true if the set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the set.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of levels in the tree: 0 when empty, 1 for a single node.
    ///
    /// Heights are not cached, so this walks the whole tree.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(NodeIdx, usize)> = Vec::new();
        pending.extend(self.root.map(|root_idx| (root_idx, 1)));
        while let Some((idx, depth)) = pending.pop() {
            height = cmp::max(height, depth);
            let node = &self.nodes[idx];
            pending.extend(node.left.map(|left_idx| (left_idx, depth + 1)));
            pending.extend(node.right.map(|right_idx| (right_idx, depth + 1)));
        }
        height
    }

    /// Clears the set, deallocating all memory.
    pub fn clear(&mut self) {
        self.nodes = Vec::new();
        self.root = None;
    }

    /// Returns true if the set contains the value.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns a reference to the value in the set that is equal to the given value.
    pub fn get(&self, value: &T) -> Option<&T> {
        self.find(value).map(|idx| &self.nodes[idx].value)
    }

    /// Inserts a value into the set.
    /// Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: T) -> bool {
        let mut current = match self.root {
            None => {
                self.root = Some(self.push_leaf(value));
                return true;
            }
            Some(root_idx) => root_idx,
        };
        loop {
            let Node { left, right, .. } = self.nodes[current];
            current = match value.cmp(&self.nodes[current].value) {
                Ordering::Equal => return false,
                Ordering::Less => match left {
                    Some(left_idx) => left_idx,
                    None => {
                        let idx = self.push_leaf(value);
                        self.nodes[current].left = Some(idx);
                        return true;
                    }
                },
                Ordering::Greater => match right {
                    Some(right_idx) => right_idx,
                    None => {
                        let idx = self.push_leaf(value);
                        self.nodes[current].right = Some(idx);
                        return true;
                    }
                },
            };
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut num_nodes = 0;
        let mut previous: Option<&T> = None;
        let mut stack: Vec<NodeIdx> = Vec::new();
        let mut current = self.root;
        loop {
            while let Some(idx) = current {
                stack.push(idx);
                current = self.nodes[idx].left;
            }
            let Some(idx) = stack.pop() else {
                break;
            };

            // In-order sequence is strictly increasing
            let value = &self.nodes[idx].value;
            if let Some(previous) = previous {
                assert!(previous < value);
            }
            previous = Some(value);
            num_nodes += 1;

            current = self.nodes[idx].right;
        }

        // Check number of nodes
        assert_eq!(num_nodes, self.nodes.len());
    }

    fn push_leaf(&mut self, value: T) -> NodeIdx {
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    fn find(&self, value: &T) -> Link {
        let mut current = self.root;
        while let Some(idx) = current {
            current = match value.cmp(&self.nodes[idx].value) {
                Ordering::Equal => break,
                Ordering::Less => self.nodes[idx].left,
                Ordering::Greater => self.nodes[idx].right,
            }
        }
        current
    }
}

impl<T: Ord> Default for BstSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Set<T> for BstSet<T> {
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        BstSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> FromIterator<T> for BstSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for BstSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
