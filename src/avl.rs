//! An ordered set implemented with an AVL tree.

use std::cmp::{self, Ordering};

use crate::Set;

/// An ordered set implemented with an AVL tree.
///
/// Nodes are kept in an arena and refer to each other by index. Each node caches
/// its height, so restoring balance after an insertion costs O(log n).
///
/// ```
/// use spellset::AvlSet;
/// let mut set = AvlSet::new();
/// set.insert(1);
/// set.insert(2);
/// set.insert(3);
/// assert!(set.contains(&2));
/// assert_eq!(set.height(), 2);
/// ```
#[derive(Clone)]
pub struct AvlSet<T> {
    nodes: Vec<Node<T>>,
    root: Link,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link,
    right: Link,
    parent: Link,
    height: usize,
}

type NodeIdx = usize;
type Link = Option<NodeIdx>;

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// The restructuring applied at an out-of-balance node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

#[cfg(any(test, feature = "consistency_check"))]
#[allow(clippy::enum_variant_names)]
enum Direction {
    FromParent,
    FromLeft,
    FromRight,
}

impl<T: Ord> AvlSet<T> {
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
    pub fn height(&self) -> usize {
        self.height_of(self.root)
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

    /// Inserts a value into the set and restores balance on the path to the root.
    /// Returns whether the value was newly inserted.
    pub fn insert(&mut self, value: T) -> bool {
        if let Some((parent, side)) = self.find_insert_pos(&value) {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                value,
                left: None,
                right: None,
                parent,
                height: 1,
            });
            match (parent, side) {
                (None, _) => self.root = Some(idx),
                (Some(parent_idx), Side::Left) => self.nodes[parent_idx].left = Some(idx),
                (Some(parent_idx), Side::Right) => self.nodes[parent_idx].right = Some(idx),
            }
            self.rebalance(parent);
            return true;
        }
        false
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        // Check root link
        if let Some(root_idx) = self.root {
            assert!(self.nodes[root_idx].parent.is_none());
        }

        // Check tree nodes
        let mut num_nodes = 0;
        let mut previous: Link = None;
        self.traverse(
            |idx| {
                let node = &self.nodes[idx];
                let mut left_height = 0;
                let mut right_height = 0;

                // Check link for left child node
                if let Some(left_idx) = node.left {
                    assert_eq!(self.nodes[left_idx].parent, Some(idx));
                    assert!(self.nodes[left_idx].value < node.value);
                    left_height = self.nodes[left_idx].height;
                }

                // Check link for right child node
                if let Some(right_idx) = node.right {
                    assert_eq!(self.nodes[right_idx].parent, Some(idx));
                    assert!(self.nodes[right_idx].value > node.value);
                    right_height = self.nodes[right_idx].height;
                }

                // Check cached height
                assert_eq!(node.height, cmp::max(left_height, right_height) + 1);

                // Check AVL condition (nearly balance)
                assert!(left_height <= right_height + 1);
                assert!(right_height <= left_height + 1);

                num_nodes += 1;
            },
            |idx| {
                // In-order sequence is strictly increasing
                if let Some(prev_idx) = previous {
                    assert!(self.nodes[prev_idx].value < self.nodes[idx].value);
                }
                previous = Some(idx);
            },
            |_| {},
        );

        // Check number of nodes
        assert_eq!(num_nodes, self.nodes.len());
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

    /// Returns the parent and side of the empty link where `value` belongs,
    /// or `None` if an equal value is already in the tree.
    fn find_insert_pos(&self, value: &T) -> Option<(Link, Side)> {
        let mut parent: Link = None;
        let mut side = Side::Left;
        let mut current = self.root;
        while let Some(idx) = current {
            parent = Some(idx);
            match value.cmp(&self.nodes[idx].value) {
                Ordering::Equal => return None,
                Ordering::Less => {
                    side = Side::Left;
                    current = self.nodes[idx].left;
                }
                Ordering::Greater => {
                    side = Side::Right;
                    current = self.nodes[idx].right;
                }
            }
        }
        Some((parent, side))
    }

    fn height_of(&self, link: Link) -> usize {
        match link {
            None => 0,
            Some(idx) => self.nodes[idx].height,
        }
    }

    fn left_height(&self, idx: NodeIdx) -> usize {
        self.height_of(self.nodes[idx].left)
    }

    fn right_height(&self, idx: NodeIdx) -> usize {
        self.height_of(self.nodes[idx].right)
    }

    /// Height of the left subtree minus height of the right subtree.
    fn balance_factor(&self, idx: NodeIdx) -> isize {
        self.left_height(idx) as isize - self.right_height(idx) as isize
    }

    fn adjust_height(&mut self, idx: NodeIdx) {
        self.nodes[idx].height = cmp::max(self.left_height(idx), self.right_height(idx)) + 1;
    }

    /// Points the link that referred to `old` (in `parent`, or the root) at `new`.
    fn replace_child(&mut self, parent: Link, old: NodeIdx, new: NodeIdx) {
        match parent {
            None => self.root = Some(new),
            Some(parent_idx) => {
                if self.nodes[parent_idx].left == Some(old) {
                    self.nodes[parent_idx].left = Some(new);
                } else {
                    self.nodes[parent_idx].right = Some(new);
                }
            }
        }
    }

    fn rotate_left(&mut self, idx: NodeIdx) {
        if let Some(right_idx) = self.nodes[idx].right {
            let right_left = self.nodes[right_idx].left;
            self.nodes[idx].right = right_left;
            if let Some(right_left_idx) = right_left {
                self.nodes[right_left_idx].parent = Some(idx);
            }

            let parent = self.nodes[idx].parent;
            self.nodes[right_idx].parent = parent;
            self.replace_child(parent, idx, right_idx);

            self.nodes[right_idx].left = Some(idx);
            self.nodes[idx].parent = Some(right_idx);

            self.adjust_height(idx);
            self.adjust_height(right_idx);
        }
    }

    fn rotate_right(&mut self, idx: NodeIdx) {
        if let Some(left_idx) = self.nodes[idx].left {
            let left_right = self.nodes[left_idx].right;
            self.nodes[idx].left = left_right;
            if let Some(left_right_idx) = left_right {
                self.nodes[left_right_idx].parent = Some(idx);
            }

            let parent = self.nodes[idx].parent;
            self.nodes[left_idx].parent = parent;
            self.replace_child(parent, idx, left_idx);

            self.nodes[left_idx].right = Some(idx);
            self.nodes[idx].parent = Some(left_idx);

            self.adjust_height(idx);
            self.adjust_height(left_idx);
        }
    }

    /// Rebalances nodes starting from given position up to the root node.
    fn rebalance(&mut self, start_from: Link) {
        let mut current = start_from;
        while let Some(idx) = current {
            // Read the parent first: a rotation moves `idx` below its pivot.
            let parent = self.nodes[idx].parent;
            if let Some(rotation) = self.rebalance_node(idx) {
                log::trace!(
                    "avl: {:?} rotation, height now {}",
                    rotation,
                    self.height()
                );
            }
            current = parent;
        }
    }

    /// Restores the AVL condition at the given node if necessary and adjusts its height.
    /// A single insertion never leaves a balance factor beyond +2 or -2.
    /// Returns the rotation applied, if any.
    fn rebalance_node(&mut self, idx: NodeIdx) -> Option<Rotation> {
        let balance = self.balance_factor(idx);
        debug_assert!((-2..=2).contains(&balance));
        if balance > 1 {
            let left_idx = self.nodes[idx].left?;
            if self.balance_factor(left_idx) >= 0 {
                self.rotate_right(idx);
                Some(Rotation::LeftLeft)
            } else {
                self.rotate_left(left_idx);
                self.rotate_right(idx);
                Some(Rotation::LeftRight)
            }
        } else if balance < -1 {
            let right_idx = self.nodes[idx].right?;
            if self.balance_factor(right_idx) <= 0 {
                self.rotate_left(idx);
                Some(Rotation::RightRight)
            } else {
                self.rotate_right(right_idx);
                self.rotate_left(idx);
                Some(Rotation::RightLeft)
            }
        } else {
            self.adjust_height(idx);
            None
        }
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn traverse<Pre, In, Post>(&self, mut preorder: Pre, mut inorder: In, mut postorder: Post)
    where
        Pre: FnMut(NodeIdx),
        In: FnMut(NodeIdx),
        Post: FnMut(NodeIdx),
    {
        if let Some(mut idx) = self.root {
            let mut dir = Direction::FromParent;
            loop {
                match dir {
                    Direction::FromParent => {
                        preorder(idx);
                        if let Some(left_idx) = self.nodes[idx].left {
                            idx = left_idx;
                        } else {
                            dir = Direction::FromLeft;
                        }
                    }
                    Direction::FromLeft => {
                        inorder(idx);
                        if let Some(right_idx) = self.nodes[idx].right {
                            idx = right_idx;
                            dir = Direction::FromParent;
                        } else {
                            dir = Direction::FromRight;
                        }
                    }
                    Direction::FromRight => {
                        postorder(idx);
                        if let Some(parent_idx) = self.nodes[idx].parent {
                            if Some(idx) == self.nodes[parent_idx].left {
                                dir = Direction::FromLeft;
                            } else {
                                dir = Direction::FromRight;
                            }
                            idx = parent_idx;
                        } else {
                            break;
                        }
                    }
                }
            }
        }
    }
}

impl<T: Ord> Default for AvlSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Set<T> for AvlSet<T> {
    fn add(&mut self, element: T) {
        self.insert(element);
    }

    fn contains(&self, element: &T) -> bool {
        AvlSet::contains(self, element)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Ord> FromIterator<T> for AvlSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for AvlSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
