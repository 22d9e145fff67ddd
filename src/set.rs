/// The capability shared by every set backing in this crate.
///
/// The trait is object safe, so callers that only need membership can hold a
/// `&dyn Set<T>` and stay independent of the concrete backing.
///
/// ```
/// use spellset::{AvlSet, BstSet, Set};
///
/// fn fill(set: &mut dyn Set<i32>) {
///     for x in [3, 1, 2, 3] {
///         set.add(x);
///     }
/// }
///
/// let mut avl: AvlSet<i32> = AvlSet::new();
/// let mut bst: BstSet<i32> = BstSet::new();
/// fill(&mut avl);
/// fill(&mut bst);
/// assert_eq!(avl.size(), 3);
/// assert_eq!(bst.size(), 3);
/// ```
pub trait Set<T> {
    /// Adds an element to the set.
    /// Has no effect if an equal element is already present.
    fn add(&mut self, element: T);

    /// Returns true if an element equal to `element` is in the set.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of distinct elements in the set.
    fn size(&self) -> usize;

    /// Returns true if the set contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T, S: Set<T> + ?Sized> Set<T> for Box<S> {
    fn add(&mut self, element: T) {
        (**self).add(element)
    }

    fn contains(&self, element: &T) -> bool {
        (**self).contains(element)
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
