use tracing::trace;

use crate::slots::Slots;
use crate::{ListError, Sequence};

/// An unbounded contiguous list that doubles its storage whenever it fills up.
///
/// Growth moves the existing elements into the larger buffer in order, so no
/// element is ever lost or reordered by it. [`ChunkedList`](crate::ChunkedList)
/// uses it as the default container for its chunks.
///
/// # Example
/// ```rust
/// use chunky_list::{GrowableList, Sequence};
///
/// let mut list: GrowableList<i32> = GrowableList::new();
/// for value in 0..20 {
///     list.add_back(value)?;
/// }
///
/// assert_eq!(list.size(), 20);
/// assert_eq!(list.capacity(), 20);
/// assert_eq!(list.get_at(13), Ok(&13));
/// # Ok::<(), chunky_list::ListError>(())
/// ```
pub struct GrowableList<T> {
    slots: Slots<T>,
}

impl<T> GrowableList<T> {
    /// Number of slots allocated by [`GrowableList::new`].
    pub const START_CAPACITY: usize = 10;

    pub fn new() -> Self {
        Self::with_capacity(Self::START_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements before the first growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slots::with_capacity(capacity.max(1)),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.slots.as_mut_slice()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    fn reserve_one(&mut self) {
        if self.slots.is_full() {
            let old_capacity = self.capacity();
            let new_capacity = old_capacity * 2;
            trace!(old_capacity, new_capacity, "growing list storage");
            self.slots.grow(new_capacity);
        }
    }
}

impl<T> Sequence<T> for GrowableList<T> {
    fn add_front(&mut self, item: T) -> Result<(), ListError> {
        self.add_at(0, item)
    }

    fn add_back(&mut self, item: T) -> Result<(), ListError> {
        self.add_at(self.size(), item)
    }

    fn add_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        ListError::check_inclusive(index, self.size())?;
        self.reserve_one();
        self.slots.insert(index, item);
        Ok(())
    }

    fn remove_front(&mut self) -> Result<T, ListError> {
        self.remove_at(0)
    }

    fn remove_back(&mut self) -> Result<T, ListError> {
        let index = self.size().checked_sub(1).ok_or(ListError::Empty)?;
        self.remove_at(index)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        ListError::check_exclusive(index, self.size())?;
        Ok(self.slots.remove(index))
    }

    fn get_at(&self, index: usize) -> Result<&T, ListError> {
        ListError::check_exclusive(index, self.size())?;
        self.slots.get(index).ok_or(ListError::Index {
            index,
            len: self.size(),
        })
    }

    fn get_at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.size();
        ListError::check_exclusive(index, len)?;
        self.slots
            .get_mut(index)
            .ok_or(ListError::Index { index, len })
    }

    #[inline]
    fn size(&self) -> usize {
        self.slots.len()
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.as_slice().iter()
    }

    fn into_vec(self) -> Vec<T> {
        self.slots.into_values().collect()
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for GrowableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for GrowableList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.reserve_one();
            self.slots.insert(self.slots.len(), value);
        }
    }
}

impl<T: Clone> Clone for GrowableList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for GrowableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for GrowableList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
