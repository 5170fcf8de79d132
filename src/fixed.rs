use crate::slots::{self, Slots};
use crate::{ListError, Sequence};

/// A bounded list holding at most `capacity` elements contiguously.
///
/// The capacity is fixed at construction and never changes; insertions into a
/// full list fail with [`ListError::Capacity`]. This is the chunk type of
/// [`ChunkedList`](crate::ChunkedList).
///
/// # Example
/// ```rust
/// use chunky_list::{FixedList, ListError, Sequence};
///
/// let mut list: FixedList<i32> = FixedList::new(2);
/// list.add_back(2)?;
/// list.add_front(1)?;
///
/// assert!(list.is_full());
/// assert_eq!(list.add_back(3), Err(ListError::Capacity { capacity: 2 }));
/// assert_eq!(list.as_slice(), [1, 2]);
/// # Ok::<(), ListError>(())
/// ```
pub struct FixedList<T> {
    slots: Slots<T>,
}

impl<T> FixedList<T> {
    /// Creates an empty list able to hold `capacity` elements.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "FixedList capacity must be greater than zero");
        Self {
            slots: Slots::with_capacity(capacity),
        }
    }

    /// Creates an empty list able to hold `capacity` elements, rejecting a zero capacity.
    pub fn try_new(capacity: usize) -> Result<Self, ListError> {
        if capacity == 0 {
            return Err(ListError::ZeroCapacity);
        }

        Ok(Self::new(capacity))
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Returns the occupied prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.slots.as_slice()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Consumes the list into an owning iterator that yields from either end in O(1).
    pub(crate) fn into_values(self) -> slots::IntoIter<T> {
        self.slots.into_values()
    }

    fn check_room(&self) -> Result<(), ListError> {
        if self.slots.is_full() {
            return Err(ListError::Capacity {
                capacity: self.capacity(),
            });
        }

        Ok(())
    }
}

impl<T> Sequence<T> for FixedList<T> {
    fn add_front(&mut self, item: T) -> Result<(), ListError> {
        self.add_at(0, item)
    }

    fn add_back(&mut self, item: T) -> Result<(), ListError> {
        self.add_at(self.size(), item)
    }

    fn add_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        ListError::check_inclusive(index, self.size())?;
        self.check_room()?;
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

    #[inline]
    fn is_full(&self) -> bool {
        self.slots.is_full()
    }
}

impl<T: Clone> Clone for FixedList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for FixedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for FixedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
