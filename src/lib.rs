//! # chunky_list
//!
//! `chunky_list` provides a family of list containers sharing one [`Sequence`] interface,
//! built around [`ChunkedList`]: an **unrolled** list made of fixed-capacity chunks
//! stored in an outer growable sequence.
//!
//! ## Containers
//! - [`FixedList`]: a bounded contiguous buffer, the chunk type.
//! - [`GrowableList`]: an unbounded contiguous buffer that doubles when full,
//!   the default container of chunks.
//! - [`SinglyLinkedList`] and [`DoublyLinkedList`]: classic linked chains,
//!   interchangeable with the others behind [`Sequence`].
//! - [`ChunkedList`]: one logical sequence over many chunks. Chunks are created
//!   lazily, relieved of overflow one element at a time, and dropped as soon
//!   as they become empty.
//!
//! ## Errors
//! Every operation returns a [`ListError`] instead of panicking, and a failing
//! operation never leaves a container half modified.
//!
//! ## Example
//! ```rust
//! use chunky_list::{ChunkedList, Sequence};
//!
//! let mut list: ChunkedList<i64> = ChunkedList::new(3);
//! list.add_back(2)?;
//! list.add_front(0)?;
//! list.add_at(1, 1)?;
//!
//! assert_eq!(list.get_front(), Ok(&0));
//! assert_eq!(list.get_at(1), Ok(&1));
//! assert_eq!(list.get_back(), Ok(&2));
//!
//! assert_eq!(list.remove_at(1), Ok(1));
//! assert_eq!(list.remove_back(), Ok(2));
//! assert_eq!(list.remove_front(), Ok(0));
//! assert!(list.is_empty());
//! # Ok::<(), chunky_list::ListError>(())
//! ```

mod chunked;
mod doubly;
mod error;
mod fixed;
mod growable;
mod into_iter;
mod iter;
mod singly;
mod slots;
#[cfg(test)]
mod testing;

pub use chunked::ChunkedList;
pub use doubly::{DoublyLinkedList, Iter as DoublyLinkedIter};
pub use error::ListError;
pub use fixed::FixedList;
pub use growable::GrowableList;
pub use into_iter::IntoIter;
pub use iter::Iter;
pub use singly::SinglyLinkedList;

/// The uniform list interface shared by every container of this crate.
///
/// Positions run from `0` to `size() - 1`. Reads and removals accept exactly
/// those positions, insertions additionally accept `size()`. Operations that
/// need an element report [`ListError::Empty`] on an empty container before
/// looking at the index; everything else out of range is a
/// [`ListError::Index`].
pub trait Sequence<T> {
    fn add_front(&mut self, item: T) -> Result<(), ListError>;

    fn add_back(&mut self, item: T) -> Result<(), ListError>;

    /// Inserts `item` at `index`, shifting the following elements one position back.
    fn add_at(&mut self, index: usize, item: T) -> Result<(), ListError>;

    fn remove_front(&mut self) -> Result<T, ListError>;

    fn remove_back(&mut self) -> Result<T, ListError>;

    /// Removes and returns the element at `index`, closing the gap it leaves.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError>;

    fn get_at(&self, index: usize) -> Result<&T, ListError>;

    fn get_at_mut(&mut self, index: usize) -> Result<&mut T, ListError>;

    /// Number of elements currently stored.
    fn size(&self) -> usize;

    fn get_front(&self) -> Result<&T, ListError> {
        self.get_at(0)
    }

    fn get_back(&self) -> Result<&T, ListError> {
        let index = self.size().checked_sub(1).ok_or(ListError::Empty)?;
        self.get_at(index)
    }

    fn get_front_mut(&mut self) -> Result<&mut T, ListError> {
        self.get_at_mut(0)
    }

    fn get_back_mut(&mut self) -> Result<&mut T, ListError> {
        let index = self.size().checked_sub(1).ok_or(ListError::Empty)?;
        self.get_at_mut(index)
    }

    /// Replaces the element at `index` and returns the previous one.
    fn set_at(&mut self, index: usize, value: T) -> Result<T, ListError> {
        self.get_at_mut(index)
            .map(|slot| std::mem::replace(slot, value))
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Whether an insertion would fail for lack of room. Unbounded containers are never full.
    fn is_full(&self) -> bool {
        false
    }

    /// Iterates over the elements, front to back.
    ///
    /// The provided version looks every position up with [`Sequence::get_at`];
    /// containers that can walk themselves in one pass override it.
    fn values<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        (0..self.size()).map_while(move |index| self.get_at(index).ok())
    }

    /// Moves every element out, front to back.
    ///
    /// The provided version pops from the back, which is O(1) per element for
    /// every container except [`SinglyLinkedList`], which overrides it.
    fn into_vec(mut self) -> Vec<T>
    where
        Self: Sized,
    {
        let mut values = Vec::with_capacity(self.size());
        while let Ok(value) = self.remove_back() {
            values.push(value);
        }
        values.reverse();
        values
    }
}
