use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use tracing::trace;

use crate::{FixedList, GrowableList, IntoIter, Iter, ListError, Sequence};

/// A list made of fixed-capacity chunks held in an outer sequence.
///
/// # Features
/// - **Chunked Storage**: Each chunk holds up to `chunk_capacity` elements
///   contiguously, so a long list costs one small allocation per chunk rather
///   than one per element.
/// - **Bounded Insertions**: Inserting into a full chunk moves exactly one
///   element into the following chunk (creating it when needed), so every
///   insertion touches at most two chunks.
/// - **No Empty Chunks**: A chunk emptied by a removal is dropped immediately;
///   an empty list holds no chunks at all.
///
/// # Type Parameters
/// - `T`: The type of elements stored in the list.
/// - `S`: The sequence holding the chunks, a [`GrowableList`] by default.
///
/// Locating a position walks the chunks once through [`Sequence::values`].
/// The borrowing iterator fetches each chunk by position, which is O(1) for
/// the default chunk sequence and O(chunks) per chunk for the linked ones.
///
/// # Example
/// ```rust
/// use chunky_list::{ChunkedList, Sequence};
///
/// let mut list: ChunkedList<i64> = ChunkedList::new(3);
/// for value in 1..=7 {
///     list.add_back(value)?;
/// }
/// assert_eq!(list.chunk_sizes(), [3, 3, 1]);
///
/// list.add_at(3, 99)?;
/// assert_eq!(list, [1, 2, 3, 99, 4, 5, 6, 7]);
/// assert_eq!(list.chunk_sizes(), [3, 3, 2]);
/// # Ok::<(), chunky_list::ListError>(())
/// ```
pub struct ChunkedList<T, S = GrowableList<FixedList<T>>>
where
    S: Sequence<FixedList<T>>,
{
    chunk_capacity: usize,
    chunks: S,
    marker: PhantomData<T>,
}

impl<T, S> ChunkedList<T, S>
where
    S: Sequence<FixedList<T>> + Default,
{
    /// Creates a new, empty `ChunkedList` whose chunks hold `chunk_capacity` elements each.
    ///
    /// No chunk is allocated until the first insertion.
    ///
    /// # Panics
    /// Panics if `chunk_capacity` is zero.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkedList, Sequence};
    ///
    /// let list: ChunkedList<i64> = ChunkedList::new(6);
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.chunk_count(), 0);
    /// ```
    pub fn new(chunk_capacity: usize) -> Self {
        assert!(
            chunk_capacity > 0,
            "ChunkedList chunk capacity must be greater than zero"
        );

        Self {
            chunk_capacity,
            chunks: S::default(),
            marker: PhantomData,
        }
    }

    /// Like [`ChunkedList::new`], but reports a zero capacity as [`ListError::ZeroCapacity`].
    pub fn try_new(chunk_capacity: usize) -> Result<Self, ListError> {
        if chunk_capacity == 0 {
            return Err(ListError::ZeroCapacity);
        }

        Ok(Self::new(chunk_capacity))
    }

    /// Creates a list with the given chunk capacity holding the elements of `iter` in order.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkedList;
    ///
    /// let list: ChunkedList<i64> = ChunkedList::from_iter_with_capacity(4, 0..10);
    ///
    /// assert_eq!(list.chunk_sizes(), [4, 4, 2]);
    /// ```
    pub fn from_iter_with_capacity<I>(chunk_capacity: usize, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut this = Self::new(chunk_capacity);
        this.extend(iter);
        this
    }

    /// Removes all elements and chunks.
    pub fn clear(&mut self) {
        self.chunks = S::default();
    }
}

impl<T, S> ChunkedList<T, S>
where
    S: Sequence<FixedList<T>>,
{
    /// The number of elements each chunk can hold.
    #[inline]
    pub const fn chunk_capacity(&self) -> usize {
        self.chunk_capacity
    }

    /// The number of chunks currently allocated.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.size()
    }

    /// The number of elements stored in each chunk, in order.
    pub fn chunk_sizes(&self) -> Vec<usize> {
        self.chunk_iter().map(|chunk| chunk.size()).collect()
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// Each chunk is fetched once, when the iterator first reaches it.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::ChunkedList;
    ///
    /// let list: ChunkedList<i64> = ChunkedList::from_iter_with_capacity(2, [1, 2, 3]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next_back(), Some(&3));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, S> {
        Iter::from_list(self)
    }

    pub(crate) fn chunks(&self) -> &S {
        &self.chunks
    }

    pub(crate) fn chunk_iter(&self) -> impl Iterator<Item = &FixedList<T>> {
        self.chunks.values()
    }

    pub(crate) fn into_chunks(self) -> S {
        self.chunks
    }

    fn make_chunk(&self) -> FixedList<T> {
        FixedList::new(self.chunk_capacity)
    }

    /// Finds the chunk holding the element at `index`.
    fn search_target(&self, index: usize) -> Result<SearchTarget, ListError> {
        if self.chunks.is_empty() {
            return Err(ListError::Empty);
        }

        let mut start = 0;
        for (chunk_index, chunk) in self.chunk_iter().enumerate() {
            let end = start + chunk.size();
            if index < end {
                return Ok(SearchTarget {
                    chunk_index,
                    target_index: index - start,
                });
            }

            start = end;
        }

        Err(ListError::Index { index, len: start })
    }

    /// Finds the chunk that should receive an insertion at `index`.
    ///
    /// A position on the boundary between two chunks belongs to the earlier
    /// one unless it is full, in which case it is the start of the later one.
    fn search_insert_target(&self, index: usize) -> Result<SearchTarget, ListError> {
        let mut start = 0;
        for (chunk_index, chunk) in self.chunk_iter().enumerate() {
            let end = start + chunk.size();
            if index < end || (index == end && !chunk.is_full()) {
                return Ok(SearchTarget {
                    chunk_index,
                    target_index: index - start,
                });
            }

            start = end;
        }

        Err(ListError::Index { index, len: start })
    }

    /// Frees one slot in the full chunk at `chunk_index` by moving its last
    /// element to the front of the following chunk.
    ///
    /// The following chunk is created when it does not exist or has no room.
    fn relieve_overflow(&mut self, chunk_index: usize) -> Result<(), ListError> {
        let next_index = chunk_index + 1;

        let next_has_room = self
            .chunks
            .get_at(next_index)
            .is_ok_and(|chunk| !chunk.is_full());

        if !next_has_room {
            let chunk = self.make_chunk();
            self.chunks.add_at(next_index, chunk)?;
        }

        let spilled = self.chunks.get_at_mut(chunk_index)?.remove_back()?;
        self.chunks.get_at_mut(next_index)?.add_front(spilled)?;

        trace!(
            chunk = chunk_index,
            moved_into = next_index,
            created = !next_has_room,
            "relieved chunk overflow"
        );
        Ok(())
    }

    /// Drops the chunk at `chunk_index` if a removal left it empty.
    fn prune(&mut self, chunk_index: usize) -> Result<(), ListError> {
        if self.chunks.get_at(chunk_index)?.is_empty() {
            self.chunks.remove_at(chunk_index)?;
            trace!(chunk = chunk_index, "dropped empty chunk");
        }

        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct SearchTarget {
    chunk_index: usize,
    target_index: usize,
}

impl<T, S> Sequence<T> for ChunkedList<T, S>
where
    S: Sequence<FixedList<T>>,
{
    /// Adds an element to the front of the list.
    ///
    /// If the first chunk is full, the element is placed alone in a new leading chunk.
    fn add_front(&mut self, item: T) -> Result<(), ListError> {
        match self.chunks.get_front_mut() {
            Ok(chunk) if !chunk.is_full() => chunk.add_front(item),
            _ => {
                let mut chunk = self.make_chunk();
                chunk.add_front(item)?;
                self.chunks.add_front(chunk)?;
                trace!(chunks = self.chunks.size(), "created front chunk");
                Ok(())
            }
        }
    }

    /// Adds an element to the back of the list.
    ///
    /// If the last chunk is full, the element is placed alone in a new trailing chunk.
    fn add_back(&mut self, item: T) -> Result<(), ListError> {
        match self.chunks.get_back_mut() {
            Ok(chunk) if !chunk.is_full() => chunk.add_back(item),
            _ => {
                let mut chunk = self.make_chunk();
                chunk.add_back(item)?;
                self.chunks.add_back(chunk)?;
                trace!(chunks = self.chunks.size(), "created back chunk");
                Ok(())
            }
        }
    }

    /// Inserts an element at `index`, shifting subsequent elements one position back.
    ///
    /// Inserting into a full chunk first moves that chunk's last element into
    /// the next chunk, or into a new chunk when the next one is full too.
    ///
    /// # Example
    /// ```rust
    /// use chunky_list::{ChunkedList, ListError, Sequence};
    ///
    /// let mut list: ChunkedList<i64> = ChunkedList::from_iter_with_capacity(2, [10, 30]);
    /// list.add_at(1, 20)?;
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert_eq!(list.chunk_sizes(), [2, 1]);
    /// assert_eq!(list.add_at(4, 0), Err(ListError::Index { index: 4, len: 3 }));
    /// # Ok::<(), ListError>(())
    /// ```
    fn add_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        let len = self.size();
        ListError::check_inclusive(index, len)?;

        if index == 0 {
            return self.add_front(item);
        }

        if index == len {
            return self.add_back(item);
        }

        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_insert_target(index)?;

        if self.chunks.get_at(chunk_index)?.is_full() {
            self.relieve_overflow(chunk_index)?;
        }

        self.chunks
            .get_at_mut(chunk_index)?
            .add_at(target_index, item)
    }

    fn remove_front(&mut self) -> Result<T, ListError> {
        let value = self.chunks.get_front_mut()?.remove_front()?;
        self.prune(0)?;
        Ok(value)
    }

    fn remove_back(&mut self) -> Result<T, ListError> {
        let value = self.chunks.get_back_mut()?.remove_back()?;

        while self.chunks.get_back().is_ok_and(|chunk| chunk.is_empty()) {
            self.chunks.remove_back()?;
            trace!(chunks = self.chunks.size(), "dropped empty back chunk");
        }

        Ok(value)
    }

    /// Removes and returns the element at `index`.
    ///
    /// A chunk emptied by the removal is dropped, like with the front and back removals.
    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index)?;

        let value = self.chunks.get_at_mut(chunk_index)?.remove_at(target_index)?;
        self.prune(chunk_index)?;
        Ok(value)
    }

    fn get_front(&self) -> Result<&T, ListError> {
        self.chunks.get_front()?.get_front()
    }

    fn get_back(&self) -> Result<&T, ListError> {
        self.chunks.get_back()?.get_back()
    }

    fn get_front_mut(&mut self) -> Result<&mut T, ListError> {
        self.chunks.get_front_mut()?.get_front_mut()
    }

    fn get_back_mut(&mut self) -> Result<&mut T, ListError> {
        self.chunks.get_back_mut()?.get_back_mut()
    }

    fn get_at(&self, index: usize) -> Result<&T, ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index)?;

        self.chunks.get_at(chunk_index)?.get_at(target_index)
    }

    fn get_at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let SearchTarget {
            chunk_index,
            target_index,
        } = self.search_target(index)?;

        self.chunks.get_at_mut(chunk_index)?.get_at_mut(target_index)
    }

    /// Sums the sizes of all chunks.
    fn size(&self) -> usize {
        self.chunk_iter().map(|chunk| chunk.size()).sum()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.chunk_iter().flat_map(|chunk| chunk.as_slice())
    }

    fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, S> Extend<T> for ChunkedList<T, S>
where
    S: Sequence<FixedList<T>>,
{
    /// Appends every element of `iter`, filling the last chunk before creating new ones.
    ///
    /// # Panics
    /// Panics if the chunk sequence refuses a new chunk. The constructors only
    /// accept `Default` chunk sequences, and every such sequence in this crate
    /// is unbounded, so only a custom bounded chunk sequence can trigger it.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(error) = self.add_back(value) {
                panic!("cannot extend chunked list: {error}");
            }
        }
    }
}

impl<'a, T, S> Extend<&'a T> for ChunkedList<T, S>
where
    T: Clone + 'a,
    S: Sequence<FixedList<T>>,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, S> Clone for ChunkedList<T, S>
where
    S: Sequence<FixedList<T>> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            chunk_capacity: self.chunk_capacity,
            chunks: self.chunks.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, S, const M: usize> PartialEq<[T; M]> for ChunkedList<T, S>
where
    T: PartialEq,
    S: Sequence<FixedList<T>>,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self.size() == other.len() && self.iter().eq(other)
    }
}

impl<T, S> PartialEq<&[T]> for ChunkedList<T, S>
where
    T: PartialEq,
    S: Sequence<FixedList<T>>,
{
    fn eq(&self, other: &&[T]) -> bool {
        self.size() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, S> PartialEq<[T]> for ChunkedList<T, S>
where
    T: PartialEq,
    S: Sequence<FixedList<T>>,
{
    fn eq(&self, other: &[T]) -> bool {
        self.size() == other.len() && self.iter().eq(other)
    }
}

impl<T, S, R> PartialEq<ChunkedList<T, R>> for ChunkedList<T, S>
where
    T: PartialEq,
    S: Sequence<FixedList<T>>,
    R: Sequence<FixedList<T>>,
{
    /// Compares the logical contents; chunk layout and capacity are ignored.
    fn eq(&self, other: &ChunkedList<T, R>) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T, S> Eq for ChunkedList<T, S>
where
    T: Eq,
    S: Sequence<FixedList<T>>,
{
}

impl<T, S> PartialOrd for ChunkedList<T, S>
where
    T: PartialOrd,
    S: Sequence<FixedList<T>>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, S> Ord for ChunkedList<T, S>
where
    T: Ord,
    S: Sequence<FixedList<T>>,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, S> Hash for ChunkedList<T, S>
where
    T: Hash,
    S: Sequence<FixedList<T>>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.size());
        self.iter().for_each(|v| v.hash(state));
    }
}

impl<T, S> std::fmt::Debug for ChunkedList<T, S>
where
    T: std::fmt::Debug,
    S: Sequence<FixedList<T>>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.chunk_iter()).finish()
    }
}

impl<T, S> IntoIterator for ChunkedList<T, S>
where
    S: Sequence<FixedList<T>>,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T, S> IntoIterator for &'a ChunkedList<T, S>
where
    S: Sequence<FixedList<T>>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}
