use core::iter::FusedIterator;
use core::slice;

use crate::{ChunkedList, FixedList, Sequence};

/// An iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::iter().
pub struct Iter<'a, T, S>
where
    S: Sequence<FixedList<T>>,
{
    chunks: &'a S,

    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,

    // Chunks in `front_chunk..back_chunk` have not been reached from either end.
    front_chunk: usize,
    back_chunk: usize,

    len: usize,
}

impl<'a, T, S> Iter<'a, T, S>
where
    S: Sequence<FixedList<T>>,
{
    pub(crate) fn from_list(list: &'a ChunkedList<T, S>) -> Self {
        let chunks = list.chunks();

        Self {
            chunks,
            front: Default::default(),
            back: Default::default(),
            front_chunk: 0,
            back_chunk: chunks.size(),
            len: list.size(),
        }
    }

    fn chunk(&self, chunk_index: usize) -> Option<slice::Iter<'a, T>> {
        let chunks: &'a S = self.chunks;
        chunks
            .get_at(chunk_index)
            .ok()
            .map(|chunk| chunk.as_slice().iter())
    }
}

impl<T, S> Clone for Iter<'_, T, S>
where
    S: Sequence<FixedList<T>>,
{
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks,
            front: self.front.clone(),
            back: self.back.clone(),
            front_chunk: self.front_chunk,
            back_chunk: self.back_chunk,
            len: self.len,
        }
    }
}

impl<'a, T, S> Iterator for Iter<'a, T, S>
where
    S: Sequence<FixedList<T>>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        loop {
            if let Some(value) = self.front.next() {
                self.len -= 1;
                return Some(value);
            }

            if self.front_chunk < self.back_chunk {
                self.front = self.chunk(self.front_chunk)?;
                self.front_chunk += 1;
            } else {
                let value = self.back.next()?;
                self.len -= 1;
                return Some(value);
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T, S> DoubleEndedIterator for Iter<'_, T, S>
where
    S: Sequence<FixedList<T>>,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        loop {
            if let Some(value) = self.back.next_back() {
                self.len -= 1;
                return Some(value);
            }

            if self.front_chunk < self.back_chunk {
                self.back_chunk -= 1;
                self.back = self.chunk(self.back_chunk)?;
            } else {
                let value = self.front.next_back()?;
                self.len -= 1;
                return Some(value);
            }
        }
    }
}

impl<T, S> ExactSizeIterator for Iter<'_, T, S>
where
    S: Sequence<FixedList<T>>,
{
    fn len(&self) -> usize {
        self.len
    }
}

impl<T, S> FusedIterator for Iter<'_, T, S> where S: Sequence<FixedList<T>> {}

impl<T, S> core::fmt::Debug for Iter<'_, T, S>
where
    T: core::fmt::Debug,
    S: Sequence<FixedList<T>>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}
