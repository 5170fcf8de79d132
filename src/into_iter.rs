use core::iter::FusedIterator;

use crate::{ChunkedList, FixedList, Sequence, slots};

/// An owning iterator over the elements of a ChunkedList.
///
/// This struct is created by ChunkedList::into_iter(). The chunks are detached
/// from their sequence once, then each chunk is drained in place from the
/// end being consumed.
pub struct IntoIter<T> {
    chunks: std::vec::IntoIter<FixedList<T>>,
    front: Option<slots::IntoIter<T>>,
    back: Option<slots::IntoIter<T>>,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list<S>(list: ChunkedList<T, S>) -> Self
    where
        S: Sequence<FixedList<T>>,
    {
        let len = list.size();
        Self {
            chunks: list.into_chunks().into_vec().into_iter(),
            front: None,
            back: None,
            len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.front.as_mut().and_then(Iterator::next) {
                self.len -= 1;
                return Some(value);
            }

            match self.chunks.next() {
                Some(chunk) => self.front = Some(chunk.into_values()),
                None => {
                    let value = self.back.as_mut().and_then(Iterator::next)?;
                    self.len -= 1;
                    return Some(value);
                }
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

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(value) = self.back.as_mut().and_then(DoubleEndedIterator::next_back) {
                self.len -= 1;
                return Some(value);
            }

            match self.chunks.next_back() {
                Some(chunk) => self.back = Some(chunk.into_values()),
                None => {
                    let value = self
                        .front
                        .as_mut()
                        .and_then(DoubleEndedIterator::next_back)?;
                    self.len -= 1;
                    return Some(value);
                }
            }
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            front: self.front.clone(),
            back: self.back.clone(),
            len: self.len,
        }
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let front = self.front.iter().flat_map(|values| values.as_slice());
        let middle = self.chunks.as_slice().iter().flat_map(|chunk| chunk.as_slice());
        let back = self.back.iter().flat_map(|values| values.as_slice());

        f.debug_tuple("IntoIter")
            .field(&front.chain(middle).chain(back).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use crate::testing::{self, CountedChunks};
    use crate::{ChunkedList, Sequence};

    #[test]
    fn draining_touches_the_chunk_sequence_once_per_chunk() {
        let list: ChunkedList<u32, CountedChunks<u32>> =
            ChunkedList::from_iter_with_capacity(4, 0..4_000);
        let chunks = list.chunk_count();
        assert_eq!(chunks, 1_000);

        testing::reset_calls();

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(3_999));
        assert_eq!(sut.len(), 3_998);
        assert!(sut.eq(1..3_999));

        let calls = testing::calls();
        assert!(calls <= chunks + 3, "{calls} calls for {chunks} chunks");
    }

    #[test]
    fn into_iter_meets_in_the_middle_of_a_chunk() {
        let list: ChunkedList<usize> = ChunkedList::from_iter_with_capacity(4, 0..6);

        let mut sut = list.into_iter();
        assert_eq!(sut.next_back(), Some(5));
        assert_eq!(sut.next_back(), Some(4));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.next(), Some(0));
        assert_eq!(format!("{sut:?}"), "IntoIter([1, 2])");
        assert_eq!(sut.next_back(), Some(2));
        assert_eq!(sut.next_back(), Some(1));
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.next(), None);
    }

    #[test]
    fn into_iter_forward() {
        let list: ChunkedList<usize> = ChunkedList::from_iter_with_capacity(2, [0, 1, 2, 3, 4]);
        let sut = list.into_iter();
        assert_eq!(sut.len(), 5);
        assert_eq!(sut.collect::<Vec<_>>(), [0, 1, 2, 3, 4]);
    }

    #[test]
    fn into_iter_backward() {
        let list: ChunkedList<usize> = ChunkedList::from_iter_with_capacity(2, [0, 1, 2, 3, 4]);
        assert_eq!(list.into_iter().rev().collect::<Vec<_>>(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn double_ended_into_iter_works_correctly() {
        let list: ChunkedList<usize> = ChunkedList::from_iter_with_capacity(3, 0..5);

        let mut sut = list.into_iter();
        assert_eq!(sut.next(), Some(0));
        assert_eq!(sut.next_back(), Some(4));
        assert_eq!(sut.next(), Some(1));
        assert_eq!(sut.next_back(), Some(3));
        assert_eq!(sut.len(), 1);
        assert_eq!(format!("{sut:?}"), "IntoIter([2])");
        assert_eq!(sut.next(), Some(2));
        assert_eq!(sut.next(), None);
        assert_eq!(sut.next_back(), None);
        assert_eq!(sut.len(), 0);
    }

    #[test]
    fn clone_works_correctly() {
        let list: ChunkedList<usize> = ChunkedList::from_iter_with_capacity(2, [0, 1, 2]);
        let mut base = list.into_iter();
        base.next();

        let sut = base.clone();
        assert_eq!(sut.collect::<Vec<_>>(), [1, 2]);
        assert_eq!(base.collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn dropping_a_partially_consumed_iterator_releases_the_rest() {
        let tracker = Rc::new(());
        let mut list: ChunkedList<Rc<()>> = ChunkedList::new(2);
        for _ in 0..5 {
            list.add_back(Rc::clone(&tracker)).unwrap();
        }
        assert_eq!(Rc::strong_count(&tracker), 6);

        let mut sut = list.into_iter();
        drop(sut.next());
        assert_eq!(Rc::strong_count(&tracker), 5);

        drop(sut);
        assert_eq!(Rc::strong_count(&tracker), 1);
    }
}
