use std::cell::Cell;

use crate::{FixedList, GrowableList, ListError, Sequence};

thread_local! {
    static OUTER_CALLS: Cell<usize> = const { Cell::new(0) };
}

fn touch() {
    OUTER_CALLS.with(|calls| calls.set(calls.get() + 1));
}

/// Resets the call counter of [`CountedChunks`] on the current thread.
pub fn reset_calls() {
    OUTER_CALLS.with(|calls| calls.set(0));
}

/// Calls made to any [`CountedChunks`] on the current thread since the last reset.
pub fn calls() -> usize {
    OUTER_CALLS.with(Cell::get)
}

/// A chunk sequence that counts how often it is used.
pub struct CountedChunks<T>(GrowableList<FixedList<T>>);

impl<T> Default for CountedChunks<T> {
    fn default() -> Self {
        Self(GrowableList::new())
    }
}

impl<T> Sequence<FixedList<T>> for CountedChunks<T> {
    fn add_front(&mut self, item: FixedList<T>) -> Result<(), ListError> {
        touch();
        self.0.add_front(item)
    }

    fn add_back(&mut self, item: FixedList<T>) -> Result<(), ListError> {
        touch();
        self.0.add_back(item)
    }

    fn add_at(&mut self, index: usize, item: FixedList<T>) -> Result<(), ListError> {
        touch();
        self.0.add_at(index, item)
    }

    fn remove_front(&mut self) -> Result<FixedList<T>, ListError> {
        touch();
        self.0.remove_front()
    }

    fn remove_back(&mut self) -> Result<FixedList<T>, ListError> {
        touch();
        self.0.remove_back()
    }

    fn remove_at(&mut self, index: usize) -> Result<FixedList<T>, ListError> {
        touch();
        self.0.remove_at(index)
    }

    fn get_at(&self, index: usize) -> Result<&FixedList<T>, ListError> {
        touch();
        self.0.get_at(index)
    }

    fn get_at_mut(&mut self, index: usize) -> Result<&mut FixedList<T>, ListError> {
        touch();
        self.0.get_at_mut(index)
    }

    fn size(&self) -> usize {
        touch();
        self.0.size()
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a FixedList<T>>
    where
        FixedList<T>: 'a,
    {
        touch();
        self.0.values()
    }
}
