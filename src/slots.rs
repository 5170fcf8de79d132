use std::mem::MaybeUninit;
use std::ptr;

/// Contiguous storage whose first `len` slots are initialized.
///
/// This is the shared backing of [`FixedList`](crate::FixedList) and
/// [`GrowableList`](crate::GrowableList). It never reallocates on its own:
/// callers decide when to [`grow`](Slots::grow) and must check fullness
/// before calling [`insert`](Slots::insert).
pub(crate) struct Slots<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            len: 0,
            data: Box::new_uninit_slice(capacity),
        }
    }

    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len() {
            panic!("Index out of bounds: cannot insert at index {}", index);
        }

        if self.is_full() {
            panic!("Slots are full: cannot insert more elements");
        }

        unsafe {
            let data_ptr = self.data.as_mut_ptr();

            // Shift elements starting from the index to the right
            ptr::copy(
                data_ptr.add(index),
                data_ptr.add(index + 1),
                self.len() - index,
            );

            data_ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    pub fn remove(&mut self, index: usize) -> T {
        if index >= self.len() {
            panic!("Index out of bounds: cannot remove at index {}", index);
        }

        let value = unsafe { self.data[index].assume_init_read() };

        unsafe {
            // Shift elements from `index + 1` to fill the gap
            let data_ptr = self.data.as_mut_ptr();
            ptr::copy(
                data_ptr.add(index + 1),
                data_ptr.add(index),
                self.len() - index - 1,
            );
        }

        self.len -= 1;
        value
    }

    /// Moves the initialized prefix into a fresh allocation of `new_capacity` slots.
    pub fn grow(&mut self, new_capacity: usize) {
        assert!(new_capacity >= self.len());

        let mut data = Box::new_uninit_slice(new_capacity);
        unsafe {
            ptr::copy_nonoverlapping(self.data.as_ptr(), data.as_mut_ptr(), self.len());
        }

        // The old slots are `MaybeUninit`, so dropping them does not drop the moved values.
        self.data = data;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.data.as_ptr().cast::<T>(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), self.len) }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    pub fn clear(&mut self) {
        let len = self.len;

        // Forget the elements first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        unsafe {
            let tail = std::slice::from_raw_parts_mut(self.data.as_mut_ptr().cast::<T>(), len);
            ptr::drop_in_place(tail);
        }
    }
}

impl<T> Slots<T> {
    /// Turns the initialized prefix into an owning iterator without moving any element.
    pub fn into_values(mut self) -> IntoIter<T> {
        let back = std::mem::replace(&mut self.len, 0);
        let data = std::mem::take(&mut self.data);
        IntoIter {
            data,
            front: 0,
            back,
        }
    }
}

/// Owning iterator over the elements of a [`Slots`].
///
/// Slots in `front..back` are initialized; everything else has been moved out.
pub(crate) struct IntoIter<T> {
    data: Box<[MaybeUninit<T>]>,
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            std::slice::from_raw_parts(
                self.data.as_ptr().add(self.front).cast::<T>(),
                self.back - self.front,
            )
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        let value = unsafe { self.data[self.front].assume_init_read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        Some(unsafe { self.data[self.back].assume_init_read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T: Clone> Clone for IntoIter<T> {
    fn clone(&self) -> Self {
        let remaining = self.as_slice();
        let mut slots = Slots::with_capacity(remaining.len());
        for value in remaining {
            slots.insert(slots.len(), value.clone());
        }
        slots.into_values()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let len = self.back - self.front;

        // Forget the elements first so a panicking destructor cannot cause a double drop.
        let front = std::mem::replace(&mut self.front, self.back);
        unsafe {
            let remaining = ptr::slice_from_raw_parts_mut(
                self.data.as_mut_ptr().add(front).cast::<T>(),
                len,
            );
            ptr::drop_in_place(remaining);
        }
    }
}

impl<T: Clone> Clone for Slots<T> {
    fn clone(&self) -> Self {
        let mut this = Self::with_capacity(self.capacity());
        for value in self.as_slice() {
            this.insert(this.len(), value.clone());
        }
        this
    }
}

impl<T> Drop for Slots<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
