use crate::{ListError, Sequence};

struct Node<T> {
    value: T,
    prev: Option<usize>,
    next: Option<usize>,
}

enum Entry<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<usize> },
}

/// A doubly linked list whose nodes live in an index-addressed arena.
///
/// Links are arena indices rather than pointers, and vacated entries are
/// recycled through a free list. Both ends are O(1); index operations walk
/// from whichever end is nearer.
pub struct DoublyLinkedList<T> {
    entries: Vec<Entry<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    fn node(&self, entry: usize) -> &Node<T> {
        match &self.entries[entry] {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant entry"),
        }
    }

    fn node_mut(&mut self, entry: usize) -> &mut Node<T> {
        match &mut self.entries[entry] {
            Entry::Occupied(node) => node,
            Entry::Vacant { .. } => unreachable!("link points at a vacant entry"),
        }
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free {
            Some(entry) => {
                if let Entry::Vacant { next_free } = self.entries[entry] {
                    self.free = next_free;
                }
                self.entries[entry] = Entry::Occupied(node);
                entry
            }
            None => {
                self.entries.push(Entry::Occupied(node));
                self.entries.len() - 1
            }
        }
    }

    /// Finds the arena entry holding logical position `index`, `index < len`.
    fn entry_at(&self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }

        if index <= self.len / 2 {
            let mut entry = self.head?;
            for _ in 0..index {
                entry = self.node(entry).next?;
            }
            return Some(entry);
        }

        let mut entry = self.tail?;
        for _ in index + 1..self.len {
            entry = self.node(entry).prev?;
        }
        Some(entry)
    }

    /// Links `value` in front of `at`, or at the tail when `at` is `None`.
    fn link_before(&mut self, at: Option<usize>, value: T) {
        let prev = match at {
            Some(entry) => self.node(entry).prev,
            None => self.tail,
        };

        let entry = self.alloc(Node {
            value,
            prev,
            next: at,
        });

        match prev {
            Some(prev) => self.node_mut(prev).next = Some(entry),
            None => self.head = Some(entry),
        }

        match at {
            Some(next) => self.node_mut(next).prev = Some(entry),
            None => self.tail = Some(entry),
        }

        self.len += 1;
    }

    fn unlink(&mut self, entry: usize) -> T {
        let vacant = Entry::Vacant {
            next_free: self.free,
        };

        let Entry::Occupied(node) = std::mem::replace(&mut self.entries[entry], vacant) else {
            unreachable!("unlinking a vacant entry");
        };
        self.free = Some(entry);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }

        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node.value
    }
}

/// A borrowing iterator over a [`DoublyLinkedList`], usable from both ends.
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Sequence<T> for DoublyLinkedList<T> {
    fn add_front(&mut self, item: T) -> Result<(), ListError> {
        self.link_before(self.head, item);
        Ok(())
    }

    fn add_back(&mut self, item: T) -> Result<(), ListError> {
        self.link_before(None, item);
        Ok(())
    }

    fn add_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        ListError::check_inclusive(index, self.len)?;
        let at = self.entry_at(index);
        self.link_before(at, item);
        Ok(())
    }

    fn remove_front(&mut self) -> Result<T, ListError> {
        let entry = self.head.ok_or(ListError::Empty)?;
        Ok(self.unlink(entry))
    }

    fn remove_back(&mut self) -> Result<T, ListError> {
        let entry = self.tail.ok_or(ListError::Empty)?;
        Ok(self.unlink(entry))
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len;
        ListError::check_exclusive(index, len)?;
        let entry = self.entry_at(index).ok_or(ListError::Index { index, len })?;
        Ok(self.unlink(entry))
    }

    fn get_front(&self) -> Result<&T, ListError> {
        let entry = self.head.ok_or(ListError::Empty)?;
        Ok(&self.node(entry).value)
    }

    fn get_back(&self) -> Result<&T, ListError> {
        let entry = self.tail.ok_or(ListError::Empty)?;
        Ok(&self.node(entry).value)
    }

    fn get_at(&self, index: usize) -> Result<&T, ListError> {
        ListError::check_exclusive(index, self.len)?;
        let entry = self.entry_at(index).ok_or(ListError::Index {
            index,
            len: self.len,
        })?;
        Ok(&self.node(entry).value)
    }

    fn get_at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len;
        ListError::check_exclusive(index, len)?;
        let entry = self.entry_at(index).ok_or(ListError::Index { index, len })?;
        Ok(&mut self.node_mut(entry).value)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn values<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.link_before(None, value);
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{DoublyLinkedList, ListError, Sequence};

    fn contents<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_add_front_and_back() {
        let mut sut = DoublyLinkedList::new();
        sut.add_back(2).unwrap();
        sut.add_front(1).unwrap();
        sut.add_back(3).unwrap();

        assert_eq!(contents(&sut), [1, 2, 3]);
        assert_eq!(sut.get_front(), Ok(&1));
        assert_eq!(sut.get_back(), Ok(&3));
        assert_eq!(sut.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    }

    #[test]
    fn test_add_at_every_position() {
        for index in 0..=5 {
            let mut sut: DoublyLinkedList<_> = (0..5).collect();
            sut.add_at(index, 42).unwrap();

            let mut expected = vec![0, 1, 2, 3, 4];
            expected.insert(index, 42);
            assert_eq!(contents(&sut), expected);
            assert_eq!(sut.iter().rev().count(), 6);
        }

        let mut sut: DoublyLinkedList<i32> = (0..3).collect();
        assert_eq!(sut.add_at(4, 42), Err(ListError::Index { index: 4, len: 3 }));
    }

    #[test]
    fn test_get_at_walks_from_both_ends() {
        let sut: DoublyLinkedList<_> = (0..9).collect();
        for index in 0..9 {
            assert_eq!(sut.get_at(index), Ok(&index));
        }
        assert_eq!(sut.get_at(9), Err(ListError::Index { index: 9, len: 9 }));
    }

    #[test]
    fn test_remove_from_every_position() {
        for index in 0..5 {
            let mut sut: DoublyLinkedList<_> = (0..5).collect();
            assert_eq!(sut.remove_at(index), Ok(index));

            let mut expected = vec![0, 1, 2, 3, 4];
            expected.remove(index);
            assert_eq!(contents(&sut), expected);
            assert_eq!(
                sut.iter().rev().copied().collect::<Vec<_>>(),
                expected.iter().rev().copied().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_vacant_entries_are_recycled() {
        let mut sut: DoublyLinkedList<_> = (0..4).collect();
        sut.remove_at(1).unwrap();
        sut.remove_front().unwrap();
        sut.add_back(7).unwrap();
        sut.add_front(8).unwrap();

        assert_eq!(sut.entries.len(), 4);
        assert_eq!(contents(&sut), [8, 2, 3, 7]);
    }

    #[test]
    fn test_operations_on_empty_list_report_emptiness() {
        let mut sut: DoublyLinkedList<i32> = DoublyLinkedList::new();
        assert_eq!(sut.remove_front(), Err(ListError::Empty));
        assert_eq!(sut.remove_back(), Err(ListError::Empty));
        assert_eq!(sut.remove_at(0), Err(ListError::Empty));
        assert_eq!(sut.get_front(), Err(ListError::Empty));
        assert_eq!(sut.get_back(), Err(ListError::Empty));
        assert!(sut.is_empty());
    }

    #[test]
    fn test_draining_both_ends_leaves_consistent_links() {
        let mut sut: DoublyLinkedList<_> = (0..4).collect();
        assert_eq!(sut.remove_back(), Ok(3));
        assert_eq!(sut.remove_front(), Ok(0));
        assert_eq!(sut.remove_back(), Ok(2));
        assert_eq!(sut.remove_front(), Ok(1));
        assert!(sut.is_empty());
        assert_eq!(sut.head, None);
        assert_eq!(sut.tail, None);

        sut.add_back(5).unwrap();
        assert_eq!(sut.get_front(), Ok(&5));
        assert_eq!(sut.get_back(), Ok(&5));
        assert_eq!(format!("{:?}", sut), "[5]");
    }
}
