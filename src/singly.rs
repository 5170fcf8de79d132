use crate::{ListError, Sequence};

struct Node<T> {
    value: T,
    next: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// A singly linked list owning its nodes from the head.
///
/// Front operations are O(1); everything else walks the chain.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let mut link = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = link?;
            link = node.next.as_deref();
            Some(&node.value)
        })
    }

    pub fn clear(&mut self) {
        // Unlink iteratively; dropping a long chain recursively would overflow the stack.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Returns the link slot that holds position `index`, `index <= len`.
    fn link_at(&mut self, index: usize) -> &mut Link<T> {
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("link_at called past the end of the list"),
            }
        }
        link
    }

    fn node_at(&self, index: usize) -> Option<&Node<T>> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(node)
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index {
            node = node.next.as_deref_mut()?;
        }
        Some(node)
    }
}

impl<T> Sequence<T> for SinglyLinkedList<T> {
    fn add_front(&mut self, item: T) -> Result<(), ListError> {
        let next = self.head.take();
        self.head = Some(Box::new(Node { value: item, next }));
        self.len += 1;
        Ok(())
    }

    fn add_back(&mut self, item: T) -> Result<(), ListError> {
        self.add_at(self.len, item)
    }

    fn add_at(&mut self, index: usize, item: T) -> Result<(), ListError> {
        ListError::check_inclusive(index, self.len)?;

        let link = self.link_at(index);
        let next = link.take();
        *link = Some(Box::new(Node { value: item, next }));
        self.len += 1;
        Ok(())
    }

    fn remove_front(&mut self) -> Result<T, ListError> {
        self.remove_at(0)
    }

    fn remove_back(&mut self) -> Result<T, ListError> {
        let index = self.len.checked_sub(1).ok_or(ListError::Empty)?;
        self.remove_at(index)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len;
        ListError::check_exclusive(index, len)?;

        let link = self.link_at(index);
        let node = link.take().ok_or(ListError::Index { index, len })?;
        *link = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    fn get_at(&self, index: usize) -> Result<&T, ListError> {
        ListError::check_exclusive(index, self.len)?;
        self.node_at(index)
            .map(|node| &node.value)
            .ok_or(ListError::Index {
                index,
                len: self.len,
            })
    }

    fn get_at_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len;
        ListError::check_exclusive(index, len)?;
        self.node_at_mut(index)
            .map(|node| &mut node.value)
            .ok_or(ListError::Index { index, len })
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

    fn into_vec(mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len);
        while let Ok(value) = self.remove_front() {
            values.push(value);
        }
        values
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let len = self.len;
        let mut link = self.link_at(len);
        let mut added = 0;
        for value in iter {
            let node = link.insert(Box::new(Node { value, next: None }));
            link = &mut node.next;
            added += 1;
        }
        self.len += added;
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
