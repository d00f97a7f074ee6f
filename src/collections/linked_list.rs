//! `LinkedList` — a singly linked list stored in an index arena.
//!
//! Nodes live in a `Vec` of slots and link to each other by index, so the list
//! needs no raw pointers. Removed nodes go onto a free list and their slots are
//! reused by later insertions.
//!
//! Performance Characteristics:
//! - `push_front` / `push_back` / `pop_front`: O(1)
//! - `contains` / `remove` / `remove_at`: O(n)
//! - `reverse`: O(n), relinks in place without moving values

use core::fmt;

/// A slot in the node arena.
#[derive(Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Free(Option<usize>),
}

/// Iterator over the values of a [`LinkedList`], head to tail.
pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match &self.list.slots[idx] {
            Slot::Occupied { value, next } => {
                self.current = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Free(_) => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> core::iter::FusedIterator for Iter<'_, T> {}

/// A singly linked list with O(1) insertion at both ends.
#[derive(Clone)]
pub struct LinkedList<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty list with room for `capacity` nodes before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the head value.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|idx| self.value(idx))
    }

    /// Returns an iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
            remaining: self.len,
        }
    }

    fn value(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => value,
            Slot::Free(_) => unreachable!("linked list reached a free slot"),
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        match &self.slots[idx] {
            Slot::Occupied { next, .. } => *next,
            Slot::Free(_) => unreachable!("linked list reached a free slot"),
        }
    }

    fn set_next(&mut self, idx: usize, link: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { next, .. } => *next = link,
            Slot::Free(_) => unreachable!("linked list reached a free slot"),
        }
    }

    /// Stores `value` in a free slot (or a new one) and returns its index.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        let slot = Slot::Occupied { value, next };
        match self.free_head {
            Some(idx) => {
                let Slot::Free(next_free) = self.slots[idx] else {
                    unreachable!("free list points to an occupied slot");
                };
                self.free_head = next_free;
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
                self.slots.len() - 1
            }
        }
    }

    /// Frees the slot at `idx` and returns the value it held.
    ///
    /// Callers must unlink the node before freeing it.
    fn free(&mut self, idx: usize) -> T {
        let slot = core::mem::replace(&mut self.slots[idx], Slot::Free(self.free_head));
        self.free_head = Some(idx);
        self.len -= 1;
        match slot {
            Slot::Occupied { value, .. } => value,
            Slot::Free(_) => unreachable!("double free of a linked list slot"),
        }
    }

    /// Inserts `value` at the head of the list.
    pub fn push_front(&mut self, value: T) {
        let idx = self.alloc(value, self.head);
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.len += 1;
    }

    /// Appends `value` at the tail of the list.
    pub fn push_back(&mut self, value: T) {
        let idx = self.alloc(value, None);
        match self.tail {
            Some(tail) => self.set_next(tail, Some(idx)),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Removes and returns the head value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_at(0)
    }

    /// Removes the node following `prev` (or the head when `prev` is `None`).
    fn unlink_after(&mut self, prev: Option<usize>, idx: usize) -> T {
        let next = self.next_of(idx);
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }
        self.free(idx)
    }

    /// Removes the element at position `pos` (0 is the head).
    ///
    /// Returns `None` if `pos` is past the end of the list.
    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        if pos >= self.len {
            return None;
        }
        let mut prev = None;
        let mut cur = self.head?;
        for _ in 0..pos {
            prev = Some(cur);
            cur = self.next_of(cur)?;
        }
        Some(self.unlink_after(prev, cur))
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            cur = self.next_of(idx);
            self.set_next(idx, prev);
            prev = Some(idx);
        }
        self.tail = self.head;
        self.head = prev;
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns `true` if the list contains `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Removes the first occurrence of `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.value(idx) == value {
                self.unlink_after(prev, idx);
                return true;
            }
            prev = Some(idx);
            cur = self.next_of(idx);
        }
        false
    }
}

impl<T: Clone> LinkedList<T> {
    /// Copies the values into a `Vec`, head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten() -> LinkedList<i32> {
        (0..10).collect()
    }

    #[test]
    fn push_back_preserves_order() {
        let list = ten();
        assert_eq!(list.len(), 10);
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
        assert_eq!(list.front(), Some(&0));
    }

    #[test]
    fn push_front_is_most_recent_first() {
        let mut list = LinkedList::new();
        list.push_front(5);
        list.push_front(1);
        list.push_front(2);
        list.push_back(9);
        assert_eq!(list.to_vec(), vec![2, 1, 5, 9]);
    }

    #[test]
    fn contains_and_missing() {
        let list = ten();
        for i in 0..10 {
            assert!(list.contains(&i));
        }
        assert!(!list.contains(&11));
        assert!(!LinkedList::<i32>::new().contains(&0));
    }

    #[test]
    fn remove_head_until_empty() {
        let mut list = ten();
        let mut i = 0;
        while !list.is_empty() {
            assert!(list.remove(&i));
            i += 1;
        }
        assert_eq!(i, 10);
        assert!(!list.remove(&0));
        assert_eq!(list.front(), None);
    }

    #[test]
    fn remove_only_first_occurrence() {
        let mut list: LinkedList<i32> = [3, 1, 3, 2].into_iter().collect();
        assert!(list.remove(&3));
        assert_eq!(list.to_vec(), vec![1, 3, 2]);
    }

    #[test]
    fn remove_tail_updates_tail() {
        let mut list = ten();
        assert!(list.remove(&9));
        list.push_back(42);
        assert_eq!(list.to_vec(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 42]);
    }

    #[test]
    fn remove_at_positions() {
        let mut list = ten();
        assert_eq!(list.remove_at(10), None);
        assert_eq!(list.remove_at(0), Some(0));
        assert_eq!(list.remove_at(3), Some(4));
        assert_eq!(list.remove_at(7), Some(9));
        assert_eq!(list.to_vec(), vec![1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(list.len(), 7);
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut list = ten();
        while list.pop_front().is_some() {}
        let slots = list.slots.len();
        list.extend(0..10);
        assert_eq!(list.slots.len(), slots);
        assert_eq!(list.to_vec(), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn reverse_in_place() {
        let mut list = ten();
        list.reverse();
        assert_eq!(list.to_vec(), (0..10).rev().collect::<Vec<_>>());
        list.push_back(-1);
        assert_eq!(list.iter().last(), Some(&-1));

        let mut single: LinkedList<i32> = std::iter::once(7).collect();
        single.reverse();
        assert_eq!(single.to_vec(), vec![7]);

        let mut empty = LinkedList::<i32>::new();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn clear_resets() {
        let mut list = ten();
        list.clear();
        assert!(list.is_empty());
        list.push_front(1);
        assert_eq!(list.to_vec(), vec![1]);
    }
}
