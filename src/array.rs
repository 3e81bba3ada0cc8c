use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};

use crate::error::{DynArrayError, Result};
use crate::growth::{needs_resize, slots_to_add};
use crate::iter::{DynArrayIter, IntoIter};

/// A growable array that keeps its logical length apart from the capacity
/// of its backing buffer.
///
/// Slots below `len` always hold an element; slots from `len` up to the
/// capacity are filler and hold `None`.
#[derive(Clone)]
pub struct DynArray<T> {
    buffer: Box<[Option<T>]>,
    len: usize,
}

fn empty_slots<T>(count: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(count).collect()
}

impl<T> DynArray<T> {
    /// Creates an empty array with capacity 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: empty_slots(0),
            len: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, always at least `len()`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn occupied(&self) -> &[Option<T>] {
        &self.buffer[..self.len]
    }

    pub(crate) fn into_slots(self) -> Vec<Option<T>> {
        let mut slots = self.buffer.into_vec();
        slots.truncate(self.len);
        slots
    }

    /// Maps a negative index to `index + len`. Returns `None` if the result
    /// is still negative.
    fn resolve_index(&self, index: isize) -> Option<usize> {
        let resolved = if index < 0 {
            index.checked_add_unsigned(self.len)?
        } else {
            index
        };
        usize::try_from(resolved).ok()
    }

    fn checked_index(&self, index: isize) -> Result<usize> {
        match self.resolve_index(index) {
            Some(position) if position < self.len => Ok(position),
            _ => Err(DynArrayError::IndexOutOfRange {
                index,
                length: self.len,
            }),
        }
    }

    #[allow(clippy::expect_used)]
    fn element(&self, position: usize) -> &T {
        self.buffer[position]
            .as_ref()
            .expect("Slots below len are always occupied")
    }

    #[allow(clippy::expect_used)]
    fn element_mut(&mut self, position: usize) -> &mut T {
        self.buffer[position]
            .as_mut()
            .expect("Slots below len are always occupied")
    }

    #[allow(clippy::expect_used)]
    fn take_element(&mut self, position: usize) -> T {
        self.buffer[position]
            .take()
            .expect("Slots below len are always occupied")
    }

    /// Replaces the buffer with a larger one. The existing elements are moved
    /// to start at `offset`, leaving `offset` filler slots in front of them.
    fn grow(&mut self, offset: usize, slots_needed: usize) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity + slots_to_add(offset, slots_needed);
        trace!(
            "Growing dynarray: capacity {old_capacity} -> {new_capacity}, offset {offset}, slots needed {slots_needed}"
        );

        let mut buffer = empty_slots(new_capacity);
        buffer[offset..offset + self.len].swap_with_slice(&mut self.buffer[..self.len]);
        self.buffer = buffer;
    }

    fn reserve_back(&mut self, slots_needed: usize) {
        if needs_resize(self.len, self.capacity(), slots_needed) {
            self.grow(0, slots_needed);
        }
    }

    /// Frees `count` slots at the front. Growing already leaves them free;
    /// otherwise the elements are shifted right, last one first.
    fn open_front(&mut self, count: usize) {
        if needs_resize(self.len, self.capacity(), count) {
            self.grow(count, count);
        } else {
            self.buffer[..self.len + count].rotate_right(count);
        }
    }

    /// Adds an element at the back, growing the buffer if it is full.
    pub fn append(&mut self, item: T) {
        self.reserve_back(1);
        self.buffer[self.len] = Some(item);
        self.len += 1;
    }

    /// Same as [`DynArray::append`].
    pub fn push(&mut self, item: T) {
        self.append(item);
    }

    /// Adds an element at the front.
    ///
    /// When the buffer is full, the resize itself reserves the front slot, so
    /// no separate shift is needed.
    pub fn prepend(&mut self, item: T) {
        self.open_front(1);
        self.buffer[0] = Some(item);
        self.len += 1;
    }

    /// Inserts `items` at the front, keeping their order.
    pub fn prepend_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        if items.is_empty() {
            return;
        }

        self.open_front(items.len());
        for (slot, item) in self.buffer[..items.len()].iter_mut().zip(items) {
            *slot = Some(item.clone());
        }
        self.len += items.len();
    }

    /// Appends `items` at the back, keeping their order.
    pub fn extend_from_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        if items.is_empty() {
            return;
        }

        self.reserve_back(items.len());
        let end = self.len + items.len();
        for (slot, item) in self.buffer[self.len..end].iter_mut().zip(items) {
            *slot = Some(item.clone());
        }
        self.len = end;
    }

    /// Same as [`DynArray::extend_from_slice`].
    pub fn add(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.extend_from_slice(items);
    }

    /// Inserts an element before position `index`.
    ///
    /// A negative `index` counts from the end, so `-1` inserts before the
    /// last element. An index at or past `len()` appends; an index that is
    /// still negative after conversion prepends.
    pub fn insert(&mut self, index: isize, item: T) {
        let position = self.resolve_index(index).unwrap_or(0);
        self.reserve_back(1);

        if position >= self.len {
            self.buffer[self.len] = Some(item);
        } else {
            self.buffer[position..=self.len].rotate_right(1);
            self.buffer[position] = Some(item);
        }
        self.len += 1;
    }

    /// Overwrites the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index`, after negative
    /// conversion, is not below `len()`.
    pub fn set(&mut self, index: isize, item: T) -> Result<T> {
        let position = self.checked_index(index)?;
        Ok(core::mem::replace(self.element_mut(position), item))
    }

    /// Gets the element at `index`. Negative indices count from the end.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index`, after negative
    /// conversion, is not below `len()`.
    pub fn get(&self, index: isize) -> Result<&T> {
        let position = self.checked_index(index)?;
        Ok(self.element(position))
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` under the same conditions as
    /// [`DynArray::get`].
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T> {
        let position = self.checked_index(index)?;
        Ok(self.element_mut(position))
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.iter().next()
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Drops all elements and releases the buffer. Capacity becomes 0.
    pub fn clear(&mut self) {
        if self.len > 0 {
            debug!("Clearing dynarray of {} elements", self.len);
        }
        self.buffer = empty_slots(0);
        self.len = 0;
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::EmptyArray` if the array is empty.
    pub fn pop(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(DynArrayError::EmptyArray);
        }

        self.len -= 1;
        Ok(self.take_element(self.len))
    }

    /// Removes the element at `index`, shifting the following elements left.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index` is not below `len()`.
    pub fn delete(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(DynArrayError::IndexOutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                length: self.len,
            });
        }

        let removed = self.take_element(index);
        self.buffer[index..self.len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Reverses the order of the elements.
    pub fn reverse(&mut self) {
        self.buffer[..self.len].reverse();
    }

    /// Returns an independent array with the same elements, length and
    /// capacity. Elements are copied with `T::clone`.
    #[must_use]
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.clone()
    }

    /// Returns the elements as a `Vec` sized exactly to `len()`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> DynArrayIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> core::iter::Rev<DynArrayIter<'_, T>> {
        self.iter().rev()
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Position of the first element equal to `item`.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Number of elements equal to `item`.
    #[must_use]
    pub fn count(&self, item: &T) -> usize {
        self.iter().filter(|element| *element == item).count()
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns `Ok(None)` and leaves the array unchanged if no element matches.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::EmptyArray` if the array is empty.
    pub fn remove(&mut self, item: &T) -> Result<Option<T>> {
        if self.len == 0 {
            return Err(DynArrayError::EmptyArray);
        }

        match self.index_of(item) {
            Some(position) => self.delete(position).map(Some),
            None => Ok(None),
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for DynArray<T> {
    fn from(items: Vec<T>) -> Self {
        let len = items.len();
        Self {
            buffer: items.into_iter().map(Some).collect(),
            len,
        }
    }
}

impl<T: Clone> From<&[T]> for DynArray<T> {
    fn from(items: &[T]) -> Self {
        Self {
            buffer: items.iter().cloned().map(Some).collect(),
            len: items.len(),
        }
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.reserve_back(lower);
        }
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders the elements as `[a,b,c]`.
impl<T: fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}
