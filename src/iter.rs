use alloc::vec;

use crate::array::DynArray;

/// Iterator over the elements of a `DynArray`
///
/// This iterator implements `Clone`.
#[derive(Debug)]
pub struct DynArrayIter<'a, T> {
    slots: core::slice::Iter<'a, Option<T>>,
}

impl<T> Clone for DynArrayIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for DynArrayIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for DynArrayIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?.as_ref()
    }
}

impl<T> ExactSizeIterator for DynArrayIter<'_, T> {}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = DynArrayIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DynArrayIter {
            slots: self.occupied().iter(),
        }
    }
}

/// Owning iterator over the elements of a `DynArray`
#[derive(Debug)]
pub struct IntoIter<T> {
    slots: vec::IntoIter<Option<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(array: DynArray<T>) -> Self {
        Self {
            slots: array.into_slots().into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next()?
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back()?
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
