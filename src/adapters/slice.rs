use std::ops::ControlFlow;

use crate::enumerator::{Enumerator, Visit};

/// Enumerates the elements of a borrowed slice, in index order.
#[derive(Debug)]
pub struct Slice<'a, T>(&'a [T]);

/// Wraps an ordered sequence into an enumerator over references to its elements.
pub fn slice<T>(items: &[T]) -> Slice<'_, T> {
    Slice(items)
}

impl<'a, T> Slice<'a, T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.0
    }
}

// Manual impls, deriving would needlessly require `T: Clone`.
impl<'a, T> Clone for Slice<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Slice<'a, T> {}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Slice<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self(items.as_slice())
    }
}

impl<'a, T> Enumerator<&'a T> for Slice<'a, T> {
    fn enumerate(&self, visit: &mut Visit<'_, &'a T>) -> ControlFlow<()> {
        self.0.iter().try_for_each(|item| visit(item))
    }
}
