use std::ops::ControlFlow;

use crate::enumerator::{KeyedEnumerator, KeyedVisit};

/// Enumerates the key/value pairs of a borrowed mapping, in whatever order the
/// mapping natively iterates.
///
/// Any mapping whose shared reference iterates as `(&K, &V)` is supported, which
/// includes `HashMap`, `BTreeMap` and `IndexMap`.
#[derive(Debug)]
pub struct Map<'a, M: ?Sized>(&'a M);

/// Wraps a key/value mapping into a keyed enumerator over references to its entries.
pub fn map<M: ?Sized>(mapping: &M) -> Map<'_, M> {
    Map(mapping)
}

impl<'a, M: ?Sized> Clone for Map<'a, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: ?Sized> Copy for Map<'a, M> {}

impl<'a, K, V, M> KeyedEnumerator<&'a K, &'a V> for Map<'a, M>
where
    K: 'a,
    V: 'a,
    M: ?Sized,
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
{
    fn enumerate(&self, visit: &mut KeyedVisit<'_, &'a K, &'a V>) -> ControlFlow<()> {
        self.0.into_iter().try_for_each(|(k, v)| visit(k, v))
    }
}

/// Enumerates a slice of key/value pairs, in index order.
/// Keys are not required to be unique.
#[derive(Debug)]
pub struct Pairs<'a, K, V>(&'a [(K, V)]);

/// Wraps an ordered sequence of pairs into a keyed enumerator.
pub fn pairs<K, V>(entries: &[(K, V)]) -> Pairs<'_, K, V> {
    Pairs(entries)
}

impl<'a, K, V> Clone for Pairs<'a, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K, V> Copy for Pairs<'a, K, V> {}

impl<'a, K, V> KeyedEnumerator<&'a K, &'a V> for Pairs<'a, K, V> {
    fn enumerate(&self, visit: &mut KeyedVisit<'_, &'a K, &'a V>) -> ControlFlow<()> {
        self.0.iter().try_for_each(|(k, v)| visit(k, v))
    }
}
