use std::ops::ControlFlow;

use crate::enumerator::{Enumerator, KeyedEnumerator};
use crate::ops::halt::{self, Halt};

/// Returns the first item of `source` that satisfies `predicate`.
///
/// The predicate sees exactly the items up to and including the first match; nothing
/// after the match is visited.
pub fn find_first<T, S, P>(source: &S, mut predicate: P) -> Option<T>
where
    S: Enumerator<T> + ?Sized,
    P: FnMut(&T) -> bool,
{
    let mut found = None;

    halt::drive(source, |_, item| {
        if predicate(&item) {
            found = Some(item);
            ControlFlow::Break(Halt::Matched)
        }
        else {
            ControlFlow::Continue(())
        }
    });

    found
}

/// Returns the emission index of the first item of `source` equal to `target`.
pub fn find_first_data<T, Q, S>(source: &S, target: Q) -> Option<usize>
where
    S: Enumerator<T> + ?Sized,
    T: PartialEq<Q>,
{
    let mut position = None;

    halt::drive(source, |index, item| {
        if item == target {
            position = Some(index);
            ControlFlow::Break(Halt::Matched)
        }
        else {
            ControlFlow::Continue(())
        }
    });

    position
}

/// Returns the first key/value pair of `source` that satisfies `predicate`.
pub fn find_first_map<K, V, S, P>(source: &S, mut predicate: P) -> Option<(K, V)>
where
    S: KeyedEnumerator<K, V> + ?Sized,
    P: FnMut(&K, &V) -> bool,
{
    let mut found = None;

    halt::drive_keyed(source, |_, key, value| {
        if predicate(&key, &value) {
            found = Some((key, value));
            ControlFlow::Break(Halt::Matched)
        }
        else {
            ControlFlow::Continue(())
        }
    });

    found
}

/// Returns the first key/value pair of `source` whose key equals `target`.
pub fn find_first_map_key<K, V, Q, S>(source: &S, target: Q) -> Option<(K, V)>
where
    S: KeyedEnumerator<K, V> + ?Sized,
    K: PartialEq<Q>,
{
    find_first_map(source, |key, _| *key == target)
}
