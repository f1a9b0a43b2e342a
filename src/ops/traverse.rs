use std::ops::ControlFlow;

use crate::enumerator::{Enumerator, KeyedEnumerator};
use crate::ops::halt;

/// Calls `visit` on every item of `source`, in emission order.
pub fn for_each<T, S, F>(source: &S, mut visit: F)
where
    S: Enumerator<T> + ?Sized,
    F: FnMut(T),
{
    halt::drive(source, |_, item| {
        visit(item);
        ControlFlow::Continue(())
    });
}

/// Calls `visit` on every key/value pair of `source`, in emission order.
pub fn for_each_map<K, V, S, F>(source: &S, mut visit: F)
where
    S: KeyedEnumerator<K, V> + ?Sized,
    F: FnMut(K, V),
{
    halt::drive_keyed(source, |_, key, value| {
        visit(key, value);
        ControlFlow::Continue(())
    });
}
