use std::ops::ControlFlow;

use crate::enumerator::{Enumerator, KeyedEnumerator};
use crate::error::Failure;
use crate::ops::halt::{self, Halt};

/// Runs `visit` on each item of `source` in order, stopping at the first error.
/// The failing item is returned alongside its error.
pub fn find_first_error<T, S, F, E>(source: &S, mut visit: F) -> Result<(), Failure<T, E>>
where
    S: Enumerator<T> + ?Sized,
    F: FnMut(&T) -> Result<(), E>,
{
    let mut failure = None;

    halt::drive(source, |_, item| match visit(&item) {
        Ok(()) => ControlFlow::Continue(()),
        Err(error) => {
            failure = Some(Failure::new(item, error));
            ControlFlow::Break(Halt::Failed)
        },
    });

    failure.map_or(Ok(()), Err)
}

/// Runs `visit` on each item of `source` in order, stopping at and returning the
/// first error as-is.
pub fn for_each_error<T, S, F, E>(source: &S, mut visit: F) -> Result<(), E>
where
    S: Enumerator<T> + ?Sized,
    F: FnMut(T) -> Result<(), E>,
{
    let mut outcome = Ok(());

    halt::drive(source, |_, item| match visit(item) {
        Ok(()) => ControlFlow::Continue(()),
        Err(error) => {
            outcome = Err(error);
            ControlFlow::Break(Halt::Failed)
        },
    });

    outcome
}

/// Keyed counterpart of `find_first_error`.
pub fn find_first_map_error<K, V, S, F, E>(
    source: &S,
    mut visit: F,
) -> Result<(), Failure<(K, V), E>>
where
    S: KeyedEnumerator<K, V> + ?Sized,
    F: FnMut(&K, &V) -> Result<(), E>,
{
    let mut failure = None;

    halt::drive_keyed(source, |_, key, value| match visit(&key, &value) {
        Ok(()) => ControlFlow::Continue(()),
        Err(error) => {
            failure = Some(Failure::new((key, value), error));
            ControlFlow::Break(Halt::Failed)
        },
    });

    failure.map_or(Ok(()), Err)
}

/// Keyed counterpart of `for_each_error`.
pub fn for_each_map_error<K, V, S, F, E>(source: &S, mut visit: F) -> Result<(), E>
where
    S: KeyedEnumerator<K, V> + ?Sized,
    F: FnMut(K, V) -> Result<(), E>,
{
    let mut outcome = Ok(());

    halt::drive_keyed(source, |_, key, value| match visit(key, value) {
        Ok(()) => ControlFlow::Continue(()),
        Err(error) => {
            outcome = Err(error);
            ControlFlow::Break(Halt::Failed)
        },
    });

    outcome
}
