//! The push-style enumeration shape shared by every operation in this crate.

use std::ops::ControlFlow;

/// Per-item callback handed to an enumerator.
/// Returning `ControlFlow::Break(())` asks the enumerator to stop emitting items.
pub type Visit<'v, T> = dyn FnMut(T) -> ControlFlow<()> + 'v;

/// Per-pair callback handed to a keyed enumerator.
pub type KeyedVisit<'v, K, V> = dyn FnMut(K, V) -> ControlFlow<()> + 'v;

/// A source that pushes its items, one at a time and in its own natural order,
/// into a caller-supplied callback.
///
/// Implementations must call `visit` synchronously, before returning, and must stop
/// calling it as soon as it returns `Break`. The simplest way to honor that is to
/// forward the signal with `?`:
///
/// ```
/// use std::ops::ControlFlow;
/// use iterate::{Enumerator, Visit};
///
/// struct Fields(Vec<&'static str>);
///
/// impl Enumerator<&'static str> for Fields {
///     fn enumerate(&self, visit: &mut Visit<'_, &'static str>) -> ControlFlow<()> {
///         for name in self.0.iter() {
///             visit(*name)?;
///         }
///
///         ControlFlow::Continue(())
///     }
/// }
/// ```
pub trait Enumerator<T> {
    /// Emits every item into `visit`, returning `Break` if the traversal was cut short.
    fn enumerate(&self, visit: &mut Visit<'_, T>) -> ControlFlow<()>;
}

/// A source that pushes key/value pairs into a caller-supplied callback.
/// Same contract as `Enumerator`, with the item split into a key and a value.
pub trait KeyedEnumerator<K, V> {
    fn enumerate(&self, visit: &mut KeyedVisit<'_, K, V>) -> ControlFlow<()>;
}

impl<'a, T, E> Enumerator<T> for &'a E
where
    E: Enumerator<T> + ?Sized,
{
    fn enumerate(&self, visit: &mut Visit<'_, T>) -> ControlFlow<()> {
        (**self).enumerate(visit)
    }
}

impl<T, E> Enumerator<T> for Box<E>
where
    E: Enumerator<T> + ?Sized,
{
    fn enumerate(&self, visit: &mut Visit<'_, T>) -> ControlFlow<()> {
        (**self).enumerate(visit)
    }
}

impl<'a, K, V, E> KeyedEnumerator<K, V> for &'a E
where
    E: KeyedEnumerator<K, V> + ?Sized,
{
    fn enumerate(&self, visit: &mut KeyedVisit<'_, K, V>) -> ControlFlow<()> {
        (**self).enumerate(visit)
    }
}

impl<K, V, E> KeyedEnumerator<K, V> for Box<E>
where
    E: KeyedEnumerator<K, V> + ?Sized,
{
    fn enumerate(&self, visit: &mut KeyedVisit<'_, K, V>) -> ControlFlow<()> {
        (**self).enumerate(visit)
    }
}

/// An enumerator backed by a closure. Created by `from_fn`.
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

/// Wraps a closure of the enumerator shape, so that any callable conforms
/// without needing a named type.
///
/// ```
/// use std::ops::ControlFlow;
///
/// let digits = iterate::from_fn(|visit| {
///     visit(1)?;
///     visit(2)?;
///     ControlFlow::Continue(())
/// });
///
/// assert_eq!(iterate::find_first(&digits, |d| *d > 1), Some(2));
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn(&mut Visit<'_, T>) -> ControlFlow<()>,
{
    FromFn(f)
}

impl<T, F> Enumerator<T> for FromFn<F>
where
    F: Fn(&mut Visit<'_, T>) -> ControlFlow<()>,
{
    fn enumerate(&self, visit: &mut Visit<'_, T>) -> ControlFlow<()> {
        (self.0)(visit)
    }
}

impl<F> std::fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// A keyed enumerator backed by a closure. Created by `from_keyed_fn`.
#[derive(Clone, Copy)]
pub struct FromKeyedFn<F>(F);

/// Keyed counterpart of `from_fn`.
pub fn from_keyed_fn<K, V, F>(f: F) -> FromKeyedFn<F>
where
    F: Fn(&mut KeyedVisit<'_, K, V>) -> ControlFlow<()>,
{
    FromKeyedFn(f)
}

impl<K, V, F> KeyedEnumerator<K, V> for FromKeyedFn<F>
where
    F: Fn(&mut KeyedVisit<'_, K, V>) -> ControlFlow<()>,
{
    fn enumerate(&self, visit: &mut KeyedVisit<'_, K, V>) -> ControlFlow<()> {
        (self.0)(visit)
    }
}

impl<F> std::fmt::Debug for FromKeyedFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("FromKeyedFn").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_util::TestUtil;

    fn collect<T, E: Enumerator<T> + ?Sized>(source: &E) -> Vec<T> {
        let mut produced = Vec::new();
        let flow = source.enumerate(&mut |item| {
            produced.push(item);
            ControlFlow::Continue(())
        });

        assert_eq!(ControlFlow::Continue(()), flow);
        produced
    }

    #[test]
    fn enumerate_closure() {
        let source = from_fn(|visit| {
            visit("a")?;
            visit("b")?;
            visit("c")?;
            ControlFlow::Continue(())
        });

        assert_eq!(vec!["a", "b", "c"], collect(&source));

        // Enumerating again replays the same items.
        assert_eq!(vec!["a", "b", "c"], collect(&source));
    }

    #[test]
    fn enumerate_stops_on_break() {
        let source = from_fn(|visit| {
            for i in 0..10 {
                visit(i)?;
            }
            ControlFlow::Continue(())
        });

        let mut seen = Vec::new();
        let flow = source.enumerate(&mut |i| {
            seen.push(i);
            if i == 3 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });

        assert_eq!(ControlFlow::Break(()), flow);
        assert_eq!(vec![0, 1, 2, 3], seen);
    }

    #[test]
    fn enumerate_through_indirection() {
        let fields = TestUtil::fields();
        let expected = TestUtil::FIELDS.to_vec();

        let by_ref: &dyn Enumerator<&str> = &fields;
        assert_eq!(expected, collect(by_ref));
        assert_eq!(expected, collect(&by_ref));

        let boxed: Box<dyn Enumerator<&str>> = Box::new(TestUtil::fields());
        assert_eq!(expected, collect(&boxed));
    }

    #[test]
    fn enumerate_keyed_closure() {
        let source = from_keyed_fn(|visit| {
            visit("a", 1)?;
            visit("b", 2)?;
            ControlFlow::Continue(())
        });

        let mut produced = Vec::new();
        let flow = source.enumerate(&mut |k, v| {
            produced.push((k, v));
            ControlFlow::Continue(())
        });

        assert_eq!(ControlFlow::Continue(()), flow);
        assert_eq!(vec![("a", 1), ("b", 2)], produced);

        let boxed: Box<dyn KeyedEnumerator<&str, i32>> = Box::new(source);
        let mut count = 0;
        let _ = (&boxed).enumerate(&mut |_, _| {
            count += 1;
            ControlFlow::Continue(())
        });
        assert_eq!(2, count);
    }
}
