//! Drives an enumerator on behalf of an operation, latching the first stop request.
//!
//! Every operation funnels its per-item logic through `drive`/`drive_keyed`, which
//! guarantees that once a step asks to halt, no further item reaches the caller's
//! callback, even if the enumerator ignores the `Break` signal.

use std::ops::ControlFlow;

use strum::AsRefStr;
use tracing::{debug, trace};

use crate::enumerator::{Enumerator, KeyedEnumerator};

/// Why a traversal was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Halt {
    /// A predicate or equality check matched.
    Matched,
    /// A fallible visitor returned an error.
    Failed,
}

impl Halt {
    fn name(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Debug, Default)]
struct Latch {
    visited: usize,
    halt: Option<Halt>,
}

impl Latch {
    /// Passes one item through to `step`, unless the traversal has already halted.
    fn offer<T, S>(&mut self, item: T, step: S) -> ControlFlow<()>
    where
        S: FnOnce(usize, T) -> ControlFlow<Halt>,
    {
        if let Some(halt) = self.halt {
            debug!(
                halt = halt.name(),
                visited = self.visited,
                "enumerator emitted an item after being told to stop"
            );
            return ControlFlow::Break(());
        }

        let index = self.visited;
        self.visited += 1;

        match step(index, item) {
            ControlFlow::Continue(()) => ControlFlow::Continue(()),
            ControlFlow::Break(halt) => {
                trace!(halt = halt.name(), visited = self.visited, "enumeration halted");
                self.halt = Some(halt);
                ControlFlow::Break(())
            },
        }
    }

    fn finish(self, flow: ControlFlow<()>) {
        if self.halt.is_some() {
            return;
        }

        if flow.is_break() {
            debug!(visited = self.visited, "enumerator stopped without being asked to");
        }
        else {
            trace!(visited = self.visited, "enumeration completed");
        }
    }
}

/// Runs `source` to completion, or until `step` breaks, feeding each item along with
/// its 0-based emission index.
pub(crate) fn drive<T, E, S>(source: &E, mut step: S)
where
    E: Enumerator<T> + ?Sized,
    S: FnMut(usize, T) -> ControlFlow<Halt>,
{
    let mut latch = Latch::default();
    let flow = source.enumerate(&mut |item| latch.offer(item, &mut step));
    latch.finish(flow)
}

/// Keyed counterpart of `drive`.
pub(crate) fn drive_keyed<K, V, E, S>(source: &E, mut step: S)
where
    E: KeyedEnumerator<K, V> + ?Sized,
    S: FnMut(usize, K, V) -> ControlFlow<Halt>,
{
    let mut latch = Latch::default();
    let flow = source.enumerate(&mut |key, value| {
        latch.offer((key, value), |index, (key, value)| step(index, key, value))
    });
    latch.finish(flow)
}
