//! Short-circuiting traversal helpers over push-style enumerators.
//!
//! An enumerator is any source that pushes its items into a callback, rather than
//! being pulled from like an `Iterator`. Caller-defined types implement `Enumerator`
//! or `KeyedEnumerator` directly, closures are lifted with `from_fn`/`from_keyed_fn`,
//! and plain slices and maps are adapted with `slice`, `pairs` and `map`. Every
//! operation then works the same way over all of them.
//!
//! ```
//! use iterate::{find_first_data, find_first_map_key, for_each, map, slice};
//! use std::collections::BTreeMap;
//!
//! let fields = ["a", "b", "c"];
//!
//! let mut line = String::new();
//! for_each(&slice(&fields), |d| line.push_str(d));
//! assert_eq!("abc", line);
//!
//! assert_eq!(Some(1), find_first_data(&slice(&fields), &"b"));
//! assert_eq!(None, find_first_data(&slice(&fields), &"z"));
//!
//! let scores: BTreeMap<_, _> = vec![("a", 1), ("b", 2)].into_iter().collect();
//! assert_eq!(Some((&"b", &2)), find_first_map_key(&map(&scores), &"b"));
//! ```

pub mod adapters;
pub mod enumerator;
pub mod error;
pub mod ops;

mod test_util;

pub use crate::adapters::{map, pairs, slice, Map, Pairs, Slice};
pub use crate::enumerator::{
    from_fn,
    from_keyed_fn,
    Enumerator,
    FromFn,
    FromKeyedFn,
    KeyedEnumerator,
    KeyedVisit,
    Visit,
};
pub use crate::error::Failure;
pub use crate::ops::{
    find_first,
    find_first_data,
    find_first_error,
    find_first_map,
    find_first_map_error,
    find_first_map_key,
    for_each,
    for_each_error,
    for_each_map,
    for_each_map_error,
};
