//! Adapters that present plain containers in the enumerator shape.

pub mod map;
pub mod slice;

pub use self::map::{map, pairs, Map, Pairs};
pub use self::slice::{slice, Slice};
