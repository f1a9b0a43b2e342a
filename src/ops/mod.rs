//! Traversal and search operations over enumerators.
//!
//! All operations make a single synchronous pass over their source and stop as soon
//! as their exit condition is met: a predicate matching, or a visitor failing.

pub mod fallible;
pub(crate) mod halt;
pub mod search;
pub mod traverse;

pub use self::fallible::{
    find_first_error,
    find_first_map_error,
    for_each_error,
    for_each_map_error,
};
pub use self::search::{find_first, find_first_data, find_first_map, find_first_map_key};
pub use self::traverse::{for_each, for_each_map};
