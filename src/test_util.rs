#![cfg(test)]

use std::collections::HashMap;
use std::ops::ControlFlow;

use maplit::hashmap;
use thiserror::Error;

use crate::enumerator::{from_fn, Enumerator, KeyedEnumerator, KeyedVisit, Visit};

/// Injected failure for fallible visitor tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum TestError {
    #[error("error at {0}")]
    At(String),
    #[error("sentinel error, only for testing")]
    Sentinel,
}

/// A caller-defined type exposing its fields through the enumerator shape.
pub(crate) struct Fields {
    names: Vec<&'static str>,
}

impl Enumerator<&'static str> for Fields {
    fn enumerate(&self, visit: &mut Visit<'_, &'static str>) -> ControlFlow<()> {
        for name in self.names.iter() {
            visit(*name)?;
        }

        ControlFlow::Continue(())
    }
}

/// A caller-defined type exposing a mapping through the keyed enumerator shape.
pub(crate) struct Scores {
    scores: HashMap<&'static str, i32>,
}

impl KeyedEnumerator<&'static str, i32> for Scores {
    fn enumerate(&self, visit: &mut KeyedVisit<'_, &'static str, i32>) -> ControlFlow<()> {
        for (name, score) in self.scores.iter() {
            visit(*name, *score)?;
        }

        ControlFlow::Continue(())
    }
}

pub(crate) struct TestUtil;

impl TestUtil {
    pub const FIELDS: [&'static str; 3] = ["a", "b", "c"];

    pub fn fields() -> Fields {
        Fields { names: Self::FIELDS.to_vec() }
    }

    pub fn score_map() -> HashMap<&'static str, i32> {
        hashmap!{"a" => 1, "b" => 2, "c" => 3}
    }

    pub fn scores() -> Scores {
        Scores { scores: Self::score_map() }
    }

    /// Emits `"1"` through `"4"`, in order.
    pub fn digits() -> impl Enumerator<&'static str> {
        from_fn(|visit| {
            visit("1")?;
            visit("2")?;
            visit("3")?;
            visit("4")?;
            ControlFlow::Continue(())
        })
    }
}
