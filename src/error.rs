use thiserror::Error;

/// The first failing visitor call of a search, paired with the item it failed on.
///
/// This only carries the visitor's error, it never wraps or annotates it:
/// `Display` forwards to the inner error, and `into_error` hands it back unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{error}")]
pub struct Failure<T, E> {
    /// The item whose visitor call failed.
    pub item: T,
    /// The error returned by that visitor call.
    pub error: E,
}

impl<T, E> Failure<T, E> {
    pub fn new(item: T, error: E) -> Self {
        Self { item, error }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn error(&self) -> &E {
        &self.error
    }

    pub fn into_error(self) -> E {
        self.error
    }

    pub fn into_parts(self) -> (T, E) {
        (self.item, self.error)
    }

    /// Converts the failing item, leaving the error untouched.
    pub fn map_item<U, F>(self, f: F) -> Failure<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Failure { item: f(self.item), error: self.error }
    }
}

impl<K, V, E> Failure<(K, V), E> {
    pub fn key(&self) -> &K {
        &self.item.0
    }

    pub fn value(&self) -> &V {
        &self.item.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as StdError;

    use str_macro::str;

    use crate::test_util::TestError;

    #[test]
    fn display_forwards_inner_error() {
        let failure = Failure::new("b", TestError::At(str!("b")));
        assert_eq!("error at b", failure.to_string());

        let failure = Failure::new(("b", 2), TestError::Sentinel);
        assert_eq!(TestError::Sentinel.to_string(), failure.to_string());
    }

    #[test]
    fn usable_as_std_error() {
        let failure: Box<dyn StdError> = Box::new(Failure::new(3, TestError::Sentinel));
        assert_eq!("sentinel error, only for testing", failure.to_string());
    }

    #[test]
    fn accessors() {
        let failure = Failure::new(("b", 2), TestError::Sentinel);

        assert_eq!(&"b", failure.key());
        assert_eq!(&2, failure.value());
        assert_eq!(&("b", 2), failure.item());
        assert_eq!(&TestError::Sentinel, failure.error());

        let failure = failure.map_item(|(k, v)| format!("{}={}", k, v));
        assert_eq!("b=2", failure.item);

        let (item, error) = failure.clone().into_parts();
        assert_eq!("b=2", item);
        assert_eq!(TestError::Sentinel, error);
        assert_eq!(TestError::Sentinel, failure.into_error());
    }
}
