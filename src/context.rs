use std::{collections::BTreeMap, sync::Arc};

use crate::{any::AnyValue, key::Key};

/// Caller-supplied seed values merged into a `create` call.
///
/// A seeded key is never looked up in the modules: seeds win over
/// container-resolved values.
#[derive(Default, Clone)]
pub struct Context {
    pub(crate) map: BTreeMap<Key, AnyValue>,
}

impl Context {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert<T: Send + Sync + 'static>(&mut self, key: impl Into<Key>, value: T) -> Option<AnyValue> {
        self.map.insert(key.into(), Arc::new(value))
    }

    #[inline]
    #[must_use]
    pub fn with<T: Send + Sync + 'static>(mut self, key: impl Into<Key>, value: T) -> Self {
        self.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Context;

    #[test]
    fn test_seed_overwrite() {
        let context = Context::new().with("foo", 3_i32).with("foo", 4_i32);

        assert_eq!(context.map.len(), 1);
    }
}
