use core::any::Any;
use std::{collections::BTreeMap, sync::Arc};

use crate::{
    any::{AnyValue, TypeInfo},
    container::Container,
    errors::OptionsErrorKind,
    key::Key,
};

/// The resolved-options object handed to factories and constructors.
///
/// Holds the container that drove the resolution plus every key resolved so
/// far, in declaration order. Factories observe the options as assembled up
/// to their own key; the target's constructor observes all of them.
#[derive(Clone)]
pub struct Options {
    container: Container,
    map: BTreeMap<Key, AnyValue>,
}

impl Options {
    #[inline]
    #[must_use]
    pub(crate) fn new(container: Container) -> Self {
        Self {
            container,
            map: BTreeMap::new(),
        }
    }

    /// The container this resolution runs against.
    #[inline]
    #[must_use]
    pub fn container(&self) -> &Container {
        &self.container
    }

    #[inline]
    pub(crate) fn insert(&mut self, key: Key, value: AnyValue) -> Option<AnyValue> {
        self.map.insert(key, value)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, key: &Key) -> bool {
        self.map.contains_key(key)
    }

    /// Typed access to a resolved value.
    ///
    /// # Errors
    /// - [`OptionsErrorKind::Missing`] if the key wasn't resolved
    /// - [`OptionsErrorKind::IncorrectType`] if the value isn't a `T`
    pub fn get<T: Send + Sync + 'static>(&self, key: &Key) -> Result<Arc<T>, OptionsErrorKind> {
        let Some(value) = self.map.get(key) else {
            return Err(OptionsErrorKind::Missing { key: key.clone() });
        };
        value.clone().downcast().map_err(|value: AnyValue| OptionsErrorKind::IncorrectType {
            key: key.clone(),
            expected: TypeInfo::of::<T>(),
            actual: (*value).type_id(),
        })
    }

    /// Shorthand for [`Self::get`] with a name key.
    ///
    /// # Errors
    /// Same as [`Self::get`].
    pub fn get_name<T: Send + Sync + 'static>(&self, name: &'static str) -> Result<Arc<T>, OptionsErrorKind> {
        self.get(&Key::from(name))
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.map.keys()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Options;
    use crate::{errors::OptionsErrorKind, key::Key, Container};

    #[test]
    fn test_get_missing() {
        let options = Options::new(Container::new(vec![]));

        assert!(matches!(
            options.get::<i32>(&Key::name("foo")),
            Err(OptionsErrorKind::Missing { key }) if key == Key::name("foo"),
        ));
    }

    #[test]
    fn test_get_incorrect_type() {
        let mut options = Options::new(Container::new(vec![]));
        options.insert(Key::name("foo"), Arc::new(3_i32));

        assert!(options.get::<i32>(&Key::name("foo")).is_ok());
        assert!(matches!(
            options.get::<String>(&Key::name("foo")),
            Err(OptionsErrorKind::IncorrectType { .. }),
        ));
    }
}
