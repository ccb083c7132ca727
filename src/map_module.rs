use core::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::{
    any::AnyValue,
    binding::{boxed_creator, boxed_factory, Binding, BoxedCloneCreator, BoxedCloneFactory, Strategy},
    injectable::Injectable,
    key::Key,
    module::{Bindings, Module},
    options::Options,
    utils::future::BoxFuture,
};

/// One entry of a [`MapModule`] mapping: a production strategy without its
/// key yet.
#[derive(Clone)]
pub struct Entry(EntryKind);

#[derive(Clone)]
enum EntryKind {
    Constructor(BoxedCloneCreator),
    Factory(BoxedCloneFactory),
    Instance(AnyValue),
}

impl Entry {
    /// Materialized as a constructor binding for `T`.
    #[must_use]
    pub fn constructor<T: Injectable>() -> Self {
        Self(EntryKind::Constructor(boxed_creator::<T>()))
    }

    /// A provider declaration, materialized as a factory binding.
    #[must_use]
    pub fn factory<F, Fut, T>(f: F) -> Self
    where
        F: FnMut(Options) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Result<T, anyhow::Error>> + Send + 'static,
        T: Send + Sync + 'static,
    {
        Self(EntryKind::Factory(boxed_factory(f)))
    }

    /// A fixed shared value.
    #[must_use]
    pub fn instance<T: Send + Sync + 'static>(value: T) -> Self {
        Self(EntryKind::Instance(Arc::new(value)))
    }

    fn strategy(&self) -> Strategy {
        match &self.0 {
            EntryKind::Constructor(creator) => Strategy::Constructor(creator.clone()),
            EntryKind::Factory(factory) => Strategy::Factory(factory.clone()),
            EntryKind::Instance(value) => Strategy::Instance(value.clone()),
        }
    }
}

/// Built-in convenience module materializing a key-to-entry mapping.
///
/// Entries register in the order given. Provider declarations added through
/// [`Self::with_provider`] are applied after the whole initial mapping, so a
/// provider for an already-mapped key wins.
#[derive(Default)]
pub struct MapModule {
    entries: Vec<(Key, Entry)>,
    providers: Vec<(Key, BoxedCloneFactory)>,
}

impl MapModule {
    #[must_use]
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Key, Entry)>,
    {
        Self {
            entries: entries.into_iter().collect(),
            providers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl Into<Key>, entry: Entry) -> Self {
        self.entries.push((key.into(), entry));
        self
    }

    #[must_use]
    pub fn with_provider<F, Fut, T>(mut self, key: impl Into<Key>, f: F) -> Self
    where
        F: FnMut(Options) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Result<T, anyhow::Error>> + Send + 'static,
        T: Send + Sync + 'static,
    {
        self.providers.push((key.into(), boxed_factory(f)));
        self
    }
}

impl Module for MapModule {
    fn name(&self) -> &'static str {
        "MapModule"
    }

    fn configure<'a>(self: Arc<Self>, bindings: &'a mut Bindings) -> BoxFuture<'a, Result<(), anyhow::Error>> {
        Box::pin(async move {
            for (key, entry) in &self.entries {
                bindings.insert(Binding {
                    key: key.clone(),
                    strategy: entry.strategy(),
                });
            }
            // Providers land after the mapping so they win ties.
            for (key, factory) in &self.providers {
                bindings.insert(Binding {
                    key: key.clone(),
                    strategy: Strategy::Factory(factory.clone()),
                });
            }

            debug!(bindings = bindings.len(), "Map module configured");

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tracing_test::traced_test;

    use super::{Entry, MapModule};
    use crate::{
        binding::Strategy,
        key::Key,
        module::{Bindings, Module as _},
    };

    #[tokio::test]
    #[traced_test]
    async fn test_entries_materialized() {
        let module = Arc::new(MapModule::new([
            (Key::name("foo"), Entry::instance(3_i32)),
            (Key::name("bar"), Entry::factory(|_options| async { Ok(7_i32) })),
        ]));

        let mut bindings = Bindings::new();
        module.configure(&mut bindings).await.unwrap();

        assert_eq!(bindings.len(), 2);
        assert!(matches!(
            bindings.get(&Key::name("foo")).unwrap().strategy,
            Strategy::Instance(_),
        ));
        assert!(matches!(
            bindings.get(&Key::name("bar")).unwrap().strategy,
            Strategy::Factory(_),
        ));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_provider_wins_over_mapping() {
        let module = Arc::new(
            MapModule::new([(Key::name("foo"), Entry::instance(3_i32))])
                .with_provider("foo", |_options| async { Ok(4_i32) }),
        );

        let mut bindings = Bindings::new();
        module.configure(&mut bindings).await.unwrap();

        assert_eq!(bindings.len(), 1);
        assert!(matches!(
            bindings.get(&Key::name("foo")).unwrap().strategy,
            Strategy::Factory(_),
        ));
    }
}
