use core::future::Future;
use std::{collections::BTreeMap, sync::Arc};

use tracing::debug;

use crate::{
    any::AnyValue,
    container::Container,
    errors::CreateErrorKind,
    injectable::Injectable,
    key::Key,
    options::Options,
    service::{service_fn, BoxCloneService},
    utils::future::BoxFuture,
};

pub(crate) type BoxedCloneFactory = BoxCloneService<Options, AnyValue, anyhow::Error>;
pub(crate) type BoxedCloneCreator = BoxCloneService<Container, AnyValue, CreateErrorKind>;

/// A key paired with its production strategy. Immutable once the binder
/// finalizes it into a module's map.
pub struct Binding {
    pub(crate) key: Key,
    pub(crate) strategy: Strategy,
}

impl Binding {
    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }
}

#[derive(Clone)]
pub(crate) enum Strategy {
    Constructor(BoxedCloneCreator),
    Factory(BoxedCloneFactory),
    Instance(AnyValue),
}

/// Fluent binder returned by [`crate::Bindings::bind`]. Exactly one `to_*`
/// call finalizes the binding; registering the same key again overwrites the
/// previous binding (last write wins within one module).
pub struct Binder<'a> {
    pub(crate) key: Key,
    pub(crate) map: &'a mut BTreeMap<Key, Binding>,
}

impl Binder<'_> {
    /// Produce the value by recursively creating `T` against the container.
    pub fn to_constructor<T: Injectable>(self) {
        let strategy = Strategy::Constructor(boxed_creator::<T>());
        self.finish(strategy);
    }

    /// Produce the value by awaiting `f(options)` on every resolution.
    pub fn to_factory<F, Fut, T>(self, f: F)
    where
        F: FnMut(Options) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Result<T, anyhow::Error>> + Send + 'static,
        T: Send + Sync + 'static,
    {
        let strategy = Strategy::Factory(boxed_factory(f));
        self.finish(strategy);
    }

    /// Return the same shared value on every resolution.
    pub fn to_instance<T: Send + Sync + 'static>(self, value: T) {
        let strategy = Strategy::Instance(Arc::new(value));
        self.finish(strategy);
    }

    fn finish(self, strategy: Strategy) {
        let Self { key, map } = self;
        map.insert(key.clone(), Binding { key, strategy });
    }
}

#[must_use]
pub(crate) fn boxed_factory<F, Fut, T>(mut f: F) -> BoxedCloneFactory
where
    F: FnMut(Options) -> Fut + Send + Sync + Clone + 'static,
    Fut: Future<Output = Result<T, anyhow::Error>> + Send + 'static,
    T: Send + Sync + 'static,
{
    BoxCloneService::new(service_fn(move |options: Options| -> BoxFuture<'static, Result<AnyValue, anyhow::Error>> {
        let fut = f(options);
        Box::pin(async move {
            let value = fut.await?;

            debug!("Factory produced");

            Ok(Arc::new(value) as AnyValue)
        })
    }))
}

#[must_use]
pub(crate) fn boxed_creator<T: Injectable>() -> BoxedCloneCreator {
    BoxCloneService::new(service_fn(
        move |container: Container| -> BoxFuture<'static, Result<AnyValue, CreateErrorKind>> {
            Box::pin(async move {
                let value = container.create::<T>().await?;

                debug!("Constructor produced");

                Ok(Arc::new(value) as AnyValue)
            })
        },
    ))
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU8, Ordering};
    use std::sync::Arc;

    use tracing_test::traced_test;

    use super::boxed_factory;
    use crate::{options::Options, service::Service as _, Container};

    #[tokio::test]
    #[traced_test]
    async fn test_boxed_factory() {
        let call_count = Arc::new(AtomicU8::new(0));

        let mut factory = boxed_factory({
            let call_count = call_count.clone();
            move |_options| {
                let call_count = call_count.clone();
                async move {
                    call_count.fetch_add(1, Ordering::SeqCst);
                    Ok(3_i32)
                }
            }
        });

        let container = Container::new(vec![]);
        let value_1 = factory.call(Options::new(container.clone())).await.unwrap();
        let value_2 = factory.call(Options::new(container)).await.unwrap();

        assert_eq!(*value_1.downcast::<i32>().unwrap(), 3);
        assert_eq!(*value_2.downcast::<i32>().unwrap(), 3);
        assert_eq!(call_count.load(Ordering::SeqCst), 2);
    }
}
