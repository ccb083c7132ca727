use core::any::type_name;
use std::{collections::BTreeMap, sync::Arc};

use crate::{
    binding::{Binder, Binding},
    key::Key,
    utils::future::BoxFuture,
};

/// An ordered collection of [`Binding`]s, populated once during a module's
/// `configure` step and read-only afterwards.
#[derive(Default)]
pub struct Bindings {
    map: BTreeMap<Key, Binding>,
}

impl Bindings {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a fluent binding for `key`. The returned binder registers the
    /// binding on its `to_constructor`/`to_factory`/`to_instance` call,
    /// overwriting any previous binding for the same key.
    pub fn bind(&mut self, key: impl Into<Key>) -> Binder<'_> {
        Binder {
            key: key.into(),
            map: &mut self.map,
        }
    }

    /// Looks up the binding for `key`. Absence is a normal outcome the
    /// container interprets, never an error.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Binding> {
        self.map.get(key)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub(crate) fn insert(&mut self, binding: Binding) -> Option<Binding> {
        self.map.insert(binding.key.clone(), binding)
    }
}

/// A producer of bindings.
///
/// `configure` runs exactly once per module, driven by the owning container
/// in registration order, and must complete before any `create` call
/// references the module. It receives the module behind [`Arc`] so provider
/// methods can be expressed as factory bindings capturing `self`:
///
/// ```rust
/// use std::sync::Arc;
/// use bindery::{Bindings, BoxFuture, Module};
///
/// struct DbModule {
///     dsn: String,
/// }
///
/// impl DbModule {
///     async fn connect(&self) -> Result<String, anyhow::Error> {
///         Ok(format!("connected to {}", self.dsn))
///     }
/// }
///
/// impl Module for DbModule {
///     fn configure<'a>(self: Arc<Self>, bindings: &'a mut Bindings) -> BoxFuture<'a, Result<(), anyhow::Error>> {
///         Box::pin(async move {
///             bindings.bind("db").to_factory(move |_options| {
///                 let this = self.clone();
///                 async move { this.connect().await }
///             });
///             Ok(())
///         })
///     }
/// }
/// ```
pub trait Module: Send + Sync + 'static {
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }

    /// Populates the module's bindings. A failure here aborts the owning
    /// container's `configure` and leaves the container unusable.
    fn configure<'a>(self: Arc<Self>, bindings: &'a mut Bindings) -> BoxFuture<'a, Result<(), anyhow::Error>>;
}
