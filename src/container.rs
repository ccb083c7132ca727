use core::mem;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, debug_span, error, Instrument as _};

use crate::{
    any::{AnyValue, TypeInfo},
    binding::Strategy,
    context::Context,
    errors::{ConfigureErrorKind, CreateErrorKind, UsageErrorKind},
    injectable::Injectable,
    key::Key,
    module::{Bindings, Module},
    options::Options,
    service::Service as _,
};

/// The resolution engine: an ordered list of modules behind a cheap-to-clone
/// handle, plus the implicit self-binding for [`Key::container`].
///
/// Lifecycle: `Unconfigured -> Configuring -> Configured`, driven by exactly
/// one [`Self::configure`] call. After configuration the module bindings are
/// immutable and `create` calls are independent, so they may run
/// concurrently without locking.
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

struct ContainerInner {
    state: RwLock<State>,
}

enum State {
    Unconfigured { modules: Vec<Arc<dyn Module>> },
    Configuring,
    Configured { slots: Arc<Vec<ModuleSlot>> },
}

struct ModuleSlot {
    name: &'static str,
    bindings: Bindings,
}

impl Container {
    /// Creates a container owning `modules`. Registration order is
    /// resolution precedence: for a key bound by several modules, the first
    /// registered module wins.
    #[must_use]
    pub fn new(modules: Vec<Arc<dyn Module>>) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                state: RwLock::new(State::Unconfigured { modules }),
            }),
        }
    }

    /// Configures every owned module sequentially in registration order.
    ///
    /// # Errors
    /// - [`ConfigureErrorKind::Usage`] if configuration already ran or is in
    ///   flight
    /// - [`ConfigureErrorKind::Module`] propagating the first failing
    ///   module's error; the container stays unusable afterwards
    pub async fn configure(&self) -> Result<(), ConfigureErrorKind> {
        let modules = {
            let mut state = self.inner.state.write();
            match mem::replace(&mut *state, State::Configuring) {
                State::Unconfigured { modules } => modules,
                other => {
                    *state = other;
                    let err = UsageErrorKind::AlreadyConfigured;
                    error!("{}", err);
                    return Err(err.into());
                }
            }
        };

        let span = debug_span!("configure", modules = modules.len());
        async {
            let mut slots = Vec::with_capacity(modules.len());
            for (index, module) in modules.into_iter().enumerate() {
                let name = module.name();
                let mut bindings = Bindings::new();
                if let Err(source) = module.configure(&mut bindings).await {
                    let err = ConfigureErrorKind::Module { index, name, source };
                    error!("{}", err);
                    return Err(err);
                }
                debug!(module = name, bindings = bindings.len(), "Module configured");
                slots.push(ModuleSlot { name, bindings });
            }

            *self.inner.state.write() = State::Configured { slots: Arc::new(slots) };
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Constructs a `T`, resolving its declared requirements against the
    /// owned modules.
    ///
    /// # Errors
    /// See [`Self::create_with`].
    pub async fn create<T: Injectable>(&self) -> Result<T, CreateErrorKind> {
        self.create_with(Context::new()).await
    }

    /// Constructs a `T` with caller-supplied seed values. Seeds are merged
    /// into the resolved options and win over module bindings for the same
    /// key.
    ///
    /// # Errors
    /// - [`CreateErrorKind::Usage`] if the container isn't configured
    /// - [`CreateErrorKind::MissingDependencies`] enumerating every
    ///   unresolved key; nothing is constructed in that case
    /// - [`CreateErrorKind::Production`]/[`CreateErrorKind::Constructor`] if
    ///   a strategy invocation or the target's own assembly fails
    pub async fn create_with<T: Injectable>(&self, context: Context) -> Result<T, CreateErrorKind> {
        let slots = self.configured_slots()?;
        let target = TypeInfo::of::<T>();

        let span = debug_span!("create", target = target.short_name());
        async {
            let mut options = Options::new(self.clone());
            for (key, value) in &context.map {
                options.insert(key.clone(), value.clone());
            }

            let mut missing = Vec::new();
            for key in T::requirements() {
                if options.contains(&key) {
                    debug!(%key, "Seeded");
                    continue;
                }

                let Some((module, strategy)) = find_binding(&slots, &key) else {
                    if key == Key::container() {
                        debug!(%key, "Resolved to container");
                        options.insert(key, Arc::new(self.clone()) as AnyValue);
                    } else {
                        debug!(%key, "No binding");
                        missing.push(key);
                    }
                    continue;
                };

                debug!(%key, module, "Binding found");
                let value = self.invoke(strategy, &key, &options).await?;
                options.insert(key, value);
            }

            if !missing.is_empty() {
                let err = CreateErrorKind::MissingDependencies { target, keys: missing };
                error!("{}", err);
                return Err(err);
            }

            let mut instance = T::assemble(&options).map_err(|source| {
                let err = CreateErrorKind::Production {
                    key: Key::Type(target),
                    source,
                };
                error!("{}", err);
                err
            })?;
            instance.inject_fields(&options);

            debug!("Created");
            Ok(instance)
        }
        .instrument(span)
        .await
    }

    /// Resolves a single key against the owned modules: the "target is a
    /// key" form of the construction request.
    ///
    /// # Errors
    /// Same as [`Self::create_with`], plus [`CreateErrorKind::IncorrectType`]
    /// if the bound value isn't a `T`.
    pub async fn get<T: Send + Sync + 'static>(&self, key: &Key) -> Result<Arc<T>, CreateErrorKind> {
        let slots = self.configured_slots()?;

        let span = debug_span!("get", %key);
        async {
            let value = match find_binding(&slots, key) {
                Some((module, strategy)) => {
                    debug!(module, "Binding found");
                    let options = Options::new(self.clone());
                    self.invoke(strategy, key, &options).await?
                }
                None if *key == Key::container() => Arc::new(self.clone()) as AnyValue,
                None => {
                    let err = CreateErrorKind::MissingDependencies {
                        target: TypeInfo::of::<T>(),
                        keys: vec![key.clone()],
                    };
                    error!("{}", err);
                    return Err(err);
                }
            };

            value.downcast().map_err(|value: AnyValue| {
                let err = CreateErrorKind::IncorrectType {
                    key: key.clone(),
                    expected: TypeInfo::of::<T>(),
                    actual: (*value).type_id(),
                };
                error!("{}", err);
                err
            })
        }
        .instrument(span)
        .await
    }

    async fn invoke(&self, strategy: Strategy, key: &Key, options: &Options) -> Result<AnyValue, CreateErrorKind> {
        match strategy {
            Strategy::Instance(value) => Ok(value),
            Strategy::Factory(mut factory) => factory.call(options.clone()).await.map_err(|source| {
                let err = CreateErrorKind::Production { key: key.clone(), source };
                error!("{}", err);
                err
            }),
            Strategy::Constructor(mut creator) => creator.call(self.clone()).await.map_err(|source| {
                let err = CreateErrorKind::Constructor {
                    key: key.clone(),
                    source: Box::new(source),
                };
                error!("{}", err);
                err
            }),
        }
    }

    fn configured_slots(&self) -> Result<Arc<Vec<ModuleSlot>>, UsageErrorKind> {
        match &*self.inner.state.read() {
            State::Configured { slots } => Ok(slots.clone()),
            State::Unconfigured { .. } | State::Configuring => {
                let err = UsageErrorKind::NotConfigured;
                error!("{}", err);
                Err(err)
            }
        }
    }
}

/// Scans modules in registration order; the first module binding the key
/// wins. A later module never overrides an earlier one — the mirror image
/// of the last-write-wins rule inside a single module's map.
fn find_binding(slots: &[ModuleSlot], key: &Key) -> Option<(&'static str, Strategy)> {
    slots
        .iter()
        .find_map(|slot| slot.bindings.get(key).map(|binding| (slot.name, binding.strategy.clone())))
}
