use crate::{key::Key, options::Options};

/// Explicit declaration of a constructible target: its ordered dependency
/// keys and the constructor assembling it from the resolved options.
///
/// This is the registration table the container reads instead of runtime
/// reflection: a type states its requirements once, in code, and the
/// container resolves them in the declared order before `assemble` runs.
///
/// ```rust
/// use std::sync::Arc;
/// use bindery::{Injectable, Key, Options};
///
/// struct Bar {
///     foo: Arc<i32>,
/// }
///
/// impl Injectable for Bar {
///     fn requirements() -> Vec<Key> {
///         vec![Key::name("foo")]
///     }
///
///     fn assemble(options: &Options) -> Result<Self, anyhow::Error> {
///         Ok(Self {
///             foo: options.get_name("foo")?,
///         })
///     }
/// }
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Ordered dependency keys. A target with no declared requirements
    /// needs nothing beyond the container reachable through [`Options`].
    #[must_use]
    fn requirements() -> Vec<Key> {
        Vec::new()
    }

    /// Constructs the instance from the fully resolved options.
    ///
    /// # Errors
    /// Any error aborts the enclosing `create` as a production failure;
    /// no partial instance is ever returned.
    fn assemble(options: &Options) -> Result<Self, anyhow::Error>;

    /// Post-construction copy step for attribute injection, run once after
    /// `assemble` succeeds. Has no effect on the resolution algorithm.
    fn inject_fields(&mut self, options: &Options) {
        let _ = options;
    }
}
