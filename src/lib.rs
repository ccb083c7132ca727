#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod binding;
pub(crate) mod container;
pub(crate) mod context;
pub(crate) mod errors;
pub(crate) mod field;
pub(crate) mod injectable;
pub(crate) mod key;
pub(crate) mod map_module;
pub(crate) mod module;
pub(crate) mod options;
pub(crate) mod service;

pub mod utils;

pub use any::TypeInfo;
pub use binding::{Binder, Binding};
pub use container::Container;
pub use context::Context;
pub use errors::{ConfigureErrorKind, CreateErrorKind, OptionsErrorKind, UsageErrorKind};
pub use field::Field;
pub use injectable::Injectable;
pub use key::{Key, Token};
pub use map_module::{Entry, MapModule};
pub use module::{Bindings, Module};
pub use options::Options;
pub use utils::future::BoxFuture;
