use core::any::TypeId;

use super::usage::UsageErrorKind;
use crate::{any::TypeInfo, key::Key};

#[derive(thiserror::Error, Debug)]
pub enum CreateErrorKind {
    #[error("Missing dependencies for `{}`: {keys:?}", target.name)]
    MissingDependencies { target: TypeInfo, keys: Vec<Key> },
    #[error("Production of `{key}` failed: {source}")]
    Production {
        key: Key,
        #[source]
        source: anyhow::Error,
    },
    #[error("Constructor bound to `{key}` failed: {source}")]
    Constructor {
        key: Key,
        #[source]
        source: Box<CreateErrorKind>,
    },
    #[error("Incorrect type bound to `{key}`. Expected {}, actual {actual:?}", expected.name)]
    IncorrectType {
        key: Key,
        expected: TypeInfo,
        actual: TypeId,
    },
    #[error(transparent)]
    Usage(#[from] UsageErrorKind),
}
