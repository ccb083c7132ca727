use core::any::TypeId;

use crate::{any::TypeInfo, key::Key};

#[derive(thiserror::Error, Debug)]
pub enum OptionsErrorKind {
    #[error("No value for key `{key}` in options")]
    Missing { key: Key },
    #[error("Incorrect value type for key `{key}`. Expected {}, actual {actual:?}", expected.name)]
    IncorrectType {
        key: Key,
        expected: TypeInfo,
        actual: TypeId,
    },
}
