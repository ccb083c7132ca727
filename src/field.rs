use std::sync::Arc;

use crate::{errors::OptionsErrorKind, key::Key, options::Options};

/// An attribute slot filled by post-construction injection.
///
/// A field knows its own key and starts absent. [`Self::fill`] copies the
/// resolved value from the options if one is present and leaves the slot
/// absent otherwise; whether absence is an error is decided at read time
/// through [`Self::must_exist`], never at resolution time.
pub struct Field<T> {
    key: Key,
    slot: Option<Arc<T>>,
}

impl<T: Send + Sync + 'static> Field<T> {
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            slot: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Copies the value for this field's key out of the options. A missing
    /// key leaves the slot untouched; a value of the wrong type is an error.
    ///
    /// # Errors
    /// [`OptionsErrorKind::IncorrectType`] if the resolved value isn't a `T`.
    pub fn fill(&mut self, options: &Options) -> Result<(), OptionsErrorKind> {
        match options.get::<T>(&self.key) {
            Ok(value) => {
                self.slot = Some(value);
                Ok(())
            }
            Err(OptionsErrorKind::Missing { .. }) => Ok(()),
            Err(err) => Err(err),
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self) -> Option<&Arc<T>> {
        self.slot.as_ref()
    }

    /// Read-time presence check.
    ///
    /// # Errors
    /// [`OptionsErrorKind::Missing`] naming this field's key if the slot was
    /// never filled.
    pub fn must_exist(&self) -> Result<Arc<T>, OptionsErrorKind> {
        self.slot.clone().ok_or_else(|| OptionsErrorKind::Missing { key: self.key.clone() })
    }
}
