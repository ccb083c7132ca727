use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use std::sync::Arc;

/// Static identity of a Rust type: its name for diagnostics and its
/// [`TypeId`] for comparison. Equality and ordering use the id only.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn short_name(&self) -> &'static str {
        self.name.rsplit_once("::").map_or(self.name, |(_, name)| name)
    }
}

pub(crate) type AnyValue = Arc<dyn Any + Send + Sync>;

#[cfg(test)]
mod tests {
    use super::TypeInfo;

    #[test]
    fn test_eq_by_id() {
        assert_eq!(TypeInfo::of::<i32>(), TypeInfo::of::<i32>());
        assert_ne!(TypeInfo::of::<i32>(), TypeInfo::of::<u32>());
    }

    #[test]
    fn test_short_name() {
        mod inner {
            pub struct Thing;
        }

        assert_eq!(TypeInfo::of::<inner::Thing>().short_name(), "Thing");
        assert_eq!(TypeInfo::of::<i32>().short_name(), "i32");
    }
}
