use core::{
    fmt::{self, Display, Formatter},
    sync::atomic::{AtomicU64, Ordering},
};
use std::borrow::Cow;

use crate::any::TypeInfo;

/// An opaque token usable as a dependency key. Every token drawn from
/// [`Token::new`] is distinct; tokens compare by identity, not by any
/// structural property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(u64);

impl Token {
    #[must_use]
    pub fn new() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifies a resolvable dependency.
///
/// A key is a type reference, a textual name or an opaque token. Type and
/// token keys compare by identity, name keys by value. A module binds at
/// most one production strategy per key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Type(TypeInfo),
    Name(Cow<'static, str>),
    Token(Token),
}

impl Key {
    /// Key of a type reference.
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self::Type(TypeInfo::of::<T>())
    }

    /// Key of a textual name.
    #[inline]
    #[must_use]
    pub fn name(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Name(name.into())
    }

    /// The reserved key under which every container resolves itself when no
    /// module binds it explicitly.
    #[inline]
    #[must_use]
    pub const fn container() -> Self {
        Self::Name(Cow::Borrowed("container"))
    }
}

impl From<&'static str> for Key {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

impl From<Token> for Key {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(type_info) => write!(f, "{}", type_info.short_name()),
            Self::Name(name) => write!(f, "{name}"),
            Self::Token(Token(id)) => write!(f, "token#{id}"),
        }
    }
}
