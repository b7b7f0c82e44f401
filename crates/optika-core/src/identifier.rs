//! Item identifiers backed by a global string interner.
//!
//! Beams, components and routes are named with an [`Id`]. Anchors refer to
//! items by name, so two ids compare equal exactly when their names match.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Interned name of a scene item.
///
/// `Id` is `Copy` and compares by symbol, which makes lookups by name
/// cheap during anchor resolution.
///
/// # Examples
///
/// ```
/// use optika_core::identifier::Id;
///
/// let probe = Id::new("probe");
/// assert_eq!(probe, Id::from("probe"));
/// assert_eq!(probe, "probe");
/// assert_eq!(probe.to_string(), "probe");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Interns `name` and returns its identifier.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        with_interner(|interner| {
            let name = interner
                .resolve(self.0)
                .expect("Symbol should exist in interner");
            f.write_str(name)
        })
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
