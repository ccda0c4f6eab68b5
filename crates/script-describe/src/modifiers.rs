//! Modifier sets
//!
//! Access and behavioral modifiers attached to types, methods, fields and
//! variables. Bit values follow the host platform's access flags so that
//! host descriptors can hand their raw flags over unchanged, while script
//! descriptors build the set from the named constants.
//!
//! Rendering is owned here: keywords come out in one canonical order,
//! separated by single spaces, with no label in front.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of declaration modifiers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct ModifierSet: u16 {
        /// `public`
        const PUBLIC = 0x0001;
        /// `private`
        const PRIVATE = 0x0002;
        /// `protected`
        const PROTECTED = 0x0004;
        /// `static`
        const STATIC = 0x0008;
        /// `final`
        const FINAL = 0x0010;
        /// `synchronized`
        const SYNCHRONIZED = 0x0020;
        /// `volatile`
        const VOLATILE = 0x0040;
        /// `transient`
        const TRANSIENT = 0x0080;
        /// `native`
        const NATIVE = 0x0100;
        /// `interface`
        const INTERFACE = 0x0200;
        /// `abstract`
        const ABSTRACT = 0x0400;
        /// `strictfp`
        const STRICT = 0x0800;
    }
}

/// Keyword order used when rendering a set
const CANONICAL_ORDER: [(ModifierSet, &str); 12] = [
    (ModifierSet::PUBLIC, "public"),
    (ModifierSet::PROTECTED, "protected"),
    (ModifierSet::PRIVATE, "private"),
    (ModifierSet::ABSTRACT, "abstract"),
    (ModifierSet::STATIC, "static"),
    (ModifierSet::FINAL, "final"),
    (ModifierSet::TRANSIENT, "transient"),
    (ModifierSet::VOLATILE, "volatile"),
    (ModifierSet::SYNCHRONIZED, "synchronized"),
    (ModifierSet::NATIVE, "native"),
    (ModifierSet::STRICT, "strictfp"),
    (ModifierSet::INTERFACE, "interface"),
];

impl ModifierSet {
    /// Build a set from raw host access flags
    ///
    /// Bits that carry no modifier keyword are dropped.
    pub const fn from_access_flags(flags: u16) -> Self {
        Self::from_bits_truncate(flags)
    }

    /// Keywords of this set in canonical order
    pub fn keywords(self) -> impl Iterator<Item = &'static str> {
        CANONICAL_ORDER
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, keyword)| keyword)
    }
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, keyword) in self.keywords().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            f.write_str(keyword)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_renders_empty() {
        assert_eq!(ModifierSet::empty().to_string(), "");
        assert_eq!(ModifierSet::default(), ModifierSet::empty());
    }

    #[test]
    fn test_canonical_order() {
        let mods = ModifierSet::FINAL | ModifierSet::STATIC | ModifierSet::PRIVATE;
        assert_eq!(mods.to_string(), "private static final");

        let mods = ModifierSet::INTERFACE | ModifierSet::ABSTRACT | ModifierSet::PUBLIC;
        assert_eq!(mods.to_string(), "public abstract interface");

        let mods = ModifierSet::NATIVE | ModifierSet::SYNCHRONIZED | ModifierSet::PROTECTED;
        assert_eq!(mods.to_string(), "protected synchronized native");
    }

    #[test]
    fn test_from_access_flags_drops_unknown_bits() {
        // 0x1000 is the synthetic bit, which has no keyword
        let mods = ModifierSet::from_access_flags(0x1000 | 0x0001 | 0x0008);
        assert_eq!(mods, ModifierSet::PUBLIC | ModifierSet::STATIC);
        assert_eq!(mods.to_string(), "public static");
    }

    #[test]
    fn test_keywords() {
        let mods = ModifierSet::TRANSIENT | ModifierSet::VOLATILE | ModifierSet::STRICT;
        let keywords: Vec<_> = mods.keywords().collect();
        assert_eq!(keywords, vec!["transient", "volatile", "strictfp"]);
    }
}
