//! Helper registration and block/inline disambiguation
//!
//!     Helpers come in two flavors: inline helpers produce output in place,
//!     block helpers wrap a region of the template and need a matching
//!     `{{/name}}` closing tag. The conversion stage only needs to answer one
//!     question about a tag: does this helper call open a block? The registry
//!     holds the two name sets and answers that without side effects.
//!
//!     A name registered both ways resolves to the inline helper: a call like
//!     `{{bold}}` stays a plain call even when a `bold` block helper exists,
//!     because the inline lookup uses the name exactly as written while the
//!     block lookup strips the `#`/`^`/`*` open markers first. Only the
//!     marked spelling `{{#bold}}` opens the block.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::grips::expressions::strip_block_markers;

/// Block helpers every grips environment ships with.
static BUILTIN_BLOCK_HELPERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["if", "unless", "each", "with"].into_iter().collect());

/// Inline helpers every grips environment ships with.
static BUILTIN_INLINE_HELPERS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["lookup", "log"].into_iter().collect());

/// The helper name sets consulted during conversion.
///
/// Mutable only through the `register_*` methods before compilation starts;
/// the conversion pipeline takes it read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HelperRegistry {
    inline: HashSet<String>,
    block: HashSet<String>,
}

impl HelperRegistry {
    /// An empty registry with no helpers at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with the builtin grips helpers.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for name in BUILTIN_BLOCK_HELPERS.iter() {
            registry.register_block_helper(*name);
        }
        for name in BUILTIN_INLINE_HELPERS.iter() {
            registry.register_helper(*name);
        }
        registry
    }

    /// Register an inline helper name.
    pub fn register_helper(&mut self, name: impl Into<String>) {
        self.inline.insert(name.into());
    }

    /// Register a block helper name (without open markers).
    pub fn register_block_helper(&mut self, name: impl Into<String>) {
        self.block.insert(name.into());
    }

    /// Whether `name`, exactly as written, is a registered inline helper.
    pub fn is_inline(&self, name: &str) -> bool {
        self.inline.contains(name)
    }

    /// Whether `name` (without markers) is a registered block helper.
    pub fn is_block(&self, name: &str) -> bool {
        self.block.contains(name)
    }

    /// Whether a helper call with this (possibly marked) name opens a block.
    ///
    /// Inline registration wins: a name that resolves to an inline helper as
    /// written never opens a block, which disambiguates helpers registered
    /// both ways.
    pub fn is_block_call(&self, name: &str) -> bool {
        !self.is_inline(name) && self.is_block(strip_block_markers(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_cover_the_standard_blocks() {
        let registry = HelperRegistry::with_builtins();
        assert!(registry.is_block_call("#if"));
        assert!(registry.is_block_call("^unless"));
        assert!(registry.is_block_call("#each"));
        assert!(registry.is_block_call("#with"));
        assert!(!registry.is_block_call("#bold"));
    }

    #[test]
    fn test_inline_registration_takes_precedence() {
        let mut registry = HelperRegistry::new();
        registry.register_block_helper("bold");
        registry.register_helper("bold");

        // The bare spelling resolves inline, the marked spelling opens the block.
        assert!(!registry.is_block_call("bold"));
        assert!(registry.is_block_call("#bold"));
    }

    #[test]
    fn test_unregistered_names_never_open_blocks() {
        let registry = HelperRegistry::new();
        assert!(!registry.is_block_call("#if"));
        assert!(!registry.is_block_call("if"));
    }
}
