//! Tag body expressions
//!
//!     The body of a statement token is a closed expression tree: a bare path
//!     reference, a helper call with ordered arguments, or a literal. Helper
//!     arguments are themselves expressions, which is how `else` chains smuggle
//!     a follow-up block call through the parser: `{{else if cond}}` parses as
//!     the helper `else` with the path `if` as its first argument.
//!
//! Naming conventions
//!
//!     Two path spellings carry structure rather than data lookups:
//!
//!     - A helper name starting with `#`, `^`, or `*` opens a block; the block
//!       identity is the name with the leading markers stripped.
//!     - A path of the form `/name` closes the block `name`.

use serde::{Deserialize, Serialize};

/// Characters that mark a helper call as opening a block.
pub const BLOCK_MARKERS: [char; 3] = ['#', '^', '*'];

/// A parsed tag body or helper argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    /// A bare reference such as `user.name`, including the `/name` closing
    /// spelling.
    Path(PathExpression),

    /// A helper call with ordered arguments.
    Helper(HelperExpression),

    /// A literal argument.
    Literal(LiteralExpression),
}

/// A bare path reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathExpression {
    pub path: String,
}

/// A helper call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelperExpression {
    /// Helper name as written, markers included for block opens.
    pub name: String,

    /// Ordered argument expressions; empty for bare calls.
    pub arguments: Vec<Expression>,
}

/// A literal helper argument.
///
/// Numbers keep their source lexeme; the compile stage decides numeric
/// interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralExpression {
    String(String),
    Number(String),
    Boolean(bool),
}

impl Expression {
    /// Build a path expression.
    pub fn path(path: impl Into<String>) -> Expression {
        Expression::Path(PathExpression { path: path.into() })
    }

    /// Build a helper call without arguments.
    pub fn helper(name: impl Into<String>) -> Expression {
        Expression::helper_with_arguments(name, Vec::new())
    }

    /// Build a helper call with arguments.
    pub fn helper_with_arguments(name: impl Into<String>, arguments: Vec<Expression>) -> Expression {
        Expression::Helper(HelperExpression {
            name: name.into(),
            arguments,
        })
    }

    /// Build a string literal argument.
    pub fn string_literal(value: impl Into<String>) -> Expression {
        Expression::Literal(LiteralExpression::String(value.into()))
    }

    /// The helper call carried by this expression, if it is one.
    pub fn as_helper(&self) -> Option<&HelperExpression> {
        match self {
            Expression::Helper(helper) => Some(helper),
            _ => None,
        }
    }

    /// The path carried by this expression, if it is one.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Expression::Path(path) => Some(&path.path),
            _ => None,
        }
    }
}

/// Strip the leading block markers from a helper name.
///
/// `#if` and `^if` both identify the block `if`. Only leading markers are
/// structural; marker characters elsewhere in a name are left alone.
pub fn strip_block_markers(name: &str) -> &str {
    name.trim_start_matches(BLOCK_MARKERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_block_markers_leading_only() {
        assert_eq!(strip_block_markers("#if"), "if");
        assert_eq!(strip_block_markers("^unless"), "unless");
        assert_eq!(strip_block_markers("*inline"), "inline");
        assert_eq!(strip_block_markers("if"), "if");
    }

    #[test]
    fn test_strip_block_markers_ignores_interior_characters() {
        assert_eq!(strip_block_markers("#weird#name"), "weird#name");
    }

    #[test]
    fn test_as_helper_and_as_path() {
        let helper = Expression::helper_with_arguments("if", vec![Expression::path("cond")]);
        assert_eq!(helper.as_helper().map(|h| h.name.as_str()), Some("if"));
        assert_eq!(helper.as_path(), None);

        let path = Expression::path("/if");
        assert_eq!(path.as_path(), Some("/if"));
        assert!(path.as_helper().is_none());
    }
}
