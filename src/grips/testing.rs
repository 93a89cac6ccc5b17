//! Testing utilities for token stream assertions
//!
//!     Conversion tests always compare whole output streams against whole
//!     expected streams. Building those streams from raw struct literals
//!     drowns the intent in flag noise, so the factories below construct the
//!     common token shapes with the default flags (escaped, no trim) and let
//!     tests spell out flags only where a test is about flags.

/// Factory functions for building token streams in tests.
pub mod factories {
    use crate::grips::expressions::Expression;
    use crate::grips::tokens::Token;

    /// A raw text token.
    pub fn mk_text(value: &str) -> Token {
        Token::text(value)
    }

    /// A `{{name arg...}}` block-open statement, marked with `#`.
    pub fn mk_block_open(name: &str, arguments: Vec<Expression>) -> Token {
        mk_block_open_with_marker('#', name, arguments)
    }

    /// A block-open statement with an explicit `#`/`^`/`*` marker.
    pub fn mk_block_open_with_marker(
        marker: char,
        name: &str,
        arguments: Vec<Expression>,
    ) -> Token {
        Token::statement(
            Expression::helper_with_arguments(format!("{marker}{name}"), arguments),
            true,
            false,
            false,
        )
    }

    /// A `{{/name}}` closing statement.
    pub fn mk_closing(name: &str) -> Token {
        Token::statement(Expression::path(format!("/{name}")), true, false, false)
    }

    /// A bare `{{else}}` marker.
    pub fn mk_else() -> Token {
        Token::statement(Expression::helper("else"), true, false, false)
    }

    /// An `{{else name arg...}}` alternative head.
    pub fn mk_else_chain(name: &str, arguments: Vec<Expression>) -> Token {
        let mut all = vec![Expression::path(name)];
        all.extend(arguments);
        Token::statement(
            Expression::helper_with_arguments("else", all),
            true,
            false,
            false,
        )
    }
}
