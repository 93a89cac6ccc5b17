//! Detokenizer for grips token streams
//!
//! This module provides functionality to convert a stream of tokens back into
//! template-tag text. It works at the token level and is useful for:
//!
//! - Round-trip inspection (source -> tokens -> source)
//! - Visualizing what a converter synthesized and where
//! - Snapshot assertions over converted streams
//!
//! The rendering is canonical, not byte-faithful: the original tag spelling
//! (extra spaces, argument quoting style) is not recorded on tokens, so the
//! detokenizer re-spells every tag the same way.

use crate::grips::expressions::{Expression, LiteralExpression};
use crate::grips::tokens::Token;

/// Trait for converting a token or tag body to its template-text form
pub trait ToTagString {
    fn to_tag_string(&self) -> String;
}

impl ToTagString for Expression {
    fn to_tag_string(&self) -> String {
        match self {
            Expression::Path(path) => path.path.clone(),
            Expression::Helper(helper) => {
                let mut rendered = helper.name.clone();
                for argument in &helper.arguments {
                    rendered.push(' ');
                    rendered.push_str(&argument.to_tag_string());
                }
                rendered
            }
            Expression::Literal(LiteralExpression::String(value)) => format!("\"{value}\""),
            Expression::Literal(LiteralExpression::Number(lexeme)) => lexeme.clone(),
            Expression::Literal(LiteralExpression::Boolean(value)) => value.to_string(),
        }
    }
}

impl ToTagString for Token {
    fn to_tag_string(&self) -> String {
        match self {
            Token::Text(text) => text.value.clone(),
            Token::Comment(comment) => format!("{{{{!-- {} --}}}}", comment.value),
            Token::Statement(statement) => {
                let (open, close) = if statement.is_escaped {
                    ("{{", "}}")
                } else {
                    ("{{{", "}}}")
                };
                format!(
                    "{open}{}{}{}{close}",
                    if statement.trim_before { "~" } else { "" },
                    statement.body.to_tag_string(),
                    if statement.trim_after { "~" } else { "" },
                )
            }
        }
    }
}

/// Detokenize a stream of tokens into template text
///
/// Concatenates the canonical rendering of each token in stream order.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::to_tag_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grips::expressions::Expression;
    use crate::grips::testing::factories::{mk_block_open, mk_closing, mk_else, mk_text};

    #[test]
    fn test_statement_rendering_covers_flags() {
        let trimmed = Token::statement(Expression::path("name"), true, true, false);
        assert_eq!(trimmed.to_tag_string(), "{{~name}}");

        let raw = Token::statement(Expression::path("html"), false, false, true);
        assert_eq!(raw.to_tag_string(), "{{{html~}}}");
    }

    #[test]
    fn test_helper_arguments_are_space_separated() {
        let call = Token::statement(
            Expression::helper_with_arguments(
                "#if",
                vec![Expression::path("a"), Expression::string_literal("b")],
            ),
            true,
            false,
            false,
        );
        assert_eq!(call.to_tag_string(), "{{#if a \"b\"}}");
    }

    #[test]
    fn test_detokenize_concatenates_in_order() {
        let tokens = vec![
            mk_block_open("if", vec![Expression::path("a")]),
            mk_text("x"),
            mk_else(),
            mk_text("y"),
            mk_closing("if"),
        ];
        assert_eq!(detokenize(&tokens), "{{#if a}}x{{else}}y{{/if}}");
    }
}
