//! Token types shared between the parse, conversion, and compile stages
//!
//!     The parse stage emits a flat, ordered sequence of tokens. Text and
//!     comments flow through conversion untouched; statements are the
//!     `{{ ... }}` tags and carry everything the later stages need: the parsed
//!     tag body plus the escaping and whitespace-trim flags exactly as written
//!     in source.
//!
//!     Converters never mutate a token body. When a converter needs to
//!     restructure the stream it synthesizes new statements around existing
//!     bodies, so the trim flags on every emitted token stay authoritative for
//!     the render stage.

use serde::{Deserialize, Serialize};

use crate::grips::expressions::Expression;

/// A single element of the template token stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Token {
    /// Raw template text between tags, emitted verbatim at render time.
    Text(TextToken),

    /// A `{{!-- ... --}}` comment tag. Dropped at render time but kept in the
    /// stream so converters preserve source order.
    Comment(CommentToken),

    /// A `{{ ... }}` template tag.
    Statement(StatementToken),
}

/// Raw text between tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextToken {
    pub value: String,
}

/// A comment tag body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentToken {
    pub value: String,
}

/// A template tag as written in source, or synthesized by a converter.
///
/// The trim flags record `~` whitespace control on each side of the tag. The
/// render stage honors them verbatim, which is why converters that synthesize
/// statements must decide each flag explicitly rather than copying blindly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementToken {
    /// The parsed tag body.
    pub body: Expression,

    /// False for triple-stache `{{{ ... }}}` tags, which render unescaped.
    pub is_escaped: bool,

    /// Whitespace before the tag is stripped when rendering.
    pub trim_before: bool,

    /// Whitespace after the tag is stripped when rendering.
    pub trim_after: bool,
}

impl Token {
    /// Build a text token.
    pub fn text(value: impl Into<String>) -> Token {
        Token::Text(TextToken {
            value: value.into(),
        })
    }

    /// Build a comment token.
    pub fn comment(value: impl Into<String>) -> Token {
        Token::Comment(CommentToken {
            value: value.into(),
        })
    }

    /// Build a statement token around a tag body.
    pub fn statement(
        body: Expression,
        is_escaped: bool,
        trim_before: bool,
        trim_after: bool,
    ) -> Token {
        Token::Statement(StatementToken {
            body,
            is_escaped,
            trim_before,
            trim_after,
        })
    }

    /// The statement carried by this token, if it is one.
    pub fn as_statement(&self) -> Option<&StatementToken> {
        match self {
            Token::Statement(statement) => Some(statement),
            _ => None,
        }
    }

    /// The tag body carried by this token, if it is a statement.
    ///
    /// Converters classify tokens by body, so this is the usual entry point
    /// for "is this tag a block open / a closing path / an else marker" checks.
    pub fn statement_body(&self) -> Option<&Expression> {
        self.as_statement().map(|statement| &statement.body)
    }
}
