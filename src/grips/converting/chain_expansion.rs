//! Chain expansion converter
//!
//!     Template authors write an n-way conditional as one block: a single
//!     `{{#if a}}` open, a run of `{{else helper args}}` alternatives, and a
//!     single `{{/if}}` close. The compile stage wants none of that: it treats
//!     every block-open token and its matching block-close token as one
//!     executable region and has no notion of a chained alternative.
//!
//!     This converter rewrites each alternative into an ordinary nested block.
//!     Every `{{else helper args}}` becomes a bare `else` marker followed by a
//!     synthesized `#helper args` open, and each synthesized open gets a
//!     synthesized close right before the enclosing block's close. The one
//!     real closing tag in the source terminates the whole chain; only
//!     synthesized closes are nested.
//!
//!     Whitespace-trim flags survive the rewrite exactly: the bare `else`
//!     marker keeps the original tag's leading trim, the synthesized open
//!     keeps its trailing trim, and every synthesized close copies the real
//!     closing tag's flags. Trim is only meaningful on the boundary adjacent
//!     to text, so the flags on the inserted inner edges are reset.
//!
//! Algorithm
//!
//!     One forward cursor is shared by every recursive call, and a call
//!     returns with the cursor sitting on the token that ended it; the caller
//!     inspects that token instead of advancing again.
//!
//!     1. Walk the stream. A statement whose helper call the registry
//!        resolves to a block open is emitted unchanged, then its body is
//!        walked recursively until the matching `/name` closing token, which
//!        is replaced by an equivalent synthesized close.
//!     2. Inside a body walk, an `else` carrying arguments starts an
//!        alternative: emit the bare marker and the synthesized open, then
//!        keep walking for the enclosing block's close name. When it is
//!        found, close the synthesized block there and return.
//!     3. Every other token passes through unchanged.
//!
//!     Running out of tokens while any block is still open aborts the whole
//!     conversion with `UnterminatedBlock`.

use crate::grips::converting::converter::{ConversionError, TokenConverter};
use crate::grips::expressions::{strip_block_markers, Expression, HelperExpression};
use crate::grips::helpers::HelperRegistry;
use crate::grips::tokens::{StatementToken, Token};

/// Forward cursor over a token slice, shared across recursive walks.
///
/// Mirrors an external iterator with an inspectable position: `advance` steps
/// onto the next token and returns it, `current` re-reads the token the
/// cursor sits on without moving. Once the stream is exhausted both return
/// `None`.
struct TokenCursor<'t> {
    tokens: &'t [Token],
    next: usize,
    current: Option<&'t Token>,
}

impl<'t> TokenCursor<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            next: 0,
            current: None,
        }
    }

    /// Step onto the next token and return it, or `None` at end of stream.
    fn advance(&mut self) -> Option<&'t Token> {
        self.current = self.tokens.get(self.next);
        if self.current.is_some() {
            self.next += 1;
        }
        self.current
    }

    /// The token the cursor currently sits on.
    fn current(&self) -> Option<&'t Token> {
        self.current
    }
}

/// The helper call opening a block, if this token is a block call.
fn block_call<'a>(token: &'a Token, registry: &HelperRegistry) -> Option<&'a HelperExpression> {
    let helper = token.statement_body()?.as_helper()?;
    if registry.is_block_call(&helper.name) {
        Some(helper)
    } else {
        None
    }
}

/// Whether this token is the `/name` closing element for `block_name`.
fn is_closing_element(token: &Token, block_name: &str) -> bool {
    token
        .statement_body()
        .and_then(Expression::as_path)
        .and_then(|path| path.strip_prefix('/'))
        == Some(block_name)
}

/// An `else` statement whose arguments open a new alternative block.
struct ElseChainHead<'a> {
    statement: &'a StatementToken,
    /// Name of the block the alternative opens, from the first argument.
    block_name: &'a str,
    /// Arguments handed to the synthesized open.
    arguments: &'a [Expression],
}

/// Classify a token as the head of an alternative chain.
///
/// Matches a statement calling `else` with at least one argument whose first
/// argument is a path; a bare `else` stays a pass-through marker, and an
/// `else` with a non-path first argument opens nothing.
fn else_chain_head(token: &Token) -> Option<ElseChainHead<'_>> {
    let statement = token.as_statement()?;
    let helper = statement.body.as_helper()?;
    if helper.name != "else" {
        return None;
    }
    let (first, rest) = helper.arguments.split_first()?;
    Some(ElseChainHead {
        statement,
        block_name: first.as_path()?,
        arguments: rest,
    })
}

/// Synthesized bare `else` marker replacing an alternative head.
fn else_marker(head: &StatementToken) -> Token {
    // Trailing trim belongs to the synthesized open that follows.
    Token::statement(
        Expression::helper("else"),
        head.is_escaped,
        head.trim_before,
        false,
    )
}

/// Synthesized block open for an alternative.
fn alternative_open(head: &ElseChainHead<'_>) -> Token {
    // Leading trim stays with the else marker in front of this open.
    Token::statement(
        Expression::helper_with_arguments(
            format!("#{}", head.block_name),
            head.arguments.to_vec(),
        ),
        head.statement.is_escaped,
        false,
        head.statement.trim_after,
    )
}

/// Synthesized `/name` close carrying the real closing tag's flags.
fn closing_statement(block_name: &str, end: &StatementToken) -> Token {
    Token::statement(
        Expression::path(format!("/{block_name}")),
        end.is_escaped,
        end.trim_before,
        end.trim_after,
    )
}

/// Rewrites `else` alternative chains into plain nested blocks.
///
/// The converted stream uses the same token vocabulary as the input and is
/// well-nested: every alternative becomes an ordinary block with its own open
/// and close, so downstream compilation needs no special case for chains.
pub struct ChainExpander {
    registry: HelperRegistry,
}

impl ChainExpander {
    /// Create a chain expander resolving block calls against `registry`.
    pub fn new(registry: HelperRegistry) -> Self {
        Self { registry }
    }

    fn expand_stream(&self, tokens: Vec<Token>) -> Result<Vec<Token>, ConversionError> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut cursor = TokenCursor::new(&tokens);

        while let Some(token) = cursor.advance() {
            match block_call(token, &self.registry) {
                Some(helper) => {
                    output.push(token.clone());
                    let block_name = strip_block_markers(&helper.name).to_string();
                    self.expand_block(&mut cursor, &block_name, &mut output)?;
                    let end = expect_shared_close(&cursor, &block_name)?;
                    output.push(closing_statement(&block_name, end));
                }
                None => output.push(token.clone()),
            }
        }

        Ok(output)
    }

    /// Walk one block body until the closing element for `block_name`.
    ///
    /// Returns with the cursor sitting on that closing token so the caller
    /// can read its flags. Reaching the end of the stream first is the fatal
    /// structural error of this pass.
    fn expand_block(
        &self,
        cursor: &mut TokenCursor<'_>,
        block_name: &str,
        output: &mut Vec<Token>,
    ) -> Result<(), ConversionError> {
        while let Some(token) = cursor.advance() {
            if is_closing_element(token, block_name) {
                return Ok(());
            }

            match else_chain_head(token) {
                Some(head) => {
                    output.push(else_marker(head.statement));
                    output.push(alternative_open(&head));

                    // The alternative shares the enclosing block's one real
                    // closing tag, so the nested walk matches block_name, not
                    // the alternative's own name.
                    self.expand_block(cursor, block_name, output)?;
                    let end = expect_shared_close(cursor, block_name)?;
                    output.push(closing_statement(head.block_name, end));
                    return Ok(());
                }
                None => output.push(token.clone()),
            }
        }

        Err(ConversionError::UnterminatedBlock {
            block: block_name.to_string(),
        })
    }
}

/// The closing statement the cursor must be sitting on after a body walk.
fn expect_shared_close<'t>(
    cursor: &TokenCursor<'t>,
    block_name: &str,
) -> Result<&'t StatementToken, ConversionError> {
    match cursor.current() {
        Some(token) if is_closing_element(token, block_name) => match token.as_statement() {
            Some(statement) => Ok(statement),
            None => Err(ConversionError::UnterminatedBlock {
                block: block_name.to_string(),
            }),
        },
        _ => Err(ConversionError::UnterminatedBlock {
            block: block_name.to_string(),
        }),
    }
}

impl TokenConverter for ChainExpander {
    fn name(&self) -> &str {
        "chain_expansion"
    }

    fn description(&self) -> &str {
        "Rewrites else alternative chains into plain nested blocks"
    }

    fn convert(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ConversionError> {
        self.expand_stream(tokens)
    }
}

/// Expand every alternative chain in `tokens` against `registry`.
///
/// This is the whole pass as one call: the returned stream is structurally
/// equivalent to the input with every chained alternative rewritten as a
/// nested block.
pub fn expand(tokens: Vec<Token>, registry: &HelperRegistry) -> Result<Vec<Token>, ConversionError> {
    ChainExpander::new(registry.clone()).expand_stream(tokens)
}
