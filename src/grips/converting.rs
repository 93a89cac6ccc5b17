//! Token conversion pipeline
//!
//!     Between parsing and compilation the token stream goes through an
//!     ordered list of converters. Each converter is a pure stream-to-stream
//!     rewrite: it may reorder nothing, it may synthesize tokens, but it never
//!     mutates a token body it did not create. The compile stage relies on the
//!     converted stream being well-nested, so converter failures abort the
//!     whole compilation rather than hand over a partially rewritten stream.
//!
//! The pipeline consists of:
//! 1. Chain expansion (./converting/chain_expansion.rs): rewrites
//!    `else`-alternative chains into plain nested blocks so the compiler needs
//!    no special-case knowledge of chained alternatives.

pub mod chain_expansion;
pub mod converter;
pub mod pipeline;

pub use chain_expansion::{expand, ChainExpander};
pub use converter::{ConversionError, TokenConverter};
pub use pipeline::ConversionPipeline;
