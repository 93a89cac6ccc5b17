//! Token conversion pipeline
//!
//! This module chains `TokenConverter` implementations together. The pipeline
//! is intentionally focused on stream rewrites only; binding the converted
//! stream to helper implementations lives in the compile stage, outside this
//! crate.

use crate::grips::converting::chain_expansion::ChainExpander;
use crate::grips::converting::converter::{ConversionError, TokenConverter};
use crate::grips::helpers::HelperRegistry;
use crate::grips::tokens::Token;

/// A pipeline that chains token converters for the conversion stage.
pub struct ConversionPipeline {
    converters: Vec<Box<dyn TokenConverter>>,
}

impl ConversionPipeline {
    /// Create a new empty conversion pipeline.
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// The standard pipeline run before compilation.
    ///
    /// Currently a single converter: chain expansion. Kept as a pipeline so
    /// the compile stage has one stable entry point when converters are added.
    pub fn standard(registry: &HelperRegistry) -> Self {
        let mut pipeline = Self::new();
        pipeline.add_converter(ChainExpander::new(registry.clone()));
        pipeline
    }

    /// Add a converter to the pipeline.
    ///
    /// Converters are executed in the order they are added.
    pub fn add_converter<T: TokenConverter + 'static>(&mut self, converter: T) {
        self.converters.push(Box::new(converter));
    }

    /// Number of converters registered in the pipeline.
    pub fn converter_count(&self) -> usize {
        self.converters.len()
    }

    /// Run every converter over the stream in order.
    pub fn run(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ConversionError> {
        let mut stream = tokens;
        for converter in &mut self.converters {
            stream = converter.convert(stream)?;
        }
        Ok(stream)
    }
}

impl Default for ConversionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
