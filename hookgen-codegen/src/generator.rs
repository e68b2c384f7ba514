//! Unified artifact generation.

use crate::artifact::Artifact;
use crate::typescript::{DocumentGenerator, HookGenerator};
use hookgen_schema::{RootKind, Schema};

/// Artifact flavor for a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenMode {
    /// GraphQL operation documents wrapped as Apollo constants.
    Document,
    /// Typed hook modules invoking those documents.
    Hook,
}

/// Artifact generator over a parsed schema.
///
/// One mode-parameterized entry point serves both artifact flavors and both
/// root kinds; every invocation is independent and produces artifacts fresh
/// from the schema snapshot.
pub struct Generator<'a> {
    schema: &'a Schema,
}

impl<'a> Generator<'a> {
    /// Creates a new generator over the given schema.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Generates one artifact per field of the chosen root type, in schema
    /// field order.
    ///
    /// A schema without that root yields an empty list, not an error.
    #[must_use]
    pub fn generate(&self, root: RootKind, mode: GenMode) -> Vec<Artifact> {
        match mode {
            GenMode::Document => DocumentGenerator::new(self.schema).generate(root),
            GenMode::Hook => HookGenerator::new(self.schema).generate(root),
        }
    }
}
