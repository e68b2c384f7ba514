//! # HookGen Codegen
//!
//! TypeScript code generation from GraphQL introspection schemas.
//!
//! This crate provides:
//! - GraphQL operation-document generation for root fields
//! - Typed Apollo hook generation
//! - Identifier and type resolution for emitted source
//! - Artifact output to a directory

pub mod artifact;
pub mod error;
pub mod generator;
pub mod output;
pub mod typescript;

pub use artifact::Artifact;
pub use error::CodegenError;
pub use generator::{GenMode, Generator};
pub use output::write_artifacts;

use hookgen_schema::RootKind;

/// Generates artifacts from an introspection response body.
///
/// # Arguments
/// * `json` - Introspection response JSON
/// * `root` - Root operation kind to generate for
/// * `mode` - Artifact flavor to emit
///
/// # Returns
/// One artifact per field of the chosen root type.
///
/// # Errors
/// Returns `CodegenError` if the introspection JSON cannot be parsed.
pub fn generate_from_json(
    json: &str,
    root: RootKind,
    mode: GenMode,
) -> Result<Vec<Artifact>, CodegenError> {
    let schema = hookgen_schema::parse_introspection(json)?;
    let generator = Generator::new(&schema);
    Ok(generator.generate(root, mode))
}
