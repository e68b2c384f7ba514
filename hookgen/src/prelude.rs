//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use hookgen::prelude::*;
//! ```

// Schema types
pub use hookgen_schema::{
    Argument, Field, ObjectType, ParseError, RootKind, Schema, TypeRef, parse_introspection,
};

// Generation types
pub use hookgen_codegen::{
    Artifact, CodegenError, GenMode, Generator, generate_from_json, write_artifacts,
};

// Client types
pub use hookgen_client::{ClientError, INTROSPECTION_QUERY, IntrospectionClient, introspect};
