//! # HookGen
//!
//! GraphQL operation and typed hook generation from introspection results.
//!
//! HookGen ingests a GraphQL introspection response and mechanically
//! derives operation documents for every field of the `Query` and
//! `Mutation` root types, plus typed Apollo hook modules that invoke those
//! operations with correctly-typed variables.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hookgen::prelude::*;
//! use std::path::Path;
//!
//! // Fetch the schema from a running endpoint
//! let schema = IntrospectionClient::new("http://localhost:4000/graphql")
//!     .introspect()
//!     .await?;
//!
//! // Generate operation documents and hooks for the Query root
//! let generator = Generator::new(&schema);
//! let documents = generator.generate(RootKind::Query, GenMode::Document);
//! let hooks = generator.generate(RootKind::Query, GenMode::Hook);
//!
//! // Write one file per artifact
//! write_artifacts(Path::new("generated/queries"), &documents)?;
//! write_artifacts(Path::new("generated/hooks"), &hooks)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Introspection data model and JSON parsing
//! - [`codegen`] - Document and hook generation, artifact output
//! - [`client`] - Async introspection fetch

pub mod prelude;

/// Introspection data model and JSON parsing.
pub mod schema {
    pub use hookgen_schema::*;
}

/// Document and hook generation, artifact output.
pub mod codegen {
    pub use hookgen_codegen::*;
}

/// Async introspection fetch.
pub mod client {
    pub use hookgen_client::*;
}

// Re-export commonly used items at the crate root
pub use hookgen_client::{ClientError, IntrospectionClient};
pub use hookgen_codegen::{Artifact, CodegenError, GenMode, Generator, write_artifacts};
pub use hookgen_schema::{ParseError, RootKind, Schema};
