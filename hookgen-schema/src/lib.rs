//! # HookGen Schema
//!
//! GraphQL introspection data model and parser.
//!
//! This crate provides:
//! - Type definitions for the slice of an introspection result the
//!   generator consumes
//! - The recursive type-wrapper representation (`TypeRef`)
//! - JSON wire-format parsing into the typed model

pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::parse_introspection;
pub use types::{Argument, Field, ObjectType, RootKind, Schema, TypeRef};
