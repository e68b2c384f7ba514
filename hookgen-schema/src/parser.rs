//! Introspection JSON parser.
//!
//! This module converts the JSON wire format of a GraphQL introspection
//! response into the internal schema representation. Both the full HTTP
//! envelope (`{"data": {"__schema": ...}}`) and a bare `{"__schema": ...}`
//! object are accepted.

use crate::error::ParseError;
use crate::types::{Argument, Field, ObjectType, Schema, TypeRef};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WireEnvelope {
    data: Option<WireDocument>,
    #[serde(rename = "__schema")]
    schema: Option<WireSchema>,
}

#[derive(Debug, Deserialize)]
struct WireDocument {
    #[serde(rename = "__schema")]
    schema: Option<WireSchema>,
}

#[derive(Debug, Deserialize)]
struct WireSchema {
    types: Vec<WireType>,
}

#[derive(Debug, Deserialize)]
struct WireType {
    name: String,
    /// Null for scalar and enum wire types.
    #[serde(default)]
    fields: Option<Vec<WireField>>,
}

#[derive(Debug, Deserialize)]
struct WireField {
    name: String,
    #[serde(default)]
    args: Vec<WireArgument>,
    #[serde(rename = "type")]
    ty: WireTypeRef,
}

#[derive(Debug, Deserialize)]
struct WireArgument {
    name: String,
    #[serde(rename = "defaultValue")]
    default_value: Option<String>,
    #[serde(rename = "type")]
    ty: WireTypeRef,
}

#[derive(Debug, Deserialize)]
struct WireTypeRef {
    kind: String,
    name: Option<String>,
    #[serde(rename = "ofType")]
    of_type: Option<Box<WireTypeRef>>,
}

/// Parses a GraphQL introspection response from a JSON string.
///
/// # Arguments
/// * `json` - Introspection response body
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, carries no `__schema`
/// object, or contains a wrapper chain the typed model cannot represent.
pub fn parse_introspection(json: &str) -> Result<Schema, ParseError> {
    let envelope: WireEnvelope = serde_json::from_str(json)?;

    let wire_schema = envelope
        .data
        .and_then(|document| document.schema)
        .or(envelope.schema)
        .ok_or(ParseError::MissingSchema)?;

    let mut schema = Schema::new();
    for wire_type in wire_schema.types {
        schema.add_type(convert_type(wire_type)?);
    }

    Ok(schema)
}

/// Converts a wire type into an object type.
///
/// Wire types without fields (scalars, enums) become object types with an
/// empty field list.
fn convert_type(wire: WireType) -> Result<ObjectType, ParseError> {
    let mut object = ObjectType::new(wire.name);
    for wire_field in wire.fields.unwrap_or_default() {
        object.add_field(convert_field(wire_field)?);
    }
    Ok(object)
}

/// Converts a wire field and its arguments.
fn convert_field(wire: WireField) -> Result<Field, ParseError> {
    let ty = convert_type_ref(wire.ty, &wire.name)?;
    let mut field = Field::new(wire.name, ty);

    for wire_arg in wire.args {
        let ty = convert_type_ref(wire_arg.ty, &wire_arg.name)?;
        let mut argument = Argument::new(wire_arg.name, ty);
        if let Some(value) = wire_arg.default_value {
            argument = argument.with_default(value);
        }
        field.add_arg(argument);
    }

    Ok(field)
}

/// Converts a `kind`/`name`/`ofType` chain into a `TypeRef`.
///
/// `context` names the enclosing field or argument for error reporting.
fn convert_type_ref(wire: WireTypeRef, context: &str) -> Result<TypeRef, ParseError> {
    match wire.kind.as_str() {
        "LIST" => {
            let inner = wire.of_type.ok_or_else(|| ParseError::MissingOfType {
                kind: "LIST".to_string(),
                context: context.to_string(),
            })?;
            Ok(TypeRef::list(convert_type_ref(*inner, context)?))
        }
        "NON_NULL" => {
            let inner = wire.of_type.ok_or_else(|| ParseError::MissingOfType {
                kind: "NON_NULL".to_string(),
                context: context.to_string(),
            })?;
            Ok(TypeRef::non_null(convert_type_ref(*inner, context)?))
        }
        _ => wire
            .name
            .map(TypeRef::Named)
            .ok_or_else(|| ParseError::MissingName {
                context: context.to_string(),
            }),
    }
}
