//! Type resolution for generated source.
//!
//! Pure recursive functions over a `TypeRef`, each terminating at the named
//! leaf. They produce the three renderings a generated artifact needs:
//! GraphQL SDL syntax, TypeScript syntax, and the optionality marker for
//! declaration sites.

use hookgen_schema::TypeRef;

/// Maps a schema scalar name to its TypeScript counterpart.
///
/// Names absent from the table pass through unchanged and are treated as
/// references to generated object types.
#[must_use]
pub fn scalar_type(name: &str) -> &str {
    match name {
        "ID" | "UUID" | "String" => "string",
        "Boolean" => "boolean",
        "Int" | "Float" => "number",
        "DateOnly" | "DateTime" => "Date",
        "FieldInput" => "any",
        other => other,
    }
}

/// Renders GraphQL SDL type syntax.
///
/// Brackets wrap whatever a list wraps and `!` is appended after the full
/// rendering of whatever a non-null wraps, so
/// `NonNull(List(Named("String")))` renders `[String]!`.
#[must_use]
pub fn graphql_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => name.clone(),
        TypeRef::List(of) => format!("[{}]", graphql_type(of)),
        TypeRef::NonNull(of) => format!("{}!", graphql_type(of)),
    }
}

/// Renders TypeScript type syntax.
///
/// The scalar table is consulted with the leaf's bare name only; non-null
/// wrappers are transparent here (optionality is handled separately) and
/// lists append `[]`.
#[must_use]
pub fn ts_type(ty: &TypeRef) -> String {
    match ty {
        TypeRef::Named(name) => scalar_type(name).to_string(),
        TypeRef::List(of) => format!("{}[]", ts_type(of)),
        TypeRef::NonNull(of) => ts_type(of),
    }
}

/// Returns the optionality marker for a declaration site.
///
/// A non-null wrapper makes the declaration required and a bare named type
/// makes it optional. A list defers to whatever its element wrapper
/// reports: a nullable list of non-null elements is reported as required.
#[must_use]
pub fn optionality(ty: &TypeRef) -> &'static str {
    match ty {
        TypeRef::NonNull(_) => "",
        TypeRef::Named(_) => "?",
        TypeRef::List(of) => optionality(of),
    }
}
