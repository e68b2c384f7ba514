//! Schema type definitions.
//!
//! This module contains the data structures representing the slice of a
//! GraphQL introspection result the generator consumes: object types, their
//! fields, field arguments, and the recursive type-wrapper references.

use std::collections::HashMap;

/// GraphQL type reference.
///
/// Introspection reports types through a `kind`/`name`/`ofType` chain: a
/// named leaf wrapped in a finite stack of list and non-null modifiers.
/// Wrapper nesting has no fixed depth limit but always terminates at a
/// named leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A leaf scalar or object type.
    Named(String),
    /// A list wrapping another type.
    List(Box<TypeRef>),
    /// A non-null wrapper around another type.
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a named leaf reference.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Wraps a reference in a list.
    #[must_use]
    pub fn list(of: TypeRef) -> Self {
        Self::List(Box::new(of))
    }

    /// Wraps a reference in a non-null modifier.
    #[must_use]
    pub fn non_null(of: TypeRef) -> Self {
        Self::NonNull(Box::new(of))
    }

    /// Returns the innermost named type.
    #[must_use]
    pub fn leaf_name(&self) -> &str {
        match self {
            Self::Named(name) => name,
            Self::List(of) | Self::NonNull(of) => of.leaf_name(),
        }
    }

    /// Returns the number of list wrappers in the chain.
    #[must_use]
    pub fn list_depth(&self) -> usize {
        match self {
            Self::Named(_) => 0,
            Self::List(of) => 1 + of.list_depth(),
            Self::NonNull(of) => of.list_depth(),
        }
    }
}

/// Field argument definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Default value literal, verbatim from the schema.
    pub default_value: Option<String>,
    /// Argument type.
    pub ty: TypeRef,
}

impl Argument {
    /// Creates a new argument without a default value.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            ty,
        }
    }

    /// Sets the default value literal.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Field definition within an object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Arguments in schema order.
    pub args: Vec<Argument>,
    /// Return type.
    pub ty: TypeRef,
}

impl Field {
    /// Creates a new field with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            ty,
        }
    }

    /// Adds an argument to the field.
    pub fn add_arg(&mut self, arg: Argument) {
        self.args.push(arg);
    }
}

/// Object type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    /// Type name.
    pub name: String,
    /// Fields in schema order.
    pub fields: Vec<Field>,
}

impl ObjectType {
    /// Creates a new object type with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the type.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }
}

/// Root operation kind.
///
/// Selects which distinguished root object type drives generation and which
/// operation keyword the emitted documents carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RootKind {
    /// The `Query` root type.
    #[default]
    Query,
    /// The `Mutation` root type.
    Mutation,
}

impl RootKind {
    /// Returns the root object type name.
    #[must_use]
    pub const fn object_name(&self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Mutation => "Mutation",
        }
    }

    /// Returns the operation keyword used in documents.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }

    /// Parses a root kind from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            _ => None,
        }
    }
}

/// Parsed introspection schema.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// Object type definitions in wire order.
    pub types: Vec<ObjectType>,
    /// Type lookup map (built as types are added).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object type to the schema.
    pub fn add_type(&mut self, object: ObjectType) {
        let name = object.name.clone();
        let index = self.types.len();
        self.types.push(object);
        self.type_map.insert(name, index);
    }

    /// Looks up an object type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&ObjectType> {
        self.type_map.get(name).map(|&idx| &self.types[idx])
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Returns the fields of the given root type.
    ///
    /// A schema without that root yields an empty slice, not an error.
    #[must_use]
    pub fn root_fields(&self, root: RootKind) -> &[Field] {
        self.get_type(root.object_name())
            .map_or(&[], |object| object.fields.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_leaf_name() {
        let ty = TypeRef::non_null(TypeRef::list(TypeRef::named("String")));
        assert_eq!(ty.leaf_name(), "String");
        assert_eq!(TypeRef::named("ID").leaf_name(), "ID");
    }

    #[test]
    fn test_type_ref_list_depth() {
        assert_eq!(TypeRef::named("Int").list_depth(), 0);
        assert_eq!(TypeRef::list(TypeRef::named("Int")).list_depth(), 1);
        assert_eq!(
            TypeRef::non_null(TypeRef::list(TypeRef::list(TypeRef::named("Int")))).list_depth(),
            2
        );
    }

    #[test]
    fn test_argument_with_default() {
        let arg = Argument::new("limit", TypeRef::named("Int")).with_default("10");
        assert_eq!(arg.default_value.as_deref(), Some("10"));
    }

    #[test]
    fn test_root_kind_names() {
        assert_eq!(RootKind::Query.object_name(), "Query");
        assert_eq!(RootKind::Query.keyword(), "query");
        assert_eq!(RootKind::Mutation.object_name(), "Mutation");
        assert_eq!(RootKind::Mutation.keyword(), "mutation");
    }

    #[test]
    fn test_root_kind_parse() {
        assert_eq!(RootKind::parse("query"), Some(RootKind::Query));
        assert_eq!(RootKind::parse("Mutation"), Some(RootKind::Mutation));
        assert_eq!(RootKind::parse("subscription"), None);
    }

    #[test]
    fn test_schema_type_lookup() {
        let mut schema = Schema::new();
        schema.add_type(ObjectType::new("Query"));

        assert!(schema.has_type("Query"));
        assert!(!schema.has_type("Mutation"));
        assert!(schema.get_type("Query").is_some());
    }

    #[test]
    fn test_root_fields_missing_root() {
        let schema = Schema::new();
        assert!(schema.root_fields(RootKind::Query).is_empty());
        assert!(schema.root_fields(RootKind::Mutation).is_empty());
    }

    #[test]
    fn test_root_fields_order() {
        let mut query = ObjectType::new("Query");
        query.add_field(Field::new("first", TypeRef::named("Int")));
        query.add_field(Field::new("second", TypeRef::named("Int")));

        let mut schema = Schema::new();
        schema.add_type(query);

        let names: Vec<_> = schema
            .root_fields(RootKind::Query)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second"]);
    }
}
