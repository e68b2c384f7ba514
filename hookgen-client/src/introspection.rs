//! The introspection operation document.

/// Introspection query selecting the slice of the type graph the generator
/// consumes: object types, their fields, field arguments, and the
/// `kind`/`name`/`ofType` wrapper chains.
///
/// `ofType` is selected four levels deep, enough for the wrapper stacks
/// that occur at field and argument positions (e.g. `[Named!]!`).
pub const INTROSPECTION_QUERY: &str = "\
query IntrospectionQuery {
  __schema {
    types {
      name
      fields {
        name
        args {
          name
          defaultValue
          type {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
                ofType {
                  kind
                  name
                }
              }
            }
          }
        }
        type {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";
