//! Operation document generation.

use crate::artifact::Artifact;
use crate::typescript::names::constant_name;
use crate::typescript::types::graphql_type;
use hookgen_schema::{Field, RootKind, Schema};

/// Generator for GraphQL operation documents.
///
/// Each root field becomes one importable Apollo constant holding an
/// operation that selects the root field and `__typename` only.
pub struct DocumentGenerator<'a> {
    schema: &'a Schema,
}

impl<'a> DocumentGenerator<'a> {
    /// Creates a new document generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Generates one document artifact per root field, in schema order.
    #[must_use]
    pub fn generate(&self, root: RootKind) -> Vec<Artifact> {
        self.schema
            .root_fields(root)
            .iter()
            .map(|field| self.generate_document(root, field))
            .collect()
    }

    /// Generates the document module for a single field.
    fn generate_document(&self, root: RootKind, field: &Field) -> Artifact {
        let mut output = String::new();

        output.push_str("import { gql } from '@apollo/client'\n\n");
        output.push_str(&format!(
            "export const {} = gql`\n",
            constant_name(&field.name)
        ));

        if field.args.is_empty() {
            output.push_str(&format!("  {} {} {{\n", root.keyword(), field.name));
            output.push_str(&format!("    {} {{\n", field.name));
        } else {
            let declarations = field
                .args
                .iter()
                .map(|arg| {
                    let mut decl = format!("${}: {}", arg.name, graphql_type(&arg.ty));
                    if let Some(value) = &arg.default_value {
                        decl.push_str(&format!(" = {value}"));
                    }
                    decl
                })
                .collect::<Vec<_>>()
                .join(", ");

            let passing = field
                .args
                .iter()
                .map(|arg| format!("{name}: ${name}", name = arg.name))
                .collect::<Vec<_>>()
                .join(", ");

            output.push_str(&format!(
                "  {} {}({declarations}) {{\n",
                root.keyword(),
                field.name
            ));
            output.push_str(&format!("    {}({passing}) {{\n", field.name));
        }

        output.push_str("      __typename\n");
        output.push_str("    }\n");
        output.push_str("  }\n");
        output.push_str("`\n");

        Artifact::new(field.name.clone(), output)
    }
}
