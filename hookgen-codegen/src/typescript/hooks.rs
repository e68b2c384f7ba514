//! Typed hook generation.

use crate::artifact::Artifact;
use crate::typescript::names::{constant_name, hook_name};
use crate::typescript::types::{optionality, ts_type};
use hookgen_schema::{Field, RootKind, Schema};

/// Generator for typed accessor hooks.
///
/// Each root field becomes one hook module that invokes the execution
/// primitive with the matching operation constant and, when the field takes
/// arguments, a typed variables record.
pub struct HookGenerator<'a> {
    schema: &'a Schema,
}

impl<'a> HookGenerator<'a> {
    /// Creates a new hook generator.
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Generates one hook artifact per root field, in schema order.
    #[must_use]
    pub fn generate(&self, root: RootKind) -> Vec<Artifact> {
        self.schema
            .root_fields(root)
            .iter()
            .map(|field| self.generate_hook(root, field))
            .collect()
    }

    /// Generates the hook module for a single field.
    fn generate_hook(&self, root: RootKind, field: &Field) -> Artifact {
        let primitive = execution_primitive(root);
        let name = hook_name(&field.name);
        let constant = constant_name(&field.name);

        let mut output = String::new();

        output.push_str(&format!("import {primitive} from './{primitive}'\n"));
        output.push_str(&format!(
            "import {{ {constant} }} from '{}'\n\n",
            constants_module(root)
        ));

        if !field.args.is_empty() {
            output.push_str("interface Variables {\n");
            for arg in &field.args {
                output.push_str(&format!(
                    "  {}{}: {}\n",
                    arg.name,
                    optionality(&arg.ty),
                    ts_type(&arg.ty)
                ));
            }
            output.push_str("}\n\n");
        }

        // The variables record itself can be omitted at the call site only
        // when every member is individually optional.
        let parameter = if field.args.is_empty() {
            ""
        } else if field.args.iter().all(|arg| optionality(&arg.ty) == "?") {
            "variables?: Variables"
        } else {
            "variables: Variables"
        };

        let result_type = format!("{{ {}: {} }}", field.name, ts_type(&field.ty));

        output.push_str(&format!("const {name} = ({parameter}) => {{\n"));
        if field.args.is_empty() {
            output.push_str(&format!("  return {primitive}<{result_type}>({constant})\n"));
        } else {
            output.push_str(&format!(
                "  return {primitive}<{result_type}>({constant}, {{ variables: variables }})\n"
            ));
        }
        output.push_str("}\n\n");
        output.push_str(&format!("export default {name}\n"));

        Artifact::new(name, output)
    }
}

/// Returns the execution primitive a hook of the given kind invokes.
const fn execution_primitive(root: RootKind) -> &'static str {
    match root {
        RootKind::Query => "useQuery",
        RootKind::Mutation => "useMutation",
    }
}

/// Returns the module the operation constants are imported from.
const fn constants_module(root: RootKind) -> &'static str {
    match root {
        RootKind::Query => "@core/graphql/queries",
        RootKind::Mutation => "@core/graphql/mutations",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hookgen_schema::{Argument, ObjectType, TypeRef};

    fn schema_with_root(root: &str, fields: Vec<Field>) -> Schema {
        let mut object = ObjectType::new(root);
        for field in fields {
            object.add_field(field);
        }
        let mut schema = Schema::new();
        schema.add_type(object);
        schema
    }

    #[test]
    fn test_hook_with_required_argument() {
        let mut field = Field::new("user", TypeRef::named("User"));
        field.add_arg(Argument::new(
            "id",
            TypeRef::non_null(TypeRef::named("ID")),
        ));
        let schema = schema_with_root("Query", vec![field]);

        let artifacts = HookGenerator::new(&schema).generate(RootKind::Query);
        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].label, "useUser");

        let content = &artifacts[0].content;
        assert!(content.contains("import useQuery from './useQuery'"));
        assert!(content.contains("import { USER } from '@core/graphql/queries'"));
        assert!(content.contains("interface Variables {\n  id: string\n}"));
        assert!(content.contains("const useUser = (variables: Variables) => {"));
        assert!(content.contains("return useQuery<{ user: User }>(USER, { variables: variables })"));
        assert!(content.contains("export default useUser"));
    }

    #[test]
    fn test_hook_variables_optional_when_all_arguments_optional() {
        let mut field = Field::new("posts", TypeRef::list(TypeRef::named("Post")));
        field.add_arg(Argument::new("limit", TypeRef::named("Int")));
        field.add_arg(Argument::new("offset", TypeRef::named("Int")));
        let schema = schema_with_root("Query", vec![field]);

        let artifacts = HookGenerator::new(&schema).generate(RootKind::Query);
        let content = &artifacts[0].content;
        assert!(content.contains("  limit?: number\n"));
        assert!(content.contains("  offset?: number\n"));
        assert!(content.contains("const usePosts = (variables?: Variables) => {"));
    }

    #[test]
    fn test_hook_variables_required_when_any_argument_required() {
        let mut field = Field::new("search", TypeRef::list(TypeRef::named("Result")));
        field.add_arg(Argument::new(
            "term",
            TypeRef::non_null(TypeRef::named("String")),
        ));
        field.add_arg(Argument::new("limit", TypeRef::named("Int")));
        let schema = schema_with_root("Query", vec![field]);

        let artifacts = HookGenerator::new(&schema).generate(RootKind::Query);
        let content = &artifacts[0].content;
        assert!(content.contains("  term: string\n"));
        assert!(content.contains("  limit?: number\n"));
        assert!(content.contains("const useSearch = (variables: Variables) => {"));
    }

    #[test]
    fn test_hook_without_arguments() {
        let schema = schema_with_root(
            "Query",
            vec![Field::new("users", TypeRef::list(TypeRef::named("User")))],
        );

        let artifacts = HookGenerator::new(&schema).generate(RootKind::Query);
        let content = &artifacts[0].content;
        assert!(!content.contains("interface Variables"));
        assert!(content.contains("const useUsers = () => {"));
        assert!(content.contains("return useQuery<{ users: User[] }>(USERS)\n"));
    }

    #[test]
    fn test_mutation_hook_uses_mutation_primitive() {
        let mut field = Field::new("createUser", TypeRef::named("User"));
        field.add_arg(Argument::new(
            "name",
            TypeRef::non_null(TypeRef::named("String")),
        ));
        let schema = schema_with_root("Mutation", vec![field]);

        let artifacts = HookGenerator::new(&schema).generate(RootKind::Mutation);
        let content = &artifacts[0].content;
        assert!(content.contains("import useMutation from './useMutation'"));
        assert!(content.contains("import { CREATE_USER } from '@core/graphql/mutations'"));
        assert!(content.contains(
            "return useMutation<{ createUser: User }>(CREATE_USER, { variables: variables })"
        ));
    }

    #[test]
    fn test_hook_return_type_maps_scalars() {
        let schema = schema_with_root(
            "Query",
            vec![Field::new(
                "count",
                TypeRef::non_null(TypeRef::named("Int")),
            )],
        );

        let artifacts = HookGenerator::new(&schema).generate(RootKind::Query);
        assert!(artifacts[0]
            .content
            .contains("return useQuery<{ count: number }>(COUNT)"));
    }
}
