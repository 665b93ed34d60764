//! The introspection meta-schema.

mod query;
mod resolvers;

use arcstr::literal;

use crate::{
    ast::InputValue,
    error::SchemaError,
    schema::{
        meta::{EnumMeta, EnumValue, Field, ObjectMeta},
        registry::Registry,
    },
    types::base::TypeKind,
};

/// The desired GraphQL introspection format for the canonical query
/// (<https://github.com/graphql/graphql-js/blob/8c96dc8276f2de27b8af9ffbd71a4597d483523f/src/utilities/introspectionQuery.js#L21>)
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum IntrospectionFormat {
    /// The canonical GraphQL introspection query.
    #[default]
    All,
    /// The canonical GraphQL introspection query without descriptions.
    WithoutDescriptions,
}

/// Registers `__Schema`, `__Type`, `__Field`, `__InputValue`, `__EnumValue`
/// and `__TypeKind`.
///
/// Meta-types refer to each other by name, so they can be registered in any
/// order. Returns the `__schema` and `__type` fields resolved on the query
/// root.
pub(crate) fn register_meta_types(registry: &mut Registry) -> Result<Vec<Field>, SchemaError> {
    let string = registry.named("String")?;
    let boolean = registry.named("Boolean")?;
    let schema = registry.named("__Schema")?;
    let ty = registry.named("__Type")?;
    let field = registry.named("__Field")?;
    let input_value = registry.named("__InputValue")?;
    let enum_value = registry.named("__EnumValue")?;
    let type_kind = registry.named("__TypeKind")?;

    let include_deprecated = registry
        .arg("includeDeprecated", boolean.clone())
        .default_value(InputValue::scalar(false));

    let schema_fields = [
        registry
            .field("description", string.clone())
            .resolver(resolvers::schema_description),
        registry
            .field("types", ty.clone().non_null().list().non_null())
            .description(literal!("A list of all types supported by this server."))
            .resolver(resolvers::schema_types),
        registry
            .field("queryType", ty.clone().non_null())
            .description(literal!("The type that query operations will be rooted at."))
            .resolver(resolvers::schema_query_type),
        registry
            .field("mutationType", ty.clone())
            .description(literal!(
                "If this server supports mutation, the type that mutation operations will be \
                 rooted at."
            ))
            .resolver(resolvers::schema_mutation_type),
        registry
            .field("subscriptionType", ty.clone())
            .description(literal!(
                "If this server support subscription, the type that subscription operations \
                 will be rooted at."
            ))
            .resolver(resolvers::schema_subscription_type),
    ];
    registry.register(
        ObjectMeta::new(literal!("__Schema"), &schema_fields)
            .description(literal!(
                "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
                 available types and directives on the server, as well as the entry points for \
                 query, mutation, and subscription operations."
            ))
            .into_meta(),
    )?;

    let type_fields = [
        registry
            .field("kind", type_kind.non_null())
            .resolver(resolvers::type_kind),
        registry
            .field("name", string.clone())
            .resolver(resolvers::type_name),
        registry
            .field("description", string.clone())
            .resolver(resolvers::type_description),
        registry
            .field("specifiedByURL", string.clone())
            .resolver(resolvers::type_specified_by_url),
        registry
            .field("fields", field.non_null().list())
            .argument(include_deprecated.clone())
            .resolver(resolvers::type_fields),
        registry
            .field("interfaces", ty.clone().non_null().list())
            .resolver(resolvers::type_interfaces),
        registry
            .field("possibleTypes", ty.clone().non_null().list())
            .resolver(resolvers::type_possible_types),
        registry
            .field("enumValues", enum_value.non_null().list())
            .argument(include_deprecated)
            .resolver(resolvers::type_enum_values),
        registry
            .field("inputFields", input_value.clone().non_null().list())
            .resolver(resolvers::type_input_fields),
        registry
            .field("ofType", ty.clone())
            .resolver(resolvers::type_of_type),
    ];
    registry.register(
        ObjectMeta::new(literal!("__Type"), &type_fields)
            .description(literal!(
                "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
                 types in GraphQL as represented by the `__TypeKind` enum.\n\nDepending on the \
                 kind of a type, certain fields describe information about that type. Scalar \
                 types provide no information beyond a name, description and optional \
                 `specifiedByURL`, while Enum types provide their values. Object and Interface \
                 types provide the fields they describe. Abstract types, Union and Interface, \
                 provide the Object types possible at runtime. List and NonNull types compose \
                 other types."
            ))
            .into_meta(),
    )?;

    let name = registry
        .field("name", string.clone().non_null())
        .resolver(resolvers::member_name);
    let description = registry
        .field("description", string.clone())
        .resolver(resolvers::member_description);
    let is_deprecated = registry
        .field("isDeprecated", boolean.non_null())
        .resolver(resolvers::member_is_deprecated);
    let deprecation_reason = registry
        .field("deprecationReason", string.clone())
        .resolver(resolvers::member_deprecation_reason);
    let type_of = registry
        .field("type", ty.clone().non_null())
        .resolver(resolvers::field_type);
    let args = registry
        .field("args", input_value.non_null().list().non_null())
        .resolver(resolvers::field_args);
    let default_value = registry
        .field("defaultValue", string.clone())
        .description(literal!(
            "A GraphQL-formatted string representing the default value for this input value."
        ))
        .resolver(resolvers::input_value_default_value);

    registry.register(
        ObjectMeta::new(
            literal!("__Field"),
            &[
                name.clone(),
                description.clone(),
                args,
                type_of.clone(),
                is_deprecated.clone(),
                deprecation_reason.clone(),
            ],
        )
        .description(literal!(
            "Object and Interface types are described by a list of Fields, each of which has a \
             name, potentially a list of arguments, and a return type."
        ))
        .into_meta(),
    )?;

    registry.register(
        ObjectMeta::new(
            literal!("__InputValue"),
            &[
                name.clone(),
                description.clone(),
                type_of,
                default_value,
                is_deprecated.clone(),
                deprecation_reason.clone(),
            ],
        )
        .description(literal!(
            "Arguments provided to Fields or Directives and the input fields of an InputObject \
             are represented as Input Values which describe their type and optionally a default \
             value."
        ))
        .into_meta(),
    )?;

    registry.register(
        ObjectMeta::new(
            literal!("__EnumValue"),
            &[name, description, is_deprecated, deprecation_reason],
        )
        .description(literal!(
            "One possible value for a given Enum. Enum values are unique values, not a \
             placeholder for a string or numeric value. However an Enum value is returned in a \
             JSON response as a string."
        ))
        .into_meta(),
    )?;

    let kinds = TypeKind::ALL
        .iter()
        .map(|k| EnumValue::new(k.as_str().into()).description(k.description().into()))
        .collect::<Vec<_>>();
    registry.register(
        EnumMeta::new(literal!("__TypeKind"), &kinds)
            .description(literal!(
                "An enum describing what kind of type a given `__Type` is."
            ))
            .into_meta(),
    )?;

    let type_name = registry.arg("name", string.non_null());
    Ok(vec![
        registry
            .field("__schema", schema.non_null())
            .description(literal!("Access the current type schema of this server."))
            .resolver(resolvers::root_schema),
        registry
            .field("__type", ty)
            .description(literal!("Request the type information of a single type."))
            .argument(type_name)
            .resolver(resolvers::root_type),
    ])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        ast::InputValue,
        schema::{meta::MetaType, registry::Registry},
    };

    use super::register_meta_types;

    fn field_names(registry: &Registry, name: &str) -> Vec<String> {
        match registry.get(name) {
            Some(MetaType::Object(o)) => o.fields.iter().map(|f| f.name.to_string()).collect(),
            t => panic!("expected object `{name}`, found {t:?}"),
        }
    }

    #[test]
    fn meta_types_only_wait_on_scalars() {
        let mut registry = Registry::new();

        register_meta_types(&mut registry).unwrap();

        let mut pending = registry.placeholders().collect::<Vec<_>>();
        pending.sort_unstable();
        assert_eq!(pending, ["Boolean", "String"]);
    }

    #[test]
    fn type_exposes_standard_fields() {
        let mut registry = Registry::new();
        register_meta_types(&mut registry).unwrap();

        assert_eq!(
            field_names(&registry, "__Type"),
            [
                "kind",
                "name",
                "description",
                "specifiedByURL",
                "fields",
                "interfaces",
                "possibleTypes",
                "enumValues",
                "inputFields",
                "ofType",
            ],
        );
        assert_eq!(
            field_names(&registry, "__InputValue"),
            [
                "name",
                "description",
                "type",
                "defaultValue",
                "isDeprecated",
                "deprecationReason",
            ],
        );
    }

    #[test]
    fn every_meta_field_has_a_resolver() {
        let mut registry = Registry::new();
        let roots = register_meta_types(&mut registry).unwrap();

        for meta in registry.types.values() {
            if let MetaType::Object(o) = meta {
                for f in &o.fields {
                    assert!(f.resolver.is_some(), "{}.{} has no resolver", o.name, f.name);
                }
            }
        }
        assert!(roots.iter().all(|f| f.resolver.is_some()));
    }

    #[test]
    fn include_deprecated_defaults_to_false() {
        let mut registry = Registry::new();
        register_meta_types(&mut registry).unwrap();

        let Some(MetaType::Object(ty)) = registry.get("__Type") else {
            panic!("`__Type` is not registered");
        };
        for name in ["fields", "enumValues"] {
            let arg = ty
                .fields
                .iter()
                .find(|f| f.name == name)
                .and_then(|f| f.arguments.as_ref())
                .and_then(|args| args.first())
                .unwrap();

            assert_eq!(arg.name.as_str(), "includeDeprecated");
            assert_eq!(arg.default_value, Some(InputValue::scalar(false)));
        }
    }

    #[test]
    fn type_kind_lists_every_kind() {
        let mut registry = Registry::new();
        register_meta_types(&mut registry).unwrap();

        let Some(MetaType::Enum(kinds)) = registry.get("__TypeKind") else {
            panic!("`__TypeKind` is not registered");
        };
        let values = kinds
            .values
            .iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            values,
            [
                "SCALAR",
                "OBJECT",
                "INTERFACE",
                "UNION",
                "ENUM",
                "INPUT_OBJECT",
                "LIST",
                "NON_NULL",
            ],
        );
    }
}
