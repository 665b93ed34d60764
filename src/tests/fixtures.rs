//! Widget catalogue schema shared by the scenario tests.

use arcstr::literal;
use indexmap::IndexMap;

use crate::{
    ast::InputValue,
    schema::{
        builder::SchemaBuilder,
        meta::{
            EnumMeta, EnumValue, InputObjectMeta, InterfaceMeta, ObjectMeta, ScalarMeta, UnionMeta,
        },
        model::{Introspected, SchemaType},
    },
    value::Value,
};

/// Builds the fixture schema.
///
/// ```graphql
/// type Query {
///   widget(id: ID!): Widget
///   widgets(filter: WidgetFilter, first: Int = 10): [Widget!]!
///   node(id: ID!): Node
///   search(text: String!): [Result!]!
/// }
/// type Widget implements Node {
///   id: ID!
///   legacyId: ID! @deprecated(reason: "Use `id`")
///   tags: [String!]
///   created: Date
///   color: Color
/// }
/// interface Node { id: ID! }
/// type A implements Node { id: ID! }
/// type B implements Node & Node { id: ID! }
/// interface Orphan { id: ID! }
/// union Result = A | B
/// enum Color { RED, MAGENTA @deprecated(reason: "Use RED"), BLUE }
/// input WidgetFilter {
///   name: String
///   color: Color = RED
///   legacy: Boolean @deprecated
/// }
/// scalar Date @specifiedBy(url: "https://tools.ietf.org/html/rfc3339")
/// ```
pub fn schema() -> SchemaType {
    let mut builder = SchemaBuilder::new("Query").description("Widget catalogue");
    let registry = builder.registry();

    let id = registry.named("ID").unwrap().non_null();
    let string = registry.named("String").unwrap();
    let widget = registry.named("Widget").unwrap();
    let node = registry.named("Node").unwrap();
    let result = registry.named("Result").unwrap();
    let color = registry.named("Color").unwrap();
    let filter = registry.named("WidgetFilter").unwrap();
    let a = registry.named("A").unwrap();
    let b = registry.named("B").unwrap();
    let int = registry.named("Int").unwrap();
    let boolean = registry.named("Boolean").unwrap();
    let date = registry.named("Date").unwrap();

    let query = [
        registry
            .field("widget", widget.clone())
            .argument(registry.arg("id", id.clone())),
        registry
            .field("widgets", widget.clone().non_null().list().non_null())
            .argument(registry.arg("filter", filter))
            .argument(
                registry
                    .arg("first", int)
                    .default_value(InputValue::scalar(10)),
            ),
        registry
            .field("node", node.clone())
            .argument(registry.arg("id", id.clone())),
        registry
            .field("search", result.non_null().list().non_null())
            .argument(registry.arg("text", string.clone().non_null())),
    ];
    registry
        .register(ObjectMeta::new(literal!("Query"), &query).into_meta())
        .unwrap();

    let node_id = registry.field("id", id.clone()).description(literal!("Global identifier"));
    let widget_fields = [
        node_id.clone(),
        registry
            .field("legacyId", id)
            .deprecated(Some(literal!("Use `id`"))),
        registry.field("tags", string.clone().non_null().list()),
        registry.field("created", date),
        registry.field("color", color.clone()),
    ];
    registry
        .register(
            ObjectMeta::new(literal!("Widget"), &widget_fields)
                .description(literal!("A catalogued widget"))
                .interfaces(&[node.clone()])
                .into_meta(),
        )
        .unwrap();
    registry
        .register(InterfaceMeta::new(literal!("Node"), &[node_id.clone()]).into_meta())
        .unwrap();
    registry
        .register(
            ObjectMeta::new(literal!("A"), &[node_id.clone()])
                .interfaces(&[node.clone()])
                .into_meta(),
        )
        .unwrap();
    registry
        .register(
            ObjectMeta::new(literal!("B"), &[node_id.clone()])
                .interfaces(&[node.clone(), node])
                .into_meta(),
        )
        .unwrap();
    registry
        .register(InterfaceMeta::new(literal!("Orphan"), &[node_id]).into_meta())
        .unwrap();
    registry
        .register(UnionMeta::new(literal!("Result"), &[a, b]).into_meta())
        .unwrap();
    registry
        .register(
            EnumMeta::new(
                literal!("Color"),
                &[
                    EnumValue::new(literal!("RED")),
                    EnumValue::new(literal!("MAGENTA")).deprecated(Some(literal!("Use RED"))),
                    EnumValue::new(literal!("BLUE")).description(literal!("Like the sky")),
                ],
            )
            .into_meta(),
        )
        .unwrap();

    let filter_fields = [
        registry.arg("name", string),
        registry
            .arg("color", color)
            .default_value(InputValue::enum_value("RED")),
        registry
            .arg("legacy", boolean)
            .deprecated(None),
    ];
    registry
        .register(InputObjectMeta::new(literal!("WidgetFilter"), &filter_fields).into_meta())
        .unwrap();
    registry
        .register(
            ScalarMeta::new(literal!("Date"))
                .specified_by_url(literal!("https://tools.ietf.org/html/rfc3339"))
                .into_meta(),
        )
        .unwrap();

    builder.finish().unwrap()
}

/// `__type(name: $name)` on the fixture schema.
pub fn named_type<'a>(schema: &'a SchemaType, name: &str) -> Introspected<'a> {
    let args = IndexMap::from([("name", InputValue::scalar(name))]);
    match schema
        .resolve_field(&Introspected::Root, "__type", Some(args))
        .unwrap()
    {
        Value::Node(n) => n,
        v => panic!("no type named `{name}`, got {v:?}"),
    }
}

/// Resolves `field` on `source` without arguments.
pub fn resolve<'a>(schema: &'a SchemaType, source: &Introspected<'a>, field: &str) -> Value<'a> {
    schema.resolve_field(source, field, None).unwrap()
}

/// Resolves `field` on `source` with `includeDeprecated` set.
pub fn resolve_deprecated<'a>(
    schema: &'a SchemaType,
    source: &Introspected<'a>,
    field: &str,
    include_deprecated: bool,
) -> Value<'a> {
    let args = IndexMap::from([("includeDeprecated", InputValue::scalar(include_deprecated))]);
    schema.resolve_field(source, field, Some(args)).unwrap()
}

/// Names of the nodes in a list, or [`None`] for `null`.
pub fn names(schema: &SchemaType, value: &Value<'_>) -> Option<Vec<String>> {
    let list = match value {
        Value::Null => return None,
        Value::List(l) => l,
        v => panic!("expected a list, got {v:?}"),
    };
    Some(
        list.iter()
            .map(|v| {
                let node = v.as_node().expect("list of nodes");
                resolve(schema, node, "name")
                    .as_str()
                    .expect("named node")
                    .to_owned()
            })
            .collect(),
    )
}
