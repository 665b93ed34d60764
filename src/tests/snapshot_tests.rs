use pretty_assertions::assert_eq;
use serde_json::{Value as JsonValue, json};

use super::fixtures::schema;
use crate::introspection::IntrospectionFormat;

fn find_type<'a>(snapshot: &'a JsonValue, name: &str) -> &'a JsonValue {
    snapshot["__schema"]["types"]
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["name"] == name)
        .unwrap_or_else(|| panic!("no type `{name}` in snapshot"))
}

fn contains_key(value: &JsonValue, key: &str) -> bool {
    match value {
        JsonValue::Object(o) => o.contains_key(key) || o.values().any(|v| contains_key(v, key)),
        JsonValue::Array(a) => a.iter().any(|v| contains_key(v, key)),
        _ => false,
    }
}

#[test]
fn root_operation_types() {
    let schema = schema();

    let snapshot = schema.introspect(IntrospectionFormat::All).unwrap();

    assert_eq!(snapshot["__schema"]["queryType"], json!({"name": "Query"}));
    assert_eq!(snapshot["__schema"]["mutationType"], JsonValue::Null);
    assert_eq!(snapshot["__schema"]["subscriptionType"], JsonValue::Null);
    assert_eq!(snapshot["__schema"]["description"], json!("Widget catalogue"));
    assert_eq!(
        snapshot["__schema"]["types"].as_array().map(Vec::len),
        Some(schema.type_list().len()),
    );
}

#[test]
fn enum_type_lists_deprecated_values() {
    let schema = schema();

    let snapshot = schema.introspect(IntrospectionFormat::All).unwrap();

    assert_eq!(
        *find_type(&snapshot, "Color"),
        json!({
            "kind": "ENUM",
            "name": "Color",
            "description": null,
            "specifiedByURL": null,
            "fields": null,
            "inputFields": null,
            "interfaces": null,
            "enumValues": [
                {
                    "name": "RED",
                    "description": null,
                    "isDeprecated": false,
                    "deprecationReason": null,
                },
                {
                    "name": "MAGENTA",
                    "description": null,
                    "isDeprecated": true,
                    "deprecationReason": "Use RED",
                },
                {
                    "name": "BLUE",
                    "description": "Like the sky",
                    "isDeprecated": false,
                    "deprecationReason": null,
                },
            ],
            "possibleTypes": null,
        }),
    );
}

#[test]
fn fields_carry_nested_type_references() {
    let schema = schema();

    let snapshot = schema.introspect(IntrospectionFormat::All).unwrap();
    let widget = find_type(&snapshot, "Widget");
    let tags = widget["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "tags")
        .unwrap();

    assert_eq!(
        tags["type"],
        json!({
            "kind": "LIST",
            "name": null,
            "ofType": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": {
                    "kind": "SCALAR",
                    "name": "String",
                    "ofType": null,
                },
            },
        }),
    );
    assert_eq!(widget["fields"].as_array().map(Vec::len), Some(5));
    assert_eq!(
        widget["interfaces"],
        json!([{"kind": "INTERFACE", "name": "Node", "ofType": null}]),
    );
}

#[test]
fn input_objects_render_default_values() {
    let schema = schema();

    let snapshot = schema.introspect(IntrospectionFormat::All).unwrap();
    let filter = find_type(&snapshot, "WidgetFilter");

    assert_eq!(filter["inputFields"][1]["defaultValue"], json!("RED"));
    assert_eq!(filter["inputFields"][2]["isDeprecated"], json!(true));
    assert_eq!(
        find_type(&snapshot, "Date")["specifiedByURL"],
        json!("https://tools.ietf.org/html/rfc3339"),
    );
}

#[test]
fn meta_types_are_introspectable() {
    let schema = schema();

    let snapshot = schema.introspect(IntrospectionFormat::All).unwrap();
    let kinds = find_type(&snapshot, "__TypeKind")["enumValues"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(
        kinds,
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
    assert_eq!(find_type(&snapshot, "__Type")["kind"], json!("OBJECT"));
}

#[test]
fn descriptions_can_be_left_out() {
    let schema = schema();

    let full = schema.introspect(IntrospectionFormat::All).unwrap();
    let bare = schema
        .introspect(IntrospectionFormat::WithoutDescriptions)
        .unwrap();

    assert!(contains_key(&full, "description"));
    assert!(!contains_key(&bare, "description"));
    assert_eq!(
        find_type(&bare, "Widget")["fields"],
        find_type(&full, "Widget")["fields"]
            .as_array()
            .unwrap()
            .iter()
            .map(|f| {
                let mut f = f.clone();
                f.as_object_mut().unwrap().remove("description");
                for arg in f["args"].as_array_mut().unwrap() {
                    arg.as_object_mut().unwrap().remove("description");
                }
                f
            })
            .collect::<JsonValue>(),
    );
}
