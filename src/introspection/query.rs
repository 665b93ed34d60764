//! The canonical introspection query, resolved without an executor.
//!
//! Mirrors graphql-js `getIntrospectionQuery()` with schema descriptions and
//! `specifiedByURL` enabled. Directives are not part of this meta-schema, so
//! the `directives` selection is left out.

use indexmap::IndexMap;
use serde_json::{Map, Number, Value as JsonValue};

use super::IntrospectionFormat;
use crate::{
    ast::InputValue,
    error::FieldResult,
    schema::model::{Introspected, SchemaType},
    value::{DefaultScalarValue, Value},
};

/// A field of a selection set, with its sub-selection.
struct Select {
    field: &'static str,
    include_deprecated: bool,
    children: &'static [Select],
}

impl Select {
    const fn leaf(field: &'static str) -> Self {
        Self {
            field,
            include_deprecated: false,
            children: &[],
        }
    }

    const fn node(field: &'static str, children: &'static [Select]) -> Self {
        Self {
            field,
            include_deprecated: false,
            children,
        }
    }

    const fn with_deprecated(field: &'static str, children: &'static [Select]) -> Self {
        Self {
            field,
            include_deprecated: true,
            children,
        }
    }
}

static ROOT: [Select; 1] = [Select::node("__schema", &SCHEMA)];

static SCHEMA: [Select; 5] = [
    Select::leaf("description"),
    Select::node("queryType", &NAME),
    Select::node("mutationType", &NAME),
    Select::node("subscriptionType", &NAME),
    Select::node("types", &FULL_TYPE),
];

static NAME: [Select; 1] = [Select::leaf("name")];

static FULL_TYPE: [Select; 9] = [
    Select::leaf("kind"),
    Select::leaf("name"),
    Select::leaf("description"),
    Select::leaf("specifiedByURL"),
    Select::with_deprecated("fields", &FIELD),
    Select::node("inputFields", &INPUT_VALUE),
    Select::node("interfaces", &TYPE_REF),
    Select::with_deprecated("enumValues", &ENUM_VALUE),
    Select::node("possibleTypes", &TYPE_REF),
];

static FIELD: [Select; 6] = [
    Select::leaf("name"),
    Select::leaf("description"),
    Select::node("args", &INPUT_VALUE),
    Select::node("type", &TYPE_REF),
    Select::leaf("isDeprecated"),
    Select::leaf("deprecationReason"),
];

static INPUT_VALUE: [Select; 6] = [
    Select::leaf("name"),
    Select::leaf("description"),
    Select::node("type", &TYPE_REF),
    Select::leaf("defaultValue"),
    Select::leaf("isDeprecated"),
    Select::leaf("deprecationReason"),
];

static ENUM_VALUE: [Select; 4] = [
    Select::leaf("name"),
    Select::leaf("description"),
    Select::leaf("isDeprecated"),
    Select::leaf("deprecationReason"),
];

// Recursion ends at the named type, whose `ofType` is `null`.
static TYPE_REF: [Select; 3] = [
    Select::leaf("kind"),
    Select::leaf("name"),
    Select::node("ofType", &TYPE_REF),
];

impl SchemaType {
    /// Resolves the canonical introspection query against this schema.
    ///
    /// The result has the shape of the `data` member of a response to
    /// graphql-js `getIntrospectionQuery()`.
    ///
    /// # Errors
    ///
    /// If a meta-field fails to resolve, which a schema built by
    /// [`SchemaBuilder`](crate::SchemaBuilder) never causes.
    pub fn introspect(&self, format: IntrospectionFormat) -> FieldResult<JsonValue> {
        __introspection_trace_debug!(?format, types = self.types.len(), "introspecting schema");

        resolve_selection(self, &Introspected::Root, &ROOT, format)
    }
}

fn resolve_selection<'a>(
    schema: &'a SchemaType,
    source: &Introspected<'a>,
    selection: &'static [Select],
    format: IntrospectionFormat,
) -> FieldResult<JsonValue> {
    let mut object = Map::new();
    for select in selection {
        if format == IntrospectionFormat::WithoutDescriptions && select.field == "description" {
            continue;
        }
        let args = select
            .include_deprecated
            .then(|| IndexMap::from([("includeDeprecated", InputValue::scalar(true))]));
        let value = schema.resolve_field(source, select.field, args)?;
        object.insert(
            select.field.into(),
            complete_value(schema, value, select.children, format)?,
        );
    }
    Ok(JsonValue::Object(object))
}

fn complete_value<'a>(
    schema: &'a SchemaType,
    value: Value<'a>,
    selection: &'static [Select],
    format: IntrospectionFormat,
) -> FieldResult<JsonValue> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Scalar(s) => scalar_to_json(s),
        Value::Kind(k) => k.as_str().into(),
        Value::Node(n) => resolve_selection(schema, &n, selection, format)?,
        Value::List(items) => JsonValue::Array(
            items
                .into_iter()
                .map(|v| complete_value(schema, v, selection, format))
                .collect::<FieldResult<_>>()?,
        ),
    })
}

fn scalar_to_json(s: DefaultScalarValue) -> JsonValue {
    match s {
        DefaultScalarValue::Int(i) => i.into(),
        DefaultScalarValue::Float(f) => Number::from_f64(f).map_or(JsonValue::Null, Into::into),
        DefaultScalarValue::String(s) => s.into(),
        DefaultScalarValue::Boolean(b) => b.into(),
    }
}
