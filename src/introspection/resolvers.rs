//! Resolvers wired to the fields of the introspection meta-types.
//!
//! Every function here is a [`ResolveFn`](crate::schema::meta::ResolveFn).
//! A capability the source node lacks resolves to `null`, only a source of
//! the wrong meta-type is an error.

use arcstr::ArcStr;

use crate::{
    ast::Type,
    error::{FieldError, FieldResult, SchemaError},
    schema::{
        meta::{DeprecationStatus, MetaType},
        model::{Introspected, SchemaType, TypeType},
    },
    types::base::Arguments,
    value::Value,
};

fn unexpected(field: &'static str, source: &Introspected<'_>) -> FieldError {
    FieldError::UnexpectedSource {
        field,
        source_kind: source.source_kind(),
    }
}

fn include_deprecated(args: &Arguments<'_>) -> FieldResult<bool> {
    Ok(args.get::<bool>("includeDeprecated")?.unwrap_or_default())
}

fn type_ref<'a>(schema: &'a SchemaType, t: &Type) -> FieldResult<Value<'a>> {
    schema
        .make_type(t)
        .map(|t| Value::Node(t.into()))
        .ok_or_else(|| SchemaError::UnresolvedType(t.innermost_name().clone()).into())
}

// Root

pub(super) fn root_schema<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    schema: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    match source {
        Introspected::Root => Ok(Value::Node(schema.into())),
        s => Err(unexpected("__schema", s)),
    }
}

pub(super) fn root_type<'a>(
    source: &Introspected<'a>,
    args: &Arguments<'_>,
    schema: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    match source {
        Introspected::Root => Ok(args
            .get::<String>("name")?
            .and_then(|name| schema.type_by_name(&name))
            .into()),
        s => Err(unexpected("__type", s)),
    }
}

// __Schema

fn as_schema<'a>(source: &Introspected<'a>, field: &'static str) -> FieldResult<&'a SchemaType> {
    match *source {
        Introspected::Schema(s) => Ok(s),
        ref s => Err(unexpected(field, s)),
    }
}

pub(super) fn schema_description<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::string(as_schema(source, "description")?.description()))
}

pub(super) fn schema_types<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::nodes(as_schema(source, "types")?.type_list()))
}

pub(super) fn schema_query_type<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    let s = as_schema(source, "queryType")?;
    s.query_type()
        .map(|t| Value::Node(t.into()))
        .ok_or_else(|| SchemaError::RootTypeNotFound(s.query_type_name.clone()).into())
}

pub(super) fn schema_mutation_type<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(as_schema(source, "mutationType")?.mutation_type().into())
}

pub(super) fn schema_subscription_type<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(as_schema(source, "subscriptionType")?.subscription_type().into())
}

// __Type

fn as_type<'s, 'a>(
    source: &'s Introspected<'a>,
    field: &'static str,
) -> FieldResult<&'s TypeType<'a>> {
    source.as_type().ok_or_else(|| unexpected(field, source))
}

pub(super) fn type_kind<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::Kind(as_type(source, "kind")?.kind()?))
}

pub(super) fn type_name<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::string(as_type(source, "name")?.name()))
}

pub(super) fn type_description<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::string(as_type(source, "description")?.description()))
}

pub(super) fn type_specified_by_url<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::string(
        as_type(source, "specifiedByURL")?
            .to_concrete()
            .and_then(MetaType::specified_by_url),
    ))
}

pub(super) fn type_fields<'a>(
    source: &Introspected<'a>,
    args: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    let t = as_type(source, "fields")?;
    Ok(t.fields(include_deprecated(args)?)
        .map_or(Value::Null, Value::nodes))
}

pub(super) fn type_interfaces<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    schema: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(as_type(source, "interfaces")?
        .interfaces(schema)
        .map_or(Value::Null, Value::nodes))
}

pub(super) fn type_possible_types<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    schema: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(as_type(source, "possibleTypes")?
        .possible_types(schema)
        .map_or(Value::Null, Value::nodes))
}

pub(super) fn type_enum_values<'a>(
    source: &Introspected<'a>,
    args: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    let t = as_type(source, "enumValues")?;
    Ok(t.enum_values(include_deprecated(args)?)
        .map_or(Value::Null, Value::nodes))
}

pub(super) fn type_input_fields<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(as_type(source, "inputFields")?
        .input_fields()
        .map_or(Value::Null, Value::nodes))
}

pub(super) fn type_of_type<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(as_type(source, "ofType")?.of_type().cloned().into())
}

// __Field, __InputValue and __EnumValue

/// Parts shared by fields, input values and enum values.
struct Member<'a> {
    name: &'a ArcStr,
    description: Option<&'a ArcStr>,
    deprecation_status: &'a DeprecationStatus,
}

fn as_member<'a>(source: &Introspected<'a>, field: &'static str) -> FieldResult<Member<'a>> {
    match *source {
        Introspected::Field(f) => Ok(Member {
            name: &f.name,
            description: f.description.as_ref(),
            deprecation_status: &f.deprecation_status,
        }),
        Introspected::InputValue(a) => Ok(Member {
            name: &a.name,
            description: a.description.as_ref(),
            deprecation_status: &a.deprecation_status,
        }),
        Introspected::EnumValue(v) => Ok(Member {
            name: &v.name,
            description: v.description.as_ref(),
            deprecation_status: &v.deprecation_status,
        }),
        ref s => Err(unexpected(field, s)),
    }
}

pub(super) fn member_name<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::scalar(as_member(source, "name")?.name))
}

pub(super) fn member_description<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    Ok(Value::string(as_member(source, "description")?.description))
}

pub(super) fn member_is_deprecated<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    let status = as_member(source, "isDeprecated")?.deprecation_status;
    Ok(Value::scalar(status.is_deprecated()))
}

pub(super) fn member_deprecation_reason<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    let status = as_member(source, "deprecationReason")?.deprecation_status;
    Ok(Value::string(status.reason()))
}

pub(super) fn field_args<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    match *source {
        Introspected::Field(f) => Ok(Value::nodes(f.arguments.iter().flatten())),
        ref s => Err(unexpected("args", s)),
    }
}

pub(super) fn field_type<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    schema: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    match *source {
        Introspected::Field(f) => type_ref(schema, &f.field_type),
        Introspected::InputValue(a) => type_ref(schema, &a.arg_type),
        ref s => Err(unexpected("type", s)),
    }
}

pub(super) fn input_value_default_value<'a>(
    source: &Introspected<'a>,
    _: &Arguments<'_>,
    _: &'a SchemaType,
) -> FieldResult<Value<'a>> {
    match *source {
        Introspected::InputValue(a) => Ok(Value::string(
            a.default_value.as_ref().map(ToString::to_string),
        )),
        ref s => Err(unexpected("defaultValue", s)),
    }
}
