use indexmap::IndexMap;

use crate::{
    ast::InputValue,
    error::{FieldError, FieldResult},
    schema::{
        meta::{
            Argument, EnumMeta, EnumValue, Field, InputObjectMeta, InterfaceMeta, MetaType,
            ObjectMeta, UnionMeta, filter_deprecated,
        },
        model::{Introspected, SchemaType, TypeType},
    },
    types::base::Arguments,
    value::Value,
};

impl SchemaType {
    /// Resolves the introspection field `field_name` on `source`.
    ///
    /// The field is looked up on the meta-type of `source`, or among the
    /// `__schema` and `__type` entry points for [`Introspected::Root`].
    /// Arguments missing from `args` get their declared default values.
    ///
    /// # Errors
    ///
    /// If the field doesn't exist, has no introspection resolver, or its
    /// arguments don't have the expected types.
    pub fn resolve_field<'a>(
        &'a self,
        source: &Introspected<'a>,
        field_name: &str,
        args: Option<IndexMap<&str, InputValue>>,
    ) -> FieldResult<Value<'a>> {
        let type_name = source.meta_type_name(self);
        let field = match source {
            Introspected::Root => self.root_field(field_name),
            _ => self
                .concrete_type_by_name(type_name)
                .and_then(|t| t.field_by_name(field_name)),
        }
        .ok_or_else(|| FieldError::UnknownField {
            type_name: type_name.into(),
            field: field_name.into(),
        })?;
        let resolver = field.resolver.ok_or_else(|| FieldError::NoResolver {
            type_name: type_name.into(),
            field: field.name.clone(),
        })?;

        __introspection_span_trace!("resolve_field", meta_type = type_name, field = field_name);

        resolver(source, &Arguments::new(args, &field.arguments), self)
    }
}

impl<'a> TypeType<'a> {
    /// Fields of an object or interface type.
    ///
    /// Deprecated fields are only included if `include_deprecated` is set.
    /// [`None`] for every other kind of type.
    pub fn fields(&self, include_deprecated: bool) -> Option<Vec<&'a Field>> {
        match *self {
            Self::Concrete(
                MetaType::Interface(InterfaceMeta { fields, .. })
                | MetaType::Object(ObjectMeta { fields, .. }),
            ) => Some(filter_deprecated(fields, include_deprecated)),
            _ => None,
        }
    }

    /// Interfaces an object type declares, in declaration order.
    ///
    /// [`None`] for every other kind of type.
    pub fn interfaces(&self, schema: &'a SchemaType) -> Option<Vec<TypeType<'a>>> {
        match *self {
            Self::Concrete(MetaType::Object(ObjectMeta {
                interface_names, ..
            })) => Some(
                interface_names
                    .iter()
                    .filter_map(|n| schema.type_by_name(n))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Implementers of an interface, or members of a union.
    ///
    /// Implementers come in schema order and members in declaration order. An
    /// interface without implementers has no possible types, which is not the
    /// same as [`None`] returned for every other kind of type.
    pub fn possible_types(&self, schema: &'a SchemaType) -> Option<Vec<TypeType<'a>>> {
        match *self {
            Self::Concrete(MetaType::Union(UnionMeta { of_type_names, .. })) => Some(
                of_type_names
                    .iter()
                    .filter_map(|tn| schema.type_by_name(tn))
                    .collect(),
            ),
            Self::Concrete(MetaType::Interface(InterfaceMeta { name, .. })) => Some(
                schema
                    .implementers()
                    .lookup(name)
                    .iter()
                    .filter_map(|tn| schema.type_by_name(tn))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Values of an enum type.
    ///
    /// Deprecated values are only included if `include_deprecated` is set.
    /// [`None`] for every other kind of type.
    pub fn enum_values(&self, include_deprecated: bool) -> Option<Vec<&'a EnumValue>> {
        match *self {
            Self::Concrete(MetaType::Enum(EnumMeta { values, .. })) => {
                Some(filter_deprecated(values, include_deprecated))
            }
            _ => None,
        }
    }

    /// Fields of an input object type, in declaration order.
    ///
    /// [`None`] for every other kind of type.
    pub fn input_fields(&self) -> Option<&'a [Argument]> {
        match *self {
            Self::Concrete(MetaType::InputObject(InputObjectMeta { input_fields, .. })) => {
                Some(input_fields)
            }
            _ => None,
        }
    }
}
