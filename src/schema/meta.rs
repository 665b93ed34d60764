//! Types used to describe a `GraphQL` schema

use std::fmt;

use arcstr::ArcStr;

use crate::{
    ast::{InputValue, Type},
    error::{FieldResult, SchemaError},
    schema::model::{Introspected, SchemaType},
    types::base::{Arguments, TypeKind},
    value::Value,
};

/// Function resolving one introspection field.
///
/// Receives the node the field is requested on, the field arguments with
/// their declared defaults already applied, and the closed schema.
pub type ResolveFn = for<'a> fn(
    &Introspected<'a>,
    &Arguments<'_>,
    &'a SchemaType,
) -> FieldResult<Value<'a>>;

/// Whether an item is deprecated, with context.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DeprecationStatus {
    /// The field/variant is not deprecated.
    Current,
    /// The field/variant is deprecated, with an optional reason
    Deprecated(Option<ArcStr>),
}

impl DeprecationStatus {
    /// If this deprecation status indicates the item is deprecated.
    pub fn is_deprecated(&self) -> bool {
        match self {
            Self::Current => false,
            Self::Deprecated(_) => true,
        }
    }

    /// An optional reason for the deprecation, or none if `Current`.
    pub fn reason(&self) -> Option<&ArcStr> {
        match self {
            Self::Current => None,
            Self::Deprecated(rsn) => rsn.as_ref(),
        }
    }
}

/// Item that may be marked as deprecated.
pub trait Deprecatable {
    /// Deprecation status of this item.
    fn deprecation_status(&self) -> &DeprecationStatus;
}

/// Filters out deprecated `items`, unless `include_deprecated` is set.
///
/// Always builds a new sequence preserving the relative order of `items`.
pub fn filter_deprecated<T: Deprecatable>(items: &[T], include_deprecated: bool) -> Vec<&T> {
    items
        .iter()
        .filter(|i| include_deprecated || !i.deprecation_status().is_deprecated())
        .collect()
}

/// Scalar type metadata
#[derive(Debug)]
pub struct ScalarMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub specified_by_url: Option<ArcStr>,
}

/// Object type metadata
#[derive(Debug)]
pub struct ObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field>,
    #[doc(hidden)]
    pub interface_names: Vec<ArcStr>,
}

/// Enum type metadata
#[derive(Debug)]
pub struct EnumMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub values: Vec<EnumValue>,
}

/// Interface type metadata
///
/// Implementers are not stored here, see
/// [`ImplementationIndex`](crate::schema::implementers::ImplementationIndex).
#[derive(Debug)]
pub struct InterfaceMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub fields: Vec<Field>,
}

/// Union type metadata
#[derive(Debug)]
pub struct UnionMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub of_type_names: Vec<ArcStr>,
}

/// Input object metadata
#[derive(Debug)]
pub struct InputObjectMeta {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub input_fields: Vec<Argument>,
}

/// A placeholder for not-yet-registered types
///
/// When a type is referenced before it is registered, a placeholder type is
/// inserted into the registry to indicate existence. Closing the schema
/// fails while any placeholder is left.
#[derive(Debug)]
pub struct PlaceholderMeta {
    #[doc(hidden)]
    pub of_type: Type,
}

/// Generic type metadata
#[derive(Debug)]
pub enum MetaType {
    #[doc(hidden)]
    Scalar(ScalarMeta),
    #[doc(hidden)]
    Object(ObjectMeta),
    #[doc(hidden)]
    Enum(EnumMeta),
    #[doc(hidden)]
    Interface(InterfaceMeta),
    #[doc(hidden)]
    Union(UnionMeta),
    #[doc(hidden)]
    InputObject(InputObjectMeta),
    #[doc(hidden)]
    Placeholder(PlaceholderMeta),
}

/// Metadata for a field
#[derive(Debug, Clone)]
pub struct Field {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arguments: Option<Vec<Argument>>,
    #[doc(hidden)]
    pub field_type: Type,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
    #[doc(hidden)]
    pub resolver: Option<ResolveFn>,
}

/// Metadata for an argument to a field, or a field of an input object
#[derive(Debug, Clone)]
pub struct Argument {
    #[doc(hidden)]
    pub name: ArcStr,
    #[doc(hidden)]
    pub description: Option<ArcStr>,
    #[doc(hidden)]
    pub arg_type: Type,
    #[doc(hidden)]
    pub default_value: Option<InputValue>,
    #[doc(hidden)]
    pub deprecation_status: DeprecationStatus,
}

/// Metadata for a single value in an enum
#[derive(Debug, Clone)]
pub struct EnumValue {
    /// The name of the enum value
    ///
    /// This is the string literal representation of the enum in responses.
    pub name: ArcStr,
    /// The optional description of the enum value.
    ///
    /// Note: this is not the description of the enum itself; it's the
    /// description of this enum _value_.
    pub description: Option<ArcStr>,
    /// Whether the field is deprecated or not, with an optional reason.
    pub deprecation_status: DeprecationStatus,
}

impl Deprecatable for Field {
    fn deprecation_status(&self) -> &DeprecationStatus {
        &self.deprecation_status
    }
}

impl Deprecatable for Argument {
    fn deprecation_status(&self) -> &DeprecationStatus {
        &self.deprecation_status
    }
}

impl Deprecatable for EnumValue {
    fn deprecation_status(&self) -> &DeprecationStatus {
        &self.deprecation_status
    }
}

impl MetaType {
    /// Access the name of the type, if applicable
    ///
    /// Placeholders don't have names of their own.
    pub fn name(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { name, .. })
            | Self::Object(ObjectMeta { name, .. })
            | Self::Enum(EnumMeta { name, .. })
            | Self::Interface(InterfaceMeta { name, .. })
            | Self::Union(UnionMeta { name, .. })
            | Self::InputObject(InputObjectMeta { name, .. }) => Some(name),
            Self::Placeholder(_) => None,
        }
    }

    /// Access the description of the type, if applicable
    pub fn description(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta { description, .. })
            | Self::Object(ObjectMeta { description, .. })
            | Self::Enum(EnumMeta { description, .. })
            | Self::Interface(InterfaceMeta { description, .. })
            | Self::Union(UnionMeta { description, .. })
            | Self::InputObject(InputObjectMeta { description, .. }) => description.as_ref(),
            Self::Placeholder(_) => None,
        }
    }

    /// Accesses the [specification URL][0], if applicable.
    ///
    /// Only custom GraphQL scalars can have a [specification URL][0].
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    pub fn specified_by_url(&self) -> Option<&ArcStr> {
        match self {
            Self::Scalar(ScalarMeta {
                specified_by_url, ..
            }) => specified_by_url.as_ref(),
            _ => None,
        }
    }

    /// Construct a `TypeKind` for a given type
    ///
    /// # Errors
    ///
    /// If the type is a placeholder, which has no kind and must never outlive
    /// schema construction.
    pub fn type_kind(&self) -> Result<TypeKind, SchemaError> {
        match self {
            Self::Scalar(_) => Ok(TypeKind::Scalar),
            Self::Object(_) => Ok(TypeKind::Object),
            Self::Enum(_) => Ok(TypeKind::Enum),
            Self::Interface(_) => Ok(TypeKind::Interface),
            Self::Union(_) => Ok(TypeKind::Union),
            Self::InputObject(_) => Ok(TypeKind::InputObject),
            Self::Placeholder(PlaceholderMeta { of_type }) => Err(
                SchemaError::UnclassifiableType(format!("placeholder type `{of_type}`")),
            ),
        }
    }

    /// Access a field's meta data given its name
    ///
    /// Only objects and interfaces have fields. This method always returns `None` for other types.
    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        match self {
            Self::Object(ObjectMeta { fields, .. })
            | Self::Interface(InterfaceMeta { fields, .. }) => {
                fields.iter().find(|f| f.name == name)
            }
            _ => None,
        }
    }

    /// Iterates over the names of all types this type refers to.
    ///
    /// Used to detect references that never get registered.
    pub(crate) fn referenced_names(&self) -> Vec<&ArcStr> {
        fn args(args: &[Argument]) -> impl Iterator<Item = &ArcStr> {
            args.iter().map(|a| a.arg_type.innermost_name())
        }
        fn fields(fields: &[Field]) -> impl Iterator<Item = &ArcStr> {
            fields.iter().flat_map(|f| {
                std::iter::once(f.field_type.innermost_name())
                    .chain(args(f.arguments.as_deref().unwrap_or_default()))
            })
        }

        match self {
            Self::Object(ObjectMeta {
                fields: fs,
                interface_names,
                ..
            }) => fields(fs).chain(interface_names).collect(),
            Self::Interface(InterfaceMeta { fields: fs, .. }) => fields(fs).collect(),
            Self::Union(UnionMeta { of_type_names, .. }) => of_type_names.iter().collect(),
            Self::InputObject(InputObjectMeta { input_fields, .. }) => {
                args(input_fields).collect()
            }
            Self::Scalar(_) | Self::Enum(_) | Self::Placeholder(_) => vec![],
        }
    }
}

impl ScalarMeta {
    /// Builds a new [`ScalarMeta`] type with the specified `name`.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            specified_by_url: None,
        }
    }

    /// Sets the `description` of this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets the [specification URL][0] for this [`ScalarMeta`] type.
    ///
    /// Overwrites any previously set [specification URL][0].
    ///
    /// [0]: https://spec.graphql.org/October2021#sec--specifiedBy
    #[must_use]
    pub fn specified_by_url(mut self, url: ArcStr) -> Self {
        self.specified_by_url = Some(url);
        self
    }

    /// Wraps this [`ScalarMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Scalar(self)
    }
}

impl ObjectMeta {
    /// Build a new [`ObjectMeta`] type with the specified `name` and `fields`.
    pub fn new(name: ArcStr, fields: &[Field]) -> Self {
        Self {
            name,
            description: None,
            fields: fields.to_vec(),
            interface_names: vec![],
        }
    }

    /// Sets the `description` of this [`ObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the `interfaces` this [`ObjectMeta`] type implements.
    ///
    /// Overwrites any previously set list of interfaces.
    #[must_use]
    pub fn interfaces(mut self, interfaces: &[Type]) -> Self {
        self.interface_names = interfaces
            .iter()
            .map(|t| t.innermost_name().clone())
            .collect();
        self
    }

    /// Wraps this [`ObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Object(self)
    }
}

impl EnumMeta {
    /// Build a new [`EnumMeta`] type with the specified `name` and possible
    /// `values`.
    pub fn new(name: ArcStr, values: &[EnumValue]) -> Self {
        Self {
            name,
            description: None,
            values: values.to_owned(),
        }
    }

    /// Sets the `description` of this [`EnumMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`EnumMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Enum(self)
    }
}

impl InterfaceMeta {
    /// Builds a new [`InterfaceMeta`] type with the specified `name` and
    /// `fields`.
    pub fn new(name: ArcStr, fields: &[Field]) -> Self {
        Self {
            name,
            description: None,
            fields: fields.to_vec(),
        }
    }

    /// Sets the `description` of this [`InterfaceMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`InterfaceMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Interface(self)
    }
}

impl UnionMeta {
    /// Build a new [`UnionMeta`] type with the specified `name` and possible
    /// [`Type`]s.
    pub fn new(name: ArcStr, of_types: &[Type]) -> Self {
        Self {
            name,
            description: None,
            of_type_names: of_types
                .iter()
                .map(|t| t.innermost_name().clone())
                .collect(),
        }
    }

    /// Sets the `description` of this [`UnionMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`UnionMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::Union(self)
    }
}

impl InputObjectMeta {
    /// Builds a new [`InputObjectMeta`] type with the specified `name` and
    /// `input_fields`.
    pub fn new(name: ArcStr, input_fields: &[Argument]) -> Self {
        Self {
            name,
            description: None,
            input_fields: input_fields.to_vec(),
        }
    }

    /// Set the `description` of this [`InputObjectMeta`] type.
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Wraps this [`InputObjectMeta`] type into a generic [`MetaType`].
    pub fn into_meta(self) -> MetaType {
        MetaType::InputObject(self)
    }
}

impl Field {
    /// Builds a new [`Field`] of the given [`Type`] with the given `name`.
    pub fn new(name: ArcStr, field_type: Type) -> Self {
        Self {
            name,
            description: None,
            arguments: None,
            field_type,
            deprecation_status: DeprecationStatus::Current,
            resolver: None,
        }
    }

    /// Set the `description` of this [`Field`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Adds an `argument` to this [`Field`].
    ///
    /// Arguments are unordered and can't contain duplicates by name.
    #[must_use]
    pub fn argument(mut self, argument: Argument) -> Self {
        self.arguments.get_or_insert_with(Vec::new).push(argument);
        self
    }

    /// Sets this [`Field`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }

    /// Wires this [`Field`] to the introspection `resolver` producing its
    /// value.
    #[must_use]
    pub fn resolver(mut self, resolver: ResolveFn) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

impl Argument {
    /// Builds a new [`Argument`] of the given [`Type`] with the given `name`.
    pub fn new(name: ArcStr, arg_type: Type) -> Self {
        Self {
            name,
            description: None,
            arg_type,
            default_value: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the `description` of this [`Argument`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Set the default value of this [`Argument`].
    ///
    /// Overwrites any previously set default value.
    #[must_use]
    pub fn default_value(mut self, val: InputValue) -> Self {
        self.default_value = Some(val);
        self
    }

    /// Sets this [`Argument`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}

impl EnumValue {
    /// Constructs a new [`EnumValue`] with the provided `name`.
    pub fn new(name: ArcStr) -> Self {
        Self {
            name,
            description: None,
            deprecation_status: DeprecationStatus::Current,
        }
    }

    /// Sets the `description` of this [`EnumValue`].
    ///
    /// Overwrites any previously set description.
    #[must_use]
    pub fn description(mut self, description: ArcStr) -> Self {
        self.description = Some(description);
        self
    }

    /// Sets this [`EnumValue`] as deprecated with an optional `reason`.
    ///
    /// Overwrites any previously set deprecation reason.
    #[must_use]
    pub fn deprecated(mut self, reason: Option<ArcStr>) -> Self {
        self.deprecation_status = DeprecationStatus::Deprecated(reason);
        self
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder(PlaceholderMeta { of_type }) => write!(f, "placeholder `{of_type}`"),
            t => match (t.name(), t.type_kind()) {
                (Some(name), Ok(kind)) => write!(f, "{kind} `{name}`"),
                _ => f.write_str("unknown type"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;

    use crate::ast::Type;

    use super::{EnumValue, Field, MetaType, PlaceholderMeta, filter_deprecated};

    fn widget_fields() -> Vec<Field> {
        let id = Type::NonNullNamed(literal!("ID"));
        vec![
            Field::new(literal!("id"), id.clone()),
            Field::new(literal!("legacyId"), id.clone()).deprecated(Some(literal!("Use `id`"))),
            Field::new(literal!("name"), Type::Named(literal!("String"))),
            Field::new(literal!("oldName"), Type::Named(literal!("String"))).deprecated(None),
            Field::new(literal!("sku"), id),
        ]
    }

    fn names<'a>(items: impl IntoIterator<Item = &'a Field>) -> Vec<&'a str> {
        items.into_iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn including_deprecated_keeps_everything_in_order() {
        let fields = widget_fields();

        assert_eq!(
            names(filter_deprecated(&fields, true)),
            names(&fields),
        );
    }

    #[test]
    fn excluding_deprecated_keeps_relative_order() {
        let fields = widget_fields();

        assert_eq!(
            names(filter_deprecated(&fields, false)),
            ["id", "name", "sku"],
        );
        assert_eq!(fields.len(), 5, "source must stay untouched");
    }

    #[test]
    fn filtering_is_idempotent() {
        let fields = widget_fields();
        let once = filter_deprecated(&fields, false)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>();
        let twice = filter_deprecated(&once, false);

        assert_eq!(names(twice), names(&once));
    }

    #[test]
    fn filters_enum_values_alike() {
        let values = [
            EnumValue::new(literal!("RED")),
            EnumValue::new(literal!("MAGENTA")).deprecated(None),
            EnumValue::new(literal!("BLUE")),
        ];

        let kept = filter_deprecated(&values, false)
            .into_iter()
            .map(|v| v.name.as_str())
            .collect::<Vec<_>>();

        assert_eq!(kept, ["RED", "BLUE"]);
    }

    #[test]
    fn deprecation_reason_only_exists_when_deprecated() {
        let fields = widget_fields();

        assert_eq!(fields[0].deprecation_status.reason(), None);
        assert_eq!(
            fields[1].deprecation_status.reason().map(|r| r.as_str()),
            Some("Use `id`"),
        );
        assert!(fields[3].deprecation_status.is_deprecated());
        assert_eq!(fields[3].deprecation_status.reason(), None);
    }

    #[test]
    fn placeholders_cannot_be_classified() {
        let placeholder = MetaType::Placeholder(PlaceholderMeta {
            of_type: Type::NonNullNamed(literal!("Ghost")),
        });

        let err = placeholder.type_kind().unwrap_err();

        assert!(err.to_string().contains("Ghost"), "got: {err}");
    }
}
