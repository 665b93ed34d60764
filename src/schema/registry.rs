//! Registry of named types.

use arcstr::ArcStr;
use indexmap::IndexMap;

use crate::{
    ast::Type,
    error::SchemaError,
    schema::meta::{Argument, Field, MetaType, PlaceholderMeta},
    types::name::Name,
};

/// Types of a schema under construction
///
/// Types may be referenced before they are registered. Such references are
/// backed by placeholder entries, which the registration of the actual type
/// replaces.
#[derive(Debug, Default)]
pub struct Registry {
    pub(crate) types: IndexMap<Name, MetaType>,
}

impl Registry {
    /// Construct a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the `Type` literal referring to the named type `name`
    ///
    /// The type doesn't need to be registered yet, but it must be before the
    /// schema is closed.
    ///
    /// # Errors
    ///
    /// If `name` is not a valid GraphQL name.
    pub fn named(&mut self, name: &str) -> Result<Type, SchemaError> {
        let name = name.parse::<Name>()?;
        let ty = Type::Named(name.as_arcstr().clone());
        self.insert_placeholder(name);
        Ok(ty)
    }

    /// Registers the metadata of a named type
    ///
    /// Returns the `Type` literal referring to it. Every type it references
    /// which is not registered yet gets a placeholder.
    ///
    /// # Errors
    ///
    /// - If a type with the same name is already registered.
    /// - If the type, or any type it references, has an invalid name.
    /// - If `meta` is a placeholder itself.
    pub fn register(&mut self, meta: MetaType) -> Result<Type, SchemaError> {
        let Some(name) = meta.name().cloned() else {
            return Err(SchemaError::UnclassifiableType(meta.to_string()));
        };
        let name = Name::try_from(name)?;
        let referenced = meta
            .referenced_names()
            .into_iter()
            .filter(|r| r.as_str() != name.as_str())
            .map(|r| Name::try_from(r.clone()))
            .collect::<Result<Vec<_>, _>>()?;

        match self.types.get(&name) {
            // Moved to the end, so types stay in registration order.
            Some(MetaType::Placeholder(_)) => {
                self.types.shift_remove(&name);
            }
            Some(_) => return Err(SchemaError::DuplicateType(name.as_arcstr().clone())),
            None => {}
        }

        for r in referenced {
            self.insert_placeholder(r);
        }

        __introspection_trace!(name = name.as_str(), kind = %meta, "registering type");

        let ty = Type::Named(name.as_arcstr().clone());
        self.types.insert(name, meta);
        Ok(ty)
    }

    /// Create a field with the provided name
    ///
    /// Its types are not looked at until the owning type is registered.
    pub fn field(&self, name: &str, field_type: Type) -> Field {
        Field::new(ArcStr::from(name), field_type)
    }

    /// Create an argument with the provided name
    pub fn arg(&self, name: &str, arg_type: Type) -> Argument {
        Argument::new(ArcStr::from(name), arg_type)
    }

    /// Metadata registered under `name`, placeholders included.
    pub fn get(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }

    /// Whether a type is registered under `name`.
    ///
    /// Placeholders don't count.
    pub fn is_registered(&self, name: &str) -> bool {
        self.types
            .get(name)
            .is_some_and(|t| !matches!(t, MetaType::Placeholder(_)))
    }

    /// Names referenced so far, but not registered yet.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.types.iter().filter_map(|(name, t)| match t {
            MetaType::Placeholder(_) => Some(name.as_str()),
            _ => None,
        })
    }

    fn insert_placeholder(&mut self, name: Name) {
        if !self.types.contains_key(&name) {
            __introspection_trace!(name = name.as_str(), "inserting placeholder");

            let of_type = Type::NonNullNamed(name.as_arcstr().clone());
            self.types
                .insert(name, MetaType::Placeholder(PlaceholderMeta { of_type }));
        }
    }
}

#[cfg(test)]
mod tests {
    use arcstr::literal;
    use pretty_assertions::assert_eq;

    use crate::{
        ast::Type,
        error::SchemaError,
        schema::meta::{InterfaceMeta, ObjectMeta, ScalarMeta},
    };

    use super::Registry;

    fn names(registry: &Registry) -> Vec<&str> {
        registry.types.keys().map(|n| n.as_str()).collect()
    }

    #[test]
    fn named_references_insert_placeholders() {
        let mut registry = Registry::new();

        let ty = registry.named("Widget").unwrap();

        assert_eq!(ty, Type::Named(literal!("Widget")));
        assert!(!registry.is_registered("Widget"));
        assert_eq!(registry.placeholders().collect::<Vec<_>>(), ["Widget"]);
    }

    #[test]
    fn registration_replaces_placeholders_in_order() {
        let mut registry = Registry::new();
        let node = registry.named("Node").unwrap();
        let id = registry.named("ID").unwrap();
        let widget = registry.field("id", id.non_null());

        registry
            .register(
                ObjectMeta::new(literal!("Widget"), &[widget.clone()])
                    .interfaces(&[node])
                    .into_meta(),
            )
            .unwrap();
        registry
            .register(InterfaceMeta::new(literal!("Node"), &[widget]).into_meta())
            .unwrap();
        registry
            .register(ScalarMeta::new(literal!("ID")).into_meta())
            .unwrap();

        assert_eq!(names(&registry), ["Widget", "Node", "ID"]);
        assert_eq!(registry.placeholders().count(), 0);
    }

    #[test]
    fn registration_references_unknown_types() {
        let mut registry = Registry::new();
        let field = registry.field("parent", Type::Named(literal!("Widget")));
        let other = registry.field("tag", Type::Named(literal!("Tag")).list());

        registry
            .register(ObjectMeta::new(literal!("Widget"), &[field, other]).into_meta())
            .unwrap();

        assert_eq!(registry.placeholders().collect::<Vec<_>>(), ["Tag"]);
        assert!(registry.is_registered("Widget"));
    }

    #[test]
    fn fields_and_args_wait_for_registration() {
        let registry = Registry::new();

        let field = registry
            .field("widget", Type::Named(literal!("Widget")))
            .argument(registry.arg("id", Type::NonNullNamed(literal!("ID"))));

        assert_eq!(field.name.as_str(), "widget");
        assert_eq!(field.arguments.map(|a| a.len()), Some(1));
        assert!(names(&registry).is_empty());
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut registry = Registry::new();
        registry
            .register(ScalarMeta::new(literal!("Date")).into_meta())
            .unwrap();

        let err = registry
            .register(ScalarMeta::new(literal!("Date")).into_meta())
            .unwrap_err();

        assert_eq!(err, SchemaError::DuplicateType(literal!("Date")));
    }

    #[test]
    fn invalid_names_are_rejected() {
        let mut registry = Registry::new();

        assert!(matches!(
            registry.named("not-a-name"),
            Err(SchemaError::InvalidName(_)),
        ));
        assert!(matches!(
            registry.register(ScalarMeta::new(literal!("4Date")).into_meta()),
            Err(SchemaError::InvalidName(_)),
        ));
        assert!(names(&registry).is_empty());
    }

    #[test]
    fn placeholders_cannot_be_registered() {
        let mut registry = Registry::new();
        registry.named("Ghost").unwrap();
        let placeholder = registry.types.shift_remove("Ghost").unwrap();

        assert!(matches!(
            registry.register(placeholder),
            Err(SchemaError::UnclassifiableType(_)),
        ));
        assert!(registry.get("Ghost").is_none());
    }
}
