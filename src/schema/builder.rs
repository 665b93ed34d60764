//! Open phase of a schema.

use arcstr::ArcStr;

use crate::{
    ast::Type,
    error::SchemaError,
    introspection,
    schema::{
        implementers::ImplementationIndex, meta::MetaType, model::SchemaType, registry::Registry,
    },
    types::scalars::register_builtin_scalars,
};

/// Builder of a [`SchemaType`]
///
/// Host types are registered through [`SchemaBuilder::registry()`] in any
/// order, referring to each other by name. [`SchemaBuilder::finish()`] adds
/// the built-in scalars and the introspection meta-types, then closes the
/// schema.
#[derive(Debug)]
pub struct SchemaBuilder {
    registry: Registry,
    description: Option<ArcStr>,
    query_type_name: ArcStr,
    mutation_type_name: Option<ArcStr>,
    subscription_type_name: Option<ArcStr>,
}

impl SchemaBuilder {
    /// Starts a schema whose query operations are rooted at the object type
    /// `query_type_name`.
    pub fn new(query_type_name: impl Into<ArcStr>) -> Self {
        Self {
            registry: Registry::new(),
            description: None,
            query_type_name: query_type_name.into(),
            mutation_type_name: None,
            subscription_type_name: None,
        }
    }

    /// Sets the `description` of the schema.
    #[must_use]
    pub fn description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Roots mutation operations at the object type `name`.
    #[must_use]
    pub fn mutation_type(mut self, name: impl Into<ArcStr>) -> Self {
        self.mutation_type_name = Some(name.into());
        self
    }

    /// Roots subscription operations at the object type `name`.
    #[must_use]
    pub fn subscription_type(mut self, name: impl Into<ArcStr>) -> Self {
        self.subscription_type_name = Some(name.into());
        self
    }

    /// Registry the host types are registered into.
    pub fn registry(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Shortcut for [`Registry::register()`].
    ///
    /// # Errors
    ///
    /// See [`Registry::register()`].
    pub fn register(&mut self, meta: MetaType) -> Result<Type, SchemaError> {
        self.registry.register(meta)
    }

    /// Closes the schema.
    ///
    /// # Errors
    ///
    /// - If a referenced type was never registered.
    /// - If a root operation type is missing, or not an object type.
    /// - If a host type clashes with an introspection meta-type.
    pub fn finish(self) -> Result<SchemaType, SchemaError> {
        let Self {
            mut registry,
            description,
            query_type_name,
            mutation_type_name,
            subscription_type_name,
        } = self;

        register_builtin_scalars(&mut registry)?;
        let root_fields = introspection::register_meta_types(&mut registry)?;
        let implementers = ImplementationIndex::build(registry.types.values());

        let schema = SchemaType {
            description,
            types: registry.types,
            query_type_name,
            mutation_type_name,
            subscription_type_name,
            root_fields,
            implementers,
        };
        schema.check_closed()?;

        __introspection_trace_debug!(
            types = schema.types.len(),
            interfaces = schema.implementers.len(),
            "schema closed"
        );

        Ok(schema)
    }
}
