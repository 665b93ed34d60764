use arcstr::literal;

use crate::{
    error::SchemaError,
    schema::{meta::ScalarMeta, registry::Registry},
};

/// Registers the scalars every GraphQL schema provides.
///
/// A scalar already registered under one of these names is kept as is.
pub(crate) fn register_builtin_scalars(registry: &mut Registry) -> Result<(), SchemaError> {
    let scalars = [
        ScalarMeta::new(literal!("String")).description(literal!(
            "The `String` scalar type represents textual data, represented as UTF-8 \
             character sequences. The String type is most often used by GraphQL to \
             represent free-form human-readable text."
        )),
        ScalarMeta::new(literal!("Boolean"))
            .description(literal!("The `Boolean` scalar type represents `true` or `false`.")),
        ScalarMeta::new(literal!("Int")).description(literal!(
            "The `Int` scalar type represents non-fractional signed whole numeric values. \
             Int can represent values between -(2^31) and 2^31 - 1."
        )),
        ScalarMeta::new(literal!("Float")).description(literal!(
            "The `Float` scalar type represents signed double-precision fractional values \
             as specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point)."
        )),
        ScalarMeta::new(literal!("ID")).description(literal!(
            "The `ID` scalar type represents a unique identifier, often used to refetch \
             an object or as key for a cache. The ID type appears in a JSON response as \
             a String; however, it is not intended to be human-readable. When expected \
             as an input type, any string (such as `\"4\"`) or integer (such as `4`) \
             input value will be accepted as an ID."
        )),
    ];

    for scalar in scalars {
        if !registry.is_registered(&scalar.name) {
            registry.register(scalar.into_meta())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use arcstr::literal;

    use crate::schema::{
        meta::{MetaType, ScalarMeta},
        registry::Registry,
    };

    use super::register_builtin_scalars;

    #[test]
    fn registers_all_five() {
        let mut registry = Registry::new();

        register_builtin_scalars(&mut registry).unwrap();

        for name in ["String", "Boolean", "Int", "Float", "ID"] {
            assert!(
                matches!(registry.get(name), Some(MetaType::Scalar(_))),
                "{name} missing",
            );
        }
    }

    #[test]
    fn keeps_host_provided_scalars() {
        let mut registry = Registry::new();
        registry
            .register(
                ScalarMeta::new(literal!("ID"))
                    .description(literal!("Opaque"))
                    .into_meta(),
            )
            .unwrap();

        register_builtin_scalars(&mut registry).unwrap();

        assert_eq!(
            registry
                .get("ID")
                .and_then(MetaType::description)
                .map(|d| d.as_str()),
            Some("Opaque"),
        );
    }
}
