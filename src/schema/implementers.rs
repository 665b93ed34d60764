//! Reverse index of interface implementations.

use arcstr::ArcStr;
use fnv::FnvHashMap;

use crate::schema::meta::{MetaType, ObjectMeta};

/// Mapping from an interface name to the object types implementing it.
///
/// Objects only store the inverse relationship, so finding the implementers
/// of an interface would require a scan over the whole schema. The index
/// gathers them all at once when the schema is closed, after which every
/// lookup is a single hash access. It must be rebuilt if the types change,
/// which a closed schema never does.
#[derive(Clone, Debug, Default)]
pub struct ImplementationIndex {
    implementers: FnvHashMap<ArcStr, Vec<ArcStr>>,
}

impl ImplementationIndex {
    /// Builds the index by scanning the declared interfaces of every object
    /// type in `types`.
    ///
    /// Implementers are kept in the order of `types`.
    pub fn build<'a>(types: impl IntoIterator<Item = &'a MetaType>) -> Self {
        let mut implementers = FnvHashMap::<ArcStr, Vec<ArcStr>>::default();
        for ty in types {
            let MetaType::Object(ObjectMeta {
                name,
                interface_names,
                ..
            }) = ty
            else {
                continue;
            };
            for interface in interface_names {
                let objects = implementers.entry(interface.clone()).or_default();
                // An object listing an interface twice still implements it once.
                if !objects.contains(name) {
                    objects.push(name.clone());
                }
            }
        }

        __introspection_trace!(
            interfaces = implementers.len(),
            "built implementation index"
        );

        Self { implementers }
    }

    /// Names of the object types implementing the interface `name`, in
    /// schema order.
    ///
    /// Empty if nothing implements it, or if there is no such interface.
    pub fn lookup(&self, name: &str) -> &[ArcStr] {
        self.implementers
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of interfaces having at least one implementer.
    pub fn len(&self) -> usize {
        self.implementers.len()
    }

    /// Whether no interface has any implementer.
    pub fn is_empty(&self) -> bool {
        self.implementers.is_empty()
    }
}
