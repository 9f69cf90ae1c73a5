//! The generated-type model of the ACF GraphQL connector.
//!
//! One [`Registry`] holds every type synthesized during a schema build,
//! keyed by its globally unique name. Resolver *data* lives here as plain
//! serializable values; resolver *logic* lives in the engine crate.

use std::collections::BTreeMap;

mod export_sdl;
mod field_types;
mod fields;
mod resolvers;
mod types;

pub use field_types::MetaFieldType;
pub use fields::{MetaField, MetaInputValue};
pub use resolvers::{BlockFieldsResolver, ReferenceResolver, Resolver, Transformer};
pub use types::{Discriminator, EnumType, MetaEnumValue, MetaType, ObjectType, ScalarType, UnionType};

/// All types generated during one schema build. Append-only for the
/// duration of the build; builds are assumed non-overlapping.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Registry {
    pub types: BTreeMap<String, MetaType>,
}

/// Outcome of registering a type under a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRegistration {
    Created,
    /// The name was already registered with an identical definition; the
    /// registration was an idempotent no-op.
    Identical,
    /// The name was already registered with a different definition. The
    /// first definition is kept; callers surface this as a build
    /// diagnostic rather than letting the later registration win silently.
    Conflicting,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// Registers a type under its own name.
    pub fn insert_type(&mut self, ty: impl Into<MetaType>) -> TypeRegistration {
        let ty = ty.into();
        match self.types.get(ty.name()) {
            None => {
                self.types.insert(ty.name().to_string(), ty);
                TypeRegistration::Created
            }
            Some(existing) if *existing == ty => TypeRegistration::Identical,
            Some(_) => TypeRegistration::Conflicting,
        }
    }

    pub fn lookup_type(&self, name: &str) -> Option<&MetaType> {
        self.types.get(name)
    }
}
