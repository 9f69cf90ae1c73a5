//! Data structures for resolvers.
//!
//! Nothing here executes; the engine crate interprets these values at query
//! time against the parent object and the external data-loading layer.

use acf_connector_types::{EntityNamespace, FieldDefinition};

/// How a generated field obtains its value.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Resolver {
    /// Read the parent object's property matching the field name.
    #[default]
    Parent,
    Transformer(Transformer),
    Reference(ReferenceResolver),
    /// Resolve the stored post identifier(s) to permalink string(s).
    Permalink { multiple: bool },
    /// Fetch embed markup for the stored URL.
    Oembed,
    BlockFields(BlockFieldsResolver),
}

impl Resolver {
    pub fn is_parent(&self) -> bool {
        matches!(self, Resolver::Parent)
    }
}

/// Value transforms that never leave the parent object.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Transformer {
    /// Select a property of the parent object.
    Select { key: String },
    /// Select a property and coerce it to a float. Empty or missing values
    /// resolve to null; unparsable values coerce to `0.0`, matching the
    /// storage layer's numeric-coercion contract.
    FloatCoercion { key: String },
}

/// Defers to the entity loader for one or many stored identifiers.
///
/// The engine tags every loaded value with its raw content kind under
/// `__typename` so a union's [`Discriminator::EntityKind`](crate::Discriminator)
/// can route it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceResolver {
    pub namespace: EntityNamespace,
    pub multiple: bool,
    /// The source field's stable key, for diagnostics.
    pub field_key: String,
}

/// Assembles a block instance's field values from the stored-value source,
/// applying the host's value filter per field.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlockFieldsResolver {
    /// The generated object type this resolver feeds.
    pub type_name: String,
    /// The flattened field definitions captured at build time.
    pub fields: Vec<FieldDefinition>,
}

impl From<Transformer> for Resolver {
    fn from(transformer: Transformer) -> Resolver {
        Resolver::Transformer(transformer)
    }
}

impl From<ReferenceResolver> for Resolver {
    fn from(resolver: ReferenceResolver) -> Resolver {
        Resolver::Reference(resolver)
    }
}

impl From<BlockFieldsResolver> for Resolver {
    fn from(resolver: BlockFieldsResolver) -> Resolver {
        Resolver::BlockFields(resolver)
    }
}
