//! Externally-owned data model and collaborator interfaces of the ACF
//! GraphQL connector.
//!
//! Everything in this crate describes systems the connector talks to but does
//! not own: the field-group definitions authored in the custom-fields admin,
//! the content-kind registry of the wider GraphQL schema, and the
//! data-loading layer resolvers defer to at query time.

mod field_definition;
mod loader;
mod store;

pub use field_definition::{FieldDefinition, FieldGroup, FieldKind, LayoutDefinition, TaxonomyFieldType};
pub use loader::{CmsHelpers, Entity, EntityId, EntityLoader, EntityNamespace, LoaderError, LoaderResult};
pub use store::{ContentKindRegistry, FieldGroupStore, StoredValueSource, ValueFilter};
