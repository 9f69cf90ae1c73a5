//! Query-time interpretation of the connector's resolver data.
//!
//! Schema construction is synchronous; value resolution is not. A reference
//! resolver completes once its entity loads resolve, and issuing the loads
//! concurrently is what gives the loader implementation its chance to batch
//! them (the dataloader contract). Resolution order across sibling fields is
//! whatever the executing engine chooses; nothing here depends on it.
//!
//! Failures never propagate: every unresolvable value degrades to null at
//! the field that produced it, leaving sibling fields untouched. A cancelled
//! query simply drops the pending futures; there is nothing to clean up.

use acf_connector_types::{CmsHelpers, ContentKindRegistry, EntityLoader, StoredValueSource, ValueFilter};
use acf_registry::{Discriminator, MetaField, Registry, Resolver, UnionType};
use serde_json::Value;

mod block;
mod reference;
mod transformer;

/// Everything resolver interpretation needs. One per query; shared by
/// reference across field resolutions.
pub struct ResolverContext<'a> {
    pub registry: &'a Registry,
    pub loader: &'a dyn EntityLoader,
    pub kinds: &'a dyn ContentKindRegistry,
    pub helpers: &'a dyn CmsHelpers,
    pub values: &'a dyn StoredValueSource,
    pub value_filter: Option<&'a dyn ValueFilter>,
    /// Emit diagnostics for unresolvable references. Off in production,
    /// where an unresolvable value is a routine null.
    pub debug: bool,
}

/// Resolves one field against its parent value. Infallible by contract:
/// missing and unresolvable values become `Value::Null`.
pub async fn resolve_field(ctx: &ResolverContext<'_>, field: &MetaField, parent: &Value, args: &Value) -> Value {
    match &field.resolver {
        Resolver::Parent => parent.get(&field.name).cloned().unwrap_or(Value::Null),
        Resolver::Transformer(transformer) => transformer::resolve(transformer, parent),
        Resolver::Reference(resolver) => reference::resolve(ctx, resolver, &field.name, parent).await,
        Resolver::Permalink { multiple } => reference::resolve_permalinks(ctx, *multiple, &field.name, parent).await,
        Resolver::Oembed => reference::resolve_oembed(ctx, &field.name, parent, args).await,
        Resolver::BlockFields(resolver) => block::resolve(ctx, resolver, parent),
    }
}

/// Selects a union's member type for a resolved value by evaluating the
/// union's discriminator data.
pub fn resolve_union_member<'a>(union: &'a UnionType, value: &Value) -> Option<&'a str> {
    let member = match &union.discriminator {
        Discriminator::EntityKind(mapping) => value
            .get("__typename")
            .and_then(Value::as_str)
            .and_then(|kind| mapping.get(kind)),
        Discriminator::LayoutTag(mapping) => value
            .get("acf_fc_layout")
            .and_then(Value::as_str)
            .and_then(|layout| mapping.get(layout)),
    };

    member.map(String::as_str)
}
