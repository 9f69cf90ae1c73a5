use acf_connector_types::{EntityId, EntityNamespace};
use acf_registry::ReferenceResolver;
use futures_util::future::join_all;
use serde_json::Value;

use crate::ResolverContext;

/// Resolves a reference field's stored identifier(s) through the entity
/// loader.
pub(crate) async fn resolve(
    ctx: &ResolverContext<'_>,
    resolver: &ReferenceResolver,
    field_name: &str,
    parent: &Value,
) -> Value {
    let Some(stored) = non_empty(parent.get(field_name)) else {
        return Value::Null;
    };

    if resolver.multiple {
        let ids: Vec<EntityId> = as_list(stored).into_iter().filter_map(EntityId::from_value).collect();
        let resolved = join_all(ids.iter().map(|id| resolve_one(ctx, resolver, id))).await;

        Value::Array(resolved)
    } else {
        match normalize_single(stored).and_then(EntityId::from_value) {
            Some(id) => resolve_one(ctx, resolver, &id).await,
            None => Value::Null,
        }
    }
}

pub(crate) async fn resolve_permalinks(
    ctx: &ResolverContext<'_>,
    multiple: bool,
    field_name: &str,
    parent: &Value,
) -> Value {
    let Some(stored) = non_empty(parent.get(field_name)) else {
        return Value::Null;
    };

    if multiple {
        let ids: Vec<EntityId> = as_list(stored).into_iter().filter_map(EntityId::from_value).collect();
        let links = join_all(ids.iter().map(|id| ctx.helpers.permalink(id))).await;

        Value::Array(links.into_iter().map(|link| link.map(Value::String).unwrap_or(Value::Null)).collect())
    } else {
        match normalize_single(stored).and_then(EntityId::from_value) {
            Some(id) => ctx.helpers.permalink(&id).await.map(Value::String).unwrap_or(Value::Null),
            None => Value::Null,
        }
    }
}

pub(crate) async fn resolve_oembed(
    ctx: &ResolverContext<'_>,
    field_name: &str,
    parent: &Value,
    args: &Value,
) -> Value {
    let Some(url) = non_empty(parent.get(field_name)).and_then(Value::as_str) else {
        return Value::Null;
    };

    let width = args.get("width").and_then(Value::as_u64);
    let height = args.get("height").and_then(Value::as_u64);

    ctx.helpers
        .oembed_html(url, width, height)
        .await
        .map(Value::String)
        .unwrap_or(Value::Null)
}

// A stored reference is absent when unset, null, or the empty string the
// storage layer writes for cleared fields. Short-circuits before any loader
// call.
fn non_empty(value: Option<&Value>) -> Option<&Value> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) if raw.is_empty() => None,
        Some(value) => Some(value),
    }
}

fn as_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}

/// Single-valued fields may still find their identifier wrapped in an
/// array: legacy storage of the field system. The expected shape is a
/// scalar identifier or a single-element collection; when more elements are
/// present, the first one wins, deterministically.
fn normalize_single(value: &Value) -> Option<&Value> {
    match value {
        Value::Array(items) => items.first(),
        other => Some(other),
    }
}

async fn resolve_one(ctx: &ResolverContext<'_>, resolver: &ReferenceResolver, id: &EntityId) -> Value {
    let namespace = resolver.namespace;

    if let Some(exposed) = exposed_kinds(ctx, namespace) {
        let Some(kind) = ctx.loader.entity_kind(namespace, id).await else {
            return Value::Null;
        };

        if !exposed.contains(&kind) {
            if ctx.debug {
                tracing::warn!(
                    "field {} will not be resolved since content kind {kind} is not exposed in the schema",
                    resolver.field_key,
                );
            }
            return Value::Null;
        }
    }

    load_tagged(ctx, namespace, id, &resolver.field_key).await
}

// Post and term references are gated on kind exposure before loading; user
// and media targets are fixed types with no gate.
fn exposed_kinds(ctx: &ResolverContext<'_>, namespace: EntityNamespace) -> Option<Vec<String>> {
    match namespace {
        EntityNamespace::Post => Some(ctx.kinds.allowed_post_types()),
        EntityNamespace::Term => Some(ctx.kinds.allowed_taxonomies()),
        EntityNamespace::User | EntityNamespace::Media => None,
    }
}

// Loads the entity and tags its JSON with the raw content kind under
// `__typename`, which is what entity-kind union discrimination reads.
async fn load_tagged(ctx: &ResolverContext<'_>, namespace: EntityNamespace, id: &EntityId, field_key: &str) -> Value {
    match ctx.loader.load_entity(namespace, id).await {
        Ok(Some(entity)) => {
            let mut data = entity.data;
            if let Value::Object(map) = &mut data {
                map.insert("__typename".to_string(), Value::String(entity.kind));
            }
            data
        }
        Ok(None) => Value::Null,
        Err(error) => {
            if ctx.debug {
                tracing::warn!("field {field_key} failed to load entity {id}: {error}");
            }
            Value::Null
        }
    }
}
