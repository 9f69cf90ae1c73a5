use std::fmt;

use serde_json::Value;

/// Identifier of a CMS entity. Stored field values carry identifiers as
/// integers, numeric strings or whole serialized objects; all of them
/// normalize into this newtype.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        EntityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts an identifier from a stored value. Accepts bare integers,
    /// non-empty strings and object-shaped values carrying an `id` property.
    pub fn from_value(value: &Value) -> Option<EntityId> {
        match value {
            Value::Number(number) => Some(EntityId(number.to_string())),
            Value::String(id) if !id.is_empty() => Some(EntityId(id.clone())),
            Value::Object(map) => map.get("id").and_then(EntityId::from_value),
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The object graphs reference fields can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityNamespace {
    Post,
    Term,
    User,
    Media,
}

/// A loaded CMS entity. `kind` is the entity's concrete content kind (post
/// type, taxonomy name, ...) and is what union discrimination keys on.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: String,
    pub data: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum LoaderError {
    #[error("{0}")]
    AnyError(String),
}

impl LoaderError {
    pub fn any(error: impl ToString) -> Self {
        LoaderError::AnyError(error.to_string())
    }
}

pub type LoaderResult<T> = Result<T, LoaderError>;

/// Access to the CMS object graph.
///
/// `load_entity` is the deferred handle of the resolution model: the engine
/// issues one call per identifier and awaits them concurrently, so
/// implementations are expected to coalesce in-flight loads into batched
/// fetches (the classic dataloader contract). The batching itself is the
/// implementation's concern, never this crate's.
#[async_trait::async_trait]
pub trait EntityLoader: Send + Sync {
    /// The concrete content kind of an entity, or `None` when the entity
    /// does not exist. Expected to be cheap relative to `load_entity`.
    async fn entity_kind(&self, namespace: EntityNamespace, id: &EntityId) -> Option<String>;

    async fn load_entity(&self, namespace: EntityNamespace, id: &EntityId) -> LoaderResult<Option<Entity>>;
}

/// CMS helper lookups that are neither entity loads nor stored values.
#[async_trait::async_trait]
pub trait CmsHelpers: Send + Sync {
    /// Public permalink of a content object.
    async fn permalink(&self, id: &EntityId) -> Option<String>;

    /// Embed markup for a URL, as the CMS oEmbed proxy renders it.
    async fn oembed_html(&self, url: &str, width: Option<u64>, height: Option<u64>) -> Option<String>;
}
